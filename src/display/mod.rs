//! Terminal display layer
//!
//! Formatting helpers and the ANSI rendering backend for reports and the
//! month summary panel.

pub mod table;

pub use table::{render_report, render_summary};

/// ANSI bold
pub const BOLD: &str = "\x1b[1m";
/// ANSI reset
pub const RESET: &str = "\x1b[0m";

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: crate::models::Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount) // Green for positive
    } else {
        amount.to_string()
    }
}

/// Center text in a field of given width
pub fn center_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), s)
    }
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_alignment() {
        assert_eq!(right_align("abc", 5), "  abc");
        assert_eq!(left_align("abc", 5), "abc  ");
        assert_eq!(center_align("abc", 7), "  abc  ");
        assert_eq!(center_align("abc", 6), " abc  ");
    }

    #[test]
    fn test_alignment_counts_chars_not_bytes() {
        // "1.234,50 €" is 10 chars but more bytes
        assert_eq!(right_align("€", 3), "  €");
    }

    #[test]
    fn test_colored_money() {
        assert!(format_money_colored(Money::from_cents(100)).contains("\x1b[32m"));
        assert!(format_money_colored(Money::from_cents(-100)).contains("\x1b[31m"));
        assert_eq!(format_money_colored(Money::zero()), "0,00 €");
    }
}
