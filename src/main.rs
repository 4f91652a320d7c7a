use anyhow::Result;
use clap::{Parser, Subcommand};

use gastozero::cli::{
    handle_entry_command, handle_export_command, handle_summary_command, EntryCommands,
    ExportCommands,
};
use gastozero::config::paths::GastoPaths;
use gastozero::models::{suggested_concepts, EntryKind};
use gastozero::storage::Storage;

#[derive(Parser)]
#[command(
    name = "gastozero",
    version,
    about = "Personal income and expense tracker",
    long_about = "GastoZero is a terminal-based personal finance tracker. It keeps \
                  your monthly incomes and expenses in two plain JSON files, shows \
                  a month balance at a glance and exports printable reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income management commands
    #[command(subcommand, alias = "in")]
    Income(EntryCommands),

    /// Expense management commands
    #[command(subcommand, alias = "out")]
    Expense(EntryCommands),

    /// Show the month summary (incomes, expenses, balance)
    Summary {
        /// Month to summarize (YYYY-MM, defaults to current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export a report to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// List suggested concepts
    Concepts {
        /// Restrict to one kind: income or expense
        kind: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn print_concepts(kind: EntryKind) {
    println!("{}:", kind.plural_label());
    for concept in suggested_concepts(kind) {
        println!("  - {}", concept);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage
    let paths = GastoPaths::new()?;
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_entry_command(&storage, EntryKind::Income, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_entry_command(&storage, EntryKind::Expense, cmd)?;
        }
        Some(Commands::Summary { month }) => {
            handle_summary_command(&storage, month.as_deref())?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Concepts { kind }) => match kind.as_deref() {
            Some("income" | "ingresos") => print_concepts(EntryKind::Income),
            Some("expense" | "gastos") => print_concepts(EntryKind::Expense),
            Some(other) => {
                anyhow::bail!("Unknown kind '{}' (expected 'income' or 'expense')", other)
            }
            None => {
                print_concepts(EntryKind::Income);
                println!();
                print_concepts(EntryKind::Expense);
            }
        },
        Some(Commands::Config) => {
            println!("GastoZero Configuration");
            println!("=======================");
            println!("Data directory: {}", paths.data_dir().display());
            println!("Incomes file:   {}", paths.incomes_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
        }
        None => {
            println!("GastoZero - Personal income and expense tracker");
            println!();
            println!("Run 'gastozero --help' for usage information.");
            println!("Run 'gastozero summary' to see this month's balance.");
        }
    }

    Ok(())
}
