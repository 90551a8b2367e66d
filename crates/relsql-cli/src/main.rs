//! relsql CLI
//!
//! Compiles JSON-encoded expression and relation trees into SQL.

mod input;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use relsql_core::{Compiler, Dialect};

use crate::input::{Document, build_dialect};
use crate::output::{write_fragment, write_operator};

/// Compile query trees into dialect-specific SQL.
#[derive(Parser)]
#[command(name = "relsql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL dialect (generic, sqlite, postgres).
    #[arg(short, long, env = "RELSQL_DIALECT", default_value = "generic")]
    dialect: String,

    /// JSON operator table layered over the dialect.
    #[arg(short, long, env = "RELSQL_OPERATORS")]
    operators: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a relation or expression document to SQL.
    Compile {
        /// Input JSON file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Show how the dialect renders operator symbols.
    Operators {
        /// Operator symbols to look up.
        #[arg(required = true)]
        symbols: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = build_dialect(&cli.dialect, cli.operators.as_deref())?;
    debug!(dialect = dialect.name(), "Dialect ready");

    match cli.command {
        Commands::Compile { input } => {
            let compiler = Compiler::with_dialect(dialect);
            let fragment = match Document::load(&input)? {
                Document::Relation(relation) => compiler.compile_relation(&relation),
                Document::Expression(expr) => compiler.compile_expression(&expr),
            };
            write_fragment(fragment, &mut std::io::stdout(), &mut std::io::stderr())?;
        }

        Commands::Operators { symbols } => {
            let mut out = std::io::stdout();
            for symbol in &symbols {
                write_operator(dialect.as_ref(), symbol, &mut out)?;
            }
        }
    }

    Ok(())
}
