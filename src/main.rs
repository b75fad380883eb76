use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kakeibo::cli::{handle_config_command, handle_format_command, handle_parse_command, Session};
use kakeibo::config::{KakeiboPaths, Settings};

#[derive(Parser)]
#[command(
    name = "kakeibo",
    version,
    about = "In-memory household ledger",
    long_about = "kakeibo records expenses and incomes for the length of a session, \
                  keeps the running balance, and shows history grouped by day, \
                  newest first. Nothing is written to disk unless you export it."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive ledger session (the default)
    Session,

    /// Format an amount as yen text
    Format {
        /// Amount in yen
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Use input-field formatting (zero and negatives print empty)
        #[arg(long)]
        input: bool,
    },

    /// Show the amount a piece of text parses to
    Parse {
        /// Text to sanitize, e.g. "¥1,500"
        text: String,
    },

    /// Show current configuration and paths
    Config,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = KakeiboPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            let mut session = Session::new(settings);
            session.run(stdin.lock(), &mut stdout, prompt)?;
        }
        Commands::Format { amount, input } => {
            handle_format_command(amount, input, &mut stdout)?;
        }
        Commands::Parse { text } => {
            handle_parse_command(&text, &mut stdout)?;
        }
        Commands::Config => {
            handle_config_command(&paths, &settings, &mut stdout)?;
        }
    }

    Ok(())
}
