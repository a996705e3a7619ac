use big7_ledger::args::{Args, Command};
use big7_ledger::{commands, gate, Config, RecordStore, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");

    // The gate runs before anything touches the ledger.
    gate::check(args.common().password())?;

    let config = Config::new(args.common().big7_home().path())?;
    let mut store = RecordStore::load(config.records_path());

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Add(add_args) => commands::add(&mut store, add_args.clone())?.print(),

        Command::Dashboard => commands::dashboard(&store)?.print(),

        Command::List => commands::list(&store)?.print(),

        Command::Export(export_args) => commands::export(&store, export_args.clone())?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "big7_ledger={},{}={}",
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
