use clap::Parser;
use docket::cli::commands::Cli;
use docket::cli::handlers;
use docket::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let path = cli.file.unwrap_or_else(|| config.storage.file.clone());

    match cli.command {
        None => {
            // No subcommand → launch TUI; it only logs when a log file is configured
            if let Some(log_file) = &config.log.file {
                logging::init_file(&config.log.level, log_file)?;
            }
            docket::tui::run(&config, &path)
        }
        Some(command) => {
            logging::init_stderr(&logging::cli_level(&config.log.level, cli.verbose))?;
            handlers::dispatch(command, &path, cli.json)
        }
    }
}
