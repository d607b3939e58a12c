mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod utils;

use crate::cli::{AlignmentOverrides, Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use std::io::IsTerminal;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("protscope CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let show_progress = !cli.quiet && std::io::stderr().is_terminal();
    let config_path = config::resolve_config_path(cli.config.as_deref());
    let no_overrides = AlignmentOverrides::default();
    let overrides = match &cli.command {
        Commands::Compare(args) => &args.alignment,
        _ => &no_overrides,
    };
    info!("Merging configuration from file, --set values and CLI arguments...");
    let config = config::build_config(config_path.as_deref(), &cli.set_values, overrides)?;

    let command_result = match cli.command {
        Commands::Lookup(args) => {
            info!("Dispatching to 'lookup' command.");
            commands::lookup::run(args, config, show_progress)
        }
        Commands::Analyze(args) => {
            info!("Dispatching to 'analyze' command.");
            commands::analyze::run(args, show_progress)
        }
        Commands::Compare(args) => {
            info!("Dispatching to 'compare' command.");
            commands::compare::run(args, config, show_progress)
        }
        Commands::Shell => {
            info!("Dispatching to 'shell' command.");
            commands::shell::run(config, show_progress)
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }

    command_result
}
