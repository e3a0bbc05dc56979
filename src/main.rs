//! mt-addrlist: MikroTik address-list script generator
//!
//! Entry point for the mt-addrlist binary.

use std::process::ExitCode;

use mt_addrlist::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand before any config loading
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    if matches!(cli.command, Some(Command::Check)) {
        println!(
            "Configuration OK: {} list(s) in {}",
            config.lists.len(),
            cli.config.display()
        );
        return exit_code::SUCCESS;
    }

    setup_tracing(cli.verbose);
    tracing::info!("{config}");

    run_application(&cli, config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs serve or render mode on a fresh Tokio runtime.
fn run_application(cli: &Cli, config: ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(cli, config)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
