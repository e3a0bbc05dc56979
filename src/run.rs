//! Application execution logic.
//!
//! Wires the validated catalog to the generator and runs the chosen
//! mode: HTTP serving (default) or one-shot rendering to stdout.

use std::sync::Arc;

use thiserror::Error;

use mt_addrlist::config::{Cli, Command, ValidatedConfig};
use mt_addrlist::generator::{GenerateError, Generator};
use mt_addrlist::server;
use mt_addrlist::source::ReqwestFetcher;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    /// Server failed to bind or run.
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    /// A render-mode generation failed.
    #[error("Generation failed: {0}")]
    Generate(#[from] GenerateError),
}

/// Executes the selected mode against the validated catalog.
///
/// # Errors
///
/// Returns a [`RunError`] when the HTTP client cannot be built, the
/// server fails, or a render-mode generation fails.
pub async fn execute(cli: &Cli, config: ValidatedConfig) -> Result<(), RunError> {
    let generator = Arc::new(Generator::new(Arc::new(config), ReqwestFetcher::new()?));

    match &cli.command {
        None => {
            server::serve(generator, &cli.listen).await?;
            Ok(())
        }
        Some(Command::Render { list }) => render(&generator, list.as_deref()).await,
        // Init and Check never reach execute; main handles them.
        Some(Command::Check | Command::Init { .. }) => Ok(()),
    }
}

/// Renders one list (or the whole catalog) to stdout.
async fn render(
    generator: &Generator<ReqwestFetcher>,
    list: Option<&str>,
) -> Result<(), RunError> {
    match list {
        Some(name) => {
            let script = generator.generate_list(name).await?;
            print!("{script}");
            Ok(())
        }
        None => {
            let report = generator.generate_all().await;
            let output = report.concatenated();
            report.into_strict()?;
            print!("{output}");
            Ok(())
        }
    }
}
