//! Error handling utilities for the CLI.

use primer::{RenderConfig, render_error_to};

/// Errors a command can end with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Primer(#[from] primer::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    match error {
        CliError::Primer(error) => {
            let config = RenderConfig {
                color: !no_color,
                ..Default::default()
            };
            render_error_to(&error, &mut std::io::stderr(), &config).ok();
        }
        CliError::Io(err) => eprintln!("primer: failed to write output: {err}"),
    }
    std::process::exit(1);
}
