//! Command dispatch

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Load settings, render the input and print the result.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let local_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("resolve current directory", e))?,
    };
    if !local_dir.is_dir() {
        return Err(CliError::InvalidArgs(format!(
            "config dir is not a directory: {}",
            local_dir.display()
        )));
    }

    let settings = apply_flags(cli, Settings::load(Some(&local_dir))?);
    debug!("settings: {:?}", settings);

    let container = ServiceContainer::new(settings);
    let text = run(cli, &container)?;
    output::info(&text);
    Ok(())
}

/// Command-line flags only switch options on (or the root off).
pub fn apply_flags(cli: &Cli, mut settings: Settings) -> Settings {
    if let Some(charset) = &cli.charset {
        settings.charset = charset.clone();
    }
    if cli.trailing_slash {
        settings.trailing_slash = true;
    }
    if cli.full_path {
        settings.full_path = true;
    }
    if cli.no_root {
        settings.root_dot = false;
    }
    settings
}

/// Produce the output text without printing it.
#[instrument(level = "debug", skip(container))]
pub fn run(cli: &Cli, container: &ServiceContainer) -> CliResult<String> {
    // Reject bad options before touching the input
    let config = container.settings.render_config()?;

    let input = match cli.input_path() {
        Some(path) => container.tree_service.read_input(path)?,
        None => container
            .stdin
            .read_all()
            .map_err(|e| InfraError::io("read stdin", e))?,
    };

    if cli.flat {
        return Ok(container.tree_service.flat_listing(&input));
    }
    Ok(container.tree_service.render(&input, &config).diagram)
}
