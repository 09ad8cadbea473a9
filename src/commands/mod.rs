//! Command dispatch and handlers.

pub mod flat;
pub mod tree;

use std::env;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command};
use crate::config::{IndexConfig, RECORD_ENV};
use crate::context::ServiceContext;
use crate::index::output::Emitted;

/// Dispatch a parsed command to its handler.
///
/// When `SVG_INDEX_RECORD` is set to a file path, all filesystem interactions
/// are recorded to a cassette at that path.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = cli.config();
    let ctx = match env::var_os(RECORD_ENV) {
        Some(path) => ServiceContext::recording(&PathBuf::from(path), config.root()),
        None => ServiceContext::live(),
    };

    let result = dispatch_with_context(&cli.command, &ctx, &config);

    // Write the cassette even when the command failed; its error comes first.
    match ctx.finish() {
        Ok(Some(path)) => eprintln!("Recording saved to: {}", path.display()),
        Ok(None) => {}
        Err(finish_err) => {
            return Err(match result {
                Err(err) => format!("{err}; {finish_err}"),
                Ok(()) => finish_err,
            });
        }
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &IndexConfig,
) -> Result<(), String> {
    match command {
        Command::Tree(_) => tree::run(ctx, config),
        Command::Flat(_) => flat::run(ctx, config),
    }
}

/// Prints the single console line for an emitted index.
fn report(emitted: &Emitted, written: impl FnOnce(&Path) -> String) {
    match emitted {
        Emitted::Written(path) => println!("{}", written(path)),
        Emitted::Printed(json) => println!("{json}"),
        Emitted::UpToDate(path) => println!("[gen] {} is up to date", path.display()),
    }
}
