//! `svg-index flat` command.

use crate::config::IndexConfig;
use crate::context::ServiceContext;
use crate::index::flat;

/// Execute the `flat` command.
///
/// # Errors
///
/// Returns an error string if the root cannot be created or listed, or the index cannot be emitted.
pub fn run(ctx: &ServiceContext, config: &IndexConfig) -> Result<(), String> {
    let indexed = flat::run(ctx, config).map_err(|e| e.to_string())?;
    let count = indexed.index.files.len();
    super::report(&indexed.emitted, |path| {
        format!("[gen] Indexed {count} SVG files to {}", path.display())
    });
    Ok(())
}
