//! `svg-index tree` command.

use crate::config::IndexConfig;
use crate::context::ServiceContext;
use crate::index::tree;

/// Execute the `tree` command.
///
/// # Errors
///
/// Returns an error string if the root cannot be walked or the index cannot be emitted.
pub fn run(ctx: &ServiceContext, config: &IndexConfig) -> Result<(), String> {
    let indexed = tree::run(ctx, config).map_err(|e| e.to_string())?;
    super::report(&indexed.emitted, |path| {
        format!("[gen] SVG tree index written to {}", path.display())
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputMode;

    #[test]
    fn tree_command_writes_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logo.svg"), "<svg/>").unwrap();

        let config = IndexConfig::new(dir.path());
        assert!(run(&ServiceContext::live(), &config).is_ok());
        assert!(config.index_path().exists());
    }

    #[test]
    fn tree_command_check_reports_stale_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logo.svg"), "<svg/>").unwrap();

        let config = IndexConfig::new(dir.path()).with_mode(OutputMode::Check);
        let err = run(&ServiceContext::live(), &config).unwrap_err();
        assert!(err.contains("out of date"));
    }
}
