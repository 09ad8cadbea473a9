//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{IndexConfig, OutputMode, DEFAULT_ROOT, ROOT_ENV};

/// Top-level CLI parser for `svg-index`.
#[derive(Debug, Parser)]
#[command(name = "svg-index", version, about = "Generate a JSON index of SVG assets")]
pub struct Cli {
    /// Directory to scan; `index.json` is written inside it.
    #[arg(long, global = true, env = ROOT_ENV, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a nested tree of directories and SVG files.
    Tree(ModeArgs),
    /// Write a flat, non-recursive list of SVG file names.
    Flat(ModeArgs),
}

/// Output mode flags shared by both indexers.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ModeArgs {
    /// Print the index to stdout instead of writing it.
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Fail if the existing index.json differs from a fresh scan.
    #[arg(long)]
    pub check: bool,
}

impl ModeArgs {
    /// Resolve the flags into a single [`OutputMode`].
    #[must_use]
    pub fn mode(self) -> OutputMode {
        if self.check {
            OutputMode::Check
        } else if self.dry_run {
            OutputMode::DryRun
        } else {
            OutputMode::Write
        }
    }
}

impl Cli {
    /// Build the indexer configuration for the selected command.
    #[must_use]
    pub fn config(&self) -> IndexConfig {
        let args = match &self.command {
            Command::Tree(args) | Command::Flat(args) => *args,
        };
        IndexConfig::new(self.root.clone()).with_mode(args.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use crate::config::OutputMode;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn parses_tree_subcommand() {
        let cli = Cli::parse_from(["svg-index", "tree"]);
        assert!(matches!(cli.command, Command::Tree(_)));
        assert_eq!(cli.config().mode, OutputMode::Write);
    }

    #[test]
    fn parses_flat_subcommand_with_root() {
        let cli = Cli::parse_from(["svg-index", "flat", "--root", "public/icons"]);
        assert!(matches!(cli.command, Command::Flat(_)));
        assert_eq!(cli.root, Path::new("public/icons"));
    }

    #[test]
    fn parses_mode_flags() {
        let cli = Cli::parse_from(["svg-index", "tree", "--check"]);
        assert_eq!(cli.config().mode, OutputMode::Check);

        let cli = Cli::parse_from(["svg-index", "flat", "--dry-run"]);
        assert_eq!(cli.config().mode, OutputMode::DryRun);
    }

    #[test]
    fn rejects_dry_run_with_check() {
        let result = Cli::try_parse_from(["svg-index", "tree", "--dry-run", "--check"]);
        assert!(result.is_err());
    }
}
