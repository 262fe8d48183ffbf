//! Test command surface
//!
//! Declared but not yet implemented; the flags mirror `build` so scripts
//! can already spell the eventual invocation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

/// Tests a colcon workspace.
#[derive(Args, Debug)]
pub struct TestCommand {
    /// The path to the colcon workspace
    #[arg(short = 'w', long, default_value = ".")]
    pub workspace: PathBuf,

    /// The name of a config profile to use (default: the active profile)
    #[arg(long)]
    pub profile: Option<String>,

    /// Explicitly specify a list of specific packages to test
    #[arg(value_name = "PKGNAME")]
    pub pkgs: Vec<String>,

    /// Test the package containing the current working directory
    #[arg(long)]
    pub this: bool,

    /// Only test specified packages, not their dependencies
    #[arg(long)]
    pub no_deps: bool,

    /// Additional arguments for colcon, up to a literal `--`
    /// (consumed before flag parsing)
    #[arg(long, value_name = "ARG", num_args = 1..)]
    pub colcon_build_args: Option<Vec<String>>,
}

impl TestCommand {
    pub fn execute(self, _colcon_args: Vec<String>) -> Result<()> {
        Ok(())
    }
}
