//! Clean command surface
//!
//! Declared but not yet implemented.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

/// Deletes various products of the build verb.
#[derive(Args, Debug)]
pub struct CleanCommand {
    /// The path to the colcon workspace
    #[arg(short = 'w', long, default_value = ".")]
    pub workspace: PathBuf,

    /// The name of a config profile to use (default: the active profile)
    #[arg(long)]
    pub profile: Option<String>,

    /// Assume "yes" to all interactive checks
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Apply the specified clean operation for all profiles in this workspace
    #[arg(short = 'a', long)]
    pub all_profiles: bool,

    /// De-initialize the workspace, deleting all build profiles and
    /// configuration along with every profile's subdirectories
    #[arg(long)]
    pub deinit: bool,

    /// Remove the entire build space
    #[arg(short = 'b', long, visible_alias = "build")]
    pub build_space: bool,

    /// Remove the entire install space
    #[arg(short = 'i', long, visible_alias = "install")]
    pub install_space: bool,

    /// Remove the entire test result space
    #[arg(short = 't', long, visible_alias = "test")]
    pub test_result_space: bool,

    /// Remove the entire log space
    #[arg(short = 'l', long, visible_alias = "logs")]
    pub log_space: bool,

    /// Explicitly specify a list of specific packages to clean
    #[arg(value_name = "PKGNAME")]
    pub pkgs: Vec<String>,

    /// Clean the package containing the current working directory
    #[arg(long)]
    pub this: bool,

    /// Clean the packages which depend on the packages to be cleaned
    #[arg(long, visible_alias = "dep")]
    pub dependents: bool,
}

impl CleanCommand {
    pub fn execute(self) -> Result<()> {
        Ok(())
    }
}
