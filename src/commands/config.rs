//! Config command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::{resolve, ArgsMode, ConfigOverrides, ProfileStore};

use super::{locate_workspace, select_profile};

/// Configures a colcon workspace's context.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// The path to the colcon workspace
    #[arg(short = 'w', long, default_value = ".")]
    pub workspace: PathBuf,

    /// The name of a config profile to use (default: the active profile)
    #[arg(long)]
    pub profile: Option<String>,

    /// Append elements to list-type arguments
    #[arg(short = 'a', long, conflicts_with = "remove_args")]
    pub append_args: bool,

    /// Remove elements from list-type arguments
    #[arg(short = 'r', long)]
    pub remove_args: bool,

    /// Extend the result-space of another colcon workspace
    #[arg(short = 'e', long, conflicts_with = "no_extend")]
    pub extend: Option<String>,

    /// Unset the explicit extension of another workspace
    #[arg(long)]
    pub no_extend: bool,

    /// Path to the build space
    #[arg(short = 'b', long, visible_alias = "build", conflicts_with = "default_build_space")]
    pub build_space: Option<String>,

    /// Use the default build space ('build')
    #[arg(long)]
    pub default_build_space: bool,

    /// Path to the install space
    #[arg(
        short = 'i',
        long,
        visible_alias = "install",
        conflicts_with = "default_install_space"
    )]
    pub install_space: Option<String>,

    /// Use the default install space ('install')
    #[arg(long)]
    pub default_install_space: bool,

    /// Path to the test result space
    #[arg(
        short = 't',
        long,
        visible_alias = "test",
        conflicts_with = "default_test_result_space"
    )]
    pub test_result_space: Option<String>,

    /// Use the default test result space ('test_results')
    #[arg(long)]
    pub default_test_result_space: bool,

    /// Suffix for build, test results, and install space
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    pub space_suffix: Option<String>,

    /// Pass no additional arguments to colcon
    #[arg(long)]
    pub no_colcon_build_args: bool,

    /// Additional arguments for colcon, up to a literal `--`
    /// (consumed before flag parsing)
    #[arg(long, value_name = "ARG", num_args = 1..)]
    pub colcon_build_args: Option<Vec<String>>,

    /// CPU niceness for build commands (default: 0)
    #[arg(short = 'n', long)]
    pub nice: Option<i32>,
}

impl ConfigCommand {
    /// Execute the config command, persisting the resolved configuration.
    pub fn execute(self, colcon_args: Vec<String>) -> Result<()> {
        let workspace = locate_workspace(&self.workspace)?;
        let profile = select_profile(&workspace, self.profile)?;

        let store = ProfileStore::new(&workspace);
        let persisted = store.load(&profile)?;

        let overrides = ConfigOverrides {
            extend: self.extend,
            no_extend: self.no_extend,
            build_space: self.build_space,
            default_build_space: self.default_build_space,
            install_space: self.install_space,
            default_install_space: self.default_install_space,
            test_result_space: self.test_result_space,
            default_test_result_space: self.default_test_result_space,
            space_suffix: self.space_suffix,
            colcon_build_args: if colcon_args.is_empty() {
                None
            } else {
                Some(colcon_args)
            },
            args_mode: if self.append_args {
                ArgsMode::Append
            } else if self.remove_args {
                ArgsMode::Remove
            } else {
                ArgsMode::Replace
            },
            no_colcon_build_args: self.no_colcon_build_args,
            nice: self.nice,
        };

        let effective = resolve(&persisted, &overrides);
        store.save(&profile, &effective)?;

        workspace.print_state()
    }
}
