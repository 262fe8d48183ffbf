//! Build command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::{resolve, ConfigOverrides, ProfileStore};
use crate::error::HatchError;
use crate::exec::{command_exists, ColconInvocation, GroupRenice};
use crate::workspace::find_enclosing_package;

use super::{locate_workspace, select_profile};

/// Builds a colcon workspace.
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// The path to the colcon workspace
    #[arg(short = 'w', long, default_value = ".")]
    pub workspace: PathBuf,

    /// The name of a config profile to use (default: the active profile)
    #[arg(long)]
    pub profile: Option<String>,

    /// Explicitly specify a list of specific packages to build
    #[arg(value_name = "PKGNAME")]
    pub pkgs: Vec<String>,

    /// Build the package containing the current working directory
    #[arg(long)]
    pub this: bool,

    /// Only build specified packages, not their dependencies
    #[arg(long)]
    pub no_deps: bool,

    /// Additional arguments for colcon, up to a literal `--`
    /// (consumed before flag parsing)
    #[arg(long, value_name = "ARG", num_args = 1..)]
    pub colcon_build_args: Option<Vec<String>>,

    /// CPU niceness for build commands (default: 0)
    #[arg(short = 'n', long)]
    pub nice: Option<i32>,
}

impl BuildCommand {
    /// Execute the build command. Does not return on a successful launch:
    /// the process exits with the build child's own exit status.
    pub fn execute(self, colcon_args: Vec<String>) -> Result<()> {
        if !command_exists("bash") {
            return Err(HatchError::MissingTool {
                tool: "bash".to_string(),
                hint: "colcon invocations are run through bash; install it first.".to_string(),
            }
            .into());
        }

        let workspace = locate_workspace(&self.workspace)?;
        let profile = select_profile(&workspace, self.profile)?;
        let persisted = ProfileStore::new(&workspace).load(&profile)?;

        // Transient merge: build never persists its overrides.
        let overrides = ConfigOverrides::build_args(
            if colcon_args.is_empty() {
                None
            } else {
                Some(colcon_args)
            },
            self.nice,
        );
        let effective = resolve(&persisted, &overrides);

        let mut packages = self.pkgs;
        if self.this {
            // Not finding an enclosing package is not an error; the
            // selection just stays as explicitly named.
            if let Some(package) = find_enclosing_package(&self.workspace) {
                packages.push(package);
            }
        }

        let invocation =
            ColconInvocation::new("build", &effective).packages(packages, self.no_deps);
        let exit_code = invocation.launch(&workspace, effective.nice, &GroupRenice)?;

        std::process::exit(exit_code);
    }
}
