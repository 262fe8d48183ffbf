//! Init command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::{initialize, InitOutcome};

/// Initializes a given folder as a colcon workspace.
#[derive(Args, Debug)]
pub struct InitCommand {
    /// The path to the colcon workspace
    #[arg(short = 'w', long, default_value = ".")]
    pub workspace: PathBuf,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(self) -> Result<()> {
        match initialize(&self.workspace)? {
            InitOutcome::Created(workspace) => {
                println!("Initializing workspace at '{}'...", workspace.root.display());
                workspace.print_state()
            }
            InitOutcome::AlreadyInitialized(workspace) => {
                println!("Workspace has already been initialized.\n");
                workspace.print_state()
            }
        }
    }
}
