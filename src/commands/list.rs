//! List command surface
//!
//! Declared but not yet implemented.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

/// Lists colcon packages in the workspace or other arbitrary folders.
#[derive(Args, Debug)]
pub struct ListCommand {
    #[command(subcommand)]
    pub command: ListSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ListSubcommand {
    /// List packages in workspace.
    Packages {
        /// The path to the colcon workspace
        #[arg(short = 'w', long, default_value = ".")]
        workspace: PathBuf,
    },

    /// List repos in workspace.
    Repos {
        /// The path to the colcon workspace
        #[arg(short = 'w', long, default_value = ".")]
        workspace: PathBuf,
    },
}

impl ListCommand {
    pub fn execute(self) -> Result<()> {
        match self.command {
            ListSubcommand::Packages { .. } => Ok(()),
            ListSubcommand::Repos { .. } => Ok(()),
        }
    }
}
