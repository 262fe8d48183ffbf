//! Profile management command surface
//!
//! Declared but not yet implemented.

use anyhow::Result;
use clap::{Args, Subcommand};

/// Manage config profiles for a colcon workspace.
#[derive(Args, Debug)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProfileSubcommand {
    /// Add a profile
    Add {
        /// The new profile name.
        name: String,

        /// Overwrite an existing profile.
        #[arg(short = 'f', long)]
        force: bool,

        /// Copy the settings from an existing profile.
        #[arg(long, value_name = "BASE_PROFILE")]
        copy: Option<String>,

        /// Copy the settings from the active profile.
        #[arg(long)]
        copy_active: bool,
    },

    /// Remove a profile
    Remove {
        /// One or more profile names to remove.
        name: Vec<String>,
    },

    /// Set the active profile
    Set {
        /// The profile to activate.
        name: String,
    },

    /// Rename a profile
    Rename {
        /// The current name of the profile to be renamed.
        current_name: String,

        /// The new name for the profile.
        new_name: String,

        /// Overwrite an existing profile.
        #[arg(short = 'f', long)]
        force: bool,
    },
}

impl ProfileCommand {
    pub fn execute(self) -> Result<()> {
        match self.command {
            ProfileSubcommand::Add { .. } => Ok(()),
            ProfileSubcommand::Remove { .. } => Ok(()),
            ProfileSubcommand::Set { .. } => Ok(()),
            ProfileSubcommand::Rename { .. } => Ok(()),
        }
    }
}
