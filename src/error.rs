//! Error types for user-facing failures
//!
//! Every variant renders as the one-line message printed before the process
//! exits with status 1. Parse failures during package lookup and priority
//! adjustment failures are never surfaced through this type: the former are
//! treated as "not found" and the latter are ignored outright.

use std::path::PathBuf;

use thiserror::Error;

/// User and path errors that abort the current invocation.
#[derive(Error, Debug)]
pub enum HatchError {
    /// The path given via `--workspace` does not exist
    #[error("The specified workspace directory '{}' does not exist.", .path.display())]
    WorkspaceMissing { path: PathBuf },

    /// No enclosing workspace found walking up from the given path
    #[error("Parent colcon workspace directory does not exist.")]
    NoEnclosingWorkspace,

    /// `init` ran inside an already-initialized workspace tree
    #[error("An existing workspace already exists in this path: {}", .path.display())]
    WorkspaceExists { path: PathBuf },

    /// `init` ran against a directory without a `src/` subdirectory
    #[error("The specified workspace directory '{}' does not contain a 'src' directory.", .path.display())]
    SourceSpaceMissing { path: PathBuf },

    /// The workspace has no active profile recorded
    #[error("Workspace '{}' has not been initialized with an active profile.", .path.display())]
    NoActiveProfile { path: PathBuf },

    /// The named profile has not been created
    #[error("Profile '{name}' does not exist.")]
    ProfileMissing { name: String },

    /// The configured extend path has no environment setup script
    #[error("'{}' does not exist.", .script.display())]
    ExtendScriptMissing { script: PathBuf },

    /// A required external tool is not on the PATH
    #[error("Missing tool: {tool}")]
    MissingTool { tool: String, hint: String },
}

impl HatchError {
    /// An actionable suggestion, printed after the error message when one
    /// exists.
    pub fn hint(&self) -> Option<&str> {
        match self {
            HatchError::MissingTool { hint, .. } => Some(hint),
            HatchError::NoActiveProfile { .. } => {
                Some("Run 'hatch init' to initialize the workspace.")
            }
            HatchError::SourceSpaceMissing { .. } => {
                Some("Create a 'src' directory for your packages first.")
            }
            _ => None,
        }
    }
}
