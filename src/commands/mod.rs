//! Command implementations

pub mod build;
pub mod clean;
pub mod config;
pub mod init;
pub mod list;
pub mod profile;
pub mod test;

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ProfileStore;
use crate::error::HatchError;
use crate::workspace::Workspace;

/// Resolve the `--workspace` argument to its enclosing workspace.
pub(crate) fn locate_workspace(path: &Path) -> Result<Workspace> {
    let path = std::path::absolute(path).context("Failed to resolve workspace path")?;
    if !path.exists() {
        return Err(HatchError::WorkspaceMissing { path }.into());
    }

    Workspace::find(&path).ok_or_else(|| HatchError::NoEnclosingWorkspace.into())
}

/// Pick the named profile, falling back to the workspace's active one.
pub(crate) fn select_profile(workspace: &Workspace, named: Option<String>) -> Result<String> {
    match named {
        Some(profile) => Ok(profile),
        None => ProfileStore::new(workspace)
            .active_profile()
            .ok_or_else(|| {
                HatchError::NoActiveProfile {
                    path: workspace.root.clone(),
                }
                .into()
            }),
    }
}
