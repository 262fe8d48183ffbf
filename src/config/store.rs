//! Profile store: the `.hatch/profiles/` tree of a workspace
//!
//! One `profiles.yaml` records which profile is active; each profile is a
//! directory holding its own `config.yaml`. This tool is the sole writer of
//! both files and no cross-process locking is attempted: concurrent
//! invocations against the same profile are last-writer-wins.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::HatchError;
use crate::workspace::Workspace;

use super::profile::ProfileConfig;

/// Name of the profile created by `init` and activated by default.
pub const DEFAULT_PROFILE: &str = "default";

/// Environment variable carrying an externally sourced extension path,
/// shown in the workspace state when no explicit extend path is set.
pub const COLCON_PREFIX_PATH_ENV: &str = "COLCON_PREFIX_PATH";

/// Contents of `profiles.yaml`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfilesFile {
    #[serde(default)]
    active: String,
}

/// Accessor for a workspace's persisted profiles.
pub struct ProfileStore<'a> {
    workspace: &'a Workspace,
}

impl<'a> ProfileStore<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    /// The active profile name, if the store exists and records a non-empty
    /// one. A missing or unreadable store file means "none".
    pub fn active_profile(&self) -> Option<String> {
        let text = fs::read_to_string(self.workspace.profiles_file()).ok()?;
        let profiles: ProfilesFile = serde_yaml::from_str(&text).ok()?;
        if profiles.active.is_empty() {
            None
        } else {
            Some(profiles.active)
        }
    }

    /// Load a profile's configuration, applying field defaults for anything
    /// missing in the file.
    ///
    /// The profile directory and its `config.yaml` must both exist: a
    /// profile has to be materialized before it can be configured or built.
    pub fn load(&self, profile: &str) -> Result<ProfileConfig> {
        let config_file = self.workspace.profile_config_file(profile);
        if !self.workspace.profile_dir(profile).is_dir() || !config_file.is_file() {
            return Err(HatchError::ProfileMissing {
                name: profile.to_string(),
            }
            .into());
        }

        let text = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read '{}'", config_file.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse '{}'", config_file.display()))
    }

    /// Overwrite a profile's configuration with the full resolved record.
    pub fn save(&self, profile: &str, config: &ProfileConfig) -> Result<()> {
        let config_file = self.workspace.profile_config_file(profile);
        let yaml = serde_yaml::to_string(config).context("Failed to serialize profile config")?;
        fs::write(&config_file, yaml)
            .with_context(|| format!("Failed to write '{}'", config_file.display()))
    }
}

/// Result of [`initialize`].
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// Store and default profile were created
    Created(Workspace),
    /// The store already existed; nothing was touched
    AlreadyInitialized(Workspace),
}

/// Initialize a workspace at `path`: create the hidden control directory,
/// the profile store file with `active: default`, and a materialized
/// `default` profile. Idempotent: re-running against an initialized
/// workspace changes nothing.
pub fn initialize(path: &Path) -> Result<InitOutcome> {
    let path = std::path::absolute(path).context("Failed to resolve workspace path")?;

    if !path.exists() {
        return Err(HatchError::WorkspaceMissing { path }.into());
    }

    // Re-running init against an initialized workspace is a no-op.
    let workspace = Workspace::at(path);
    if workspace.profiles_file().is_file() {
        return Ok(InitOutcome::AlreadyInitialized(workspace));
    }

    if let Some(existing) = Workspace::find(&workspace.root) {
        return Err(HatchError::WorkspaceExists {
            path: existing.root,
        }
        .into());
    }

    if !workspace.src_dir().is_dir() {
        return Err(HatchError::SourceSpaceMissing {
            path: workspace.root,
        }
        .into());
    }

    let profiles_dir = workspace.profiles_dir();
    fs::create_dir_all(&profiles_dir)
        .with_context(|| format!("Failed to create '{}'", profiles_dir.display()))?;

    let default_dir = workspace.profile_dir(DEFAULT_PROFILE);
    fs::create_dir_all(&default_dir)
        .with_context(|| format!("Failed to create '{}'", default_dir.display()))?;

    let store = ProfileStore::new(&workspace);
    store.save(DEFAULT_PROFILE, &ProfileConfig::default())?;

    let profiles = ProfilesFile {
        active: DEFAULT_PROFILE.to_string(),
    };
    let yaml = serde_yaml::to_string(&profiles).context("Failed to serialize profile store")?;
    fs::write(workspace.profiles_file(), yaml)
        .with_context(|| format!("Failed to write '{}'", workspace.profiles_file().display()))?;

    Ok(InitOutcome::Created(workspace))
}
