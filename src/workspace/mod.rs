//! Workspace discovery and layout
//!
//! A colcon workspace is any directory containing both a `src/` subdirectory
//! and a profile store file at `.hatch/profiles/profiles.yaml`. The
//! [`Workspace`] handle is resolved once per invocation and threaded through
//! every operation that touches the workspace, rather than re-derived from
//! the ambient working directory.

mod package;

pub use package::find_enclosing_package;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::{ProfileStore, COLCON_PREFIX_PATH_ENV};

/// Hidden control directory holding all hatch metadata.
pub const HATCH_DIR: &str = ".hatch";

/// File recording which profile is active, relative to the profiles dir.
pub const PROFILES_FILE: &str = "profiles.yaml";

/// Per-profile configuration file name.
pub const PROFILE_CONFIG_FILE: &str = "config.yaml";

/// A located colcon workspace, identified by its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Absolute workspace root path
    pub root: PathBuf,
}

impl Workspace {
    /// Wrap a directory already known to be a workspace root.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the nearest enclosing workspace, starting at `start` (inclusive).
    pub fn find(start: &Path) -> Option<Self> {
        find_ancestor(start, Self::is_workspace).map(Self::at)
    }

    /// Check whether a directory carries the workspace marker pair.
    pub fn is_workspace(dir: &Path) -> bool {
        dir.join("src").is_dir()
            && dir
                .join(HATCH_DIR)
                .join("profiles")
                .join(PROFILES_FILE)
                .is_file()
    }

    /// The required `src/` source space.
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn hatch_dir(&self) -> PathBuf {
        self.root.join(HATCH_DIR)
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.hatch_dir().join("profiles")
    }

    pub fn profiles_file(&self) -> PathBuf {
        self.profiles_dir().join(PROFILES_FILE)
    }

    pub fn profile_dir(&self, profile: &str) -> PathBuf {
        self.profiles_dir().join(profile)
    }

    pub fn profile_config_file(&self, profile: &str) -> PathBuf {
        self.profile_dir(profile).join(PROFILE_CONFIG_FILE)
    }

    /// Resolve a configured space name against the workspace root.
    pub fn space_dir(&self, space: &str) -> PathBuf {
        self.root.join(space)
    }

    /// Print the workspace state summary shown after `init` and `config`.
    pub fn print_state(&self) -> Result<()> {
        let store = ProfileStore::new(self);

        let Some(active) = store.active_profile() else {
            println!(
                "Workspace '{}' has not been initialized with an active profile.",
                self.root.display()
            );
            return Ok(());
        };

        let config = store.load(&active).unwrap_or_default();

        let build_dir = self.space_dir(&config.build_space);
        let install_dir = self.space_dir(&config.install_space);
        let test_results_dir = self.space_dir(&config.test_result_space);
        let src_dir = self.src_dir();

        let separator = "-".repeat(70);
        println!("{separator}");
        println!("Profile:                     {active}");
        match config.extend() {
            Some(path) => println!("Extending:                   {path}"),
            None => match env::var(COLCON_PREFIX_PATH_ENV) {
                Ok(env_path) if !env_path.is_empty() => {
                    println!("Extending:             [env] {env_path}")
                }
                _ => println!("Extending:"),
            },
        }
        println!("Workspace:                   {}", self.root.display());
        println!("{separator}");

        print_space("Build Space:      ", &build_dir);
        print_space("Install Space:    ", &install_dir);
        print_space("Test Result Space:", &test_results_dir);
        print_space("Source Space:     ", &src_dir);
        println!("{separator}");

        println!("CPU Niceness                 {}", config.nice);
        if config.colcon_build_args.is_empty() {
            println!("Colcon Build Args:           None");
        } else {
            println!(
                "Colcon Build Args:           {}",
                config.colcon_build_args[0]
            );
            for arg in &config.colcon_build_args[1..] {
                println!("                             {arg}");
            }
        }
        println!("{separator}");

        Ok(())
    }
}

fn print_space(label: &str, dir: &Path) {
    let status = if dir.exists() { " [exists]" } else { "[missing]" };
    println!("{label} {status} {}", dir.display());
}

/// Find the nearest ancestor of `start` (inclusive) satisfying `pred`.
///
/// `start` is normalized to an absolute path first so relative paths like
/// `.` behave the same as their expanded form. Terminates at the filesystem
/// root.
pub fn find_ancestor<P>(start: &Path, pred: P) -> Option<PathBuf>
where
    P: Fn(&Path) -> bool,
{
    let start = std::path::absolute(start).ok()?;
    start
        .ancestors()
        .find(|dir| pred(dir))
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_workspace() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("src")).unwrap();
        let profiles_dir = root.join(".hatch/profiles");
        fs::create_dir_all(&profiles_dir).unwrap();
        fs::write(profiles_dir.join("profiles.yaml"), "active: default\n").unwrap();

        temp_dir
    }

    #[test]
    fn test_is_workspace() {
        let temp_dir = create_test_workspace();
        assert!(Workspace::is_workspace(temp_dir.path()));
    }

    #[test]
    fn test_src_alone_is_not_a_workspace() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        assert!(!Workspace::is_workspace(temp_dir.path()));
    }

    #[test]
    fn test_find_from_root() {
        let temp_dir = create_test_workspace();
        let ws = Workspace::find(temp_dir.path()).unwrap();
        assert_eq!(ws.root, temp_dir.path());
    }

    #[test]
    fn test_find_from_nested_dir() {
        let temp_dir = create_test_workspace();
        let nested = temp_dir.path().join("src/some_pkg/include");
        fs::create_dir_all(&nested).unwrap();

        let ws = Workspace::find(&nested).unwrap();
        assert_eq!(ws.root, temp_dir.path());
    }

    #[test]
    fn test_find_not_found() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Workspace::find(temp_dir.path()).is_none());
    }

    #[test]
    fn test_find_ancestor_predicate() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("marker"), "").unwrap();
        let nested = root.join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let found = find_ancestor(&nested, |d| d.join("marker").is_file());
        assert_eq!(found.unwrap(), root);
    }
}
