//! Per-profile configuration record
//!
//! Persisted as `.hatch/profiles/<name>/config.yaml`. Every field has a
//! documented default, and a field that is absent, null, or (for the space
//! fields) empty in the file resolves to that default on load.

use serde::{Deserialize, Serialize};

/// Default build space directory name.
pub const DEFAULT_BUILD_SPACE: &str = "build";

/// Default install space directory name.
pub const DEFAULT_INSTALL_SPACE: &str = "install";

/// Default test result space directory name.
pub const DEFAULT_TEST_RESULT_SPACE: &str = "test_results";

/// A profile's persisted configuration, fully resolved against defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawProfileConfig")]
pub struct ProfileConfig {
    /// Build space directory, relative to the workspace root
    pub build_space: String,

    /// Install space directory, relative to the workspace root
    pub install_space: String,

    /// Test result space directory, relative to the workspace root
    pub test_result_space: String,

    /// Result space of another workspace to source before building;
    /// empty means no extension
    pub extend_path: String,

    /// Additional arguments passed through to colcon
    pub colcon_build_args: Vec<String>,

    /// CPU niceness applied to the build process group
    pub nice: i32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            build_space: DEFAULT_BUILD_SPACE.to_string(),
            install_space: DEFAULT_INSTALL_SPACE.to_string(),
            test_result_space: DEFAULT_TEST_RESULT_SPACE.to_string(),
            extend_path: String::new(),
            colcon_build_args: Vec::new(),
            nice: 0,
        }
    }
}

impl ProfileConfig {
    /// The configured extend path, if any. Empty or whitespace-only values
    /// mean "no extension".
    pub fn extend(&self) -> Option<&str> {
        let trimmed = self.extend_path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// On-disk form of [`ProfileConfig`], tolerating missing and null fields.
#[derive(Debug, Default, Deserialize)]
struct RawProfileConfig {
    #[serde(default)]
    build_space: Option<String>,
    #[serde(default)]
    install_space: Option<String>,
    #[serde(default)]
    test_result_space: Option<String>,
    #[serde(default)]
    extend_path: Option<String>,
    #[serde(default)]
    colcon_build_args: Option<Vec<String>>,
    #[serde(default)]
    nice: Option<i32>,
}

impl From<RawProfileConfig> for ProfileConfig {
    fn from(raw: RawProfileConfig) -> Self {
        Self {
            build_space: space_or_default(raw.build_space, DEFAULT_BUILD_SPACE),
            install_space: space_or_default(raw.install_space, DEFAULT_INSTALL_SPACE),
            test_result_space: space_or_default(raw.test_result_space, DEFAULT_TEST_RESULT_SPACE),
            extend_path: raw.extend_path.unwrap_or_default(),
            colcon_build_args: raw.colcon_build_args.unwrap_or_default(),
            nice: raw.nice.unwrap_or(0),
        }
    }
}

/// An absent, null, or empty space value resolves to its default name.
fn space_or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}
