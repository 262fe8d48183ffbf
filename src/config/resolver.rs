//! Merge of persisted profile configuration with command-line overrides
//!
//! [`resolve`] is a pure function: it does not know whether its result will
//! be persisted (`config`) or used for a single invocation (`build`).

use super::profile::{
    ProfileConfig, DEFAULT_BUILD_SPACE, DEFAULT_INSTALL_SPACE, DEFAULT_TEST_RESULT_SPACE,
};

/// How newly supplied colcon build args combine with the persisted list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArgsMode {
    /// Replace the persisted list
    #[default]
    Replace,
    /// Append to the persisted list
    Append,
    /// Remove matching entries from the persisted list
    Remove,
}

/// Command-line overrides for a single invocation.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Extend the result space of another workspace
    pub extend: Option<String>,
    /// Unset the explicit extension
    pub no_extend: bool,

    pub build_space: Option<String>,
    pub default_build_space: bool,
    pub install_space: Option<String>,
    pub default_install_space: bool,
    pub test_result_space: Option<String>,
    pub default_test_result_space: bool,

    /// Suffix appended to whichever space names still carry their bare
    /// default after the explicit overrides are applied
    pub space_suffix: Option<String>,

    /// Newly supplied colcon build args, combined per `args_mode`
    pub colcon_build_args: Option<Vec<String>>,
    pub args_mode: ArgsMode,
    /// Force the colcon build args to empty; applied last, so it wins over
    /// any replace/append/remove in the same invocation
    pub no_colcon_build_args: bool,

    pub nice: Option<i32>,
}

impl ConfigOverrides {
    /// Overrides carrying only a replacement arg list, as `build` supplies.
    pub fn build_args(colcon_build_args: Option<Vec<String>>, nice: Option<i32>) -> Self {
        Self {
            colcon_build_args,
            nice,
            ..Self::default()
        }
    }
}

/// Resolve the effective configuration for one invocation.
pub fn resolve(persisted: &ProfileConfig, overrides: &ConfigOverrides) -> ProfileConfig {
    let mut config = persisted.clone();

    if let Some(extend) = &overrides.extend {
        config.extend_path = extend.clone();
    } else if overrides.no_extend {
        config.extend_path.clear();
    }

    resolve_space(
        &mut config.build_space,
        &overrides.build_space,
        overrides.default_build_space,
        DEFAULT_BUILD_SPACE,
    );
    resolve_space(
        &mut config.install_space,
        &overrides.install_space,
        overrides.default_install_space,
        DEFAULT_INSTALL_SPACE,
    );
    resolve_space(
        &mut config.test_result_space,
        &overrides.test_result_space,
        overrides.default_test_result_space,
        DEFAULT_TEST_RESULT_SPACE,
    );

    // Suffixing only touches space names still equal to their bare default;
    // user-customized paths are left alone.
    if let Some(suffix) = &overrides.space_suffix {
        apply_suffix(&mut config.build_space, DEFAULT_BUILD_SPACE, suffix);
        apply_suffix(&mut config.install_space, DEFAULT_INSTALL_SPACE, suffix);
        apply_suffix(
            &mut config.test_result_space,
            DEFAULT_TEST_RESULT_SPACE,
            suffix,
        );
    }

    if let Some(new_args) = &overrides.colcon_build_args {
        let merged = match overrides.args_mode {
            ArgsMode::Replace => new_args.clone(),
            ArgsMode::Append => {
                let mut args = config.colcon_build_args.clone();
                args.extend(new_args.iter().cloned());
                args
            }
            ArgsMode::Remove => config
                .colcon_build_args
                .iter()
                .filter(|arg| !new_args.contains(arg))
                .cloned()
                .collect(),
        };
        config.colcon_build_args = remove_duplicates(merged);
    }

    if overrides.no_colcon_build_args {
        config.colcon_build_args.clear();
    }

    if let Some(nice) = overrides.nice {
        config.nice = nice;
    }

    config
}

fn resolve_space(
    space: &mut String,
    explicit: &Option<String>,
    reset_to_default: bool,
    default: &str,
) {
    if let Some(path) = explicit {
        *space = path.clone();
    } else if reset_to_default {
        *space = default.to_string();
    }
}

fn apply_suffix(space: &mut String, default: &str, suffix: &str) {
    if space == default {
        space.push_str(suffix);
    }
}

/// Drop repeated entries, keeping first occurrences in order.
fn remove_duplicates(args: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    args.into_iter().filter(|arg| seen.insert(arg.clone())).collect()
}
