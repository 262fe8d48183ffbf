//! Profile configuration: persisted records, the profile store, and the
//! override resolver.

mod profile;
mod resolver;
mod store;

pub use profile::{
    ProfileConfig, DEFAULT_BUILD_SPACE, DEFAULT_INSTALL_SPACE, DEFAULT_TEST_RESULT_SPACE,
};
pub use resolver::{resolve, ArgsMode, ConfigOverrides};
pub use store::{initialize, InitOutcome, ProfileStore, COLCON_PREFIX_PATH_ENV, DEFAULT_PROFILE};
