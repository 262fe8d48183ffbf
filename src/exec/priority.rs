//! Process priority adjustment
//!
//! The build loop periodically re-applies the configured niceness to the
//! child's whole process group. This is advisory housekeeping: callers
//! ignore [`PriorityError`] unconditionally, so a child that already exited
//! or a missing permission never affects the build's outcome.

use thiserror::Error;

/// Failure to adjust a process group's priority. Always ignored.
#[derive(Error, Debug)]
#[error("failed to renice process group {pgid}: {source}")]
pub struct PriorityError {
    pub pgid: i32,
    #[source]
    pub source: std::io::Error,
}

/// Capability to change the scheduling priority of a process group.
pub trait PriorityAdjuster {
    fn adjust(&self, pgid: i32, nice: i32) -> Result<(), PriorityError>;
}

/// Renices via `setpriority(PRIO_PGRP, ...)`.
pub struct GroupRenice;

impl PriorityAdjuster for GroupRenice {
    #[cfg(unix)]
    fn adjust(&self, pgid: i32, nice: i32) -> Result<(), PriorityError> {
        let rc = unsafe { libc::setpriority(libc::PRIO_PGRP as _, pgid as libc::id_t, nice) };
        if rc == 0 {
            Ok(())
        } else {
            Err(PriorityError {
                pgid,
                source: std::io::Error::last_os_error(),
            })
        }
    }

    #[cfg(not(unix))]
    fn adjust(&self, _pgid: i32, _nice: i32) -> Result<(), PriorityError> {
        Ok(())
    }
}
