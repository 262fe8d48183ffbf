//! External process execution

mod colcon;
mod priority;

pub use colcon::ColconInvocation;
pub use priority::{GroupRenice, PriorityAdjuster, PriorityError};

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Once;

/// Process group of the currently running build child, if any.
static CHILD_PGID: AtomicI32 = AtomicI32::new(0);

static HANDLER_INSTALLED: Once = Once::new();

/// Forward Ctrl-C to the given child process group instead of letting the
/// default handler kill only the parent and orphan the build.
pub fn forward_interrupts_to(pgid: i32) {
    CHILD_PGID.store(pgid, Ordering::SeqCst);

    HANDLER_INSTALLED.call_once(|| {
        // Handler registration can only fail if another handler is already
        // installed; there is nothing useful to do about it mid-launch.
        let _ = ctrlc::set_handler(|| {
            let pgid = CHILD_PGID.load(Ordering::SeqCst);
            if pgid > 0 {
                #[cfg(unix)]
                unsafe {
                    libc::killpg(pgid, libc::SIGINT);
                }
            }
        });
    });
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}
