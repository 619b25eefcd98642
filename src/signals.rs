//! Interrupt/signal handling
//!
//! Ctrl+C is delivered to the whole foreground process group, so the child
//! command receives it directly. The handler installed here only records the
//! interrupt, which keeps `ec2-meta-env` alive long enough to report the child's
//! exit code and stops metadata fetching if no child has started yet.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::status::ExitStatus;

/// Global flag for Ctrl+C interrupt handling
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Check if the application was interrupted (Ctrl+C pressed)
#[inline]
pub fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Set the interrupted flag (called from signal handler)
#[inline]
pub fn set_interrupted() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Reset the interrupted flag
#[inline]
pub fn reset_interrupted() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Install the Ctrl+C handler. A second Ctrl+C exits immediately.
pub fn install_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        static SECOND_CTRL_C: AtomicBool = AtomicBool::new(false);
        if SECOND_CTRL_C.swap(true, Ordering::SeqCst) {
            std::process::exit(i32::from(ExitStatus::Interrupted.code()));
        }
        set_interrupted();
    })
}
