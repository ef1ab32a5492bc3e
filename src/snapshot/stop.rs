//! Cooperative stop signal for run loops.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::SnapshotError;

/// Shared flag checked by run loops once per iteration.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    stopped: Arc<AtomicBool>,
}

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop. Loops finish their current iteration first.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Raise this flag on Ctrl-C / SIGINT.
    ///
    /// Only one handler can be installed per process.
    pub fn install_interrupt_handler(&self) -> Result<(), SnapshotError> {
        let flag = self.clone();
        ctrlc::set_handler(move || {
            log::debug!("Interrupt received");
            flag.stop();
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let flag = StopFlag::new();
        let other = flag.clone();
        assert!(!other.is_stopped());
        flag.stop();
        assert!(other.is_stopped());
    }
}
