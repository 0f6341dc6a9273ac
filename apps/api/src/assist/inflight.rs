//! At most one request per collaborator at a time.
//!
//! Acquisition never waits: a second caller is rejected while the first
//! holds the guard. Dropping the guard clears the flag, whatever the outcome.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct InFlightFlag {
    name: &'static str,
    busy: Arc<AtomicBool>,
}

impl InFlightFlag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn try_acquire(&self) -> Option<InFlightGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                busy: Arc::clone(&self.busy),
            })
    }
}

#[derive(Debug)]
pub struct InFlightGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// One independent flag per collaborator.
#[derive(Debug, Clone)]
pub struct InFlight {
    pub text: InFlightFlag,
    pub scoring: InFlightFlag,
    pub export: InFlightFlag,
}

impl Default for InFlight {
    fn default() -> Self {
        Self {
            text: InFlightFlag::new("text processing"),
            scoring: InFlightFlag::new("compatibility scoring"),
            export: InFlightFlag::new("export"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_rejected_until_release() {
        let flag = InFlightFlag::new("text processing");
        let guard = flag.try_acquire().unwrap();
        assert!(flag.is_busy());
        assert!(flag.try_acquire().is_none());

        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.try_acquire().is_some());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let flag = InFlightFlag::new("export");
        let other = flag.clone();
        let _guard = flag.try_acquire().unwrap();
        assert!(other.try_acquire().is_none());
    }

    #[test]
    fn test_flags_are_independent() {
        let in_flight = InFlight::default();
        let _text = in_flight.text.try_acquire().unwrap();
        assert!(in_flight.scoring.try_acquire().is_some());
        assert!(in_flight.export.try_acquire().is_some());
    }

    #[tokio::test]
    async fn test_flag_cleared_when_task_fails() {
        let flag = InFlightFlag::new("text processing");
        let task_flag = flag.clone();
        let outcome: Result<(), &str> = async move {
            let _guard = task_flag.try_acquire().ok_or("busy")?;
            Err("collaborator failed")
        }
        .await;
        assert!(outcome.is_err());
        assert!(!flag.is_busy());
    }
}
