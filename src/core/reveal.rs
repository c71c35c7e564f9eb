//! One-shot delayed reveal of decorative elements
//!
//! The schedule is armed when the screen mounts. The browser timer calls
//! [`RevealSchedule::fire`]; teardown calls [`RevealSchedule::cancel`]. Once
//! cancelled, a late timer is ignored so nothing updates after unmount.

use std::time::Duration;

/// Delay between mount and the decorative elements appearing
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealPhase {
    Pending,
    Revealed,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealSchedule {
    delay: Duration,
    phase: RevealPhase,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_DELAY)
    }
}

impl RevealSchedule {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: RevealPhase::Pending,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[cfg(test)]
    fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[cfg(test)]
    fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Timer callback. Returns `true` only on the pending -> revealed edge,
    /// which is the one time the caller should publish the flag.
    pub fn fire(&mut self) -> bool {
        if self.phase == RevealPhase::Pending {
            self.phase = RevealPhase::Revealed;
            true
        } else {
            false
        }
    }

    /// Fires if at least `delay` has passed since mount.
    #[cfg(test)]
    fn advance(&mut self, elapsed: Duration) -> bool {
        elapsed >= self.delay && self.fire()
    }

    /// Teardown. A pending reveal will never happen.
    pub fn cancel(&mut self) {
        if self.phase == RevealPhase::Pending {
            self.phase = RevealPhase::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_at_mount() {
        let schedule = RevealSchedule::default();
        assert_eq!(schedule.delay(), Duration::from_millis(300));
        assert_eq!(schedule.phase(), RevealPhase::Pending);
        assert!(!schedule.is_revealed());
    }

    #[test]
    fn test_reveals_only_after_delay() {
        let mut schedule = RevealSchedule::default();
        assert!(!schedule.advance(Duration::from_millis(299)));
        assert!(!schedule.is_revealed());

        assert!(schedule.advance(Duration::from_millis(300)));
        assert!(schedule.is_revealed());
    }

    #[test]
    fn test_reveal_is_permanent_and_reported_once() {
        let mut schedule = RevealSchedule::new(Duration::from_millis(10));
        assert!(schedule.fire());
        assert!(!schedule.fire());
        assert!(!schedule.advance(Duration::from_secs(60)));

        schedule.cancel();
        assert!(schedule.is_revealed());
    }

    #[test]
    fn test_cancel_before_delay_blocks_late_timer() {
        let mut schedule = RevealSchedule::default();
        schedule.cancel();
        assert_eq!(schedule.phase(), RevealPhase::Cancelled);

        assert!(!schedule.fire());
        assert!(!schedule.advance(Duration::from_secs(1)));
        assert!(!schedule.is_revealed());
    }

    #[test]
    fn test_zero_delay_reveals_immediately() {
        let mut schedule = RevealSchedule::new(Duration::ZERO);
        assert!(schedule.advance(Duration::ZERO));
    }
}
