//! Countdown that gates the QR payment modal.

/// How long a payment QR code stays valid (5 minutes)
pub const PAYMENT_TIMEOUT_SECS: u32 = 300;

/// Countdown state: `Idle` when inactive, `Running` while seconds remain.
///
/// `remaining_seconds` always lies in `1..=max_seconds` and equals
/// `max_seconds` whenever the timer is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTimer {
    remaining_seconds: u32,
    max_seconds: u32,
    active: bool,
}

/// What a single tick did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was idle, nothing changed
    Idle,
    /// Still running with this many seconds left
    Running(u32),
    /// The last second elapsed; the timer is idle again and reset
    Expired,
}

impl CountdownTimer {
    pub fn new(max_seconds: u32) -> Self {
        let max_seconds = max_seconds.max(1);
        Self {
            remaining_seconds: max_seconds,
            max_seconds,
            active: false,
        }
    }

    /// Begin counting down from the full duration. Restarts if already running.
    pub fn start(self) -> Self {
        Self {
            remaining_seconds: self.max_seconds,
            active: true,
            ..self
        }
    }

    /// Advance by one elapsed second.
    pub fn tick(self) -> (Self, TickOutcome) {
        if !self.active {
            return (self, TickOutcome::Idle);
        }

        if self.remaining_seconds <= 1 {
            return (self.cancel(), TickOutcome::Expired);
        }

        let remaining_seconds = self.remaining_seconds - 1;
        (
            Self {
                remaining_seconds,
                ..self
            },
            TickOutcome::Running(remaining_seconds),
        )
    }

    /// Stop and reset to the full duration.
    pub fn cancel(self) -> Self {
        Self {
            remaining_seconds: self.max_seconds,
            active: false,
            ..self
        }
    }

    pub fn is_running(&self) -> bool {
        self.active
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn max_seconds(&self) -> u32 {
        self.max_seconds
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_seconds / 60,
            self.remaining_seconds % 60
        )
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(PAYMENT_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_idle_at_max() {
        let timer = CountdownTimer::default();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 300);
        assert_eq!(timer.display(), "05:00");
    }

    #[test]
    fn test_idle_timer_does_not_tick() {
        let (timer, outcome) = CountdownTimer::new(10).tick();
        assert_eq!(outcome, TickOutcome::Idle);
        assert_eq!(timer.remaining_seconds(), 10);
    }

    #[test]
    fn test_tick_counts_down() {
        let timer = CountdownTimer::new(300).start();
        let (timer, outcome) = timer.tick();
        assert_eq!(outcome, TickOutcome::Running(299));
        assert!(timer.is_running());
        assert_eq!(timer.display(), "04:59");
    }

    #[test]
    fn test_full_countdown_expires_and_resets() {
        let mut timer = CountdownTimer::new(300).start();
        let mut last = TickOutcome::Idle;
        for _ in 0..300 {
            let (next, outcome) = timer.tick();
            timer = next;
            last = outcome;
        }

        assert_eq!(last, TickOutcome::Expired);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 300);
    }

    #[test]
    fn test_expires_exactly_on_last_tick() {
        let mut timer = CountdownTimer::new(3).start();
        for expected in [TickOutcome::Running(2), TickOutcome::Running(1)] {
            let (next, outcome) = timer.tick();
            assert_eq!(outcome, expected);
            timer = next;
        }
        let (timer, outcome) = timer.tick();
        assert_eq!(outcome, TickOutcome::Expired);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_cancel_resets_to_max() {
        let (timer, _) = CountdownTimer::new(60).start().tick();
        let timer = timer.cancel();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 60);
    }

    #[test]
    fn test_start_while_running_restarts() {
        let (timer, _) = CountdownTimer::new(60).start().tick();
        assert_eq!(timer.start().remaining_seconds(), 60);
    }

    #[test]
    fn test_zero_duration_is_clamped() {
        let timer = CountdownTimer::new(0).start();
        assert_eq!(timer.remaining_seconds(), 1);
        assert_eq!(timer.tick().1, TickOutcome::Expired);
    }
}
