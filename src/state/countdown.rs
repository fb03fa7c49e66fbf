//! Countdown state: remaining seconds plus a running flag, advanced one tick
//! at a time by the scheduler.

/// Shared countdown state mutated by both the scheduler and admin commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
    running: bool,
}

/// Observable result of a single scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown decremented and keeps running; carries the new remaining value.
    Tick(u64),
    /// The countdown just reached zero. Emitted exactly once per armed countdown.
    Finished,
}

impl Countdown {
    /// Arm the countdown with the given duration and start it.
    ///
    /// Re-arming an already running countdown simply replaces the remaining time.
    pub fn start(&mut self, seconds: u64) {
        self.remaining = seconds;
        self.running = true;
    }

    /// Halt the countdown without clearing the remaining time. Idempotent: a
    /// second stop leaves the state unchanged.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `None` when stopped or already at zero, so a stop recorded
    /// before the tick can never be overwritten by a stale decrement.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.running || self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            Some(TickOutcome::Finished)
        } else {
            Some(TickOutcome::Tick(self.remaining))
        }
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Whether the countdown is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Restore the initial stopped-at-zero state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_run_emits_ticks_then_finished_once() {
        let mut countdown = Countdown::default();
        countdown.start(10);

        let mut outcomes = Vec::new();
        for _ in 0..12 {
            if let Some(outcome) = countdown.tick() {
                outcomes.push(outcome);
            }
        }

        let expected: Vec<TickOutcome> = (1..=9)
            .rev()
            .map(TickOutcome::Tick)
            .chain([TickOutcome::Finished])
            .collect();
        assert_eq!(outcomes, expected);
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn stop_suppresses_further_ticks() {
        let mut countdown = Countdown::default();
        countdown.start(10);

        for expected in [9, 8, 7] {
            assert_eq!(countdown.tick(), Some(TickOutcome::Tick(expected)));
        }

        countdown.stop();
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.remaining(), 7);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut countdown = Countdown::default();
        countdown.start(5);
        countdown.stop();
        countdown.stop();
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), None);
    }

    #[test]
    fn tick_without_start_is_a_no_op() {
        let mut countdown = Countdown::default();
        assert_eq!(countdown.tick(), None);
    }

    #[test]
    fn restart_after_finish_rearms() {
        let mut countdown = Countdown::default();
        countdown.start(1);
        assert_eq!(countdown.tick(), Some(TickOutcome::Finished));
        assert_eq!(countdown.tick(), None);

        countdown.start(2);
        assert_eq!(countdown.tick(), Some(TickOutcome::Tick(1)));
        assert_eq!(countdown.tick(), Some(TickOutcome::Finished));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut countdown = Countdown::default();
        countdown.start(30);
        countdown.reset();
        assert_eq!(countdown, Countdown::default());
    }
}
