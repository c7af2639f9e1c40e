//! Animated Counter
//!
//! Step-wise count-up from 0 to a target value. The state machine is driven
//! by an external tick source; it owns no timer itself.
//!
//! `Idle -> Running -> Completed`, and `Running -> Idle` on cancel.
//! `Completed` is terminal.

use std::time::Duration;

use crate::error::{ContentError, ContentResult};

pub const DEFAULT_DURATION_MS: u32 = 2000;
pub const DEFAULT_STEPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Running,
    Completed,
}

/// Result of [`AnimatedCounter::start`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The caller should begin ticking.
    Started,
    /// A sequence is already in flight; the caller must not start another.
    AlreadyRunning,
    AlreadyCompleted,
}

#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    target: u64,
    duration_ms: u32,
    steps: u32,
    phase: CounterPhase,
    accumulated: f64,
    current: u64,
    ticks: u32,
}

impl AnimatedCounter {
    pub fn new(target: i64, duration_ms: u32, steps: u32) -> ContentResult<Self> {
        let target = u64::try_from(target)
            .map_err(|_| ContentError::invalid("target", format!("must be >= 0, got {target}")))?;
        if duration_ms == 0 {
            return Err(ContentError::invalid("duration_ms", "must be > 0"));
        }
        if steps == 0 {
            return Err(ContentError::invalid("steps", "must be > 0"));
        }

        Ok(Self {
            target,
            duration_ms,
            steps,
            phase: CounterPhase::Idle,
            accumulated: 0.0,
            current: 0,
            ticks: 0,
        })
    }

    /// 60 steps over 2 seconds
    pub fn with_defaults(target: u64) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_DURATION_MS,
            steps: DEFAULT_STEPS,
            phase: CounterPhase::Idle,
            accumulated: 0.0,
            current: 0,
            ticks: 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == CounterPhase::Running
    }

    /// Time between two ticks
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms)) / self.steps
    }

    fn step_value(&self) -> f64 {
        self.target as f64 / f64::from(self.steps)
    }

    pub fn start(&mut self) -> StartOutcome {
        match self.phase {
            CounterPhase::Running => StartOutcome::AlreadyRunning,
            CounterPhase::Completed => StartOutcome::AlreadyCompleted,
            CounterPhase::Idle => {
                self.accumulated = 0.0;
                self.current = 0;
                self.ticks = 0;
                self.phase = CounterPhase::Running;
                log::debug!("counter start target={} steps={}", self.target, self.steps);
                StartOutcome::Started
            }
        }
    }

    /// Advance one step. Returns the value to display, or `None` when the
    /// counter is not running.
    pub fn tick(&mut self) -> Option<u64> {
        if self.phase != CounterPhase::Running {
            return None;
        }

        self.ticks += 1;
        self.accumulated += self.step_value();

        // Snap on the last step so float drift never leaves us short or past
        if self.accumulated >= self.target as f64 || self.ticks >= self.steps {
            self.current = self.target;
            self.phase = CounterPhase::Completed;
            log::debug!("counter completed at {} after {} ticks", self.target, self.ticks);
        } else {
            self.current = (self.accumulated.floor() as u64).min(self.target);
        }
        Some(self.current)
    }

    /// Stop a running sequence. No-op in any other phase.
    pub fn cancel(&mut self) {
        if self.phase == CounterPhase::Running {
            log::debug!("counter cancelled at {}/{}", self.current, self.target);
            self.phase = CounterPhase::Idle;
        }
    }

    /// Remaining values of the running sequence, lazily
    pub fn ticks(&mut self) -> impl Iterator<Item = u64> + '_ {
        std::iter::from_fn(move || self.tick())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_steps_to_hundred() {
        let mut counter = AnimatedCounter::new(100, 1000, 10).unwrap();
        assert_eq!(counter.start(), StartOutcome::Started);
        let values: Vec<u64> = counter.ticks().collect();
        assert_eq!(values, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(counter.phase(), CounterPhase::Completed);
    }

    #[test]
    fn test_step_interval() {
        let counter = AnimatedCounter::new(100, 1000, 10).unwrap();
        assert_eq!(counter.step_interval(), Duration::from_millis(100));

        let defaults = AnimatedCounter::with_defaults(5);
        assert_eq!(defaults.step_interval(), Duration::from_millis(2000) / 60);
    }

    #[test]
    fn test_zero_target_completes_immediately() {
        let mut counter = AnimatedCounter::new(0, 500, 5).unwrap();
        counter.start();
        let values: Vec<u64> = counter.ticks().collect();
        assert_eq!(values, vec![0]);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            AnimatedCounter::new(-1, 1000, 10),
            Err(ContentError::InvalidArgument { name: "target", .. })
        ));
        assert!(matches!(
            AnimatedCounter::new(10, 0, 10),
            Err(ContentError::InvalidArgument { name: "duration_ms", .. })
        ));
        assert!(matches!(
            AnimatedCounter::new(10, 1000, 0),
            Err(ContentError::InvalidArgument { name: "steps", .. })
        ));
    }

    #[test]
    fn test_tick_before_start() {
        let mut counter = AnimatedCounter::with_defaults(10);
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.current(), 0);
    }

    #[test]
    fn test_start_while_running() {
        let mut counter = AnimatedCounter::new(50, 1000, 5).unwrap();
        counter.start();
        counter.tick();
        assert_eq!(counter.start(), StartOutcome::AlreadyRunning);
        // progress is kept, not reset
        assert_eq!(counter.current(), 10);
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut counter = AnimatedCounter::new(3, 30, 3).unwrap();
        counter.start();
        counter.ticks().for_each(drop);
        assert_eq!(counter.start(), StartOutcome::AlreadyCompleted);
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.current(), 3);
    }

    #[test]
    fn test_cancel_stops_emission() {
        let mut counter = AnimatedCounter::new(100, 1000, 10).unwrap();
        counter.start();
        counter.tick();
        counter.tick();
        counter.cancel();
        assert_eq!(counter.phase(), CounterPhase::Idle);
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.current(), 20);
    }

    #[test]
    fn test_restart_after_cancel() {
        let mut counter = AnimatedCounter::new(100, 1000, 10).unwrap();
        counter.start();
        counter.tick();
        counter.cancel();
        assert_eq!(counter.start(), StartOutcome::Started);
        assert_eq!(counter.tick(), Some(10));
    }
}
