use std::time::{Duration, Instant};

/// Single-shot tick timer the controller drives.
///
/// At most one tick is armed at a time: `schedule` replaces any pending
/// tick and `cancel` drops it.
pub trait TickScheduler {
    fn schedule(&mut self, delay: Duration);
    fn cancel(&mut self);
}

/// Wall-clock scheduler polled by the terminal loop.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    deadline: Option<Instant>,
}

impl DeadlineScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the pending tick when its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending tick, if one is armed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl TickScheduler for DeadlineScheduler {
    fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Deterministic scheduler for headless runs and tests.
///
/// Records every requested delay; ticks fire only when `fire` is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: Option<Duration>,
    history: Vec<Duration>,
    cancellations: usize,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the pending tick, returning whether one was armed.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<Duration> {
        self.pending
    }

    /// Every delay passed to `schedule`, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Duration] {
        &self.history
    }

    #[must_use]
    pub fn cancellations(&self) -> usize {
        self.cancellations
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) {
        self.pending = Some(delay);
        self.history.push(delay);
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.cancellations += 1;
        }
    }
}
