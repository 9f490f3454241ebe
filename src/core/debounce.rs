//! Trailing-edge debounce with a max-wait ceiling.
//!
//! [`Debouncer`] is driven by explicit instants; its owner decides when to
//! wake up and poll. The pending value lives inside the debouncer, so dropping
//! or cancelling it means the value can never be committed.

use std::time::Duration;
use tokio::time::Instant;

/// Default quiet period before a value is committed.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Default ceiling on how long sustained input may postpone a commit.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_millis(1200);

/// Timing parameters for a debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebouncePolicy {
    pub delay: Duration,
    pub max_wait: Duration,
}

impl DebouncePolicy {
    /// `max_wait` is raised to `delay` if given smaller.
    pub fn new(delay: Duration, max_wait: Duration) -> Self {
        Self {
            delay,
            max_wait: max_wait.max(delay),
        }
    }
}

impl Default for DebouncePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_MAX_WAIT)
    }
}

/// Coalesces a stream of values into occasional commits.
#[derive(Debug)]
pub struct Debouncer<T> {
    policy: DebouncePolicy,
    pending: Option<T>,
    last_input: Option<Instant>,
    // Start of the current uncommitted burst; anchors the max-wait deadline
    burst_start: Option<Instant>,
}

impl<T> Debouncer<T> {
    pub fn new(policy: DebouncePolicy) -> Self {
        Self {
            policy,
            pending: None,
            last_input: None,
            burst_start: None,
        }
    }

    pub fn policy(&self) -> DebouncePolicy {
        self.policy
    }

    /// Record a new value, replacing any pending one. Returns the next deadline.
    pub fn push(&mut self, value: T, now: Instant) -> Instant {
        self.pending = Some(value);
        self.last_input = Some(now);
        let burst_start = *self.burst_start.get_or_insert(now);

        (now + self.policy.delay).min(burst_start + self.policy.max_wait)
    }

    /// When the pending value is due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref()?;
        let trailing = self.last_input? + self.policy.delay;
        let ceiling = self.burst_start? + self.policy.max_wait;
        Some(trailing.min(ceiling))
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if deadline <= now => self.flush(),
            _ => None,
        }
    }

    /// Take the pending value regardless of timing.
    pub fn flush(&mut self) -> Option<T> {
        self.last_input = None;
        self.burst_start = None;
        self.pending.take()
    }

    /// Drop the pending value without committing it.
    pub fn cancel(&mut self) {
        self.flush();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DebouncePolicy::default())
    }
}
