//! Call-rate limiting without a clock.
//!
//! `Debounce` only tracks which timer is current; the caller owns the actual
//! timer and reports back when it fires. Every trigger arms a fresh token, so
//! a timer that fires after being superseded is recognized and ignored.

/// Identifies one armed quiet-window timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// What the caller must do after a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    /// Invoke the wrapped callback right now (leading edge).
    pub invoke_now: bool,
    /// Start a timer of `wait_ms` and report it back via `Debounce::elapsed`.
    pub arm: TimerToken,
    pub wait_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: u32,
    immediate: bool,
    next_token: u64,
    pending: Option<TimerToken>,
}

impl Debounce {
    pub const DEFAULT_WAIT_MS: u32 = 10;

    pub fn new(wait_ms: u32, immediate: bool) -> Self {
        Self {
            wait_ms,
            immediate,
            next_token: 0,
            pending: None,
        }
    }

    /// Leading-edge debouncer with the default window.
    pub fn leading() -> Self {
        Self::new(Self::DEFAULT_WAIT_MS, true)
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Token of the currently armed timer, if any. A caller that holds a
    /// host timer handle can cancel it when this changes.
    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }

    pub fn trigger(&mut self) -> Trigger {
        let invoke_now = self.immediate && self.pending.is_none();
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(token);
        Trigger {
            invoke_now,
            arm: token,
            wait_ms: self.wait_ms,
        }
    }

    /// Report that the timer for `token` fired. Returns whether the wrapped
    /// callback should run now (trailing edge).
    pub fn elapsed(&mut self, token: TimerToken) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        !self.immediate
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::leading()
    }
}
