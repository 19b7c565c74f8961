//! Leading + trailing throttle.
//!
//! The first call in a window runs at once. Calls arriving inside the window
//! collapse into a single trailing run at the window's end, so the last value
//! of a burst is never dropped. Time is supplied by the caller in ms.

/// Decision for one incoming call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admission {
    /// Run the handler now
    Run,
    /// Schedule one trailing run after this many ms
    Schedule(f64),
    /// A trailing run is already pending and will pick up the latest value
    Coalesce,
}

#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_run: Option<f64>,
    trailing_pending: bool,
}

impl Throttle {
    /// A throttle with `limit_ms` between runs; `0` admits every call.
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: f64::from(limit_ms),
            last_run: None,
            trailing_pending: false,
        }
    }

    pub fn admit(&mut self, now: f64) -> Admission {
        if self.trailing_pending {
            return Admission::Coalesce;
        }
        match self.last_run {
            Some(last) if now - last < self.limit_ms => {
                self.trailing_pending = true;
                Admission::Schedule(self.limit_ms - (now - last))
            }
            _ => {
                self.last_run = Some(now);
                Admission::Run
            }
        }
    }

    /// Record that the scheduled trailing run has happened.
    pub fn fire_trailing(&mut self, now: f64) {
        self.trailing_pending = false;
        self.last_run = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.trailing_pending
    }
}
