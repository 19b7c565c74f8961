//! Viewport-intersection bookkeeping.
//!
//! Both intersection watchers (visibility animator, lazy images) act once per
//! element and then stop watching it. [`OneShot`] holds per-element payloads
//! keyed by registration order and hands each one out exactly once.

/// Class added to blocks once they have scrolled into view.
pub const ANIMATE_IN_CLASS: &str = "animate-in";
/// Placeholder class removed from lazily loaded images.
pub const LAZY_CLASS: &str = "lazy";

/// Per-element payloads released on first intersection.
#[derive(Debug, Clone)]
pub struct OneShot<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for OneShot<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> OneShot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new element; returns its key.
    pub fn register(&mut self, payload: T) -> usize {
        self.slots.push(Some(payload));
        self.slots.len() - 1
    }

    /// Handle an intersection notification. Returns the payload the first
    /// time `key` is seen intersecting, `None` otherwise.
    pub fn intersect(&mut self, key: usize, is_intersecting: bool) -> Option<T> {
        if !is_intersecting {
            return None;
        }
        self.slots.get_mut(key)?.take()
    }

    /// Elements still waiting for their first intersection.
    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_done(&self, key: usize) -> bool {
        matches!(self.slots.get(key), Some(None))
    }
}

/// Work to do on a lazy image when it comes into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazySwap {
    /// New `src`, copied verbatim; `None` when the pending attribute was empty
    pub src: Option<String>,
}

impl LazySwap {
    pub fn from_pending(pending: &str) -> Self {
        Self {
            src: (!pending.is_empty()).then(|| pending.to_string()),
        }
    }
}
