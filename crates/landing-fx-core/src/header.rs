//! Header scroll state.
//!
//! Two independent markers derived from the scroll offset:
//! - `scrolled` while the page is at or past `scrolled_after`
//! - `hidden` while moving down past `hide_after`; any upward move clears it

use crate::config::HeaderConfig;

/// CSS class added while the page is scrolled.
pub const SCROLLED_CLASS: &str = "header--scrolled";
/// CSS class added while the header is tucked away.
pub const HIDDEN_CLASS: &str = "header--hidden";

/// Marker state to apply to the header element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderClasses {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Tracks the previous offset so scroll direction can be derived.
#[derive(Debug, Clone)]
pub struct HeaderState {
    config: HeaderConfig,
    last_offset: f64,
}

impl HeaderState {
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            config,
            last_offset: 0.0,
        }
    }

    /// Feed the current vertical scroll offset and get the markers for it.
    pub fn observe(&mut self, offset: f64) -> HeaderClasses {
        let classes = HeaderClasses {
            scrolled: offset >= self.config.scrolled_after,
            hidden: offset > self.last_offset && offset > self.config.hide_after,
        };
        self.last_offset = offset;
        classes
    }

    /// Offset seen by the last call to [`observe`](Self::observe).
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}
