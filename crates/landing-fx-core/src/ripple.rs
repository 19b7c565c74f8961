//! Button ripple geometry.

/// Class of the transient ripple element.
pub const RIPPLE_CLASS: &str = "btn__ripple";

/// A client-space bounding box (`getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A square overlay centered on the click point, relative to the button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn from_click(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            size,
            left: client_x - bounds.left - size / 2.0,
            top: client_y - bounds.top - size / 2.0,
        }
    }

    /// Inline style properties, in the order they are applied.
    pub fn style(&self) -> [(&'static str, String); 4] {
        [
            ("width", px(self.size)),
            ("height", px(self.size)),
            ("left", px(self.left)),
            ("top", px(self.top)),
        ]
    }

    /// Center of the ripple in button-local coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.size / 2.0, self.top + self.size / 2.0)
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}
