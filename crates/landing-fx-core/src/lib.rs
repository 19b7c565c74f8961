//! landing-fx Core Library
//!
//! Platform-free logic behind the landing page effects.
//!
//! ## Overview
//!
//! Every behavior the browser binding wires up is split in two: the binding
//! reads the DOM and applies changes, and this crate decides what those
//! changes are. Nothing here touches `web-sys`, so the state machines and the
//! geometry run (and are tested) on the host.
//!
//! - [`header::HeaderState`] - `scrolled` / `hidden` header markers
//! - [`menu::MenuState`] and [`menu::OverlayPlan`] - the mobile drawer
//! - [`testimonial::Rotator`] - testimonial cursor and rendered slides
//! - [`anchor`] - in-page fragment resolution and scroll destination
//! - [`parallax`], [`ripple`] - scroll and click geometry
//! - [`viewport::OneShot`] - exactly-once intersection handling
//! - [`throttle::Throttle`] - leading + trailing scroll throttling
//! - [`logging`] - console line formatting for `tracing` events
//!
//! ## Quick Start
//!
//! ```
//! use landing_fx_core::{HeaderState, LandingConfig};
//!
//! let config = LandingConfig::from_json(r#"{ "parallax_speed": 0.25 }"#).unwrap();
//! let mut header = HeaderState::new(config.header.clone());
//!
//! let classes = header.observe(250.0);
//! assert!(classes.scrolled);
//! assert!(classes.hidden);
//! ```

pub mod anchor;
pub mod config;
pub mod error;
pub mod header;
pub mod logging;
pub mod menu;
pub mod parallax;
pub mod ripple;
pub mod testimonial;
pub mod throttle;
pub mod viewport;

// Re-exports
pub use config::{
    HeaderConfig, LandingConfig, RevealConfig, Selectors, TestimonialConfig,
};
pub use error::{LandingError, LandingResult};
pub use header::{HeaderClasses, HeaderState};
pub use menu::{MenuState, MenuTrigger, MenuView, OverlayPart, OverlayPlan, OverlaySources};
pub use ripple::{Bounds, Ripple};
pub use testimonial::{Rotator, Slide, Testimonial};
pub use throttle::{Admission, Throttle};
pub use viewport::{LazySwap, OneShot};
