//! Page configuration.
//!
//! All selectors, thresholds and timings the behaviors use. Every field has a
//! default matching the stock landing page markup, so an empty JSON object
//! (or no configuration at all) gives the reference behavior.
//!
//! ```
//! use landing_fx_core::LandingConfig;
//!
//! let config = LandingConfig::from_json(r#"{ "header": { "hide_after": 320 } }"#).unwrap();
//! assert_eq!(config.header.hide_after, 320.0);
//! assert_eq!(config.header.scrolled_after, 100.0);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::{LandingError, LandingResult};
use crate::testimonial::Testimonial;

/// Top-level configuration for a mounted page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    /// DOM contract
    pub selectors: Selectors,
    /// Header marker thresholds
    pub header: HeaderConfig,
    /// Minimum spacing between scroll handler runs, in ms (0 = every event)
    pub scroll_throttle_ms: u32,
    /// Visibility animator observer options
    pub reveal: RevealConfig,
    /// Testimonial records and timings
    pub testimonials: TestimonialConfig,
    /// Hero content offset per unit of scroll
    pub parallax_speed: f64,
    /// Lifetime of a ripple overlay, in ms
    pub ripple_ms: u32,
    /// Text of the contact line shown in the mobile overlay
    pub contact_line: Option<String>,
    /// Service worker script path (`null` disables registration)
    pub service_worker: Option<String>,
    /// Image URLs fetched at mount to warm the cache
    pub preload_images: Vec<String>,
    /// Maximum console log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            header: HeaderConfig::default(),
            scroll_throttle_ms: 16,
            reveal: RevealConfig::default(),
            testimonials: TestimonialConfig::default(),
            parallax_speed: 0.5,
            ripple_ms: 600,
            contact_line: None,
            service_worker: Some("/sw.js".to_string()),
            preload_images: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> LandingResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges serde cannot express.
    pub fn validate(&self) -> LandingResult<()> {
        check_non_negative("header.scrolled_after", self.header.scrolled_after)?;
        check_non_negative("header.hide_after", self.header.hide_after)?;
        check_non_negative("parallax_speed", self.parallax_speed)?;

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(LandingError::Config(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if self.testimonials.interval_ms == 0 {
            return Err(LandingError::Config(
                "testimonials.interval_ms must be greater than zero".to_string(),
            ));
        }
        if let Some(path) = &self.service_worker {
            if path.trim().is_empty() {
                return Err(LandingError::Config(
                    "service_worker path is empty".to_string(),
                ));
            }
        }
        self.max_level()?;
        Ok(())
    }

    /// The configured log level as a `tracing` level.
    pub fn max_level(&self) -> LandingResult<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| LandingError::Config(format!("unknown log level: {}", self.log_level)))
    }
}

fn check_non_negative(field: &str, value: f64) -> LandingResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LandingError::Config(format!(
            "{field} must be a finite non-negative number, got {value}"
        )))
    }
}

/// CSS selectors for every element the behaviors query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_actions: String,
    pub nav_logo: String,
    /// Logo sub-element left out of the overlay's logo clone
    pub logo_omit: String,
    pub header: String,
    pub anchors: String,
    pub reveal: String,
    pub pagination_dots: String,
    pub testimonial_content: String,
    pub testimonial_quote: String,
    pub testimonial_author: String,
    pub testimonial_title: String,
    pub hero: String,
    pub hero_content: String,
    pub buttons: String,
    pub forms: String,
    pub lazy_images: String,
    /// Attribute holding the real image location
    pub lazy_source_attr: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: ".nav__toggle".into(),
            nav_menu: ".nav__menu".into(),
            nav_actions: ".nav__actions".into(),
            nav_logo: ".nav__logo".into(),
            logo_omit: ".mail__box".into(),
            header: ".header".into(),
            anchors: "a[href^=\"#\"]".into(),
            reveal: ".feature, .landing-page, .testimonial__content".into(),
            pagination_dots: ".pagination-dot".into(),
            testimonial_content: ".testimonial__content".into(),
            testimonial_quote: ".testimonial__quote".into(),
            testimonial_author: ".testimonial__author strong".into(),
            testimonial_title: ".testimonial__author span".into(),
            hero: ".hero".into(),
            hero_content: ".hero__content".into(),
            buttons: ".btn".into(),
            forms: "form".into(),
            lazy_images: "img[data-src]".into(),
            lazy_source_attr: "data-src".into(),
        }
    }
}

/// Scroll offsets at which the header markers switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// `header--scrolled` from this offset on
    pub scrolled_after: f64,
    /// `header--hidden` while scrolling down past this offset
    pub hide_after: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_after: 100.0,
            hide_after: 200.0,
        }
    }
}

/// Intersection observer options for the visibility animator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
        }
    }
}

/// Testimonial records and carousel timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestimonialConfig {
    pub records: Vec<Testimonial>,
    /// Auto-advance period
    pub interval_ms: u32,
    /// Delay between fading out and writing the new slide
    pub fade_ms: u32,
    /// Container opacity while the slide is swapped
    pub faded_opacity: String,
}

impl Default for TestimonialConfig {
    fn default() -> Self {
        Self {
            records: Testimonial::defaults(),
            interval_ms: 5000,
            fade_ms: 200,
            faded_opacity: "0.5".into(),
        }
    }
}
