//! Error types for landing-fx

use thiserror::Error;

/// Main error type for landing-fx operations
#[derive(Error, Debug)]
pub enum LandingError {
    /// An element the behavior depends on is not in the page
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// The browser rejected a selector string
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Configuration JSON could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A browser API call failed (stringified JS exception)
    #[error("Browser API error: {0}")]
    Js(String),

    /// Service worker registration was rejected by the browser
    #[error("Service worker registration failed: {0}")]
    Registration(String),

    /// Index outside the testimonial list
    #[error("Testimonial index {index} out of range (have {len})")]
    TestimonialOutOfRange { index: usize, len: usize },
}

/// Result type alias using LandingError
pub type LandingResult<T> = Result<T, LandingError>;
