//! landing-fx
//!
//! Cosmetic interactivity for the marketing landing page, compiled to
//! WebAssembly. The module attaches to markup that is already in the page:
//! mobile drawer, smooth anchor scrolling, header scroll styling, reveal
//! animations, testimonial carousel, hero parallax, button ripples, lazy
//! images, form interception and service worker registration.
//!
//! ## Loading
//!
//! ```html
//! <script type="application/json" id="landing-fx-config">
//!   { "service_worker": "/sw.js", "log_level": "debug" }
//! </script>
//! <script type="module">
//!   import init from "./pkg/landing_fx.js";
//!   init();
//! </script>
//! ```
//!
//! The configuration element is optional; without it every setting takes its
//! default (see [`LandingConfig`]).

pub mod behaviors;
pub mod dom;
pub mod landing;
pub mod logging;

use gloo::events::EventListener;
use landing_fx_core::{LandingConfig, LandingError};
use tracing::Level;
use wasm_bindgen::prelude::*;

use crate::dom::Page;

/// Id of the optional inline JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "landing-fx-config";

/// WASM entry point, called when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let page = Page::current().map_err(to_js)?;
    let (config, config_error) = match load_config(&page) {
        Ok(config) => (config, None),
        Err(err) => (LandingConfig::default(), Some(err)),
    };
    logging::init(config.max_level().unwrap_or(Level::INFO));
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "Invalid page configuration, using defaults");
    }

    if page.document.ready_state() == "loading" {
        EventListener::once(&page.document, "DOMContentLoaded", move |_| run(config)).forget();
    } else {
        run(config);
    }
    Ok(())
}

fn run(config: LandingConfig) {
    if let Err(err) = landing::mount(config) {
        tracing::error!(error = %err, "Landing page failed to mount");
    }
}

/// Read the inline configuration element, falling back to defaults when the
/// page has none.
pub fn load_config(page: &Page) -> Result<LandingConfig, LandingError> {
    match page
        .document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) if !json.trim().is_empty() => LandingConfig::from_json(&json),
        _ => Ok(LandingConfig::default()),
    }
}

fn to_js(err: LandingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
