//! Page-loaded marker and critical image preloading.

use gloo::events::EventListener;
use landing_fx_core::LandingResult;
use web_sys::HtmlImageElement;

use crate::dom::{js_err, set_class, Page};

/// Class added to `<body>` once the window has loaded.
pub const LOADED_CLASS: &str = "loaded";

/// Mark `<body>` as loaded after the window `load` event.
pub fn mark_loaded(page: &Page) -> Option<EventListener> {
    let body = page.body()?;
    page.on_load(move || set_class(&body, LOADED_CLASS, true))
}

/// Start fetching `urls` so they are cached before they scroll into view.
pub fn preload(urls: &[String]) -> LandingResult<usize> {
    for url in urls {
        let img = HtmlImageElement::new().map_err(js_err)?;
        img.set_src(url);
    }
    if !urls.is_empty() {
        tracing::debug!(images = urls.len(), "Preloading critical images");
    }
    Ok(urls.len())
}
