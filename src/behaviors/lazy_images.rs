//! Lazy image loader.
//!
//! Each image carrying the pending-source attribute gets its real `src` the
//! first time it intersects the viewport, then is never watched again. The
//! attribute is read at that moment, so late edits to it still apply.

use landing_fx_core::viewport::LAZY_CLASS;
use landing_fx_core::{LandingConfig, LandingResult, LazySwap};
use web_sys::{Element, IntersectionObserverInit};

use crate::dom::{js_err, set_class, IntersectionWatch, Page};

pub fn install(page: &Page, config: &LandingConfig) -> LandingResult<Option<IntersectionWatch>> {
    let images = page.query_all(&config.selectors.lazy_images)?;
    if images.is_empty() {
        tracing::debug!("No lazy images");
        return Ok(None);
    }

    let count = images.len();
    let attr = config.selectors.lazy_source_attr.clone();
    let watch = IntersectionWatch::new(
        images.into_iter().map(|img| (img, ())).collect(),
        &IntersectionObserverInit::new(),
        move |img, ()| load_image(img, &attr),
    )?;
    tracing::debug!(images = count, "Lazy loader observing");
    Ok(Some(watch))
}

fn load_image(img: &Element, attr: &str) {
    let swap = LazySwap::from_pending(&img.get_attribute(attr).unwrap_or_default());
    if let Some(src) = &swap.src {
        if let Err(err) = img.set_attribute("src", src) {
            tracing::warn!(src = %src, error = %js_err(err), "Lazy image swap failed");
        }
    }
    set_class(img, LAZY_CLASS, false);
}
