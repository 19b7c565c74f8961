//! Visibility animator: marks content blocks `animate-in` on first sight.

use landing_fx_core::viewport::ANIMATE_IN_CLASS;
use landing_fx_core::{LandingConfig, LandingResult};
use wasm_bindgen::JsValue;
use web_sys::IntersectionObserverInit;

use crate::dom::{set_class, IntersectionWatch, Page};

pub fn install(page: &Page, config: &LandingConfig) -> LandingResult<Option<IntersectionWatch>> {
    let blocks = page.query_all(&config.selectors.reveal)?;
    if blocks.is_empty() {
        tracing::debug!("No animatable blocks");
        return Ok(None);
    }

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    init.set_root_margin(&config.reveal.root_margin);

    let count = blocks.len();
    let watch = IntersectionWatch::new(
        blocks.into_iter().map(|el| (el, ())).collect(),
        &init,
        |block, ()| set_class(block, ANIMATE_IN_CLASS, true),
    )?;

    tracing::debug!(blocks = count, "Visibility animator observing");
    Ok(Some(watch))
}
