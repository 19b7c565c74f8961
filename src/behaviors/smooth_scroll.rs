//! Smooth scrolling for in-page anchors.

use gloo::events::{EventListener, EventListenerOptions};
use landing_fx_core::anchor::{fragment_id, scroll_destination};
use landing_fx_core::{LandingConfig, LandingResult};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::Page;

/// Intercept clicks on every in-page anchor. Returns one listener per link.
pub fn install(page: &Page, config: &LandingConfig) -> LandingResult<Vec<EventListener>> {
    let links = page.query_all(&config.selectors.anchors)?;
    let listeners = links
        .iter()
        .map(|link| {
            let page = page.clone();
            let link_el = link.clone();
            let header_selector = config.selectors.header.clone();
            EventListener::new_with_options(
                link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(top) = destination(&page, &link_el, &header_selector) else {
                        return;
                    };
                    event.prevent_default();

                    let options = ScrollToOptions::new();
                    options.set_top(top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    page.window.scroll_to_with_scroll_to_options(&options);
                },
            )
        })
        .collect::<Vec<_>>();

    tracing::debug!(links = listeners.len(), "Smooth scroll wired");
    Ok(listeners)
}

/// Scroll target for `link`, or `None` to leave the click alone.
fn destination(page: &Page, link: &Element, header_selector: &str) -> Option<f64> {
    let href = link.get_attribute("href")?;
    let id = fragment_id(&href)?;
    let Some(target) = page.document.get_element_by_id(id) else {
        tracing::debug!(id, "Fragment target not found");
        return None;
    };

    let target_top = target
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_top()))
        .unwrap_or_default();
    let header_height = page
        .query_html(header_selector)
        .ok()
        .flatten()
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or_default();

    Some(scroll_destination(target_top, header_height))
}
