//! Hero parallax.

use gloo::events::EventListener;
use landing_fx_core::parallax::{hero_offset, translate_y};
use landing_fx_core::{LandingConfig, LandingResult};

use crate::dom::{set_style, Page};

/// Shift the hero content while the hero is on screen. `None` if the page
/// has no hero.
pub fn install(page: &Page, config: &LandingConfig) -> LandingResult<Option<EventListener>> {
    let hero = page.query_html(&config.selectors.hero)?;
    let content = page.query_html(&config.selectors.hero_content)?;
    let (Some(hero), Some(content)) = (hero, content) else {
        tracing::debug!("No hero, parallax inactive");
        return Ok(None);
    };

    let speed = config.parallax_speed;
    let scroll_page = page.clone();
    Ok(Some(EventListener::new(&page.window, "scroll", move |_| {
        let scrolled = scroll_page.scroll_y();
        let Some(offset) = hero_offset(scrolled, f64::from(hero.offset_height()), speed) else {
            return;
        };
        if let Err(err) = set_style(&content, "transform", &translate_y(offset)) {
            tracing::warn!(error = %err, "Parallax update failed");
        }
    })))
}
