//! Hero parallax.

/// Vertical offset for the hero content, or `None` once the page has
/// scrolled past the hero.
pub fn hero_offset(scroll: f64, hero_height: f64, speed: f64) -> Option<f64> {
    if scroll < hero_height {
        Some(scroll * speed)
    } else {
        None
    }
}

/// CSS `transform` value for an offset in px.
pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}
