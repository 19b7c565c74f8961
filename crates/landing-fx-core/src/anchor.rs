//! In-page anchor navigation.

/// Element id an in-page `href` points at.
///
/// Returns `None` for anything that is not a non-empty fragment (`"#"`,
/// `"/about"`, `""`), which leaves the link's default behavior alone.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Scroll destination for a target so it lands just below the fixed header.
pub fn scroll_destination(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height
}
