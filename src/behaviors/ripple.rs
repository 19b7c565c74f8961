//! Click ripple on button-styled controls.

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use landing_fx_core::ripple::RIPPLE_CLASS;
use landing_fx_core::{Bounds, LandingConfig, LandingResult, Ripple};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::dom::{js_err, set_style, Page};

pub fn install(page: &Page, config: &LandingConfig) -> LandingResult<Vec<EventListener>> {
    let buttons = page.query_all(&config.selectors.buttons)?;
    let lifetime_ms = config.ripple_ms;

    let listeners = buttons
        .iter()
        .map(|button| {
            let page = page.clone();
            let target = button.clone();
            EventListener::new(button, "click", move |event| {
                let Some(click) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if let Err(err) = spawn_ripple(&page, &target, click, lifetime_ms) {
                    tracing::warn!(error = %err, "Ripple failed");
                }
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(buttons = listeners.len(), "Ripple wired");
    Ok(listeners)
}

/// Append one ripple to `button` and schedule its removal.
fn spawn_ripple(
    page: &Page,
    button: &Element,
    click: &MouseEvent,
    lifetime_ms: u32,
) -> LandingResult<()> {
    let rect = button.get_bounding_client_rect();
    let ripple = Ripple::from_click(
        Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        },
        f64::from(click.client_x()),
        f64::from(click.client_y()),
    );

    let span = page.create("span")?;
    for (property, value) in ripple.style() {
        set_style(&span, property, &value)?;
    }
    span.class_list().add_1(RIPPLE_CLASS).map_err(js_err)?;
    button.append_child(&span).map_err(js_err)?;

    Timeout::new(lifetime_ms, move || span.remove()).forget();
    Ok(())
}
