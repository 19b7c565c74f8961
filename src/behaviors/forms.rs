//! Form submit interceptor. Submission itself is not implemented yet.

use gloo::events::{EventListener, EventListenerOptions};
use landing_fx_core::{LandingConfig, LandingResult};

use crate::dom::Page;

pub fn install(page: &Page, config: &LandingConfig) -> LandingResult<Vec<EventListener>> {
    let forms = page.query_all(&config.selectors.forms)?;
    Ok(forms
        .iter()
        .map(|form| {
            let id = form.id();
            EventListener::new_with_options(
                form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    tracing::debug!(form = %id, "Form submission intercepted");
                },
            )
        })
        .collect())
}
