//! Service worker registration.
//!
//! One attempt after window `load`. The outcome is only logged; a rejection
//! is never retried and never shown to the visitor.

use gloo::events::EventListener;
use js_sys::Reflect;
use landing_fx_core::{LandingError, LandingResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::ServiceWorkerRegistration;

use crate::dom::Page;

/// Whether the browser exposes `navigator.serviceWorker`.
pub fn supported(page: &Page) -> bool {
    Reflect::has(&page.window.navigator(), &JsValue::from_str("serviceWorker")).unwrap_or(false)
}

/// Schedule the registration. `None` when disabled or unsupported.
pub fn install(page: &Page, path: Option<&str>) -> Option<EventListener> {
    let path = path?.to_string();
    if !supported(page) {
        tracing::debug!("Service workers unsupported");
        return None;
    }

    let load_page = page.clone();
    page.on_load(move || {
        spawn_local(async move {
            match register(&load_page, &path).await {
                Ok(scope) => tracing::info!(%scope, "ServiceWorker registration successful"),
                Err(err) => tracing::warn!(error = %err, "ServiceWorker registration failed"),
            }
        })
    })
}

/// Register the worker script; returns the registration scope.
pub async fn register(page: &Page, path: &str) -> LandingResult<String> {
    let container = page.window.navigator().service_worker();
    let registration = JsFuture::from(container.register(path))
        .await
        .map_err(|err| LandingError::Registration(describe(&err)))?;

    Ok(registration
        .dyn_into::<ServiceWorkerRegistration>()
        .map(|reg| reg.scope())
        .unwrap_or_default())
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}
