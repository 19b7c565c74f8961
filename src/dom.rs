//! Thin helpers over `web-sys` DOM access.
//!
//! Everything returns [`LandingResult`] so a behavior can bail out with `?`
//! when the browser rejects a call.

use gloo::events::EventListener;
use js_sys::Array;
use landing_fx_core::{LandingError, LandingResult, OneShot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

/// Convert a thrown JS value into a [`LandingError`].
pub fn js_err(value: JsValue) -> LandingError {
    LandingError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Handles to the current browsing context.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> LandingResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| LandingError::MissingElement("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| LandingError::MissingElement("document".into()))?;
        Ok(Self { window, document })
    }

    /// First match for `selector`, `None` if absent.
    pub fn query(&self, selector: &str) -> LandingResult<Option<Element>> {
        self.document
            .query_selector(selector)
            .map_err(|_| LandingError::InvalidSelector(selector.to_string()))
    }

    /// First match for `selector` as an `HTMLElement`.
    pub fn query_html(&self, selector: &str) -> LandingResult<Option<HtmlElement>> {
        Ok(self
            .query(selector)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
    }

    /// Every element matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> LandingResult<Vec<Element>> {
        query_all_in(&self.document, selector)
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    /// Vertical scroll offset of the window.
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    /// Milliseconds since navigation start.
    pub fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|perf| perf.now())
            .unwrap_or_default()
    }

    pub fn create(&self, tag: &str) -> LandingResult<HtmlElement> {
        self.document
            .create_element(tag)
            .map_err(js_err)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| LandingError::Js(format!("<{tag}> is not an HTMLElement")))
    }

    /// Run `f` once the window `load` event has fired (now, if it already has).
    pub fn on_load(&self, f: impl FnOnce() + 'static) -> Option<EventListener> {
        if self.document.ready_state() == "complete" {
            f();
            None
        } else {
            Some(EventListener::once(&self.window, "load", move |_| f()))
        }
    }
}

/// Every element under `root` matching `selector`.
pub fn query_all_in(root: &impl AsRef<web_sys::Node>, selector: &str) -> LandingResult<Vec<Element>> {
    let node: &web_sys::Node = root.as_ref();
    let found = if let Some(document) = node.dyn_ref::<Document>() {
        document.query_selector_all(selector)
    } else if let Some(element) = node.dyn_ref::<Element>() {
        element.query_selector_all(selector)
    } else {
        return Ok(Vec::new());
    };
    let list = found.map_err(|_| LandingError::InvalidSelector(selector.to_string()))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        tracing::warn!(class, error = %js_err(err), "Class update failed");
    }
}

/// Set an inline style property.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> LandingResult<()> {
    el.style().set_property(property, value).map_err(js_err)
}

/// Drop an inline style property.
pub fn clear_style(el: &HtmlElement, property: &str) -> LandingResult<()> {
    el.style().remove_property(property).map(|_| ()).map_err(js_err)
}

/// An intersection observer over a fixed element list that hands each
/// element to its handler at most once, then stops observing it.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionWatch {
    pub fn new<T: 'static>(
        elements: Vec<(Element, T)>,
        init: &IntersectionObserverInit,
        mut on_enter: impl FnMut(&Element, T) + 'static,
    ) -> LandingResult<Self> {
        let mut slots = OneShot::new();
        let mut targets = Vec::with_capacity(elements.len());
        for (element, payload) in elements {
            slots.register(payload);
            targets.push(element);
        }
        let targets = Rc::new(targets);
        let slots = Rc::new(RefCell::new(slots));

        let callback_targets = Rc::clone(&targets);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(key) = callback_targets.iter().position(|el| *el == target) else {
                        continue;
                    };
                    let released = slots.borrow_mut().intersect(key, entry.is_intersecting());
                    if let Some(payload) = released {
                        observer.unobserve(&target);
                        on_enter(&target, payload);
                    }
                }
            },
        );

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)
                .map_err(js_err)?;
        for target in targets.iter() {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.disconnect();
    }
}
