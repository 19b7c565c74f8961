//! Mobile navigation drawer.
//!
//! Builds the overlay once from the page's own navigation markup and keeps
//! the open/closed markers and the body scroll lock in sync with
//! [`MenuState`].

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use landing_fx_core::menu::{
    CLOSE_BUTTON_CLASS, CLOSE_BUTTON_LABEL, CONTACT_LINE_CLASS, OVERLAY_CLASS,
    OVERLAY_OPEN_CLASS, TOGGLE_OPEN_CLASS,
};
use landing_fx_core::{
    LandingConfig, LandingError, LandingResult, MenuState, MenuTrigger, MenuView, OverlayPart,
    OverlayPlan, OverlaySources,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement};

use crate::dom::{self, js_err, set_class, Page};

/// The live drawer: overlay, toggle and current mode.
pub struct MobileMenu {
    state: Cell<MenuState>,
    overlay: HtmlElement,
    toggle: Element,
    body: Option<HtmlElement>,
}

impl MobileMenu {
    /// Apply a trigger and re-render.
    pub fn fire(&self, trigger: MenuTrigger) {
        let next = self.state.get().apply(trigger);
        self.state.set(next);
        self.render(next.view());
        tracing::debug!(?trigger, open = next.is_open(), "Mobile menu");
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn overlay(&self) -> &HtmlElement {
        &self.overlay
    }

    fn render(&self, view: MenuView) {
        set_class(&self.overlay, OVERLAY_OPEN_CLASS, view.overlay_open);
        set_class(&self.toggle, TOGGLE_OPEN_CLASS, view.toggle_open);

        let Some(body) = &self.body else { return };
        let result = if view.scroll_locked {
            dom::set_style(body, "overflow", "hidden")
        } else {
            dom::clear_style(body, "overflow")
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, "Scroll lock update failed");
        }
    }
}

/// Installed drawer plus the listeners that drive it.
pub struct MenuBinding {
    pub menu: Rc<MobileMenu>,
    _listeners: Vec<EventListener>,
}

/// Build the overlay and wire its triggers. `None` when the page has no
/// toggle or no menu.
pub fn install(page: &Page, config: &LandingConfig) -> LandingResult<Option<MenuBinding>> {
    let selectors = &config.selectors;
    let toggle = page.query(&selectors.nav_toggle)?;
    let menu = page.query(&selectors.nav_menu)?;
    let actions = page.query(&selectors.nav_actions)?;
    let logo = page.query(&selectors.nav_logo)?;

    let sources = OverlaySources {
        toggle: toggle.is_some(),
        menu: menu.is_some(),
        actions: actions.is_some(),
        logo: logo.is_some(),
        contact_line: config.contact_line.clone(),
    };
    let Some(plan) = OverlayPlan::from_sources(&sources) else {
        tracing::debug!("No navigation toggle or menu, mobile menu inactive");
        return Ok(None);
    };
    let (Some(toggle), Some(menu)) = (toggle, menu) else {
        return Ok(None);
    };

    let overlay = page.create("div")?;
    overlay.set_class_name(OVERLAY_CLASS);

    let mut close_button = None;
    for part in &plan.parts {
        let node: Element = match part {
            OverlayPart::CloseButton => {
                let button = close_button_element(page)?;
                close_button = Some(button.clone());
                button.into()
            }
            OverlayPart::Logo => match &logo {
                Some(logo) => logo_clone(logo, &selectors.logo_omit)?,
                None => continue,
            },
            OverlayPart::ContactLine(text) => {
                let line = page.create("p")?;
                line.set_class_name(CONTACT_LINE_CLASS);
                line.set_text_content(Some(text));
                line.into()
            }
            OverlayPart::Menu => deep_clone(&menu)?,
            OverlayPart::Actions => match &actions {
                Some(actions) => deep_clone(actions)?,
                None => continue,
            },
        };
        overlay.append_child(&node).map_err(js_err)?;
    }

    let parent = toggle
        .parent_node()
        .ok_or_else(|| LandingError::MissingElement(format!("{} parent", selectors.nav_toggle)))?;
    parent
        .insert_before(&overlay, toggle.next_sibling().as_ref())
        .map_err(js_err)?;

    let mobile_menu = Rc::new(MobileMenu {
        state: Cell::new(MenuState::Closed),
        overlay: overlay.clone(),
        toggle: toggle.clone(),
        body: page.body(),
    });

    let mut listeners = Vec::new();
    listeners.push(trigger_on_click(&toggle, &mobile_menu, MenuTrigger::Toggle));

    let backdrop_menu = Rc::clone(&mobile_menu);
    listeners.push(EventListener::new(&overlay, "click", move |event| {
        let overlay: &EventTarget = backdrop_menu.overlay.as_ref();
        if event.target().as_ref() == Some(overlay) {
            backdrop_menu.fire(MenuTrigger::Backdrop);
        }
    }));

    if let Some(button) = &close_button {
        listeners.push(trigger_on_click(button, &mobile_menu, MenuTrigger::CloseButton));
    }

    let links = dom::query_all_in(&overlay, "a")?;
    for link in &links {
        listeners.push(trigger_on_click(link, &mobile_menu, MenuTrigger::Link));
    }

    tracing::debug!(parts = plan.parts.len(), links = links.len(), "Mobile menu built");
    Ok(Some(MenuBinding {
        menu: mobile_menu,
        _listeners: listeners,
    }))
}

fn trigger_on_click(target: &Element, menu: &Rc<MobileMenu>, trigger: MenuTrigger) -> EventListener {
    let menu = Rc::clone(menu);
    EventListener::new(target, "click", move |_| menu.fire(trigger))
}

fn close_button_element(page: &Page) -> LandingResult<HtmlElement> {
    let button = page.create("button")?;
    button.set_class_name(CLOSE_BUTTON_CLASS);
    button.set_attribute("type", "button").map_err(js_err)?;
    button
        .set_attribute("aria-label", CLOSE_BUTTON_LABEL)
        .map_err(js_err)?;

    let icon = page.create("i")?;
    icon.set_class_name("fas fa-times");
    icon.set_attribute("aria-hidden", "true").map_err(js_err)?;
    button.append_child(&icon).map_err(js_err)?;
    Ok(button)
}

fn deep_clone(source: &Element) -> LandingResult<Element> {
    source
        .clone_node_with_deep(true)
        .map_err(js_err)?
        .dyn_into::<Element>()
        .map_err(|_| LandingError::Js("cloned node is not an element".into()))
}

/// Logo copy without the sub-element that only belongs in the desktop header.
fn logo_clone(logo: &Element, omit: &str) -> LandingResult<Element> {
    let copy = deep_clone(logo)?;
    for child in dom::query_all_in(&copy, omit)? {
        child.remove();
    }
    Ok(copy)
}
