//! Escape closes the mobile menu.

use std::rc::Rc;

use gloo::events::EventListener;
use landing_fx_core::MenuTrigger;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::behaviors::menu::MobileMenu;
use crate::dom::Page;

pub fn install(page: &Page, menu: Rc<MobileMenu>) -> EventListener {
    EventListener::new(&page.document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key.key() == "Escape" && menu.is_open() {
            menu.fire(MenuTrigger::Escape);
        }
    })
}
