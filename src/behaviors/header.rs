//! Header scroll-state watcher.
//!
//! A single throttled scroll listener feeding [`HeaderState`]. Bursts of
//! scroll events collapse into at most one trailing update per window, so the
//! header always reflects where the page came to rest.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use landing_fx_core::header::{HIDDEN_CLASS, SCROLLED_CLASS};
use landing_fx_core::{Admission, HeaderState, LandingConfig, LandingResult, Throttle};
use web_sys::Element;

use crate::dom::{set_class, Page};

struct HeaderWatcher {
    page: Page,
    header: Element,
    state: RefCell<HeaderState>,
    throttle: RefCell<Throttle>,
}

impl HeaderWatcher {
    fn on_scroll(self: &Rc<Self>) {
        let now = self.page.now();
        let admission = self.throttle.borrow_mut().admit(now);
        match admission {
            Admission::Run => self.apply(),
            Admission::Schedule(delay) => {
                let watcher = Rc::clone(self);
                Timeout::new(delay.ceil() as u32, move || {
                    let fired_at = watcher.page.now();
                    watcher.throttle.borrow_mut().fire_trailing(fired_at);
                    watcher.apply();
                })
                .forget();
            }
            Admission::Coalesce => {}
        }
    }

    fn apply(&self) {
        let offset = self.page.scroll_y();
        let classes = self.state.borrow_mut().observe(offset);
        set_class(&self.header, SCROLLED_CLASS, classes.scrolled);
        set_class(&self.header, HIDDEN_CLASS, classes.hidden);
    }
}

/// Watch the window scroll and restyle the header. `None` without a header.
pub fn install(page: &Page, config: &LandingConfig) -> LandingResult<Option<EventListener>> {
    let Some(header) = page.query(&config.selectors.header)? else {
        tracing::debug!("No header, scroll styling inactive");
        return Ok(None);
    };

    let watcher = Rc::new(HeaderWatcher {
        page: page.clone(),
        header,
        state: RefCell::new(HeaderState::new(config.header.clone())),
        throttle: RefCell::new(Throttle::new(config.scroll_throttle_ms)),
    });

    Ok(Some(EventListener::new(&page.window, "scroll", move |_| {
        watcher.on_scroll()
    })))
}
