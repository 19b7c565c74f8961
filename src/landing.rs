//! The mounted page.
//!
//! [`Landing`] owns every listener, observer and timer the behaviors create,
//! along with the little state they keep (menu mode, carousel cursor, last
//! scroll offset). It lives in a thread-local slot for the page's lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use landing_fx_core::{LandingConfig, LandingResult};

use crate::behaviors::{
    forms, header, keyboard, lazy_images, menu, page_load, parallax, reveal, ripple,
    service_worker, smooth_scroll, testimonials, CarouselBinding, MenuBinding,
};
use crate::dom::{IntersectionWatch, Page};

thread_local! {
    static MOUNTED: RefCell<Option<Landing>> = const { RefCell::new(None) };
}

/// Everything wired into the page. Dropping it detaches every behavior.
pub struct Landing {
    _menu: Option<MenuBinding>,
    _carousel: Option<CarouselBinding>,
    _reveal: Option<IntersectionWatch>,
    _lazy_images: Option<IntersectionWatch>,
    _listeners: Vec<EventListener>,
}

impl Landing {
    /// Install every behavior against `page`. Behaviors that fail are logged
    /// and left out; the rest still mount.
    pub fn mount(page: &Page, config: &LandingConfig) -> Self {
        let _span = tracing::debug_span!("mount").entered();
        let mut listeners = Vec::new();

        let menu = settle("mobile menu", menu::install(page, config)).flatten();
        if let Some(binding) = &menu {
            listeners.push(keyboard::install(page, Rc::clone(&binding.menu)));
        }

        listeners.extend(
            settle("smooth scroll", smooth_scroll::install(page, config)).unwrap_or_default(),
        );
        listeners.extend(settle("header", header::install(page, config)).flatten());
        listeners.extend(settle("parallax", parallax::install(page, config)).flatten());
        listeners.extend(settle("ripple", ripple::install(page, config)).unwrap_or_default());
        listeners.extend(settle("forms", forms::install(page, config)).unwrap_or_default());

        let reveal = settle("visibility animator", reveal::install(page, config)).flatten();
        let lazy_images = settle("lazy images", lazy_images::install(page, config)).flatten();
        let carousel = settle("testimonials", testimonials::install(page, config)).flatten();

        listeners.extend(page_load::mark_loaded(page));
        let _ = settle("preload", page_load::preload(&config.preload_images));
        listeners.extend(service_worker::install(page, config.service_worker.as_deref()));

        tracing::info!(
            menu = menu.is_some(),
            carousel = carousel.is_some(),
            listeners = listeners.len(),
            "Landing page mounted"
        );

        Self {
            _menu: menu,
            _carousel: carousel,
            _reveal: reveal,
            _lazy_images: lazy_images,
            _listeners: listeners,
        }
    }
}

/// Log a failed install and carry on without it.
fn settle<T>(behavior: &str, result: LandingResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(behavior, error = %err, "Behavior not mounted");
            None
        }
    }
}

/// Mount into the current page unless already mounted.
pub fn mount(config: LandingConfig) -> LandingResult<()> {
    let page = Page::current()?;
    MOUNTED.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            tracing::debug!("Already mounted");
            return;
        }
        *slot = Some(Landing::mount(&page, &config));
    });
    Ok(())
}
