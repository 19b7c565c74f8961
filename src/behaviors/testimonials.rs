//! Testimonial carousel.
//!
//! Pagination dots select a record; an interval advances it. Rendering fades
//! the container, then writes the slide after `fade_ms`. The delayed write
//! reads the cursor when it fires, so rapid clicks settle on the last one.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use landing_fx_core::testimonial::ACTIVE_DOT_CLASS;
use landing_fx_core::{LandingConfig, LandingResult, Rotator};
use web_sys::{Element, HtmlElement};

use crate::dom::{set_class, set_style, Page};

pub struct Carousel {
    rotator: RefCell<Rotator>,
    dots: Vec<Element>,
    content: Option<HtmlElement>,
    quote: Option<Element>,
    author: Option<Element>,
    title: Option<Element>,
    fade_ms: u32,
    faded_opacity: String,
}

impl Carousel {
    pub fn current(&self) -> usize {
        self.rotator.borrow().current()
    }

    /// Jump to record `index` and render it.
    pub fn select(self: &Rc<Self>, index: usize) {
        if let Err(err) = self.rotator.borrow_mut().select(index) {
            tracing::debug!(error = %err, "Pagination dot ignored");
            return;
        }
        self.render();
    }

    /// Move to the next record and render it.
    pub fn advance(self: &Rc<Self>) {
        self.rotator.borrow_mut().advance();
        self.render();
    }

    fn render(self: &Rc<Self>) {
        // nothing to write, so never fade
        if self.quote.is_none() || self.rotator.borrow().is_empty() {
            return;
        }
        self.set_opacity(&self.faded_opacity);

        let carousel = Rc::clone(self);
        Timeout::new(self.fade_ms, move || carousel.write_slide()).forget();
    }

    fn write_slide(&self) {
        let Some(slide) = self.rotator.borrow().slide() else {
            return;
        };

        if let Some(quote) = &self.quote {
            quote.set_text_content(Some(&slide.quote));
        }
        if let Some(author) = &self.author {
            author.set_text_content(Some(&slide.author));
        }
        if let Some(title) = &self.title {
            title.set_text_content(Some(&slide.title));
        }
        for (i, dot) in self.dots.iter().enumerate() {
            set_class(dot, ACTIVE_DOT_CLASS, slide.is_active(i));
        }

        self.set_opacity("1");
    }

    fn set_opacity(&self, value: &str) {
        let Some(content) = &self.content else { return };
        if let Err(err) = set_style(content, "opacity", value) {
            tracing::warn!(error = %err, "Carousel fade failed");
        }
    }
}

/// Carousel with its dot listeners and the auto-advance timer.
pub struct CarouselBinding {
    pub carousel: Rc<Carousel>,
    _listeners: Vec<EventListener>,
    _interval: Interval,
}

/// Wire the carousel. `None` when the page has no pagination dots.
pub fn install(page: &Page, config: &LandingConfig) -> LandingResult<Option<CarouselBinding>> {
    let selectors = &config.selectors;
    let dots = page.query_all(&selectors.pagination_dots)?;
    if dots.is_empty() {
        tracing::debug!("No pagination dots, carousel inactive");
        return Ok(None);
    }

    let settings = &config.testimonials;
    let carousel = Rc::new(Carousel {
        rotator: RefCell::new(Rotator::new(settings.records.clone())),
        dots,
        content: page.query_html(&selectors.testimonial_content)?,
        quote: page.query(&selectors.testimonial_quote)?,
        author: page.query(&selectors.testimonial_author)?,
        title: page.query(&selectors.testimonial_title)?,
        fade_ms: settings.fade_ms,
        faded_opacity: settings.faded_opacity.clone(),
    });

    let listeners = carousel
        .dots
        .iter()
        .enumerate()
        .map(|(index, dot)| {
            let carousel = Rc::clone(&carousel);
            EventListener::new(dot, "click", move |_| carousel.select(index))
        })
        .collect();

    let ticking = Rc::clone(&carousel);
    let interval = Interval::new(settings.interval_ms, move || ticking.advance());

    tracing::debug!(
        records = settings.records.len(),
        dots = carousel.dots.len(),
        "Carousel rotating"
    );
    Ok(Some(CarouselBinding {
        carousel,
        _listeners: listeners,
        _interval: interval,
    }))
}
