//! Browser tests for the behavior bindings.
//!
//! Run with: `wasm-pack test --headless --firefox`
//!
//! Each test builds its own fixture with unique class names and points a
//! config at them, so fixtures never see each other's listeners.

#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use landing_fx::behaviors::{
    forms, header, keyboard, lazy_images, menu, page_load, parallax, reveal, ripple,
    service_worker, smooth_scroll, testimonials,
};
use landing_fx::dom::Page;
use landing_fx::load_config;
use landing_fx_core::{LandingConfig, Testimonial};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Element, Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent,
    MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Helpers
// ============================================================================

fn page() -> Page {
    Page::current().unwrap()
}

/// Append a container with `html` to the body.
fn fixture(html: &str) -> Element {
    let page = page();
    let root = page.document.create_element("div").unwrap();
    root.set_inner_html(html);
    page.body().unwrap().append_child(&root).unwrap();
    root
}

fn find(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("fixture missing {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

fn cancelable_click(x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap()
}

/// Jump the window to `y` and deliver a scroll event right away.
fn scroll_to(y: f64) {
    let page = page();
    page.window.scroll_to_with_x_and_y(0.0, y);
    page.window
        .dispatch_event(&Event::new("scroll").unwrap())
        .unwrap();
}

fn body_overflow() -> String {
    page()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

// ============================================================================
// Mobile Menu
// ============================================================================

fn menu_config() -> LandingConfig {
    let mut config = LandingConfig::default();
    config.selectors.nav_toggle = ".t-toggle".into();
    config.selectors.nav_menu = ".t-menu".into();
    config.selectors.nav_actions = ".t-actions".into();
    config.selectors.nav_logo = ".t-logo".into();
    config.selectors.logo_omit = ".t-mail".into();
    config
}

const MENU_HTML: &str = r##"
    <nav>
      <div class="t-logo"><img src="logo.png" alt="logo"><p class="t-mail">mail@example.com</p></div>
      <ul class="t-menu"><li><a href="#t-about">About</a></li><li><a href="#t-work">Work</a></li></ul>
      <div class="t-actions"><a href="#t-contact">Contact</a></div>
      <button class="t-toggle">Menu</button>
    </nav>
"##;

#[wasm_bindgen_test]
fn test_menu_overlay_built_from_markup() {
    let root = fixture(MENU_HTML);
    let binding = menu::install(&page(), &menu_config()).unwrap().unwrap();
    let overlay = binding.menu.overlay();

    let toggle = find(&root, ".t-toggle");
    let next: Element = toggle.next_element_sibling().unwrap();
    assert_eq!(&next, overlay.unchecked_ref::<Element>());

    assert!(overlay.query_selector(".nav__close").unwrap().is_some());
    assert!(overlay.query_selector(".t-logo img").unwrap().is_some());
    assert!(overlay.query_selector(".t-mail").unwrap().is_none());
    assert_eq!(overlay.query_selector_all("a").unwrap().length(), 3);

    root.remove();
    overlay.remove();
}

#[wasm_bindgen_test]
fn test_menu_open_and_every_close_path() {
    let root = fixture(MENU_HTML);
    let page = page();
    let binding = menu::install(&page, &menu_config()).unwrap().unwrap();
    let _escape = keyboard::install(&page, binding.menu.clone());
    let overlay = binding.menu.overlay().clone();
    let toggle = find(&root, ".t-toggle");

    let open = || {
        toggle.click();
        assert!(binding.menu.is_open());
        assert!(has_class(&overlay, "nav__mobile-menu--open"));
        assert!(has_class(&toggle, "nav__toggle--open"));
        assert_eq!(body_overflow(), "hidden");
    };
    let assert_closed = || {
        assert!(!binding.menu.is_open());
        assert!(!has_class(&overlay, "nav__mobile-menu--open"));
        assert!(!has_class(&toggle, "nav__toggle--open"));
        assert_eq!(body_overflow(), "");
    };

    // toggle
    open();
    toggle.click();
    assert_closed();

    // backdrop
    open();
    overlay.click();
    assert_closed();

    // link inside the overlay
    open();
    find(overlay.unchecked_ref(), "a").click();
    assert_closed();

    // close button
    open();
    find(overlay.unchecked_ref(), ".nav__close").click();
    assert_closed();

    // escape
    open();
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let key = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    page.document.dispatch_event(&key).unwrap();
    assert_closed();

    root.remove();
    overlay.remove();
}

#[wasm_bindgen_test]
fn test_menu_inactive_without_toggle() {
    let root = fixture(r##"<ul class="t-menu"><li><a href="#t-home">Home</a></li></ul>"##);
    let binding = menu::install(&page(), &menu_config()).unwrap();
    assert!(binding.is_none());
    assert!(page().query(".nav__mobile-menu").unwrap().is_none());
    root.remove();
}

// ============================================================================
// Smooth Scroll and Forms
// ============================================================================

#[wasm_bindgen_test]
fn test_anchor_to_existing_fragment_cancels_default() {
    let root = fixture(
        r##"<a class="t-jump" href="#t-target">Go</a>
            <a class="t-missing" href="#t-nowhere">Lost</a>
            <section id="t-target" style="height: 50px">Target</section>"##,
    );
    let mut config = LandingConfig::default();
    config.selectors.anchors = "a.t-jump, a.t-missing".into();
    let _listeners = smooth_scroll::install(&page(), &config).unwrap();

    let jump = find(&root, ".t-jump");
    let not_cancelled = jump.dispatch_event(&cancelable_click(0, 0)).unwrap();
    assert!(!not_cancelled);

    // unknown fragment: default left intact (only the hash changes)
    let missing = find(&root, ".t-missing");
    let not_cancelled = missing.dispatch_event(&cancelable_click(0, 0)).unwrap();
    assert!(not_cancelled);

    root.remove();
}

#[wasm_bindgen_test]
fn test_form_submit_prevented() {
    let root = fixture(r#"<form class="t-form" id="signup"><input name="email"></form>"#);
    let mut config = LandingConfig::default();
    config.selectors.forms = "form.t-form".into();
    let _listeners = forms::install(&page(), &config).unwrap();

    let init = EventInit::new();
    init.set_cancelable(true);
    let submit = Event::new_with_event_init_dict("submit", &init).unwrap();
    let not_cancelled = find(&root, ".t-form").dispatch_event(&submit).unwrap();
    assert!(!not_cancelled);
    root.remove();
}

// ============================================================================
// Timed Effects
// ============================================================================

#[wasm_bindgen_test]
async fn test_each_click_spawns_one_self_removing_ripple() {
    let root = fixture(
        r#"<button class="t-btn"
             style="box-sizing: border-box; width: 120px; height: 40px; padding: 0; border: 0">
             Go
           </button>"#,
    );
    let mut config = LandingConfig::default();
    config.selectors.buttons = ".t-btn".into();
    config.ripple_ms = 50;
    let _listeners = ripple::install(&page(), &config).unwrap();

    let button = find(&root, ".t-btn");
    button.dispatch_event(&cancelable_click(10, 10)).unwrap();
    button.dispatch_event(&cancelable_click(20, 20)).unwrap();

    let ripples = button.query_selector_all(".btn__ripple").unwrap();
    assert_eq!(ripples.length(), 2);
    let first = ripples.item(0).unwrap().dyn_into::<HtmlElement>().unwrap();
    assert_eq!(first.style().get_property_value("width").unwrap(), "120px");

    TimeoutFuture::new(120).await;
    assert_eq!(button.query_selector_all(".btn__ripple").unwrap().length(), 0);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_pagination_dot_renders_record() {
    let root = fixture(
        r#"<div class="t-content">
             <p class="t-quote"></p>
             <div class="t-author"><strong></strong><span></span></div>
           </div>
           <button class="t-dot active"></button><button class="t-dot"></button>"#,
    );
    let mut config = LandingConfig::default();
    config.selectors.pagination_dots = ".t-dot".into();
    config.selectors.testimonial_content = ".t-content".into();
    config.selectors.testimonial_quote = ".t-quote".into();
    config.selectors.testimonial_author = ".t-author strong".into();
    config.selectors.testimonial_title = ".t-author span".into();
    config.testimonials.fade_ms = 10;
    let _binding = testimonials::install(&page(), &config).unwrap().unwrap();

    let dots = root.query_selector_all(".t-dot").unwrap();
    let second = dots.item(1).unwrap().dyn_into::<HtmlElement>().unwrap();
    second.click();

    let content = find(&root, ".t-content");
    assert_eq!(content.style().get_property_value("opacity").unwrap(), "0.5");

    TimeoutFuture::new(40).await;
    let expected = &Testimonial::defaults()[1];
    assert_eq!(
        find(&root, ".t-quote").text_content().unwrap(),
        format!("\"{}\"", expected.quote)
    );
    assert_eq!(
        find(&root, ".t-author strong").text_content().unwrap(),
        expected.author
    );
    assert_eq!(
        find(&root, ".t-author span").text_content().unwrap(),
        expected.title
    );
    assert!(!has_class(dots.item(0).unwrap().unchecked_ref(), "active"));
    assert!(has_class(&second, "active"));
    assert_eq!(content.style().get_property_value("opacity").unwrap(), "1");
    root.remove();
}

#[wasm_bindgen_test]
async fn test_carousel_auto_advance_cycles() {
    let root = fixture(
        r#"<div class="t-cycle-content"><p class="t-cycle-quote"></p></div>
           <button class="t-cycle-dot active"></button><button class="t-cycle-dot"></button>"#,
    );
    let mut config = LandingConfig::default();
    config.selectors.pagination_dots = ".t-cycle-dot".into();
    config.selectors.testimonial_content = ".t-cycle-content".into();
    config.selectors.testimonial_quote = ".t-cycle-quote".into();
    config.testimonials.interval_ms = 100;
    config.testimonials.fade_ms = 0;
    let binding = testimonials::install(&page(), &config).unwrap().unwrap();

    assert_eq!(binding.carousel.current(), 0);
    TimeoutFuture::new(150).await;
    assert_eq!(binding.carousel.current(), 1);
    TimeoutFuture::new(100).await;
    assert_eq!(binding.carousel.current(), 0);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_carousel_without_records_never_fades() {
    let root = fixture(
        r#"<div class="t-none-content"><p class="t-none-quote"></p></div>
           <button class="t-none-dot"></button><button class="t-none-dot"></button>"#,
    );
    let mut config = LandingConfig::default();
    config.selectors.pagination_dots = ".t-none-dot".into();
    config.selectors.testimonial_content = ".t-none-content".into();
    config.selectors.testimonial_quote = ".t-none-quote".into();
    config.testimonials.records = Vec::new();
    config.testimonials.interval_ms = 30;
    config.testimonials.fade_ms = 0;
    let _binding = testimonials::install(&page(), &config).unwrap().unwrap();

    let dots = root.query_selector_all(".t-none-dot").unwrap();
    dots.item(1).unwrap().dyn_into::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(100).await;

    let content = find(&root, ".t-none-content");
    assert_ne!(content.style().get_property_value("opacity").unwrap(), "0.5");
    assert_eq!(find(&root, ".t-none-quote").text_content().unwrap(), "");
    root.remove();
}

// ============================================================================
// Scroll Effects
// ============================================================================

#[wasm_bindgen_test]
async fn test_header_markers_follow_scroll_with_trailing_run() {
    let root = fixture(
        r#"<header class="t-header">Top</header><div style="height: 5000px"></div>"#,
    );
    let mut config = LandingConfig::default();
    config.selectors.header = ".t-header".into();
    config.scroll_throttle_ms = 100;
    let _listener = header::install(&page(), &config).unwrap().unwrap();
    let header = find(&root, ".t-header");

    // leading run
    scroll_to(150.0);
    assert!(has_class(&header, "header--scrolled"));
    assert!(!has_class(&header, "header--hidden"));

    // inside the window: deferred to the trailing run
    scroll_to(300.0);
    assert!(!has_class(&header, "header--hidden"));

    TimeoutFuture::new(200).await;
    assert!(has_class(&header, "header--scrolled"));
    assert!(has_class(&header, "header--hidden"));

    root.remove();
    page().window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn test_parallax_shifts_hero_content() {
    let root = fixture(
        r#"<section class="t-hero" style="height: 1000px">
             <div class="t-hero-content">Hero</div>
           </section>
           <div style="height: 2000px"></div>"#,
    );
    let mut config = LandingConfig::default();
    config.selectors.hero = ".t-hero".into();
    config.selectors.hero_content = ".t-hero-content".into();
    let _listener = parallax::install(&page(), &config).unwrap().unwrap();

    scroll_to(100.0);
    let content = find(&root, ".t-hero-content");
    assert_eq!(
        content.style().get_property_value("transform").unwrap(),
        "translateY(50px)"
    );

    root.remove();
    page().window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn test_visible_block_marked_animate_in() {
    page().window.scroll_to_with_x_and_y(0.0, 0.0);
    let root = fixture(r#"<section class="t-reveal" style="height: 40px">Feature</section>"#);
    let mut config = LandingConfig::default();
    config.selectors.reveal = ".t-reveal".into();
    config.reveal.threshold = 0.0;
    config.reveal.root_margin = "0px".into();
    let _watch = reveal::install(&page(), &config).unwrap().unwrap();

    TimeoutFuture::new(100).await;
    assert!(has_class(&find(&root, ".t-reveal"), "animate-in"));
    root.remove();
}

#[wasm_bindgen_test]
async fn test_visible_lazy_image_swapped_once() {
    page().window.scroll_to_with_x_and_y(0.0, 0.0);
    let root = fixture(
        r#"<img class="t-lazy lazy" data-src="/img/t-draft.webp"
                style="display: block; width: 20px; height: 20px">"#,
    );
    let mut config = LandingConfig::default();
    config.selectors.lazy_images = "img.t-lazy".into();
    let _watch = lazy_images::install(&page(), &config).unwrap().unwrap();

    // the source is read when the image comes into view, not at install
    let img = find(&root, ".t-lazy");
    img.set_attribute("data-src", "/img/t-team.webp?w=640").unwrap();

    TimeoutFuture::new(100).await;
    assert_eq!(img.get_attribute("src").as_deref(), Some("/img/t-team.webp?w=640"));
    assert!(!has_class(&img, "lazy"));

    // leave and re-enter the viewport: no second swap
    img.set_attribute("data-src", "/img/t-other.webp").unwrap();
    img.class_list().add_1("lazy").unwrap();
    img.style().set_property("display", "none").unwrap();
    TimeoutFuture::new(50).await;
    img.style().remove_property("display").unwrap();
    TimeoutFuture::new(100).await;
    assert_eq!(img.get_attribute("src").as_deref(), Some("/img/t-team.webp?w=640"));
    assert!(has_class(&img, "lazy"));
    root.remove();
}

#[wasm_bindgen_test]
fn test_lazy_loader_inactive_without_images() {
    let mut config = LandingConfig::default();
    config.selectors.lazy_images = "img.t-no-such-image".into();
    assert!(lazy_images::install(&page(), &config).unwrap().is_none());
}

// ============================================================================
// Page Load
// ============================================================================

#[wasm_bindgen_test]
fn test_loaded_marker_set_once_window_loaded() {
    let page = page();
    let body = page.body().unwrap();
    body.class_list().remove_1(page_load::LOADED_CLASS).unwrap();

    // the harness page has finished loading, so the marker is applied at once
    let pending = page_load::mark_loaded(&page);
    assert!(pending.is_none());
    assert!(has_class(&body, page_load::LOADED_CLASS));
}

#[wasm_bindgen_test]
fn test_service_worker_disabled_without_path() {
    assert!(service_worker::install(&page(), None).is_none());
}

// ============================================================================
// Configuration
// ============================================================================

#[wasm_bindgen_test]
fn test_inline_config_element() {
    let page = page();
    let script = page.document.create_element("script").unwrap();
    script.set_attribute("type", "application/json").unwrap();
    script.set_id(landing_fx::CONFIG_ELEMENT_ID);
    script.set_text_content(Some(r#"{ "ripple_ms": 750, "service_worker": null }"#));
    page.body().unwrap().append_child(&script).unwrap();

    let config = load_config(&page).unwrap();
    assert_eq!(config.ripple_ms, 750);
    assert!(config.service_worker.is_none());

    script.remove();
    assert_eq!(load_config(&page).unwrap(), LandingConfig::default());
}
