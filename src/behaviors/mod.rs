//! Page behaviors.
//!
//! Each module exposes an `install` that queries its elements, wires its
//! listeners, and returns the handles that keep them alive. A missing element
//! means the behavior quietly stays off.

pub mod forms;
pub mod header;
pub mod keyboard;
pub mod lazy_images;
pub mod menu;
pub mod page_load;
pub mod parallax;
pub mod reveal;
pub mod ripple;
pub mod service_worker;
pub mod smooth_scroll;
pub mod testimonials;

pub use menu::{MenuBinding, MobileMenu};
pub use testimonials::{Carousel, CarouselBinding};
