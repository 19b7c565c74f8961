//! Testimonial carousel.
//!
//! A fixed list of records and a cursor. Both manual selection and the
//! auto-advance timer move the cursor; [`Rotator::slide`] renders whatever
//! the cursor points at when it is called, so a delayed write always shows
//! the most recent selection.

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, LandingResult};

/// Class marking the pagination dot of the visible record.
pub const ACTIVE_DOT_CLASS: &str = "active";

/// One customer quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub brand: String,
    pub quote: String,
    pub author: String,
    pub title: String,
}

impl Testimonial {
    pub fn new(
        brand: impl Into<String>,
        quote: impl Into<String>,
        author: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            quote: quote.into(),
            author: author.into(),
            title: title.into(),
        }
    }

    /// Records shipped with the stock landing page.
    pub fn defaults() -> Vec<Testimonial> {
        vec![
            Testimonial::new(
                "ORUK",
                "Join a community of industry leading professionals. Join a community of industry leading professionals.",
                "Laura Paula",
                "Director @company",
            ),
            Testimonial::new(
                "TECHCO",
                "Exceptional design and development services that exceeded our expectations and delivered outstanding results.",
                "Michael Chen",
                "CEO @TechCorp",
            ),
        ]
    }
}

/// Text written into the carousel slots for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Quote wrapped in double quotes
    pub quote: String,
    pub author: String,
    pub title: String,
    /// Index of the pagination dot to mark active
    pub active: usize,
}

impl Slide {
    /// Whether dot `index` should carry the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }
}

/// Cursor over the testimonial records.
#[derive(Debug, Clone)]
pub struct Rotator {
    records: Vec<Testimonial>,
    current: usize,
}

impl Rotator {
    pub fn new(records: Vec<Testimonial>) -> Self {
        Self {
            records,
            current: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Jump to record `index` (pagination dot click).
    pub fn select(&mut self, index: usize) -> LandingResult<()> {
        if index >= self.records.len() {
            return Err(LandingError::TestimonialOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Move to the next record, wrapping around. No-op without records.
    pub fn advance(&mut self) -> usize {
        if !self.records.is_empty() {
            self.current = (self.current + 1) % self.records.len();
        }
        self.current
    }

    /// Slot text for the current record.
    pub fn slide(&self) -> Option<Slide> {
        let record = self.records.get(self.current)?;
        Some(Slide {
            quote: format!("\"{}\"", record.quote),
            author: record.author.clone(),
            title: record.title.clone(),
            active: self.current,
        })
    }
}
