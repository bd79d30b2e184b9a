//! Banners

use std::time::Duration;

/// Delay before the carousel moves on by itself.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(5);

/// Length of the slide transition; navigation is ignored meanwhile.
pub const TRANSITION: Duration = Duration::from_millis(500);

/// A hero banner slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Slide id
    pub id: u32,

    /// Headline
    pub title: String,

    /// Sub-headline
    pub description: String,

    /// Call-to-action label
    pub button_text: String,

    /// Background image
    pub image_url: String,

    /// Call-to-action route
    pub link: String,
}

/// Where a slide sits relative to the visible one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    /// On screen
    Current,

    /// Off to the left
    Before,

    /// Off to the right
    After,
}

/// Index state of the hero banner carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    animating: bool,
}

impl Carousel {
    /// A carousel over `len` slides, showing the first.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            animating: false,
        }
    }

    /// Visible slide index
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a transition is running.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Move forward, wrapping to the first slide. Returns `false` when the
    /// request was ignored.
    pub fn next_slide(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }

        self.current = (self.current + 1) % self.len;
        self.animating = true;

        true
    }

    /// Move back, wrapping to the last slide. Returns `false` when the
    /// request was ignored.
    pub fn previous_slide(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }

        self.current = self.current.checked_sub(1).unwrap_or(self.len - 1);
        self.animating = true;

        true
    }

    /// Jump straight to `index` from an indicator dot.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }

        self.current = index;

        true
    }

    /// Mark the running transition as done.
    pub fn finish_transition(&mut self) {
        self.animating = false;
    }

    /// Classify `index` for the slide transition.
    pub fn slide_position(&self, index: usize) -> SlidePosition {
        let last = self.len.saturating_sub(1);

        if index == self.current {
            SlidePosition::Current
        } else if index < self.current || (self.current == 0 && index == last) {
            SlidePosition::Before
        } else {
            SlidePosition::After
        }
    }

    fn can_move(&self) -> bool {
        !self.animating && self.len > 0
    }
}
