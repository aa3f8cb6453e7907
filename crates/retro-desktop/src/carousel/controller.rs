//! Carousel controller for the dashboard slides

use serde::Serialize;
use crate::error::{DesktopError, Result};
use crate::render::RenderCommand;
use super::Slide;

/// Instruction to scroll the slide viewport
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollCommand {
    /// Horizontal offset in pixels (`index * viewport_width`)
    pub offset: f32,
    /// Animate the scroll
    pub smooth: bool,
}

/// Navigation buttons split around the active slide
///
/// `left` holds the visited slides up to and including the active one,
/// `right` the rest. Both borrow from the slide list, so `left ++ right`
/// is always the full list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPartition<'a> {
    pub left: &'a [Slide],
    pub right: &'a [Slide],
}

/// Split `slides` around `index`
///
/// Returns `None` if `index` is not a valid slide index.
pub fn partition_controls(slides: &[Slide], index: usize) -> Option<ControlPartition<'_>> {
    if index >= slides.len() {
        return None;
    }
    let (left, right) = slides.split_at(index + 1);
    Some(ControlPartition { left, right })
}

/// Carousel state: a fixed slide list and the active index
///
/// The button partition is never stored; it is derived from the active
/// index on demand.
#[derive(Clone, Debug)]
pub struct CarouselController {
    slides: Vec<Slide>,
    active_index: usize,
    viewport_width: f32,
}

impl CarouselController {
    /// Create a carousel starting on `default_index`
    pub fn new(slides: Vec<Slide>, default_index: usize, viewport_width: f32) -> Result<Self> {
        if slides.is_empty() {
            return Err(DesktopError::NoSlides);
        }
        if default_index >= slides.len() {
            return Err(DesktopError::SlideOutOfRange {
                index: default_index,
                count: slides.len(),
            });
        }
        Ok(Self {
            slides,
            active_index: default_index,
            viewport_width,
        })
    }

    /// Select a slide and get the scroll to animate
    ///
    /// Out-of-range indices are rejected and leave the state untouched.
    pub fn select_slide(&mut self, index: usize) -> Result<ScrollCommand> {
        if index >= self.slides.len() {
            return Err(DesktopError::SlideOutOfRange {
                index,
                count: self.slides.len(),
            });
        }
        self.active_index = index;
        Ok(self.scroll_command())
    }

    /// Smooth scroll to the active slide at the current viewport width
    pub fn scroll_command(&self) -> ScrollCommand {
        ScrollCommand {
            offset: self.active_index as f32 * self.viewport_width,
            smooth: true,
        }
    }

    /// Button groups for the active slide
    pub fn partition_controls(&self) -> ControlPartition<'_> {
        let (left, right) = self.slides.split_at(self.active_index + 1);
        ControlPartition { left, right }
    }

    /// Update the slider wrapper width reported by the host
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width.max(0.0);
    }

    /// Commands that bring the renderer in line with the current state
    pub fn render_commands(&self) -> Vec<RenderCommand> {
        vec![
            self.scroll_command().into(),
            self.partition_controls().into(),
        ]
    }

    /// Get the active slide index
    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Get the active slide
    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.active_index]
    }

    /// Get all slides in display order
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get the viewport width in pixels
    #[inline]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }
}
