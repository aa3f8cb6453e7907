//! Dashboard carousel module
//!
//! Provides the fixed slide list, the active index and the views derived
//! from it (scroll offset, navigation button groups).

mod slide;
mod controller;

pub use slide::{BackgroundVariant, Slide};
pub use controller::{partition_controls, CarouselController, ControlPartition, ScrollCommand};
