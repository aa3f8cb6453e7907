//! Error types for the desktop and dashboard state
//!
//! Stale pane references are not errors: every window operation on an
//! unknown id is a no-op. Only malformed setup data and out-of-range slide
//! selections are reported.

use crate::window::PaneId;

/// Errors returned by the state containers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DesktopError {
    /// Two seeded panes share the same id.
    #[error("duplicate pane id: {0}")]
    DuplicatePane(PaneId),

    /// A slide index outside `0..count` was selected.
    #[error("slide index {index} out of range for {count} slides")]
    SlideOutOfRange { index: usize, count: usize },

    /// The carousel was built without any slides.
    #[error("carousel requires at least one slide")]
    NoSlides,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DesktopError>;
