//! Pane region for pointer-down classification

use serde::{Deserialize, Serialize};

/// Region of a pane under a pointer-down, as classified by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaneRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Frame around the content
    Border,
    /// Content area (belongs to the pane's widget)
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize button
    MaximizeButton,
}

impl PaneRegion {
    /// Chrome is the only place a drag may start
    #[inline]
    pub fn is_chrome(&self) -> bool {
        matches!(self, PaneRegion::TitleBar | PaneRegion::Border)
    }

    /// Check if this is one of the caption buttons
    #[inline]
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            PaneRegion::CloseButton | PaneRegion::MinimizeButton | PaneRegion::MaximizeButton
        )
    }

    /// Parse the region name sent by the renderer
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "titleBar" => Some(PaneRegion::TitleBar),
            "border" => Some(PaneRegion::Border),
            "content" => Some(PaneRegion::Content),
            "closeButton" => Some(PaneRegion::CloseButton),
            "minimizeButton" => Some(PaneRegion::MinimizeButton),
            "maximizeButton" => Some(PaneRegion::MaximizeButton),
            _ => None,
        }
    }
}
