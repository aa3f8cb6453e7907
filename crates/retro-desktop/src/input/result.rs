//! Input result type

use serde::Serialize;
use crate::window::PaneId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Input belongs to the pane's own content widget
    #[serde(rename_all = "camelCase")]
    Forward {
        /// Target pane
        pane_id: PaneId,
        /// X coordinate in pane-local space
        local_x: f32,
        /// Y coordinate in pane-local space
        local_y: f32,
    },
}

impl InputResult {
    /// Check if input should be forwarded
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}
