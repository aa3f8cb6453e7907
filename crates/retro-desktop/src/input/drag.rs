//! Drag session for pane moves

use crate::math::Vec2;
use crate::window::PaneId;

/// An in-progress pointer-driven pane move
///
/// Lives from a pointer-down on chrome until the matching pointer-up (or
/// pointer-leave). The pane it names must still exist.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pane being moved
    pub pane_id: PaneId,
    /// Offset from pane origin to cursor
    pub pointer_offset: Vec2,
}

impl DragSession {
    /// Start a session for a pane at `origin` grabbed at `pointer`
    #[inline]
    pub fn new(pane_id: PaneId, origin: Vec2, pointer: Vec2) -> Self {
        Self {
            pane_id,
            pointer_offset: pointer - origin,
        }
    }

    /// Pane origin that keeps the grab point under `pointer`
    #[inline]
    pub fn origin_for(&self, pointer: Vec2) -> Vec2 {
        pointer - self.pointer_offset
    }
}
