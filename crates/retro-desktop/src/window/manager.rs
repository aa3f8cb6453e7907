//! Window manager for pane lifecycle, focus, z-order and dragging

use std::collections::HashSet;
use crate::error::{DesktopError, Result};
use crate::input::{DragSession, InputResult};
use crate::math::Vec2;
use crate::render::RenderCommand;
use super::{Pane, PaneConfig, PaneId, PaneRegion};

/// Window manager owning the desktop panes
///
/// Every operation that names a pane tolerates the pane being gone: a close
/// racing a drag or a focus is expected and degrades to a no-op.
#[derive(Clone, Debug, Default)]
pub struct WindowManager {
    /// Panes in seed order
    panes: Vec<Pane>,
    /// Live drag, if any
    drag: Option<DragSession>,
    /// Highest z-index handed out so far
    top_z: u32,
    /// Set once the initial panes are in
    seeded: bool,
}

impl WindowManager {
    /// Create an empty window manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the desktop with its initial panes
    ///
    /// Ids must be unique; on a duplicate nothing is seeded. Seeding a
    /// manager that was already seeded is ignored, even after every pane has
    /// been closed, so closed ids never come back.
    pub fn open<I>(&mut self, initial: I) -> Result<()>
    where
        I: IntoIterator<Item = PaneConfig>,
    {
        if self.seeded {
            return Ok(());
        }

        let mut seen = HashSet::new();
        let mut panes = Vec::new();
        for config in initial {
            if !seen.insert(config.id) {
                return Err(DesktopError::DuplicatePane(config.id));
            }
            panes.push(Pane::from(config));
        }

        self.top_z = panes.iter().map(|p| p.z_index).max().unwrap_or(0);
        self.panes = panes;
        self.seeded = true;
        Ok(())
    }

    /// Close a pane, cancelling a drag that targets it
    pub fn close(&mut self, id: PaneId) {
        self.panes.retain(|p| p.id != id);
        if self.drag.is_some_and(|d| d.pane_id == id) {
            self.drag = None;
        }
    }

    /// Get a pane by ID
    pub fn get(&self, id: PaneId) -> Option<&Pane> {
        self.panes.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|p| p.id == id)
    }

    /// Bring a pane to the front
    ///
    /// The new z-index is one above the current maximum over the remaining
    /// panes, so the target ends strictly on top and nobody else moves.
    pub fn focus(&mut self, id: PaneId) {
        if self.get(id).is_none() {
            return;
        }

        let mut max_z = self.panes.iter().map(|p| p.z_index).max().unwrap_or(0);
        if max_z == u32::MAX {
            self.normalize_stack();
            max_z = self.panes.len() as u32;
        }

        if let Some(pane) = self.get_mut(id) {
            pane.z_index = max_z + 1;
        }
        self.top_z = self.top_z.max(max_z + 1);
    }

    /// Renumber z-indices to 1..=n keeping the stacking order
    fn normalize_stack(&mut self) {
        let mut order: Vec<usize> = (0..self.panes.len()).collect();
        order.sort_by_key(|&i| self.panes[i].z_index);
        for (rank, i) in order.into_iter().enumerate() {
            self.panes[i].z_index = rank as u32 + 1;
        }
    }

    /// Get the pane currently on top
    pub fn focused(&self) -> Option<PaneId> {
        self.panes.iter().max_by_key(|p| p.z_index).map(|p| p.id)
    }

    /// Start dragging a pane grabbed on its chrome
    ///
    /// Returns `true` if a session started. Content and caption buttons never
    /// start a drag. Dragging brings the pane to the front.
    pub fn begin_drag(&mut self, id: PaneId, region: PaneRegion, pointer: Vec2) -> bool {
        if !region.is_chrome() {
            return false;
        }
        let origin = match self.get(id) {
            Some(pane) => pane.position,
            None => return false,
        };

        self.drag = Some(DragSession::new(id, origin, pointer));
        self.focus(id);
        true
    }

    /// Move the dragged pane so the grab point stays under the pointer
    ///
    /// Returns `true` if a pane moved.
    pub fn update_drag(&mut self, pointer: Vec2) -> bool {
        let session = match self.drag {
            Some(session) => session,
            None => return false,
        };

        match self.get_mut(session.pane_id) {
            Some(pane) => {
                pane.position = session.origin_for(pointer);
                true
            }
            None => {
                self.drag = None;
                false
            }
        }
    }

    /// End the current drag
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Get the live drag session
    #[inline]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Check if a pane is being dragged
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Handle pointer down on a pane region
    pub fn pointer_down(&mut self, id: PaneId, region: PaneRegion, pointer: Vec2) -> InputResult {
        match region {
            PaneRegion::CloseButton => {
                self.close(id);
                InputResult::Handled
            }
            PaneRegion::MinimizeButton | PaneRegion::MaximizeButton => InputResult::Unhandled,
            PaneRegion::Content => match self.get(id) {
                Some(pane) => {
                    let local = pane.offset_to(pointer);
                    InputResult::Forward {
                        pane_id: id,
                        local_x: local.x,
                        local_y: local.y,
                    }
                }
                None => InputResult::Unhandled,
            },
            PaneRegion::TitleBar | PaneRegion::Border => {
                if self.begin_drag(id, region, pointer) {
                    InputResult::Handled
                } else {
                    InputResult::Unhandled
                }
            }
        }
    }

    /// Handle pointer move anywhere in the viewport
    pub fn pointer_move(&mut self, pointer: Vec2) -> InputResult {
        if self.update_drag(pointer) {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle pointer up or pointer leaving the viewport
    pub fn pointer_up(&mut self) -> InputResult {
        if self.is_dragging() {
            self.end_drag();
            return InputResult::Handled;
        }
        InputResult::Unhandled
    }

    /// Get panes in seed order
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    /// Get panes sorted by z-index (back to front)
    pub fn panes_by_z(&self) -> Vec<&Pane> {
        let mut panes: Vec<&Pane> = self.panes.iter().collect();
        panes.sort_by_key(|p| p.z_index);
        panes
    }

    /// Render commands placing every pane, in seed order
    pub fn render_commands(&self) -> Vec<RenderCommand> {
        self.panes.iter().map(RenderCommand::place).collect()
    }

    /// Highest z-index handed out so far
    ///
    /// Never decreases, including across a stack renumbering.
    #[inline]
    pub fn top_z(&self) -> u32 {
        self.top_z
    }

    /// Get the number of panes
    pub fn count(&self) -> usize {
        self.panes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::PaneContent;

    fn config(id: PaneId, x: f32, y: f32, z_index: u32) -> PaneConfig {
        PaneConfig {
            id,
            title: format!("Pane {id}"),
            content: PaneContent::Message { heading: "Test".to_string() },
            position: Vec2::new(x, y),
            z_index,
        }
    }

    fn five_panes() -> WindowManager {
        let mut wm = WindowManager::new();
        wm.open((1..=5).map(|i| config(i, 10.0 * i as f32, 10.0, i as u32)))
            .unwrap();
        wm
    }

    #[test]
    fn test_open_seeds_in_order() {
        let wm = five_panes();
        assert_eq!(wm.count(), 5);
        let ids: Vec<PaneId> = wm.panes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(wm.top_z(), 5);
        assert_eq!(wm.focused(), Some(5));
    }

    #[test]
    fn test_open_rejects_duplicate_ids() {
        let mut wm = WindowManager::new();
        let err = wm
            .open(vec![config(1, 0.0, 0.0, 1), config(1, 5.0, 5.0, 2)])
            .unwrap_err();
        assert_eq!(err, DesktopError::DuplicatePane(1));
        assert_eq!(wm.count(), 0);
    }

    #[test]
    fn test_open_twice_keeps_first_layout() {
        let mut wm = five_panes();
        wm.open(vec![config(9, 0.0, 0.0, 1)]).unwrap();
        assert_eq!(wm.count(), 5);
        assert!(wm.get(9).is_none());
    }

    #[test]
    fn test_open_after_closing_everything_is_ignored() {
        let mut wm = five_panes();
        for id in 1..=5 {
            wm.close(id);
        }
        assert_eq!(wm.count(), 0);

        wm.open(vec![config(3, 0.0, 0.0, 1)]).unwrap();
        assert_eq!(wm.count(), 0);
        assert!(wm.get(3).is_none());
    }

    #[test]
    fn test_failed_seed_can_be_retried() {
        let mut wm = WindowManager::new();
        assert!(wm.open(vec![config(1, 0.0, 0.0, 1), config(1, 0.0, 0.0, 2)]).is_err());
        wm.open(vec![config(1, 0.0, 0.0, 1)]).unwrap();
        assert_eq!(wm.count(), 1);
    }

    #[test]
    fn test_focus_lowest_pane() {
        let mut wm = five_panes();
        wm.focus(1);

        assert_eq!(wm.get(1).unwrap().z_index, 6);
        for id in 2..=5 {
            assert_eq!(wm.get(id).unwrap().z_index, id as u32);
        }
        assert_eq!(wm.focused(), Some(1));
    }

    #[test]
    fn test_focus_top_pane_still_increments() {
        let mut wm = five_panes();
        wm.focus(5);
        assert_eq!(wm.get(5).unwrap().z_index, 6);
    }

    #[test]
    fn test_focus_unknown_is_noop() {
        let mut wm = five_panes();
        let before = wm.panes().to_vec();
        wm.focus(42);
        assert_eq!(wm.panes(), before.as_slice());
    }

    #[test]
    fn test_focus_recomputes_after_close() {
        let mut wm = five_panes();
        wm.close(5);
        wm.focus(1);
        assert_eq!(wm.get(1).unwrap().z_index, 5);
        assert_eq!(wm.top_z(), 5);
    }

    #[test]
    fn test_focus_at_ceiling_renumbers() {
        let mut wm = WindowManager::new();
        wm.open(vec![config(1, 0.0, 0.0, 3), config(2, 0.0, 0.0, u32::MAX)])
            .unwrap();
        wm.focus(1);

        assert_eq!(wm.get(2).unwrap().z_index, 2);
        assert_eq!(wm.get(1).unwrap().z_index, 3);
        assert_eq!(wm.focused(), Some(1));
        assert_eq!(wm.top_z(), u32::MAX);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut wm = five_panes();
        wm.close(3);
        let after_first = wm.panes().to_vec();
        wm.close(3);
        assert_eq!(wm.panes(), after_first.as_slice());
        assert_eq!(wm.count(), 4);
    }

    #[test]
    fn test_drag_moves_pane() {
        let mut wm = WindowManager::new();
        wm.open(vec![config(1, 50.0, 50.0, 1), config(2, 0.0, 0.0, 2)])
            .unwrap();

        assert!(wm.begin_drag(1, PaneRegion::TitleBar, Vec2::new(100.0, 100.0)));
        let session = wm.drag_session().unwrap();
        assert!((session.pointer_offset.x - 50.0).abs() < 0.001);
        assert!((session.pointer_offset.y - 50.0).abs() < 0.001);
        assert_eq!(wm.focused(), Some(1));

        assert!(wm.update_drag(Vec2::new(120.0, 130.0)));
        let pane = wm.get(1).unwrap();
        assert!((pane.position.x - 70.0).abs() < 0.001);
        assert!((pane.position.y - 80.0).abs() < 0.001);

        wm.end_drag();
        assert!(!wm.is_dragging());
        assert!(!wm.update_drag(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_drag_never_starts_from_content_or_controls() {
        let mut wm = five_panes();
        for region in [
            PaneRegion::Content,
            PaneRegion::CloseButton,
            PaneRegion::MinimizeButton,
            PaneRegion::MaximizeButton,
        ] {
            assert!(!wm.begin_drag(1, region, Vec2::new(15.0, 15.0)));
            assert!(!wm.is_dragging());
        }
        assert_eq!(wm.get(1).unwrap().z_index, 1);
    }

    #[test]
    fn test_close_cancels_drag() {
        let mut wm = five_panes();
        wm.begin_drag(2, PaneRegion::Border, Vec2::new(25.0, 15.0));
        wm.close(2);

        assert!(!wm.is_dragging());
        let before = wm.panes().to_vec();
        assert!(!wm.update_drag(Vec2::new(500.0, 500.0)));
        assert_eq!(wm.panes(), before.as_slice());
    }

    #[test]
    fn test_close_other_pane_keeps_drag() {
        let mut wm = five_panes();
        wm.begin_drag(2, PaneRegion::TitleBar, Vec2::new(25.0, 15.0));
        wm.close(4);
        assert_eq!(wm.drag_session().map(|d| d.pane_id), Some(2));
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let mut wm = five_panes();
        wm.end_drag();
        wm.end_drag();
        assert!(!wm.is_dragging());
    }

    #[test]
    fn test_pointer_routing() {
        let mut wm = five_panes();

        let result = wm.pointer_down(3, PaneRegion::Content, Vec2::new(40.0, 20.0));
        assert_eq!(
            result,
            InputResult::Forward { pane_id: 3, local_x: 10.0, local_y: 10.0 }
        );
        assert_eq!(wm.get(3).unwrap().z_index, 3);

        assert_eq!(
            wm.pointer_down(3, PaneRegion::MaximizeButton, Vec2::ZERO),
            InputResult::Unhandled
        );
        assert_eq!(
            wm.pointer_down(3, PaneRegion::TitleBar, Vec2::new(35.0, 15.0)),
            InputResult::Handled
        );
        assert_eq!(wm.pointer_move(Vec2::new(45.0, 25.0)), InputResult::Handled);
        assert_eq!(wm.pointer_up(), InputResult::Handled);
        assert_eq!(wm.pointer_up(), InputResult::Unhandled);
        assert_eq!(wm.pointer_move(Vec2::ZERO), InputResult::Unhandled);

        assert_eq!(
            wm.pointer_down(3, PaneRegion::CloseButton, Vec2::ZERO),
            InputResult::Handled
        );
        assert!(wm.get(3).is_none());
        assert_eq!(
            wm.pointer_down(3, PaneRegion::TitleBar, Vec2::ZERO),
            InputResult::Unhandled
        );
    }

    #[test]
    fn test_panes_by_z() {
        let mut wm = five_panes();
        wm.focus(2);
        let order: Vec<PaneId> = wm.panes_by_z().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![1, 3, 4, 5, 2]);
    }
}
