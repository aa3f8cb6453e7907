//! Pane configuration for seeding the desktop

use crate::math::Vec2;
use super::{Pane, PaneContent, PaneId};

/// Configuration for one initial pane
#[derive(Clone, Debug, PartialEq)]
pub struct PaneConfig {
    /// Caller-chosen identifier; must be unique within a seed list
    pub id: PaneId,
    /// Title bar text
    pub title: String,
    /// Renderable content
    pub content: PaneContent,
    /// Initial top-left corner
    pub position: Vec2,
    /// Initial stacking order
    pub z_index: u32,
}

impl From<PaneConfig> for Pane {
    fn from(config: PaneConfig) -> Self {
        Pane {
            id: config.id,
            title: config.title,
            content: config.content,
            position: config.position,
            z_index: config.z_index,
        }
    }
}
