//! Pane struct and content description

use serde::{Deserialize, Serialize};
use crate::math::Vec2;
use super::PaneId;

/// What a pane shows. The manager never looks inside; the renderer does.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PaneContent {
    /// Heading, a sample sentence and optional bullet list
    Notes {
        heading: String,
        bullets: Vec<String>,
    },
    /// Placeholder image frame
    ImageViewer {
        caption: String,
    },
    /// Embedded compact media player
    #[serde(rename_all = "camelCase")]
    MusicPlayer {
        audio_src: String,
    },
    /// Heading with a sample sentence
    Message {
        heading: String,
    },
}

/// A draggable, closable desktop pane
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pane {
    /// Unique identifier
    pub id: PaneId,
    /// Title bar text
    pub title: String,
    /// Renderable content
    pub content: PaneContent,
    /// Top-left corner in viewport pixels (unbounded)
    pub position: Vec2,
    /// Stacking order (higher = on top)
    pub z_index: u32,
}

impl Pane {
    /// Offset from the pane's top-left corner to a pointer position
    #[inline]
    pub fn offset_to(&self, pointer: Vec2) -> Vec2 {
        pointer - self.position
    }
}
