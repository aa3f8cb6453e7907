//! Commands handed to the renderer
//!
//! The host never reads state directly; it applies these commands
//! declaratively (inline styles, `scrollTo`, button lists).

use serde::Serialize;
use crate::carousel::{ControlPartition, ScrollCommand};
use crate::window::{Pane, PaneId};

/// One instruction for the presentation layer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderCommand {
    /// Place a pane at a position with a stacking order
    #[serde(rename_all = "camelCase")]
    Pane {
        id: PaneId,
        x: f32,
        y: f32,
        z_index: u32,
    },
    /// Scroll the slide viewport to a horizontal offset
    Scroll {
        offset: f32,
        smooth: bool,
    },
    /// Render the navigation buttons in two groups, by slide id
    Buttons {
        left: Vec<String>,
        right: Vec<String>,
    },
}

impl RenderCommand {
    /// Place command for a pane's current geometry
    pub fn place(pane: &Pane) -> Self {
        RenderCommand::Pane {
            id: pane.id,
            x: pane.position.x,
            y: pane.position.y,
            z_index: pane.z_index,
        }
    }
}

impl From<ScrollCommand> for RenderCommand {
    fn from(cmd: ScrollCommand) -> Self {
        RenderCommand::Scroll {
            offset: cmd.offset,
            smooth: cmd.smooth,
        }
    }
}

impl From<ControlPartition<'_>> for RenderCommand {
    fn from(partition: ControlPartition<'_>) -> Self {
        RenderCommand::Buttons {
            left: partition.left.iter().map(|s| s.id.clone()).collect(),
            right: partition.right.iter().map(|s| s.id.clone()).collect(),
        }
    }
}
