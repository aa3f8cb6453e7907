//! Desktop pane module
//!
//! Provides the pane collection, focus arbitration and drag tracking.

mod pane;
mod config;
mod region;
mod manager;

pub use pane::{Pane, PaneContent};
pub use config::PaneConfig;
pub use region::PaneRegion;
pub use manager::WindowManager;

/// Unique pane identifier
pub type PaneId = u64;
