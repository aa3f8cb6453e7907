//! State core for the retro dashboard front end
//!
//! This crate owns the interactive state behind a nostalgia-themed web page:
//! - Desktop panes (seed, focus, z-order, drag, close)
//! - Dashboard carousel (active slide, scroll offset, button groups)
//! - Skinned audio player widgets
//! - The login banner's one-shot activation
//!
//! ## Architecture
//!
//! - [`math`]: `Vec2` positions and offsets
//! - [`window`]: Panes and the [`WindowManager`]
//! - [`input`]: Drag session and input results
//! - [`carousel`]: Slides and the [`CarouselController`]
//! - [`audio`]: Widget state over an injectable [`AudioOutput`]
//! - [`render`]: Commands consumed by the renderer
//!
//! ## Example
//!
//! ```rust
//! use retro_desktop::{presets, PaneRegion, Vec2, WindowManager};
//!
//! let mut wm = WindowManager::new();
//! wm.open(presets::desktop_panes()).unwrap();
//!
//! wm.begin_drag(1, PaneRegion::TitleBar, Vec2::new(100.0, 100.0));
//! wm.update_drag(Vec2::new(120.0, 130.0));
//! wm.end_drag();
//!
//! assert_eq!(wm.get(1).unwrap().position, Vec2::new(70.0, 80.0));
//! ```

pub mod math;
pub mod window;
pub mod input;
pub mod carousel;
pub mod audio;
pub mod render;
pub mod presets;

mod error;
mod login;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::Vec2;
pub use window::{Pane, PaneConfig, PaneContent, PaneId, PaneRegion, WindowManager};
pub use input::{DragSession, InputResult};
pub use carousel::{BackgroundVariant, CarouselController, ControlPartition, ScrollCommand, Slide};
pub use audio::{format_time, AudioOutput, AudioWidget, PlayerSkin};
pub use render::RenderCommand;
pub use error::{DesktopError, Result};
pub use login::{LoginBanner, LOGIN_DELAY_MS};
