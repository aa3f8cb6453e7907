//! Geometry types shared by the desktop and dashboard state
//!
//! Positions and pointer coordinates are viewport pixels.

mod vec2;

pub use vec2::Vec2;
