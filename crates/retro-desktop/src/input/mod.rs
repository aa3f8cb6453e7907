//! Pointer input module
//!
//! Provides the drag session value and the result type returned to the host.

mod drag;
mod result;

pub use drag::DragSession;
pub use result::InputResult;
