pub mod commands;
pub mod marker;
pub mod types;

pub use commands::{DomCommand, ElementRef, ScrollBehavior, Task};
pub use marker::{Cursor, StateMarker};
pub use types::{Rect, ViewportSize};
