use serde::{Deserialize, Serialize};

/// Semantic visual-state markers resolved by the bridge's class-name table.
///
/// The core never deals in raw CSS class names; the browser side maps each
/// marker onto whatever class the page stylesheet expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateMarker {
    /// Navbar has scrolled past its threshold.
    Scrolled,
    /// Navigation link points at the current section.
    ActiveLink,
    /// Mobile menu (button and panel) is open.
    MenuOpen,
    /// Reveal target has entered the viewport.
    Visible,
    /// Body class staged shortly after boot.
    PageLoaded,
}

/// Cursor affordance for draggable surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}
