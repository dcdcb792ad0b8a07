use serde::{Deserialize, Serialize};

use crate::marker::{Cursor, StateMarker};

/// Logical handle for an element the page script manipulates.
///
/// Indexed variants refer to positions in the element list the bridge
/// queried for that role, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRef {
    Body,
    Navbar,
    MenuButton,
    MenuPanel,
    NavLink(usize),
    Gallery,
    PrevButton,
    NextButton,
    RevealTarget(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

impl ScrollBehavior {
    pub fn as_css(self) -> &'static str {
        match self {
            ScrollBehavior::Auto => "auto",
            ScrollBehavior::Smooth => "smooth",
        }
    }
}

/// Deferred work the bridge runs after a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Re-run the active-section tracker against fresh page metrics.
    RefreshActiveLink,
    /// Apply the page-loaded marker to the body.
    MarkPageLoaded,
}

/// A single, stateless DOM instruction.
///
/// Controllers emit a `Vec<DomCommand>` per event. The bridge applies the
/// list sequentially; each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomCommand {
    /// Add (`on = true`) or remove a visual-state marker.
    SetMarker {
        target: ElementRef,
        marker: StateMarker,
        on: bool,
    },

    /// Set the `disabled` property of a button.
    SetDisabled { target: ElementRef, disabled: bool },

    /// Set the inline `cursor` style.
    SetCursor { target: ElementRef, cursor: Cursor },

    /// Scroll the window to an absolute vertical offset.
    ScrollWindowTo { top: f64, behavior: ScrollBehavior },

    /// Scroll an element horizontally by a relative amount.
    ScrollElementBy {
        target: ElementRef,
        left: f64,
        behavior: ScrollBehavior,
    },

    /// Assign an element's `scrollLeft` directly.
    SetScrollLeft { target: ElementRef, left: f64 },

    /// Cancel the default action of the event being handled.
    PreventDefault,

    /// Stop intersection observation of an element.
    Unobserve { target: ElementRef },

    /// Run a task after `delay_ms`.
    Schedule { delay_ms: u32, task: Task },
}
