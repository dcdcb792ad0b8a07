use folio_protocol::{DomCommand, ElementRef, StateMarker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Slide-out menu toggled by a button.
///
/// Every handler returns the marker commands for both the button and the
/// panel, so the two always agree.
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn on_button_click(&mut self) -> Vec<DomCommand> {
        self.transition(self.state.toggled())
    }

    /// A link inside the panel was clicked. The link's own navigation is not
    /// prevented.
    pub fn on_link_click(&mut self) -> Vec<DomCommand> {
        self.transition(MenuState::Closed)
    }

    /// A click reached the document. Clicks inside the button or the panel
    /// (including ones already handled above while bubbling) leave the state
    /// alone.
    pub fn on_document_click(&mut self, inside_button: bool, inside_panel: bool) -> Vec<DomCommand> {
        if inside_button || inside_panel {
            return Vec::new();
        }
        self.transition(MenuState::Closed)
    }

    fn transition(&mut self, next: MenuState) -> Vec<DomCommand> {
        self.state = next;
        let on = next.is_open();
        [ElementRef::MenuPanel, ElementRef::MenuButton]
            .into_iter()
            .map(|target| DomCommand::SetMarker {
                target,
                marker: StateMarker::MenuOpen,
                on,
            })
            .collect()
    }
}
