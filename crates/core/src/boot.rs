//! Page-ready sequencing: which controllers to install, given what the
//! document actually contains.

use std::fmt;

use folio_protocol::{DomCommand, Task};

use crate::config::PageConfig;

/// Which optional elements the bridge found in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presence {
    pub navbar: bool,
    pub menu_button: bool,
    pub menu_panel: bool,
    pub gallery: bool,
    pub prev_button: bool,
    pub next_button: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Navbar,
    MobileMenu,
    Gallery { with_buttons: bool },
    SmoothScroll,
    ScrollReveal,
}

/// A controller or modality left out because its elements are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    Navbar,
    MobileMenu,
    Gallery,
    GalleryButtons,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Navbar => f.write_str("navbar not found; scroll tracking disabled"),
            Skip::MobileMenu => f.write_str("mobile menu button or panel not found"),
            Skip::Gallery => f.write_str("project gallery not found"),
            Skip::GalleryButtons => f.write_str("gallery buttons not found; drag only"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootPlan {
    /// Commands to apply before any controller is installed.
    pub initial: Vec<DomCommand>,
    /// Controllers to install, in order.
    pub install: Vec<Controller>,
    pub skipped: Vec<Skip>,
}

pub fn plan(config: &PageConfig, presence: &Presence) -> BootPlan {
    let mut install = Vec::new();
    let mut skipped = Vec::new();

    if presence.navbar {
        install.push(Controller::Navbar);
    } else {
        skipped.push(Skip::Navbar);
    }

    if presence.menu_button && presence.menu_panel {
        install.push(Controller::MobileMenu);
    } else {
        skipped.push(Skip::MobileMenu);
    }

    if presence.gallery {
        let with_buttons = presence.prev_button && presence.next_button;
        if !with_buttons {
            skipped.push(Skip::GalleryButtons);
        }
        install.push(Controller::Gallery { with_buttons });
    } else {
        skipped.push(Skip::Gallery);
    }

    install.push(Controller::SmoothScroll);

    if config.scroll_reveal {
        install.push(Controller::ScrollReveal);
    }

    BootPlan {
        initial: vec![DomCommand::Schedule {
            delay_ms: config.boot.page_loaded_delay_ms,
            task: Task::MarkPageLoaded,
        }],
        install,
        skipped,
    }
}
