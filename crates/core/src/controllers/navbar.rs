use folio_protocol::{DomCommand, ElementRef, StateMarker};

use crate::config::{NavbarConfig, TrackerConfig};
use crate::controllers::sections::{self, PageMetrics, SectionBox};

/// Window-scroll handler for the top navigation bar.
#[derive(Debug, Clone)]
pub struct Navbar {
    navbar: NavbarConfig,
    tracker: TrackerConfig,
}

impl Navbar {
    pub fn new(navbar: NavbarConfig, tracker: TrackerConfig) -> Self {
        Self { navbar, tracker }
    }

    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.navbar.scrolled_threshold_px
    }

    /// Toggle the scrolled marker, then refresh the active nav link.
    pub fn on_scroll(
        &self,
        metrics: &PageMetrics,
        sections: &[SectionBox],
        hrefs: &[String],
    ) -> Vec<DomCommand> {
        let mut commands = vec![DomCommand::SetMarker {
            target: ElementRef::Navbar,
            marker: StateMarker::Scrolled,
            on: self.is_scrolled(metrics.scroll_y),
        }];
        commands.extend(sections::track(sections, hrefs, metrics, &self.tracker));
        commands
    }
}
