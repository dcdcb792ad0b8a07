use folio_protocol::{DomCommand, ElementRef, StateMarker};

use crate::config::TrackerConfig;

/// A page section with an id, as laid out in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    /// Offset of the section's top edge from the document top.
    pub top: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: id.into(),
            top,
        }
    }
}

/// Vertical scroll geometry of the window, sampled per event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl PageMetrics {
    fn near_bottom(&self, slack: f64) -> bool {
        self.viewport_height + self.scroll_y >= self.document_height - slack
    }
}

/// Pick the section the reader is currently in.
///
/// Near the document bottom the last section wins outright, so short
/// trailing sections still get highlighted. Otherwise the last section (in
/// document order) whose top has crossed the lookahead line is current.
pub fn select_active_section<'a>(
    sections: &'a [SectionBox],
    metrics: &PageMetrics,
    config: &TrackerConfig,
) -> Option<&'a str> {
    if metrics.near_bottom(config.bottom_slack_px) {
        return sections.last().map(|s| s.id.as_str());
    }

    let line = metrics.scroll_y + config.lookahead_px;
    let mut current = None;
    for section in sections {
        if section.top <= line {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Clear the active marker on every link, then set it on the links whose
/// href targets `selected`. `hrefs` is indexed like `ElementRef::NavLink`.
pub fn active_link_commands(hrefs: &[String], selected: Option<&str>) -> Vec<DomCommand> {
    let mut commands: Vec<DomCommand> = (0..hrefs.len())
        .map(|i| DomCommand::SetMarker {
            target: ElementRef::NavLink(i),
            marker: StateMarker::ActiveLink,
            on: false,
        })
        .collect();

    let Some(id) = selected else {
        return commands;
    };
    for (i, href) in hrefs.iter().enumerate() {
        if href.strip_prefix('#') == Some(id) {
            commands.push(DomCommand::SetMarker {
                target: ElementRef::NavLink(i),
                marker: StateMarker::ActiveLink,
                on: true,
            });
        }
    }
    commands
}

/// Run the whole tracker: select a section, then mark its link.
pub fn track(
    sections: &[SectionBox],
    hrefs: &[String],
    metrics: &PageMetrics,
    config: &TrackerConfig,
) -> Vec<DomCommand> {
    let selected = select_active_section(sections, metrics, config);
    active_link_commands(hrefs, selected)
}
