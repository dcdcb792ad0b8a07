use folio_protocol::{DomCommand, ScrollBehavior, Task};

use crate::config::SmoothScrollConfig;

/// Animated scrolling for in-page anchor links.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig) -> Self {
        Self { config }
    }

    /// Whether a click on a link with this href should be intercepted at
    /// all. A bare `#` is left to the browser.
    pub fn wants(href: &str) -> bool {
        href.starts_with('#') && href != "#"
    }

    /// Handle a click on an anchor link. `target_offset_top` is the document
    /// offset of the element the fragment resolves to, or `None` when no such
    /// element exists.
    ///
    /// The active-link refresh is scheduled after a fixed delay; it does not
    /// track the real end of the animation.
    pub fn on_anchor_click(&self, href: &str, target_offset_top: Option<f64>) -> Vec<DomCommand> {
        if !Self::wants(href) {
            return Vec::new();
        }
        let Some(top) = target_offset_top else {
            return Vec::new();
        };
        vec![
            DomCommand::PreventDefault,
            DomCommand::ScrollWindowTo {
                top: top - self.config.offset_px,
                behavior: ScrollBehavior::Smooth,
            },
            DomCommand::Schedule {
                delay_ms: self.config.settle_delay_ms,
                task: Task::RefreshActiveLink,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller() -> SmoothScroll {
        SmoothScroll::new(SmoothScrollConfig::default())
    }

    #[test]
    fn scrolls_above_target_and_schedules_refresh() {
        let cmds = scroller().on_anchor_click("#projects", Some(1280.0));
        assert_eq!(
            cmds,
            vec![
                DomCommand::PreventDefault,
                DomCommand::ScrollWindowTo {
                    top: 1200.0,
                    behavior: ScrollBehavior::Smooth,
                },
                DomCommand::Schedule {
                    delay_ms: 500,
                    task: Task::RefreshActiveLink,
                },
            ]
        );
    }

    #[test]
    fn bare_hash_is_left_alone() {
        assert!(scroller().on_anchor_click("#", Some(0.0)).is_empty());
        assert!(!SmoothScroll::wants("#"));
    }

    #[test]
    fn missing_target_is_left_alone() {
        assert!(scroller().on_anchor_click("#nowhere", None).is_empty());
    }

    #[test]
    fn non_fragment_href_is_ignored() {
        assert!(!SmoothScroll::wants("/about"));
        assert!(scroller().on_anchor_click("/about", Some(10.0)).is_empty());
    }

    #[test]
    fn offset_is_subtracted_unclamped() {
        let cmds = scroller().on_anchor_click("#home", Some(0.0));
        assert!(cmds.contains(&DomCommand::ScrollWindowTo {
            top: -80.0,
            behavior: ScrollBehavior::Smooth,
        }));
    }
}
