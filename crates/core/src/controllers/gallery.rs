use folio_protocol::{Cursor, DomCommand, ElementRef, ScrollBehavior};

use crate::config::GalleryConfig;

/// Horizontal scroll geometry of the gallery container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl GalleryMetrics {
    pub fn max_scroll(&self) -> f64 {
        self.scroll_width - self.client_width
    }
}

/// The gesture currently driving the container, if any.
///
/// A single value per container, so two gestures can never be live at once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureSession {
    #[default]
    Idle,
    Touch { start_x: f64, start_scroll: f64 },
    Mouse { start_x: f64, start_scroll: f64 },
}

impl GestureSession {
    pub fn is_active(&self) -> bool {
        !matches!(self, GestureSession::Idle)
    }
}

/// Project gallery: paging buttons plus touch and mouse dragging over one
/// scrollable row.
#[derive(Debug, Clone)]
pub struct Gallery {
    config: GalleryConfig,
    has_buttons: bool,
    session: GestureSession,
}

impl Gallery {
    /// `has_buttons` is true only when both paging buttons exist.
    pub fn new(config: GalleryConfig, has_buttons: bool) -> Self {
        Self {
            config,
            has_buttons,
            session: GestureSession::Idle,
        }
    }

    pub fn session(&self) -> GestureSession {
        self.session
    }

    pub fn has_buttons(&self) -> bool {
        self.has_buttons
    }

    /// Initial state: resting cursor and button availability.
    pub fn install(&self, metrics: &GalleryMetrics) -> Vec<DomCommand> {
        let mut commands = self.refresh_buttons(metrics);
        commands.push(DomCommand::SetCursor {
            target: ElementRef::Gallery,
            cursor: Cursor::Grab,
        });
        commands
    }

    pub fn on_prev(&self) -> Vec<DomCommand> {
        self.page(-self.config.step_px)
    }

    pub fn on_next(&self) -> Vec<DomCommand> {
        self.page(self.config.step_px)
    }

    fn page(&self, left: f64) -> Vec<DomCommand> {
        if !self.has_buttons || self.session.is_active() {
            return Vec::new();
        }
        vec![DomCommand::ScrollElementBy {
            target: ElementRef::Gallery,
            left,
            behavior: ScrollBehavior::Smooth,
        }]
    }

    /// Recompute button enablement. Runs on container scroll and window resize.
    pub fn refresh_buttons(&self, metrics: &GalleryMetrics) -> Vec<DomCommand> {
        if !self.has_buttons {
            return Vec::new();
        }
        let at_start = metrics.scroll_left <= 0.0;
        let at_end = metrics.scroll_left >= metrics.max_scroll() - self.config.end_tolerance_px;
        vec![
            DomCommand::SetDisabled {
                target: ElementRef::PrevButton,
                disabled: at_start,
            },
            DomCommand::SetDisabled {
                target: ElementRef::NextButton,
                disabled: at_end,
            },
        ]
    }

    pub fn touch_start(&mut self, client_x: f64, scroll_left: f64) {
        if matches!(self.session, GestureSession::Mouse { .. }) {
            return;
        }
        self.session = GestureSession::Touch {
            start_x: client_x,
            start_scroll: scroll_left,
        };
    }

    /// Content follows the finger 1:1.
    pub fn touch_move(&self, client_x: f64) -> Vec<DomCommand> {
        let GestureSession::Touch {
            start_x,
            start_scroll,
        } = self.session
        else {
            return Vec::new();
        };
        vec![DomCommand::SetScrollLeft {
            target: ElementRef::Gallery,
            left: start_scroll + (start_x - client_x),
        }]
    }

    pub fn touch_end(&mut self) {
        if matches!(self.session, GestureSession::Touch { .. }) {
            self.session = GestureSession::Idle;
        }
    }

    /// The browser abandoned the touch. Ends the session like `touch_end`.
    pub fn touch_cancel(&mut self) {
        self.touch_end();
    }

    /// `x` is the pointer position relative to the container's left offset.
    pub fn mouse_down(&mut self, x: f64, scroll_left: f64) -> Vec<DomCommand> {
        if matches!(self.session, GestureSession::Touch { .. }) {
            return Vec::new();
        }
        self.session = GestureSession::Mouse {
            start_x: x,
            start_scroll: scroll_left,
        };
        vec![DomCommand::SetCursor {
            target: ElementRef::Gallery,
            cursor: Cursor::Grabbing,
        }]
    }

    pub fn mouse_move(&self, x: f64) -> Vec<DomCommand> {
        let GestureSession::Mouse {
            start_x,
            start_scroll,
        } = self.session
        else {
            return Vec::new();
        };
        let walk = (x - start_x) * self.config.drag_multiplier;
        vec![
            DomCommand::PreventDefault,
            DomCommand::SetScrollLeft {
                target: ElementRef::Gallery,
                left: start_scroll - walk,
            },
        ]
    }

    pub fn mouse_up(&mut self) -> Vec<DomCommand> {
        self.end_mouse()
    }

    pub fn mouse_leave(&mut self) -> Vec<DomCommand> {
        self.end_mouse()
    }

    fn end_mouse(&mut self) -> Vec<DomCommand> {
        if matches!(self.session, GestureSession::Mouse { .. }) {
            self.session = GestureSession::Idle;
        }
        vec![DomCommand::SetCursor {
            target: ElementRef::Gallery,
            cursor: Cursor::Grab,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Gallery {
        Gallery::new(GalleryConfig::default(), true)
    }

    fn metrics(scroll_left: f64) -> GalleryMetrics {
        GalleryMetrics {
            scroll_left,
            scroll_width: 2000.0,
            client_width: 800.0,
        }
    }

    fn disabled(commands: &[DomCommand], which: ElementRef) -> Option<bool> {
        commands.iter().find_map(|c| match c {
            DomCommand::SetDisabled { target, disabled } if *target == which => Some(*disabled),
            _ => None,
        })
    }

    fn scroll_left(commands: &[DomCommand]) -> Option<f64> {
        commands.iter().find_map(|c| match c {
            DomCommand::SetScrollLeft { left, .. } => Some(*left),
            _ => None,
        })
    }

    #[test]
    fn buttons_at_start() {
        let cmds = gallery().refresh_buttons(&metrics(0.0));
        assert_eq!(disabled(&cmds, ElementRef::PrevButton), Some(true));
        assert_eq!(disabled(&cmds, ElementRef::NextButton), Some(false));
    }

    #[test]
    fn buttons_at_end_with_tolerance() {
        let g = gallery();
        let at_max = g.refresh_buttons(&metrics(1200.0));
        assert_eq!(disabled(&at_max, ElementRef::PrevButton), Some(false));
        assert_eq!(disabled(&at_max, ElementRef::NextButton), Some(true));
        let near = g.refresh_buttons(&metrics(1190.0));
        assert_eq!(disabled(&near, ElementRef::NextButton), Some(true));
        let short = g.refresh_buttons(&metrics(1189.0));
        assert_eq!(disabled(&short, ElementRef::NextButton), Some(false));
    }

    #[test]
    fn content_that_fits_disables_both() {
        let cmds = gallery().refresh_buttons(&GalleryMetrics {
            scroll_left: 0.0,
            scroll_width: 600.0,
            client_width: 600.0,
        });
        assert_eq!(disabled(&cmds, ElementRef::PrevButton), Some(true));
        assert_eq!(disabled(&cmds, ElementRef::NextButton), Some(true));
    }

    #[test]
    fn paging_scrolls_by_fixed_step() {
        let g = gallery();
        assert_eq!(
            g.on_next(),
            vec![DomCommand::ScrollElementBy {
                target: ElementRef::Gallery,
                left: 400.0,
                behavior: ScrollBehavior::Smooth,
            }]
        );
        assert!(matches!(
            g.on_prev().as_slice(),
            [DomCommand::ScrollElementBy { left, .. }] if (*left + 400.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn missing_buttons_skip_only_button_modality() {
        let mut g = Gallery::new(GalleryConfig::default(), false);
        assert!(g.refresh_buttons(&metrics(0.0)).is_empty());
        assert!(g.on_next().is_empty());
        assert_eq!(
            g.install(&metrics(0.0)),
            vec![DomCommand::SetCursor {
                target: ElementRef::Gallery,
                cursor: Cursor::Grab,
            }]
        );
        g.mouse_down(100.0, 0.0);
        assert!(scroll_left(&g.mouse_move(90.0)).is_some());
    }

    #[test]
    fn mouse_drag_is_amplified() {
        let mut g = gallery();
        let down = g.mouse_down(100.0, 300.0);
        assert_eq!(
            down,
            vec![DomCommand::SetCursor {
                target: ElementRef::Gallery,
                cursor: Cursor::Grabbing,
            }]
        );
        let moved = g.mouse_move(130.0);
        assert_eq!(moved[0], DomCommand::PreventDefault);
        assert_eq!(scroll_left(&moved), Some(240.0));
    }

    #[test]
    fn mouse_move_without_drag_does_nothing() {
        assert!(gallery().mouse_move(50.0).is_empty());
    }

    #[test]
    fn mouse_up_and_leave_end_the_drag() {
        let mut g = gallery();
        g.mouse_down(0.0, 0.0);
        let up = g.mouse_up();
        assert_eq!(g.session(), GestureSession::Idle);
        assert!(matches!(up.as_slice(), [DomCommand::SetCursor { cursor: Cursor::Grab, .. }]));

        g.mouse_down(0.0, 0.0);
        g.mouse_leave();
        assert!(!g.session().is_active());
        assert!(g.mouse_move(20.0).is_empty());
    }

    #[test]
    fn touch_follows_finger() {
        let mut g = gallery();
        g.touch_start(300.0, 100.0);
        assert_eq!(scroll_left(&g.touch_move(250.0)), Some(150.0));
        assert_eq!(scroll_left(&g.touch_move(350.0)), Some(50.0));
        assert!(!g.touch_move(250.0).contains(&DomCommand::PreventDefault));
        g.touch_end();
        assert!(g.touch_move(200.0).is_empty());
    }

    #[test]
    fn touch_starting_at_left_edge_still_drags() {
        let mut g = gallery();
        g.touch_start(0.0, 0.0);
        assert_eq!(scroll_left(&g.touch_move(-40.0)), Some(40.0));
    }

    #[test]
    fn overlapping_sources_are_rejected() {
        let mut g = gallery();
        g.touch_start(200.0, 0.0);
        assert!(g.mouse_down(10.0, 0.0).is_empty());
        assert!(g.mouse_move(40.0).is_empty());
        assert!(matches!(g.session(), GestureSession::Touch { .. }));

        // Mouse release while touching leaves the touch session alone.
        g.mouse_up();
        assert!(matches!(g.session(), GestureSession::Touch { .. }));
        g.touch_end();

        g.mouse_down(10.0, 0.0);
        g.touch_start(200.0, 0.0);
        assert!(g.touch_move(100.0).is_empty());
        assert!(matches!(g.session(), GestureSession::Mouse { .. }));
    }

    #[test]
    fn paging_is_ignored_mid_gesture() {
        let mut g = gallery();
        g.touch_start(10.0, 0.0);
        assert!(g.on_next().is_empty());
        g.touch_end();
        assert_eq!(g.on_next().len(), 1);
    }

    #[test]
    fn cancelled_touch_releases_buttons_and_mouse() {
        let mut g = gallery();
        g.touch_start(100.0, 0.0);
        assert!(g.on_next().is_empty());
        assert!(g.mouse_down(10.0, 0.0).is_empty());

        g.touch_cancel();
        assert_eq!(g.session(), GestureSession::Idle);
        assert_eq!(g.on_next().len(), 1);
        assert!(!g.mouse_down(10.0, 0.0).is_empty());
    }

    #[test]
    fn touch_cancel_leaves_mouse_drag_alone() {
        let mut g = gallery();
        g.mouse_down(0.0, 0.0);
        g.touch_cancel();
        assert!(matches!(g.session(), GestureSession::Mouse { .. }));
    }

    #[test]
    fn same_source_restart_replaces_session() {
        let mut g = gallery();
        g.mouse_down(0.0, 0.0);
        g.mouse_down(50.0, 500.0);
        assert_eq!(scroll_left(&g.mouse_move(60.0)), Some(480.0));
    }
}
