use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidNumber { field: &'static str, value: f64 },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("reveal.threshold must lie in [0, 1] (got {0})")]
    Threshold(f64),
}

/// CSS selectors for every element role the page script touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub navbar: String,
    pub menu_button: String,
    pub menu_panel: String,
    /// Primary navigation links eligible for active highlighting.
    pub nav_links: String,
    pub gallery: String,
    pub prev_button: String,
    pub next_button: String,
    pub sections: String,
    pub anchor_links: String,
    pub reveal_targets: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".into(),
            menu_button: ".mobile-menu-btn".into(),
            menu_panel: ".mobile-nav".into(),
            nav_links: ".nav-links a:not(.nav-cta)".into(),
            gallery: ".projects-grid".into(),
            prev_button: ".projects-nav-btn.prev".into(),
            next_button: ".projects-nav-btn.next".into(),
            sections: "section[id], footer[id]".into(),
            anchor_links: "a[href^=\"#\"]".into(),
            reveal_targets: ".animate-on-scroll".into(),
        }
    }
}

/// CSS class applied for each `StateMarker`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub scrolled: String,
    pub active_link: String,
    pub menu_open: String,
    pub visible: String,
    pub page_loaded: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            scrolled: "scrolled".into(),
            active_link: "active".into(),
            menu_open: "active".into(),
            visible: "animate-visible".into(),
            page_loaded: "page-loaded".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub scrolled_threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// A section becomes current once its top is within this distance
    /// below the scroll offset.
    pub lookahead_px: f64,
    /// Distance from the document bottom that forces the last section.
    pub bottom_slack_px: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            lookahead_px: 200.0,
            bottom_slack_px: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    /// Space left above the target, for the fixed navbar.
    pub offset_px: f64,
    /// Delay before the active link is refreshed after an animated scroll.
    pub settle_delay_ms: u32,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            offset_px: 80.0,
            settle_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub step_px: f64,
    pub end_tolerance_px: f64,
    pub drag_multiplier: f64,
    /// Debounce window for the resize handler. `None` runs it on every event.
    pub resize_debounce_ms: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            step_px: 400.0,
            end_tolerance_px: 10.0,
            drag_multiplier: 2.0,
            resize_debounce_ms: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    pub page_loaded_delay_ms: u32,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            page_loaded_delay_ms: 100,
        }
    }
}

/// Complete page configuration. Every field has a default, so any subset
/// of keys is a valid JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: ClassNames,
    pub navbar: NavbarConfig,
    pub tracker: TrackerConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub gallery: GalleryConfig,
    pub reveal: RevealConfig,
    pub boot: BootConfig,
    /// Install the scroll-reveal controller at boot.
    pub scroll_reveal: bool,
    /// Emit debug diagnostics to the console.
    pub debug: bool,
}

impl PageConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("navbar.scrolled_threshold_px", self.navbar.scrolled_threshold_px),
            ("tracker.lookahead_px", self.tracker.lookahead_px),
            ("tracker.bottom_slack_px", self.tracker.bottom_slack_px),
            ("smooth_scroll.offset_px", self.smooth_scroll.offset_px),
            ("gallery.step_px", self.gallery.step_px),
            ("gallery.end_tolerance_px", self.gallery.end_tolerance_px),
            ("gallery.drag_multiplier", self.gallery.drag_multiplier),
        ];
        for (field, value) in numbers {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidNumber { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Threshold(self.reveal.threshold));
        }

        let s = &self.selectors;
        let c = &self.classes;
        let strings = [
            ("selectors.navbar", s.navbar.as_str()),
            ("selectors.menu_button", s.menu_button.as_str()),
            ("selectors.menu_panel", s.menu_panel.as_str()),
            ("selectors.nav_links", s.nav_links.as_str()),
            ("selectors.gallery", s.gallery.as_str()),
            ("selectors.prev_button", s.prev_button.as_str()),
            ("selectors.next_button", s.next_button.as_str()),
            ("selectors.sections", s.sections.as_str()),
            ("selectors.anchor_links", s.anchor_links.as_str()),
            ("selectors.reveal_targets", s.reveal_targets.as_str()),
            ("classes.scrolled", c.scrolled.as_str()),
            ("classes.active_link", c.active_link.as_str()),
            ("classes.menu_open", c.menu_open.as_str()),
            ("classes.visible", c.visible.as_str()),
            ("classes.page_loaded", c.page_loaded.as_str()),
            ("reveal.root_margin", self.reveal.root_margin.as_str()),
        ];
        for (field, value) in strings {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        Ok(())
    }
}
