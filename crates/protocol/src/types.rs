use serde::{Deserialize, Serialize};

/// An axis-aligned box in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect from its four edges, as reported by `getBoundingClientRect`.
    pub fn from_edges(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            x: left,
            y: top,
            w: right - left,
            h: bottom - top,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }
}

/// Size of the visible viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_survive_conversion() {
        let r = Rect::from_edges(10.0, 20.0, 110.0, 320.0);
        assert!((r.top() - 10.0).abs() < f64::EPSILON);
        assert!((r.left() - 20.0).abs() < f64::EPSILON);
        assert!((r.bottom() - 110.0).abs() < f64::EPSILON);
        assert!((r.right() - 320.0).abs() < f64::EPSILON);
        assert!((r.w - 300.0).abs() < f64::EPSILON);
    }
}
