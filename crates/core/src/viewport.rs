use folio_protocol::{Rect, ViewportSize};

/// Whether `rect` lies entirely inside `[0, width] x [0, height]`.
///
/// Edges touching the viewport boundary count as inside.
pub fn is_in_viewport(rect: &Rect, viewport: &ViewportSize) -> bool {
    rect.top() >= 0.0
        && rect.left() >= 0.0
        && rect.bottom() <= viewport.height
        && rect.right() <= viewport.width
}
