//! Drag/resize resolution: snapshot geometry + multipliers + pointer delta →
//! new geometry.
//!
//! Resolution is always computed from the press-time snapshot, never
//! incrementally, so a drag that overshoots and comes back lands exactly
//! where the pointer is.
//!
//! Three paths:
//!
//! * **translate** (`dw = dh = 0`): move the top-left corner, position-only clamp.
//! * **pure resize** (`dx = dy = 0`): grow from the anchored top-left corner,
//!   clamp to the canvas, then bound to `[min, max]`. The violation is judged
//!   on the size the pointer asked for, so a canvas edge never hides it.
//! * **combined** (a moving left or top edge): clamp the position to `>= 0`
//!   first and hand the overflow back to the size, then bound the size and
//!   re-derive the moving edge so the opposite edge stays put. This order is
//!   load-bearing: bounding first gives a different rectangle for large deltas.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::clamp::{SizeConstraints, bound_size, clamp_position, clamp_size_to_canvas};
use crate::geom::{Point, Rect, Size};
use crate::hit::Multipliers;

/// New geometry and whether the size bounds had to intervene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub rect: Rect,
    /// The requested size, before the canvas cut it back, fell outside
    /// `[minimum, maximum]`.
    pub violated: bool,
}

impl Resolution {
    fn clean(rect: Rect) -> Self {
        Self { rect, violated: false }
    }
}

/// Resolve the geometry for a pointer `delta` applied to `snapshot`.
#[must_use]
pub fn resolve(
    snapshot: Rect,
    m: Multipliers,
    delta: Point,
    canvas: Option<Size>,
    constraints: &SizeConstraints,
) -> Resolution {
    if m.is_none() {
        Resolution::clean(snapshot)
    } else if m.is_translate() {
        translate(snapshot, m, delta, canvas)
    } else if m.is_pure_resize() {
        resize(snapshot, m, delta, canvas, constraints)
    } else {
        combined(snapshot, m, delta, canvas, constraints)
    }
}

fn translate(snapshot: Rect, m: Multipliers, delta: Point, canvas: Option<Size>) -> Resolution {
    let target = Point::new(snapshot.x + f64::from(m.dx) * delta.x, snapshot.y + f64::from(m.dy) * delta.y);
    let origin = clamp_position(target, snapshot.size(), canvas);
    Resolution::clean(snapshot.with_top_left(origin))
}

fn resize(
    snapshot: Rect,
    m: Multipliers,
    delta: Point,
    canvas: Option<Size>,
    constraints: &SizeConstraints,
) -> Resolution {
    let wanted = Size::new(
        snapshot.width + f64::from(m.dw) * delta.x,
        snapshot.height + f64::from(m.dh) * delta.y,
    );
    let fitted = clamp_size_to_canvas(snapshot.top_left(), wanted, canvas);
    let bounded = bound_size(fitted, constraints);
    let violated = bounded.violated || bound_size(wanted, constraints).violated;
    Resolution { rect: snapshot.with_size(bounded.size), violated }
}

#[allow(clippy::float_cmp)]
fn combined(
    snapshot: Rect,
    m: Multipliers,
    delta: Point,
    canvas: Option<Size>,
    constraints: &SizeConstraints,
) -> Resolution {
    let mut x = snapshot.x + f64::from(m.dx) * delta.x;
    let mut y = snapshot.y + f64::from(m.dy) * delta.y;
    let mut w = snapshot.width + f64::from(m.dw) * delta.x;
    let mut h = snapshot.height + f64::from(m.dh) * delta.y;

    // Position first; whatever the edge could not travel goes back into the size.
    if x < 0.0 {
        if m.dw != 0 {
            w += x;
        }
        x = 0.0;
    }
    if y < 0.0 {
        if m.dh != 0 {
            h += y;
        }
        y = 0.0;
    }

    let tentative = Size::new(w, h);
    let fitted = clamp_size_to_canvas(Point::new(x, y), tentative, canvas);
    let bounded = bound_size(fitted, constraints);
    let violated = bounded.violated || bound_size(tentative, constraints).violated;
    let size = bounded.size;

    // When the size was cut back, a moving left/top edge is re-derived from
    // the anchored right/bottom edge.
    if m.dx != 0 && size.width != w {
        x = (snapshot.right() - size.width).max(0.0);
    }
    if m.dy != 0 && size.height != h {
        y = (snapshot.bottom() - size.height).max(0.0);
    }

    Resolution { rect: Rect::from_origin_size(Point::new(x, y), size), violated }
}
