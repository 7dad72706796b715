#![allow(clippy::float_cmp)]

use super::*;

fn canvas() -> Option<Size> {
    Some(Size::new(800.0, 600.0))
}

// =============================================================
// clamp_position
// =============================================================

#[test]
fn clamp_position_inside_is_identity() {
    let p = Point::new(50.0, 50.0);
    assert_eq!(clamp_position(p, Size::new(100.0, 100.0), canvas()), p);
}

#[test]
fn clamp_position_pulls_back_from_each_edge() {
    let s = Size::new(100.0, 100.0);
    assert_eq!(clamp_position(Point::new(-10.0, -20.0), s, canvas()), Point::new(0.0, 0.0));
    assert_eq!(clamp_position(Point::new(750.0, 590.0), s, canvas()), Point::new(700.0, 500.0));
}

#[test]
fn clamp_position_oversized_shape_pins_to_origin() {
    let p = clamp_position(Point::new(30.0, 30.0), Size::new(900.0, 700.0), canvas());
    assert_eq!(p, Point::new(0.0, 0.0));
}

#[test]
fn clamp_position_without_canvas_passes_through() {
    let p = Point::new(-100.0, 5000.0);
    assert_eq!(clamp_position(p, Size::new(10.0, 10.0), None), p);
}

// =============================================================
// clamp_point
// =============================================================

#[test]
fn clamp_point_allows_far_edge() {
    assert_eq!(clamp_point(Point::new(800.0, 600.0), canvas()), Point::new(800.0, 600.0));
    assert_eq!(clamp_point(Point::new(900.0, -1.0), canvas()), Point::new(800.0, 0.0));
}

// =============================================================
// clamp_size_to_canvas
// =============================================================

#[test]
fn clamp_size_to_canvas_respects_origin() {
    let s = clamp_size_to_canvas(Point::new(50.0, 50.0), Size::new(1000.0, 100.0), canvas());
    assert_eq!(s, Size::new(750.0, 100.0));
}

#[test]
fn clamp_size_to_canvas_floors_at_zero() {
    let s = clamp_size_to_canvas(Point::new(50.0, 50.0), Size::new(-40.0, -1.0), canvas());
    assert_eq!(s, Size::new(0.0, 0.0));
}

// =============================================================
// clamp_rect
// =============================================================

#[test]
fn clamp_rect_in_bounds_is_noop() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(clamp_rect(r, canvas()), r);
}

#[test]
fn clamp_rect_is_idempotent() {
    let cases = [
        Rect::new(-50.0, -50.0, 100.0, 100.0),
        Rect::new(790.0, 10.0, 100.0, 100.0),
        Rect::new(0.0, 0.0, 2000.0, 2000.0),
        Rect::new(400.0, 300.0, -10.0, 5.0),
        Rect::new(1e9, -1e9, 1.0, 1.0),
    ];
    for r in cases {
        let once = clamp_rect(r, canvas());
        assert_eq!(clamp_rect(once, canvas()), once, "not idempotent for {r:?}");
        assert!(once.x >= 0.0 && once.y >= 0.0);
        assert!(once.right() <= 800.0 && once.bottom() <= 600.0);
    }
}

#[test]
fn clamp_rect_without_canvas_only_fixes_negative_size() {
    let r = clamp_rect(Rect::new(-5.0, -5.0, -1.0, 3.0), None);
    assert_eq!(r, Rect::new(-5.0, -5.0, 0.0, 3.0));
}

// =============================================================
// bound_size
// =============================================================

#[test]
fn bound_size_reports_violation() {
    let c = SizeConstraints::new(Size::new(10.0, 10.0), Size::new(200.0, 200.0));
    let b = bound_size(Size::new(600.0, 50.0), &c);
    assert_eq!(b.size, Size::new(200.0, 50.0));
    assert!(b.violated);
}

#[test]
fn bound_size_in_range_is_clean() {
    let c = SizeConstraints::new(Size::new(10.0, 10.0), Size::new(200.0, 200.0));
    let b = bound_size(Size::new(100.0, 100.0), &c);
    assert_eq!(b.size, Size::new(100.0, 100.0));
    assert!(!b.violated);
}

#[test]
fn bound_size_default_constraints_are_open() {
    let b = bound_size(Size::new(1e12, 0.0), &SizeConstraints::default());
    assert!(!b.violated);
}
