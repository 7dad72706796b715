use super::*;

// =============================================================
// Text
// =============================================================

#[test]
fn coordinates_drop_trailing_zero() {
    assert_eq!(coordinates(Point::new(12.0, 7.0)), "(12;7)");
    assert_eq!(coordinates(Point::new(0.5, -3.25)), "(0.5;-3.25)");
}

#[test]
fn compose_variants() {
    assert_eq!(compose("", None), None);
    assert_eq!(compose("A", None).as_deref(), Some("A"));
    assert_eq!(compose("", Some(Point::new(1.0, 2.0))).as_deref(), Some("(1;2)"));
    assert_eq!(compose("A", Some(Point::new(1.0, 2.0))).as_deref(), Some("A (1;2)"));
}

// =============================================================
// Anchor
// =============================================================

#[test]
fn anchor_below_right_by_default() {
    let r = anchor(Rect::new(12.0, 7.0, 0.0, 0.0), "(12;7)", 1.0, Some(Size::new(800.0, 600.0)));
    assert_eq!(r, Rect::new(18.0, 13.0, 42.0, 14.0));
}

#[test]
fn anchor_flips_at_canvas_edges() {
    let r = anchor(Rect::new(790.0, 590.0, 0.0, 0.0), "(12;7)", 1.0, Some(Size::new(800.0, 600.0)));
    assert_eq!(r, Rect::new(742.0, 570.0, 42.0, 14.0));
}

#[test]
fn anchor_scales_with_zoom() {
    let r = anchor(Rect::new(0.0, 0.0, 10.0, 10.0), "ab", 2.0, None);
    assert_eq!(r, Rect::new(13.0, 13.0, 7.0, 7.0));
}
