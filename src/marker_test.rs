#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::DISCRETE_PAINT_OFFSET;
use crate::hit::{CursorHint, Multipliers};
use crate::input::{Button, Modifiers};

fn attached(p: Point) -> MarkerItem {
    let mut marker = MarkerItem::new(p);
    marker.set_canvas(Some(Size::new(800.0, 600.0)));
    marker
}

fn with_coordinates() -> ItemFlags {
    ItemFlags { display_real_coordinates: true, ..ItemFlags::marker_defaults() }
}

// =============================================================
// move_to
// =============================================================

#[test]
fn discrete_move_floors_and_offsets() {
    let mut marker = MarkerItem::with_config(Point::default(), with_coordinates(), ItemConfig::default());
    marker.move_to(Point::new(12.6, 7.4), 1.0);

    assert_eq!(marker.point(), Point::new(12.0, 7.0));
    let paint = marker.paint_params();
    assert_eq!(paint.offset, Point::new(DISCRETE_PAINT_OFFSET, DISCRETE_PAINT_OFFSET));
    assert_eq!(paint.label.map(|l| l.text).as_deref(), Some("(12;7)"));
}

#[test]
fn continuous_move_keeps_fraction() {
    let flags = ItemFlags { discrete_geometry: false, ..ItemFlags::marker_defaults() };
    let mut marker = MarkerItem::with_config(Point::default(), flags, ItemConfig::default());
    marker.move_to(Point::new(12.6, 7.4), 1.0);
    assert_eq!(marker.point(), Point::new(12.6, 7.4));
    assert_eq!(marker.paint_params().offset, Point::default());
}

#[test]
fn low_scale_hint_snaps_even_when_continuous() {
    let flags = ItemFlags { discrete_geometry: false, ..ItemFlags::marker_defaults() };
    let mut marker = MarkerItem::with_config(Point::default(), flags, ItemConfig::default());
    marker.move_to(Point::new(12.6, 7.4), 0.5);
    assert_eq!(marker.point(), Point::new(12.0, 7.0));
}

#[test]
fn move_clamps_to_canvas_extent() {
    let mut marker = attached(Point::new(10.0, 10.0));
    marker.move_to(Point::new(900.0, -5.0), 1.0);
    assert_eq!(marker.point(), Point::new(800.0, 0.0));
}

#[test]
fn unchanged_move_is_silent() {
    let mut marker = attached(Point::new(10.0, 10.0));
    assert!(marker.move_to(Point::new(10.4, 10.9), 1.0).is_empty());
}

#[test]
fn move_notifies_position() {
    let mut marker = attached(Point::new(10.0, 10.0));
    let id = marker.id();
    let actions = marker.move_to(Point::new(20.0, 30.0), 1.0);
    assert!(actions.contains(&Action::PositionChanged { id, position: Point::new(20.0, 30.0) }));
}

#[test]
fn set_position_bypasses_clamp_and_snap() {
    let mut marker = attached(Point::new(10.0, 10.0));
    marker.set_position(Point::new(-3.5, 900.25));
    assert_eq!(marker.point(), Point::new(-3.5, 900.25));
}

#[test]
fn set_geometry_ignores_size() {
    let mut marker = attached(Point::new(10.0, 10.0));
    marker.set_geometry(Rect::new(40.0, 50.0, 30.0, 30.0));
    assert_eq!(marker.geometry(), Rect::new(40.0, 50.0, 0.0, 0.0));
}

// =============================================================
// Interaction
// =============================================================

#[test]
fn every_hotspot_moves() {
    let mut marker = attached(Point::new(100.0, 100.0));
    for p in [Point::new(97.0, 97.0), Point::new(103.0, 103.0), Point::new(100.0, 100.0)] {
        let hit = marker.hit_test(p).unwrap();
        assert_eq!(hit.multipliers, Multipliers::MOVE);
        assert_eq!(hit.cursor, CursorHint::Move);
    }
    assert!(marker.hit_test(Point::new(110.0, 100.0)).is_none());
}

#[test]
fn drag_moves_and_snaps() {
    let mut marker = attached(Point::new(100.0, 100.0));
    marker.on_pointer_press(Point::new(102.0, 101.0), Button::Primary, Modifiers::default());
    marker.on_pointer_move(Point::new(152.7, 121.2));
    assert_eq!(marker.point(), Point::new(150.0, 120.0));
}

#[test]
fn shift_nudge_still_moves() {
    let mut marker = attached(Point::new(100.0, 100.0));
    marker.set_selected(true);
    let mods = Modifiers { shift: true, ..Modifiers::default() };
    marker.on_key_press(&crate::input::Key::from("ArrowLeft"), mods);
    assert_eq!(marker.point(), Point::new(99.0, 100.0));
    assert_eq!(marker.geometry().size(), Size::default());
}

// =============================================================
// Label / paint
// =============================================================

#[test]
fn label_hidden_without_name_or_coordinates() {
    let marker = attached(Point::new(10.0, 10.0));
    assert!(marker.label().is_none());
}

#[test]
fn named_label_with_coordinates() {
    let marker = MarkerItem::with_config(Point::new(3.0, 4.0), with_coordinates(), ItemConfig::default()).named("P1");
    assert_eq!(marker.label().map(|l| l.text).as_deref(), Some("P1 (3;4)"));
}

#[test]
fn label_flag_off_hides_label() {
    let flags = ItemFlags { display_label: false, ..with_coordinates() };
    let marker = MarkerItem::with_config(Point::new(3.0, 4.0), flags, ItemConfig::default());
    assert!(marker.label().is_none());
}

#[test]
fn paint_outline_is_scale_independent() {
    let mut marker = attached(Point::new(100.0, 100.0));
    assert_eq!(marker.paint_params().outline, Rect::new(95.0, 95.0, 10.0, 10.0));
    marker.set_scale(2.0);
    assert_eq!(marker.paint_params().outline, Rect::new(97.5, 97.5, 5.0, 5.0));
    assert!(marker.paint_params().fill.is_none());
}
