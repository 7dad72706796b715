#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Size;
use crate::input::{Button, Modifiers};
use crate::visual::Indicator;

fn attached(rect: Rect) -> RectItem {
    let mut item = RectItem::new(rect);
    item.set_canvas(Some(Size::new(800.0, 600.0)));
    item
}

#[test]
fn move_to_clamps_whole_rect() {
    let mut item = attached(Rect::new(100.0, 100.0, 200.0, 200.0));
    item.move_to(Point::new(700.0, -20.0), 1.0);
    assert_eq!(item.geometry(), Rect::new(600.0, 0.0, 200.0, 200.0));
}

#[test]
fn move_to_snaps_below_threshold() {
    let mut item = attached(Rect::new(100.0, 100.0, 20.0, 20.0));
    item.move_to(Point::new(10.7, 20.2), 0.25);
    assert_eq!(item.geometry().top_left(), Point::new(10.0, 20.0));
    item.move_to(Point::new(10.7, 20.2), 1.0);
    assert_eq!(item.geometry().top_left(), Point::new(10.7, 20.2));
}

#[test]
fn discrete_flag_snaps() {
    let flags = ItemFlags { discrete_geometry: true, ..ItemFlags::rect_defaults() };
    let mut item = RectItem::with_config(Rect::new(0.0, 0.0, 10.0, 10.0), flags, ItemConfig::default());
    item.move_to(Point::new(3.9, 4.1), 4.0);
    assert_eq!(item.geometry().top_left(), Point::new(3.0, 4.0));
    assert_eq!(item.paint_params().offset, Point::new(0.5, 0.5));
}

#[test]
fn combined_corner_drag_keeps_opposite_edge() {
    let mut item = attached(Rect::new(100.0, 100.0, 200.0, 200.0));
    item.set_minimum_size(Size::new(50.0, 50.0));
    // Grab the top-left corner and push it past the bottom-right one.
    item.on_pointer_press(Point::new(100.0, 100.0), Button::Primary, Modifiers::default());
    item.on_pointer_move(Point::new(400.0, 400.0));
    assert_eq!(item.geometry(), Rect::new(250.0, 250.0, 50.0, 50.0));
    assert!(item.core().visual().alert().is_active());
}

#[test]
fn label_uses_name_and_top_left() {
    let flags = ItemFlags { display_label: true, display_real_coordinates: true, ..ItemFlags::rect_defaults() };
    let item = RectItem::with_config(Rect::new(5.0, 6.0, 10.0, 10.0), flags, ItemConfig::default()).named("frame");
    assert_eq!(item.label().map(|l| l.text).as_deref(), Some("frame (5;6)"));
}

#[test]
fn paint_params_follow_visual_state() {
    let mut item = attached(Rect::new(100.0, 100.0, 200.0, 200.0));
    let palette = item.core().config().palette.clone();

    let idle = item.paint_params();
    assert_eq!(idle.pen_color, palette.pen);
    assert_eq!(idle.pen_width, 1.0);
    assert!(idle.cosmetic);
    assert_eq!(idle.fill.as_deref(), Some(palette.fill.as_str()));

    item.set_selected(true);
    item.on_pointer_move(Point::new(200.0, 200.0));
    let hot = item.paint_params();
    assert_eq!(hot.pen_color, Indicator::Steady.color(&palette));
    assert_eq!(hot.pen_width, 2.0);
}
