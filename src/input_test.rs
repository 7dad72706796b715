use super::*;
use crate::hit::Zone;

fn session() -> CaptureSession {
    CaptureSession::new(
        Point::new(10.0, 10.0),
        Rect::new(0.0, 0.0, 100.0, 100.0),
        HitRegion::new(Zone::BottomRight, Rect::new(94.0, 94.0, 10.0, 10.0)),
    )
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_from_str_and_name() {
    let k = Key::from("ArrowUp");
    assert_eq!(k.name(), "ArrowUp");
    assert_eq!(k, Key::new(String::from("ArrowUp")));
    assert_ne!(k, Key::from("ArrowDown"));
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

// =============================================================
// CaptureSession
// =============================================================

#[test]
fn capture_copies_hit_multipliers() {
    let s = session();
    assert_eq!(s.multipliers, Multipliers::RESIZE);
    assert_eq!(s.hit.zone, Zone::BottomRight);
}

#[test]
fn capture_delta_is_relative_to_origin() {
    let s = session();
    assert_eq!(s.delta(Point::new(15.0, 3.0)), Point::new(5.0, -7.0));
    assert_eq!(s.delta(s.origin), Point::new(0.0, 0.0));
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let st = InputState::default();
    assert!(!st.is_captured());
    assert!(st.session().is_none());
}

#[test]
fn input_state_captured_exposes_session() {
    let st = InputState::Captured(session());
    assert!(st.is_captured());
    assert_eq!(st.session().map(|s| s.origin), Some(Point::new(10.0, 10.0)));
}

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Primary, Button::Middle);
}
