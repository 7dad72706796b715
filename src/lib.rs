//! Directly-manipulable 2D shape items.
//!
//! This crate holds the interaction core of canvas items: padded hotspot
//! regions that stay the same size on screen at every zoom level, a
//! nine-zone hit classifier, drag/resize resolution under canvas and
//! min/max size constraints, keyboard nudging with composable held keys,
//! selection/highlight/alert visual state, and re-stacking on overlap. The
//! host owns windowing, event delivery and drawing; it feeds events to a
//! [`scene::Scene`] (or directly to items) and draws from
//! [`paint::PaintParams`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scene`] | Item container, event routing, action dispatch |
//! | [`item`] | [`item::ShapeCore`] and the [`item::ShapeItem`] trait |
//! | [`rect_item`] | Resizable rectangle item |
//! | [`marker`] | Point marker with coordinate label |
//! | [`hotspot`] | Hotspot region derivation and per-scale cache |
//! | [`hit`] | Zone classification, multipliers, cursor hints |
//! | [`drag`] | Snapshot + delta → new geometry |
//! | [`clamp`] | Canvas clamping and size bounding |
//! | [`nudge`] | Held-key displacement accumulator |
//! | [`alert`] | Alert blink state machine |
//! | [`visual`] | Selection/highlight state and indicator colour |
//! | [`zorder`] | Overlap re-stacking |
//! | [`input`] | Buttons, keys, modifiers, pointer capture |
//! | [`scheduler`] | Timer tokens; manual and tokio schedulers |
//! | [`action`] | Side effects returned by handlers |
//! | [`observer`] | Synchronous notification list |
//! | [`label`] | Label text and placement |
//! | [`paint`] | Paint parameters |
//! | [`config`] | Flags, palette and tuning, from JSON or env |
//! | [`geom`] | Point, size, rectangle |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants |

pub mod action;
pub mod alert;
pub mod clamp;
pub mod config;
pub mod consts;
pub mod drag;
pub mod error;
pub mod geom;
pub mod hit;
pub mod hotspot;
pub mod input;
pub mod item;
pub mod label;
pub mod marker;
pub mod nudge;
pub mod observer;
pub mod paint;
pub mod rect_item;
pub mod scene;
pub mod scheduler;
pub mod visual;
pub mod zorder;
