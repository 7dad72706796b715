//! Shared numeric constants for the shape items.

// ── Hotspots ────────────────────────────────────────────────────

/// Default thickness of the hotspot band outside the shape, in screen pixels.
pub const DEFAULT_OUTER_PAD_PX: f64 = 4.0;

/// Default thickness of the hotspot band inside the shape, in screen pixels.
pub const DEFAULT_INNER_PAD_PX: f64 = 6.0;

/// A shape narrower than this many scaled inner pads collapses its hotspots
/// to a single outer band.
pub const HOTSPOT_COLLAPSE_RATIO: f64 = 2.5;

/// Scale changes smaller than this reuse the cached hotspot regions.
pub const SCALE_EPSILON: f64 = 1e-9;

// ── Discrete geometry ───────────────────────────────────────────

/// Below this view scale positions are snapped to integers.
pub const DISCRETE_SCALE_THRESHOLD: f64 = 1.0;

/// Paint offset applied to snapped geometry so one-pixel strokes land on
/// pixel centres.
pub const DISCRETE_PAINT_OFFSET: f64 = 0.5;

// ── Alert blink ─────────────────────────────────────────────────

/// Number of flash/secondary cycles before the alert settles.
pub const ALERT_BLINK_CYCLES: u8 = 3;

/// Default delay between blink phases, in milliseconds.
pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 120;

// ── Pen / palette ───────────────────────────────────────────────

/// Default cosmetic pen width in screen pixels.
pub const DEFAULT_PEN_WIDTH_PX: f64 = 1.0;

/// Pen width while highlighted, in screen pixels.
pub const HIGHLIGHT_PEN_WIDTH_PX: f64 = 2.0;

// ── Markers & labels ────────────────────────────────────────────

/// Half-extent of the marker cross, in screen pixels.
pub const MARKER_RADIUS_PX: f64 = 5.0;

/// Gap between an item and its label, in screen pixels.
pub const LABEL_OFFSET_PX: f64 = 6.0;

/// Approximate advance of one label glyph, in screen pixels.
pub const LABEL_CHAR_WIDTH_PX: f64 = 7.0;

/// Label line height, in screen pixels.
pub const LABEL_LINE_HEIGHT_PX: f64 = 14.0;

// ── Keyboard nudge ──────────────────────────────────────────────

/// Default displacement of a single nudge key, in canvas units.
pub const DEFAULT_NUDGE_STEP: f64 = 1.0;
