//! Item configuration: behaviour flags, hotspot pads, palette and timings.
//!
//! `ItemConfig` can be built from defaults, parsed from JSON, or overlaid
//! from `SHAPE_ITEMS_*` environment variables. Every constructor validates
//! the result before handing it out.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_BLINK_INTERVAL_MS, DEFAULT_INNER_PAD_PX, DEFAULT_NUDGE_STEP, DEFAULT_OUTER_PAD_PX, DEFAULT_PEN_WIDTH_PX,
    DISCRETE_SCALE_THRESHOLD, HIGHLIGHT_PEN_WIDTH_PX,
};
use crate::error::ConfigError;

/// Independently togglable behaviour flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFlags {
    /// Selected items consume mapped nudge keys.
    pub accepts_keyboard: bool,
    /// A primary press selects the item.
    pub select_on_click: bool,
    /// A primary press starts a drag/resize capture.
    pub accepts_mouse_capture: bool,
    /// Positions snap to integers and paint with a half-pixel offset.
    pub discrete_geometry: bool,
    /// The label embeds the live coordinates.
    pub display_real_coordinates: bool,
    /// A label is produced for rendering.
    pub display_label: bool,
    /// While unselected the whole canvas acts as this item's drag handle.
    pub fill_scene: bool,
}

impl ItemFlags {
    /// Defaults for rectangle-like items.
    #[must_use]
    pub fn rect_defaults() -> Self {
        Self { accepts_keyboard: true, select_on_click: true, accepts_mouse_capture: true, ..Self::default() }
    }

    /// Defaults for point-like markers: discrete geometry with a label.
    #[must_use]
    pub fn marker_defaults() -> Self {
        Self {
            accepts_keyboard: true,
            select_on_click: true,
            accepts_mouse_capture: true,
            discrete_geometry: true,
            display_label: true,
            ..Self::default()
        }
    }
}

/// CSS colour strings driving the pen and fill choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Outline colour of an idle item.
    pub pen: String,
    /// Fill colour of rectangle items.
    pub fill: String,
    /// Outline colour while selected.
    pub selected: String,
    /// Outline colour while hovered.
    pub highlighted: String,
    /// Outline colour while both selected and hovered; also where the alert settles.
    pub steady: String,
    /// First blink phase colour.
    pub alert: String,
    /// Second blink phase colour.
    pub alert_secondary: String,
    /// Label text colour.
    pub label: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            pen: "#1F1A17".into(),
            fill: "#00000000".into(),
            selected: "#2F80ED".into(),
            highlighted: "#56CCF2".into(),
            steady: "#2D9CDB".into(),
            alert: "#D94B4B".into(),
            alert_secondary: "#F2C94C".into(),
            label: "#1F1A17".into(),
        }
    }
}

impl Palette {
    fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("palette.pen", &self.pen),
            ("palette.fill", &self.fill),
            ("palette.selected", &self.selected),
            ("palette.highlighted", &self.highlighted),
            ("palette.steady", &self.steady),
            ("palette.alert", &self.alert),
            ("palette.alert_secondary", &self.alert_secondary),
            ("palette.label", &self.label),
        ]
    }
}

/// Tuning knobs shared by every item of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    /// Hotspot band outside the outline, in screen pixels.
    pub outer_pad: f64,
    /// Hotspot band inside the outline, in screen pixels.
    pub inner_pad: f64,
    /// Cosmetic pen width, in screen pixels.
    pub pen_width: f64,
    /// Cosmetic pen width while highlighted, in screen pixels.
    pub highlight_pen_width: f64,
    pub palette: Palette,
    /// Delay between alert blink phases, in milliseconds.
    pub blink_interval_ms: u64,
    /// Displacement contributed by one nudge key, in canvas units.
    pub nudge_step: f64,
    /// View scales below this snap moved positions to integers.
    pub discrete_scale_threshold: f64,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            outer_pad: DEFAULT_OUTER_PAD_PX,
            inner_pad: DEFAULT_INNER_PAD_PX,
            pen_width: DEFAULT_PEN_WIDTH_PX,
            highlight_pen_width: HIGHLIGHT_PEN_WIDTH_PX,
            palette: Palette::default(),
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
            nudge_step: DEFAULT_NUDGE_STEP,
            discrete_scale_threshold: DISCRETE_SCALE_THRESHOLD,
        }
    }
}

impl ItemConfig {
    /// Parse a JSON document; absent keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        debug!(outer_pad = config.outer_pad, inner_pad = config.inner_pad, "item config parsed");
        Ok(config)
    }

    /// Defaults overlaid with environment variables.
    ///
    /// Optional:
    /// - `SHAPE_ITEMS_OUTER_PAD`, `SHAPE_ITEMS_INNER_PAD`: hotspot pads in pixels
    /// - `SHAPE_ITEMS_PEN_WIDTH`: cosmetic pen width
    /// - `SHAPE_ITEMS_BLINK_INTERVAL_MS`: alert phase delay
    /// - `SHAPE_ITEMS_NUDGE_STEP`: nudge displacement
    /// - `SHAPE_ITEMS_DISCRETE_SCALE_THRESHOLD`: snapping threshold
    /// - `SHAPE_ITEMS_ALERT_COLOR`, `SHAPE_ITEMS_SELECTED_COLOR`: palette overrides
    ///
    /// Unparseable numbers fall back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = Self::default();
        let mut palette = base.palette.clone();
        if let Ok(color) = std::env::var("SHAPE_ITEMS_ALERT_COLOR") {
            palette.alert = color;
        }
        if let Ok(color) = std::env::var("SHAPE_ITEMS_SELECTED_COLOR") {
            palette.selected = color;
        }
        let config = Self {
            outer_pad: env_parse("SHAPE_ITEMS_OUTER_PAD", base.outer_pad),
            inner_pad: env_parse("SHAPE_ITEMS_INNER_PAD", base.inner_pad),
            pen_width: env_parse("SHAPE_ITEMS_PEN_WIDTH", base.pen_width),
            highlight_pen_width: base.highlight_pen_width,
            palette,
            blink_interval_ms: env_parse("SHAPE_ITEMS_BLINK_INTERVAL_MS", base.blink_interval_ms),
            nudge_step: env_parse("SHAPE_ITEMS_NUDGE_STEP", base.nudge_step),
            discrete_scale_threshold: env_parse("SHAPE_ITEMS_DISCRETE_SCALE_THRESHOLD", base.discrete_scale_threshold),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and colour syntax.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("outer_pad", self.outer_pad)?;
        non_negative("inner_pad", self.inner_pad)?;
        positive("pen_width", self.pen_width)?;
        positive("highlight_pen_width", self.highlight_pen_width)?;
        positive("discrete_scale_threshold", self.discrete_scale_threshold)?;
        non_negative("nudge_step", self.nudge_step)?;
        if self.blink_interval_ms == 0 {
            return Err(ConfigError::OutOfRange { field: "blink_interval_ms", value: 0.0 });
        }
        for (field, value) in self.palette.entries() {
            if !is_css_hex(value) {
                return Err(ConfigError::InvalidColor { field, value: value.to_owned() });
            }
        }
        Ok(())
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 { Ok(()) } else { Err(ConfigError::OutOfRange { field, value }) }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 { Ok(()) } else { Err(ConfigError::OutOfRange { field, value }) }
}

fn is_css_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
