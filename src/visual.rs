//! Selection, highlight and alert state, and the indicator colour derived
//! from them.

#[cfg(test)]
#[path = "visual_test.rs"]
mod visual_test;

use crate::alert::{AlertBlink, BlinkPhase};
use crate::config::Palette;
use crate::item::ItemId;

/// Which palette entry the outline is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Pen,
    Selected,
    Highlighted,
    /// Selected and hovered at once.
    Steady,
    Alert,
    AlertSecondary,
}

impl Indicator {
    #[must_use]
    pub fn color(self, palette: &Palette) -> &str {
        match self {
            Self::Pen => &palette.pen,
            Self::Selected => &palette.selected,
            Self::Highlighted => &palette.highlighted,
            Self::Steady => &palette.steady,
            Self::Alert => &palette.alert,
            Self::AlertSecondary => &palette.alert_secondary,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VisualState {
    selected: bool,
    highlighted: bool,
    alert: AlertBlink,
}

impl VisualState {
    #[must_use]
    pub fn new(item: ItemId) -> Self {
        Self { selected: false, highlighted: false, alert: AlertBlink::new(item) }
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    #[must_use]
    pub fn alert(&self) -> &AlertBlink {
        &self.alert
    }

    pub(crate) fn alert_mut(&mut self) -> &mut AlertBlink {
        &mut self.alert
    }

    /// Returns `true` if the value changed.
    pub fn set_selected(&mut self, selected: bool) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }

    /// Returns `true` if the value changed.
    pub fn set_highlighted(&mut self, highlighted: bool) -> bool {
        let changed = self.highlighted != highlighted;
        self.highlighted = highlighted;
        changed
    }

    /// A running alert overrides everything; otherwise selection and hover
    /// pick the colour.
    #[must_use]
    pub fn indicator(&self) -> Indicator {
        match self.alert.phase() {
            BlinkPhase::Flash => Indicator::Alert,
            BlinkPhase::Secondary => Indicator::AlertSecondary,
            BlinkPhase::Quiet => match (self.selected, self.highlighted) {
                (true, true) => Indicator::Steady,
                (false, true) => Indicator::Highlighted,
                (true, false) => Indicator::Selected,
                (false, false) => Indicator::Pen,
            },
        }
    }
}
