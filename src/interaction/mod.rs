use serde::{Deserialize, Serialize};

/// Public hover state exposed to host applications.
///
/// `tooltip` holds the left/right ratio text for the hovered row and is
/// cleared together with `row` when the pointer leaves every row slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverState {
    pub row: Option<usize>,
    pub tooltip: Option<String>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            row: None,
            tooltip: None,
        }
    }
}

impl HoverState {
    pub fn clear(&mut self) {
        self.row = None;
        self.tooltip = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.row.is_some()
    }
}

/// Rounded percentage of `left` relative to `right`.
///
/// A zero `right` reports 0% regardless of `left`, so the tooltip never
/// divides by zero.
#[must_use]
pub fn tooltip_ratio_percent(left: f64, right: f64) -> i64 {
    if right == 0.0 {
        return 0;
    }
    (100.0 * left / right).round() as i64
}

/// Tooltip text shown while a row group is hovered.
#[must_use]
pub fn tooltip_text(left: f64, right: f64) -> String {
    format!("{}%", tooltip_ratio_percent(left, right))
}
