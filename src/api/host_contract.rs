use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::render::Color;

/// Default fill for the left-hand bars.
pub const DEFAULT_LEFT_COLOR_HEX: &str = "#FEC500";

/// Default fill for the right-hand bars.
pub const DEFAULT_RIGHT_COLOR_HEX: &str = "#42B3D5";

/// One field of the host query result.
///
/// `name` keys into each data record; for measures, `label` is the display
/// title shown above the corresponding bar column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub name: String,
    pub label: String,
}

impl FieldMeta {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// Shape metadata the host supplies alongside every query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMetadata {
    pub dimensions: Vec<FieldMeta>,
    pub measures: Vec<FieldMeta>,
    pub pivot_count: usize,
}

/// One host record: an ordered mapping from field name to a raw cell value.
pub type QueryRecord = IndexMap<String, Value>;

/// Raw tabular result delivered by the host on every update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub records: Vec<QueryRecord>,
}

/// Kind of a recognized configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Color,
}

/// One configuration option the visualization recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub name: &'static str,
    pub kind: OptionKind,
    pub default: &'static str,
}

/// Registration descriptor exposed to the host once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationDescriptor {
    pub id: &'static str,
    pub options: Vec<OptionDescriptor>,
}

/// The double-bar visualization's registration surface.
#[must_use]
pub fn descriptor() -> VisualizationDescriptor {
    VisualizationDescriptor {
        id: "double-bar",
        options: vec![
            OptionDescriptor {
                name: "leftColor",
                kind: OptionKind::Color,
                default: DEFAULT_LEFT_COLOR_HEX,
            },
            OptionDescriptor {
                name: "rightColor",
                kind: OptionKind::Color,
                default: DEFAULT_RIGHT_COLOR_HEX,
            },
        ],
    }
}

/// Resolved bar styling for one chart instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub left_color: Color,
    pub right_color: Color,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            // #FEC500 / #42B3D5
            left_color: Color::rgb(254.0 / 255.0, 197.0 / 255.0, 0.0),
            right_color: Color::rgb(66.0 / 255.0, 179.0 / 255.0, 213.0 / 255.0),
        }
    }
}

impl BarStyle {
    /// Resolves the style from a host option map.
    ///
    /// Absent or unparseable entries fall back to the defaults; a bad value
    /// is logged rather than failing the whole update.
    #[must_use]
    pub fn from_options(options: &IndexMap<String, Value>) -> Self {
        let defaults = Self::default();
        Self {
            left_color: resolve_color(options, "leftColor", defaults.left_color),
            right_color: resolve_color(options, "rightColor", defaults.right_color),
        }
    }
}

fn resolve_color(options: &IndexMap<String, Value>, name: &str, fallback: Color) -> Color {
    match options.get(name) {
        None => fallback,
        Some(Value::String(hex)) => Color::from_hex(hex).unwrap_or_else(|err| {
            warn!(option = name, error = %err, "ignoring invalid color option");
            fallback
        }),
        Some(other) => {
            warn!(option = name, value = %other, "ignoring non-string color option");
            fallback
        }
    }
}
