pub mod geometry;
pub mod scale;
pub mod text;
pub mod types;

pub use geometry::{ChartGeometry, RowGeometry};
pub use scale::{BandScale, ScaleSet, ValueScale};
pub use text::{CharWidthMeasurer, TextMeasurer, fit_text, format_measure_value, probe_max_label_width};
pub use types::{BarRow, ChartData, Viewport};
