use crate::core::scale::BandScale;
use crate::core::types::Viewport;

/// Fraction of the viewport width reserved for the mirrored bar graph; the
/// remainder holds the category legend.
pub const GRAPH_WIDTH_RATIO: f64 = 0.65;

/// Gap kept between a bar's far end and its value label, and between titles
/// and the half-graph edge.
pub const LABEL_GAP_PX: f64 = 10.0;

/// Derived geometry for one render cycle.
///
/// Every field is a pure function of the viewport and the probed maximum
/// value-label width; deriving twice from identical inputs yields
/// bit-identical bundles. The derivation order matters downstream:
/// `half_graph_bar_max_width` must exist before the value-scale ranges are
/// configured, and those before any bar rectangle is sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub graph_width: f64,
    pub legend_width: f64,
    pub legend_text_width: f64,
    pub half_graph_width: f64,
    pub max_bar_label_width: f64,
    pub half_graph_bar_max_width: f64,
    pub title_text_width: f64,
    pub bar_origin_x: f64,
}

impl ChartGeometry {
    #[must_use]
    pub fn derive(viewport: Viewport, max_bar_label_width: f64) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let graph_width = width * GRAPH_WIDTH_RATIO;
        let legend_width = width - graph_width;
        let half_graph_width = graph_width / 2.0;

        Self {
            width,
            height,
            graph_width,
            legend_width,
            legend_text_width: legend_width - LABEL_GAP_PX,
            half_graph_width,
            max_bar_label_width,
            half_graph_bar_max_width: half_graph_width - (max_bar_label_width + LABEL_GAP_PX),
            title_text_width: half_graph_width - LABEL_GAP_PX,
            bar_origin_x: width - half_graph_width,
        }
    }
}

/// Vertical slot geometry shared by every row, derived from the row-position
/// scale rather than stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    pub row_height: f64,
    pub bar_height: f64,
    pub bar_margin: f64,
    pub highlight_thickness: f64,
}

impl RowGeometry {
    #[must_use]
    pub fn from_scale(row_position: BandScale) -> Self {
        let row_height = row_position.step();
        let bar_height = row_position.bandwidth();
        Self {
            row_height,
            bar_height,
            bar_margin: (row_height - bar_height) / 2.0,
            highlight_thickness: row_height,
        }
    }
}
