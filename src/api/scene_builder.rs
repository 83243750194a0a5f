use crate::core::text::VALUE_LABEL_FONT_SIZE_PX;
use crate::core::{
    ChartData, ChartGeometry, RowGeometry, ScaleSet, TextMeasurer, Viewport, fit_text,
    format_measure_value,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, RowGroup, TextHAlign, TextPrimitive};

use super::host_contract::BarStyle;

/// Gap between the bar origin and each value label, and between the origin
/// and each title.
const VALUE_LABEL_OFFSET_PX: f64 = 5.0;

/// Title baseline sits inside the 15 px band the row scale reserves on top.
const TITLE_BASELINE_Y_PX: f64 = 10.0;

const LABEL_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
const HIGHLIGHT_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.03);

/// Everything one scene pass needs, assembled per cycle.
///
/// Scale ranges must already be configured when this is constructed; the
/// builder only reads.
pub(super) struct SceneContext<'a> {
    pub viewport: Viewport,
    pub data: &'a ChartData,
    pub geometry: ChartGeometry,
    pub scales: &'a ScaleSet,
    pub style: BarStyle,
    pub measurer: &'a dyn TextMeasurer,
}

/// Materializes the full frame for one cycle: exactly one row group per data
/// row plus the two measure titles.
///
/// Prior row groups are never diffed against; the caller replaces its
/// retained frame wholesale with the result.
pub(super) fn build_scene(ctx: &SceneContext<'_>) -> ChartResult<RenderFrame> {
    let geometry = ctx.geometry;
    let row_geometry = RowGeometry::from_scale(ctx.scales.row_position);

    let mut rows = Vec::with_capacity(ctx.data.rows.len());
    for (index, row) in ctx.data.rows.iter().enumerate() {
        row.validate()?;
        let band_top = ctx.scales.row_position.position(index).ok_or_else(|| {
            ChartError::InvalidData(format!("row {index} is outside the row-position domain"))
        })?;

        // Clamp so negative inputs or over-constrained viewports cannot
        // produce a rect with negative extent.
        let left_length = ctx.scales.left.scale(row.left)?.max(0.0);
        let right_length = ctx.scales.right.scale(row.right)?.max(0.0);
        let label_baseline = band_top + row_geometry.bar_height;

        rows.push(RowGroup {
            highlight: RectPrimitive::new(
                0.0,
                band_top - row_geometry.bar_margin,
                geometry.width,
                row_geometry.highlight_thickness,
                HIGHLIGHT_COLOR,
            ),
            legend_label: TextPrimitive::new(
                fit_text(
                    ctx.measurer,
                    &row.name,
                    geometry.legend_text_width,
                    VALUE_LABEL_FONT_SIZE_PX,
                ),
                0.0,
                label_baseline,
                VALUE_LABEL_FONT_SIZE_PX,
                LABEL_COLOR,
                TextHAlign::Left,
            ),
            left_label: TextPrimitive::new(
                format_measure_value(row.left),
                geometry.bar_origin_x - VALUE_LABEL_OFFSET_PX,
                label_baseline,
                VALUE_LABEL_FONT_SIZE_PX,
                LABEL_COLOR,
                TextHAlign::Right,
            ),
            right_label: TextPrimitive::new(
                format_measure_value(row.right),
                geometry.bar_origin_x + VALUE_LABEL_OFFSET_PX,
                label_baseline,
                VALUE_LABEL_FONT_SIZE_PX,
                LABEL_COLOR,
                TextHAlign::Left,
            ),
            left_bar: RectPrimitive::new(
                geometry.bar_origin_x - left_length,
                band_top,
                left_length,
                row_geometry.bar_height,
                ctx.style.left_color,
            ),
            right_bar: RectPrimitive::new(
                geometry.bar_origin_x,
                band_top,
                right_length,
                row_geometry.bar_height,
                ctx.style.right_color,
            ),
        });
    }

    let left_title = TextPrimitive::new(
        fit_text(
            ctx.measurer,
            &ctx.data.left_title,
            geometry.title_text_width,
            VALUE_LABEL_FONT_SIZE_PX,
        ),
        geometry.bar_origin_x - VALUE_LABEL_OFFSET_PX,
        TITLE_BASELINE_Y_PX,
        VALUE_LABEL_FONT_SIZE_PX,
        LABEL_COLOR,
        TextHAlign::Right,
    );
    let right_title = TextPrimitive::new(
        fit_text(
            ctx.measurer,
            &ctx.data.right_title,
            geometry.title_text_width,
            VALUE_LABEL_FONT_SIZE_PX,
        ),
        geometry.bar_origin_x + VALUE_LABEL_OFFSET_PX,
        TITLE_BASELINE_Y_PX,
        VALUE_LABEL_FONT_SIZE_PX,
        LABEL_COLOR,
        TextHAlign::Left,
    );

    Ok(RenderFrame::new(ctx.viewport, rows, left_title, right_title))
}
