use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RectPrimitive, TextPrimitive};

/// Every visual element representing one data row.
///
/// Bars are pinned at the shared origin: the left bar's right edge and the
/// right bar's left edge both sit on `bar_origin_x`.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGroup {
    pub highlight: RectPrimitive,
    pub legend_label: TextPrimitive,
    pub left_label: TextPrimitive,
    pub right_label: TextPrimitive,
    pub left_bar: RectPrimitive,
    pub right_bar: RectPrimitive,
}

impl RowGroup {
    pub fn validate(&self) -> ChartResult<()> {
        self.highlight.validate()?;
        self.legend_label.validate()?;
        self.left_label.validate()?;
        self.right_label.validate()?;
        self.left_bar.validate()?;
        self.right_bar.validate()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Row groups are rebuilt from scratch every cycle; a frame never carries
/// nodes from a previous data set.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rows: Vec<RowGroup>,
    pub left_title: TextPrimitive,
    pub right_title: TextPrimitive,
}

impl RenderFrame {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        rows: Vec<RowGroup>,
        left_title: TextPrimitive,
        right_title: TextPrimitive,
    ) -> Self {
        Self {
            viewport,
            rows,
            left_title,
            right_title,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for row in &self.rows {
            row.validate()?;
        }
        self.left_title.validate()?;
        self.right_title.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
