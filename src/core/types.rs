use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// One category row with its two opposed measure values.
///
/// Rows carry no key; identity is the position in the sequence supplied per
/// update cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub name: String,
    pub left: f64,
    pub right: f64,
}

impl BarRow {
    #[must_use]
    pub fn new(name: impl Into<String>, left: f64, right: f64) -> Self {
        Self {
            name: name.into(),
            left,
            right,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.left.is_finite() || !self.right.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "row `{}` has non-finite measure values",
                self.name
            )));
        }
        Ok(())
    }
}

/// Adapted row-oriented data for one update cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub rows: Vec<BarRow>,
    pub left_title: String,
    pub right_title: String,
}

impl ChartData {
    #[must_use]
    pub fn new(
        rows: Vec<BarRow>,
        left_title: impl Into<String>,
        right_title: impl Into<String>,
    ) -> Self {
        Self {
            rows,
            left_title: left_title.into(),
            right_title: right_title.into(),
        }
    }

    /// Largest value across both measures, pooled. `0.0` for an empty row set.
    #[must_use]
    pub fn max_of_both(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| [row.left, row.right])
            .fold(0.0_f64, f64::max)
    }
}
