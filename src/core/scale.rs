use crate::core::types::ChartData;
use crate::error::{ChartError, ChartResult};

/// Inner padding of the row-position scale; the outer padding is derived.
pub const ROW_PADDING_INNER: f64 = 0.7;

/// Vertical range start of the row-position scale, reserving room for titles.
pub const ROW_RANGE_TOP_PX: f64 = 15.0;

/// Minimum bar length so zero values still render a visible hairline.
pub const BAR_MIN_LENGTH_PX: f64 = 1.0;

/// Linear scale mapping a measure value to a bar length in pixels.
///
/// The domain always starts at zero; both chart sides share one domain
/// maximum so equal values render equal pixel length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl ValueScale {
    pub fn new(domain_max: f64) -> ChartResult<Self> {
        if !domain_max.is_finite() || domain_max < 0.0 {
            return Err(ChartError::InvalidData(
                "value scale domain max must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_max,
            range_min: 0.0,
            range_max: 1.0,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    pub fn set_range(&mut self, range_min: f64, range_max: f64) -> ChartResult<()> {
        if !range_min.is_finite() || !range_max.is_finite() {
            return Err(ChartError::InvalidData(
                "value scale range must be finite".to_owned(),
            ));
        }
        self.range_min = range_min;
        self.range_max = range_max;
        Ok(())
    }

    /// Maps a value in `[0, domain_max]` to a pixel length.
    ///
    /// A degenerate zero domain collapses every value to the range minimum,
    /// which renders all-zero data as hairline bars rather than erroring.
    pub fn scale(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        if self.domain_max == 0.0 {
            return Ok(self.range_min);
        }

        let normalized = value / self.domain_max;
        Ok(self.range_min + normalized * (self.range_max - self.range_min))
    }
}

/// Ordinal scale mapping a row index to a vertical band.
///
/// Step/bandwidth math follows the usual band-scale layout: the range is
/// divided into `count` steps with `padding_inner` gaps between bands and a
/// half-sized gap on each end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
    range_start: f64,
    range_end: f64,
}

impl BandScale {
    pub fn new(count: usize, padding_inner: f64) -> ChartResult<Self> {
        if !padding_inner.is_finite() || !(0.0..1.0).contains(&padding_inner) {
            return Err(ChartError::InvalidData(
                "band scale inner padding must be finite and in [0, 1)".to_owned(),
            ));
        }

        Ok(Self {
            count,
            padding_inner,
            padding_outer: padding_inner / 2.0,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    pub fn set_range(&mut self, range_start: f64, range_end: f64) -> ChartResult<()> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(())
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    /// Distance between the starts of two adjacent bands.
    #[must_use]
    pub fn step(self) -> f64 {
        let slots =
            (self.count as f64 - self.padding_inner + 2.0 * self.padding_outer).max(1.0);
        (self.range_end - self.range_start) / slots
    }

    /// Content height of one band, excluding padding.
    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Top offset of the band at `index`, or `None` past the domain.
    #[must_use]
    pub fn position(self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        let step = self.step();
        Some(self.range_start + step * (self.padding_outer + index as f64))
    }

    /// Inverse lookup for hover hit-testing: the row whose full step slot
    /// (band plus its surrounding margin) contains `y`.
    #[must_use]
    pub fn row_at(self, y: f64) -> Option<usize> {
        if !y.is_finite() {
            return None;
        }
        let step = self.step();
        let margin = (step - self.bandwidth()) / 2.0;
        (0..self.count).find(|&index| {
            let top = self.range_start + step * (self.padding_outer + index as f64) - margin;
            y >= top && y < top + step
        })
    }
}

/// The three scales one render cycle agrees on.
///
/// Domains are configured from the adapted data before label probing; ranges
/// are configured only once the geometry pass has produced
/// `half_graph_bar_max_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSet {
    pub left: ValueScale,
    pub right: ValueScale,
    pub row_position: BandScale,
}

impl ScaleSet {
    /// Domain pass: pools both measures into one shared domain maximum and
    /// sizes the row-position domain to the row count.
    pub fn configure_domains(data: &ChartData) -> ChartResult<Self> {
        let max_of_both = data.max_of_both();
        Ok(Self {
            left: ValueScale::new(max_of_both)?,
            right: ValueScale::new(max_of_both)?,
            row_position: BandScale::new(data.rows.len(), ROW_PADDING_INNER)?,
        })
    }

    /// Range pass: requires the derived `half_graph_bar_max_width`, so it runs
    /// strictly after label probing and geometry derivation.
    pub fn configure_ranges(
        &mut self,
        height: f64,
        half_graph_bar_max_width: f64,
    ) -> ChartResult<()> {
        self.row_position.set_range(ROW_RANGE_TOP_PX, height)?;
        self.left.set_range(BAR_MIN_LENGTH_PX, half_graph_bar_max_width)?;
        self.right
            .set_range(BAR_MIN_LENGTH_PX, half_graph_bar_max_width)?;
        Ok(())
    }
}
