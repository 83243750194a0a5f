use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{ChartData, ChartGeometry, CharWidthMeasurer, ScaleSet, TextMeasurer, Viewport};
use crate::error::ChartResult;
use crate::interaction::{HoverState, tooltip_text};
use crate::render::{RenderFrame, Renderer};

use super::host_contract::{BarStyle, QueryMetadata, QueryResult};
use super::update_cycle::{CycleInputs, CyclePhase, run_cycle};

/// Initial configuration for one chart instance, mirroring the host's
/// `create(container, initialConfig)` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleBarConfig {
    pub viewport: Viewport,
    pub style: BarStyle,
}

impl DoubleBarConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: BarStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    /// Resolves the style portion from a raw host option map.
    #[must_use]
    pub fn with_options(mut self, options: &IndexMap<String, Value>) -> Self {
        self.style = BarStyle::from_options(options);
        self
    }
}

/// Orchestration facade consumed by host applications.
///
/// The only state retained across cycles is the renderer, the style, and the
/// last committed frame with the data/scales that produced it (needed for
/// hover hit-testing). All other geometry is derived per cycle and discarded.
pub struct DoubleBarEngine<R: Renderer> {
    renderer: R,
    style: BarStyle,
    viewport: Viewport,
    measurer: Box<dyn TextMeasurer>,
    hover: HoverState,
    phase: CyclePhase,
    committed: Option<CommittedCycle>,
}

/// Snapshot of the last successful cycle.
struct CommittedCycle {
    frame: RenderFrame,
    data: ChartData,
    scales: ScaleSet,
    geometry: ChartGeometry,
}

impl<R: Renderer> DoubleBarEngine<R> {
    pub fn new(renderer: R, config: DoubleBarConfig) -> ChartResult<Self> {
        config.viewport.validate()?;

        Ok(Self {
            renderer,
            style: config.style,
            viewport: config.viewport,
            measurer: Box::new(CharWidthMeasurer),
            hover: HoverState::default(),
            phase: CyclePhase::Created,
            committed: None,
        })
    }

    /// Replaces the text measurer, e.g. with one backed by real font metrics.
    pub fn set_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
    }

    pub fn set_style(&mut self, style: BarStyle) {
        self.style = style;
    }

    #[must_use]
    pub fn style(&self) -> BarStyle {
        self.style
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Last committed frame, if any cycle has rendered.
    #[must_use]
    pub fn frame(&self) -> Option<&RenderFrame> {
        self.committed.as_ref().map(|cycle| &cycle.frame)
    }

    /// Derived geometry of the last committed cycle.
    #[must_use]
    pub fn geometry(&self) -> Option<ChartGeometry> {
        self.committed.as_ref().map(|cycle| cycle.geometry)
    }

    /// Runs one full synchronous update cycle for a host-delivered event.
    ///
    /// `on_complete` is invoked exactly once per call: after rendering
    /// finishes, immediately when validation aborts, and also when the cycle
    /// fails with an error.
    pub fn update(
        &mut self,
        result: &QueryResult,
        metadata: &QueryMetadata,
        viewport: Viewport,
        on_complete: impl FnOnce(),
    ) -> ChartResult<CyclePhase> {
        let outcome = self.run_update(result, metadata, viewport);
        on_complete();
        outcome
    }

    fn run_update(
        &mut self,
        result: &QueryResult,
        metadata: &QueryMetadata,
        viewport: Viewport,
    ) -> ChartResult<CyclePhase> {
        let mut phase = CyclePhase::Validating;
        let outcome = run_cycle(
            &CycleInputs {
                result,
                metadata,
                viewport,
                style: self.style,
                measurer: self.measurer.as_ref(),
            },
            &mut phase,
        );
        self.phase = phase;

        let output = outcome.inspect_err(|err| {
            warn!(error = %err, phase = ?self.phase, "update cycle failed; previous frame kept");
        })?;

        let Some(output) = output else {
            return Ok(self.phase);
        };

        if let Err(err) = self.renderer.render(&output.frame) {
            warn!(error = %err, "renderer rejected frame; previous frame kept");
            return Err(err);
        }
        self.viewport = viewport;
        self.committed = Some(CommittedCycle {
            frame: output.frame,
            data: output.data,
            scales: output.scales,
            geometry: output.geometry,
        });
        self.refresh_hover_tooltip();

        self.phase = CyclePhase::Rendered;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "update cycle rendered"
        );
        Ok(self.phase)
    }

    /// Hover-enter/leave behavior: hit-tests the pointer against the row
    /// slots of the last committed cycle.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let Some(cycle) = &self.committed else {
            return;
        };

        let inside_x = x.is_finite() && x >= 0.0 && x <= cycle.geometry.width;
        let row = if inside_x {
            cycle.scales.row_position.row_at(y)
        } else {
            None
        };

        match row {
            Some(index) => {
                let row = &cycle.data.rows[index];
                self.hover.row = Some(index);
                self.hover.tooltip = Some(tooltip_text(row.left, row.right));
            }
            None => self.hover.clear(),
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hover.clear();
    }

    /// Re-resolves the tooltip after a data change so a stale row index never
    /// outlives the rows that produced it.
    fn refresh_hover_tooltip(&mut self) {
        let Some(cycle) = &self.committed else {
            self.hover.clear();
            return;
        };
        match self.hover.row {
            Some(index) if index < cycle.data.rows.len() => {
                let row = &cycle.data.rows[index];
                self.hover.tooltip = Some(tooltip_text(row.left, row.right));
            }
            _ => self.hover.clear(),
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
