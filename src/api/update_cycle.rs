use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    ChartData, ChartGeometry, ScaleSet, TextMeasurer, Viewport, probe_max_label_width,
};
use crate::error::ChartResult;
use crate::render::RenderFrame;

use super::data_adapter::adapt_chart_data;
use super::host_contract::{BarStyle, QueryMetadata, QueryResult};
use super::scene_builder::{SceneContext, build_scene};
use super::validation::supports_query_shape;

/// Phase reached by an update cycle.
///
/// Every host-delivered event (data, config, resize) restarts one synchronous
/// cycle from `Validating`; `Invalid` and `Rendered` are the two terminal
/// phases. A failed shape check aborts before any scene state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CyclePhase {
    Created,
    Validating,
    Invalid,
    Adapting,
    ScalingDomains,
    Probing,
    ComputingGeometry,
    ScalingRanges,
    Building,
    Rendered,
}

/// Inputs of one cycle, assembled fresh per host update.
pub(super) struct CycleInputs<'a> {
    pub result: &'a QueryResult,
    pub metadata: &'a QueryMetadata,
    pub viewport: Viewport,
    pub style: BarStyle,
    pub measurer: &'a dyn TextMeasurer,
}

/// Per-cycle derived state committed by the engine on success.
///
/// Nothing here survives into the next cycle implicitly; the engine decides
/// what to retain.
pub(super) struct CycleOutput {
    pub frame: RenderFrame,
    pub data: ChartData,
    pub scales: ScaleSet,
    pub geometry: ChartGeometry,
}

/// Runs one update cycle's steps in strict dependency order: adapt, domain
/// pass, label probe, geometry, range pass, scene build.
///
/// `phase` tracks the step currently executing, so a failed cycle reports
/// where it stopped. A query shape that is not renderable parks the phase at
/// `Invalid` and returns `None`; the caller keeps its previous frame.
pub(super) fn run_cycle(
    inputs: &CycleInputs<'_>,
    phase: &mut CyclePhase,
) -> ChartResult<Option<CycleOutput>> {
    trace!(
        records = inputs.result.records.len(),
        width = inputs.viewport.width,
        height = inputs.viewport.height,
        "update cycle started"
    );

    *phase = CyclePhase::Validating;
    if !supports_query_shape(inputs.metadata) {
        *phase = CyclePhase::Invalid;
        return Ok(None);
    }
    inputs.viewport.validate()?;

    *phase = CyclePhase::Adapting;
    let data = adapt_chart_data(inputs.result, inputs.metadata)?;

    *phase = CyclePhase::ScalingDomains;
    let mut scales = ScaleSet::configure_domains(&data)?;

    *phase = CyclePhase::Probing;
    let max_bar_label_width = probe_max_label_width(inputs.measurer, &data.rows);

    *phase = CyclePhase::ComputingGeometry;
    let geometry = ChartGeometry::derive(inputs.viewport, max_bar_label_width);

    *phase = CyclePhase::ScalingRanges;
    scales.configure_ranges(geometry.height, geometry.half_graph_bar_max_width)?;

    *phase = CyclePhase::Building;
    let frame = build_scene(&SceneContext {
        viewport: inputs.viewport,
        data: &data,
        geometry,
        scales: &scales,
        style: inputs.style,
        measurer: inputs.measurer,
    })?;

    debug!(
        rows = frame.rows.len(),
        max_bar_label_width,
        bar_origin_x = geometry.bar_origin_x,
        "update cycle built scene"
    );

    Ok(Some(CycleOutput {
        frame,
        data,
        scales,
        geometry,
    }))
}
