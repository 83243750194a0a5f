use tracing::warn;

use super::host_contract::QueryMetadata;

/// Checks whether the host query shape matches what the double-bar chart can
/// render: exactly one dimension, exactly two measures, no pivots.
///
/// Pure check; the caller treats `false` as "do not render, return early"
/// and leaves any previously rendered scene untouched. Surfacing the
/// host-visible configuration error is the host's responsibility.
#[must_use]
pub fn supports_query_shape(metadata: &QueryMetadata) -> bool {
    let supported = metadata.dimensions.len() == 1
        && metadata.measures.len() == 2
        && metadata.pivot_count == 0;

    if !supported {
        warn!(
            dimensions = metadata.dimensions.len(),
            measures = metadata.measures.len(),
            pivots = metadata.pivot_count,
            "query shape not renderable; expected 1 dimension, 2 measures, 0 pivots"
        );
    }

    supported
}
