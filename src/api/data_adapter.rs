use serde_json::Value;
use tracing::debug;

use crate::core::{BarRow, ChartData};
use crate::error::{ChartError, ChartResult};

use super::host_contract::{QueryMetadata, QueryRecord, QueryResult};

/// Maps the host's raw tabular result into the row-oriented chart shape.
///
/// Record order is preserved. Shape validation has already run by the time
/// this is called, so the metadata is known to carry one dimension and two
/// measures; what can still fail here is a record missing a configured field
/// or a measure cell that does not coerce to a number.
pub fn adapt_chart_data(
    result: &QueryResult,
    metadata: &QueryMetadata,
) -> ChartResult<ChartData> {
    let dimension = &metadata.dimensions[0];
    let left_measure = &metadata.measures[0];
    let right_measure = &metadata.measures[1];

    let mut rows = Vec::with_capacity(result.records.len());
    for (index, record) in result.records.iter().enumerate() {
        let name = text_cell(record, index, &dimension.name)?;
        let left = numeric_cell(record, index, &left_measure.name)?;
        let right = numeric_cell(record, index, &right_measure.name)?;
        rows.push(BarRow::new(name, left, right));
    }

    debug!(
        rows = rows.len(),
        left = %left_measure.label,
        right = %right_measure.label,
        "adapted query result"
    );

    Ok(ChartData::new(
        rows,
        left_measure.label.clone(),
        right_measure.label.clone(),
    ))
}

fn cell<'a>(record: &'a QueryRecord, index: usize, field: &str) -> ChartResult<&'a Value> {
    match record.get(field) {
        Some(Value::Null) | None => Err(ChartError::MissingField {
            record: index,
            field: field.to_owned(),
        }),
        Some(value) => Ok(value),
    }
}

fn text_cell(record: &QueryRecord, index: usize, field: &str) -> ChartResult<String> {
    Ok(match cell(record, index, field)? {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

fn numeric_cell(record: &QueryRecord, index: usize, field: &str) -> ChartResult<f64> {
    let value = cell(record, index, field)?;
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(number) if number.is_finite() => Ok(number),
        _ => Err(ChartError::InvalidData(format!(
            "record {index} field `{field}` is not a finite number: {value}"
        ))),
    }
}
