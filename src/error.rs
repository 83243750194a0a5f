use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("record {record} is missing field `{field}`")]
    MissingField { record: usize, field: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
