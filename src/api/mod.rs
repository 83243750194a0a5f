mod data_adapter;
mod engine;
mod host_contract;
mod scene_builder;
mod update_cycle;
mod validation;

pub use data_adapter::adapt_chart_data;
pub use engine::{DoubleBarConfig, DoubleBarEngine};
pub use host_contract::{
    BarStyle, DEFAULT_LEFT_COLOR_HEX, DEFAULT_RIGHT_COLOR_HEX, FieldMeta, OptionDescriptor,
    OptionKind, QueryMetadata, QueryRecord, QueryResult, VisualizationDescriptor, descriptor,
};
pub use update_cycle::CyclePhase;
pub use validation::supports_query_shape;
