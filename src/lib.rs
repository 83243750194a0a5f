//! duobar-rs: layout and render engine for double-bar comparison charts.
//!
//! Given a tabular result with one category dimension and two numeric
//! measures, the engine derives shared pixel scales and a consistent geometry
//! bundle, then materializes a deterministic scene of horizontally opposed
//! bar pairs with value labels, a category legend, and truncated titles.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DoubleBarConfig, DoubleBarEngine};
pub use error::{ChartError, ChartResult};
