//! linechart-rs: single-series line chart layout and interaction engine.
//!
//! The crate turns category/value pairs into a rounded "nice" value axis,
//! maps data points to retained drawing-surface geometry, and resolves
//! pointer position to the nearest category tick for tooltip and crosshair
//! updates. Drawing backends implement the [`render::Surface`] contract.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
