//! Domain models for the launch dashboard.
//!
//! # Core Concepts
//!
//! ## Loaded Once
//!
//! - [`LaunchRecord`]: One observed launch attempt. Immutable after the dataset loads.
//! - [`DatasetSummary`]: Payload bounds and distinct sites derived at load time.
//!
//! ## Transient
//!
//! These are recomputed on every selector change and never persisted:
//!
//! - [`SelectorState`]: The user's current site choice and payload range.
//! - [`AggregationResult`]: Counts per category label, feeding the proportion chart.
//! - [`ChartView`]: Title, chart kind, and data handed to a chart renderer.

mod launch;
mod selector;
mod view;

pub use launch::*;
pub use selector::*;
pub use view::*;
