//! Integration module for connecting tracker backends with the stall qualifier.
//!
//! This module provides traits and utilities for feeding per-frame tracker
//! output (live or recorded) into a [`StateQualifier`](crate::StateQualifier).

mod builder;
mod json_lines;
mod monitor;
mod pipeline;
mod source;

pub use builder::ObservationBuilder;
pub use json_lines::{JsonLinesError, JsonLinesSource};
pub use monitor::StallMonitor;
pub use pipeline::StallPipeline;
pub use source::{IntoObservation, TrackSource};
