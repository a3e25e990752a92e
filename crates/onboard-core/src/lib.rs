//! Core domain types and the port trait for the Onboard Data API.
//!
//! This crate has no HTTP dependencies. The reqwest implementation of
//! [`OnboardApi`] lives in `onboard-client`; consumers such as the CLI
//! depend on the trait and the types defined here.

#![deny(unused_crate_dependencies)]

pub mod chunk;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use chunk::{DATASOURCE_CHUNK_SIZE, POINT_ID_CHUNK_SIZE, UPDATE_BATCH_SIZE, divide_chunks};
pub use domain::{
    Building, Equipment, IngestError, IngestStats, Point, PointDataUpdate, PointIdMap,
    PointSelection, PointSelector, Record, TimeseriesResult, TimingCheckpoint,
};
pub use ports::{OnboardApi, OnboardError, OnboardResult};

#[cfg(test)]
use tokio as _;
