//! Core domain types.
//!
//! These types describe the data exchanged with the Onboard API,
//! independent of the HTTP transport.
//!
//! # Structure
//!
//! - `selector` - Point selection filters (`PointSelector`, `PointSelection`)
//! - `records` - Records returned by listing endpoints (`Building`, `Point`, ...)
//! - `update` - Point data writes (`PointDataUpdate`)
//! - `ingest` - Ingest run diagnostics (`IngestStats`)
//! - `time` - Timestamp wire format

mod ingest;
mod records;
mod selector;
pub mod time;
mod update;

pub use ingest::{IngestError, IngestStats, TimingCheckpoint};
pub use records::{Building, Equipment, Point, PointIdMap, Record, TimeseriesResult};
pub use selector::{PointSelection, PointSelector};
pub use update::PointDataUpdate;
