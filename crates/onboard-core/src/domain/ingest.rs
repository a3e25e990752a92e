//! Ingest run diagnostics.
//!
//! An ingest process reads point values from a building system and pushes
//! them with `update_point_data`. `IngestStats` collects how long each phase
//! took and what went wrong, and is reported with `send_ingest_stats`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

/// Elapsed time at a named phase boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingCheckpoint {
    pub name: String,
    /// Milliseconds since the run started.
    pub elapsed_ms: u64,
}

/// A failure observed during ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestError {
    pub message: String,
    /// The point that failed, if the failure was point-specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_id: Option<i64>,
}

/// Timing and diagnostic record for one ingest run of one building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestStats {
    pub building_id: i64,
    #[serde(serialize_with = "super::time::serialize")]
    pub started: DateTime<Utc>,
    #[serde(default)]
    pub checkpoints: Vec<TimingCheckpoint>,
    #[serde(default)]
    pub errors: Vec<IngestError>,
    #[serde(default)]
    pub counters: BTreeMap<String, u64>,
    #[serde(skip)]
    clock: Option<Instant>,
}

impl IngestStats {
    /// Start recording a run for `building_id`.
    pub fn new(building_id: i64) -> Self {
        Self {
            building_id,
            started: Utc::now(),
            checkpoints: Vec::new(),
            errors: Vec::new(),
            counters: BTreeMap::new(),
            clock: Some(Instant::now()),
        }
    }

    /// Record that phase `name` finished now.
    ///
    /// Stats deserialized from JSON have no running clock; checkpoints taken on
    /// them start counting from the first call.
    pub fn checkpoint(&mut self, name: impl Into<String>) {
        let clock = *self.clock.get_or_insert_with(Instant::now);
        let elapsed_ms = u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.checkpoints.push(TimingCheckpoint {
            name: name.into(),
            elapsed_ms,
        });
    }

    /// Record a failure.
    pub fn error(&mut self, message: impl Into<String>, point_id: Option<i64>) {
        self.errors.push(IngestError {
            message: message.into(),
            point_id,
        });
    }

    /// Add `by` to a named counter, creating it at zero.
    pub fn increment(&mut self, counter: impl Into<String>, by: u64) {
        let entry = self.counters.entry(counter.into()).or_insert(0);
        *entry = entry.saturating_add(by);
    }

    /// Elapsed milliseconds at a recorded checkpoint.
    pub fn elapsed_at(&self, name: &str) -> Option<u64> {
        self.checkpoints
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.elapsed_ms)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
