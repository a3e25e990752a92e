//! Main commands enum and argument parsing helpers.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Subcommand};
use onboard_core::PointSelector;
use onboard_core::domain::time::parse_api_timestamp;

/// Available commands for the Onboard CLI.
///
/// Each command maps to one API operation.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the account the credentials belong to
    Whoami,

    /// List actions recorded against the account
    AccountActions,

    /// List users (all organization users for admins, yourself otherwise)
    Users,

    /// List organizations
    Orgs,

    /// List buildings
    Buildings,

    /// List tags
    Tags,

    /// List equipment types
    EquipmentTypes,

    /// List a building's equipment and attached point ids
    Equipment {
        /// Building id
        building_id: i64,
    },

    /// Select points matching a set of filters
    Select(SelectArgs),

    /// List every point id visible to the account
    AllPoints,

    /// Fetch point records by id or datasource hash
    Points {
        /// Point ids (repeat or comma-separate)
        #[arg(
            long = "id",
            value_delimiter = ',',
            conflicts_with = "datasource",
            required_unless_present = "datasource"
        )]
        ids: Vec<i64>,
        /// Datasource hashes (repeat or comma-separate)
        #[arg(long = "datasource", value_delimiter = ',')]
        datasource: Vec<String>,
    },

    /// List point types
    PointTypes,

    /// List measurements
    Measurements,

    /// List units
    Units,

    /// Query point timeseries over a time window
    Query {
        /// Point ids (repeat or comma-separate)
        #[arg(long = "point", value_delimiter = ',', required = true)]
        points: Vec<i64>,
        #[command(flatten)]
        window: TimeWindow,
    },

    /// Push latest point values from a JSON file
    PushUpdates {
        /// JSON array of `{point_id, value, last_updated}` objects
        file: PathBuf,
    },

    /// Report an ingest run from a JSON file
    SendIngestStats {
        /// JSON ingest stats object
        file: PathBuf,
    },

    /// List reported ingest stats
    IngestStats,

    /// List active alerts
    Alerts,

    /// Copy data between points over a time window
    CopyData {
        /// Source and destination point id as `src:dst` (repeatable)
        #[arg(long = "map", value_parser = parse_point_mapping, required = true)]
        map: Vec<(i64, i64)>,
        #[command(flatten)]
        window: TimeWindow,
    },
}

/// Start and end of a time window, in UTC.
#[derive(Args, Debug, Clone, Copy)]
pub struct TimeWindow {
    /// Window start (RFC 3339 timestamp or YYYY-MM-DD)
    #[arg(long, value_parser = parse_timestamp)]
    pub start: DateTime<Utc>,
    /// Window end (RFC 3339 timestamp or YYYY-MM-DD)
    #[arg(long, value_parser = parse_timestamp)]
    pub end: DateTime<Utc>,
}

/// Filters for the `select` command. Lists accept repeats or commas.
#[derive(Args, Debug, Default)]
pub struct SelectArgs {
    #[arg(long = "org", value_delimiter = ',')]
    pub orgs: Vec<i64>,
    #[arg(long = "building", value_delimiter = ',')]
    pub buildings: Vec<i64>,
    #[arg(long = "point-id", value_delimiter = ',')]
    pub point_ids: Vec<i64>,
    #[arg(long = "point-name", value_delimiter = ',')]
    pub point_names: Vec<String>,
    #[arg(long = "point-hash", value_delimiter = ',')]
    pub point_hashes: Vec<String>,
    #[arg(long = "point-topic", value_delimiter = ',')]
    pub point_topics: Vec<String>,
    #[arg(long = "equipment", value_delimiter = ',')]
    pub equipment: Vec<i64>,
    #[arg(long = "equipment-type", value_delimiter = ',')]
    pub equipment_types: Vec<String>,
    #[arg(long = "point-type", value_delimiter = ',')]
    pub point_types: Vec<String>,
    /// Only points updated after this instant
    #[arg(long = "updated-since", value_parser = parse_timestamp)]
    pub updated_since: Option<DateTime<Utc>>,
}

impl SelectArgs {
    /// Build the selector these filters describe.
    pub fn to_selector(&self) -> PointSelector {
        let selector = PointSelector::new()
            .with_orgs(self.orgs.iter().copied())
            .with_buildings(self.buildings.iter().copied())
            .with_point_ids(self.point_ids.iter().copied())
            .with_point_names(self.point_names.iter().cloned())
            .with_point_hashes(self.point_hashes.iter().cloned())
            .with_point_topics(self.point_topics.iter().cloned())
            .with_equipment(self.equipment.iter().copied())
            .with_equipment_types(self.equipment_types.iter().cloned())
            .with_point_types(self.point_types.iter().cloned());

        match self.updated_since {
            Some(since) => selector.with_updated_since(since),
            None => selector,
        }
    }
}

/// Parse an RFC 3339 timestamp, or a bare date taken as midnight UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = parse_api_timestamp(s) {
        return Ok(ts);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("'{s}' is not an RFC 3339 timestamp or YYYY-MM-DD date"))
}

/// Parse a `src:dst` point id pair.
pub fn parse_point_mapping(s: &str) -> Result<(i64, i64), String> {
    let (src, dst) = s
        .split_once(':')
        .ok_or_else(|| format!("'{s}' is not a src:dst pair"))?;
    let parse = |id: &str| {
        id.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid point id '{id}': {e}"))
    };
    Ok((parse(src)?, parse(dst)?))
}
