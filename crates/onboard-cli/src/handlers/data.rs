//! Timeseries, write and ingest diagnostic commands.

use std::path::Path;

use anyhow::Result;
use onboard_core::{IngestStats, OnboardApi, PointDataUpdate, PointIdMap, TimeseriesResult};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::commands::TimeWindow;
use crate::error::CliError;
use crate::presentation::output::cell_text;
use crate::presentation::{OutputFormat, emit_records, print_json, print_separator, render_table};

/// Read and decode a JSON input file.
fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("{}: {e}", path.display())))
}

/// Query timeseries and print one table per point.
pub async fn query(
    api: &dyn OnboardApi,
    point_ids: &[i64],
    window: TimeWindow,
    format: OutputFormat,
) -> Result<()> {
    let results = api
        .query_point_timeseries(point_ids, window.start, window.end)
        .await?;

    match format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Table => {
            if results.is_empty() {
                println!("No data in the requested window.");
            }
            for result in &results {
                print_timeseries(result);
            }
            Ok(())
        }
    }
}

fn print_timeseries(result: &TimeseriesResult) {
    let unit = result.unit.as_deref().unwrap_or("no unit");
    println!("Point {} ({unit}), {} sample(s)", result.point_id, result.len());
    print_separator(40);
    print!("{}", timeseries_table(result));
    println!();
}

fn timeseries_table(result: &TimeseriesResult) -> String {
    let headers: Vec<&str> = result.columns.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = result
        .values
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    render_table(&headers, &rows)
}

/// Push point values read from a JSON file.
pub async fn push_updates(api: &dyn OnboardApi, file: &Path) -> Result<()> {
    let updates: Vec<PointDataUpdate> = read_json_file(file)?;
    if updates.is_empty() {
        println!("No updates in {}.", file.display());
        return Ok(());
    }

    let sent = api.update_point_data(&updates).await?;
    info!(sent, file = %file.display(), "Pushed point data");
    println!("Submitted {sent} update(s).");
    Ok(())
}

/// Report an ingest run read from a JSON file.
pub async fn send_ingest_stats(api: &dyn OnboardApi, file: &Path) -> Result<()> {
    let stats: IngestStats = read_json_file(file)?;
    api.send_ingest_stats(&stats).await?;
    println!(
        "Sent ingest stats for building {} ({} checkpoint(s), {} error(s)).",
        stats.building_id,
        stats.checkpoints.len(),
        stats.errors.len()
    );
    Ok(())
}

pub async fn ingest_stats(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    emit_records(&api.get_ingest_stats().await?, format)
}

pub async fn alerts(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    emit_records(&api.get_alerts().await?, format)
}

/// Build a source-to-destination map, rejecting a source given twice.
pub fn point_id_map(pairs: &[(i64, i64)]) -> Result<PointIdMap, CliError> {
    let mut map = PointIdMap::new();
    for &(src, dst) in pairs {
        if let Some(existing) = map.insert(src, dst) {
            if existing != dst {
                return Err(CliError::Arguments(format!(
                    "point {src} is mapped to both {existing} and {dst}"
                )));
            }
        }
    }
    Ok(map)
}

/// Copy data between points and print the server's description of the job.
pub async fn copy_data(
    api: &dyn OnboardApi,
    pairs: &[(i64, i64)],
    window: TimeWindow,
) -> Result<()> {
    let map = point_id_map(pairs)?;
    let description = api.copy_point_data(&map, window.start, window.end).await?;
    println!("{description}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::MockApi;
    use chrono::{TimeZone, Utc};
    use onboard_core::OnboardError;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn window() -> TimeWindow {
        TimeWindow {
            start: Utc.with_ymd_and_hms(2019, 11, 29, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2019, 11, 30, 0, 0, 0).unwrap(),
        }
    }

    fn json_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_query_passes_window() {
        let w = window();
        let mut api = MockApi::new();
        api.expect_query_point_timeseries()
            .withf(move |ids, start, end| {
                ids.to_vec() == vec![1] && *start == w.start && *end == w.end
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![TimeseriesResult {
                    point_id: 1,
                    unit: Some("kW".to_string()),
                    columns: vec!["time".to_string(), "clean".to_string()],
                    values: vec![vec![json!("2019-11-29T00:15:00Z"), json!(3.5)]],
                }])
            });

        query(&api, &[1], w, OutputFormat::Table).await.unwrap();
    }

    #[test]
    fn test_timeseries_table() {
        let result = TimeseriesResult {
            point_id: 1,
            unit: None,
            columns: vec!["time".to_string(), "raw".to_string()],
            values: vec![vec![json!("2019-11-29T00:15:00Z"), json!(null)]],
        };

        let table = timeseries_table(&result);

        assert!(table.starts_with("time"));
        assert!(table.lines().nth(2).unwrap().starts_with("2019-11-29T00:15:00Z"));
    }

    #[tokio::test]
    async fn test_push_updates_from_file() {
        let file = json_file(
            r#"[
                {"point_id": 1, "value": 72.5, "last_updated": "2020-05-01T12:00:00Z"},
                {"point_id": 2, "value": "on", "last_updated": "2020-05-01T12:00:00Z"}
            ]"#,
        );
        let mut api = MockApi::new();
        api.expect_update_point_data()
            .withf(|updates| updates.len() == 2 && updates[1].value == json!("on"))
            .times(1)
            .returning(|updates| Ok(updates.len()));

        push_updates(&api, file.path()).await.unwrap();
    }

    #[tokio::test]
    async fn test_push_updates_empty_file_sends_nothing() {
        let file = json_file("[]");
        let mut api = MockApi::new();
        api.expect_update_point_data().never();

        push_updates(&api, file.path()).await.unwrap();
    }

    #[tokio::test]
    async fn test_push_updates_bad_json() {
        let file = json_file(r#"{"point_id": 1}"#);
        let api = MockApi::new();

        let err = push_updates(&api, file.path()).await.unwrap_err();

        let cli = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli, CliError::Input(_)));
        assert_eq!(cli.exit_code(), 65);
    }

    #[tokio::test]
    async fn test_push_updates_missing_file() {
        let api = MockApi::new();
        let dir = tempfile::tempdir().unwrap();

        let err = push_updates(&api, &dir.path().join("missing.json"))
            .await
            .unwrap_err();

        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Io(_))));
    }

    #[tokio::test]
    async fn test_send_ingest_stats_from_file() {
        let file = json_file(
            r#"{
                "building_id": 12,
                "started": "2020-05-01T12:00:00Z",
                "checkpoints": [{"name": "read", "elapsed_ms": 850}],
                "counters": {"points_read": 40}
            }"#,
        );
        let mut api = MockApi::new();
        api.expect_send_ingest_stats()
            .withf(|stats| stats.building_id == 12 && stats.elapsed_at("read") == Some(850))
            .times(1)
            .returning(|_| Ok(()));

        send_ingest_stats(&api, file.path()).await.unwrap();
    }

    #[test]
    fn test_point_id_map() {
        let map = point_id_map(&[(1, 10), (2, 20), (1, 10)]).unwrap();
        assert_eq!(map, PointIdMap::from([(1, 10), (2, 20)]));

        assert!(matches!(
            point_id_map(&[(1, 10), (1, 11)]),
            Err(CliError::Arguments(_))
        ));
    }

    #[tokio::test]
    async fn test_copy_data() {
        let mut api = MockApi::new();
        api.expect_copy_point_data()
            .withf(|map, _, _| map.get(&1) == Some(&10))
            .times(1)
            .returning(|_, _, _| Ok("Copying 1 point(s)".to_string()));

        copy_data(&api, &[(1, 10)], window()).await.unwrap();
    }

    #[tokio::test]
    async fn test_copy_data_inverted_window_reported() {
        let w = window();
        let inverted = TimeWindow {
            start: w.end,
            end: w.start,
        };
        let mut api = MockApi::new();
        api.expect_copy_point_data().returning(|_, _, _| {
            Err(OnboardError::InvalidRequest {
                message: "time window ends before it starts".to_string(),
            })
        });

        let err = copy_data(&api, &[(1, 10)], inverted).await.unwrap_err();

        assert_eq!(CliError::exit_code_for(&err), 2);
    }

    #[tokio::test]
    async fn test_alerts_and_ingest_stats() {
        let mut api = MockApi::new();
        api.expect_get_alerts().times(1).returning(|| Ok(Vec::new()));
        api.expect_get_ingest_stats()
            .times(1)
            .returning(|| Ok(Vec::new()));

        alerts(&api, OutputFormat::Table).await.unwrap();
        ingest_stats(&api, OutputFormat::Json).await.unwrap();
    }
}
