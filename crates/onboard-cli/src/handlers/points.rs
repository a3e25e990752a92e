//! Point lookup and selection commands.

use anyhow::Result;
use onboard_core::{OnboardApi, Point, PointSelection, PointSelector};
use tracing::debug;

use crate::error::CliError;
use crate::presentation::{OutputFormat, format_optional, print_json, render_table};

/// Resolve a selector and show what matched.
pub async fn select(
    api: &dyn OnboardApi,
    selector: &PointSelector,
    format: OutputFormat,
) -> Result<()> {
    if selector.is_empty() {
        debug!("Empty selector matches every visible point");
    }
    let selection = api.select_points(selector).await?;
    match format {
        OutputFormat::Json => print_json(&selection),
        OutputFormat::Table => {
            print!("{}", selection_summary(&selection));
            Ok(())
        }
    }
}

fn selection_summary(selection: &PointSelection) -> String {
    let kinds: [(&str, &[i64]); 4] = [
        ("orgs", &selection.orgs),
        ("buildings", &selection.buildings),
        ("equipment", &selection.equipment),
        ("points", &selection.points),
    ];
    let rows: Vec<Vec<String>> = kinds
        .iter()
        .map(|(kind, ids)| {
            let joined = ids.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
            vec![(*kind).to_string(), ids.len().to_string(), joined]
        })
        .collect();
    render_table(&["Kind", "Count", "Ids"], &rows)
}

/// Print every point id visible to the account, one per line.
pub async fn all_points(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    let ids = api.get_all_points().await?;
    match format {
        OutputFormat::Json => print_json(&ids),
        OutputFormat::Table => {
            for id in &ids {
                println!("{id}");
            }
            Ok(())
        }
    }
}

/// Fetch point records by id, or by datasource hash when no ids are given.
pub async fn points(
    api: &dyn OnboardApi,
    ids: &[i64],
    datasource_hashes: &[String],
    format: OutputFormat,
) -> Result<()> {
    let points = match (ids.is_empty(), datasource_hashes.is_empty()) {
        (false, true) => api.get_points_by_ids(ids).await?,
        (true, false) => api.get_points_by_datasource(datasource_hashes).await?,
        _ => {
            return Err(CliError::Arguments(
                "give either point ids or datasource hashes".to_string(),
            )
            .into());
        }
    };

    match format {
        OutputFormat::Json => print_json(&points),
        OutputFormat::Table => {
            println!("Found {} point(s):\n", points.len());
            print!("{}", points_table(&points));
            Ok(())
        }
    }
}

fn points_table(points: &[Point]) -> String {
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                format_optional(p.building_id.as_ref(), "--"),
                format_optional(p.name.as_ref(), "--"),
                format_optional(p.units.as_ref(), "--"),
                format_optional(p.topic.as_ref(), "--"),
            ]
        })
        .collect();
    render_table(&["ID", "Building", "Name", "Units", "Topic"], &rows)
}
