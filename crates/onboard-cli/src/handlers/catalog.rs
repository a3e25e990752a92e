//! Buildings, equipment and reference data commands.

use anyhow::Result;
use onboard_core::{Building, Equipment, OnboardApi};

use crate::presentation::{
    OutputFormat, emit_records, format_optional, print_json, render_table, truncate_string,
};

pub async fn buildings(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    let buildings = api.get_all_buildings().await?;
    match format {
        OutputFormat::Json => print_json(&buildings),
        OutputFormat::Table => {
            println!("Found {} building(s):\n", buildings.len());
            print!("{}", buildings_table(&buildings));
            Ok(())
        }
    }
}

fn buildings_table(buildings: &[Building]) -> String {
    let rows: Vec<Vec<String>> = buildings
        .iter()
        .map(|b| {
            vec![
                b.id.to_string(),
                truncate_string(b.name.as_deref().unwrap_or("--"), 32),
                format_optional(b.org_id.as_ref(), "--"),
            ]
        })
        .collect();
    render_table(&["ID", "Name", "Org"], &rows)
}

/// List a building's equipment with the number of attached points.
pub async fn equipment(
    api: &dyn OnboardApi,
    building_id: i64,
    format: OutputFormat,
) -> Result<()> {
    let equipment = api.get_building_equipment(building_id).await?;
    match format {
        OutputFormat::Json => print_json(&equipment),
        OutputFormat::Table => {
            if equipment.is_empty() {
                println!("Building {building_id} has no equipment.");
            } else {
                print!("{}", equipment_table(&equipment));
            }
            Ok(())
        }
    }
}

fn equipment_table(equipment: &[Equipment]) -> String {
    let rows: Vec<Vec<String>> = equipment
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                format_optional(e.equip_id.as_ref(), "--"),
                e.points.len().to_string(),
            ]
        })
        .collect();
    render_table(&["ID", "Equip ID", "Points"], &rows)
}

pub async fn tags(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    emit_records(&api.get_tags().await?, format)
}

pub async fn equipment_types(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    emit_records(&api.get_equipment_types().await?, format)
}

pub async fn point_types(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    emit_records(&api.get_all_point_types().await?, format)
}

pub async fn measurements(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    emit_records(&api.get_all_measurements().await?, format)
}

pub async fn units(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    emit_records(&api.get_all_units().await?, format)
}
