//! The `category` subcommand.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use geo::{Coord, Rect};

use osm_exposure_data::features::{
    FeatureTable, GeometryLayer, InfrastructureCategory, OgrFeatureSource, retrieve_clipped,
};

use crate::CliError;

#[derive(Parser)]
pub struct CliArgs {
    /// Path to the extract to query
    extract: PathBuf,
    /// Infrastructure category (education, healthcare, water, telecom, air,
    /// fuel, food, roads, rails, power)
    category: String,
    /// Geometry layer to query
    #[arg(long, default_value = "points", value_name = "layer")]
    layer: String,
    /// Clip bounds as xmin ymin xmax ymax
    #[arg(
        long,
        num_args = 4,
        required = true,
        value_names = ["XMIN", "YMIN", "XMAX", "YMAX"],
        allow_negative_numbers = true
    )]
    bbox: Vec<f64>,
    /// Directory to write one GeoJSON feature collection per table into
    #[arg(long, value_name = "path")]
    out: Option<PathBuf>,
}

pub fn run(args: &CliArgs) -> Result<(), CliError> {
    let category: InfrastructureCategory = args.category.parse()?;
    let layer: GeometryLayer = args.layer.parse()?;
    let bounds = parse_bounds(&args.bbox)?;
    let source = OgrFeatureSource::new(&args.extract);
    let tables = retrieve_clipped(&source, layer, category, bounds)?;
    for (index, table) in tables.iter().enumerate() {
        println!(
            "{category} table {index} ({}): {} features",
            key_column(table),
            table.len()
        );
    }
    if let Some(out_dir) = &args.out {
        write_geojson(out_dir, category, &tables)?;
    }
    Ok(())
}

fn parse_bounds(values: &[f64]) -> Result<Rect<f64>, CliError> {
    let &[xmin, ymin, xmax, ymax] = values else {
        return Err(CliError::BadBounds);
    };
    if xmin >= xmax || ymin >= ymax {
        return Err(CliError::BadBounds);
    }
    Ok(Rect::new(
        Coord { x: xmin, y: ymin },
        Coord { x: xmax, y: ymax },
    ))
}

fn key_column(table: &FeatureTable) -> &str {
    table
        .columns()
        .get(1)
        .map_or("geometry", String::as_str)
}

fn write_geojson(
    out_dir: &Path,
    category: InfrastructureCategory,
    tables: &[FeatureTable],
) -> Result<(), CliError> {
    fs::create_dir_all(out_dir).map_err(|source| CliError::CreateDir {
        source,
        path: out_dir.to_path_buf(),
    })?;
    for (index, table) in tables.iter().enumerate() {
        let path = out_dir.join(format!("{category}-{index}.geojson"));
        let collection = geojson::GeoJson::from(to_feature_collection(table));
        fs::write(&path, collection.to_string()).map_err(|source| CliError::WriteOutput {
            source,
            path: path.clone(),
        })?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn to_feature_collection(table: &FeatureTable) -> geojson::FeatureCollection {
    let features = table
        .rows()
        .iter()
        .map(|row| {
            let mut properties = serde_json::Map::new();
            if let Some(osm_id) = &row.osm_id {
                properties.insert(
                    "osm_id".to_owned(),
                    serde_json::Value::String(osm_id.clone()),
                );
            }
            for (name, value) in table.columns().iter().skip(1).zip(&row.values) {
                if let Some(value) = value {
                    properties.insert(name.clone(), serde_json::Value::String(value.clone()));
                }
            }
            geojson::Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(&row.geometry))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();
    geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_well_formed_bounds() {
        let bounds = parse_bounds(&[5.9, 45.8, 10.5, 47.8]).expect("bounds should parse");
        assert_eq!(bounds.min(), Coord { x: 5.9, y: 45.8 });
        assert_eq!(bounds.max(), Coord { x: 10.5, y: 47.8 });
    }

    #[rstest]
    fn rejects_inverted_bounds() {
        assert!(parse_bounds(&[10.5, 45.8, 5.9, 47.8]).is_err());
        assert!(parse_bounds(&[5.9, 45.8, 10.5]).is_err());
    }
}
