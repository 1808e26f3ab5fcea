//! The `clip` subcommand.

use std::path::{Path, PathBuf};

use clap::Parser;

use osm_exposure_data::clip::{BoundingBox, ClipShape, extract_region};
use osm_exposure_data::geofabrik::{ExtractUrl, HttpExtractSource, PLANET_URL};

use crate::CliError;

#[derive(Parser)]
pub struct CliArgs {
    /// Path of the extract to create
    #[arg(long, value_name = "path")]
    out: PathBuf,
    /// Bounding box edges as north east south west
    #[arg(long, num_args = 4, value_names = ["N", "E", "S", "W"], allow_negative_numbers = true)]
    bbox: Option<Vec<f64>>,
    /// Path to an osmosis boundary-polygon file
    #[arg(long, value_name = "path")]
    poly: Option<PathBuf>,
}

pub async fn run(args: &CliArgs, data_dir: &Path) -> Result<(), CliError> {
    let shape = parse_shape(args)?;
    let planet_path = data_dir.join(ExtractUrl::new(PLANET_URL).file_name());
    let source = HttpExtractSource::new();
    match extract_region(&source, &planet_path, &args.out, &shape).await? {
        None => println!("Extracted file already exists at {}", args.out.display()),
        Some(outcome) if outcome.success() => {
            print!("{}", outcome.stdout);
            println!("Wrote {}", args.out.display());
        }
        Some(outcome) => {
            return Err(CliError::Subprocess {
                status: outcome.status,
                stdout: outcome.stdout,
            });
        }
    }
    Ok(())
}

fn parse_shape(args: &CliArgs) -> Result<ClipShape, CliError> {
    match (&args.bbox, &args.poly) {
        (Some(edges), None) => {
            let &[north, east, south, west] = edges.as_slice() else {
                return Err(CliError::BadBounds);
            };
            Ok(ClipShape::BoundingBox(BoundingBox {
                north,
                east,
                south,
                west,
            }))
        }
        (None, Some(poly)) => Ok(ClipShape::Polygon(poly.clone())),
        _ => Err(CliError::AmbiguousShape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn args(bbox: Option<Vec<f64>>, poly: Option<PathBuf>) -> CliArgs {
        CliArgs {
            out: PathBuf::from("out.osm.pbf"),
            bbox,
            poly,
        }
    }

    #[rstest]
    fn accepts_bounding_box_edges() {
        let shape = parse_shape(&args(Some(vec![47.8, 10.5, 45.8, 5.9]), None))
            .expect("bbox should parse");
        assert_eq!(
            shape,
            ClipShape::BoundingBox(BoundingBox {
                north: 47.8,
                east: 10.5,
                south: 45.8,
                west: 5.9,
            })
        );
    }

    #[rstest]
    fn accepts_polygon_file() {
        let shape = parse_shape(&args(None, Some(PathBuf::from("basel.poly"))))
            .expect("poly should parse");
        assert_eq!(shape, ClipShape::Polygon(PathBuf::from("basel.poly")));
    }

    #[rstest]
    fn rejects_both_and_neither() {
        assert!(parse_shape(&args(None, None)).is_err());
        assert!(
            parse_shape(&args(Some(vec![1.0, 2.0, 3.0, 4.0]), Some(PathBuf::from("x.poly"))))
                .is_err()
        );
    }
}
