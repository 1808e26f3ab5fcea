//! Derive custom sub-extracts from the planet file via the osmosis tool.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use log::info;
use thiserror::Error;
use tokio::process::Command;

use crate::geofabrik::{self, ExtractSource, GeofabrikError};

const OSMOSIS: &str = "osmosis";

/// Region to cut out of the planet file.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipShape {
    /// Axis-aligned bounding box in WGS84 degrees.
    BoundingBox(BoundingBox),
    /// Path to an osmosis boundary-polygon file.
    Polygon(PathBuf),
}

/// Bounding-box edges in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Northern edge (top latitude).
    pub north: f64,
    /// Eastern edge (right longitude).
    pub east: f64,
    /// Southern edge (bottom latitude).
    pub south: f64,
    /// Western edge (left longitude).
    pub west: f64,
}

/// Captured outcome of an osmosis run.
#[derive(Debug)]
pub struct ClipOutcome {
    /// Exit status reported by the tool.
    pub status: ExitStatus,
    /// Captured standard output.
    pub stdout: String,
}

impl ClipOutcome {
    /// Whether the tool exited successfully.
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Errors produced while preparing or launching a clip.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClipError {
    /// Fetching the missing planet file failed.
    #[error("failed to fetch planet file: {source}")]
    Planet { source: GeofabrikError },
    /// The clipping tool could not be launched.
    #[error("failed to launch {tool}: {source}")]
    Launch { tool: &'static str, source: io::Error },
}

/// Cut `shape` out of the planet file at `planet_path` into `dest_path`.
///
/// A missing planet file is downloaded first, into the parent directory of
/// `planet_path` under the canonical `planet-latest.osm.pbf` name. An
/// existing `dest_path` short-circuits the run and yields `Ok(None)`. A
/// non-zero exit from osmosis is not interpreted here; callers inspect the
/// returned [`ClipOutcome`].
pub async fn extract_region<S: ExtractSource + ?Sized>(
    source: &S,
    planet_path: &Path,
    dest_path: &Path,
    shape: &ClipShape,
) -> Result<Option<ClipOutcome>, ClipError> {
    if !planet_path.is_file() {
        info!("planet file not found, downloading it");
        let data_dir = planet_path.parent().unwrap_or_else(|| Path::new("."));
        geofabrik::download_planet(source, data_dir, None)
            .await
            .map_err(|err| ClipError::Planet { source: err })?;
    }

    if dest_path.is_file() {
        info!("extracted file already exists at {}", dest_path.display());
        return Ok(None);
    }

    info!("generating extract from planet file");
    let output = Command::new(OSMOSIS)
        .args(osmosis_args(planet_path, dest_path, shape))
        .output()
        .await
        .map_err(|err| ClipError::Launch {
            tool: OSMOSIS,
            source: err,
        })?;
    Ok(Some(ClipOutcome {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    }))
}

fn osmosis_args(planet_path: &Path, dest_path: &Path, shape: &ClipShape) -> Vec<String> {
    let mut args = vec![
        "--read-pbf".to_owned(),
        format!("file={}", planet_path.display()),
    ];
    match shape {
        ClipShape::BoundingBox(bounds) => {
            args.extend([
                "--bounding-box".to_owned(),
                format!("top={}", bounds.north),
                format!("left={}", bounds.west),
                format!("bottom={}", bounds.south),
                format!("right={}", bounds.east),
            ]);
        }
        ClipShape::Polygon(poly) => {
            args.extend([
                "--bounding-polygon".to_owned(),
                format!("file={}", poly.display()),
            ]);
        }
    }
    args.extend(["--write-pbf".to_owned(), format!("file={}", dest_path.display())]);
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geofabrik::{StubSource, block_on_for_tests};
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    #[fixture]
    fn data_dir() -> TempDir {
        TempDir::new().expect("failed to create temporary directory")
    }

    #[rstest]
    fn maps_bounding_box_edges_to_osmosis_flags() {
        let shape = ClipShape::BoundingBox(BoundingBox {
            north: 47.8,
            east: 10.5,
            south: 45.8,
            west: 5.9,
        });
        let args = osmosis_args(
            Path::new("planet-latest.osm.pbf"),
            Path::new("switzerland.osm.pbf"),
            &shape,
        );
        assert_eq!(
            args,
            vec![
                "--read-pbf",
                "file=planet-latest.osm.pbf",
                "--bounding-box",
                "top=47.8",
                "left=5.9",
                "bottom=45.8",
                "right=10.5",
                "--write-pbf",
                "file=switzerland.osm.pbf",
            ]
        );
    }

    #[rstest]
    fn passes_polygon_file_through() {
        let shape = ClipShape::Polygon(PathBuf::from("basel.poly"));
        let args = osmosis_args(
            Path::new("planet-latest.osm.pbf"),
            Path::new("basel.osm.pbf"),
            &shape,
        );
        assert_eq!(
            args,
            vec![
                "--read-pbf",
                "file=planet-latest.osm.pbf",
                "--bounding-polygon",
                "file=basel.poly",
                "--write-pbf",
                "file=basel.osm.pbf",
            ]
        );
    }

    #[rstest]
    fn skips_existing_destination(data_dir: TempDir) {
        let planet = data_dir.path().join("planet-latest.osm.pbf");
        let dest = data_dir.path().join("already-cut.osm.pbf");
        fs::write(&planet, b"planet").expect("failed to seed planet file");
        fs::write(&dest, b"extract").expect("failed to seed destination");
        let source = StubSource::new(Vec::new());
        let shape = ClipShape::Polygon(PathBuf::from("region.poly"));
        let outcome = block_on_for_tests(extract_region(&source, &planet, &dest, &shape))
            .expect("skip path should not fail");
        assert!(outcome.is_none());
        assert_eq!(source.fetch_count(), 0);
    }

    #[rstest]
    fn fetches_missing_planet_before_clipping(data_dir: TempDir) {
        let planet = data_dir.path().join("planet-latest.osm.pbf");
        let dest = data_dir.path().join("already-cut.osm.pbf");
        fs::write(&dest, b"extract").expect("failed to seed destination");
        let source = StubSource::new(b"planet".to_vec());
        let shape = ClipShape::Polygon(PathBuf::from("region.poly"));
        let outcome = block_on_for_tests(extract_region(&source, &planet, &dest, &shape))
            .expect("planet fetch should succeed");
        assert!(outcome.is_none(), "existing destination still short-circuits");
        assert_eq!(source.fetch_count(), 1);
        assert!(planet.is_file(), "planet file should have been downloaded");
    }
}
