//! Command-line interface for downloading and filtering OSM extracts.
#![forbid(unsafe_code)]

use std::{io, path::PathBuf, process};

use clap::{Parser, Subcommand};
use thiserror::Error;

use osm_exposure_data::clip::ClipError;
use osm_exposure_data::features::FeatureError;
use osm_exposure_data::geofabrik::{DownloadLog, GeofabrikError};

mod category;
mod clip;
mod data_dir;
mod download;

#[derive(Parser)]
#[command(
    name = "osm-exposure",
    version,
    about = "Download and filter OpenStreetMap extracts for exposure modelling"
)]
struct CliArgs {
    /// Directory holding downloaded and derived extract files
    #[arg(long, value_name = "path", global = true)]
    data_dir: Option<PathBuf>,
    /// Optional path to a SQLite download log
    #[arg(long = "metadata", value_name = "path", global = true)]
    metadata_db: Option<PathBuf>,
    #[command(subcommand)]
    subcommand: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download the regional extract registered for a country
    Download(download::CliArgs),
    /// Download the full-planet dump
    Planet,
    /// Cut a region out of the planet file with osmosis
    Clip(clip::CliArgs),
    /// Retrieve clipped infrastructure tables from a local extract
    Category(category::CliArgs),
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    if let Err(error) = run(args).await {
        eprintln!("osm-exposure: {error}");
        process::exit(1);
    }
}

async fn run(args: CliArgs) -> Result<(), CliError> {
    let data_dir = data_dir::resolve(args.data_dir)?;
    let log = initialise_log(args.metadata_db)?;
    match args.subcommand {
        Command::Download(command) => download::run(&command, &data_dir, log.as_ref()).await,
        Command::Planet => download::run_planet(&data_dir, log.as_ref()).await,
        Command::Clip(command) => clip::run(&command, &data_dir).await,
        Command::Category(command) => category::run(&command),
    }
}

fn initialise_log(path: Option<PathBuf>) -> Result<Option<DownloadLog>, CliError> {
    let Some(path) = path else {
        return Ok(None);
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| CliError::CreateDir {
            source,
            path: parent.to_path_buf(),
        })?;
    }
    let log = DownloadLog::initialise(&path)?;
    Ok(Some(log))
}

/// Failures surfaced to the terminal with a one-line diagnostic.
#[derive(Debug, Error)]
enum CliError {
    #[error("could not determine a data directory; pass --data-dir")]
    NoDataDir,
    #[error("pass exactly one of --bbox or --poly")]
    AmbiguousShape,
    #[error("pass --bbox as xmin ymin xmax ymax")]
    BadBounds,
    #[error("osmosis exited with {status}\n{stdout}")]
    Subprocess {
        status: process::ExitStatus,
        stdout: String,
    },
    #[error("failed to create directory {path:?}: {source}")]
    CreateDir { source: io::Error, path: PathBuf },
    #[error("failed to write {path:?}: {source}")]
    WriteOutput { source: io::Error, path: PathBuf },
    #[error(transparent)]
    Download(#[from] GeofabrikError),
    #[error(transparent)]
    Clip(#[from] ClipError),
    #[error(transparent)]
    Features(#[from] FeatureError),
}
