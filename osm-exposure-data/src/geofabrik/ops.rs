use std::{fs, io::Write, path::Path};

use log::info;

use super::error::GeofabrikError;
use super::log::DownloadLog;
use super::registry::download_url;
use super::source::ExtractSource;
use super::types::{CountryCode, DownloadReport, ExtractUrl, FileFormat};

/// Fixed URL of the full-planet OSM dump.
pub const PLANET_URL: &str = "https://planet.openstreetmap.org/pbf/planet-latest.osm.pbf";

/// Download the regional extract registered for `code` into `data_dir`.
///
/// The local file name is the last path segment of the mirror URL. An
/// existing file short-circuits the download; pass a [`DownloadLog`] to
/// record transfers that actually happened.
pub async fn download_country_extract<S: ExtractSource + ?Sized>(
    source: &S,
    code: &CountryCode,
    format: FileFormat,
    data_dir: &Path,
    log: Option<&DownloadLog>,
) -> Result<DownloadReport, GeofabrikError> {
    let url = download_url(code, format)?;
    ensure_downloaded(source, &url, data_dir, log).await
}

/// Download the full-planet dump into `data_dir`.
pub async fn download_planet<S: ExtractSource + ?Sized>(
    source: &S,
    data_dir: &Path,
    log: Option<&DownloadLog>,
) -> Result<DownloadReport, GeofabrikError> {
    let url = ExtractUrl::new(PLANET_URL);
    ensure_downloaded(source, &url, data_dir, log).await
}

/// Fetch `url` into `data_dir` unless the destination file already exists.
///
/// The payload streams into a temporary file that is only persisted under
/// the final name once the transfer completes, so a failed download never
/// leaves a truncated extract behind.
pub async fn ensure_downloaded<S: ExtractSource + ?Sized>(
    source: &S,
    url: &ExtractUrl,
    data_dir: &Path,
    log: Option<&DownloadLog>,
) -> Result<DownloadReport, GeofabrikError> {
    let output_path = data_dir.join(url.file_name());
    if output_path.is_file() {
        info!("file already exists as {}", output_path.display());
        return Ok(DownloadReport {
            url: url.clone(),
            output_path,
            bytes_written: 0,
            fetched: false,
        });
    }

    fs::create_dir_all(data_dir).map_err(|source| GeofabrikError::CreateDir {
        source,
        path: data_dir.to_path_buf(),
    })?;

    info!("downloading file as {}", output_path.display());
    let mut staging = tempfile::Builder::new()
        .suffix(".part")
        .tempfile_in(data_dir)
        .map_err(|source| GeofabrikError::WriteExtract {
            source,
            path: output_path.clone(),
        })?;
    let bytes_written = source
        .fetch(url, staging.as_file_mut())
        .await
        .map_err(|source| GeofabrikError::Download { source })?;
    staging
        .as_file_mut()
        .flush()
        .map_err(|source| GeofabrikError::WriteExtract {
            source,
            path: output_path.clone(),
        })?;
    staging
        .persist(&output_path)
        .map_err(|err| GeofabrikError::Persist {
            source: err.error,
            path: output_path.clone(),
        })?;

    let report = DownloadReport {
        url: url.clone(),
        output_path,
        bytes_written,
        fetched: true,
    };
    if let Some(log) = log {
        log.record(&report)?;
    }
    Ok(report)
}
