//! Error types produced by the Geofabrik download helpers.

use std::{io, path::PathBuf};

use thiserror::Error;

use super::types::CountryCode;

/// Errors produced while resolving or downloading an OSM extract.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeofabrikError {
    /// The requested file format is not one of `pbf` or `shp`.
    #[error("invalid file format {value:?}: choose one of [shp, pbf]")]
    InvalidFormat { value: String },
    /// The country code is not a 3-letter ISO code.
    #[error("invalid country code {value:?}: expected a 3-letter ISO code")]
    InvalidCountryCode { value: String },
    /// The country code has no registered Geofabrik region.
    #[error("no Geofabrik region registered for country code {code}")]
    UnknownCountry { code: CountryCode },
    /// Preparing the data directory failed.
    #[error("failed to create data directory {path:?}: {source}")]
    CreateDir { source: io::Error, path: PathBuf },
    /// The extract could not be downloaded.
    #[error("failed to download extract: {source}")]
    Download { source: TransportError },
    /// Writing the extract to disk failed.
    #[error("failed to write extract to {path:?}: {source}")]
    WriteExtract { source: io::Error, path: PathBuf },
    /// Moving the finished download into place failed.
    #[error("failed to persist downloaded extract to {path:?}: {source}")]
    Persist { source: io::Error, path: PathBuf },
    /// Initialising the download log failed.
    #[error("failed to initialise download log at {path:?}: {source}")]
    InitialiseLog {
        source: rusqlite::Error,
        path: PathBuf,
    },
    /// Recording a completed download failed.
    #[error("failed to record download metadata: {source}")]
    RecordLog { source: rusqlite::Error },
}

/// Transport-level errors encountered while issuing HTTP requests.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The server returned an HTTP error status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Fully qualified request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Short error description supplied by the server.
        message: String,
    },
    /// The request failed due to an I/O error.
    #[error("network error contacting {url}: {source}")]
    Network {
        /// Fully qualified request URL.
        url: String,
        /// I/O error reported by the transport.
        source: io::Error,
    },
}
