use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use rusqlite::{Connection, params};

use super::error::GeofabrikError;
use super::types::DownloadReport;

/// Captures a persisted audit trail of extract downloads.
#[derive(Debug)]
pub struct DownloadLog {
    connection: Connection,
    location: PathBuf,
}

impl DownloadLog {
    /// Open (or create) the download log at the supplied path.
    pub fn initialise(path: &Path) -> Result<Self, GeofabrikError> {
        let connection =
            Connection::open(path).map_err(|source| GeofabrikError::InitialiseLog {
                source,
                path: path.to_path_buf(),
            })?;
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS extract_downloads (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    url TEXT NOT NULL,
                    file_name TEXT NOT NULL,
                    bytes_written INTEGER NOT NULL,
                    output_path TEXT NOT NULL,
                    downloaded_at INTEGER NOT NULL
                )",
                [],
            )
            .map_err(|source| GeofabrikError::InitialiseLog {
                source,
                path: path.to_path_buf(),
            })?;
        Ok(Self {
            connection,
            location: path.to_path_buf(),
        })
    }

    /// Record a completed download in the log.
    pub fn record(&self, report: &DownloadReport) -> Result<(), GeofabrikError> {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|err| GeofabrikError::RecordLog {
                source: rusqlite::Error::ToSqlConversionFailure(Box::new(err)),
            })?;
        let timestamp =
            i64::try_from(duration.as_secs()).map_err(|err| GeofabrikError::RecordLog {
                source: rusqlite::Error::ToSqlConversionFailure(Box::new(err)),
            })?;
        let bytes =
            i64::try_from(report.bytes_written).map_err(|err| GeofabrikError::RecordLog {
                source: rusqlite::Error::ToSqlConversionFailure(Box::new(err)),
            })?;
        self.connection
            .execute(
                "INSERT INTO extract_downloads
                    (url, file_name, bytes_written, output_path, downloaded_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    report.url.as_ref(),
                    report.url.file_name(),
                    bytes,
                    report.output_path.display().to_string(),
                    timestamp,
                ],
            )
            .map_err(|source| GeofabrikError::RecordLog { source })?;
        Ok(())
    }

    /// Location of the log on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.location
    }

    /// Access the underlying connection, mainly for inspection in tests.
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}
