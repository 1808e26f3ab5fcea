//! Domain wrappers for country codes, extract URLs, and download reports.

use std::{fmt, path::PathBuf, str::FromStr};

use url::Url;

use super::error::GeofabrikError;

/// Validated 3-letter ISO country code, stored uppercased.
///
/// # Examples
/// ```
/// # use osm_exposure_data::geofabrik::CountryCode;
/// let code: CountryCode = "che".parse().expect("valid code");
/// assert_eq!(code.as_str(), "CHE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// View the code as an uppercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = GeofabrikError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.len() == 3 && value.chars().all(|ch| ch.is_ascii_alphabetic()) {
            Ok(Self(value.to_ascii_uppercase()))
        } else {
            Err(GeofabrikError::InvalidCountryCode {
                value: value.to_owned(),
            })
        }
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mirror file formats offered by Geofabrik.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Binary `.osm.pbf` extract.
    Pbf,
    /// Zipped shapefile bundle.
    Shp,
}

impl FromStr for FileFormat {
    type Err = GeofabrikError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pbf" => Ok(Self::Pbf),
            "shp" => Ok(Self::Shp),
            other => Err(GeofabrikError::InvalidFormat {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pbf => f.write_str("pbf"),
            Self::Shp => f.write_str("shp"),
        }
    }
}

/// Fully qualified URL pointing to a downloadable extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractUrl(String);

impl ExtractUrl {
    /// Construct a new [`ExtractUrl`] from an owned or borrowed string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The last path segment, used as the local file name.
    ///
    /// # Examples
    /// ```
    /// # use osm_exposure_data::geofabrik::ExtractUrl;
    /// let url = ExtractUrl::new("https://download.geofabrik.de/europe/malta-latest.osm.pbf");
    /// assert_eq!(url.file_name(), "malta-latest.osm.pbf");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl AsRef<str> for ExtractUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtractUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Url> for ExtractUrl {
    fn from(value: Url) -> Self {
        Self(value.into())
    }
}

impl TryFrom<&str> for ExtractUrl {
    type Error = url::ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value).map(Into::into)
    }
}

/// Summary of a completed (or skipped) download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    /// Source URL of the extract.
    pub url: ExtractUrl,
    /// Final location of the extract on disk.
    pub output_path: PathBuf,
    /// Number of bytes written; zero when the file was already present.
    pub bytes_written: u64,
    /// Whether a network transfer actually happened.
    pub fetched: bool,
}
