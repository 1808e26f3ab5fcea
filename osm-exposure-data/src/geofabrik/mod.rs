//! Facilities for resolving and downloading Geofabrik OSM extracts.
#![forbid(unsafe_code)]

mod error;
mod log;
mod ops;
mod registry;
mod source;
mod types;
mod util;

#[cfg(any(test, doc))]
mod test_support;
#[cfg(any(test, doc))]
pub use test_support::{StubSource, block_on_for_tests};

pub use error::{GeofabrikError, TransportError};
pub use log::DownloadLog;
pub use ops::{PLANET_URL, download_country_extract, download_planet, ensure_downloaded};
pub use registry::{GEOFABRIK_ROOT, RegionPath, download_url, region_for};
pub use source::{DEFAULT_USER_AGENT, ExtractSource, HttpExtractSource};
pub use types::{CountryCode, DownloadReport, ExtractUrl, FileFormat};
