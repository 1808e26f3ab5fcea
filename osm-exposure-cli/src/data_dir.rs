//! Resolution of the local data directory.

use std::{env, ffi::OsString, path::PathBuf};

use directories::ProjectDirs;

use crate::CliError;

/// Environment variable overriding the platform data directory.
pub const DATA_DIR_ENV: &str = "OSM_EXPOSURE_DATA_DIR";

/// Resolve the data directory: flag, then environment, then platform default.
pub fn resolve(flag: Option<PathBuf>) -> Result<PathBuf, CliError> {
    resolve_from(flag, env::var_os(DATA_DIR_ENV))
}

fn resolve_from(flag: Option<PathBuf>, env_value: Option<OsString>) -> Result<PathBuf, CliError> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = env_value {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "osm-exposure")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(CliError::NoDataDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn flag_takes_precedence() {
        let resolved = resolve_from(
            Some(PathBuf::from("/srv/osm")),
            Some(OsString::from("/tmp/elsewhere")),
        )
        .expect("flag should resolve");
        assert_eq!(resolved, PathBuf::from("/srv/osm"));
    }

    #[rstest]
    fn environment_beats_platform_default() {
        let resolved = resolve_from(None, Some(OsString::from("/tmp/osm-data")))
            .expect("environment should resolve");
        assert_eq!(resolved, PathBuf::from("/tmp/osm-data"));
    }
}
