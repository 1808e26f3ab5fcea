//! The `download` and `planet` subcommands.

use std::path::Path;

use clap::Parser;

use osm_exposure_data::geofabrik::{
    CountryCode, DownloadLog, DownloadReport, FileFormat, HttpExtractSource,
    download_country_extract, download_planet,
};

use crate::CliError;

#[derive(Parser)]
pub struct CliArgs {
    /// ISO3 code of the country to download
    iso3: String,
    /// Mirror file format, one of pbf or shp
    #[arg(long, default_value = "pbf", value_name = "format")]
    format: String,
}

pub async fn run(
    args: &CliArgs,
    data_dir: &Path,
    log: Option<&DownloadLog>,
) -> Result<(), CliError> {
    let code: CountryCode = args.iso3.parse()?;
    let format: FileFormat = args.format.parse()?;
    let source = HttpExtractSource::new();
    let report = download_country_extract(&source, &code, format, data_dir, log).await?;
    print_report(&report);
    Ok(())
}

pub async fn run_planet(data_dir: &Path, log: Option<&DownloadLog>) -> Result<(), CliError> {
    let source = HttpExtractSource::new();
    let report = download_planet(&source, data_dir, log).await?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &DownloadReport) {
    if report.fetched {
        println!(
            "Downloaded {} ({} bytes) to {}",
            report.url,
            report.bytes_written,
            report.output_path.display()
        );
    } else {
        println!("Already present at {}", report.output_path.display());
    }
}
