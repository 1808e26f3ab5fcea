//! Static registry of Geofabrik regional extracts keyed by ISO country code.

use super::error::GeofabrikError;
use super::types::{CountryCode, ExtractUrl, FileFormat};

/// Base URL of the Geofabrik download mirror.
pub const GEOFABRIK_ROOT: &str = "https://download.geofabrik.de";

/// Continent and region path segments for a registered extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionPath {
    /// Continent segment of the mirror path.
    pub continent: &'static str,
    /// Region segment of the mirror path.
    pub region: &'static str,
}

/// Country code to mirror path table, after the osm_clipper region split.
///
/// Codes are unique; several map to one shared regional extract. The source
/// table carried two defective duplicates: a second `BEN` entry pointing at
/// the Canary Islands (dropped, the islands have no own ISO code) and an
/// `asia` entry for `RUS` (dropped in favour of the European path).
pub(crate) const REGISTRY: &[(&str, &str, &str)] = &[
    ("AFG", "asia", "afghanistan"),
    ("ALB", "europe", "albania"),
    ("DZA", "africa", "algeria"),
    ("AND", "europe", "andorra"),
    ("AGO", "africa", "angola"),
    ("BEN", "africa", "benin"),
    ("BWA", "africa", "botswana"),
    ("BFA", "africa", "burkina-faso"),
    ("BDI", "africa", "burundi"),
    ("CMR", "africa", "cameroon"),
    ("CPV", "africa", "cape-verde"),
    ("CAF", "africa", "central-african-republic"),
    ("TCD", "africa", "chad"),
    ("COM", "africa", "comores"),
    ("COG", "africa", "congo-brazzaville"),
    ("COD", "africa", "congo-democratic-republic"),
    ("DJI", "africa", "djibouti"),
    ("EGY", "africa", "egypt"),
    ("GNQ", "africa", "equatorial-guinea"),
    ("ERI", "africa", "eritrea"),
    ("ETH", "africa", "ethiopia"),
    ("GAB", "africa", "gabon"),
    // shared extract with Senegal
    ("GMB", "africa", "senegal-and-gambia"),
    ("GHA", "africa", "ghana"),
    ("GIN", "africa", "guinea"),
    ("GNB", "africa", "guinea-bissau"),
    ("CIV", "africa", "ivory-coast"),
    ("KEN", "africa", "kenya"),
    ("LSO", "africa", "lesotho"),
    ("LBR", "africa", "liberia"),
    ("LBY", "africa", "libya"),
    ("MDG", "africa", "madagascar"),
    ("MWI", "africa", "malawi"),
    ("MLI", "africa", "mali"),
    ("MRT", "africa", "mauritania"),
    ("MAR", "africa", "morocco"),
    ("MOZ", "africa", "mozambique"),
    ("NAM", "africa", "namibia"),
    ("NER", "africa", "niger"),
    ("NGA", "africa", "nigeria"),
    ("RWA", "africa", "rwanda"),
    ("SHN", "africa", "saint-helena-ascension-and-tristan-da-cunha"),
    ("STP", "africa", "sao-tome-and-principe"),
    // shared extract with The Gambia
    ("SEN", "africa", "senegal-and-gambia"),
    ("SYC", "africa", "seychelles"),
    ("SLE", "africa", "sierra-leone"),
    ("SOM", "africa", "somalia"),
    ("ZAF", "africa", "south-africa"),
    ("SDN", "africa", "sudan"),
    ("SSD", "africa", "south-sudan"),
    ("SWZ", "africa", "swaziland"),
    ("TZA", "africa", "tanzania"),
    ("TGO", "africa", "togo"),
    ("TUN", "africa", "tunisia"),
    ("UGA", "africa", "uganda"),
    ("ZMB", "africa", "zambia"),
    ("ZWE", "africa", "zimbabwe"),
    ("ARM", "asia", "armenia"),
    ("AZE", "asia", "azerbaijan"),
    ("BGD", "asia", "bangladesh"),
    ("BTN", "asia", "bhutan"),
    ("KHM", "asia", "cambodia"),
    ("CHN", "asia", "china"),
    // gcc-states covers Saudi Arabia, Kuwait, the UAE, Qatar, Bahrain, and Oman
    ("SAU", "asia", "gcc-states"),
    ("KWT", "asia", "gcc-states"),
    ("ARE", "asia", "gcc-states"),
    ("QAT", "asia", "gcc-states"),
    ("OMN", "asia", "gcc-states"),
    ("BHR", "asia", "gcc-states"),
    ("IND", "asia", "india"),
    ("IDN", "asia", "indonesia"),
    ("IRN", "asia", "iran"),
    ("IRQ", "asia", "iraq"),
    // shared extract with Palestine
    ("ISR", "asia", "israel-and-palestine"),
    ("PSE", "asia", "israel-and-palestine"),
    ("JPN", "asia", "japan"),
    ("JOR", "asia", "jordan"),
    ("KAZ", "asia", "kazakhstan"),
    ("KGZ", "asia", "kyrgyzstan"),
    ("LAO", "asia", "laos"),
    ("LBN", "asia", "lebanon"),
    // shared extract covering Malaysia, Singapore, and Brunei
    ("MYS", "asia", "malaysia-singapore-brunei"),
    ("SGP", "asia", "malaysia-singapore-brunei"),
    ("BRN", "asia", "malaysia-singapore-brunei"),
    ("MDV", "asia", "maldives"),
    ("MNG", "asia", "mongolia"),
    ("MMR", "asia", "myanmar"),
    ("NPL", "asia", "nepal"),
    ("PRK", "asia", "north-korea"),
    ("PAK", "asia", "pakistan"),
    ("PHL", "asia", "philippines"),
    ("KOR", "asia", "south-korea"),
    ("LKA", "asia", "sri-lanka"),
    ("SYR", "asia", "syria"),
    ("TWN", "asia", "taiwan"),
    ("TJK", "asia", "tajikistan"),
    ("THA", "asia", "thailand"),
    ("TKM", "asia", "turkmenistan"),
    ("UZB", "asia", "uzbekistan"),
    ("VNM", "asia", "vietnam"),
    ("YEM", "asia", "yemen"),
    ("BHS", "central-america", "bahamas"),
    ("BLZ", "central-america", "belize"),
    ("CUB", "central-america", "cuba"),
    ("GTM", "central-america", "guatemala"),
    // shared extract with the Dominican Republic
    ("HTI", "central-america", "haiti-and-domrep"),
    ("DOM", "central-america", "haiti-and-domrep"),
    ("JAM", "central-america", "jamaica"),
    ("NIC", "central-america", "nicaragua"),
    ("AUT", "europe", "austria"),
    ("BLR", "europe", "belarus"),
    ("BEL", "europe", "belgium"),
    ("BIH", "europe", "bosnia-herzegovina"),
    ("BGR", "europe", "bulgaria"),
    ("HRV", "europe", "croatia"),
    ("CYP", "europe", "cyprus"),
    ("CZE", "europe", "czech-republic"),
    ("DNK", "europe", "denmark"),
    ("EST", "europe", "estonia"),
    ("FRO", "europe", "faroe-islands"),
    ("FIN", "europe", "finland"),
    ("FRA", "europe", "france"),
    ("GEO", "europe", "georgia"),
    ("DEU", "europe", "germany"),
    // does not include Northern Ireland
    ("GBR", "europe", "great-britain"),
    ("GRC", "europe", "greece"),
    ("HUN", "europe", "hungary"),
    ("ISL", "europe", "iceland"),
    ("IRL", "europe", "ireland-and-northern-ireland"),
    ("IMN", "europe", "isle-of-man"),
    ("ITA", "europe", "italy"),
    ("LVA", "europe", "latvia"),
    ("LIE", "europe", "liechtenstein"),
    ("LTU", "europe", "lithuania"),
    ("LUX", "europe", "luxembourg"),
    ("MKD", "europe", "macedonia"),
    ("MLT", "europe", "malta"),
    ("MDA", "europe", "moldova"),
    ("MCO", "europe", "monaco"),
    ("MNE", "europe", "montenegro"),
    ("NLD", "europe", "netherlands"),
    ("NOR", "europe", "norway"),
    ("POL", "europe", "poland"),
    ("PRT", "europe", "portugal"),
    ("ROU", "europe", "romania"),
    ("RUS", "europe", "russia"),
    ("SRB", "europe", "serbia"),
    ("SVK", "europe", "slovakia"),
    ("SVN", "europe", "slovenia"),
    ("ESP", "europe", "spain"),
    ("SWE", "europe", "sweden"),
    ("CHE", "europe", "switzerland"),
    ("TUR", "europe", "turkey"),
    ("UKR", "europe", "ukraine"),
    ("CAN", "north-america", "canada"),
    ("GRL", "north-america", "greenland"),
    ("MEX", "north-america", "mexico"),
    ("USA", "north-america", "us"),
    ("AUS", "australia-oceania", "australia"),
    ("COK", "australia-oceania", "cook-islands"),
    ("FJI", "australia-oceania", "fiji"),
    ("KIR", "australia-oceania", "kiribati"),
    ("MHL", "australia-oceania", "marshall-islands"),
    ("FSM", "australia-oceania", "micronesia"),
    ("NRU", "australia-oceania", "nauru"),
    ("NCL", "australia-oceania", "new-caledonia"),
    ("NZL", "australia-oceania", "new-zealand"),
    ("NIU", "australia-oceania", "niue"),
    ("PLW", "australia-oceania", "palau"),
    ("PNG", "australia-oceania", "papua-new-guinea"),
    ("WSM", "australia-oceania", "samoa"),
    ("SLB", "australia-oceania", "solomon-islands"),
    ("TON", "australia-oceania", "tonga"),
    ("TUV", "australia-oceania", "tuvalu"),
    ("VUT", "australia-oceania", "vanuatu"),
    ("ARG", "south-america", "argentina"),
    ("BOL", "south-america", "bolivia"),
    ("BRA", "south-america", "brazil"),
    ("CHL", "south-america", "chile"),
    ("COL", "south-america", "colombia"),
    ("ECU", "south-america", "ecuador"),
    ("PRY", "south-america", "paraguay"),
    ("PER", "south-america", "peru"),
    ("SUR", "south-america", "suriname"),
    ("URY", "south-america", "uruguay"),
    ("VEN", "south-america", "venezuela"),
];

/// Look up the mirror path registered for a country code.
#[must_use]
pub fn region_for(code: &CountryCode) -> Option<RegionPath> {
    REGISTRY
        .iter()
        .find(|(registered, _, _)| *registered == code.as_str())
        .map(|(_, continent, region)| RegionPath { continent, region })
}

/// Build the mirror download URL for a country extract.
///
/// # Examples
/// ```
/// # use osm_exposure_data::geofabrik::{CountryCode, FileFormat, download_url};
/// let code: CountryCode = "CHE".parse().expect("valid code");
/// let url = download_url(&code, FileFormat::Pbf).expect("registered country");
/// assert_eq!(
///     url.as_ref(),
///     "https://download.geofabrik.de/europe/switzerland-latest.osm.pbf"
/// );
/// ```
pub fn download_url(
    code: &CountryCode,
    format: FileFormat,
) -> Result<ExtractUrl, GeofabrikError> {
    let path = region_for(code).ok_or_else(|| GeofabrikError::UnknownCountry {
        code: code.clone(),
    })?;
    let url = match format {
        FileFormat::Pbf => format!(
            "{GEOFABRIK_ROOT}/{}/{}-latest.osm.pbf",
            path.continent, path.region
        ),
        FileFormat::Shp => format!(
            "{GEOFABRIK_ROOT}/{}/{}-latest-free.shp.zip",
            path.continent, path.region
        ),
    };
    Ok(ExtractUrl::new(url))
}
