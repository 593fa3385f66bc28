//! Birth place resolution.
//!
//! A [`LocationResolver`] turns a place name into coordinates and a zone.
//! The built-in [`StaticGazetteer`] answers from an embedded city table;
//! network geocoding is left to callers that implement the trait.

use saju_time::{GeoLocation, LocationSource};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ChartConfig;
use crate::error::SajuError;

/// Why a resolver could not produce a location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("place not found: {0}")]
    NotFound(String),
    #[error("resolver unavailable: {0}")]
    Unavailable(String),
}

/// Maps a place name to a geographic location.
pub trait LocationResolver: Send + Sync {
    fn resolve(&self, place: &str) -> Result<GeoLocation, LocationError>;
}

/// A location together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub location: GeoLocation,
    pub source: LocationSource,
}

impl ResolvedLocation {
    /// A location supplied directly by the caller.
    pub fn exact(location: GeoLocation) -> Self {
        Self {
            location,
            source: LocationSource::Resolved,
        }
    }
}

/// Resolve `place`, falling back to the configured default location.
///
/// Without a configured fallback an unresolved place is an error; civil
/// time is never used uncorrected.
pub fn resolve_location(
    resolver: &dyn LocationResolver,
    place: &str,
    config: &ChartConfig,
) -> Result<ResolvedLocation, SajuError> {
    match resolver.resolve(place) {
        Ok(location) => {
            debug!(place, lon = location.longitude_deg, "resolved birth place");
            Ok(ResolvedLocation::exact(location))
        }
        Err(err) => match &config.fallback_location {
            Some(fallback) => {
                warn!(place, error = %err, zone = %fallback.time_zone_id, "using fallback location");
                Ok(ResolvedLocation {
                    location: fallback.clone(),
                    source: LocationSource::Fallback,
                })
            }
            None => Err(SajuError::LocationUnresolved {
                place: place.to_string(),
            }),
        },
    }
}

// ---------------------------------------------------------------------------
// Embedded gazetteer
// ---------------------------------------------------------------------------

/// One row of the embedded city table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityEntry {
    pub name: &'static str,
    /// Alternative spellings, including the local-script name.
    pub aliases: &'static [&'static str],
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub time_zone_id: &'static str,
    /// Standard offset from UT in minutes.
    pub utc_offset_minutes: i32,
}

impl CityEntry {
    fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
    }

    fn to_location(self) -> GeoLocation {
        GeoLocation::new(
            self.latitude_deg,
            self.longitude_deg,
            self.time_zone_id,
            self.utc_offset_minutes,
        )
    }
}

const fn city(
    name: &'static str,
    aliases: &'static [&'static str],
    latitude_deg: f64,
    longitude_deg: f64,
    time_zone_id: &'static str,
    utc_offset_minutes: i32,
) -> CityEntry {
    CityEntry {
        name,
        aliases,
        latitude_deg,
        longitude_deg,
        time_zone_id,
        utc_offset_minutes,
    }
}

/// Korean cities and major world cities.
pub const BUILTIN_CITIES: [CityEntry; 24] = [
    city("Seoul", &["서울"], 37.5665, 126.9780, "Asia/Seoul", 540),
    city("Busan", &["부산", "Pusan"], 35.1796, 129.0756, "Asia/Seoul", 540),
    city("Incheon", &["인천"], 37.4563, 126.7052, "Asia/Seoul", 540),
    city("Daegu", &["대구", "Taegu"], 35.8714, 128.6014, "Asia/Seoul", 540),
    city("Daejeon", &["대전", "Taejon"], 36.3504, 127.3845, "Asia/Seoul", 540),
    city("Gwangju", &["광주", "Kwangju"], 35.1595, 126.8526, "Asia/Seoul", 540),
    city("Ulsan", &["울산"], 35.5384, 129.3114, "Asia/Seoul", 540),
    city("Suwon", &["수원"], 37.2636, 127.0286, "Asia/Seoul", 540),
    city("Jeonju", &["전주", "Chonju"], 35.8242, 127.1480, "Asia/Seoul", 540),
    city("Gangneung", &["강릉", "Kangnung"], 37.7519, 128.8761, "Asia/Seoul", 540),
    city("Jeju", &["제주", "Cheju"], 33.4996, 126.5312, "Asia/Seoul", 540),
    city("Pyongyang", &["평양"], 39.0392, 125.7625, "Asia/Pyongyang", 540),
    city("Tokyo", &["도쿄"], 35.6762, 139.6503, "Asia/Tokyo", 540),
    city("Osaka", &["오사카"], 34.6937, 135.5023, "Asia/Tokyo", 540),
    city("Beijing", &["베이징", "Peking"], 39.9042, 116.4074, "Asia/Shanghai", 480),
    city("Shanghai", &["상하이"], 31.2304, 121.4737, "Asia/Shanghai", 480),
    city("Hong Kong", &["홍콩", "HongKong"], 22.3193, 114.1694, "Asia/Hong_Kong", 480),
    city("Taipei", &["타이베이"], 25.0330, 121.5654, "Asia/Taipei", 480),
    city("Singapore", &["싱가포르"], 1.3521, 103.8198, "Asia/Singapore", 480),
    city("Sydney", &["시드니"], -33.8688, 151.2093, "Australia/Sydney", 600),
    city("London", &["런던"], 51.5074, -0.1278, "Europe/London", 0),
    city("Paris", &["파리"], 48.8566, 2.3522, "Europe/Paris", 60),
    city("New York", &["뉴욕", "NYC"], 40.7128, -74.0060, "America/New_York", -300),
    city("Los Angeles", &["로스앤젤레스", "LA"], 34.0522, -118.2437, "America/Los_Angeles", -480),
];

/// Resolver over a fixed city table, matching names case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct StaticGazetteer {
    entries: &'static [CityEntry],
}

impl StaticGazetteer {
    pub const fn new(entries: &'static [CityEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [CityEntry] {
        self.entries
    }
}

impl Default for StaticGazetteer {
    fn default() -> Self {
        Self::new(&BUILTIN_CITIES)
    }
}

impl LocationResolver for StaticGazetteer {
    fn resolve(&self, place: &str) -> Result<GeoLocation, LocationError> {
        let query = place.trim();
        self.entries
            .iter()
            .find(|c| c.matches(query))
            .map(|c| c.to_location())
            .ok_or_else(|| LocationError::NotFound(query.to_string()))
    }
}
