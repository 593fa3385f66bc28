//! Birth location and true local time correction.
//!
//! Civil clocks run on a zone's standard meridian. The chart's day and hour
//! pillars follow the Sun at the birth longitude instead, so the civil
//! reading is shifted by four minutes of time per degree of longitude
//! between the reference meridian and the birthplace.

use serde::{Deserialize, Serialize};

use crate::civil_time::CivilTime;
use crate::error::TimeError;

/// Minutes of clock time per degree of longitude (1440 min / 360°).
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Geographic location with its civil time zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// IANA zone identifier, e.g. `Asia/Seoul`.
    pub time_zone_id: String,
    /// Standard (non-DST) offset of the zone from UT, in minutes.
    pub utc_offset_minutes: i32,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        time_zone_id: impl Into<String>,
        utc_offset_minutes: i32,
    ) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            time_zone_id: time_zone_id.into(),
            utc_offset_minutes,
        }
    }

    /// Check coordinate ranges and the zone offset.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(TimeError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(TimeError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        if self.utc_offset_minutes.abs() > 14 * 60 {
            return Err(TimeError::InvalidLocation(
                "UTC offset must be within ±14 hours",
            ));
        }
        Ok(())
    }

    /// Central meridian of the location's standard zone, in degrees east.
    ///
    /// UTC+9 → 135°E, UTC−5 → 75°W.
    pub fn standard_meridian_deg(&self) -> f64 {
        f64::from(self.utc_offset_minutes) / MINUTES_PER_DEGREE
    }
}

/// How the location of a request was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    /// The resolver found the requested place.
    Resolved,
    /// The resolver failed and the configured default location was used.
    Fallback,
}

/// A birth moment expressed on the three clocks the resolver needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrueLocalMoment {
    /// Clock reading as entered, in the zone's civil time.
    pub civil: CivilTime,
    /// Clock reading corrected to the birth longitude.
    pub true_local: CivilTime,
    /// The same instant on the UT clock.
    pub universal: CivilTime,
    /// Reference meridian used for the correction, degrees east.
    pub reference_meridian_deg: f64,
    /// `(reference_meridian − longitude) × 4`, subtracted from civil time.
    pub offset_minutes: f64,
    pub location: GeoLocation,
    pub source: LocationSource,
}

/// Minutes by which true local time lags the reference meridian's clock.
pub fn true_local_offset_minutes(reference_meridian_deg: f64, longitude_deg: f64) -> f64 {
    (reference_meridian_deg - longitude_deg) * MINUTES_PER_DEGREE
}

/// Correct a civil reading to true local time at `location`.
///
/// `reference_meridian_deg` overrides the zone's standard meridian when
/// given.
pub fn correct_to_true_local(
    civil: CivilTime,
    location: GeoLocation,
    reference_meridian_deg: Option<f64>,
    source: LocationSource,
) -> Result<TrueLocalMoment, TimeError> {
    location.validate()?;
    let reference = reference_meridian_deg.unwrap_or_else(|| location.standard_meridian_deg());
    if !reference.is_finite() || reference.abs() > 180.0 {
        return Err(TimeError::InvalidLocation(
            "reference meridian must be within [-180, 180]",
        ));
    }

    let offset_minutes = true_local_offset_minutes(reference, location.longitude_deg);
    let true_local = civil.shifted_minutes(-offset_minutes)?;
    let universal = civil.shifted_minutes(-f64::from(location.utc_offset_minutes))?;

    Ok(TrueLocalMoment {
        civil,
        true_local,
        universal,
        reference_meridian_deg: reference,
        offset_minutes,
        location,
        source,
    })
}
