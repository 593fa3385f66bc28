//! Calendar and astronomical time base for four-pillar charts.
//!
//! This crate provides:
//! - Gregorian date ↔ Julian Day Number conversion (the day-pillar epoch)
//! - Apparent solar longitude via a pluggable [`SolarEphemeris`]
//! - Validated civil timestamps ([`CivilTime`])
//! - True local time correction from a reference meridian

pub mod civil_time;
pub mod error;
pub mod julian;
pub mod location;
pub mod solar;

pub use civil_time::CivilTime;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, EPOCH_1900_JDN, J2000_JD, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR,
    calendar_to_jd, jd_to_calendar, jd_to_centuries, julian_day_number,
};
pub use location::{
    GeoLocation, LocationSource, MINUTES_PER_DEGREE, TrueLocalMoment, correct_to_true_local,
    true_local_offset_minutes,
};
pub use solar::{
    MeeusSun, SolarEphemeris, angular_distance_deg, apparent_sun_longitude_deg, normalize_360,
};
