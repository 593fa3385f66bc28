//! Civil birth moment → four-pillar chart.
//!
//! The pipeline is:
//! 1. Resolve the birth place (or take a given location).
//! 2. Correct the civil reading to true local time and to UT.
//! 3. Evaluate the Sun's longitude at the UT instant.
//! 4. Resolve year/month pillars from longitude, day/hour from the true-local
//!    reading.

use saju_base::{FourPillarChart, MidnightPolicy, PillarInputs, resolve_chart, saju_year};
use saju_time::{CivilTime, MeeusSun, SolarEphemeris, TrueLocalMoment, correct_to_true_local};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ChartConfig;
use crate::error::SajuError;
use crate::location::{LocationResolver, ResolvedLocation, resolve_location};

/// A birth moment as entered: civil clock reading and place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CivilBirthMoment {
    pub civil: CivilTime,
    pub place: String,
}

impl CivilBirthMoment {
    pub fn new(civil: CivilTime, place: impl Into<String>) -> Self {
        Self {
            civil,
            place: place.into(),
        }
    }
}

/// A resolved chart with the intermediate values it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub moment: TrueLocalMoment,
    /// Apparent solar longitude at the birth instant, degrees.
    pub sun_longitude_deg: f64,
    /// Chart year (changes at Start of Spring).
    pub saju_year: i32,
    pub midnight_policy: MidnightPolicy,
    pub chart: FourPillarChart,
}

/// Compute a chart with the built-in solar theory.
pub fn compute_chart(
    civil: CivilTime,
    location: &ResolvedLocation,
    config: &ChartConfig,
) -> Result<ChartReport, SajuError> {
    compute_chart_with(&MeeusSun, civil, location, config)
}

/// Compute a chart with a caller-supplied solar ephemeris.
pub fn compute_chart_with<E: SolarEphemeris + ?Sized>(
    ephemeris: &E,
    civil: CivilTime,
    location: &ResolvedLocation,
    config: &ChartConfig,
) -> Result<ChartReport, SajuError> {
    config.validate()?;

    let moment = correct_to_true_local(
        civil,
        location.location.clone(),
        config.reference_meridian_deg,
        location.source,
    )?;
    let sun_longitude_deg = ephemeris.sun_longitude_deg(moment.universal.to_jd())?;

    let local = moment.true_local;
    let inputs = PillarInputs {
        calendar_year: local.year(),
        calendar_month: local.month(),
        sun_longitude_deg,
        local_jdn: local.julian_day_number(),
        local_hour: local.hour(),
    };
    let chart = resolve_chart(&inputs, config.midnight_policy);

    debug!(
        civil = %moment.civil,
        true_local = %local,
        offset_min = moment.offset_minutes,
        sun_lon = sun_longitude_deg,
        %chart,
        "resolved pillars"
    );

    Ok(ChartReport {
        saju_year: saju_year(inputs.calendar_year, inputs.calendar_month, sun_longitude_deg),
        moment,
        sun_longitude_deg,
        midnight_policy: config.midnight_policy,
        chart,
    })
}

/// Resolve the birth place, then compute its chart.
pub fn resolve_and_compute(
    resolver: &dyn LocationResolver,
    birth: &CivilBirthMoment,
    config: &ChartConfig,
) -> Result<ChartReport, SajuError> {
    let location = resolve_location(resolver, &birth.place, config)?;
    compute_chart(birth.civil, &location, config)
}
