//! Four-pillar resolution from solar longitude and Julian Day Number.
//!
//! - Year: changes at Start of Spring (solar longitude 315°), not January 1.
//! - Month: twelve 30° solar sectors starting at 315° (Tiger month).
//! - Day: the sexagenary cycle counted from the Julian Day Number.
//! - Hour: twelve 2-hour double-hours, the Rat hour straddling midnight.
//!
//! Month and hour stems follow the classical "five tigers" and "five rats"
//! rules: the first month's stem is fixed by the year stem, the first
//! hour's stem by the day stem.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::pillar::{FourPillarChart, StemBranchPair};
use crate::stem::Stem;

/// Solar longitude of Start of Spring, the chart year boundary.
pub const START_OF_SPRING_DEG: f64 = 315.0;

/// Winter solstice; from here until Start of Spring a January/February
/// moment still belongs to the previous chart year.
const WINTER_SOLSTICE_DEG: f64 = 270.0;

/// Width of one solar month sector.
pub const MONTH_SECTOR_DEG: f64 = 30.0;

/// How the 23:00–23:59 window is assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidnightPolicy {
    /// 23:00 starts the next day: day pillar and hour stem both use the
    /// next day.
    #[default]
    EarlyRollover,
    /// 23:00 stays on the current day pillar; only the hour pillar takes
    /// the next day's Rat-hour stem.
    LateMidnight,
}

/// Scalar inputs needed to resolve a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarInputs {
    /// Calendar year of the true-local reading.
    pub calendar_year: i32,
    /// Calendar month (1-12) of the true-local reading.
    pub calendar_month: u32,
    /// Apparent solar longitude at the birth instant, degrees.
    pub sun_longitude_deg: f64,
    /// Julian Day Number of the true-local calendar date.
    pub local_jdn: i64,
    /// Hour (0-23) of the true-local reading.
    pub local_hour: u32,
}

/// Normalize an angle to [0, 360) degrees.
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Chart year for a moment.
///
/// Between January 1 and Start of Spring the Sun runs from about 280° up to
/// 315°; such moments still belong to the previous chart year.
pub fn saju_year(calendar_year: i32, calendar_month: u32, sun_longitude_deg: f64) -> i32 {
    let lon = normalize_360(sun_longitude_deg);
    let before_spring =
        calendar_month <= 2 && (WINTER_SOLSTICE_DEG..START_OF_SPRING_DEG).contains(&lon);
    if before_spring {
        calendar_year - 1
    } else {
        calendar_year
    }
}

/// Year pillar of a chart year. 1984 (and 4 CE) is Gap-Ja.
pub fn year_pillar(saju_year: i32) -> StemBranchPair {
    let n = i64::from(saju_year) - 4;
    StemBranchPair::new(Stem::from_cycle(n), Branch::from_cycle(n))
}

/// Solar month sector, 0 = Tiger month [315°, 345°) .. 11 = Ox month [285°, 315°).
pub fn month_sector(sun_longitude_deg: f64) -> u8 {
    let offset = normalize_360(sun_longitude_deg - START_OF_SPRING_DEG);
    ((offset / MONTH_SECTOR_DEG).floor() as u8).min(11)
}

/// Month pillar from the year stem and solar longitude.
///
/// Tiger-month stem = `(year_stem × 2 + 2) mod 10`; later months advance
/// stem and branch together.
pub fn month_pillar(year_stem: Stem, sun_longitude_deg: f64) -> StemBranchPair {
    let sector = i64::from(month_sector(sun_longitude_deg));
    let first_stem = i64::from(year_stem.index()) * 2 + 2;
    StemBranchPair::new(
        Stem::from_cycle(first_stem + sector),
        Branch::from_cycle(sector + 2),
    )
}

/// Day pillar of a Julian Day Number.
///
/// stem = `(JDN + 9) mod 10`, branch = `(JDN + 1) mod 12`; 1900-01-01
/// (JDN 2415021) is Gap-Sul.
pub fn day_pillar(jdn: i64) -> StemBranchPair {
    StemBranchPair::new(Stem::from_cycle(jdn + 9), Branch::from_cycle(jdn + 1))
}

/// Double-hour branch of a clock hour. 23:00–00:59 is Ja.
pub fn hour_branch(hour: u32) -> Branch {
    Branch::from_cycle((i64::from(hour) + 1) / 2)
}

/// Hour pillar from the governing day stem and clock hour.
///
/// Rat-hour stem = `(day_stem × 2) mod 10`, advanced by the hour branch.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> StemBranchPair {
    let branch = hour_branch(hour);
    let first_stem = i64::from(day_stem.index()) * 2;
    StemBranchPair::new(
        Stem::from_cycle(first_stem + i64::from(branch.index())),
        branch,
    )
}

/// Resolve all four pillars at once.
pub fn resolve_chart(inputs: &PillarInputs, policy: MidnightPolicy) -> FourPillarChart {
    let year_no = saju_year(
        inputs.calendar_year,
        inputs.calendar_month,
        inputs.sun_longitude_deg,
    );
    let year = year_pillar(year_no);
    let month = month_pillar(year.stem, inputs.sun_longitude_deg);

    let late_rat_hour = inputs.local_hour >= 23;
    let next_day = inputs.local_jdn + 1;
    let (day_jdn, hour_jdn) = match (late_rat_hour, policy) {
        (false, _) => (inputs.local_jdn, inputs.local_jdn),
        (true, MidnightPolicy::EarlyRollover) => (next_day, next_day),
        (true, MidnightPolicy::LateMidnight) => (inputs.local_jdn, next_day),
    };

    let day = day_pillar(day_jdn);
    let hour = hour_pillar(day_pillar(hour_jdn).stem, inputs.local_hour);

    FourPillarChart::new(year, month, day, hour)
}
