//! Gregorian calendar ↔ Julian Day conversions.
//!
//! The day pillar is a pure function of the Julian Day Number, so these
//! routines are the calendar epoch for the whole engine. Integer arithmetic
//! is used for the day count to keep the sexagenary cycle exact.
//!
//! Source: Meeus, *Astronomical Algorithms*, ch. 7. Public domain.

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Earliest supported Gregorian year.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;

/// Latest supported Gregorian year. Stays inside the solar theory's
/// ±100-century window around J2000 with room for any zone offset.
pub const MAX_SUPPORTED_YEAR: i32 = 9999;

/// Julian Day Number of 1900-01-01, the day-pillar anchor.
pub const EPOCH_1900_JDN: i64 = 2_415_021;

/// Julian Day Number of a Gregorian calendar date.
///
/// January and February count as months 13 and 14 of the prior year, and
/// `B = 2 − A + ⌊A/4⌋` with `A = ⌊Y/100⌋` applies the Gregorian century
/// correction. `⌊365.25·(Y+4716)⌋` and `⌊30.6001·(M+1)⌋` are evaluated as
/// exact integer quotients.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (y, m) = if month <= 2 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (1461 * (y + 4716)).div_euclid(4) + (306_001 * (m + 1)).div_euclid(10_000) + i64::from(day)
        + b
        - 1524
}

/// Julian Date of a calendar date with fractional day.
///
/// `day_frac` = day of month + fraction of the day since 00:00, so
/// `calendar_to_jd(2000, 1, 1.5) == J2000_JD`.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let day = day_frac.floor();
    let jdn = julian_day_number(year, month, day as u32);
    jdn as f64 - 0.5 + (day_frac - day)
}

/// Calendar date of a Julian Date: `(year, month, day_frac)`.
///
/// Inverse of [`calendar_to_jd`] (Meeus 7.3). Gregorian reform handling
/// is kept for completeness; the engine never sees dates before 1900.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
