//! Apparent geocentric ecliptic longitude of the Sun.
//!
//! The solar-term boundaries that delimit chart years and months are fixed
//! multiples of 15° in solar longitude, so the engine only needs the Sun's
//! apparent longitude at a given instant.
//!
//! [`MeeusSun`] is the built-in closed-form provider (low-precision solar
//! theory, accuracy ≈ 0.01°, i.e. about a quarter hour of solar motion).
//! External ephemerides plug in through [`SolarEphemeris`].
//!
//! Source: Meeus, *Astronomical Algorithms*, ch. 25. Public domain.

use crate::error::TimeError;
use crate::julian::{J2000_JD, jd_to_centuries};

/// A source of solar ecliptic longitudes.
pub trait SolarEphemeris {
    /// Apparent ecliptic longitude of the Sun in degrees, in [0, 360).
    ///
    /// `jd_ut` is a Julian Date on the UT scale. Failures must be reported
    /// as [`TimeError::ComputationUnavailable`], never papered over.
    fn sun_longitude_deg(&self, jd_ut: f64) -> Result<f64, TimeError>;
}

/// Closed-form solar theory. Needs no kernel files and cannot fail for
/// finite input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeeusSun;

impl SolarEphemeris for MeeusSun {
    fn sun_longitude_deg(&self, jd_ut: f64) -> Result<f64, TimeError> {
        apparent_sun_longitude_deg(jd_ut)
    }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 + 360.0 rounds to 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Apparent solar longitude (degrees) at Julian Date `jd`.
///
/// L0 = 280.46646 + 36000.76983·T + 0.0003032·T²
/// M  = 357.52911 + 35999.05029·T − 0.0001537·T²
/// C  = (1.914602 − 0.004817·T − 0.000014·T²)·sin M
///    + (0.019993 − 0.000101·T)·sin 2M + 0.000289·sin 3M
/// λ  = L0 + C − 0.00569 − 0.00478·sin Ω,  Ω = 125.04 − 1934.136·T
///
/// UT is used in place of TT; ΔT shifts the result by under 0.002° for
/// dates since 1900.
pub fn apparent_sun_longitude_deg(jd: f64) -> Result<f64, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::ComputationUnavailable(format!(
            "non-finite Julian Date {jd}"
        )));
    }
    // Centuries beyond this range make the polynomial meaningless.
    if (jd - J2000_JD).abs() > 100.0 * 36_525.0 {
        return Err(TimeError::ComputationUnavailable(format!(
            "Julian Date {jd} outside the solar theory's validity"
        )));
    }

    let t = jd_to_centuries(jd);
    let t2 = t * t;

    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t2;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t2).to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = l0 + c - 0.005_69 - 0.004_78 * omega.sin();

    Ok(normalize_360(apparent))
}

/// Smallest angular separation between two longitudes, in degrees [0, 180].
pub fn angular_distance_deg(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { 360.0 - d } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_wraps_360() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(-1e-17), 0.0);
    }

    #[test]
    fn longitude_in_range() {
        for i in 0..400 {
            let jd = 2_415_020.5 + f64::from(i) * 91.3;
            let lon = apparent_sun_longitude_deg(jd).unwrap();
            assert!((0.0..360.0).contains(&lon), "jd {jd}: {lon}");
        }
    }

    #[test]
    fn meeus_example_25a() {
        // 1992-10-13 0h TD: apparent longitude 199.90895 deg (Meeus ex. 25.a)
        let lon = apparent_sun_longitude_deg(2_448_908.5).unwrap();
        assert!(
            angular_distance_deg(lon, 199.908_95) < 0.001,
            "got {lon}"
        );
    }

    #[test]
    fn non_finite_is_unavailable() {
        let err = apparent_sun_longitude_deg(f64::NAN).unwrap_err();
        assert!(matches!(err, TimeError::ComputationUnavailable(_)));
    }

    #[test]
    fn far_future_is_unavailable() {
        assert!(apparent_sun_longitude_deg(J2000_JD + 200.0 * 36_525.0).is_err());
    }

    #[test]
    fn angular_distance_across_zero() {
        assert!((angular_distance_deg(359.5, 0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn trait_matches_free_function() {
        let jd = 2_460_000.5;
        assert_eq!(
            MeeusSun.sun_longitude_deg(jd).unwrap(),
            apparent_sun_longitude_deg(jd).unwrap()
        );
    }
}
