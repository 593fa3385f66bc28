//! Four-pillar chart pipeline.
//!
//! Ties the time base ([`saju_time`]) and the chart tables ([`saju_base`])
//! into request-level operations:
//!
//! - [`compute_chart`]: civil moment + location → [`ChartReport`]
//! - [`compute_tallies`], [`compute_findings`]: derivations of a chart
//! - [`compute_compatibility`] and [`compute_pair`]: scoring two charts
//! - [`narrate`]: narrative text through a [`ContentSource`]
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! let birth = CivilBirthMoment::new("1990-05-17T08:30".parse()?, "Seoul");
//! let report = resolve_and_compute(&StaticGazetteer::default(), &birth, &ChartConfig::default())?;
//! println!("{}", report.chart);
//! ```

pub mod analysis;
pub mod chart;
pub mod config;
pub mod content;
pub mod error;
pub mod location;

pub use analysis::{
    ChartAnalysis, DominanceSummary, PairAnalysis, analyze, compute_compatibility,
    compute_findings, compute_pair, compute_tallies,
};
pub use chart::{
    ChartReport, CivilBirthMoment, compute_chart, compute_chart_with, resolve_and_compute,
};
pub use config::ChartConfig;
pub use content::{
    ContentSource, JsonContent, NarrativeEntry, PLACEHOLDER, lookup, lookup_or_placeholder,
    narrate,
};
pub use error::SajuError;
pub use location::{
    BUILTIN_CITIES, CityEntry, LocationError, LocationResolver, ResolvedLocation,
    StaticGazetteer, resolve_location,
};

// Re-export the value types callers handle directly.
pub use saju_base::{
    Branch, CompatibilityResult, Element, ElementTally, FindingKey, FourPillarChart,
    MidnightPolicy, PatternFinding, PillarPosition, Stem, StemBranchPair, TenGod, TenGodGroup,
    TenGodTally,
};
pub use saju_time::{CivilTime, GeoLocation, LocationSource, MeeusSun, SolarEphemeris};
