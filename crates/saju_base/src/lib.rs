//! Stems, branches, and the pure derivations of a four-pillar chart.
//!
//! This crate provides:
//! - The 10 stems, 12 branches, 5 elements and their fixed relations
//! - Hidden-stem weights per branch
//! - Pillar resolution from solar longitude and Julian Day Number
//! - Element and Ten-God tallies
//! - Threshold pattern rules with structured evidence
//! - Compatibility scoring between two charts
//!
//! Everything here is table-driven and allocation-light; no I/O.

pub mod branch;
pub mod compatibility;
pub mod element;
pub mod element_tally;
pub mod hidden_stem;
pub mod pattern;
pub mod pillar;
pub mod resolver;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch};
pub use compatibility::{
    Adjustment, BranchRelation, CompatibilityResult, STEM_AFFINITY, base_score, branch_relations,
    compatibility,
};
pub use element::{ALL_ELEMENTS, EarthKind, Element, Polarity};
pub use element_tally::{EarthSplit, ElementCounts, ElementTally, element_tally};
pub use hidden_stem::{HiddenStem, hidden_stems, main_stem};
pub use pattern::{
    ALL_STAR_GROUPS, Comparison, Evidence, FindingKey, Metric, PatternFinding, RuleContext,
    StarGroup, detect_patterns,
};
pub use pillar::{ALL_POSITIONS, FourPillarChart, PillarPosition, StemBranchPair};
pub use resolver::{
    MidnightPolicy, PillarInputs, START_OF_SPRING_DEG, day_pillar, hour_branch, hour_pillar,
    month_pillar, month_sector, resolve_chart, saju_year, year_pillar,
};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{
    ALL_TEN_GOD_GROUPS, ALL_TEN_GODS, LifeStage, PositionGod, StemRole, TEN_GOD_TABLE, TenGod,
    TenGodGroup, TenGodTally, classify, life_stages, position_gods, ten_god, ten_god_tally,
};
