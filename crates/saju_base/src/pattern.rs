//! Structural pattern rules.
//!
//! A fixed set of predicates over a chart and its tallies. Every rule is
//! independent of the others; each one that fires yields a
//! [`PatternFinding`] carrying the measured values that triggered it.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{ALL_ELEMENTS, Element};
use crate::element_tally::ElementTally;
use crate::pillar::{ALL_POSITIONS, FourPillarChart, PillarPosition, StemBranchPair};
use crate::stem::Stem;
use crate::ten_god::{TenGodGroup, TenGodTally};

/// Wealth group at or above this, with weak support, overwhelms the day stem.
pub const WEALTH_OVERWHELM_MIN: f64 = 3.5;
/// Peer + resource at or below this counts as weak support.
pub const WEAK_SUPPORT_MAX: f64 = 3.0;
/// Authority group at or above this is mixed authority.
pub const MIXED_AUTHORITY_MIN: f64 = 3.0;
/// Weighted element amount at or above this is an excess.
pub const ELEMENT_EXCESS_MIN: f64 = 3.5;
/// Weighted element amount at or below this is isolated.
pub const ELEMENT_ISOLATION_MAX: f64 = 0.5;
/// Weighted water at or above this makes a damp chart.
pub const DAMP_WATER_MIN: f64 = 3.0;

/// Day pillars with a strong, unyielding character (goegang and kin).
pub const SPECIAL_DAY_PILLARS: [StemBranchPair; 6] = [
    StemBranchPair::new(Stem::Gyeong, Branch::Jin),
    StemBranchPair::new(Stem::Im, Branch::Jin),
    StemBranchPair::new(Stem::Mu, Branch::Sul),
    StemBranchPair::new(Stem::Gyeong, Branch::Sul),
    StemBranchPair::new(Stem::Im, Branch::Sul),
    StemBranchPair::new(Stem::Mu, Branch::Jin),
];

/// Name of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKey {
    WealthOverwhelmsDayMaster,
    MixedAuthority,
    SpecialDayPillar,
    ElementalExcess(Element),
    ElementalIsolation(Element),
    /// All four branches of the peach blossom group are present.
    PeachBlossom,
    /// All four branches of the traveling horse group are present.
    TravelingHorse,
    /// All four branches of the flowery canopy group are present.
    FloweryCanopy,
    /// A single star branch chosen by the trine frame of the year or day
    /// branch appears elsewhere in the chart.
    TrineStar(StarGroup),
    DampChart,
    SheepBlade,
}

impl FindingKey {
    /// Stable identifier, e.g. `elemental_excess_fire`.
    pub fn id(&self) -> String {
        match self {
            Self::WealthOverwhelmsDayMaster => "wealth_overwhelms_day_master".into(),
            Self::MixedAuthority => "mixed_authority".into(),
            Self::SpecialDayPillar => "special_day_pillar".into(),
            Self::ElementalExcess(e) => format!("elemental_excess_{}", e.name().to_lowercase()),
            Self::ElementalIsolation(e) => {
                format!("elemental_isolation_{}", e.name().to_lowercase())
            }
            Self::PeachBlossom => StarGroup::PeachBlossom.id().into(),
            Self::TravelingHorse => StarGroup::TravelingHorse.id().into(),
            Self::FloweryCanopy => StarGroup::FloweryCanopy.id().into(),
            Self::TrineStar(group) => format!("trine_star_{}", group.id()),
            Self::DampChart => "damp_chart".into(),
            Self::SheepBlade => "sheep_blade".into(),
        }
    }
}

/// The three fixed four-branch star groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StarGroup {
    /// Ja, O, Myo, Yu.
    PeachBlossom,
    /// In, Sin, Sa, Hae.
    TravelingHorse,
    /// Jin, Sul, Chuk, Mi.
    FloweryCanopy,
}

pub const ALL_STAR_GROUPS: [StarGroup; 3] = [
    StarGroup::PeachBlossom,
    StarGroup::TravelingHorse,
    StarGroup::FloweryCanopy,
];

impl StarGroup {
    pub const fn branches(self) -> [Branch; 4] {
        match self {
            Self::PeachBlossom => [Branch::Ja, Branch::O, Branch::Myo, Branch::Yu],
            Self::TravelingHorse => [Branch::In, Branch::Sin, Branch::Sa, Branch::Hae],
            Self::FloweryCanopy => [Branch::Jin, Branch::Sul, Branch::Chuk, Branch::Mi],
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::PeachBlossom => "peach_blossom",
            Self::TravelingHorse => "traveling_horse",
            Self::FloweryCanopy => "flowery_canopy",
        }
    }

    /// Finding raised when the whole group is present.
    pub const fn key(self) -> FindingKey {
        match self {
            Self::PeachBlossom => FindingKey::PeachBlossom,
            Self::TravelingHorse => FindingKey::TravelingHorse,
            Self::FloweryCanopy => FindingKey::FloweryCanopy,
        }
    }

    /// Star branch of this group for a trine frame.
    ///
    /// Earth never occurs as a frame element and is treated as Wood.
    pub const fn trine_star(self, frame: Element) -> Branch {
        match (self, frame) {
            (Self::PeachBlossom, Element::Water) => Branch::Yu,
            (Self::PeachBlossom, Element::Fire) => Branch::Myo,
            (Self::PeachBlossom, Element::Metal) => Branch::O,
            (Self::PeachBlossom, _) => Branch::Ja,
            (Self::TravelingHorse, Element::Water) => Branch::In,
            (Self::TravelingHorse, Element::Fire) => Branch::Sin,
            (Self::TravelingHorse, Element::Metal) => Branch::Hae,
            (Self::TravelingHorse, _) => Branch::Sa,
            (Self::FloweryCanopy, Element::Water) => Branch::Jin,
            (Self::FloweryCanopy, Element::Fire) => Branch::Sul,
            (Self::FloweryCanopy, Element::Metal) => Branch::Chuk,
            (Self::FloweryCanopy, _) => Branch::Mi,
        }
    }
}

/// A measured quantity a threshold was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Group(TenGodGroup),
    PeerPlusResource,
    WeightedElement(Element),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    AtLeast,
    AtMost,
}

impl Comparison {
    fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::AtLeast => value >= threshold,
            Self::AtMost => value <= threshold,
        }
    }
}

/// Why a finding fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    Threshold {
        metric: Metric,
        value: f64,
        comparison: Comparison,
        threshold: f64,
    },
    DayPillar {
        pillar: StemBranchPair,
    },
    Branch {
        position: PillarPosition,
        branch: Branch,
    },
    /// A star branch derived from `reference` and found at `found_at`.
    Marker {
        reference: PillarPosition,
        marker: Branch,
        found_at: PillarPosition,
    },
}

/// A named pattern with its supporting evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternFinding {
    pub key: FindingKey,
    pub evidence: Vec<Evidence>,
}

/// Everything a rule may read.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub chart: &'a FourPillarChart,
    pub elements: &'a ElementTally,
    pub gods: &'a TenGodTally,
}

type Rule = fn(&RuleContext<'_>) -> Vec<PatternFinding>;

const RULES: [Rule; 8] = [
    wealth_overwhelms,
    mixed_authority,
    special_day_pillar,
    elemental_extremes,
    star_groups,
    trine_stars,
    damp_chart,
    sheep_blade,
];

/// Run every rule and collect the findings, in rule order.
pub fn detect_patterns(
    chart: &FourPillarChart,
    elements: &ElementTally,
    gods: &TenGodTally,
) -> Vec<PatternFinding> {
    let ctx = RuleContext {
        chart,
        elements,
        gods,
    };
    RULES.iter().flat_map(|rule| rule(&ctx)).collect()
}

fn threshold(metric: Metric, value: f64, comparison: Comparison, limit: f64) -> Option<Evidence> {
    comparison.holds(value, limit).then_some(Evidence::Threshold {
        metric,
        value,
        comparison,
        threshold: limit,
    })
}

fn single(key: FindingKey, evidence: Vec<Evidence>) -> Vec<PatternFinding> {
    if evidence.is_empty() {
        Vec::new()
    } else {
        vec![PatternFinding { key, evidence }]
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn wealth_overwhelms(ctx: &RuleContext<'_>) -> Vec<PatternFinding> {
    let wealth = ctx.gods.group(TenGodGroup::Wealth);
    let support = ctx.gods.group(TenGodGroup::Peer) + ctx.gods.group(TenGodGroup::Resource);
    let strong = threshold(
        Metric::Group(TenGodGroup::Wealth),
        wealth,
        Comparison::AtLeast,
        WEALTH_OVERWHELM_MIN,
    );
    let weak = threshold(
        Metric::PeerPlusResource,
        support,
        Comparison::AtMost,
        WEAK_SUPPORT_MAX,
    );
    match (strong, weak) {
        (Some(a), Some(b)) => single(FindingKey::WealthOverwhelmsDayMaster, vec![a, b]),
        _ => Vec::new(),
    }
}

fn mixed_authority(ctx: &RuleContext<'_>) -> Vec<PatternFinding> {
    let evidence = threshold(
        Metric::Group(TenGodGroup::Authority),
        ctx.gods.group(TenGodGroup::Authority),
        Comparison::AtLeast,
        MIXED_AUTHORITY_MIN,
    );
    single(FindingKey::MixedAuthority, evidence.into_iter().collect())
}

fn special_day_pillar(ctx: &RuleContext<'_>) -> Vec<PatternFinding> {
    let day = ctx.chart.day();
    if SPECIAL_DAY_PILLARS.contains(&day) {
        single(
            FindingKey::SpecialDayPillar,
            vec![Evidence::DayPillar { pillar: day }],
        )
    } else {
        Vec::new()
    }
}

fn elemental_extremes(ctx: &RuleContext<'_>) -> Vec<PatternFinding> {
    let mut findings = Vec::new();
    for e in ALL_ELEMENTS {
        let value = ctx.elements.weighted.get(e);
        let metric = Metric::WeightedElement(e);
        if let Some(ev) = threshold(metric, value, Comparison::AtLeast, ELEMENT_EXCESS_MIN) {
            findings.extend(single(FindingKey::ElementalExcess(e), vec![ev]));
        }
        if let Some(ev) = threshold(metric, value, Comparison::AtMost, ELEMENT_ISOLATION_MAX) {
            findings.extend(single(FindingKey::ElementalIsolation(e), vec![ev]));
        }
    }
    findings
}

fn star_groups(ctx: &RuleContext<'_>) -> Vec<PatternFinding> {
    let branches = ctx.chart.branches();
    let mut findings = Vec::new();
    for group in ALL_STAR_GROUPS {
        let members = group.branches();
        if !members.iter().all(|b| branches.contains(b)) {
            continue;
        }
        let evidence = ALL_POSITIONS
            .into_iter()
            .map(|position| (position, ctx.chart.pillar(position).branch))
            .filter(|(_, branch)| members.contains(branch))
            .map(|(position, branch)| Evidence::Branch { position, branch })
            .collect();
        findings.extend(single(group.key(), evidence));
    }
    findings
}

fn trine_stars(ctx: &RuleContext<'_>) -> Vec<PatternFinding> {
    let mut evidence: [Vec<Evidence>; 3] = Default::default();

    for reference in [PillarPosition::Year, PillarPosition::Day] {
        let frame = ctx.chart.pillar(reference).branch.trine_element();
        for found_at in ALL_POSITIONS {
            if found_at == reference {
                continue;
            }
            let branch = ctx.chart.pillar(found_at).branch;
            for (group, out) in ALL_STAR_GROUPS.into_iter().zip(evidence.iter_mut()) {
                let marker = group.trine_star(frame);
                if branch == marker {
                    out.push(Evidence::Marker {
                        reference,
                        marker,
                        found_at,
                    });
                }
            }
        }
    }

    ALL_STAR_GROUPS
        .into_iter()
        .zip(evidence)
        .flat_map(|(group, ev)| single(FindingKey::TrineStar(group), ev))
        .collect()
}

fn damp_chart(ctx: &RuleContext<'_>) -> Vec<PatternFinding> {
    let mut evidence: Vec<Evidence> = threshold(
        Metric::WeightedElement(Element::Water),
        ctx.elements.weighted.water,
        Comparison::AtLeast,
        DAMP_WATER_MIN,
    )
    .into_iter()
    .collect();

    let month = ctx.chart.month().branch;
    if matches!(month, Branch::Hae | Branch::Ja | Branch::Chuk) {
        evidence.push(Evidence::Branch {
            position: PillarPosition::Month,
            branch: month,
        });
    }
    single(FindingKey::DampChart, evidence)
}

/// Blade branch of a yang day stem; yin stems have none.
pub const fn sheep_blade_branch(day_stem: Stem) -> Option<Branch> {
    match day_stem {
        Stem::Gap => Some(Branch::Myo),
        Stem::Byeong | Stem::Mu => Some(Branch::O),
        Stem::Gyeong => Some(Branch::Yu),
        Stem::Im => Some(Branch::Ja),
        _ => None,
    }
}

fn sheep_blade(ctx: &RuleContext<'_>) -> Vec<PatternFinding> {
    let Some(blade) = sheep_blade_branch(ctx.chart.day_master()) else {
        return Vec::new();
    };
    let evidence = [PillarPosition::Day, PillarPosition::Month]
        .into_iter()
        .filter(|&p| ctx.chart.pillar(p).branch == blade)
        .map(|position| Evidence::Branch {
            position,
            branch: blade,
        })
        .collect();
    single(FindingKey::SheepBlade, evidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_tally::element_tally;
    use crate::ten_god::ten_god_tally;

    fn chart(pairs: [(Stem, Branch); 4]) -> FourPillarChart {
        let p = pairs.map(|(s, b)| StemBranchPair::new(s, b));
        FourPillarChart::new(p[0], p[1], p[2], p[3])
    }

    fn detect(c: &FourPillarChart) -> Vec<PatternFinding> {
        detect_patterns(c, &element_tally(c), &ten_god_tally(c))
    }

    fn keys(c: &FourPillarChart) -> Vec<FindingKey> {
        detect(c).into_iter().map(|f| f.key).collect()
    }

    #[test]
    fn special_day_pillar_fires() {
        let c = chart([
            (Stem::Gap, Branch::Ja),
            (Stem::Byeong, Branch::In),
            (Stem::Gyeong, Branch::Jin),
            (Stem::Byeong, Branch::Sul),
        ]);
        let findings = detect(&c);
        let f = findings
            .iter()
            .find(|f| f.key == FindingKey::SpecialDayPillar)
            .unwrap();
        assert_eq!(
            f.evidence,
            vec![Evidence::DayPillar {
                pillar: StemBranchPair::new(Stem::Gyeong, Branch::Jin)
            }]
        );
    }

    #[test]
    fn sheep_blade_on_mu_o_day() {
        // Mu day on O branch.
        let c = chart([
            (Stem::Gi, Branch::Myo),
            (Stem::Byeong, Branch::Ja),
            (Stem::Mu, Branch::O),
            (Stem::Mu, Branch::O),
        ]);
        let k = keys(&c);
        assert!(k.contains(&FindingKey::SheepBlade));
        // Month Ja: damp.
        assert!(k.contains(&FindingKey::DampChart));
        // Metal is absent in the weighted view.
        assert!(k.contains(&FindingKey::ElementalIsolation(Element::Metal)));
        assert!(k.contains(&FindingKey::ElementalExcess(Element::Earth)));
    }

    #[test]
    fn yin_day_has_no_blade() {
        assert_eq!(sheep_blade_branch(Stem::Eul), None);
        assert_eq!(sheep_blade_branch(Stem::Gye), None);
    }

    #[test]
    fn peach_blossom_from_year_trine() {
        // Year Sin (Water trine) → peach blossom Yu, present at hour.
        let c = chart([
            (Stem::Gyeong, Branch::Sin),
            (Stem::Mu, Branch::In),
            (Stem::Gap, Branch::O),
            (Stem::Gye, Branch::Yu),
        ]);
        let findings = detect(&c);
        let peach = findings
            .iter()
            .find(|f| f.key == FindingKey::TrineStar(StarGroup::PeachBlossom))
            .unwrap();
        assert!(peach.evidence.contains(&Evidence::Marker {
            reference: PillarPosition::Year,
            marker: Branch::Yu,
            found_at: PillarPosition::Hour,
        }));
        // Water trine's horse In sits in the month.
        assert!(
            findings
                .iter()
                .any(|f| f.key == FindingKey::TrineStar(StarGroup::TravelingHorse))
        );
        // No group is complete.
        assert!(!findings.iter().any(|f| f.key == FindingKey::PeachBlossom));
        assert!(!findings.iter().any(|f| f.key == FindingKey::TravelingHorse));
    }

    #[test]
    fn marker_ignores_reference_itself() {
        // Year Sul is a Fire trine whose canopy star is Sul itself; no other
        // Sul in the chart, so no canopy. Day Ja (Water) stars Yu/In/Jin:
        // only the horse In in the month matches.
        let c = chart([
            (Stem::Im, Branch::Sul),
            (Stem::Byeong, Branch::In),
            (Stem::Gap, Branch::Ja),
            (Stem::Gyeong, Branch::O),
        ]);
        let k = keys(&c);
        assert!(!k.contains(&FindingKey::TrineStar(StarGroup::FloweryCanopy)));
        assert!(!k.contains(&FindingKey::TrineStar(StarGroup::PeachBlossom)));
        assert!(k.contains(&FindingKey::TrineStar(StarGroup::TravelingHorse)));
    }

    fn group_finding(c: &FourPillarChart, key: FindingKey) -> PatternFinding {
        detect(c).into_iter().find(|f| f.key == key).unwrap()
    }

    fn branch_evidence(c: &FourPillarChart) -> Vec<Evidence> {
        ALL_POSITIONS
            .into_iter()
            .map(|position| Evidence::Branch {
                position,
                branch: c.pillar(position).branch,
            })
            .collect()
    }

    #[test]
    fn full_peach_blossom_group() {
        let c = chart([
            (Stem::Gap, Branch::Ja),
            (Stem::Gyeong, Branch::O),
            (Stem::Jeong, Branch::Myo),
            (Stem::Gye, Branch::Yu),
        ]);
        let f = group_finding(&c, FindingKey::PeachBlossom);
        assert_eq!(f.evidence, branch_evidence(&c));
        let k = keys(&c);
        assert!(!k.contains(&FindingKey::TravelingHorse));
        assert!(!k.contains(&FindingKey::FloweryCanopy));
    }

    #[test]
    fn full_traveling_horse_group() {
        let c = chart([
            (Stem::Byeong, Branch::In),
            (Stem::Im, Branch::Sin),
            (Stem::Gi, Branch::Sa),
            (Stem::Jeong, Branch::Hae),
        ]);
        let f = group_finding(&c, FindingKey::TravelingHorse);
        assert_eq!(f.evidence, branch_evidence(&c));
    }

    #[test]
    fn full_flowery_canopy_group() {
        let c = chart([
            (Stem::Gap, Branch::Jin),
            (Stem::Byeong, Branch::Sul),
            (Stem::Gi, Branch::Chuk),
            (Stem::Sin, Branch::Mi),
        ]);
        let f = group_finding(&c, FindingKey::FloweryCanopy);
        assert_eq!(f.evidence, branch_evidence(&c));
        assert_eq!(f.key.id(), "flowery_canopy");
    }

    #[test]
    fn three_of_four_is_not_a_group() {
        let c = chart([
            (Stem::Gap, Branch::Ja),
            (Stem::Gyeong, Branch::O),
            (Stem::Jeong, Branch::Myo),
            (Stem::Jeong, Branch::Myo),
        ]);
        assert!(!keys(&c).contains(&FindingKey::PeachBlossom));
    }

    #[test]
    fn trine_star_ids() {
        assert_eq!(
            FindingKey::TrineStar(StarGroup::TravelingHorse).id(),
            "trine_star_traveling_horse"
        );
        assert_eq!(FindingKey::PeachBlossom.id(), "peach_blossom");
    }

    // Threshold edges, on hand-built tallies over a chart that triggers no
    // chart-shape rule.

    fn plain_chart() -> FourPillarChart {
        chart([
            (Stem::Eul, Branch::Myo),
            (Stem::Eul, Branch::Myo),
            (Stem::Eul, Branch::Myo),
            (Stem::Eul, Branch::Myo),
        ])
    }

    fn keys_for(elements: ElementTally, gods: TenGodTally) -> Vec<FindingKey> {
        detect_patterns(&plain_chart(), &elements, &gods)
            .into_iter()
            .map(|f| f.key)
            .collect()
    }

    fn gods(friend: f64, wealth: (f64, f64), authority: (f64, f64), resource: f64) -> TenGodTally {
        TenGodTally::from_counts([
            friend,
            0.0,
            0.0,
            0.0,
            wealth.0,
            wealth.1,
            authority.0,
            authority.1,
            0.0,
            resource,
        ])
    }

    fn balanced_elements() -> ElementTally {
        let even = crate::element_tally::ElementCounts {
            wood: 1.6,
            fire: 1.6,
            earth: 1.6,
            metal: 1.6,
            water: 1.6,
        };
        ElementTally {
            weighted: even,
            visual: even,
            ..ElementTally::default()
        }
    }

    #[test]
    fn wealth_overwhelms_at_exact_limits() {
        let k = keys_for(balanced_elements(), gods(1.5, (2.0, 1.5), (0.0, 0.0), 1.5));
        assert!(k.contains(&FindingKey::WealthOverwhelmsDayMaster));
    }

    #[test]
    fn wealth_overwhelms_just_past_limits() {
        let below = keys_for(balanced_elements(), gods(1.5, (2.0, 1.49), (0.0, 0.0), 1.5));
        assert!(!below.contains(&FindingKey::WealthOverwhelmsDayMaster));
        let supported = keys_for(balanced_elements(), gods(1.5, (2.0, 1.5), (0.0, 0.0), 1.51));
        assert!(!supported.contains(&FindingKey::WealthOverwhelmsDayMaster));
    }

    #[test]
    fn mixed_authority_at_exact_limit() {
        let at = keys_for(balanced_elements(), gods(0.0, (0.0, 0.0), (1.0, 2.0), 0.0));
        assert!(at.contains(&FindingKey::MixedAuthority));
        let below = keys_for(balanced_elements(), gods(0.0, (0.0, 0.0), (1.0, 1.99), 0.0));
        assert!(!below.contains(&FindingKey::MixedAuthority));
    }

    #[test]
    fn element_excess_at_exact_limit() {
        let mut elements = balanced_elements();
        elements.weighted.fire = ELEMENT_EXCESS_MIN;
        let at = keys_for(elements, TenGodTally::default());
        assert!(at.contains(&FindingKey::ElementalExcess(Element::Fire)));

        elements.weighted.fire = 3.49;
        let below = keys_for(elements, TenGodTally::default());
        assert!(!below.contains(&FindingKey::ElementalExcess(Element::Fire)));
    }

    #[test]
    fn element_isolation_at_exact_limit() {
        let mut elements = balanced_elements();
        elements.weighted.metal = ELEMENT_ISOLATION_MAX;
        let at = keys_for(elements, TenGodTally::default());
        assert!(at.contains(&FindingKey::ElementalIsolation(Element::Metal)));

        elements.weighted.metal = 0.51;
        let above = keys_for(elements, TenGodTally::default());
        assert!(!above.contains(&FindingKey::ElementalIsolation(Element::Metal)));
    }

    #[test]
    fn wealth_overwhelms_requires_both_conditions() {
        // Gap day surrounded by earth: wealth high, support low.
        let c = chart([
            (Stem::Mu, Branch::Sul),
            (Stem::Gi, Branch::Chuk),
            (Stem::Gap, Branch::Jin),
            (Stem::Mu, Branch::Mi),
        ]);
        let findings = detect(&c);
        let f = findings
            .iter()
            .find(|f| f.key == FindingKey::WealthOverwhelmsDayMaster)
            .unwrap();
        assert_eq!(f.evidence.len(), 2);
        match f.evidence[0] {
            Evidence::Threshold { value, .. } => assert!(value >= WEALTH_OVERWHELM_MIN),
            _ => panic!("expected threshold evidence"),
        }
    }

    #[test]
    fn mixed_authority_fires() {
        // Gap day, metal everywhere.
        let c = chart([
            (Stem::Gyeong, Branch::Sin),
            (Stem::Sin, Branch::Yu),
            (Stem::Gap, Branch::Yu),
            (Stem::Gyeong, Branch::Sin),
        ]);
        assert!(keys(&c).contains(&FindingKey::MixedAuthority));
    }

    #[test]
    fn finding_ids() {
        assert_eq!(
            FindingKey::ElementalExcess(Element::Fire).id(),
            "elemental_excess_fire"
        );
        assert_eq!(FindingKey::DampChart.id(), "damp_chart");
    }

    #[test]
    fn detection_is_deterministic() {
        let c = chart([
            (Stem::Gap, Branch::Ja),
            (Stem::Byeong, Branch::In),
            (Stem::Gyeong, Branch::Jin),
            (Stem::Byeong, Branch::Sul),
        ]);
        assert_eq!(detect(&c), detect(&c));
    }
}
