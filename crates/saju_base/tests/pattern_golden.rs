//! Golden-value tests for pattern detection on hand-checked charts.

use saju_base::{
    ALL_POSITIONS, Branch, Element, Evidence, FindingKey, FourPillarChart, Metric,
    PillarPosition, StarGroup, Stem, StemBranchPair, TenGodGroup, detect_patterns, element_tally,
    ten_god_tally,
};

fn chart(pairs: [(Stem, Branch); 4]) -> FourPillarChart {
    let p = pairs.map(|(s, b)| StemBranchPair::new(s, b));
    FourPillarChart::new(p[0], p[1], p[2], p[3])
}

fn findings(c: &FourPillarChart) -> Vec<(FindingKey, Vec<Evidence>)> {
    detect_patterns(c, &element_tally(c), &ten_god_tally(c))
        .into_iter()
        .map(|f| (f.key, f.evidence))
        .collect()
}

#[test]
fn seoul_2000_chart() {
    // Gi-Myo, Byeong-Ja, Mu-O, Mu-O
    let c = chart([
        (Stem::Gi, Branch::Myo),
        (Stem::Byeong, Branch::Ja),
        (Stem::Mu, Branch::O),
        (Stem::Mu, Branch::O),
    ]);
    let keys: Vec<FindingKey> = findings(&c).into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![
            FindingKey::ElementalExcess(Element::Earth),
            FindingKey::ElementalIsolation(Element::Metal),
            // Year Myo (Wood frame) → Ja in the month; day O (Fire frame) → Myo in the year.
            FindingKey::TrineStar(StarGroup::PeachBlossom),
            FindingKey::DampChart,
            FindingKey::SheepBlade,
        ]
    );
}

#[test]
fn sheep_blade_evidence_lists_both_positions() {
    // Gap day with Myo in day and month.
    let c = chart([
        (Stem::Byeong, Branch::In),
        (Stem::Jeong, Branch::Myo),
        (Stem::Gap, Branch::Myo),
        (Stem::Byeong, Branch::In),
    ]);
    let all = findings(&c);
    let (_, evidence) = all
        .iter()
        .find(|(k, _)| *k == FindingKey::SheepBlade)
        .unwrap();
    assert_eq!(
        evidence,
        &vec![
            Evidence::Branch {
                position: PillarPosition::Day,
                branch: Branch::Myo
            },
            Evidence::Branch {
                position: PillarPosition::Month,
                branch: Branch::Myo
            },
        ]
    );
}

#[test]
fn damp_chart_from_water_amount() {
    // Summer month, but water-heavy stems and branches.
    let c = chart([
        (Stem::Im, Branch::Ja),
        (Stem::Gap, Branch::O),
        (Stem::Im, Branch::Ja),
        (Stem::Gye, Branch::Hae),
    ]);
    let all = findings(&c);
    let (_, evidence) = all
        .iter()
        .find(|(k, _)| *k == FindingKey::DampChart)
        .unwrap();
    assert_eq!(evidence.len(), 1);
    assert!(matches!(
        evidence[0],
        Evidence::Threshold {
            metric: Metric::WeightedElement(Element::Water),
            ..
        }
    ));
}

#[test]
fn mixed_authority_threshold_evidence() {
    let c = chart([
        (Stem::Gyeong, Branch::Sin),
        (Stem::Sin, Branch::Yu),
        (Stem::Gap, Branch::Yu),
        (Stem::Gyeong, Branch::Sin),
    ]);
    let all = findings(&c);
    let (_, evidence) = all
        .iter()
        .find(|(k, _)| *k == FindingKey::MixedAuthority)
        .unwrap();
    match evidence[0] {
        Evidence::Threshold { metric, value, .. } => {
            assert_eq!(metric, Metric::Group(TenGodGroup::Authority));
            assert!(value >= 3.0);
        }
        ref other => panic!("unexpected evidence {other:?}"),
    }
}

#[test]
fn complete_canopy_group_fires() {
    // Jin, Sul, Chuk, Mi: the whole flowery canopy group.
    let c = chart([
        (Stem::Gap, Branch::Jin),
        (Stem::Byeong, Branch::Sul),
        (Stem::Gi, Branch::Chuk),
        (Stem::Sin, Branch::Mi),
    ]);
    let all = findings(&c);
    let (_, evidence) = all
        .iter()
        .find(|(k, _)| *k == FindingKey::FloweryCanopy)
        .unwrap();
    let positions: Vec<PillarPosition> = evidence
        .iter()
        .map(|ev| match ev {
            Evidence::Branch { position, .. } => *position,
            other => panic!("unexpected evidence {other:?}"),
        })
        .collect();
    assert_eq!(positions, ALL_POSITIONS.to_vec());
    assert!(!all.iter().any(|(k, _)| *k == FindingKey::PeachBlossom));
    assert!(!all.iter().any(|(k, _)| *k == FindingKey::TravelingHorse));
}
