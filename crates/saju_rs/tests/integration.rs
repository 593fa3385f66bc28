//! End-to-end tests: place name and civil time in, chart and scores out.

use proptest::prelude::*;
use saju_rs::*;

fn birth(text: &str, place: &str) -> CivilBirthMoment {
    CivilBirthMoment::new(text.parse().unwrap(), place)
}

fn chart_of(text: &str, place: &str, config: &ChartConfig) -> FourPillarChart {
    resolve_and_compute(&StaticGazetteer::default(), &birth(text, place), config)
        .unwrap()
        .chart
}

#[test]
fn seoul_2000_new_year() {
    let chart = chart_of("2000-01-01T12:00", "Seoul", &ChartConfig::default());
    assert_eq!(chart.to_string(), "Gi-Myo Byeong-Ja Mu-O Mu-O");
}

#[test]
fn start_of_spring_2024_in_seoul() {
    // Sun reaches 315° near 2024-02-04 08:21 UT = 17:21 KST.
    let before = chart_of("2024-02-04T16:00", "Seoul", &ChartConfig::default());
    let after = chart_of("2024-02-04T19:00", "Seoul", &ChartConfig::default());
    assert_eq!(before.year(), StemBranchPair::new(Stem::Gye, Branch::Myo));
    assert_eq!(before.month(), StemBranchPair::new(Stem::Eul, Branch::Chuk));
    assert_eq!(after.year(), StemBranchPair::new(Stem::Gap, Branch::Jin));
    assert_eq!(after.month(), StemBranchPair::new(Stem::Byeong, Branch::In));
    assert_eq!(before.day(), after.day());
}

#[test]
fn late_evening_policies() {
    // 2000-01-01 23:50 KST is 23:18 true local: inside the late Rat hour.
    let early = chart_of("2000-01-01T23:50", "Seoul", &ChartConfig::default());
    let late = chart_of(
        "2000-01-01T23:50",
        "Seoul",
        &ChartConfig {
            midnight_policy: MidnightPolicy::LateMidnight,
            ..ChartConfig::default()
        },
    );
    assert_eq!(early.day(), StemBranchPair::new(Stem::Gi, Branch::Mi));
    assert_eq!(late.day(), StemBranchPair::new(Stem::Mu, Branch::O));
    assert_eq!(early.hour(), StemBranchPair::new(Stem::Gap, Branch::Ja));
    assert_eq!(late.hour(), early.hour());
    assert_eq!(early.year(), late.year());
}

#[test]
fn true_local_time_moves_hour_across_boundary() {
    // 13:10 KST in Seoul is 12:38 true local: still the Horse hour.
    let chart = chart_of("2000-01-01T13:10", "Seoul", &ChartConfig::default());
    assert_eq!(chart.hour().branch, Branch::O);
}

#[test]
fn unknown_place_without_fallback() {
    let err = resolve_and_compute(
        &StaticGazetteer::default(),
        &birth("2000-01-01T12:00", "Atlantis"),
        &ChartConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SajuError::LocationUnresolved { .. }));
}

#[test]
fn unknown_place_with_fallback() {
    let config = ChartConfig {
        fallback_location: Some(GeoLocation::new(37.5665, 126.978, "Asia/Seoul", 540)),
        ..ChartConfig::default()
    };
    let report = resolve_and_compute(
        &StaticGazetteer::default(),
        &birth("2000-01-01T12:00", "Atlantis"),
        &config,
    )
    .unwrap();
    assert_eq!(report.moment.source, LocationSource::Fallback);
    assert_eq!(report.chart.to_string(), "Gi-Myo Byeong-Ja Mu-O Mu-O");
}

#[test]
fn report_serializes() {
    let report = resolve_and_compute(
        &StaticGazetteer::default(),
        &birth("2000-01-01T12:00", "Seoul"),
        &ChartConfig::default(),
    )
    .unwrap();
    let json = serde_json::to_value(analyze(report)).unwrap();
    assert_eq!(json["report"]["saju_year"], 1999);
    assert_eq!(json["report"]["moment"]["source"], "resolved");
    assert!(json["findings"].as_array().unwrap().len() >= 1);
    assert_eq!(json["gods"].as_object().unwrap().len(), 10);
}

#[test]
fn narrative_falls_back_to_placeholder() {
    let report = resolve_and_compute(
        &StaticGazetteer::default(),
        &birth("2000-01-01T12:00", "Seoul"),
        &ChartConfig::default(),
    )
    .unwrap();
    let analysis = analyze(report);
    let content = JsonContent::from_json_str(r#"{"identity": {"무오": {"ko": "text"}}}"#).unwrap();
    let entries = narrate(&analysis, &content);
    assert_eq!(entries[0].body, "text");
    assert!(entries[1..].iter().all(|e| e.body == PLACEHOLDER));
    // Day pillar + findings + career + 4 life stages.
    assert_eq!(entries.len(), 1 + analysis.findings.len() + 1 + 4);
}

#[test]
fn narrative_includes_career_of_dominant_group() {
    let report = resolve_and_compute(
        &StaticGazetteer::default(),
        &birth("2000-01-01T12:00", "Seoul"),
        &ChartConfig::default(),
    )
    .unwrap();
    let analysis = analyze(report);
    let group = analysis.dominance.group.name();
    let content = JsonContent::new(serde_json::json!({
        "career": { group: { "ko": "career text" } }
    }));
    let entries = narrate(&analysis, &content);
    let career = &entries[1 + analysis.findings.len()];
    assert_eq!(career.title, format!("Career: {group}"));
    assert_eq!(career.body, "career text");
}

proptest! {
    #[test]
    fn any_seoul_birth_resolves(
        year in 1901i32..2099,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let civil = CivilTime::new(year, month, day, hour, minute, 0).unwrap();
        let birth = CivilBirthMoment::new(civil, "Seoul");
        let report =
            resolve_and_compute(&StaticGazetteer::default(), &birth, &ChartConfig::default())
                .unwrap();
        prop_assert!((0.0..360.0).contains(&report.sun_longitude_deg));
        let local = report.moment.true_local;
        let expected_jdn = if local.hour() >= 23 {
            local.julian_day_number() + 1
        } else {
            local.julian_day_number()
        };
        prop_assert_eq!(report.chart.day(), saju_base::day_pillar(expected_jdn));
        prop_assert!((report.saju_year - year).abs() <= 1);
    }
}
