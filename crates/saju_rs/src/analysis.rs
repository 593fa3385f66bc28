//! Tallies, findings, and compatibility over resolved charts.

use saju_base::{
    CompatibilityResult, Element, ElementTally, FourPillarChart, LifeStage, PatternFinding,
    PositionGod, TenGod, TenGodGroup, TenGodTally, compatibility, detect_patterns, element_tally,
    life_stages, position_gods, ten_god_tally,
};
use serde::Serialize;
use tracing::debug;

use crate::chart::{ChartReport, CivilBirthMoment, resolve_and_compute};
use crate::config::ChartConfig;
use crate::error::SajuError;
use crate::location::LocationResolver;

/// Element and Ten-God tallies of a chart.
pub fn compute_tallies(chart: &FourPillarChart) -> (ElementTally, TenGodTally) {
    (element_tally(chart), ten_god_tally(chart))
}

/// Pattern findings for a chart and its tallies.
pub fn compute_findings(
    chart: &FourPillarChart,
    tallies: &(ElementTally, TenGodTally),
) -> Vec<PatternFinding> {
    detect_patterns(chart, &tallies.0, &tallies.1)
}

/// Score chart `b` against reference chart `a`.
pub fn compute_compatibility(a: &FourPillarChart, b: &FourPillarChart) -> CompatibilityResult {
    compatibility(a, b)
}

/// Dominant element and relations of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DominanceSummary {
    pub element: Element,
    pub god: TenGod,
    pub group: TenGodGroup,
}

/// Everything derived from one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    pub report: ChartReport,
    pub elements: ElementTally,
    pub gods: TenGodTally,
    pub findings: Vec<PatternFinding>,
    pub position_gods: [PositionGod; 4],
    pub life_stages: [LifeStage; 4],
    pub dominance: DominanceSummary,
}

/// Derive tallies, findings, and labels for a resolved chart.
pub fn analyze(report: ChartReport) -> ChartAnalysis {
    let chart = report.chart;
    let tallies = compute_tallies(&chart);
    let findings = compute_findings(&chart, &tallies);
    let (elements, gods) = tallies;

    debug!(%chart, findings = findings.len(), "analyzed chart");

    ChartAnalysis {
        position_gods: position_gods(&chart),
        life_stages: life_stages(&chart),
        dominance: DominanceSummary {
            element: elements.dominant_element(),
            god: gods.dominant_god(),
            group: gods.dominant_group(),
        },
        report,
        elements,
        gods,
        findings,
    }
}

/// Two analyzed charts and their compatibility (B scored against A).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairAnalysis {
    pub a: ChartAnalysis,
    pub b: ChartAnalysis,
    pub compatibility: CompatibilityResult,
}

/// Resolve and analyze both partners in parallel, then score them.
///
/// Either side failing fails the request; no partial pair is returned.
pub fn compute_pair(
    resolver: &dyn LocationResolver,
    a: &CivilBirthMoment,
    b: &CivilBirthMoment,
    config: &ChartConfig,
) -> Result<PairAnalysis, SajuError> {
    let (ra, rb) = rayon::join(
        || resolve_and_compute(resolver, a, config).map(analyze),
        || resolve_and_compute(resolver, b, config).map(analyze),
    );
    let (a, b) = (ra?, rb?);
    let compatibility = compute_compatibility(&a.report.chart, &b.report.chart);
    debug!(
        base = compatibility.base_score,
        score = compatibility.final_score,
        "scored pair"
    );
    Ok(PairAnalysis {
        a,
        b,
        compatibility,
    })
}
