//! Narrative content lookup.
//!
//! Interpretive text lives outside the engine. Numeric results only ever
//! reach it through [`ContentSource`] keys, so the content schema never
//! leaks into the chart types.
//!
//! Keys used by [`narrate`]:
//! - `identity / <day pillar hangul> / ko`
//! - `patterns / <finding id> / ko`
//! - `career / <dominant ten-god group> / ko`
//! - `lifecycle / <position> / <ten god>`

use saju_base::StemRole;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::analysis::ChartAnalysis;
use crate::error::SajuError;

/// Text shown when a content entry is missing.
pub const PLACEHOLDER: &str = "(no interpretation available)";

/// A read-only store of narrative text.
pub trait ContentSource {
    /// Text at `category / key / subkeys...`, if present.
    fn lookup(&self, category: &str, key: &str, subkeys: &[&str]) -> Option<&str>;
}

/// Content store over a parsed JSON document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonContent {
    root: Value,
}

impl JsonContent {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn from_json_str(text: &str) -> Result<Self, SajuError> {
        serde_json::from_str(text)
            .map(Self::new)
            .map_err(|e| SajuError::InvalidConfig(format!("content JSON: {e}")))
    }
}

impl ContentSource for JsonContent {
    fn lookup(&self, category: &str, key: &str, subkeys: &[&str]) -> Option<&str> {
        let mut node = self.root.get(category)?.get(key)?;
        for sub in subkeys {
            node = node.get(sub)?;
        }
        node.as_str()
    }
}

/// Look up an entry, reporting a miss as [`SajuError::LookupMiss`].
pub fn lookup<'a>(
    content: &'a dyn ContentSource,
    category: &str,
    key: &str,
    subkeys: &[&str],
) -> Result<&'a str, SajuError> {
    content
        .lookup(category, key, subkeys)
        .ok_or_else(|| SajuError::LookupMiss {
            category: category.to_string(),
            key: key.to_string(),
        })
}

/// Look up an entry, degrading to [`PLACEHOLDER`] on a miss.
pub fn lookup_or_placeholder<'a>(
    content: &'a dyn ContentSource,
    category: &str,
    key: &str,
    subkeys: &[&str],
) -> &'a str {
    match lookup(content, category, key, subkeys) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "narrative lookup missed");
            PLACEHOLDER
        }
    }
}

/// One rendered block of narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeEntry {
    pub title: String,
    pub body: String,
}

/// Render narrative for a chart: day pillar, each finding, the career
/// reading of the dominant group, each life stage.
pub fn narrate(analysis: &ChartAnalysis, content: &dyn ContentSource) -> Vec<NarrativeEntry> {
    let day = analysis.report.chart.day();
    let mut entries = vec![NarrativeEntry {
        title: format!("Day pillar {} ({})", day.hanja(), day),
        body: lookup_or_placeholder(content, "identity", &day.hangul(), &["ko"]).to_string(),
    }];

    for finding in &analysis.findings {
        let id = finding.key.id();
        entries.push(NarrativeEntry {
            body: lookup_or_placeholder(content, "patterns", &id, &["ko"]).to_string(),
            title: id,
        });
    }

    let group = analysis.dominance.group.name();
    entries.push(NarrativeEntry {
        title: format!("Career: {group}"),
        body: lookup_or_placeholder(content, "career", group, &["ko"]).to_string(),
    });

    for stage in &analysis.life_stages {
        let role = match stage.role {
            StemRole::DayMaster => "DayMaster",
            StemRole::God(god) => god.name(),
        };
        let ages = match stage.to_age {
            Some(to) => format!("{}-{}", stage.from_age, to),
            None => format!("{}+", stage.from_age),
        };
        entries.push(NarrativeEntry {
            title: format!("Ages {ages}: {role}"),
            body: lookup_or_placeholder(content, "lifecycle", stage.position.name(), &[role])
                .to_string(),
        });
    }

    entries
}
