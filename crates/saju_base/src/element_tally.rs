//! Five-element distribution of a chart.
//!
//! Two views are kept side by side:
//! - `visual`: every visible stem and branch counts 1.0 for its own element.
//! - `weighted`: stems count 1.0; each branch is replaced by its hidden
//!   stems at their table weights.
//!
//! Both views sum to 8.0 for any chart.

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, EarthKind, Element};
use crate::hidden_stem::hidden_stems;
use crate::pillar::FourPillarChart;

/// Per-element amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ElementCounts {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementCounts {
    pub const fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn add(&mut self, element: Element, amount: f64) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += amount;
    }

    pub fn total(&self) -> f64 {
        ALL_ELEMENTS.iter().map(|&e| self.get(e)).sum()
    }

    /// Element with the largest amount; ties go to the earlier element in
    /// generating order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.get(e) > self.get(best) {
                best = e;
            }
        }
        best
    }
}

/// Earth amount split into dry and wet subtypes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EarthSplit {
    pub dry: f64,
    pub wet: f64,
}

impl EarthSplit {
    fn add(&mut self, kind: EarthKind, amount: f64) {
        match kind {
            EarthKind::Dry => self.dry += amount,
            EarthKind::Wet => self.wet += amount,
        }
    }

    /// Dry plus wet: equals the plain Earth count.
    pub fn merged(&self) -> f64 {
        self.dry + self.wet
    }
}

/// Element distribution of one chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ElementTally {
    pub visual: ElementCounts,
    pub weighted: ElementCounts,
    pub visual_earth: EarthSplit,
    pub weighted_earth: EarthSplit,
}

impl ElementTally {
    /// Dominant element of the weighted view.
    pub fn dominant_element(&self) -> Element {
        self.weighted.dominant()
    }
}

/// Tally the elements of `chart`.
pub fn element_tally(chart: &FourPillarChart) -> ElementTally {
    let mut tally = ElementTally::default();

    for stem in chart.stems() {
        tally.visual.add(stem.element(), 1.0);
        tally.weighted.add(stem.element(), 1.0);
        if let Some(kind) = stem.earth_kind() {
            tally.visual_earth.add(kind, 1.0);
            tally.weighted_earth.add(kind, 1.0);
        }
    }

    for branch in chart.branches() {
        tally.visual.add(branch.element(), 1.0);
        if let Some(kind) = branch.earth_kind() {
            tally.visual_earth.add(kind, 1.0);
        }
        for hidden in hidden_stems(branch) {
            tally.weighted.add(hidden.stem.element(), hidden.weight);
            if let Some(kind) = hidden.stem.earth_kind() {
                tally.weighted_earth.add(kind, hidden.weight);
            }
        }
    }

    tally
}
