//! Ten-God (sipseong) classification.
//!
//! Every stem in a chart stands in one of ten relations to the day stem,
//! determined by the element distance `(target − day) mod 5` and whether
//! the two stems share polarity. The ten relations roll up into five
//! groups (peer, output, wealth, authority, resource).

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::hidden_stem::{hidden_stems, main_stem};
use crate::pillar::{FourPillarChart, PillarPosition};
use crate::stem::{ALL_STEMS, Stem};

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

/// The ten relations of a stem to the day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum TenGod {
    /// Same element, same polarity (比肩).
    Friend,
    /// Same element, opposite polarity (劫財).
    RobWealth,
    /// Day element produces it, same polarity (食神).
    EatingGod,
    /// Day element produces it, opposite polarity (傷官).
    HurtingOfficer,
    /// Day element controls it, same polarity (偏財).
    IndirectWealth,
    /// Day element controls it, opposite polarity (正財).
    DirectWealth,
    /// It controls the day element, same polarity (七殺).
    SevenKillings,
    /// It controls the day element, opposite polarity (正官).
    DirectOfficer,
    /// It produces the day element, same polarity (偏印).
    IndirectResource,
    /// It produces the day element, opposite polarity (正印).
    DirectResource,
}

/// All 10 relations in canonical order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Friend,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

/// The five relation groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum TenGodGroup {
    Peer,
    Output,
    Wealth,
    Authority,
    Resource,
}

/// All 5 groups in canonical order.
pub const ALL_TEN_GOD_GROUPS: [TenGodGroup; 5] = [
    TenGodGroup::Peer,
    TenGodGroup::Output,
    TenGodGroup::Wealth,
    TenGodGroup::Authority,
    TenGodGroup::Resource,
];

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "RobWealth",
            Self::EatingGod => "EatingGod",
            Self::HurtingOfficer => "HurtingOfficer",
            Self::IndirectWealth => "IndirectWealth",
            Self::DirectWealth => "DirectWealth",
            Self::SevenKillings => "SevenKillings",
            Self::DirectOfficer => "DirectOfficer",
            Self::IndirectResource => "IndirectResource",
            Self::DirectResource => "DirectResource",
        }
    }

    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Friend => "比肩",
            Self::RobWealth => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "七殺",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    /// 0-based index in canonical order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Friend => 0,
            Self::RobWealth => 1,
            Self::EatingGod => 2,
            Self::HurtingOfficer => 3,
            Self::IndirectWealth => 4,
            Self::DirectWealth => 5,
            Self::SevenKillings => 6,
            Self::DirectOfficer => 7,
            Self::IndirectResource => 8,
            Self::DirectResource => 9,
        }
    }

    pub const fn group(self) -> TenGodGroup {
        ALL_TEN_GOD_GROUPS[(self.index() / 2) as usize]
    }
}

impl TenGodGroup {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "Peer",
            Self::Output => "Output",
            Self::Wealth => "Wealth",
            Self::Authority => "Authority",
            Self::Resource => "Resource",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Peer => 0,
            Self::Output => 1,
            Self::Wealth => 2,
            Self::Authority => 3,
            Self::Resource => 4,
        }
    }
}

/// Relation of `target` to `day_stem`.
pub const fn classify(day_stem: Stem, target: Stem) -> TenGod {
    let day_el = day_stem.element().index();
    let target_el = target.element().index();
    let distance = (target_el + 5 - day_el) % 5;
    let opposite = (target.index() % 2 != day_stem.index() % 2) as u8;
    ALL_TEN_GODS[(distance * 2 + opposite) as usize]
}

const fn build_table() -> [[TenGod; 10]; 10] {
    let mut table = [[TenGod::Friend; 10]; 10];
    let mut d = 0;
    while d < 10 {
        let mut t = 0;
        while t < 10 {
            table[d][t] = classify(ALL_STEMS[d], ALL_STEMS[t]);
            t += 1;
        }
        d += 1;
    }
    table
}

/// `TEN_GOD_TABLE[day][target]`, indexed by stem index.
pub const TEN_GOD_TABLE: [[TenGod; 10]; 10] = build_table();

/// Table lookup equivalent of [`classify`].
pub const fn ten_god(day_stem: Stem, target: Stem) -> TenGod {
    TEN_GOD_TABLE[day_stem.index() as usize][target.index() as usize]
}

// ---------------------------------------------------------------------------
// Tally
// ---------------------------------------------------------------------------

/// Weighted count of each relation in a chart.
///
/// Visible non-day stems add 1.0, hidden stems of all four branches add
/// their table weight, so raw counts always total 7.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TenGodTally {
    counts: [f64; 10],
}

impl TenGodTally {
    /// Tally from raw counts given in [`ALL_TEN_GODS`] order.
    pub const fn from_counts(counts: [f64; 10]) -> Self {
        Self { counts }
    }

    pub fn get(&self, god: TenGod) -> f64 {
        self.counts[god.index() as usize]
    }

    fn add(&mut self, god: TenGod, amount: f64) {
        self.counts[god.index() as usize] += amount;
    }

    /// Sum of the two relations in `group`.
    pub fn group(&self, group: TenGodGroup) -> f64 {
        let i = group.index() as usize * 2;
        self.counts[i] + self.counts[i + 1]
    }

    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Largest relation; ties go to canonical order.
    pub fn dominant_god(&self) -> TenGod {
        let mut best = TenGod::Friend;
        for god in ALL_TEN_GODS {
            if self.get(god) > self.get(best) {
                best = god;
            }
        }
        best
    }

    /// Largest group; ties go to canonical order.
    pub fn dominant_group(&self) -> TenGodGroup {
        let mut best = TenGodGroup::Peer;
        for group in ALL_TEN_GOD_GROUPS {
            if self.group(group) > self.group(best) {
                best = group;
            }
        }
        best
    }
}

impl Serialize for TenGodTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_TEN_GODS.len()))?;
        for god in ALL_TEN_GODS {
            map.serialize_entry(god.name(), &self.get(god))?;
        }
        map.end()
    }
}

/// Tally the relations of every stem in `chart` to its day stem.
pub fn ten_god_tally(chart: &FourPillarChart) -> TenGodTally {
    let day = chart.day_master();
    let mut tally = TenGodTally::default();

    for (position, pair) in chart.pillars() {
        if position != PillarPosition::Day {
            tally.add(ten_god(day, pair.stem), 1.0);
        }
        for hidden in hidden_stems(pair.branch) {
            tally.add(ten_god(day, hidden.stem), hidden.weight);
        }
    }

    tally
}

// ---------------------------------------------------------------------------
// Per-position labels
// ---------------------------------------------------------------------------

/// Role of a visible stem: the day stem itself or a relation to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StemRole {
    DayMaster,
    God(TenGod),
}

/// Labels of one pillar: its stem's role and its branch's main-stem relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PositionGod {
    pub position: PillarPosition,
    pub stem: StemRole,
    pub branch: TenGod,
}

/// Relation labels of all four pillars, in chart order.
pub fn position_gods(chart: &FourPillarChart) -> [PositionGod; 4] {
    let day = chart.day_master();
    chart.pillars().map(|(position, pair)| PositionGod {
        position,
        stem: stem_role(day, position, pair.stem),
        branch: ten_god(day, main_stem(pair.branch)),
    })
}

fn stem_role(day: Stem, position: PillarPosition, stem: Stem) -> StemRole {
    if position == PillarPosition::Day {
        StemRole::DayMaster
    } else {
        StemRole::God(ten_god(day, stem))
    }
}

// ---------------------------------------------------------------------------
// Life stages
// ---------------------------------------------------------------------------

/// One of the four life periods read from the pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LifeStage {
    pub position: PillarPosition,
    /// First age of the period.
    pub from_age: u8,
    /// Last age of the period; `None` for the open-ended final stage.
    pub to_age: Option<u8>,
    pub stem: Stem,
    pub role: StemRole,
}

const STAGE_AGES: [(u8, Option<u8>); 4] = [(0, Some(19)), (20, Some(39)), (40, Some(59)), (60, None)];

/// Year pillar governs ages 0-19, month 20-39, day 40-59, hour 60+.
pub fn life_stages(chart: &FourPillarChart) -> [LifeStage; 4] {
    let day = chart.day_master();
    let pillars = chart.pillars();
    std::array::from_fn(|i| {
        let (position, pair) = pillars[i];
        let (from_age, to_age) = STAGE_AGES[i];
        LifeStage {
            position,
            from_age,
            to_age,
            stem: pair.stem,
            role: stem_role(day, position, pair.stem),
        }
    })
}
