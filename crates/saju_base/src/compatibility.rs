//! Compatibility scoring between two charts.
//!
//! The base score comes from how partner B's day stem relates to partner
//! A's; branch relations between the two day branches and the two month
//! branches then adjust it. The final score is clamped to [0, 100].

use serde::Serialize;

use crate::branch::Branch;
use crate::pillar::{FourPillarChart, PillarPosition};
use crate::stem::{ALL_STEMS, Stem};
use crate::ten_god::{TenGod, classify};

/// Base score when the affinity table has no entry for a stem pair.
pub const DEFAULT_BASE_SCORE: i32 = 50;
/// Base score of the five stem combinations.
pub const STEM_COMBINATION_SCORE: i32 = 90;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

pub const HARMONY_DELTA: i32 = 10;
pub const CLASH_DELTA: i32 = -15;
pub const PUNISHMENT_DELTA: i32 = -10;

/// Affinity of a partner stem standing in `god` relation to the reference
/// stem. Rob-wealth has no entry.
const fn relation_affinity(god: TenGod) -> Option<i32> {
    match god {
        TenGod::Friend => Some(60),
        TenGod::RobWealth => None,
        TenGod::EatingGod => Some(70),
        TenGod::HurtingOfficer => Some(55),
        TenGod::IndirectWealth => Some(65),
        TenGod::DirectWealth => Some(75),
        TenGod::SevenKillings => Some(40),
        TenGod::DirectOfficer => Some(80),
        TenGod::IndirectResource => Some(55),
        TenGod::DirectResource => Some(75),
    }
}

const fn build_affinity() -> [[Option<i32>; 10]; 10] {
    let mut table = [[None; 10]; 10];
    let mut a = 0;
    while a < 10 {
        let mut b = 0;
        while b < 10 {
            let sa = ALL_STEMS[a];
            let sb = ALL_STEMS[b];
            table[a][b] = if sa.combination_partner().index() == sb.index() {
                Some(STEM_COMBINATION_SCORE)
            } else {
                relation_affinity(classify(sa, sb))
            };
            b += 1;
        }
        a += 1;
    }
    table
}

/// `STEM_AFFINITY[a][b]`: base score for day stems `a` (reference) and `b`.
///
/// Not symmetric: Gap→Byeong is eating god (70) while Byeong→Gap is
/// indirect resource (55).
pub const STEM_AFFINITY: [[Option<i32>; 10]; 10] = build_affinity();

/// Base score for reference day stem `a` and partner day stem `b`.
pub const fn base_score(a: Stem, b: Stem) -> i32 {
    match STEM_AFFINITY[a.index() as usize][b.index() as usize] {
        Some(score) => score,
        None => DEFAULT_BASE_SCORE,
    }
}

// ---------------------------------------------------------------------------
// Branch relations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchRelation {
    /// Six harmonies (yukhap).
    Harmony,
    /// Six clashes (yukchung).
    Clash,
    /// Punishments (hyeong), including self-punishment.
    Punishment,
}

impl BranchRelation {
    pub const fn delta(self) -> i32 {
        match self {
            Self::Harmony => HARMONY_DELTA,
            Self::Clash => CLASH_DELTA,
            Self::Punishment => PUNISHMENT_DELTA,
        }
    }
}

/// Punishing pairs between distinct branches, unordered.
const PUNISHMENT_PAIRS: [(Branch, Branch); 7] = [
    (Branch::In, Branch::Sa),
    (Branch::Sa, Branch::Sin),
    (Branch::In, Branch::Sin),
    (Branch::Chuk, Branch::Sul),
    (Branch::Sul, Branch::Mi),
    (Branch::Chuk, Branch::Mi),
    (Branch::Ja, Branch::Myo),
];

/// Branches that punish themselves.
const SELF_PUNISHING: [Branch; 4] = [Branch::Jin, Branch::O, Branch::Yu, Branch::Hae];

fn is_punishment(a: Branch, b: Branch) -> bool {
    if a == b {
        return SELF_PUNISHING.contains(&a);
    }
    PUNISHMENT_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Every relation between two branches, in harmony/clash/punishment order.
///
/// A pair may carry more than one (Sa-Sin is both harmony and punishment).
pub fn branch_relations(a: Branch, b: Branch) -> Vec<BranchRelation> {
    let (ia, ib) = (a.index(), b.index());
    let mut out = Vec::new();
    if (ia + ib) % 12 == 1 {
        out.push(BranchRelation::Harmony);
    }
    if ia.abs_diff(ib) == 6 {
        out.push(BranchRelation::Clash);
    }
    if is_punishment(a, b) {
        out.push(BranchRelation::Punishment);
    }
    out
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// One signed contribution to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    /// Which pillar pair was compared (day or month).
    pub slot: PillarPosition,
    pub relation: BranchRelation,
    /// Branch of chart A, branch of chart B.
    pub branches: (Branch, Branch),
    pub delta: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub base_score: i32,
    pub adjustments: Vec<Adjustment>,
    /// `base + Σ delta`, clamped to [0, 100].
    pub final_score: i32,
}

impl CompatibilityResult {
    /// Assemble a result; the final score is always clamped.
    ///
    /// The sum is taken in `i64` so arbitrary deltas cannot wrap.
    pub fn from_parts(base_score: i32, adjustments: Vec<Adjustment>) -> Self {
        let raw = i64::from(base_score)
            + adjustments
                .iter()
                .map(|a| i64::from(a.delta))
                .sum::<i64>();
        let final_score = raw.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as i32;
        Self {
            base_score,
            adjustments,
            final_score,
        }
    }
}

/// Score chart `b` against reference chart `a`.
pub fn compatibility(a: &FourPillarChart, b: &FourPillarChart) -> CompatibilityResult {
    let base = base_score(a.day_master(), b.day_master());
    let mut adjustments = Vec::new();
    for slot in [PillarPosition::Day, PillarPosition::Month] {
        let branches = (a.pillar(slot).branch, b.pillar(slot).branch);
        for relation in branch_relations(branches.0, branches.1) {
            adjustments.push(Adjustment {
                slot,
                relation,
                branches,
                delta: relation.delta(),
            });
        }
    }
    CompatibilityResult::from_parts(base, adjustments)
}
