//! Stem-branch pairs and the four-pillar chart.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// One stem paired with one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemBranchPair {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranchPair {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair at position `n` of the sexagenary cycle (wraps modulo 60).
    ///
    /// Position 0 is Gap-Ja; stem and branch advance together, so the cycle
    /// repeats every lcm(10, 12) = 60 steps.
    pub const fn from_sexagenary(n: i64) -> Self {
        Self {
            stem: Stem::from_cycle(n),
            branch: Branch::from_cycle(n),
        }
    }

    /// 0-based position in the sexagenary cycle.
    ///
    /// Returns `None` for pairs of mixed polarity (e.g. Gap-Chuk), which
    /// never occur in the cycle.
    pub fn sexagenary_index(&self) -> Option<u8> {
        let s = i64::from(self.stem.index());
        let b = i64::from(self.branch.index());
        if (s - b).rem_euclid(2) != 0 {
            return None;
        }
        // n ≡ s (mod 10), n ≡ b (mod 12): n = s + 10k for k in 0..6
        (0..6)
            .map(|k| s + 10 * k)
            .find(|n| n % 12 == b)
            .map(|n| n as u8)
    }

    /// Hanja rendering, e.g. `甲子`.
    pub fn hanja(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Hangul rendering, e.g. `갑자`.
    pub fn hangul(&self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }
}

impl Display for StemBranchPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}

/// The four chart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// A complete four-pillar chart.
///
/// Constructed only from four resolved pairs and immutable afterwards. The
/// day stem is the reference stem ("day master") for all relational math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillarChart {
    year: StemBranchPair,
    month: StemBranchPair,
    day: StemBranchPair,
    hour: StemBranchPair,
}

impl FourPillarChart {
    pub const fn new(
        year: StemBranchPair,
        month: StemBranchPair,
        day: StemBranchPair,
        hour: StemBranchPair,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    pub const fn year(&self) -> StemBranchPair {
        self.year
    }

    pub const fn month(&self) -> StemBranchPair {
        self.month
    }

    pub const fn day(&self) -> StemBranchPair {
        self.day
    }

    pub const fn hour(&self) -> StemBranchPair {
        self.hour
    }

    /// The day stem.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    pub const fn pillar(&self, position: PillarPosition) -> StemBranchPair {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// All four pillars tagged with their position, in chart order.
    pub const fn pillars(&self) -> [(PillarPosition, StemBranchPair); 4] {
        [
            (PillarPosition::Year, self.year),
            (PillarPosition::Month, self.month),
            (PillarPosition::Day, self.day),
            (PillarPosition::Hour, self.hour),
        ]
    }

    pub const fn stems(&self) -> [Stem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    pub const fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }
}

impl Display for FourPillarChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}
