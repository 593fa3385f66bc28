//! Hidden stems (jijanggan) carried inside each branch.
//!
//! Each branch governs a 30-day solar month; the days are apportioned to
//! the stems latent in it (residual, middle, main qi). Weights are those
//! day counts over 30, so each branch sums to 1.0. Entries are ordered
//! residual → main; the last entry is the branch's main stem.

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;

/// Days in one branch month.
const MONTH_DAYS: f64 = 30.0;

/// A stem latent in a branch at a fractional weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    /// Share of the branch in (0, 1].
    pub weight: f64,
}

impl HiddenStem {
    const fn days(stem: Stem, days: u8) -> Self {
        Self {
            stem,
            weight: days as f64 / MONTH_DAYS,
        }
    }
}

const JA: [HiddenStem; 2] = [HiddenStem::days(Stem::Im, 10), HiddenStem::days(Stem::Gye, 20)];
const CHUK: [HiddenStem; 3] = [
    HiddenStem::days(Stem::Gye, 9),
    HiddenStem::days(Stem::Sin, 3),
    HiddenStem::days(Stem::Gi, 18),
];
const IN: [HiddenStem; 3] = [
    HiddenStem::days(Stem::Mu, 7),
    HiddenStem::days(Stem::Byeong, 7),
    HiddenStem::days(Stem::Gap, 16),
];
const MYO: [HiddenStem; 2] = [HiddenStem::days(Stem::Gap, 10), HiddenStem::days(Stem::Eul, 20)];
const JIN: [HiddenStem; 3] = [
    HiddenStem::days(Stem::Eul, 9),
    HiddenStem::days(Stem::Gye, 3),
    HiddenStem::days(Stem::Mu, 18),
];
const SA: [HiddenStem; 3] = [
    HiddenStem::days(Stem::Mu, 7),
    HiddenStem::days(Stem::Gyeong, 7),
    HiddenStem::days(Stem::Byeong, 16),
];
const O: [HiddenStem; 3] = [
    HiddenStem::days(Stem::Byeong, 10),
    HiddenStem::days(Stem::Gi, 9),
    HiddenStem::days(Stem::Jeong, 11),
];
const MI: [HiddenStem; 3] = [
    HiddenStem::days(Stem::Jeong, 9),
    HiddenStem::days(Stem::Eul, 3),
    HiddenStem::days(Stem::Gi, 18),
];
const SIN: [HiddenStem; 3] = [
    HiddenStem::days(Stem::Mu, 7),
    HiddenStem::days(Stem::Im, 7),
    HiddenStem::days(Stem::Gyeong, 16),
];
const YU: [HiddenStem; 2] = [
    HiddenStem::days(Stem::Gyeong, 10),
    HiddenStem::days(Stem::Sin, 20),
];
const SUL: [HiddenStem; 3] = [
    HiddenStem::days(Stem::Sin, 9),
    HiddenStem::days(Stem::Jeong, 3),
    HiddenStem::days(Stem::Mu, 18),
];
const HAE: [HiddenStem; 3] = [
    HiddenStem::days(Stem::Mu, 7),
    HiddenStem::days(Stem::Gap, 7),
    HiddenStem::days(Stem::Im, 16),
];

/// Hidden stems of a branch, residual first, main qi last.
pub const fn hidden_stems(branch: Branch) -> &'static [HiddenStem] {
    match branch {
        Branch::Ja => &JA,
        Branch::Chuk => &CHUK,
        Branch::In => &IN,
        Branch::Myo => &MYO,
        Branch::Jin => &JIN,
        Branch::Sa => &SA,
        Branch::O => &O,
        Branch::Mi => &MI,
        Branch::Sin => &SIN,
        Branch::Yu => &YU,
        Branch::Sul => &SUL,
        Branch::Hae => &HAE,
    }
}

/// The branch's main (last) hidden stem.
pub fn main_stem(branch: Branch) -> Stem {
    let stems = hidden_stems(branch);
    stems[stems.len() - 1].stem
}
