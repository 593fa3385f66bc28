//! The ten Heavenly Stems.
//!
//! Stems alternate yang/yin and advance through the five elements two at a
//! time: Gap/Eul = Wood, Byeong/Jeong = Fire, Mu/Gi = Earth,
//! Gyeong/Sin = Metal, Im/Gye = Water.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, EarthKind, Element, Polarity};

/// The 10 Heavenly Stems, Korean romanization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (0 = Gap, 9 = Gye).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// Hanja character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// Hangul syllable.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at any integer position of the cycle (wraps modulo 10).
    pub const fn from_cycle(n: i64) -> Stem {
        ALL_STEMS[n.rem_euclid(10) as usize]
    }

    pub const fn element(self) -> Element {
        ALL_ELEMENTS[(self.index() / 2) as usize]
    }

    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Earth subtype: Mu is dry, Gi is wet; other stems are not earth.
    pub const fn earth_kind(self) -> Option<EarthKind> {
        match self {
            Self::Mu => Some(EarthKind::Dry),
            Self::Gi => Some(EarthKind::Wet),
            _ => None,
        }
    }

    /// Partner in the five stem combinations (Gap-Gi, Eul-Gyeong,
    /// Byeong-Sin, Jeong-Im, Mu-Gye): always five positions apart.
    pub const fn combination_partner(self) -> Stem {
        Self::from_cycle(self.index() as i64 + 5)
    }
}
