//! The twelve Earthly Branches.
//!
//! Branch 0 (Ja, the Rat) holds the winter solstice and the midnight hour.
//! Each branch has a visible element used in the plain element count; its
//! hidden stems are in [`crate::hidden_stem`].

use serde::{Deserialize, Serialize};

use crate::element::{EarthKind, Element, Polarity};

/// The 12 Earthly Branches, Korean romanization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (0 = Ja, 11 = Hae).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Sin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }

    /// Hanja character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Hangul syllable.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at any integer position of the cycle (wraps modulo 12).
    pub const fn from_cycle(n: i64) -> Branch {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    /// Visible element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Cycle polarity: even-indexed branches are yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Earth subtype of the four earth branches.
    ///
    /// Chuk and Jin sit at the end of winter and spring (wet); Mi and Sul
    /// at the end of summer and autumn (dry).
    pub const fn earth_kind(self) -> Option<EarthKind> {
        match self {
            Self::Chuk | Self::Jin => Some(EarthKind::Wet),
            Self::Mi | Self::Sul => Some(EarthKind::Dry),
            _ => None,
        }
    }

    /// Element of the branch's three-harmony (trine) frame.
    ///
    /// Sin-Ja-Jin = Water, In-O-Sul = Fire, Sa-Yu-Chuk = Metal,
    /// Hae-Myo-Mi = Wood. Trine members are four positions apart.
    pub const fn trine_element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Water, // Ja, Jin, Sin
            1 => Element::Metal, // Chuk, Sa, Yu
            2 => Element::Fire,  // In, O, Sul
            _ => Element::Wood,  // Myo, Mi, Hae
        }
    }
}
