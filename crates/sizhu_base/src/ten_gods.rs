//! The ten gods (十神): relational labels between a stem and the day master.
//!
//! The label depends only on the element relation (same / generated-by-day /
//! overcome-by-day / overcomes-day / generates-day) and whether the two
//! stems share polarity.

use serde::{Deserialize, Serialize};

use crate::ganzhi::Stem;

/// The ten relational labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// 比肩 — peer, same polarity.
    BiJian,
    /// 劫财 — rival peer, different polarity.
    JieCai,
    /// 食神 — output, same polarity.
    ShiShen,
    /// 伤官 — output, different polarity.
    ShangGuan,
    /// 偏财 — indirect wealth.
    PianCai,
    /// 正财 — direct wealth.
    ZhengCai,
    /// 偏官（七杀）— indirect authority.
    QiSha,
    /// 正官 — direct authority.
    ZhengGuan,
    /// 偏印 — indirect resource.
    PianYin,
    /// 正印 — direct resource.
    ZhengYin,
}

impl TenGod {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "Bijian",
            Self::JieCai => "Jiecai",
            Self::ShiShen => "Shishen",
            Self::ShangGuan => "Shangguan",
            Self::PianCai => "Piancai",
            Self::ZhengCai => "Zhengcai",
            Self::QiSha => "Qisha",
            Self::ZhengGuan => "Zhengguan",
            Self::PianYin => "Pianyin",
            Self::ZhengYin => "Zhengyin",
        }
    }

    /// Chinese glyphs.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }
}

/// Classify `other` against the day master `day`.
///
/// Total over all 10×10 stem pairs; the day master against itself is 比肩.
pub fn ten_god(day: Stem, other: Stem) -> TenGod {
    let de = day.element();
    let oe = other.element();
    let same_polarity = day.polarity() == other.polarity();

    if oe == de {
        if same_polarity {
            TenGod::BiJian
        } else {
            TenGod::JieCai
        }
    } else if de.generates() == oe {
        if same_polarity {
            TenGod::ShiShen
        } else {
            TenGod::ShangGuan
        }
    } else if de.overcomes() == oe {
        if same_polarity {
            TenGod::PianCai
        } else {
            TenGod::ZhengCai
        }
    } else if oe.overcomes() == de {
        if same_polarity {
            TenGod::QiSha
        } else {
            TenGod::ZhengGuan
        }
    } else {
        // oe.generates() == de
        if same_polarity {
            TenGod::PianYin
        } else {
            TenGod::ZhengYin
        }
    }
}
