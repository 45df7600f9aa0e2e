//! The three palaces: conception (胎元), life (命宫) and body (身宫).
//!
//! Conception advances the month pillar (stem +1, branch +3). The life and
//! body palaces follow the classical month-order/hour-order arithmetic, with
//! their stems assigned by the Five-Tiger rule from the year stem.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Branch, Pillar, Stem};

/// The three palace pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palaces {
    /// 胎元 — conception palace.
    pub tai_yuan: Pillar,
    /// 命宫 — life palace.
    pub ming_gong: Pillar,
    /// 身宫 — body palace.
    pub shen_gong: Pillar,
}

/// 胎元: the month stem's successor over the branch three on.
pub fn tai_yuan(month_pillar: Pillar) -> Pillar {
    Pillar {
        stem: Stem::from_index(month_pillar.stem.index() as i64 + 1),
        branch: Branch::from_index(month_pillar.branch.index() as i64 + 3),
    }
}

/// 1-based month order counted from 寅 (寅 = 1 .. 丑 = 12).
fn month_order(month_branch: Branch) -> i64 {
    (month_branch.index() as i64 - Branch::Yin.index() as i64).rem_euclid(12) + 1
}

/// 1-based hour order counted from 子 (子 = 1 .. 亥 = 12).
fn hour_order(hour_branch: Branch) -> i64 {
    hour_branch.index() as i64 + 1
}

/// Five-Tiger stem for an arbitrary branch treated as a month of the year.
fn tiger_stem(year_stem: Stem, branch: Branch) -> Stem {
    let base = ((year_stem.index() as i64 % 5) * 2 + 2) % 10;
    let offset = (branch.index() as i64 - Branch::Yin.index() as i64).rem_euclid(12);
    Stem::from_index(base + offset)
}

/// 命宫: classical rule — subtract the month/hour order sum from 14 (or 26
/// once the sum reaches 14); the result is a 寅-based month order.
pub fn ming_gong(year_stem: Stem, month_branch: Branch, hour_branch: Branch) -> Pillar {
    let sum = month_order(month_branch) + hour_order(hour_branch);
    let order = if sum < 14 { 14 - sum } else { 26 - sum };
    let branch = Branch::from_index(Branch::Yin.index() as i64 + order - 1);
    Pillar {
        stem: tiger_stem(year_stem, branch),
        branch,
    }
}

/// 身宫: the month/hour order sum counted from 子.
pub fn shen_gong(year_stem: Stem, month_branch: Branch, hour_branch: Branch) -> Pillar {
    let branch = Branch::from_index(month_order(month_branch) + hour_order(hour_branch) - 2);
    Pillar {
        stem: tiger_stem(year_stem, branch),
        branch,
    }
}

/// All three palaces.
pub fn palaces(year_stem: Stem, month_pillar: Pillar, hour_branch: Branch) -> Palaces {
    Palaces {
        tai_yuan: tai_yuan(month_pillar),
        ming_gong: ming_gong(year_stem, month_pillar.branch, hour_branch),
        shen_gong: shen_gong(year_stem, month_pillar.branch, hour_branch),
    }
}
