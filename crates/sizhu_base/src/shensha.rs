//! Shensha (神煞) detection.
//!
//! Nine classical rules, each a pure table from an anchor (day stem, year or
//! day branch, or the day pillar's xun) to the branch set that carries the
//! shensha. Detection scans the four positions against that set.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Branch, Stem};
use crate::pillars::{FourPillars, PillarPosition, ALL_POSITIONS};

/// The nine shensha rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shensha {
    /// 天乙贵人 — nobleman, from the day stem.
    TianyiGuiren,
    /// 文昌贵人 — literary star, from the day stem.
    WenchangGuiren,
    /// 桃花 — peach blossom, from the year or day branch triad.
    Taohua,
    /// 驿马 — travel horse, from the year or day branch triad.
    Yima,
    /// 华盖 — canopy, from the year or day branch triad.
    Huagai,
    /// 将星 — general star, from the year or day branch triad.
    Jiangxing,
    /// 羊刃 — blade, from the day stem (yang stems only).
    Yangren,
    /// 禄神 — salary star, from the day stem.
    Lushen,
    /// 空亡 — void branches, from the day pillar's xun.
    Kongwang,
}

/// All nine rules in order.
pub const ALL_SHENSHA: [Shensha; 9] = [
    Shensha::TianyiGuiren,
    Shensha::WenchangGuiren,
    Shensha::Taohua,
    Shensha::Yima,
    Shensha::Huagai,
    Shensha::Jiangxing,
    Shensha::Yangren,
    Shensha::Lushen,
    Shensha::Kongwang,
];

impl Shensha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TianyiGuiren => "Tianyi Guiren",
            Self::WenchangGuiren => "Wenchang Guiren",
            Self::Taohua => "Taohua",
            Self::Yima => "Yima",
            Self::Huagai => "Huagai",
            Self::Jiangxing => "Jiangxing",
            Self::Yangren => "Yangren",
            Self::Lushen => "Lushen",
            Self::Kongwang => "Kongwang",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::TianyiGuiren => "天乙贵人",
            Self::WenchangGuiren => "文昌贵人",
            Self::Taohua => "桃花",
            Self::Yima => "驿马",
            Self::Huagai => "华盖",
            Self::Jiangxing => "将星",
            Self::Yangren => "羊刃",
            Self::Lushen => "禄神",
            Self::Kongwang => "空亡",
        }
    }
}

/// A shensha found at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShenshaHit {
    pub shensha: Shensha,
    pub position: PillarPosition,
    pub branch: Branch,
}

/// 天乙贵人: day stem → the two nobleman branches.
fn tianyi_branches(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => [Branch::Chou, Branch::Wei],
        Stem::Yi | Stem::Ji => [Branch::Zi, Branch::Shen],
        Stem::Bing | Stem::Ding => [Branch::Hai, Branch::You],
        Stem::Ren | Stem::Gui => [Branch::Si, Branch::Mao],
        Stem::Xin => [Branch::Wu, Branch::Yin],
    }
}

/// 文昌贵人: day stem → one branch.
fn wenchang_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Jia => Branch::Si,
        Stem::Yi => Branch::Wu,
        Stem::Bing | Stem::Wu => Branch::Shen,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Geng => Branch::Hai,
        Stem::Xin => Branch::Zi,
        Stem::Ren => Branch::Yin,
        Stem::Gui => Branch::Mao,
    }
}

/// Triad index of a branch: 申子辰=0, 巳酉丑=1, 寅午戌=2, 亥卯未=3.
fn triad(branch: Branch) -> usize {
    (branch.index() as usize) % 4
}

/// 桃花 per triad.
fn taohua_branch(anchor: Branch) -> Branch {
    [Branch::You, Branch::Wu, Branch::Mao, Branch::Zi][triad(anchor)]
}

/// 驿马 per triad.
fn yima_branch(anchor: Branch) -> Branch {
    [Branch::Yin, Branch::Hai, Branch::Shen, Branch::Si][triad(anchor)]
}

/// 华盖 per triad.
fn huagai_branch(anchor: Branch) -> Branch {
    [Branch::Chen, Branch::Chou, Branch::Xu, Branch::Wei][triad(anchor)]
}

/// 将星 per triad.
fn jiangxing_branch(anchor: Branch) -> Branch {
    [Branch::Zi, Branch::You, Branch::Wu, Branch::Mao][triad(anchor)]
}

/// 羊刃: yang day stems only.
fn yangren_branch(day_stem: Stem) -> Option<Branch> {
    match day_stem {
        Stem::Jia => Some(Branch::Mao),
        Stem::Bing | Stem::Wu => Some(Branch::Wu),
        Stem::Geng => Some(Branch::You),
        Stem::Ren => Some(Branch::Zi),
        _ => None,
    }
}

/// 禄神: day stem → its salary branch.
fn lushen_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Jia => Branch::Yin,
        Stem::Yi => Branch::Mao,
        Stem::Bing | Stem::Wu => Branch::Si,
        Stem::Ding | Stem::Ji => Branch::Wu,
        Stem::Geng => Branch::Shen,
        Stem::Xin => Branch::You,
        Stem::Ren => Branch::Hai,
        Stem::Gui => Branch::Zi,
    }
}

/// 空亡: the two branches missing from the day pillar's xun.
pub fn kongwang_branches(day_pillar: &crate::ganzhi::Pillar) -> [Branch; 2] {
    let first = (day_pillar.xun() as i64 * 10) % 12;
    [
        Branch::from_index(first + 10),
        Branch::from_index(first + 11),
    ]
}

/// Detect every shensha across the four positions.
pub fn detect_shensha(pillars: &FourPillars) -> Vec<ShenshaHit> {
    let day_stem = pillars.day.stem;
    let anchors = [pillars.year.branch, pillars.day.branch];

    // Rule targets, assembled from the anchor tables.
    let mut targets: Vec<(Shensha, Vec<Branch>)> = Vec::with_capacity(ALL_SHENSHA.len());
    targets.push((Shensha::TianyiGuiren, tianyi_branches(day_stem).to_vec()));
    targets.push((Shensha::WenchangGuiren, vec![wenchang_branch(day_stem)]));
    for (shensha, rule) in [
        (Shensha::Taohua, taohua_branch as fn(Branch) -> Branch),
        (Shensha::Yima, yima_branch),
        (Shensha::Huagai, huagai_branch),
        (Shensha::Jiangxing, jiangxing_branch),
    ] {
        let mut set: Vec<Branch> = anchors.iter().map(|a| rule(*a)).collect();
        set.dedup();
        targets.push((shensha, set));
    }
    targets.push((
        Shensha::Yangren,
        yangren_branch(day_stem).into_iter().collect(),
    ));
    targets.push((Shensha::Lushen, vec![lushen_branch(day_stem)]));
    targets.push((Shensha::Kongwang, kongwang_branches(&pillars.day).to_vec()));

    let mut hits = Vec::new();
    for (shensha, set) in &targets {
        for position in ALL_POSITIONS {
            let branch = pillars.get(position).branch;
            if set.contains(&branch) {
                hits.push(ShenshaHit {
                    shensha: *shensha,
                    position,
                    branch,
                });
            }
        }
    }
    hits
}
