//! Branch and stem relations across the four positions.
//!
//! Every relation is a data pattern (a multiset of branches, or a stem
//! pair), matched by one uniform detector over the positional subsets of
//! {year, month, day, hour}.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Branch, Stem};
use crate::pillars::{FourPillars, PillarPosition, ALL_POSITIONS};

/// The seven branch-relation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchRelationKind {
    /// 六合 — six combinations.
    SixCombine,
    /// 三合 — three harmonies.
    ThreeHarmony,
    /// 三会 — three assemblies (directional).
    ThreeAssembly,
    /// 六冲 — six clashes.
    SixClash,
    /// 六害 — six harms.
    SixHarm,
    /// 三刑 — punishments (triples, the 子卯 pair and self-punishments).
    Punishment,
    /// 六破 — destructions.
    Destruction,
}

impl BranchRelationKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SixCombine => "Liuhe",
            Self::ThreeHarmony => "Sanhe",
            Self::ThreeAssembly => "Sanhui",
            Self::SixClash => "Liuchong",
            Self::SixHarm => "Liuhai",
            Self::Punishment => "Sanxing",
            Self::Destruction => "Liupo",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::SixCombine => "六合",
            Self::ThreeHarmony => "三合",
            Self::ThreeAssembly => "三会",
            Self::SixClash => "六冲",
            Self::SixHarm => "六害",
            Self::Punishment => "三刑",
            Self::Destruction => "六破",
        }
    }
}

/// A relation pattern: its kind and the branch multiset that triggers it.
struct BranchPattern {
    kind: BranchRelationKind,
    branches: &'static [Branch],
}

/// All branch-relation patterns.
#[rustfmt::skip]
static BRANCH_PATTERNS: [BranchPattern; 39] = [
    // 六合
    BranchPattern { kind: BranchRelationKind::SixCombine, branches: &[Branch::Zi, Branch::Chou] },
    BranchPattern { kind: BranchRelationKind::SixCombine, branches: &[Branch::Yin, Branch::Hai] },
    BranchPattern { kind: BranchRelationKind::SixCombine, branches: &[Branch::Mao, Branch::Xu] },
    BranchPattern { kind: BranchRelationKind::SixCombine, branches: &[Branch::Chen, Branch::You] },
    BranchPattern { kind: BranchRelationKind::SixCombine, branches: &[Branch::Si, Branch::Shen] },
    BranchPattern { kind: BranchRelationKind::SixCombine, branches: &[Branch::Wu, Branch::Wei] },
    // 三合
    BranchPattern { kind: BranchRelationKind::ThreeHarmony, branches: &[Branch::Shen, Branch::Zi, Branch::Chen] },
    BranchPattern { kind: BranchRelationKind::ThreeHarmony, branches: &[Branch::Hai, Branch::Mao, Branch::Wei] },
    BranchPattern { kind: BranchRelationKind::ThreeHarmony, branches: &[Branch::Yin, Branch::Wu, Branch::Xu] },
    BranchPattern { kind: BranchRelationKind::ThreeHarmony, branches: &[Branch::Si, Branch::You, Branch::Chou] },
    // 三会
    BranchPattern { kind: BranchRelationKind::ThreeAssembly, branches: &[Branch::Yin, Branch::Mao, Branch::Chen] },
    BranchPattern { kind: BranchRelationKind::ThreeAssembly, branches: &[Branch::Si, Branch::Wu, Branch::Wei] },
    BranchPattern { kind: BranchRelationKind::ThreeAssembly, branches: &[Branch::Shen, Branch::You, Branch::Xu] },
    BranchPattern { kind: BranchRelationKind::ThreeAssembly, branches: &[Branch::Hai, Branch::Zi, Branch::Chou] },
    // 六冲
    BranchPattern { kind: BranchRelationKind::SixClash, branches: &[Branch::Zi, Branch::Wu] },
    BranchPattern { kind: BranchRelationKind::SixClash, branches: &[Branch::Chou, Branch::Wei] },
    BranchPattern { kind: BranchRelationKind::SixClash, branches: &[Branch::Yin, Branch::Shen] },
    BranchPattern { kind: BranchRelationKind::SixClash, branches: &[Branch::Mao, Branch::You] },
    BranchPattern { kind: BranchRelationKind::SixClash, branches: &[Branch::Chen, Branch::Xu] },
    BranchPattern { kind: BranchRelationKind::SixClash, branches: &[Branch::Si, Branch::Hai] },
    // 六害
    BranchPattern { kind: BranchRelationKind::SixHarm, branches: &[Branch::Zi, Branch::Wei] },
    BranchPattern { kind: BranchRelationKind::SixHarm, branches: &[Branch::Chou, Branch::Wu] },
    BranchPattern { kind: BranchRelationKind::SixHarm, branches: &[Branch::Yin, Branch::Si] },
    BranchPattern { kind: BranchRelationKind::SixHarm, branches: &[Branch::Mao, Branch::Chen] },
    BranchPattern { kind: BranchRelationKind::SixHarm, branches: &[Branch::Shen, Branch::Hai] },
    BranchPattern { kind: BranchRelationKind::SixHarm, branches: &[Branch::You, Branch::Xu] },
    // 三刑 (含自刑)
    BranchPattern { kind: BranchRelationKind::Punishment, branches: &[Branch::Yin, Branch::Si, Branch::Shen] },
    BranchPattern { kind: BranchRelationKind::Punishment, branches: &[Branch::Chou, Branch::Xu, Branch::Wei] },
    BranchPattern { kind: BranchRelationKind::Punishment, branches: &[Branch::Zi, Branch::Mao] },
    BranchPattern { kind: BranchRelationKind::Punishment, branches: &[Branch::Chen, Branch::Chen] },
    BranchPattern { kind: BranchRelationKind::Punishment, branches: &[Branch::Wu, Branch::Wu] },
    BranchPattern { kind: BranchRelationKind::Punishment, branches: &[Branch::You, Branch::You] },
    BranchPattern { kind: BranchRelationKind::Punishment, branches: &[Branch::Hai, Branch::Hai] },
    // 六破
    BranchPattern { kind: BranchRelationKind::Destruction, branches: &[Branch::Zi, Branch::You] },
    BranchPattern { kind: BranchRelationKind::Destruction, branches: &[Branch::Mao, Branch::Wu] },
    BranchPattern { kind: BranchRelationKind::Destruction, branches: &[Branch::Chen, Branch::Chou] },
    BranchPattern { kind: BranchRelationKind::Destruction, branches: &[Branch::Wei, Branch::Xu] },
    BranchPattern { kind: BranchRelationKind::Destruction, branches: &[Branch::Yin, Branch::Hai] },
    BranchPattern { kind: BranchRelationKind::Destruction, branches: &[Branch::Si, Branch::Shen] },
];

/// A detected branch relation with its participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRelationHit {
    pub kind: BranchRelationKind,
    pub positions: Vec<PillarPosition>,
    pub branches: Vec<Branch>,
}

fn multiset_key(branches: &[Branch]) -> Vec<u8> {
    let mut key: Vec<u8> = branches.iter().map(|b| b.index()).collect();
    key.sort_unstable();
    key
}

/// Detect every branch relation over the positional pairs and triples.
pub fn branch_relations(pillars: &FourPillars) -> Vec<BranchRelationHit> {
    let mut hits = Vec::new();

    let pairs: Vec<[PillarPosition; 2]> = {
        let mut v = Vec::new();
        for i in 0..4 {
            for j in (i + 1)..4 {
                v.push([ALL_POSITIONS[i], ALL_POSITIONS[j]]);
            }
        }
        v
    };
    let triples: Vec<[PillarPosition; 3]> = {
        let mut v = Vec::new();
        for i in 0..4 {
            for j in (i + 1)..4 {
                for k in (j + 1)..4 {
                    v.push([ALL_POSITIONS[i], ALL_POSITIONS[j], ALL_POSITIONS[k]]);
                }
            }
        }
        v
    };

    for pattern in &BRANCH_PATTERNS {
        let want = multiset_key(pattern.branches);
        match pattern.branches.len() {
            2 => {
                for pair in &pairs {
                    let got: Vec<Branch> = pair.iter().map(|p| pillars.get(*p).branch).collect();
                    if multiset_key(&got) == want {
                        hits.push(BranchRelationHit {
                            kind: pattern.kind,
                            positions: pair.to_vec(),
                            branches: got,
                        });
                    }
                }
            }
            _ => {
                for triple in &triples {
                    let got: Vec<Branch> = triple.iter().map(|p| pillars.get(*p).branch).collect();
                    if multiset_key(&got) == want {
                        hits.push(BranchRelationHit {
                            kind: pattern.kind,
                            positions: triple.to_vec(),
                            branches: got,
                        });
                    }
                }
            }
        }
    }

    hits
}

/// The two stem-relation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StemRelationKind {
    /// 五合 — the five combinations (甲己, 乙庚, 丙辛, 丁壬, 戊癸).
    FiveCombine,
    /// 相克 — the first stem's element overcomes the second's.
    Overcoming,
}

impl StemRelationKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::FiveCombine => "Wuhe",
            Self::Overcoming => "Xiangke",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::FiveCombine => "五合",
            Self::Overcoming => "相克",
        }
    }
}

/// A detected stem relation; for `Overcoming` the first position is the
/// aggressor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemRelationHit {
    pub kind: StemRelationKind,
    pub positions: (PillarPosition, PillarPosition),
    pub stems: (Stem, Stem),
}

/// Detect stem combinations and overcomings over the position pairs.
pub fn stem_relations(pillars: &FourPillars) -> Vec<StemRelationHit> {
    let mut hits = Vec::new();

    for i in 0..4 {
        for j in (i + 1)..4 {
            let (pa, pb) = (ALL_POSITIONS[i], ALL_POSITIONS[j]);
            let (sa, sb) = (pillars.get(pa).stem, pillars.get(pb).stem);

            if (sa.index() as i8 - sb.index() as i8).unsigned_abs() == 5 {
                hits.push(StemRelationHit {
                    kind: StemRelationKind::FiveCombine,
                    positions: (pa, pb),
                    stems: (sa, sb),
                });
            }
            if sa.element().overcomes() == sb.element() {
                hits.push(StemRelationHit {
                    kind: StemRelationKind::Overcoming,
                    positions: (pa, pb),
                    stems: (sa, sb),
                });
            } else if sb.element().overcomes() == sa.element() {
                hits.push(StemRelationHit {
                    kind: StemRelationKind::Overcoming,
                    positions: (pb, pa),
                    stems: (sb, sa),
                });
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::Pillar;

    fn chart(year: &str, month: &str, day: &str, hour: &str) -> FourPillars {
        let parse = |g: &str| {
            let idx = (0..60)
                .find(|&n| Pillar::from_cycle_index(n).glyph() == g)
                .unwrap_or_else(|| panic!("not a pillar: {g}"));
            Pillar::from_cycle_index(idx)
        };
        FourPillars {
            year: parse(year),
            month: parse(month),
            day: parse(day),
            hour: parse(hour),
        }
    }

    #[test]
    fn pattern_count() {
        assert_eq!(BRANCH_PATTERNS.len(), 39);
    }

    #[test]
    fn six_combine_detected() {
        let fp = chart("甲子", "丁丑", "甲申", "庚午");
        let hits = branch_relations(&fp);
        assert!(hits.iter().any(|h| h.kind == BranchRelationKind::SixCombine
            && h.positions == vec![PillarPosition::Year, PillarPosition::Month]));
    }

    #[test]
    fn three_harmony_detected() {
        // 申子辰 across year/month/day.
        let fp = chart("甲申", "丙子", "甲辰", "丁卯");
        let hits = branch_relations(&fp);
        assert!(hits
            .iter()
            .any(|h| h.kind == BranchRelationKind::ThreeHarmony && h.positions.len() == 3));
    }

    #[test]
    fn clash_and_harm_detected() {
        // 子午 clash (year/hour), 丑午 harm (month/hour).
        let fp = chart("甲子", "丁丑", "己卯", "庚午");
        let hits = branch_relations(&fp);
        assert!(hits.iter().any(|h| h.kind == BranchRelationKind::SixClash));
        assert!(hits.iter().any(|h| h.kind == BranchRelationKind::SixHarm));
    }

    #[test]
    fn self_punishment_needs_two_positions() {
        let with = chart("甲辰", "戊辰", "甲子", "甲子");
        assert!(branch_relations(&with)
            .iter()
            .any(|h| h.kind == BranchRelationKind::Punishment));
        let without = chart("甲辰", "丙子", "甲子", "甲子");
        assert!(!branch_relations(&without)
            .iter()
            .any(|h| h.kind == BranchRelationKind::Punishment));
    }

    #[test]
    fn zimao_punishment_is_a_pair() {
        let fp = chart("甲子", "丁卯", "庚辰", "丙子");
        let hits = branch_relations(&fp);
        let xing: Vec<_> = hits
            .iter()
            .filter(|h| h.kind == BranchRelationKind::Punishment)
            .collect();
        assert_eq!(xing.len(), 2, "子卯 twice: year-month and month-hour");
    }

    #[test]
    fn five_combine_detected() {
        let fp = chart("甲子", "己巳", "丙辰", "戊子");
        let hits = stem_relations(&fp);
        let combos: Vec<_> = hits
            .iter()
            .filter(|h| h.kind == StemRelationKind::FiveCombine)
            .collect();
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].stems, (Stem::Jia, Stem::Ji));
    }

    #[test]
    fn overcoming_orders_aggressor_first() {
        // 庚 (metal) overcomes 甲 (wood), regardless of position order.
        let fp = chart("甲子", "戊辰", "庚辰", "丙子");
        let hits = stem_relations(&fp);
        let ko: Vec<_> = hits
            .iter()
            .filter(|h| h.kind == StemRelationKind::Overcoming)
            .collect();
        assert!(ko
            .iter()
            .any(|h| h.stems == (Stem::Geng, Stem::Jia)
                && h.positions == (PillarPosition::Day, PillarPosition::Year)));
    }
}
