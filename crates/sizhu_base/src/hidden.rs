//! Hidden stems (藏干): the 1–3 stems contained by each branch.
//!
//! Pure table lookup. Every branch has a primary stem; nine branches carry
//! a middle stem and seven a residual one.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Branch, Stem};

/// Role of a hidden stem within its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiddenRole {
    Primary,
    Middle,
    Residual,
}

impl HiddenRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Middle => "Middle",
            Self::Residual => "Residual",
        }
    }

    /// Default relative weight (1.0 / 0.3 / 0.1).
    pub const fn weight(self) -> f64 {
        match self {
            Self::Primary => 1.0,
            Self::Middle => 0.3,
            Self::Residual => 0.1,
        }
    }
}

/// One hidden stem with its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub role: HiddenRole,
}

macro_rules! hs {
    ($stem:ident, $role:ident) => {
        HiddenStem {
            stem: Stem::$stem,
            role: HiddenRole::$role,
        }
    };
}

/// The ordered hidden stems of a branch.
pub fn hidden_stems(branch: Branch) -> &'static [HiddenStem] {
    match branch {
        Branch::Zi => &[hs!(Gui, Primary)],
        Branch::Chou => &[hs!(Ji, Primary), hs!(Gui, Middle), hs!(Xin, Residual)],
        Branch::Yin => &[hs!(Jia, Primary), hs!(Bing, Middle), hs!(Wu, Residual)],
        Branch::Mao => &[hs!(Yi, Primary)],
        Branch::Chen => &[hs!(Wu, Primary), hs!(Yi, Middle), hs!(Gui, Residual)],
        Branch::Si => &[hs!(Bing, Primary), hs!(Geng, Middle), hs!(Wu, Residual)],
        Branch::Wu => &[hs!(Ding, Primary), hs!(Ji, Middle)],
        Branch::Wei => &[hs!(Ji, Primary), hs!(Ding, Middle), hs!(Yi, Residual)],
        Branch::Shen => &[hs!(Geng, Primary), hs!(Ren, Middle), hs!(Wu, Residual)],
        Branch::You => &[hs!(Xin, Primary)],
        Branch::Xu => &[hs!(Wu, Primary), hs!(Xin, Middle), hs!(Ding, Residual)],
        Branch::Hai => &[hs!(Ren, Primary), hs!(Jia, Middle)],
    }
}

/// The branch's primary hidden stem.
pub fn primary_stem(branch: Branch) -> Stem {
    hidden_stems(branch)[0].stem
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_BRANCHES;

    #[test]
    fn every_branch_has_one_to_three() {
        for b in ALL_BRANCHES {
            let hs = hidden_stems(b);
            assert!((1..=3).contains(&hs.len()), "{}: {}", b.name(), hs.len());
            assert_eq!(hs[0].role, HiddenRole::Primary);
        }
    }

    #[test]
    fn primary_matches_branch_element() {
        for b in ALL_BRANCHES {
            assert_eq!(
                primary_stem(b).element(),
                b.element(),
                "primary of {}",
                b.name()
            );
        }
    }

    #[test]
    fn single_stem_branches() {
        let singles: Vec<_> = ALL_BRANCHES
            .into_iter()
            .filter(|b| hidden_stems(*b).len() == 1)
            .collect();
        assert_eq!(singles, vec![Branch::Zi, Branch::Mao, Branch::You]);
    }

    #[test]
    fn yin_branch_contents() {
        let hs = hidden_stems(Branch::Yin);
        let stems: Vec<_> = hs.iter().map(|h| h.stem).collect();
        assert_eq!(stems, vec![Stem::Jia, Stem::Bing, Stem::Wu]);
    }

    #[test]
    fn role_weights_descend() {
        assert!(HiddenRole::Primary.weight() > HiddenRole::Middle.weight());
        assert!(HiddenRole::Middle.weight() > HiddenRole::Residual.weight());
    }
}
