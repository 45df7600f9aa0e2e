//! Five-element tally and day-master strength.
//!
//! The four visible stems count at full weight; each branch contributes its
//! hidden stems at role weights. Strength compares the day master's own and
//! generating elements against the whole, then lets the month command (the
//! month branch's primary element) shift the verdict one step.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Element, Stem, ALL_ELEMENTS};
use crate::hidden::{hidden_stems, HiddenRole};
use crate::pillars::{FourPillars, PillarPosition, ALL_POSITIONS};

/// Contribution weights for the tally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementWeights {
    pub stem: f64,
    pub primary: f64,
    pub middle: f64,
    pub residual: f64,
}

impl Default for ElementWeights {
    fn default() -> Self {
        Self {
            stem: 1.0,
            primary: 0.7,
            middle: 0.3,
            residual: 0.1,
        }
    }
}

impl ElementWeights {
    fn for_role(&self, role: HiddenRole) -> f64 {
        match role {
            HiddenRole::Primary => self.primary,
            HiddenRole::Middle => self.middle,
            HiddenRole::Residual => self.residual,
        }
    }
}

/// Strength thresholds on the support ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthThresholds {
    pub strong: f64,
    pub weak: f64,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            strong: 0.5,
            weak: 0.35,
        }
    }
}

/// Day-master strength verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthStatus {
    Weak,
    Neutral,
    Strong,
}

impl StrengthStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Neutral => "Neutral",
            Self::Strong => "Strong",
        }
    }

    fn shift_up(self) -> Self {
        match self {
            Self::Weak => Self::Neutral,
            _ => Self::Strong,
        }
    }

    fn shift_down(self) -> Self {
        match self {
            Self::Strong => Self::Neutral,
            _ => Self::Weak,
        }
    }
}

/// Full five-element analysis of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiveElementAnalysis {
    /// Unweighted tally: the four stems plus each branch's primary stem.
    pub counts: [u32; 5],
    /// Weighted score per element, generation order.
    pub scores: [f64; 5],
    /// The day master.
    pub day_master: Stem,
    /// Share of total score held by the day master's element and its
    /// generator.
    pub support_ratio: f64,
    /// Final verdict after the month-command shift.
    pub status: StrengthStatus,
}

impl FiveElementAnalysis {
    /// Score of one element.
    pub fn score(&self, element: Element) -> f64 {
        self.scores[element.index() as usize]
    }

    /// Unweighted count of one element.
    pub fn count(&self, element: Element) -> u32 {
        self.counts[element.index() as usize]
    }

    /// A short, localization-friendly summary line.
    pub fn summary(&self) -> String {
        format!(
            "day master {} ({}) is {}; support {:.2}",
            self.day_master.glyph(),
            self.day_master.element().name(),
            self.status.name(),
            self.support_ratio
        )
    }
}

/// Tally and judge a chart with the given weights and thresholds.
pub fn analyze_elements(
    pillars: &FourPillars,
    weights: &ElementWeights,
    thresholds: &StrengthThresholds,
) -> FiveElementAnalysis {
    let mut counts = [0u32; 5];
    let mut scores = [0f64; 5];

    for position in ALL_POSITIONS {
        let pillar = pillars.get(position);
        counts[pillar.stem.element().index() as usize] += 1;
        scores[pillar.stem.element().index() as usize] += weights.stem;

        for hs in hidden_stems(pillar.branch) {
            let idx = hs.stem.element().index() as usize;
            scores[idx] += weights.for_role(hs.role);
            if hs.role == HiddenRole::Primary {
                counts[idx] += 1;
            }
        }
    }

    let day_master = pillars.day_master();
    let dm_element = day_master.element();
    // The generator: the element that produces the day master's.
    let generator = ALL_ELEMENTS[(dm_element.index() as usize + 4) % 5];

    let total: f64 = scores.iter().sum();
    let support = scores[dm_element.index() as usize] + scores[generator.index() as usize];
    let support_ratio = if total > 0.0 { support / total } else { 0.0 };

    let mut status = if support_ratio > thresholds.strong {
        StrengthStatus::Strong
    } else if support_ratio < thresholds.weak {
        StrengthStatus::Weak
    } else {
        StrengthStatus::Neutral
    };

    // Month command: the season's element seconds or suppresses the verdict.
    let command = crate::hidden::primary_stem(pillars.get(PillarPosition::Month).branch)
        .element();
    if command == dm_element || command.generates() == dm_element {
        status = status.shift_up();
    } else if command.overcomes() == dm_element {
        status = status.shift_down();
    }

    FiveElementAnalysis {
        counts,
        scores,
        day_master,
        support_ratio,
        status,
    }
}

/// Analyze with the default weights and thresholds.
pub fn analyze_elements_default(pillars: &FourPillars) -> FiveElementAnalysis {
    analyze_elements(pillars, &ElementWeights::default(), &StrengthThresholds::default())
}
