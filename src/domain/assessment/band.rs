//! Band and BandScale - score classification into severity tiers.
//!
//! Classification is a typed, ordered list of `(upper bound inclusive, Band)`
//! pairs evaluated in order; scores above every bound fall into the overflow
//! band. Both built-in questionnaires use Low/Medium/High with High as the
//! overflow tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Points, ValidationError};

/// Severity tier derived from a numeric score range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    /// Display label shown in the results view.
    pub fn label(&self) -> &'static str {
        match self {
            Band::Low => "Thấp",
            Band::Medium => "Trung bình",
            Band::High => "Cao",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered score-to-band thresholds for one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandScale {
    /// `(upper bound inclusive, band)` pairs with strictly ascending bounds.
    thresholds: Vec<(u32, Band)>,
    /// Band for scores above the last bound.
    overflow: Band,
}

impl BandScale {
    /// Creates a scale, validating that bounds ascend strictly.
    pub fn new(thresholds: Vec<(u32, Band)>, overflow: Band) -> Result<Self, ValidationError> {
        if thresholds.is_empty() {
            return Err(ValidationError::empty_field("thresholds"));
        }
        for pair in thresholds.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(ValidationError::invalid_format(
                    "thresholds",
                    format!(
                        "Bounds must ascend strictly, got {} after {}",
                        pair[1].0, pair[0].0
                    ),
                ));
            }
        }
        Ok(Self {
            thresholds,
            overflow,
        })
    }

    /// The stress questionnaire scale: <= 13 Low, <= 26 Medium, above High.
    pub fn stress() -> Self {
        Self {
            thresholds: vec![(13, Band::Low), (26, Band::Medium)],
            overflow: Band::High,
        }
    }

    /// The anxiety questionnaire scale: <= 15 Low, <= 30 Medium, above High.
    pub fn anxiety() -> Self {
        Self {
            thresholds: vec![(15, Band::Low), (30, Band::Medium)],
            overflow: Band::High,
        }
    }

    /// Classifies a score into its band.
    ///
    /// Bounds are inclusive on the lower side of the next tier: a score
    /// equal to a bound still belongs to that bound's band.
    pub fn classify(&self, score: Points) -> Band {
        for (bound, band) in &self.thresholds {
            if score.value() <= *bound {
                return *band;
            }
        }
        self.overflow
    }

    /// Returns the threshold pairs.
    pub fn thresholds(&self) -> &[(u32, Band)] {
        &self.thresholds
    }
}
