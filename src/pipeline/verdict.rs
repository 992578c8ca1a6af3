//! Qualitative verdicts for team aggregates.
//!
//! Thresholds apply to means already rounded to two decimals. Inner
//! boundaries are closed so every finite mean lands in exactly one band.

use serde::Serialize;
use std::fmt;

/// Upper bound (inclusive) of the "drafted as expected" BPA band.
pub const BPA_EXPECTED_BAND: f64 = 2.00;
/// Weighted value at or above which a team "acquired 2+ starters".
pub const WEIGHTED_STARTERS: f64 = 50.0;
/// Weighted value at or above which a team drafted "as expected".
pub const WEIGHTED_EXPECTED: f64 = 44.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BpaVerdict {
    #[serde(rename = "Did well for BPA")]
    DidWell,
    #[serde(rename = "Drafted as expected")]
    AsExpected,
    #[serde(rename = "Missed on picks or prioritised other things over BPA")]
    Missed,
    Unknown,
}

impl BpaVerdict {
    /// Classify a team's mean BPA deviation.
    ///
    /// ```rust
    /// use draft_grades::pipeline::verdict::BpaVerdict;
    ///
    /// assert_eq!(BpaVerdict::classify(Some(2.0)), BpaVerdict::AsExpected);
    /// assert_eq!(BpaVerdict::classify(Some(2.01)), BpaVerdict::DidWell);
    /// assert_eq!(BpaVerdict::classify(None), BpaVerdict::Unknown);
    /// ```
    pub fn classify(bpa: Option<f64>) -> Self {
        match bpa {
            Some(v) if v > BPA_EXPECTED_BAND => BpaVerdict::DidWell,
            Some(v) if v >= -BPA_EXPECTED_BAND => BpaVerdict::AsExpected,
            Some(v) if v < -BPA_EXPECTED_BAND => BpaVerdict::Missed,
            _ => BpaVerdict::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BpaVerdict::DidWell => "Did well for BPA",
            BpaVerdict::AsExpected => "Drafted as expected",
            BpaVerdict::Missed => "Missed on picks or prioritised other things over BPA",
            BpaVerdict::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BpaVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeightedVerdict {
    #[serde(rename = "Acquired 2+ Starters")]
    Starters,
    #[serde(rename = "As Expected/Mid")]
    AsExpected,
    #[serde(rename = "Had Several Misses")]
    Misses,
    Unknown,
}

impl WeightedVerdict {
    /// Classify a team's mean weighted value.
    ///
    /// ```rust
    /// use draft_grades::pipeline::verdict::WeightedVerdict;
    ///
    /// assert_eq!(WeightedVerdict::classify(Some(50.0)), WeightedVerdict::Starters);
    /// assert_eq!(WeightedVerdict::classify(Some(49.95)), WeightedVerdict::AsExpected);
    /// assert_eq!(WeightedVerdict::classify(Some(43.99)), WeightedVerdict::Misses);
    /// ```
    pub fn classify(weighted: Option<f64>) -> Self {
        match weighted {
            Some(v) if v >= WEIGHTED_STARTERS => WeightedVerdict::Starters,
            Some(v) if v >= WEIGHTED_EXPECTED => WeightedVerdict::AsExpected,
            Some(v) if v < WEIGHTED_EXPECTED => WeightedVerdict::Misses,
            _ => WeightedVerdict::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightedVerdict::Starters => "Acquired 2+ Starters",
            WeightedVerdict::AsExpected => "As Expected/Mid",
            WeightedVerdict::Misses => "Had Several Misses",
            WeightedVerdict::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for WeightedVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
