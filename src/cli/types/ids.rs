//! ID types for players, teams and leagues.

use crate::error::{GradeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team code as found in `Drafted_By` and `Team` columns.
///
/// Codes are compared textually after normalization, so an integral float
/// spelling (`"12.0"`, written by tools that widen a column with blanks)
/// matches its integer spelling (`"12"`).
///
/// ```rust
/// use draft_grades::TeamCode;
///
/// assert_eq!(TeamCode::new("12.0"), TeamCode::new("12"));
/// assert_eq!(TeamCode::new(" NYG ").as_str(), "NYG");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamCode(String);

impl TeamCode {
    pub fn new(code: &str) -> Self {
        let trimmed = code.trim();
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 && !trimmed.contains(['e', 'E']) => {
                Self(format!("{}", v as i64))
            }
            _ => Self(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// League abbreviation used to name the exported workbook.
///
/// Must be non-empty and free of path separators since it becomes part of a
/// file name.
///
/// ```rust
/// use draft_grades::LeagueName;
///
/// let league: LeagueName = "TFL".parse().unwrap();
/// assert_eq!(league.as_str(), "TFL");
/// assert!("".parse::<LeagueName>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueName(String);

impl LeagueName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueName {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.contains(['/', '\\']) || trimmed == ".." {
            return Err(GradeError::InvalidLeague {
                league: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}
