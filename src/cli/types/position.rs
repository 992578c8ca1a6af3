//! Player position codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position code as exported by the league files (`QB`, `DE`, `LS`, ...).
///
/// Codes are kept verbatim; the set of codes differs between league exports
/// and some are composite tokens.
///
/// # Examples
///
/// ```rust
/// use draft_grades::PositionCode;
///
/// assert!(PositionCode::new("P").is_special_teams());
/// assert!(PositionCode::new("K").is_special_teams());
/// assert!(!PositionCode::new("QB").is_special_teams());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionCode(String);

impl PositionCode {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Punters and kickers are excluded from grading.
    ///
    /// Case-sensitive substring match on `P` or `K`, so any composite token
    /// carrying either letter is excluded too.
    pub fn is_special_teams(&self) -> bool {
        self.0.contains(['P', 'K'])
    }
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_teams_detection() {
        assert!(PositionCode::new("P").is_special_teams());
        assert!(PositionCode::new("K").is_special_teams());
        assert!(PositionCode::new("KR").is_special_teams());
        assert!(PositionCode::new("PR").is_special_teams());

        for code in ["QB", "RB", "FB", "WR", "TE", "T", "G", "C", "DE", "DT", "LB", "CB", "S", "LS"] {
            assert!(!PositionCode::new(code).is_special_teams(), "{code}");
        }
    }

    #[test]
    fn test_special_teams_is_case_sensitive() {
        assert!(!PositionCode::new("p").is_special_teams());
        assert!(!PositionCode::new("k").is_special_teams());
    }

    #[test]
    fn test_position_code_trims() {
        let code = PositionCode::new("  DT ");
        assert_eq!(code.as_str(), "DT");
        assert_eq!(code.to_string(), "DT");
    }
}
