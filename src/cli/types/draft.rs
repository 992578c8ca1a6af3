//! Draft year, round and pick-slot types.

use crate::error::{GradeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for draft years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DraftYear(pub u16);

impl DraftYear {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for DraftYear {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for DraftYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DraftYear {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Draft round. Rounds 1 through 7 carry reference data; any other value is
/// accepted but maps to zero in the positional lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DraftRound(pub u8);

impl DraftRound {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 7;

    pub fn new(round: u8) -> Self {
        Self(round)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// All rounds with reference data, in order.
    pub fn all() -> impl Iterator<Item = DraftRound> {
        (Self::FIRST..=Self::LAST).map(DraftRound)
    }
}

impl fmt::Display for DraftRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pick slot within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PickSlot(pub u16);

impl PickSlot {
    pub fn new(slot: u16) -> Self {
        Self(slot)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for PickSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
