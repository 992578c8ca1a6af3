//! Type-safe wrappers for league, draft and player data.

pub mod draft;
pub mod ids;
pub mod position;

pub use draft::{DraftRound, DraftYear, PickSlot};
pub use ids::{LeagueName, PlayerId, TeamCode};
pub use position::PositionCode;
