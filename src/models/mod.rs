//! Data models for pick records and result tables

pub mod output;
pub mod pick;

pub use output::*;
pub use pick::*;
