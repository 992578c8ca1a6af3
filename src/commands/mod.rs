//! Command implementations for the draft grades CLI

pub mod grade;
