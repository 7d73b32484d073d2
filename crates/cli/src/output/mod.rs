//! Projections of normalized diagnostics

pub mod runtime;
pub mod terminal;
