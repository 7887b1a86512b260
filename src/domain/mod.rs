//! Domain layer containing the canvas records and the analysis engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ratings, errors)
//! - `canvas` - Value document, business model and competitor records
//! - `analysis` - Pure scoring, validation and fit-analysis services

pub mod analysis;
pub mod canvas;
pub mod foundation;
