//! Strategy Canvas - Canvas Scoring and Fit Analysis
//!
//! This crate scores, validates and cross-checks two strategy documents: a
//! value document (customer jobs, pains and gains against the offerings that
//! address them) and a business model (segments, channels, revenue, costs
//! and the rest of the nine building blocks). Every analysis is a pure
//! function of its input records.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
