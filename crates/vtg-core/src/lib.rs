//! # vtg-core
//!
//! Core types and error types for Vantage.
//!
//! This crate provides the foundational types shared across all Vantage crates:
//! - The input record ([`entities::InsightItem`]) handed over by an extraction pipeline
//! - Derived per-item scores (readiness, ROI) and the learning path structures
//! - Status, frequency, and recommendation enums with their display labels
//! - The engine result bundle consumed by reports and downstream dashboards
//! - Deterministic ID helpers and cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
