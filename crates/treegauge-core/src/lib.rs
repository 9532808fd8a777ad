//! TreeGauge Core — directory tree scanning and aggregation.
//!
//! This crate contains all business logic with zero UI dependencies.
//! It is designed to be reusable across different frontends (CLI, GUI, TUI).
//!
//! # Modules
//!
//! - [`model`] — The per-directory [`model::Node`] aggregate, snapshot
//!   persistence, and display formatting helpers.
//! - [`scanner`] — Explicit-stack tree walker with bottom-up aggregation,
//!   cooperative cancellation, and optional parallel child probing.
//! - [`platform`] — Path normalization and hidden/system directory
//!   classification, selected per platform at startup.
//! - [`export`] — CSV export of a node's immediate children.

pub mod export;
pub mod model;
pub mod platform;
pub mod scanner;
