//! # Abacus Calculation Engine
//!
//! Arithmetic operations over [`core_types::Number`] and the session object
//! that records them.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** Pure, synchronous computation over `core-types`.
//!   The only side effects are trace events and the history append.
//! - **Validate, Compute, Record:** Each operation validates its inputs and
//!   computes before anything is recorded, so the history never contains a
//!   failed calculation.
//!
//! ## Public API
//!
//! - `ops`: the stateless arithmetic functions.
//! - `Calculator`: the session object that owns a history store and records
//!   each successful calculation into it.

// Declare the modules that constitute this crate.
pub mod calculator;
pub mod ops;

// Re-export the key components to create a clean, public-facing API.
pub use calculator::Calculator;
