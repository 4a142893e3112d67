//! # Contest Analyzer
//!
//! Answers questions about a contest roster: best and worst totals, breed
//! averages, the winner, the leaders, and whether the results are complete.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends only on `core-types`
//!   and `configuration` and never performs I/O.
//! - **Stateless Calculation:** `ContestAnalyzer` holds nothing but its settings.
//!   Every query reads the roster it is handed and leaves it untouched.
//!
//! ## Public API
//!
//! - `ContestAnalyzer`: The struct that contains the query logic.
//! - `ContestReport`: A serializable snapshot of every query at once.
//! - `AnalyzerError`: The specific error types that can be returned from this crate.
//! - `NO_RESULT`: The sentinel returned by `max_result`/`min_result` when nothing qualifies.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{ContestAnalyzer, NO_RESULT};
pub use error::AnalyzerError;
pub use report::ContestReport;
