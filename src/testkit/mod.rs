//! Testing infrastructure for the optimizer.
//!
//! - **Builders**: [`BoundaryBuilder`] and [`ConfigBuilder`] for fixtures
//! - **Catalogs**: [`sample_catalog`], a small system with something to fix
//! - **Assertion macros**: Result, error-code, and score-range assertions
//!
//! # Quick Start
//!
//! ```rust
//! use boundmap::testkit::{BoundaryBuilder, ConfigBuilder};
//! use boundmap::Optimizer;
//!
//! let optimizer = Optimizer::new(ConfigBuilder::new().build());
//! let result = optimizer
//!     .optimize_boundaries(&[BoundaryBuilder::new("orders", "commerce").build()])
//!     .unwrap();
//! assert_eq!(result.optimized_boundaries.len(), 1);
//! ```

pub mod assertions;
pub mod helpers;

// proptest is a dev-dependency
#[cfg(test)]
pub mod proptest_generators;

// Assertion macros are exported at crate root via #[macro_export]
pub use helpers::{sample_catalog, BoundaryBuilder, ConfigBuilder, ContextRecordingIds};
