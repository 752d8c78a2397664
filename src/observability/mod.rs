//! Observability infrastructure for crash reports and debugging.
//!
//! ## Features
//!
//! - **Panic Hook**: Produces structured crash reports with context
//! - **Context Tracking**: Thread-local phase, stage and service tracking
//! - **Logging**: `tracing-subscriber` setup driven by `-v` and `RUST_LOG`
//!
//! ## Usage
//!
//! ```ignore
//! use boundmap::observability::{set_phase, set_current_service, OptimizationPhase};
//!
//! fn score(boundaries: &[ServiceBoundary]) {
//!     let _phase = set_phase(OptimizationPhase::MetricsCalculation);
//!     for boundary in boundaries {
//!         let _service = set_current_service(&boundary.name);
//!         // If a panic occurs here, the crash report names the service
//!     }
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, reset_context, set_current_service, set_current_stage, set_phase,
    ContextGuard, OptimizationContext, OptimizationPhase,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::init_logging;
