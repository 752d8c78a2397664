//! Thread-local context tracking for crash reports and error messages.
//!
//! Records which optimization phase, transformer stage and service the
//! current thread is working on. Every request is handled on one thread from
//! start to finish, so thread-local storage keeps concurrent requests apart
//! without any locking.
//!
//! Context guards use RAII for automatic cleanup on drop.

use std::cell::RefCell;

thread_local! {
    static CURRENT_CONTEXT: RefCell<OptimizationContext> = const { RefCell::new(OptimizationContext::new()) };
}

/// Context snapshot for the current optimization request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizationContext {
    /// Current optimization phase
    pub phase: Option<OptimizationPhase>,
    /// Transformer stage being applied (if applicable)
    pub current_stage: Option<String>,
    /// Service currently being scored or transformed (if applicable)
    pub current_service: Option<String>,
}

impl OptimizationContext {
    /// Create a new empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_stage: None,
            current_service: None,
        }
    }
}

/// Major stages of an optimization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimizationPhase {
    /// Checking the submitted boundaries
    Validation,
    /// Scoring services and the system as a whole
    MetricsCalculation,
    /// Building the pairwise coupling matrix
    CouplingAnalysis,
    /// Applying the boundary transformation stages
    Transformation,
    /// Diffing original and optimized decompositions
    Recommendation,
    /// Synthesizing the phased migration plan
    MigrationPlanning,
    /// Rendering results
    OutputGeneration,
}

impl std::fmt::Display for OptimizationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::MetricsCalculation => write!(f, "metrics_calculation"),
            Self::CouplingAnalysis => write!(f, "coupling_analysis"),
            Self::Transformation => write!(f, "transformation"),
            Self::Recommendation => write!(f, "recommendation"),
            Self::MigrationPlanning => write!(f, "migration_planning"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard for restoring context on drop.
///
/// When the guard is dropped, it restores the previous context,
/// enabling nested context tracking (e.g., service within stage within phase).
pub struct ContextGuard {
    previous: OptimizationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update_context(apply: impl FnOnce(&mut OptimizationContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current optimization phase.
///
/// Returns a guard that restores the previous phase on drop.
#[must_use]
pub fn set_phase(phase: OptimizationPhase) -> ContextGuard {
    update_context(|ctx| ctx.phase = Some(phase))
}

/// Set the transformer stage being applied.
#[must_use]
pub fn set_current_stage(stage: impl Into<String>) -> ContextGuard {
    let stage = stage.into();
    update_context(|ctx| ctx.current_stage = Some(stage))
}

/// Set the service currently being processed.
#[must_use]
pub fn set_current_service(name: impl Into<String>) -> ContextGuard {
    let name = name.into();
    update_context(|ctx| ctx.current_service = Some(name))
}

/// Get the current context snapshot.
///
/// Called by the panic hook to include context in crash reports.
#[must_use]
pub fn get_current_context() -> OptimizationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Reset the current thread's context to empty.
///
/// Useful for testing.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = OptimizationContext::new();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_guard_restores_previous() {
        reset_context();

        let _phase1 = set_phase(OptimizationPhase::MetricsCalculation);
        {
            let _phase2 = set_phase(OptimizationPhase::Transformation);
            assert_eq!(
                get_current_context().phase,
                Some(OptimizationPhase::Transformation)
            );
        }

        assert_eq!(
            get_current_context().phase,
            Some(OptimizationPhase::MetricsCalculation),
            "Phase should be restored after inner guard drops"
        );
    }

    #[test]
    fn test_nested_context_guards() {
        reset_context();

        let _phase = set_phase(OptimizationPhase::Transformation);
        let _stage = set_current_stage("split_low_cohesion");
        let _service = set_current_service("catalog");

        let ctx = get_current_context();
        assert_eq!(ctx.phase, Some(OptimizationPhase::Transformation));
        assert_eq!(ctx.current_stage.as_deref(), Some("split_low_cohesion"));
        assert_eq!(ctx.current_service.as_deref(), Some("catalog"));
    }

    #[test]
    fn test_context_cleared_after_all_guards_drop() {
        reset_context();
        {
            let _phase = set_phase(OptimizationPhase::Validation);
            let _service = set_current_service("x");
        }
        assert_eq!(get_current_context(), OptimizationContext::new());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(format!("{}", OptimizationPhase::Validation), "validation");
        assert_eq!(
            format!("{}", OptimizationPhase::CouplingAnalysis),
            "coupling_analysis"
        );
        assert_eq!(
            format!("{}", OptimizationPhase::MigrationPlanning),
            "migration_planning"
        );
    }
}
