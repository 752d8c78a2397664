pub mod types;

pub use types::{
    BoundaryRecommendation, Criticality, DependencyType, FallbackStrategy, Impact,
    InterfaceOperation, InterfaceType, Level, MigrationPhase, MigrationPlan, OperationType,
    OptimizationMetrics, OptimizationResult, RecommendationType, RiskAssessment, RiskFactor,
    ServiceBoundary, ServiceDependency, ServiceHealth, ServiceInterface, ServiceMetrics,
    SystemMetrics, VersioningStrategy,
};
