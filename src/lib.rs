// Export modules for library usage
pub mod boundmap_error;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod coupling;
pub mod io;
pub mod metrics;
pub mod migration;
pub mod observability;
pub mod optimizer;
pub mod recommendations;
pub mod server;
pub mod testkit;
pub mod transform;

// Re-export commonly used types
pub use crate::core::{
    BoundaryRecommendation, DependencyType, InterfaceType, MigrationPlan, OptimizationMetrics,
    OptimizationResult, RecommendationType, ServiceBoundary, ServiceDependency, ServiceHealth,
    ServiceInterface, ServiceMetrics, SystemMetrics,
};

pub use crate::boundmap_error::{BoundmapError, ErrorCode};
pub use crate::config::BoundmapConfig;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::{parse_boundaries, read_boundaries};
pub use crate::optimizer::{validate_boundaries, Optimizer};
