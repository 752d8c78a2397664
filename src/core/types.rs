//! Wire and domain types for service decompositions.
//!
//! Every type here serializes with camelCase field names so the JSON shape
//! matches what catalog producers already emit. Enum values use snake_case.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport style of a service interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceType {
    Rest,
    Graphql,
    Grpc,
    MessageQueue,
    EventStream,
}

impl InterfaceType {
    /// Request/response transports with cheap, well-understood call paths.
    pub fn is_efficient(&self) -> bool {
        matches!(self, InterfaceType::Rest | InterfaceType::Grpc)
    }

    /// Versioning strategy an interface of this type should use.
    pub fn preferred_versioning(&self) -> VersioningStrategy {
        match self {
            InterfaceType::Rest => VersioningStrategy::Url,
            InterfaceType::Graphql => VersioningStrategy::None,
            _ => VersioningStrategy::Header,
        }
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterfaceType::Rest => "rest",
            InterfaceType::Graphql => "graphql",
            InterfaceType::Grpc => "grpc",
            InterfaceType::MessageQueue => "message_queue",
            InterfaceType::EventStream => "event_stream",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersioningStrategy {
    #[default]
    None,
    Url,
    Header,
    ContentNegotiation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    #[default]
    Query,
    Command,
    Event,
}

/// A single operation exposed through an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceOperation {
    pub name: String,
    #[serde(rename = "type", default)]
    pub operation_type: OperationType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInterface {
    #[serde(rename = "type")]
    pub interface_type: InterfaceType,
    #[serde(default)]
    pub operations: Vec<InterfaceOperation>,
    #[serde(default)]
    pub versioning: VersioningStrategy,
}

impl ServiceInterface {
    pub fn new(interface_type: InterfaceType) -> Self {
        Self {
            interface_type,
            operations: Vec::new(),
            versioning: VersioningStrategy::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyType {
    Synchronous,
    Asynchronous,
    EventDriven,
}

impl DependencyType {
    /// Whether the caller is decoupled from the callee's latency.
    pub fn is_non_blocking(&self) -> bool {
        matches!(self, DependencyType::Asynchronous | DependencyType::EventDriven)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criticality {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStrategy {
    #[default]
    FailFast,
    GracefulDegradation,
    CircuitBreaker,
    Retry,
}

/// An outgoing dependency on another service, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDependency {
    pub service: String,
    #[serde(rename = "type")]
    pub dependency_type: DependencyType,
    pub criticality: Criticality,
    #[serde(default)]
    pub fallback_strategy: FallbackStrategy,
}

impl ServiceDependency {
    pub fn new(service: impl Into<String>, dependency_type: DependencyType) -> Self {
        Self {
            service: service.into(),
            dependency_type,
            criticality: Criticality::Medium,
            fallback_strategy: FallbackStrategy::FailFast,
        }
    }

    /// True when this dependency points at `boundary` by name or id.
    pub fn targets(&self, boundary: &ServiceBoundary) -> bool {
        self.service == boundary.name || self.service == boundary.id
    }
}

/// Five quality scores for a single service, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetrics {
    pub cohesion: f64,
    pub coupling: f64,
    pub complexity: f64,
    pub maintainability: f64,
    pub performance: f64,
}

/// A deployable unit: its responsibilities, interfaces, dependencies and the
/// data it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBoundary {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub features: Vec<String>,
    pub responsibilities: Vec<String>,
    pub interfaces: Vec<ServiceInterface>,
    pub dependencies: Vec<ServiceDependency>,
    pub data_ownership: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ServiceMetrics>,
}

impl ServiceBoundary {
    pub fn owns(&self, entity: &str) -> bool {
        self.data_ownership.iter().any(|owned| owned == entity)
    }

    /// Copy of this boundary with computed metrics attached.
    #[must_use]
    pub fn with_metrics(&self, metrics: ServiceMetrics) -> Self {
        Self {
            metrics: Some(metrics),
            ..self.clone()
        }
    }
}

/// System-wide means of the per-service scores plus domain alignment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    pub cohesion: f64,
    pub coupling: f64,
    pub complexity: f64,
    pub maintainability: f64,
    pub performance: f64,
    pub domain_alignment: f64,
}

/// Before/after system metrics and the headline deltas between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationMetrics {
    pub original: SystemMetrics,
    pub optimized: SystemMetrics,
    pub complexity_reduction: f64,
    pub performance_impact: f64,
    pub maintainability_improvement: f64,
}

impl OptimizationMetrics {
    pub fn between(original: SystemMetrics, optimized: SystemMetrics) -> Self {
        Self {
            original,
            optimized,
            complexity_reduction: original.complexity - optimized.complexity,
            performance_impact: optimized.performance - original.performance,
            maintainability_improvement: optimized.maintainability - original.maintainability,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    MergeServices,
    SplitService,
    ExtractFeature,
    ConsolidateData,
    RedesignInterface,
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecommendationType::MergeServices => "merge_services",
            RecommendationType::SplitService => "split_service",
            RecommendationType::ExtractFeature => "extract_feature",
            RecommendationType::ConsolidateData => "consolidate_data",
            RecommendationType::RedesignInterface => "redesign_interface",
        };
        f.write_str(name)
    }
}

/// Three-level scale shared by priority, complexity and risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryRecommendation {
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub services: Vec<String>,
    pub reasoning: String,
    pub priority: Level,
    pub estimated_impact: Impact,
    pub implementation_complexity: Level,
    pub estimated_effort: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationPhase {
    pub id: String,
    pub name: String,
    pub description: String,
    pub recommendations: Vec<RecommendationType>,
    pub estimated_duration: String,
    pub prerequisites: Vec<String>,
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub factor: String,
    pub impact: Level,
    pub probability: Level,
    pub mitigation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub overall_risk: Level,
    pub risk_factors: Vec<RiskFactor>,
    pub mitigation_strategies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationPlan {
    pub phases: Vec<MigrationPhase>,
    pub total_duration: String,
    pub risk_assessment: RiskAssessment,
    pub rollback_strategy: Vec<String>,
}

/// Complete answer to one optimization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub original_boundaries: Vec<ServiceBoundary>,
    pub optimized_boundaries: Vec<ServiceBoundary>,
    pub optimization_metrics: OptimizationMetrics,
    pub recommendations: Vec<BoundaryRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_plan: Option<MigrationPlan>,
}

/// Per-service entry of a health report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    pub service_id: String,
    pub service_name: String,
    #[serde(flatten)]
    pub metrics: ServiceMetrics,
}
