use serde::{Deserialize, Serialize};

use super::loader::ConfigLoadError;
use super::scoring::ScoringWeights;
use super::thresholds::ThresholdsConfig;

/// How the migration planner sizes its phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanMode {
    /// Fixed four-phase template, independent of the recommendations.
    #[default]
    Template,
    /// Implementation duration and risk scale with the recommendation set.
    Scaled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default)]
    pub mode: PlanMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Root configuration structure for boundmap
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundmapConfig {
    /// Restructuring thresholds
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    /// Cohesion and coupling weights
    #[serde(default)]
    pub scoring: ScoringWeights,

    /// Migration plan sizing
    #[serde(default)]
    pub plan: PlanConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl BoundmapConfig {
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.thresholds
            .validate()
            .map_err(|(field, reason)| ConfigLoadError::Invalid {
                field: format!("thresholds.{}", field),
                reason,
            })?;
        self.scoring
            .validate()
            .map_err(|reason| ConfigLoadError::Invalid {
                field: "scoring".to_string(),
                reason,
            })?;
        Ok(())
    }
}
