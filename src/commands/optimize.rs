use super::{output_writer, resolve_config};
use crate::config::presets::PresetLevel;
use crate::config::{BoundmapConfig, PlanMode};
use crate::io::{read_boundaries, OutputFormat};
use crate::optimizer::Optimizer;
use anyhow::Result;
use std::path::PathBuf;

pub struct OptimizeConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub threshold_preset: Option<PresetLevel>,
    pub plan_mode: Option<PlanMode>,
}

/// Layer command-line overrides on top of the file configuration.
pub fn apply_overrides(
    config: BoundmapConfig,
    preset: Option<PresetLevel>,
    plan_mode: Option<PlanMode>,
) -> BoundmapConfig {
    let mut config = match preset {
        Some(preset) => preset.apply(config),
        None => config,
    };
    if let Some(mode) = plan_mode {
        config.plan.mode = mode;
    }
    config
}

pub fn run(options: OptimizeConfig) -> Result<()> {
    let config = apply_overrides(
        resolve_config(options.config.as_deref())?,
        options.threshold_preset,
        options.plan_mode,
    );
    let boundaries = read_boundaries(&options.input)?;
    log::info!(
        "Optimizing {} services from {}",
        boundaries.len(),
        options.input.display()
    );

    let result = Optimizer::new(config).optimize_boundaries(&boundaries)?;
    output_writer(options.format, options.output.as_deref())?.write_optimization(&result)
}
