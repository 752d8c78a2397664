use super::{output_writer, resolve_config};
use crate::io::{read_boundaries, OutputFormat};
use crate::optimizer::Optimizer;
use anyhow::Result;
use std::path::PathBuf;

pub struct HealthConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run(options: HealthConfig) -> Result<()> {
    let config = resolve_config(options.config.as_deref())?;
    let boundaries = read_boundaries(&options.input)?;
    let health = Optimizer::new(config).analyze_service_health(&boundaries)?;
    output_writer(options.format, options.output.as_deref())?.write_health(&health)
}
