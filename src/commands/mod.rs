pub mod health;
pub mod init;
pub mod optimize;
pub mod serve;

use crate::boundmap_error::BoundmapError;
use crate::config::{load_config, load_config_from, BoundmapConfig};
use crate::io::{create_writer, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// An explicit config file must load cleanly; otherwise discover one and fall
/// back to defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<BoundmapConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .map_err(BoundmapError::from)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(load_config()),
    }
}

pub fn output_writer(format: OutputFormat, output: Option<&Path>) -> Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn io::Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    };
    Ok(create_writer(format, sink))
}
