use super::resolve_config;
use crate::optimizer::Optimizer;
use crate::server;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

pub struct ServeConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
}

pub fn run(options: ServeConfig) -> Result<()> {
    let mut config = resolve_config(options.config.as_deref())?;
    if let Some(host) = options.host {
        config.server.host = host;
    }
    if let Some(port) = options.port {
        config.server.port = port;
    }
    let addr = config.server.bind_address();
    let optimizer = Arc::new(Optimizer::new(config));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(server::serve(optimizer, &addr))
}
