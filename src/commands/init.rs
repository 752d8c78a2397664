use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# Boundmap Configuration

[thresholds]
# Merge pairs whose coupling is above this
merge_coupling = 0.7
# Split services whose cohesion is below this...
split_cohesion = 0.6
# ...and that have at least this many features
min_split_features = 4
# Merge same-domain services whose feature overlap is above this
domain_similarity = 0.6

[scoring.cohesion]
domain_overlap = 0.4
responsibility_focus = 0.3
data_ownership = 0.3

[scoring.coupling]
direct_dependency = 0.3
shared_data = 0.4
shared_interface_type = 0.2
same_domain = 0.3

[plan]
# "template" or "scaled"
mode = "template"

[server]
host = "127.0.0.1"
port = 8080
"#;

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}
