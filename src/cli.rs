use crate::config::presets::PresetLevel;
use crate::config::PlanMode;
use crate::io::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThresholdPreset {
    /// Restructure eagerly: merge looser pairs, split more services
    Strict,
    /// Default thresholds
    Balanced,
    /// Only act on clear-cut cases
    Lenient,
}

impl From<ThresholdPreset> for PresetLevel {
    fn from(preset: ThresholdPreset) -> Self {
        match preset {
            ThresholdPreset::Strict => PresetLevel::Strict,
            ThresholdPreset::Balanced => PresetLevel::Balanced,
            ThresholdPreset::Lenient => PresetLevel::Lenient,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanModeArg {
    /// Fixed four-phase plan
    Template,
    /// Implementation phase sized by the number of recommendations
    Scaled,
}

impl From<PlanModeArg> for PlanMode {
    fn from(mode: PlanModeArg) -> Self {
        match mode {
            PlanModeArg::Template => PlanMode::Template,
            PlanModeArg::Scaled => PlanMode::Scaled,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "boundmap")]
#[command(about = "Service boundary analyzer and optimizer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Propose an improved decomposition, recommendations and a migration plan
    Optimize {
        /// JSON file holding an array of service boundaries
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to discovering .boundmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured thresholds with a preset
        #[arg(long = "threshold-preset", value_enum)]
        threshold_preset: Option<ThresholdPreset>,

        /// Override the configured migration plan mode
        #[arg(long = "plan-mode", value_enum)]
        plan_mode: Option<PlanModeArg>,
    },

    /// Score every service without changing anything
    Health {
        /// JSON file holding an array of service boundaries
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to discovering .boundmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Serve the optimizer over HTTP
    Serve {
        /// Address to bind (overrides [server] host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides [server] port)
        #[arg(long, env = "BOUNDMAP_PORT")]
        port: Option<u16>,

        /// Configuration file (defaults to discovering .boundmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default .boundmap.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
