use anyhow::Result;
use boundmap::boundmap_error::BoundmapError;
use boundmap::cli::{Cli, Commands};
use boundmap::commands::{health, init, optimize, serve};
use clap::Parser;

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Optimize {
            input,
            format,
            output,
            config,
            threshold_preset,
            plan_mode,
        } => optimize::run(optimize::OptimizeConfig {
            input,
            format,
            output,
            config,
            threshold_preset: threshold_preset.map(Into::into),
            plan_mode: plan_mode.map(Into::into),
        }),
        Commands::Health {
            input,
            format,
            output,
            config,
        } => health::run(health::HealthConfig {
            input,
            format,
            output,
            config,
        }),
        Commands::Serve { host, port, config } => {
            serve::run(serve::ServeConfig { host, port, config })
        }
        Commands::Init { force } => init::init_config(force),
    }
}

fn main() {
    let cli = Cli::parse();
    boundmap::observability::init_logging(cli.verbosity);
    boundmap::observability::install_panic_hook();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<BoundmapError>()
            .map_or(1, BoundmapError::exit_code);
        std::process::exit(code);
    }
}
