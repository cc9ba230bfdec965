use anyhow::{Context, Result};
use clap::Parser;
use shipbreak_integrator::cli::{self, Args};
use shipbreak_integrator::{IntegrationConfig, IntegrationPipeline};
use std::process;
use tracing::debug;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(error) = run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    let config = match &args.config {
        Some(path) => IntegrationConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => IntegrationConfig::default(),
    };

    let pipeline =
        IntegrationPipeline::with_config(args.input_dir.clone(), args.output.clone(), &config)
            .context("Failed to initialize pipeline")?
            .with_progress(args.show_progress());

    if args.discovery_only {
        let reports = pipeline.discover().context("Schema discovery failed")?;
        if args.summary_json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            cli::print_discovery_report(&reports);
        }
        return Ok(());
    }

    let output = pipeline.run().context("Integration failed")?;

    if args.summary_json {
        println!("{}", serde_json::to_string_pretty(&output.stats)?);
    } else {
        cli::print_summary(&output.stats);
        cli::print_preview(&output.frame, args.preview_rows);
    }

    Ok(())
}

/// Set up structured logging on stderr
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shipbreak_integrator={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
