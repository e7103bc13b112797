//! Command-line arguments and start-up for the `ridepool` binary.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pool_core::{demo, RidePool};
use tracing::info;

use crate::config::{CliConfig, LogFormat};
use crate::logging::init_tracing;
use crate::repl::Repl;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "ridepool",
    version,
    about = "Ride-pooling registry: register users and vehicles, offer and select rides"
)]
pub struct Args {
    /// JSON config file.
    #[arg(short, long, env = "RIDEPOOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "info", "pool_core=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log line format.
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Start with an empty registry instead of the demo data.
    #[arg(long)]
    pub no_demo: bool,

    /// Maximum rides per multi-hop itinerary (0 = unlimited).
    #[arg(long)]
    pub max_hops: Option<usize>,

    /// Maximum itineraries returned by a multi-hop search (0 = unlimited).
    #[arg(long)]
    pub max_itineraries: Option<usize>,
}

impl Args {
    /// Load the config file (if any) and apply command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<CliConfig> {
        let mut config = CliConfig::load_optional(self.config.as_deref())
            .context("loading ridepool configuration")?;
        if let Some(level) = &self.log_level {
            config.logging.level = Some(level.clone());
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
        if self.no_demo {
            config.demo_data = false;
        }
        if let Some(max_hops) = self.max_hops {
            config.pool = config.pool.with_max_hops(max_hops);
        }
        if let Some(max_itineraries) = self.max_itineraries {
            config.pool = config.pool.with_max_itineraries(max_itineraries);
        }
        Ok(config)
    }
}

/// Build the pool, optionally seeding demo data and printing what happened.
pub fn build_pool(config: &CliConfig, output: &mut impl Write) -> io::Result<RidePool> {
    let mut pool = RidePool::new(config.pool);
    if config.demo_data {
        writeln!(output, "POPULATING DUMMY DATA FOR USER, VEHICLE and OFFER")?;
        for event in demo::populate(&mut pool) {
            writeln!(output, "{event}")?;
        }
    }
    Ok(pool)
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let config = args.resolve_config()?;
    init_tracing(&config.logging);
    info!(
        max_hops = config.pool.search.max_hops,
        max_itineraries = config.pool.search.max_itineraries,
        demo_data = config.demo_data,
        "ridepool starting"
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let pool = build_pool(&config, &mut output).context("writing demo output")?;

    let stdin = io::stdin();
    let mut repl = Repl::new(pool, stdin.lock(), output);
    repl.run().context("console I/O failed")?;

    info!(totals = %repl.pool().totals(), "ridepool exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "ridepool",
            "--no-demo",
            "--max-hops",
            "2",
            "--log-format",
            "json",
        ]);
        let config = args.resolve_config().unwrap();
        assert!(!config.demo_data);
        assert_eq!(config.pool.search.max_hops, 2);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn demo_output_lists_each_step() {
        let mut output = Vec::new();
        let pool = build_pool(&CliConfig::default(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Offer rejected: ride already active for vehicle KA-01-12345"));
        assert_eq!(pool.store().ride_count(), 6);
    }

    #[test]
    fn no_demo_builds_empty_pool() {
        let config = CliConfig {
            demo_data: false,
            ..CliConfig::default()
        };
        let mut output = Vec::new();
        let pool = build_pool(&config, &mut output).unwrap();
        assert!(output.is_empty());
        assert_eq!(pool.store().ride_count(), 0);
    }
}
