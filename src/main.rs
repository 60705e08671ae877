use anyhow::Result;
use clap::Parser;
use neurolab_core::init_logging;
use neurolab_lib::model::config::AppConfig;
use neurolab_lib::Simulation;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of ticks to simulate (overrides the config)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Construction seed (overrides the config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Print the final network snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = AppConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.network.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.simulation.ticks = ticks;
    }

    let mut sim = Simulation::new(&config)?;
    sim.run(config.simulation.ticks)?;

    let summary = sim.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Ran {} ticks: position ({:.2}, {:.2}), travelled {:.2}, {} recovering neurons (peak {})",
            summary.ticks,
            summary.position.x,
            summary.position.y,
            summary.distance_travelled,
            summary.recovering,
            summary.peak_recovering
        );
    }

    if args.snapshot {
        println!("{}", sim.agent().network().snapshot().to_json()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::parse_from(["neurolab"]);
        assert_eq!(args.config, "config.toml");
        assert_eq!(args.ticks, None);
        assert_eq!(args.seed, None);
        assert!(!args.json);
    }

    #[test]
    fn test_args_parsing_custom() {
        let args = Args::parse_from(["neurolab", "-c", "lab.toml", "-t", "100", "-s", "7", "--json"]);
        assert_eq!(args.config, "lab.toml");
        assert_eq!(args.ticks, Some(100));
        assert_eq!(args.seed, Some(7));
        assert!(args.json);
    }
}
