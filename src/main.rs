#[macro_use] extern crate log;
extern crate simplelog;
extern crate rand;
extern crate serde_json;
extern crate percolation;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::*;

use percolation::{positive_argument, PercolationStats};

/// Estimates the percolation threshold of an n-by-n grid by Monte Carlo simulation
#[derive(Parser)]
#[clap(name = "percolation", author, version, about, long_about = None)]
struct Args {
	/// Grid size n (the grid is n-by-n)
	#[clap(allow_negative_numbers = true)]
	n: i64,

	/// Number of independent trials
	#[clap(allow_negative_numbers = true)]
	trials: i64,

	/// Seed for a reproducible run
	#[clap(long)]
	seed: Option<u64>,

	/// Print the statistics as a JSON object
	#[clap(long)]
	json: bool,

	/// More log output on stderr (-v info, -vv debug)
	#[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
	verbose: u8,
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};
	let _ = CombinedLogger::init(
		vec![
			WriteLogger::new(
				level,
				Config {time: None, level: None, target: None, location: None, time_format: None},
				std::io::stderr()),
		]
	);
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.verbose);

	let n = positive_argument("grid size n", args.n)?;
	let trials = positive_argument("number of trials", args.trials)?;

	let stats = match args.seed {
		Some(seed) => {
			info!("seeding with {}", seed);
			PercolationStats::with_rng(n, trials, &mut StdRng::seed_from_u64(seed))
		}
		None => PercolationStats::new(n, trials),
	}.with_context(|| format!("running {} trials on a {}-by-{} grid", trials, n, n))?;

	if args.json {
		println!("{}", serde_json::to_string(&stats.summary())?);
	} else {
		println!("mean                    = {}", stats.mean());
		println!("stddev                  = {}", stats.stddev());
		println!("95% confidence interval = {}, {}", stats.confidence_lo(), stats.confidence_hi());
	}
	Ok(())
}
