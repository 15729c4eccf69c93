use rand::Rng;
use serde::Serialize;

use crate::error::{PercolationError, Result};
use crate::percolation::Percolation;

const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimate of the percolation threshold of an n-by-n grid.
///
/// All trials run inside the constructor. Each trial opens random blocked
/// sites of a fresh grid until it percolates and records the fraction of
/// sites that ended up open.
#[derive(Debug, Clone)]
pub struct PercolationStats {
	n: usize,
	thresholds: Vec<f64>,
}

/// Snapshot of an experiment, as printed by `percolation --json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
	pub n: usize,
	pub trials: usize,
	pub mean: f64,
	pub stddev: f64,
	pub confidence_lo: f64,
	pub confidence_hi: f64,
}

impl PercolationStats {
	pub fn new(n: usize, trials: usize) -> Result<PercolationStats> {
		PercolationStats::with_rng(n, trials, &mut rand::thread_rng())
	}

	pub fn with_rng<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<PercolationStats> {
		if n == 0 || trials == 0 {
			return Err(PercolationError::InvalidArgument(format!(
				"grid size n and number of trials must be > 0, got n = {}, trials = {}", n, trials)));
		}

		let mut thresholds = Vec::with_capacity(trials);
		for t in 0..trials {
			let opened = run_trial(n, rng)?;
			let fraction = opened as f64 / (n * n) as f64;
			debug!("trial {}: {} of {} sites open, threshold {}", t, opened, n * n, fraction);
			thresholds.push(fraction);
		}

		let stats = PercolationStats { n, thresholds };
		info!("n = {}, trials = {}: mean threshold {}", n, trials, stats.mean());
		if trials == 1 {
			warn!("a single trial has no sample standard deviation");
		}
		Ok(stats)
	}

	pub fn grid_size(&self) -> usize {
		self.n
	}

	pub fn trials(&self) -> usize {
		self.thresholds.len()
	}

	/// Fraction of open sites at the moment each trial percolated.
	pub fn thresholds(&self) -> &[f64] {
		&self.thresholds
	}

	pub fn mean(&self) -> f64 {
		self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
	}

	/// Sample standard deviation. `NaN` when there was only one trial.
	pub fn stddev(&self) -> f64 {
		let count = self.thresholds.len();
		if count < 2 {
			return std::f64::NAN;
		}
		let mean = self.mean();
		let sum_sq = self.thresholds.iter()
			.map(|x| (x - mean) * (x - mean))
			.sum::<f64>();
		(sum_sq / (count - 1) as f64).sqrt()
	}

	pub fn confidence_lo(&self) -> f64 {
		self.mean() - self.half_width()
	}

	pub fn confidence_hi(&self) -> f64 {
		self.mean() + self.half_width()
	}

	pub fn summary(&self) -> Summary {
		Summary {
			n: self.n,
			trials: self.trials(),
			mean: self.mean(),
			stddev: self.stddev(),
			confidence_lo: self.confidence_lo(),
			confidence_hi: self.confidence_hi(),
		}
	}

	fn half_width(&self) -> f64 {
		CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
	}
}

/// Opens uniformly random blocked sites of a fresh grid until it percolates.
/// Returns how many sites were opened.
fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<usize> {
	let mut grid = Percolation::new(n)?;
	while !grid.percolates() {
		let row = rng.gen_range(1..=n);
		let col = rng.gen_range(1..=n);
		if !grid.is_open(row, col)? {
			grid.open(row, col)?;
		}
	}
	Ok(grid.number_of_open_sites())
}
