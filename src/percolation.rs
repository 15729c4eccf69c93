use crate::disjoint_set::{reserve, DisjointSet};
use crate::error::{PercolationError, Result};

const TOP: usize = 0;

/// An n-by-n grid of sites, all blocked at creation.
///
/// Rows and columns are 1-indexed. Site `(row, col)` is element
/// `(row - 1) * n + col` of the union-find structures; element `0` is the
/// virtual top node and `n * n + 1` the virtual bottom node.
///
/// `connectivity` links both virtual nodes and answers `percolates`.
/// `connectivity_no_bottom` never sees the bottom node, so once the grid
/// percolates bottom-row sites cannot become full through it (backwash).
#[derive(Debug, Clone)]
pub struct Percolation {
	n: usize,
	sites: Vec<bool>,
	open_count: usize,
	connectivity: DisjointSet,
	connectivity_no_bottom: DisjointSet,
}

impl Percolation {
	pub fn new(n: usize) -> Result<Percolation> {
		if n == 0 {
			return Err(PercolationError::InvalidArgument("grid size n must be > 0".to_string()));
		}
		let cells = n.checked_mul(n)
			.filter(|c| c.checked_add(2).is_some())
			.ok_or_else(|| PercolationError::InvalidArgument(
				format!("grid size {} is too large", n)))?;

		let mut sites = reserve(cells)?;
		sites.resize(cells, false);

		Ok(Percolation {
			n,
			sites,
			open_count: 0,
			connectivity: DisjointSet::new(cells + 2)?,
			connectivity_no_bottom: DisjointSet::new(cells + 1)?,
		})
	}

	pub fn size(&self) -> usize {
		self.n
	}

	pub fn number_of_open_sites(&self) -> usize {
		self.open_count
	}

	/// Opens `(row, col)` and joins it to its open neighbours. Opening an
	/// open site does nothing.
	pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
		let site = self.index(row, col)?;
		if self.sites[site - 1] {
			return Ok(());
		}
		self.sites[site - 1] = true;
		self.open_count += 1;

		if row == 1 {
			self.connectivity.union(site, TOP)?;
			self.connectivity_no_bottom.union(site, TOP)?;
		}
		if row == self.n {
			let bottom = self.bottom();
			self.connectivity.union(site, bottom)?;
		}

		let n = self.n;
		let mut neighbours = Vec::with_capacity(4);
		if row > 1 { neighbours.push((row - 1, col)); }
		if row < n { neighbours.push((row + 1, col)); }
		if col > 1 { neighbours.push((row, col - 1)); }
		if col < n { neighbours.push((row, col + 1)); }

		for (r, c) in neighbours {
			let other = (r - 1) * n + c;
			if self.sites[other - 1] {
				self.connectivity.union(site, other)?;
				self.connectivity_no_bottom.union(site, other)?;
			}
		}
		Ok(())
	}

	pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
		let site = self.index(row, col)?;
		Ok(self.sites[site - 1])
	}

	/// An open site is full when a chain of open neighbours links it to the
	/// top row.
	pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
		let site = self.index(row, col)?;
		if !self.sites[site - 1] {
			return Ok(false);
		}
		self.connectivity_no_bottom.connected(site, TOP)
	}

	pub fn percolates(&self) -> bool {
		self.connectivity.same_root(TOP, self.bottom())
	}

	fn bottom(&self) -> usize {
		self.n * self.n + 1
	}

	fn index(&self, row: usize, col: usize) -> Result<usize> {
		for &v in [row, col].iter() {
			if v < 1 || v > self.n {
				return Err(PercolationError::OutOfRange { index: v, min: 1, max: self.n });
			}
		}
		Ok((row - 1) * self.n + col)
	}
}
