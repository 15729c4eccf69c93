// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use crate::error::{PercolationError, Result};

/// Weighted quick-union over the fixed universe `[0, len)`.
///
/// Trees are merged by size so a root is never more than `log2(len)` links
/// away. Paths walked during `union` are compressed onto the new root, which
/// keeps `find` read-only.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	size: Vec<usize>,
	count: usize,
}

impl DisjointSet {
	pub fn new(len: usize) -> Result<DisjointSet> {
		if len == 0 {
			return Err(PercolationError::InvalidArgument(
				"disjoint set needs at least one element".to_string()));
		}
		let mut parent = reserve(len)?;
		parent.extend(0..len);
		let mut size = reserve(len)?;
		size.resize(len, 1);
		Ok(DisjointSet { parent, size, count: len })
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	/// Number of components.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn find(&self, x: usize) -> Result<usize> {
		self.validate(x)?;
		Ok(self.root(x))
	}

	pub fn connected(&self, x: usize, y: usize) -> Result<bool> {
		self.validate(x)?;
		self.validate(y)?;
		Ok(self.root(x) == self.root(y))
	}

	/// Root comparison for indices the caller already knows are in range.
	pub(crate) fn same_root(&self, x: usize, y: usize) -> bool {
		self.root(x) == self.root(y)
	}

	pub fn component_size(&self, x: usize) -> Result<usize> {
		let root = self.find(x)?;
		Ok(self.size[root])
	}

	/// Merges the components of `x` and `y`. Returns false when they were
	/// already the same component.
	pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
		self.validate(x)?;
		self.validate(y)?;
		let x_root = self.root(x);
		let y_root = self.root(y);
		if x_root == y_root {
			self.compress(x, x_root);
			self.compress(y, y_root);
			return Ok(false);
		}

		let (big, small) = if self.size[x_root] < self.size[y_root] {
			(y_root, x_root)
		} else {
			(x_root, y_root)
		};
		self.parent[small] = big;
		self.size[big] += self.size[small];
		self.count -= 1;

		self.compress(x, big);
		self.compress(y, big);
		Ok(true)
	}

	fn root(&self, mut x: usize) -> usize {
		while self.parent[x] != x {
			x = self.parent[x];
		}
		x
	}

	// every node on the path from x must already lead to root
	fn compress(&mut self, mut x: usize, root: usize) {
		while x != root {
			let next = self.parent[x];
			self.parent[x] = root;
			x = next;
		}
	}

	fn validate(&self, x: usize) -> Result<()> {
		if x >= self.parent.len() {
			return Err(PercolationError::OutOfRange {
				index: x,
				min: 0,
				max: self.parent.len() - 1,
			});
		}
		Ok(())
	}
}

/// Empty vector with room for exactly `len` items, or `InvalidArgument` when
/// the allocation fails.
pub(crate) fn reserve<T>(len: usize) -> Result<Vec<T>> {
	let mut v = Vec::new();
	v.try_reserve_exact(len).map_err(|e| PercolationError::InvalidArgument(
		format!("cannot allocate {} elements: {}", len, e)))?;
	Ok(v)
}
