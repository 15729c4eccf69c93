#[macro_use] extern crate log;
extern crate rand;
extern crate serde;

mod disjoint_set;
mod error;
mod percolation;
mod stats;

pub use disjoint_set::DisjointSet;
pub use error::{PercolationError, Result, positive_argument};
pub use percolation::Percolation;
pub use stats::{PercolationStats, Summary};
