use std::convert::TryFrom;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
	/// A size or count that has to be positive was not.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// An index fell outside the inclusive range `[min, max]`.
	#[error("index {index} out of range [{min}, {max}]")]
	OutOfRange { index: usize, min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, PercolationError>;

/// Converts a signed command-line value into a positive size.
pub fn positive_argument(name: &str, value: i64) -> Result<usize> {
	match usize::try_from(value) {
		Ok(v) if v > 0 => Ok(v),
		_ => Err(PercolationError::InvalidArgument(
			format!("{} must be > 0, got {}", name, value))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_zero_and_negative() {
		assert!(matches!(positive_argument("n", 0), Err(PercolationError::InvalidArgument(_))));
		assert!(matches!(positive_argument("n", -3), Err(PercolationError::InvalidArgument(_))));
		assert_eq!(positive_argument("trials", 7), Ok(7));
	}

	#[test]
	fn out_of_range_message() {
		let err = PercolationError::OutOfRange { index: 5, min: 1, max: 4 };
		assert_eq!(err.to_string(), "index 5 out of range [1, 4]");
	}
}
