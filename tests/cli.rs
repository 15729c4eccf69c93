/// Command-line tests for the `percolation` and `uf_client` binaries
///
/// Runs the built executables and checks their output and exit status.
use anyhow::Result;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn percolation(args: &[&str]) -> Result<Output> {
	Ok(Command::new(env!("CARGO_BIN_EXE_percolation")).args(args).output()?)
}

fn uf_client(input: &str) -> Result<Output> {
	let mut child = Command::new(env!("CARGO_BIN_EXE_uf_client"))
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()?;
	child.stdin.take().expect("stdin is piped").write_all(input.as_bytes())?;
	Ok(child.wait_with_output()?)
}

/// Zero and negative sizes or trial counts fail with a message
#[test]
fn test_non_positive_arguments_fail() -> Result<()> {
	for args in [["0", "5"], ["-3", "5"], ["4", "0"], ["4", "-1"]].iter() {
		let output = percolation(args)?;
		assert!(!output.status.success(), "{:?} should fail", args);
		let stderr = String::from_utf8_lossy(&output.stderr);
		assert!(stderr.contains("must be > 0"), "{:?} gave stderr: {}", args, stderr);
		assert!(output.stdout.is_empty());
	}
	Ok(())
}

#[test]
fn test_non_numeric_argument_fails() -> Result<()> {
	let output = percolation(&["four", "5"])?;
	assert!(!output.status.success());
	Ok(())
}

/// Default output is the mean, stddev and confidence interval lines
#[test]
fn test_three_line_report() -> Result<()> {
	let output = percolation(&["4", "10", "--seed", "1"])?;
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout)?;
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(lines.len(), 3, "got: {}", stdout);

	let value = |line: &str, prefix: &str| -> f64 {
		assert!(line.starts_with(prefix), "{:?} should start with {:?}", line, prefix);
		line[prefix.len()..].trim().parse().unwrap()
	};
	let mean = value(lines[0], "mean                    = ");
	let stddev = value(lines[1], "stddev                  = ");
	assert!(mean > 0.0 && mean <= 1.0);
	assert!(stddev >= 0.0);

	let interval: Vec<f64> = lines[2]
		.trim_start_matches("95% confidence interval = ")
		.split(", ")
		.map(|v| v.parse().unwrap())
		.collect();
	assert!(lines[2].starts_with("95% confidence interval = "));
	assert_eq!(interval.len(), 2);
	assert!(interval[0] <= mean && mean <= interval[1]);
	Ok(())
}

#[test]
fn test_seeded_runs_print_the_same() -> Result<()> {
	let first = percolation(&["6", "25", "--seed", "99"])?;
	let second = percolation(&["6", "25", "--seed", "99"])?;
	assert!(first.status.success() && second.status.success());
	assert_eq!(first.stdout, second.stdout);
	Ok(())
}

/// A single trial has no standard deviation, which JSON shows as null
#[test]
fn test_json_single_trial() -> Result<()> {
	let output = percolation(&["--json", "20", "1"])?;
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout)?;
	assert_eq!(stdout.lines().count(), 1);
	let json: serde_json::Value = serde_json::from_str(&stdout)?;
	assert_eq!(json["n"], 20);
	assert_eq!(json["trials"], 1);
	assert!(json["stddev"].is_null());
	assert!(json["confidence_lo"].is_null());
	let mean = json["mean"].as_f64().unwrap();
	assert!(mean > 0.0 && mean <= 1.0);
	Ok(())
}

#[test]
fn test_uf_client_session() -> Result<()> {
	let output = uf_client("10\n4,3\n3,8\n8,4\n1,10\nbad\nx\n9,0\n")?;
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout)?;
	assert!(stdout.contains("Connected 4 and 3\n"));
	assert!(stdout.contains("Connected 3 and 8\n"));
	assert!(stdout.contains("Already connected 8 and 4\n"));
	assert!(stdout.contains("Error: index 10 out of range [0, 9]\n"));
	assert!(stdout.contains("Expected a pair like 1,2 but got 'bad'\n"));
	assert!(stdout.ends_with("OVER\n"), "got: {}", stdout);
	// nothing after x is read
	assert!(!stdout.contains("9 and 0"));
	Ok(())
}

#[test]
fn test_uf_client_stops_at_end_of_input() -> Result<()> {
	let output = uf_client("3\n0,1\n")?;
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout)?;
	assert!(stdout.contains("Connected 0 and 1\n"));
	assert!(!stdout.contains("OVER"));
	Ok(())
}

#[test]
fn test_uf_client_rejects_bad_object_count() -> Result<()> {
	for input in ["zero\n", "0\n", ""].iter() {
		let output = uf_client(input)?;
		assert!(!output.status.success(), "{:?} should fail", input);
	}
	Ok(())
}
