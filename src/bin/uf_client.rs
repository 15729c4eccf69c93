//! Interactive dynamic-connectivity client.
//!
//! Reads the number of objects, then `p,q` pairs, one per line, and unions
//! each pair that is not yet connected. `x` ends the session.
#[macro_use] extern crate log;
extern crate simplelog;
extern crate percolation;

use anyhow::{Context, Result};
use simplelog::*;
use std::io::{stdin, stdout, BufRead, BufReader, Write};

use percolation::DisjointSet;

enum Reply {
	Line(String),
	Over,
}

fn parse_pair(line: &str) -> Option<(usize, usize)> {
	let mut parts = line.split(',').map(str::trim);
	let p = parts.next()?.parse().ok()?;
	let q = parts.next()?.parse().ok()?;
	if parts.next().is_some() {
		return None;
	}
	Some((p, q))
}

fn respond(ds: &mut DisjointSet, line: &str) -> Reply {
	let line = line.trim();
	if line == "x" {
		return Reply::Over;
	}
	let (p, q) = match parse_pair(line) {
		Some(pair) => pair,
		None => return Reply::Line(format!("Expected a pair like 1,2 but got '{}'", line)),
	};
	match ds.union(p, q) {
		Ok(true) => Reply::Line(format!("Connected {} and {}", p, q)),
		Ok(false) => Reply::Line(format!("Already connected {} and {}", p, q)),
		Err(e) => Reply::Line(format!("Error: {}", e)),
	}
}

fn prompt(text: &str) -> Result<()> {
	let mut out = stdout();
	write!(out, "{}", text)?;
	out.flush()?;
	Ok(())
}

fn main() -> Result<()> {
	let _ = CombinedLogger::init(
		vec![
			WriteLogger::new(
				LevelFilter::Warn,
				Config {time: None, level: None, target: None, location: None, time_format: None},
				std::io::stderr()),
		]
	);

	let reader = BufReader::new(stdin());
	let mut lines = reader.lines();

	prompt("Enter N - number of objects: ")?;
	let first = lines.next().context("no object count given")??;
	let n: usize = first.trim().parse()
		.with_context(|| format!("'{}' is not a number of objects", first.trim()))?;
	let mut ds = DisjointSet::new(n)?;
	info!("tracking {} objects", n);

	loop {
		prompt("Enter p,q pair e.g. 1,2. Enter x to terminate: ")?;
		let line = match lines.next() {
			Some(line) => line?,
			None => break,
		};
		match respond(&mut ds, &line) {
			Reply::Line(text) => println!("{}", text),
			Reply::Over => {
				println!("OVER");
				break;
			}
		}
	}
	info!("{} components left", ds.count());
	Ok(())
}
