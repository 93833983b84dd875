// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use anyhow::{bail, Context as _};
use clap::Parser;
use std::path::PathBuf;


#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Part {
	#[value(name = "1")]
	One,
	#[value(name = "2")]
	Two,
}

impl Part {
	fn number(self) -> u8 {
		match self { Part::One => 1, Part::Two => 2 }
	}
}


macro_rules! days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	const DAYS: &[u8] = &[$( $day ),*];

	fn solve(day: u8, part: Part, input: &str) -> anyhow::Result<String> {
		match (day, part) {
			$(
				($day, Part::One) => Ok([<day $day>]::part1(input)?.to_string()),
				($day, Part::Two) => Ok([<day $day>]::part2(input)?.to_string()),
			)*
			_ => bail!("day {day} is not implemented"),
		}
	}
} } }

days!(01, 02, 04, 05, 07, 08, 09, 12, 13, 14, 15, 16);


/// Solves Advent of Code 2021 puzzles.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
	/// Days to solve; every implemented day when omitted.
	#[arg(value_name = "DAY")]
	days: Vec<u8>,

	/// Solve only this part.
	#[arg(long, short, value_enum)]
	part: Option<Part>,

	/// Input file to use instead of `<INPUT_DIR>/dayNN.txt`; requires a single day.
	#[arg(long, short, value_name = "FILE")]
	input: Option<PathBuf>,

	/// Directory holding the `dayNN.txt` puzzle inputs.
	#[arg(long, env = "ADVENT21_INPUTS", default_value = "inputs", value_name = "DIR")]
	input_dir: PathBuf,

	/// Log more (`-v` for answers and timings, `-vv` for parsing details).
	#[arg(long, short, action = clap::ArgAction::Count)]
	verbose: u8,
}

impl Cli {
	fn input_path(&self, day: u8) -> PathBuf {
		self.input.clone().unwrap_or_else(|| self.input_dir.join(format!("day{day:02}.txt")))
	}
}


fn init_logging(verbose: u8) {
	use tracing_subscriber::EnvFilter;
	let default_level = match verbose { 0 => "warn", 1 => "info", 2 => "debug", _ => "trace" };
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new(default_level)))
		.with_writer(std::io::stderr)
		.try_init();
}


fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let days = if cli.days.is_empty() { DAYS.to_vec() } else { cli.days.clone() };
	if let Some(day) = days.iter().find(|&&day| !DAYS.contains(&day)) {
		bail!("day {day} is not implemented (implemented: {DAYS:?})")
	}
	if cli.input.is_some() && days.len() != 1 {
		bail!("--input requires exactly one day, got {}", days.len())
	}
	let parts = match cli.part {
		Some(part) => vec![part],
		None => vec![Part::One, Part::Two],
	};

	for day in days {
		let path = cli.input_path(day);
		tracing::debug!(day, path = %path.display(), "reading input");
		let input = std::fs::read_to_string(&path)
			.with_context(|| format!("reading input for day {day} from {}", path.display()))?;

		for &part in &parts {
			let _span = tracing::info_span!("solve", day, part = part.number()).entered();
			let start = std::time::Instant::now();
			let answer = solve(day, part, &input)
				.with_context(|| format!("solving day {day} part {}", part.number()))?;
			tracing::info!(elapsed = ?start.elapsed(), "solved");

			let separator = if answer.contains('\n') { '\n' } else { ' ' };
			println!("Day {day:02} part {}:{separator}{answer}", part.number());
		}
	}

	Ok(())
}
