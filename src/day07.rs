// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(PartialEq, Eq, Debug)]
struct Alignment { position: u32, fuel: u64 }

fn linear_fuel(distance: u32) -> u64 {
	distance as u64
}

fn triangular_fuel(distance: u32) -> u64 {
	let distance = distance as u64;
	distance * (distance + 1) / 2
}

/// Tries every position between the outermost crabs.
fn best_alignment(positions: &[u32], fuel: fn(u32) -> u64) -> Option<Alignment> {
	use itertools::{Itertools as _, MinMaxResult::*};
	let (min, max) = match positions.iter().minmax() {
		NoElements => return None,
		OneElement(&p) => (p, p),
		MinMax(&min, &max) => (min, max),
	};
	(min..=max)
		.map(|position| Alignment {
			position,
			fuel: positions.iter().map(|&p| fuel(p.abs_diff(position))).sum(),
		})
		.min_by_key(|alignment| alignment.fuel)
}


fn part1and2_impl(s: &str, fuel: fn(u32) -> u64) -> Result<u64, parsing::PositionsError> {
	let positions = parsing::try_positions_from_str(s)?;
	let alignment = best_alignment(&positions, fuel).ok_or(parsing::PositionsError::Empty)?;
	tracing::debug!(position = alignment.position, "aligned crabs");
	Ok(alignment.fuel)
}

pub(crate) fn part1(s: &str) -> Result<u64, parsing::PositionsError> {
	part1and2_impl(s, linear_fuel)
}


pub(crate) fn part2(s: &str) -> Result<u64, parsing::PositionsError> {
	part1and2_impl(s, triangular_fuel)
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum PositionsError {
		#[error("no crabs")]
		Empty,
		#[error("column {column}: {source}")]
		Position { column: usize, source: ParseIntError },
	}

	pub(super) fn try_positions_from_str(s: &str) -> Result<Vec<u32>, PositionsError> {
		let s = s.trim();
		if s.is_empty() { return Err(PositionsError::Empty) }
		s.split(',')
			.scan(0, |c, position| {
				let column = std::mem::replace(c, *c + position.len() + 1);
				Some((column, position))
			})
			.map(|(c, position)| position.parse()
				.map_err(|e| PositionsError::Position { column: c + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = "16,1,2,0,4,2,7,1,2,14\n";
	let positions = parsing::try_positions_from_str(INPUT).unwrap();
	assert_eq!(best_alignment(&positions, linear_fuel), Some(Alignment { position: 2, fuel: 37 }));
	assert_eq!(part1(INPUT).unwrap(), 37);
	assert_eq!(triangular_fuel(11), 66);
	assert_eq!(best_alignment(&positions, triangular_fuel), Some(Alignment { position: 5, fuel: 168 }));
	assert_eq!(part2(INPUT).unwrap(), 168);
	assert!(matches!(part1("1,x"), Err(parsing::PositionsError::Position { column: 3, .. })));
}
