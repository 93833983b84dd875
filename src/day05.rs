// Copyright (c) 2022 Bastiaan Marinus van de Weerd


type Point = [i32; 2];

#[derive(Clone, Copy)]
struct Line { start: Point, stop: Point }

impl Line {
	fn is_axis_aligned(&self) -> bool {
		self.start[0] == self.stop[0] || self.start[1] == self.stop[1]
	}

	/// Requires the line to be axis-aligned or diagonal at 45°.
	fn points(&self) -> impl Iterator<Item = Point> {
		let Line { start, stop } = *self;
		let step = [(stop[0] - start[0]).signum(), (stop[1] - start[1]).signum()];
		let len = (stop[0] - start[0]).abs().max((stop[1] - start[1]).abs());
		(0..=len).map(move |i| [start[0] + step[0] * i, start[1] + step[1] * i])
	}
}


fn count_overlaps(lines: impl IntoIterator<Item = Line>) -> usize {
	use itertools::Itertools as _;
	lines.into_iter()
		.flat_map(|line| line.points())
		.counts()
		.into_values()
		.filter(|&count| count >= 2)
		.count()
}


pub(crate) fn part1(s: &str) -> Result<usize, parsing::LinesError> {
	let lines = parsing::try_lines_from_str(s)?;
	Ok(count_overlaps(lines.into_iter().filter(Line::is_axis_aligned)))
}


pub(crate) fn part2(s: &str) -> Result<usize, parsing::LinesError> {
	Ok(count_overlaps(parsing::try_lines_from_str(s)?))
}


mod parsing {
	use super::{Line, Point};
	use std::{num::ParseIntError, str::FromStr};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum LineError {
		#[error("expected `x1,y1 -> x2,y2`")]
		Format,
		#[error("coordinate: {0}")]
		Coordinate(ParseIntError),
		#[error("slope is neither axis-aligned nor 45°")]
		Slope,
	}

	fn try_point_from_str(s: &str) -> Result<Point, LineError> {
		let (x, y) = s.trim().split_once(',').ok_or(LineError::Format)?;
		Ok([
			x.parse().map_err(LineError::Coordinate)?,
			y.parse().map_err(LineError::Coordinate)?,
		])
	}

	impl FromStr for Line {
		type Err = LineError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (start, stop) = s.split_once("->").ok_or(LineError::Format)?;
			let line = Line { start: try_point_from_str(start)?, stop: try_point_from_str(stop)? };
			let (dx, dy) = (line.stop[0] - line.start[0], line.stop[1] - line.start[1]);
			if !line.is_axis_aligned() && dx.abs() != dy.abs() { return Err(LineError::Slope) }
			Ok(line)
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: {source}")]
	pub(crate) struct LinesError { line: usize, source: LineError }

	pub(super) fn try_lines_from_str(s: &str) -> Result<Vec<Line>, LinesError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| LinesError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		0,9 -> 5,9
		8,0 -> 0,8
		9,4 -> 3,4
		2,2 -> 2,1
		7,0 -> 7,4
		6,4 -> 2,0
		0,9 -> 2,9
		3,4 -> 1,4
		0,0 -> 8,8
		5,5 -> 8,2
	" };
	assert_eq!(part1(INPUT).unwrap(), 5);
	assert_eq!(part2(INPUT).unwrap(), 12);
	let line = Line { start: [1, 1], stop: [3, 3] };
	assert_eq!(line.points().collect::<Vec<_>>(), [[1, 1], [2, 2], [3, 3]]);
	let line = Line { start: [9, 7], stop: [7, 9] };
	assert_eq!(line.points().collect::<Vec<_>>(), [[9, 7], [8, 8], [7, 9]]);
	assert!(part2("0,0 -> 2,1").is_err());
}
