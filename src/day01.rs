// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn count_increases(depths: impl IntoIterator<Item = u64>) -> usize {
	use itertools::Itertools as _;
	depths.into_iter()
		.tuple_windows()
		.filter(|(prev, next)| next > prev)
		.count()
}

fn window_sums(depths: &[u64]) -> impl Iterator<Item = u64> + '_ {
	depths.windows(3).map(|window| window.iter().sum())
}


pub(crate) fn part1(s: &str) -> Result<usize, parsing::DepthsError> {
	Ok(count_increases(parsing::try_depths_from_str(s)?))
}


pub(crate) fn part2(s: &str) -> Result<usize, parsing::DepthsError> {
	let depths = parsing::try_depths_from_str(s)?;
	Ok(count_increases(window_sums(&depths)))
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: {source}")]
	pub(crate) struct DepthsError { line: usize, source: ParseIntError }

	pub(super) fn try_depths_from_str(s: &str) -> Result<Vec<u64>, DepthsError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().parse()
				.map_err(|e| DepthsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		199
		200
		208
		210
		200
		207
		240
		269
		260
		263
	" };
	assert_eq!(part1(INPUT).unwrap(), 7);
	assert_eq!(window_sums(&[199, 200, 208, 210, 200]).collect::<Vec<_>>(), [607, 618, 618]);
	assert_eq!(part2(INPUT).unwrap(), 5);
	assert_eq!(part1("199\n\n200\n198\n\n").unwrap(), 1);
	assert!(part1("199\n2O0").is_err());
}
