// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const PEAK: u8 = 9;

struct Heightmap { heights: Vec<u8>, width: usize }

impl Heightmap {
	fn height(&self) -> usize {
		self.heights.len() / self.width
	}

	fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> {
		let (width, height) = (self.width, self.height());
		let (x, y) = (i % width, i / width);
		[
			(y > 0).then(|| i - width),
			(y + 1 < height).then(|| i + width),
			(x > 0).then(|| i - 1),
			(x + 1 < width).then(|| i + 1),
		].into_iter().flatten()
	}

	fn low_points(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.heights.len())
			.filter(|&i| self.neighbors(i).all(|n| self.heights[i] < self.heights[n]))
	}

	fn basin_size(&self, low_point: usize) -> usize {
		let mut seen = std::collections::HashSet::from([low_point]);
		let mut queue = std::collections::VecDeque::from([low_point]);
		while let Some(i) = queue.pop_front() {
			for n in self.neighbors(i) {
				if self.heights[n] != PEAK && seen.insert(n) { queue.push_back(n) }
			}
		}
		seen.len()
	}
}


pub(crate) fn part1(s: &str) -> Result<u32, parsing::HeightmapError> {
	let heightmap = parsing::try_heightmap_from_str(s)?;
	Ok(heightmap.low_points().map(|i| heightmap.heights[i] as u32 + 1).sum())
}


pub(crate) fn part2(s: &str) -> Result<usize, parsing::HeightmapError> {
	use itertools::Itertools as _;
	let heightmap = parsing::try_heightmap_from_str(s)?;
	Ok(heightmap.low_points()
		.map(|i| heightmap.basin_size(i))
		.sorted_by(|a, b| b.cmp(a))
		.take(3)
		.product())
}


mod parsing {
	use super::Heightmap;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum HeightmapError {
		#[error("empty heightmap")]
		Empty,
		#[error("line {line}, column {column}: invalid height {found:?}")]
		Height { line: usize, column: usize, found: char },
		#[error("line {line}: expected width {expected}, found {found}")]
		Width { line: usize, expected: usize, found: usize },
	}

	pub(super) fn try_heightmap_from_str(s: &str) -> Result<Heightmap, HeightmapError> {
		let mut heights = Vec::new();
		let mut width = None;
		for (l, line) in s.lines().map(str::trim).filter(|line| !line.is_empty()).enumerate() {
			for (c, chr) in line.chars().enumerate() {
				let height = chr.to_digit(10)
					.ok_or(HeightmapError::Height { line: l + 1, column: c + 1, found: chr })?;
				heights.push(height as u8);
			}
			let found = line.chars().count();
			match *width.get_or_insert(found) {
				expected if expected != found => return Err(HeightmapError::Width { line: l + 1, expected, found }),
				_ => (),
			}
		}
		match width {
			Some(width) if width > 0 => Ok(Heightmap { heights, width }),
			_ => Err(HeightmapError::Empty),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2199943210
		3987894921
		9856789892
		8767896789
		9899965678
	" };
	let heightmap = parsing::try_heightmap_from_str(INPUT).unwrap();
	assert_eq!(heightmap.low_points().collect::<Vec<_>>(), [1, 9, 22, 46]);
	let mut neighbors = heightmap.neighbors(0).collect::<Vec<_>>();
	neighbors.sort_unstable();
	assert_eq!(neighbors, [1, 10]);
	assert_eq!(heightmap.neighbors(25).count(), 4);
	assert_eq!(part1(INPUT).unwrap(), 15);
	assert_eq!(heightmap.basin_size(1), 3);
	assert_eq!(heightmap.basin_size(9), 9);
	assert_eq!(heightmap.basin_size(22), 14);
	assert_eq!(part2(INPUT).unwrap(), 1134);
	assert!(matches!(parsing::try_heightmap_from_str("123\n12"), Err(parsing::HeightmapError::Width { line: 2, .. })));
}
