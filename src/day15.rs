// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct RiskMap { risks: Vec<u8>, width: usize }

/// A risk map repeated `tiles` times in both directions. Each repetition to the
/// right or down adds one to every risk, wrapping from 9 back to 1.
struct Cavern<'a> { map: &'a RiskMap, tiles: usize }

impl Cavern<'_> {
	fn size(&self) -> [usize; 2] {
		[self.map.width * self.tiles, self.map.risks.len() / self.map.width * self.tiles]
	}

	fn risk(&self, [x, y]: [usize; 2]) -> u32 {
		use num_integer::Integer as _;
		let height = self.map.risks.len() / self.map.width;
		let ((tile_x, x), (tile_y, y)) = (x.div_rem(&self.map.width), y.div_rem(&height));
		let risk = self.map.risks[y * self.map.width + x] as usize + tile_x + tile_y;
		((risk - 1) % 9 + 1) as u32
	}

	fn lowest_total_risk(&self) -> Option<u32> {
		use std::collections::BinaryHeap;

		// Dijkstra

		#[derive(PartialEq, Eq)]
		struct State { pos: [usize; 2], risk: u32 }

		impl Ord for State {
			fn cmp(&self, other: &Self) -> std::cmp::Ordering {
				other.risk.cmp(&self.risk)
					.then_with(|| self.pos.cmp(&other.pos))
			}
		}

		impl PartialOrd for State {
			fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
				Some(self.cmp(other))
			}
		}

		let [width, height] = self.size();
		let target = [width - 1, height - 1];
		let mut best = vec![u32::MAX; width * height];
		best[0] = 0;

		let mut heap = BinaryHeap::from([State { pos: [0, 0], risk: 0 }]);
		while let Some(State { pos: pos @ [x, y], risk }) = heap.pop() {
			if pos == target { return Some(risk) }
			if risk > best[y * width + x] { continue }

			let neighbors = [
				(x > 0).then(|| [x - 1, y]),
				(x + 1 < width).then(|| [x + 1, y]),
				(y > 0).then(|| [x, y - 1]),
				(y + 1 < height).then(|| [x, y + 1]),
			];
			for next @ [nx, ny] in neighbors.into_iter().flatten() {
				let next_risk = risk + self.risk(next);
				if next_risk < best[ny * width + nx] {
					best[ny * width + nx] = next_risk;
					heap.push(State { pos: next, risk: next_risk });
				}
			}
		}
		None
	}
}


fn part1and2_impl<const TILES: usize>(s: &str) -> Result<u32, parsing::RiskMapError> {
	let map = parsing::try_risk_map_from_str(s)?;
	let cavern = Cavern { map: &map, tiles: TILES };
	let risk = cavern.lowest_total_risk().ok_or(parsing::RiskMapError::Empty)?;
	tracing::debug!(size = ?cavern.size(), risk, "found safest path");
	Ok(risk)
}

pub(crate) fn part1(s: &str) -> Result<u32, parsing::RiskMapError> {
	part1and2_impl::<1>(s)
}


pub(crate) fn part2(s: &str) -> Result<u32, parsing::RiskMapError> {
	part1and2_impl::<5>(s)
}


mod parsing {
	use super::RiskMap;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RiskMapError {
		#[error("empty risk map")]
		Empty,
		#[error("line {line}, column {column}: invalid risk level {found:?}")]
		Risk { line: usize, column: usize, found: char },
		#[error("line {line}: expected width {expected}, found {found}")]
		Width { line: usize, expected: usize, found: usize },
	}

	pub(super) fn try_risk_map_from_str(s: &str) -> Result<RiskMap, RiskMapError> {
		let mut risks = Vec::new();
		let mut width = None;
		for (l, line) in s.lines().map(str::trim).filter(|line| !line.is_empty()).enumerate() {
			let row = line.chars().enumerate()
				.map(|(c, chr)| match chr.to_digit(10) {
					Some(risk @ 1..=9) => Ok(risk as u8),
					_ => Err(RiskMapError::Risk { line: l + 1, column: c + 1, found: chr }),
				});
			let before = risks.len();
			for risk in row { risks.push(risk?) }
			let found = risks.len() - before;
			let expected = *width.get_or_insert(found);
			if expected != found { return Err(RiskMapError::Width { line: l + 1, expected, found }) }
		}
		match width {
			Some(width) if width > 0 => Ok(RiskMap { risks, width }),
			_ => Err(RiskMapError::Empty),
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1163751742
		1381373672
		2136511328
		3694931569
		7463417111
		1319128137
		1359912421
		3125421639
		1293138521
		2311944581
	" };
	assert_eq!(part1(INPUT).unwrap(), 40);
	assert_eq!(part2(INPUT).unwrap(), 315);

	let map = parsing::try_risk_map_from_str("8").unwrap();
	let cavern = Cavern { map: &map, tiles: 5 };
	assert_eq!(cavern.size(), [5, 5]);
	assert_eq!([0, 1, 2, 3, 4].map(|x| cavern.risk([x, 0])), [8, 9, 1, 2, 3]);
	assert_eq!(cavern.risk([4, 4]), 7);
	assert_eq!(part1("8").unwrap(), 0);

	assert!(matches!(part1("19\n1"), Err(parsing::RiskMapError::Width { line: 2, .. })));
	assert!(matches!(part1("10"), Err(parsing::RiskMapError::Risk { line: 1, column: 2, .. })));
	assert!(matches!(part1(""), Err(parsing::RiskMapError::Empty)));
}
