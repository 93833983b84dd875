// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


type Dot = [u32; 2];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Fold { X(u32), Y(u32) }

impl Fold {
	fn apply(self, [x, y]: Dot) -> Dot {
		let reflect = |v: u32, at: u32| if v > at { 2 * at - v } else { v };
		match self {
			Fold::X(at) => [reflect(x, at), y],
			Fold::Y(at) => [x, reflect(y, at)],
		}
	}
}

struct Manual { dots: HashSet<Dot>, folds: Vec<Fold> }


struct Code(HashSet<Dot>);

impl std::fmt::Display for Code {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		let max_x = self.0.iter().map(|d| d[0]).max().unwrap_or(0);
		let max_y = self.0.iter().map(|d| d[1]).max().unwrap_or(0);
		for y in 0..=max_y {
			if y > 0 { f.write_char('\n')? }
			for x in 0..=max_x {
				f.write_char(if self.0.contains(&[x, y]) { '#' } else { '.' })?;
			}
		}
		Ok(())
	}
}


fn fold(dots: HashSet<Dot>, fold: Fold) -> HashSet<Dot> {
	dots.into_iter().map(|dot| fold.apply(dot)).collect()
}


pub(crate) fn part1(s: &str) -> Result<usize, parsing::ManualError> {
	let Manual { dots, folds } = parsing::try_manual_from_str(s)?;
	let first = *folds.first().ok_or(parsing::ManualError::NoFolds)?;
	Ok(fold(dots, first).len())
}


pub(crate) fn part2(s: &str) -> Result<impl std::fmt::Display, parsing::ManualError> {
	let Manual { dots, folds } = parsing::try_manual_from_str(s)?;
	Ok(Code(folds.into_iter().fold(dots, fold)))
}


mod parsing {
	use super::{Dot, Fold, Manual};
	use std::{collections::HashSet, num::ParseIntError};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum ManualError {
		#[error("line {line}: expected `x,y`")]
		DotFormat { line: usize },
		#[error("line {line}: expected `fold along x=N` or `fold along y=N`")]
		FoldFormat { line: usize },
		#[error("line {line}: {source}")]
		Int { line: usize, source: ParseIntError },
		#[error("line {line}: dots beyond the fold line")]
		Overfold { line: usize },
		#[error("no fold instructions")]
		NoFolds,
	}

	pub(super) fn try_manual_from_str(s: &str) -> Result<Manual, ManualError> {
		let mut dots = HashSet::new();
		let mut folds = Vec::new();
		for (l, line) in s.lines().enumerate() {
			let line = line.trim();
			let int = |s: &str| s.parse::<u32>().map_err(|e| ManualError::Int { line: l + 1, source: e });
			if line.is_empty() {
				continue
			} else if let Some(fold) = line.strip_prefix("fold along ") {
				let fold = match fold.split_once('=') {
					Some(("x", at)) => Fold::X(int(at)?),
					Some(("y", at)) => Fold::Y(int(at)?),
					_ => return Err(ManualError::FoldFormat { line: l + 1 }),
				};
				folds.push((l, fold));
			} else {
				let (x, y) = line.split_once(',').ok_or(ManualError::DotFormat { line: l + 1 })?;
				dots.insert([int(x)?, int(y)?]);
			}
		}

		// Folding up or left must not reflect dots past zero
		let mut extent: [u32; 2] = [0, 1].map(|axis| dots.iter().map(|d: &Dot| d[axis]).max().unwrap_or(0));
		for &(l, fold) in &folds {
			let (axis, at) = match fold { Fold::X(at) => (0, at), Fold::Y(at) => (1, at) };
			if extent[axis] > 2 * at { return Err(ManualError::Overfold { line: l + 1 }) }
			extent[axis] = extent[axis].min(at.saturating_sub(1));
		}

		let folds = folds.into_iter().map(|(_, fold)| fold).collect();
		Ok(Manual { dots, folds })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		6,10
		0,14
		9,10
		0,3
		10,4
		4,11
		6,0
		6,12
		4,1
		0,13
		10,12
		3,4
		3,0
		8,4
		1,10
		2,14
		8,10
		9,0

		fold along y=7
		fold along x=5
	" };
	assert_eq!(part1(INPUT).unwrap(), 17);
	assert_eq!(part2(INPUT).unwrap().to_string(), indoc::indoc! { "
		#####
		#...#
		#...#
		#...#
		#####"
	});
	assert_eq!(Fold::Y(7).apply([0, 14]), [0, 0]);
	assert_eq!(Fold::X(5).apply([3, 4]), [3, 4]);
	assert!(matches!(part1("1,1\nfold along z=3"), Err(parsing::ManualError::FoldFormat { line: 2 })));
	assert!(matches!(part1("0,9\nfold along y=2"), Err(parsing::ManualError::Overfold { line: 2 })));
}
