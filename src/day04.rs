// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SIZE: usize = 5;

struct Board {
	numbers: [u32; SIZE * SIZE],
	/// Bit `i` set when `numbers[i]` has been drawn.
	marked: u32,
}

impl Board {
	const ROW: u32 = (1 << SIZE) - 1;
	const COLUMN: u32 = {
		let mut column = 0;
		let mut i = 0;
		while i < SIZE { column |= 1 << (i * SIZE); i += 1 }
		column
	};

	/// Returns whether marking `draw` made this board win.
	fn mark(&mut self, draw: u32) -> bool {
		let Some(i) = self.numbers.iter().position(|&n| n == draw) else { return false };
		self.marked |= 1 << i;
		self.has_won()
	}

	fn has_won(&self) -> bool {
		(0..SIZE).any(|i| {
			let row = Self::ROW << (i * SIZE);
			let column = Self::COLUMN << i;
			self.marked & row == row || self.marked & column == column
		})
	}

	fn unmarked_sum(&self) -> u32 {
		self.numbers.iter()
			.enumerate()
			.filter(|&(i, _)| self.marked & 1 << i == 0)
			.map(|(_, &n)| n)
			.sum()
	}
}

struct Bingo { draws: Vec<u32>, boards: Vec<Board> }

impl Bingo {
	/// Scores of boards in the order they win.
	fn winning_scores(self) -> impl Iterator<Item = u32> {
		let Bingo { draws, mut boards } = self;
		draws.into_iter().flat_map(move |draw| {
			for board in &mut boards { board.mark(draw); }
			let (won, playing) = std::mem::take(&mut boards).into_iter()
				.partition::<Vec<_>, _>(Board::has_won);
			boards = playing;
			won.into_iter().map(move |board| board.unmarked_sum() * draw)
		})
	}
}


pub(crate) fn part1(s: &str) -> Result<u32, parsing::BingoError> {
	parsing::try_bingo_from_str(s)?.winning_scores().next()
		.ok_or(parsing::BingoError::NoWinner)
}


pub(crate) fn part2(s: &str) -> Result<u32, parsing::BingoError> {
	parsing::try_bingo_from_str(s)?.winning_scores().last()
		.ok_or(parsing::BingoError::NoWinner)
}


mod parsing {
	use super::{Bingo, Board, SIZE};
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum BingoError {
		#[error("missing draws")]
		Empty,
		#[error("draw {index}: {source}")]
		Draw { index: usize, source: ParseIntError },
		#[error("line {line}: {source}")]
		Number { line: usize, source: ParseIntError },
		#[error("board {board}: expected {} numbers, found {found}", SIZE * SIZE)]
		BoardLen { board: usize, found: usize },
		#[error("no board wins")]
		NoWinner,
	}

	pub(super) fn try_bingo_from_str(s: &str) -> Result<Bingo, BingoError> {
		let mut lines = s.lines().enumerate();
		let (_, draws) = lines.next().ok_or(BingoError::Empty)?;
		let draws = draws.split(',')
			.enumerate()
			.map(|(index, draw)| draw.trim().parse()
				.map_err(|e| BingoError::Draw { index, source: e }))
			.collect::<Result<Vec<_>, _>>()?;

		fn finish(numbers: &mut Vec<u32>, boards: &mut Vec<Board>) -> Result<(), BingoError> {
			if numbers.is_empty() { return Ok(()) }
			let numbers = std::mem::take(numbers);
			let found = numbers.len();
			let numbers = numbers.try_into()
				.map_err(|_| BingoError::BoardLen { board: boards.len() + 1, found })?;
			boards.push(Board { numbers, marked: 0 });
			Ok(())
		}

		let mut boards = Vec::new();
		let mut numbers = Vec::with_capacity(SIZE * SIZE);

		for (l, line) in lines {
			if line.trim().is_empty() {
				finish(&mut numbers, &mut boards)?;
				continue
			}
			for number in line.split_whitespace() {
				numbers.push(number.parse()
					.map_err(|e| BingoError::Number { line: l + 1, source: e })?);
			}
		}
		finish(&mut numbers, &mut boards)?;

		Ok(Bingo { draws, boards })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

		22 13 17 11  0
		 8  2 23  4 24
		21  9 14 16  7
		 6 10  3 18  5
		 1 12 20 15 19

		 3 15  0  2 22
		 9 18 13 17  5
		19  8  7 25 23
		20 11 10 24  4
		14 21 16 12  6

		14 21 17 24  4
		10 16 15  9 19
		18  8 23 26 20
		22 11 13  6  5
		 2  0 12  3  7
	" };
	assert_eq!(part1(INPUT).unwrap(), 4512);
	assert_eq!(part2(INPUT).unwrap(), 1924);

	let mut board = parsing::try_bingo_from_str(INPUT).unwrap().boards.remove(2);
	assert!(!board.mark(99));
	assert!([14, 10, 18, 22].into_iter().all(|draw| !board.mark(draw)));
	assert!(board.mark(2));
	assert!(matches!(parsing::try_bingo_from_str("1,2\n\n1 2 3"),
		Err(parsing::BingoError::BoardLen { board: 1, found: 3 })));
}
