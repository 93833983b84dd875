// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Lit segments, bit 0 for wire `a` through bit 6 for wire `g`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Pattern(u8);

impl Pattern {
	fn len(self) -> u32 {
		self.0.count_ones()
	}

	fn common(self, other: Pattern) -> u32 {
		(self.0 & other.0).count_ones()
	}
}

impl std::ops::BitOr for Pattern {
	type Output = Self;
	fn bitor(self, rhs: Self) -> Self::Output {
		Pattern(self.0 | rhs.0)
	}
}

impl std::ops::Sub for Pattern {
	type Output = Self;
	fn sub(self, rhs: Self) -> Self::Output {
		Pattern(self.0 & !rhs.0)
	}
}


struct Entry { signals: [Pattern; 10], outputs: [Pattern; 4] }

#[derive(Debug, thiserror::Error)]
pub(crate) enum WiringError {
	#[error("no unique signal with {0} segments")]
	Unique(u32),
	#[error("signals are inconsistent")]
	Inconsistent,
	#[error("output {0:?} matches no digit")]
	Output(Pattern),
}

impl Entry {
	/// Returns the pattern of each digit, indexed by digit.
	fn deduce(&self) -> Result<[Pattern; 10], WiringError> {
		let unique = |len| {
			let mut found = self.signals.iter().filter(|p| p.len() == len);
			match (found.next(), found.next()) {
				(Some(&pattern), None) => Ok(pattern),
				_ => Err(WiringError::Unique(len)),
			}
		};
		let (one, four, seven, eight) = (unique(2)?, unique(4)?, unique(3)?, unique(7)?);

		let mut digits = [None; 10];
		digits[1] = Some(one);
		digits[4] = Some(four);
		digits[7] = Some(seven);
		digits[8] = Some(eight);

		for &signal in self.signals.iter().filter(|p| p.len() == 5) {
			let digit = if signal.common(four) == 2 { 2 }
				else if signal.common(seven) == 3 { 3 }
				else { 5 };
			digits[digit] = Some(signal);
		}
		let three = digits[3].ok_or(WiringError::Inconsistent)?;
		let five = digits[5].ok_or(WiringError::Inconsistent)?;

		let nine = four | three;
		let lower_left = eight - nine;
		for &signal in self.signals.iter().filter(|p| p.len() == 6) {
			let digit = if signal == nine { 9 }
				else if signal == five | lower_left { 6 }
				else { 0 };
			digits[digit] = Some(signal);
		}

		let mut patterns = [Pattern(0); 10];
		for (pattern, digit) in patterns.iter_mut().zip(digits) {
			*pattern = digit.ok_or(WiringError::Inconsistent)?;
		}
		Ok(patterns)
	}

	fn decode(&self) -> Result<u32, WiringError> {
		let digits = self.deduce()?;
		self.outputs.iter().try_fold(0, |acc, &output| {
			let digit = digits.iter().position(|&d| d == output).ok_or(WiringError::Output(output))?;
			Ok(acc * 10 + digit as u32)
		})
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Parse(#[from] parsing::EntriesError),
	#[error("entry {entry}: {source}")]
	Wiring { entry: usize, source: WiringError },
}


pub(crate) fn part1(s: &str) -> Result<usize, Error> {
	Ok(parsing::try_entries_from_str(s)?.iter()
		.flat_map(|entry| entry.outputs)
		.filter(|output| matches!(output.len(), 2 | 3 | 4 | 7))
		.count())
}


pub(crate) fn part2(s: &str) -> Result<u32, Error> {
	parsing::try_entries_from_str(s)?.iter()
		.enumerate()
		.map(|(e, entry)| entry.decode()
			.map_err(|source| Error::Wiring { entry: e + 1, source }))
		.sum()
}


mod parsing {
	use super::{Entry, Pattern};
	use std::str::FromStr;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum EntryError {
		#[error("missing ` | `")]
		Separator,
		#[error("invalid wire {0:?}")]
		Wire(char),
		#[error("expected {expected} patterns, found {found}")]
		Count { expected: usize, found: usize },
	}

	impl FromStr for Pattern {
		type Err = EntryError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			s.chars().try_fold(Pattern(0), |Pattern(bits), wire| match wire {
				'a'..='g' => Ok(Pattern(bits | 1 << (wire as u8 - b'a'))),
				_ => Err(EntryError::Wire(wire)),
			})
		}
	}

	fn try_patterns_from_str<const N: usize>(s: &str) -> Result<[Pattern; N], EntryError> {
		let patterns = s.split_whitespace()
			.map(str::parse)
			.collect::<Result<Vec<_>, _>>()?;
		let found = patterns.len();
		patterns.try_into().map_err(|_| EntryError::Count { expected: N, found })
	}

	impl FromStr for Entry {
		type Err = EntryError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (signals, outputs) = s.split_once('|').ok_or(EntryError::Separator)?;
			Ok(Entry { signals: try_patterns_from_str(signals)?, outputs: try_patterns_from_str(outputs)? })
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: {source}")]
	pub(crate) struct EntriesError { line: usize, source: EntryError }

	pub(super) fn try_entries_from_str(s: &str) -> Result<Vec<Entry>, EntriesError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| EntriesError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
		edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
		fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
		fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
		aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
		fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
		dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
		bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
		egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
		gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
	" };
	assert_eq!(part1(INPUT).unwrap(), 26);
	assert_eq!(part2(INPUT).unwrap(), 61229);

	let entry: Entry = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf"
		.parse().unwrap();
	assert_eq!(entry.decode().unwrap(), 5353);
	let decoded = parsing::try_entries_from_str(INPUT).unwrap().iter()
		.map(|entry| entry.decode().unwrap())
		.collect::<Vec<_>>();
	assert_eq!(decoded, [8394, 9781, 1197, 9361, 4873, 8418, 4548, 1625, 8717, 4315]);
	assert!("ab | cd".parse::<Entry>().is_err());
}
