// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


type Element = u8;
type Pair = [Element; 2];

struct Instructions { template: Vec<Element>, rules: HashMap<Pair, Element> }

/// Counts of adjacent pairs and of single elements in a polymer. Insertion only
/// ever depends on pairs, so the polymer itself is never built.
#[derive(Clone, PartialEq, Eq, Debug)]
struct Polymer { pairs: HashMap<Pair, u64>, elements: HashMap<Element, u64> }

impl Polymer {
	fn from_template(template: &[Element]) -> Self {
		let mut polymer = Polymer { pairs: HashMap::new(), elements: HashMap::new() };
		for window in template.windows(2) {
			*polymer.pairs.entry([window[0], window[1]]).or_default() += 1;
		}
		for &element in template {
			*polymer.elements.entry(element).or_default() += 1;
		}
		polymer
	}

	fn step(&mut self, rules: &HashMap<Pair, Element>) {
		let mut pairs = HashMap::with_capacity(self.pairs.len() * 2);
		for (&pair, &count) in &self.pairs {
			match rules.get(&pair) {
				Some(&inserted) => {
					let [left, right] = pair;
					*pairs.entry([left, inserted]).or_default() += count;
					*pairs.entry([inserted, right]).or_default() += count;
					*self.elements.entry(inserted).or_default() += count;
				}
				None => *pairs.entry(pair).or_default() += count,
			}
		}
		self.pairs = pairs;
	}

	fn len(&self) -> u64 {
		self.elements.values().sum()
	}

	fn spread(&self) -> u64 {
		use itertools::{Itertools as _, MinMaxResult::*};
		match self.elements.values().minmax() {
			NoElements => 0,
			OneElement(_) => 0,
			MinMax(min, max) => max - min,
		}
	}
}


fn part1and2_impl<const STEPS: usize>(s: &str) -> Result<u64, parsing::InstructionsError> {
	let Instructions { template, rules } = parsing::try_instructions_from_str(s)?;
	let mut polymer = Polymer::from_template(&template);
	for _ in 0..STEPS { polymer.step(&rules) }
	tracing::debug!(len = polymer.len(), "grew polymer");
	Ok(polymer.spread())
}

pub(crate) fn part1(s: &str) -> Result<u64, parsing::InstructionsError> {
	part1and2_impl::<10>(s)
}


pub(crate) fn part2(s: &str) -> Result<u64, parsing::InstructionsError> {
	part1and2_impl::<40>(s)
}


mod parsing {
	use super::{Element, Instructions};
	use std::collections::HashMap;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum InstructionsError {
		#[error("missing polymer template")]
		Template,
		#[error("line {line}: invalid element {found:?}")]
		Element { line: usize, found: char },
		#[error("line {line}: expected `AB -> C`")]
		Rule { line: usize },
	}

	fn try_elements_from_str(s: &str, line: usize) -> Result<Vec<Element>, InstructionsError> {
		s.chars()
			.map(|chr| if chr.is_ascii_uppercase() { Ok(chr as Element) }
				else { Err(InstructionsError::Element { line, found: chr }) })
			.collect()
	}

	pub(super) fn try_instructions_from_str(s: &str) -> Result<Instructions, InstructionsError> {
		let mut lines = s.lines().map(str::trim).enumerate();
		let template = match lines.next() {
			Some((_, template)) if !template.is_empty() => try_elements_from_str(template, 1)?,
			_ => return Err(InstructionsError::Template),
		};

		let mut rules = HashMap::new();
		for (l, line) in lines.filter(|(_, line)| !line.is_empty()) {
			let (pair, inserted) = line.split_once(" -> ").ok_or(InstructionsError::Rule { line: l + 1 })?;
			match (&try_elements_from_str(pair, l + 1)?[..], &try_elements_from_str(inserted, l + 1)?[..]) {
				(&[left, right], &[inserted]) => { rules.insert([left, right], inserted); }
				_ => return Err(InstructionsError::Rule { line: l + 1 }),
			}
		}

		Ok(Instructions { template, rules })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		NNCB

		CH -> B
		HH -> N
		CB -> H
		NH -> C
		HB -> C
		HC -> B
		HN -> C
		NN -> C
		BH -> H
		NC -> B
		NB -> B
		BN -> B
		BB -> N
		BC -> B
		CC -> N
		CN -> C
	" };
	let Instructions { template, rules } = parsing::try_instructions_from_str(INPUT).unwrap();
	let mut polymer = Polymer::from_template(&template);
	polymer.step(&rules);
	assert_eq!(polymer, Polymer::from_template(b"NCNBCHB"));
	polymer.step(&rules);
	assert_eq!(polymer, Polymer::from_template(b"NBCCNBBBCBHCB"));
	for _ in 2..10 { polymer.step(&rules) }
	assert_eq!(polymer.len(), 3073);
	assert_eq!(part1(INPUT).unwrap(), 1588);
	assert_eq!(part2(INPUT).unwrap(), 2_188_189_693_529);
	assert!(matches!(part1("NNCB\n\nCH -> BB"), Err(parsing::InstructionsError::Rule { line: 3 })));
}
