// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const START: &str = "start";
const END: &str = "end";

struct Cave<'a> { name: &'a str, small: bool, neighbors: Vec<usize> }

struct Caves<'a> { caves: Vec<Cave<'a>>, start: usize, end: usize }

impl Caves<'_> {
	/// Calls `visit` with each path from start to end. Small caves are visited at most once,
	/// except that one of them may be visited twice if `may_revisit`.
	fn for_each_path(&self, may_revisit: bool, mut visit: impl FnMut(&[usize])) {
		let mut visits = vec![0u8; self.caves.len()];
		self.delve(self.start, &mut Vec::new(), &mut visits, may_revisit, &mut visit)
	}

	fn delve(&self, cave: usize, path: &mut Vec<usize>, visits: &mut [u8], may_revisit: bool, visit: &mut dyn FnMut(&[usize])) {
		path.push(cave);
		if cave == self.end {
			visit(path.as_slice());
		} else {
			let small = self.caves[cave].small;
			if small { visits[cave] += 1 }
			for &next in &self.caves[cave].neighbors {
				if next == self.start { continue }
				let seen = visits[next] > 0;
				if seen && !may_revisit { continue }
				self.delve(next, path, visits, may_revisit && !seen, visit);
			}
			if small { visits[cave] -= 1 }
		}
		path.pop();
	}

	fn count_paths(&self, may_revisit: bool) -> usize {
		let mut count = 0;
		self.for_each_path(may_revisit, |_| count += 1);
		tracing::debug!(count, may_revisit, "enumerated paths");
		count
	}

	#[cfg(test)]
	fn paths(&self, may_revisit: bool) -> Vec<String> {
		use itertools::Itertools as _;
		let mut paths = Vec::new();
		self.for_each_path(may_revisit, |path| paths.push(path.iter()
			.map(|&cave| self.caves[cave].name)
			.join(",")));
		paths.sort_unstable();
		paths
	}
}


pub(crate) fn part1(s: &str) -> Result<usize, parsing::CavesError> {
	Ok(parsing::try_caves_from_str(s)?.count_paths(false))
}


pub(crate) fn part2(s: &str) -> Result<usize, parsing::CavesError> {
	Ok(parsing::try_caves_from_str(s)?.count_paths(true))
}


mod parsing {
	use super::{Cave, Caves, START, END};
	use std::collections::HashMap;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum CavesError {
		#[error("line {line}: expected `<cave>-<cave>`")]
		Format { line: usize },
		#[error("line {line}: invalid cave name {name:?}")]
		Name { line: usize, name: String },
		#[error("missing `{0}` cave")]
		Missing(&'static str),
	}

	pub(super) fn try_caves_from_str<'a>(s: &'a str) -> Result<Caves<'a>, CavesError> {
		let mut indices = HashMap::new();
		let mut caves = Vec::<Cave>::new();

		for (l, line) in s.lines().enumerate() {
			let line = line.trim();
			if line.is_empty() { continue }
			let (from, to) = line.split_once('-').ok_or(CavesError::Format { line: l + 1 })?;

			let mut index = |name: &'a str| {
				let small = name.chars().all(|c| c.is_ascii_lowercase());
				if name.is_empty() || !small && !name.chars().all(|c| c.is_ascii_uppercase()) {
					return Err(CavesError::Name { line: l + 1, name: name.to_owned() })
				}
				Ok(*indices.entry(name).or_insert_with(|| {
					caves.push(Cave { name, small, neighbors: Vec::new() });
					caves.len() - 1
				}))
			};
			let (from, to) = (index(from)?, index(to)?);
			caves[from].neighbors.push(to);
			caves[to].neighbors.push(from);
		}

		let start = *indices.get(START).ok_or(CavesError::Missing(START))?;
		let end = *indices.get(END).ok_or(CavesError::Missing(END))?;
		Ok(Caves { caves, start, end })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			start-A
			start-b
			A-c
			A-b
			b-d
			A-end
			b-end
		" },
		indoc::indoc! { "
			dc-end
			HN-start
			start-kj
			dc-start
			dc-HN
			LN-dc
			HN-end
			kj-sa
			kj-HN
			kj-dc
		" },
		indoc::indoc! { "
			fs-end
			he-DX
			fs-he
			start-DX
			pj-DX
			end-zg
			zg-sl
			zg-pj
			pj-he
			RW-he
			fs-DX
			pj-RW
			zg-RW
			start-pj
			he-WI
			zg-he
			pj-fs
			start-RW
		" },
	];

	#[test]
	fn tests() {
		let caves = parsing::try_caves_from_str(INPUTS[0]).unwrap();
		assert_eq!(caves.paths(false), [
			"start,A,b,A,c,A,end",
			"start,A,b,A,end",
			"start,A,b,end",
			"start,A,c,A,b,A,end",
			"start,A,c,A,b,end",
			"start,A,c,A,end",
			"start,A,end",
			"start,b,A,c,A,end",
			"start,b,A,end",
			"start,b,end",
		]);
		assert!(caves.paths(true).contains(&"start,A,b,d,b,A,c,A,end".to_owned()));

		assert_eq!(INPUTS.map(|input| part1(input).unwrap()), [10, 19, 226]);
		assert_eq!(INPUTS.map(|input| part2(input).unwrap()), [36, 103, 3509]);

		assert!(matches!(part1("start-A\nA-b"), Err(parsing::CavesError::Missing(END))));
		assert!(matches!(part1("start-A\nA-bC"), Err(parsing::CavesError::Name { line: 2, .. })));
	}
}
