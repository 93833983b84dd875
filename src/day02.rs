// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
enum Command { Forward(u32), Down(u32), Up(u32) }

#[derive(Default, PartialEq, Eq, Debug)]
struct Position { x: i64, depth: i64 }

impl Position {
	fn product(&self) -> i64 {
		self.x * self.depth
	}
}


fn follow_course(commands: impl IntoIterator<Item = Command>) -> Position {
	use Command::*;
	commands.into_iter().fold(Position::default(), |Position { x, depth }, command| match command {
		Forward(n) => Position { x: x + i64::from(n), depth },
		Down(n) => Position { x, depth: depth + i64::from(n) },
		Up(n) => Position { x, depth: depth - i64::from(n) },
	})
}

fn follow_course_with_aim(commands: impl IntoIterator<Item = Command>) -> Position {
	use Command::*;
	let (position, _) = commands.into_iter().fold((Position::default(), 0i64), |(pos, aim), command| match command {
		Forward(n) => (Position { x: pos.x + i64::from(n), depth: pos.depth + aim * i64::from(n) }, aim),
		Down(n) => (pos, aim + i64::from(n)),
		Up(n) => (pos, aim - i64::from(n)),
	});
	position
}


pub(crate) fn part1(s: &str) -> Result<i64, parsing::CommandsError> {
	Ok(follow_course(parsing::try_commands_from_str(s)?).product())
}


pub(crate) fn part2(s: &str) -> Result<i64, parsing::CommandsError> {
	Ok(follow_course_with_aim(parsing::try_commands_from_str(s)?).product())
}


mod parsing {
	use super::Command;
	use std::{num::ParseIntError, str::FromStr};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum CommandError {
		#[error("missing space")]
		Format,
		#[error("unknown direction {0:?}")]
		Direction(String),
		#[error("distance: {0}")]
		Distance(ParseIntError),
	}

	impl FromStr for Command {
		type Err = CommandError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (direction, distance) = s.split_once(' ').ok_or(CommandError::Format)?;
			let distance = distance.parse().map_err(CommandError::Distance)?;
			match direction {
				"forward" => Ok(Command::Forward(distance)),
				"down" => Ok(Command::Down(distance)),
				"up" => Ok(Command::Up(distance)),
				_ => Err(CommandError::Direction(direction.to_owned())),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: {source}")]
	pub(crate) struct CommandsError { pub(super) line: usize, source: CommandError }

	pub(super) fn try_commands_from_str(s: &str) -> Result<Vec<Command>, CommandsError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().parse()
				.map_err(|e| CommandsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		forward 5
		down 5
		forward 8
		up 3
		down 8
		forward 2
	" };
	let commands = || parsing::try_commands_from_str(INPUT).unwrap();
	assert_eq!(follow_course(commands()), Position { x: 15, depth: 10 });
	assert_eq!(part1(INPUT).unwrap(), 150);
	assert_eq!(follow_course_with_aim(commands()), Position { x: 15, depth: 60 });
	assert_eq!(part2(INPUT).unwrap(), 900);
	assert_eq!(follow_course(parsing::try_commands_from_str("forward 2\nup 3\ndown 1").unwrap()),
		Position { x: 2, depth: -2 });
	assert_eq!(part2("up 2\nforward 3\ndown 5\nforward 1").unwrap(), 4 * -3);
	assert!(parsing::try_commands_from_str("up -3").is_err());
	assert!(matches!(parsing::try_commands_from_str("forward 5\nback 2"),
		Err(parsing::CommandsError { line: 2, .. })));
}
