// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use num_bigint::BigUint;


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error("column {column}: expected a hexadecimal digit, found {found:?}")]
	Format { column: usize, found: char },
	#[error("bit {offset}: {requested} bits requested, {available} available")]
	OutOfRange { offset: usize, requested: usize, available: usize },
	#[error("{operator:?} packet cannot be evaluated with {children} sub-packets")]
	Evaluation { operator: Operator, children: usize },
	#[error("transmission holds no packet")]
	Empty,
}


#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Type { Sum, Product, Minimum, Maximum, Literal, GreaterThan, LessThan, EqualTo }

impl Type {
	const ALL: [Type; 8] = {
		use Type::*;
		[Sum, Product, Minimum, Maximum, Literal, GreaterThan, LessThan, EqualTo]
	};

	/// Only the low three bits of `id` are significant.
	fn from_id(id: u8) -> Self {
		Self::ALL[(id & 0b111) as usize]
	}

	#[cfg(test)]
	fn id(self) -> u8 {
		self as u8
	}

	fn operator(self) -> Option<Operator> {
		use Type::*;
		Some(match self {
			Sum => Operator::Sum,
			Product => Operator::Product,
			Minimum => Operator::Minimum,
			Maximum => Operator::Maximum,
			Literal => return None,
			GreaterThan => Operator::GreaterThan,
			LessThan => Operator::LessThan,
			EqualTo => Operator::EqualTo,
		})
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operator { Sum, Product, Minimum, Maximum, GreaterThan, LessThan, EqualTo }

impl From<Operator> for Type {
	fn from(operator: Operator) -> Self {
		use Operator::*;
		match operator {
			Sum => Type::Sum,
			Product => Type::Product,
			Minimum => Type::Minimum,
			Maximum => Type::Maximum,
			GreaterThan => Type::GreaterThan,
			LessThan => Type::LessThan,
			EqualTo => Type::EqualTo,
		}
	}
}


#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Contents {
	Literal(BigUint),
	Operator { operator: Operator, children: Vec<Packet> },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Packet {
	version: u8,
	contents: Contents,
}

impl Packet {
	#[cfg(test)]
	fn r#type(&self) -> Type {
		match &self.contents {
			Contents::Literal(_) => Type::Literal,
			Contents::Operator { operator, .. } => Type::from(*operator),
		}
	}

	fn children(&self) -> &[Packet] {
		match &self.contents {
			Contents::Literal(_) => &[],
			Contents::Operator { children, .. } => children,
		}
	}

	fn version_sum(&self) -> u64 {
		let mut sum = 0;
		let mut stack = vec![self];
		while let Some(packet) = stack.pop() {
			sum += packet.version as u64;
			stack.extend(packet.children());
		}
		sum
	}

	fn evaluate(&self) -> Result<BigUint, Error> {
		use Operator::*;

		let (operator, children) = match &self.contents {
			Contents::Literal(value) => return Ok(value.clone()),
			Contents::Operator { operator, children } => (*operator, children),
		};
		let arity = || Error::Evaluation { operator, children: children.len() };

		let values = children.iter()
			.map(Packet::evaluate)
			.collect::<Result<Vec<_>, _>>()?;

		fn truth(holds: bool) -> BigUint {
			BigUint::from(u8::from(holds))
		}

		let pair = |values: Vec<BigUint>| <[BigUint; 2]>::try_from(values)
			.map(|[left, right]| (left, right))
			.map_err(|_| arity());

		match operator {
			Sum | Product if values.is_empty() => Err(arity()),
			Sum => Ok(values.into_iter().sum()),
			Product => Ok(values.into_iter().product()),
			Minimum => values.into_iter().min().ok_or_else(arity),
			Maximum => values.into_iter().max().ok_or_else(arity),
			GreaterThan => pair(values).map(|(left, right)| truth(left > right)),
			LessThan => pair(values).map(|(left, right)| truth(left < right)),
			EqualTo => pair(values).map(|(left, right)| truth(left == right)),
		}
	}
}


fn input_packet_from_str(s: &str) -> Result<Packet, Error> {
	let bits: parsing::Bits = s.trim().parse()?;
	let (packet, remainder) = parsing::parse(&bits)?;
	tracing::debug!(bits = bits.len(), padding = remainder.len(), "decoded transmission");
	packet.ok_or(Error::Empty)
}


pub(crate) fn part1(s: &str) -> Result<u64, Error> {
	Ok(input_packet_from_str(s)?.version_sum())
}


pub(crate) fn part2(s: &str) -> Result<BigUint, Error> {
	input_packet_from_str(s)?.evaluate()
}


mod parsing {
	use super::{Contents, Error, Packet, Type};
	use num_bigint::BigUint;
	use std::str::FromStr;

	const VERSION_LEN: usize = 3;
	const TYPE_LEN: usize = 3;
	const GROUP_VALUE_LEN: usize = 4;
	const TOTAL_LENGTH_LEN: usize = 15;
	const COUNT_LEN: usize = 11;

	/// Bits of a transmission, most significant first.
	#[derive(Clone, PartialEq, Eq)]
	pub(super) struct Bits(Vec<bool>);

	impl Bits {
		pub(super) fn len(&self) -> usize {
			self.0.len()
		}
	}

	impl FromStr for Bits {
		type Err = Error;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut bits = Vec::with_capacity(s.len() * GROUP_VALUE_LEN);
			for (c, chr) in s.chars().enumerate() {
				let digit = chr.to_digit(16).ok_or(Error::Format { column: c + 1, found: chr })?;
				bits.extend((0..GROUP_VALUE_LEN).rev().map(|i| digit >> i & 1 == 1));
			}
			Ok(Self(bits))
		}
	}

	#[cfg(test)]
	impl FromIterator<bool> for Bits {
		fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
			Self(iter.into_iter().collect())
		}
	}

	impl std::fmt::Display for Bits {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			use std::fmt::Write;
			for &bit in &self.0 { f.write_char(if bit { '1' } else { '0' })? }
			Ok(())
		}
	}

	impl std::fmt::Debug for Bits {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "Bits({self})")
		}
	}


	struct Reader<'a> {
		bits: &'a [bool],
		offset: usize,
		/// Offset of `bits` within the whole transmission, for errors.
		base: usize,
	}

	impl<'a> Reader<'a> {
		fn remaining(&self) -> &'a [bool] {
			&self.bits[self.offset..]
		}

		fn take(&mut self, len: usize) -> Result<&'a [bool], Error> {
			let remaining = self.remaining();
			if len > remaining.len() {
				return Err(Error::OutOfRange {
					offset: self.base + self.offset,
					requested: len,
					available: remaining.len(),
				})
			}
			self.offset += len;
			Ok(&remaining[..len])
		}

		fn read(&mut self, len: usize) -> Result<usize, Error> {
			Ok(self.take(len)?.iter().fold(0, |acc, &bit| acc << 1 | bit as usize))
		}

		fn read_bit(&mut self) -> Result<bool, Error> {
			Ok(self.take(1)?[0])
		}

		/// Returns `None` (consuming everything) once only padding is left.
		fn packet(&mut self) -> Result<Option<Packet>, Error> {
			let remaining = self.remaining();
			if remaining.len() < VERSION_LEN + TYPE_LEN || remaining.iter().all(|&bit| !bit) {
				self.offset = self.bits.len();
				return Ok(None)
			}
			self.read_packet().map(Some)
		}

		fn read_packet(&mut self) -> Result<Packet, Error> {
			let start = self.base + self.offset;
			let version = self.read(VERSION_LEN)? as u8;
			let r#type = Type::from_id(self.read(TYPE_LEN)? as u8);
			tracing::trace!(start, version, kind = ?r#type, "packet header");

			let contents = match r#type.operator() {
				None => Contents::Literal(self.literal()?),
				Some(operator) => Contents::Operator { operator, children: self.children()? },
			};
			Ok(Packet { version, contents })
		}

		fn literal(&mut self) -> Result<BigUint, Error> {
			let mut value = BigUint::default();
			loop {
				let more = self.read_bit()?;
				value = value * (1u32 << GROUP_VALUE_LEN) + self.read(GROUP_VALUE_LEN)? as u32;
				if !more { break Ok(value) }
			}
		}

		fn children(&mut self) -> Result<Vec<Packet>, Error> {
			if self.read_bit()? {
				// Counted packets are never padding
				let count = self.read(COUNT_LEN)?;
				(0..count).map(|_| self.read_packet()).collect()
			} else {
				let len = self.read(TOTAL_LENGTH_LEN)?;
				let base = self.base + self.offset;
				let mut region = Reader { bits: self.take(len)?, offset: 0, base };
				std::iter::from_fn(|| region.packet().transpose()).collect()
			}
		}
	}

	/// Parses the first packet in `bits`, returning it with whatever bits follow it.
	pub(super) fn parse(bits: &Bits) -> Result<(Option<Packet>, &[bool]), Error> {
		let mut reader = Reader { bits: &bits.0, offset: 0, base: 0 };
		let packet = reader.packet()?;
		Ok((packet, reader.remaining()))
	}
}


#[cfg(test)]
mod tests {
	use super::{*, parsing::{parse, Bits}};
	use pretty_assertions::assert_eq;

	fn literal(version: u8, value: u32) -> Packet {
		Packet { version, contents: Contents::Literal(BigUint::from(value)) }
	}

	fn operator(version: u8, operator: Operator, children: Vec<Packet>) -> Packet {
		Packet { version, contents: Contents::Operator { operator, children } }
	}

	fn packet_from_hex(s: &str) -> Packet {
		let bits = s.parse().unwrap();
		let (packet, remainder) = parse(&bits).unwrap();
		assert!(remainder.iter().all(|&bit| !bit), "{s}: non-padding remainder");
		packet.unwrap()
	}

	#[test]
	fn bits() {
		assert_eq!("D2FE28".parse::<Bits>().unwrap().to_string(), "110100101111111000101000");
		assert_eq!("d2fe28".parse::<Bits>().unwrap().to_string(), "110100101111111000101000");
		assert_eq!("0A".parse::<Bits>().unwrap().to_string(), "00001010");
		assert_eq!("38006F45291200".parse::<Bits>().unwrap().to_string(),
			"00111000000000000110111101000101001010010001001000000000");
		assert_eq!("EE00D40C823060".parse::<Bits>().unwrap().len(), 56);
		assert!(matches!("D2FG28".parse::<Bits>(), Err(Error::Format { column: 4, found: 'G' })));
		assert!(matches!("0x1".parse::<Bits>(), Err(Error::Format { column: 2, found: 'x' })));
	}

	#[test]
	fn parsing() {
		let packet = packet_from_hex("D2FE28");
		assert_eq!(packet, literal(6, 2021));
		assert_eq!(packet.r#type(), Type::Literal);
		assert!(packet.children().is_empty());

		let bits = "D2FE28".parse().unwrap();
		let (_, remainder) = parse(&bits).unwrap();
		assert_eq!(remainder, [false; 3]);

		let packet = packet_from_hex("38006F45291200");
		assert_eq!(packet.r#type().id(), 6);
		assert_eq!(packet, operator(1, Operator::LessThan, vec![literal(6, 10), literal(2, 20)]));

		let packet = packet_from_hex("EE00D40C823060");
		assert_eq!(packet.r#type().id(), 3);
		assert_eq!(packet, operator(7, Operator::Maximum, vec![literal(2, 1), literal(4, 2), literal(1, 3)]));

		let bits = "0000".parse().unwrap();
		let (packet, remainder) = parse(&bits).unwrap();
		assert!(packet.is_none());
		assert!(remainder.is_empty());
	}

	#[test]
	fn wide_literal() {
		// Version 0, type 4, then seventeen groups of `1111`
		let bits = [false, false, false, true, false, false].into_iter()
			.chain((0..17).flat_map(|g| [g < 16, true, true, true, true]))
			.collect::<Bits>();
		let (packet, remainder) = parse(&bits).unwrap();
		assert!(remainder.is_empty());
		let value = BigUint::parse_bytes(b"fffffffffffffffff", 16).unwrap();
		assert_eq!(packet.unwrap().evaluate().unwrap(), value);
	}

	#[test]
	fn out_of_range() {
		assert!(matches!(parse(&"38006F".parse().unwrap()),
			Err(Error::OutOfRange { offset: 22, requested: 27, available: 2 })));
		assert!(matches!(parse(&"D2FE".parse().unwrap()),
			Err(Error::OutOfRange { offset: 16, requested: 1, available: 0 })));
		assert!(matches!(part1("EE00D40C8230"), Err(Error::OutOfRange { .. })));

		// Count of three, but only two literals follow
		assert!(matches!(part1("EE00D40C82"),
			Err(Error::OutOfRange { offset: 40, requested: 3, available: 0 })));
		assert!(matches!(part2("EE00D40C82"), Err(Error::OutOfRange { .. })));
		// Count of one, followed by nothing but zeros
		assert!(matches!(part1("EE0040000"),
			Err(Error::OutOfRange { offset: 25, requested: 15, available: 11 })));
	}

	#[test]
	fn evaluation() {
		let packet = packet_from_hex("9C0141080250320F1802104A08");
		assert_eq!(packet.evaluate().unwrap(), packet.evaluate().unwrap());

		let three = operator(0, Operator::GreaterThan, vec![literal(0, 1), literal(0, 2), literal(0, 3)]);
		assert!(matches!(three.evaluate(),
			Err(Error::Evaluation { operator: Operator::GreaterThan, children: 3 })));
		assert!(matches!(operator(0, Operator::Sum, vec![]).evaluate(),
			Err(Error::Evaluation { operator: Operator::Sum, children: 0 })));
		assert!(matches!(operator(0, Operator::Minimum, vec![]).evaluate(),
			Err(Error::Evaluation { children: 0, .. })));
		assert!(matches!(part2("00000000"), Err(Error::Empty)));
	}

	#[test]
	fn parts() {
		assert_eq!(part1("8A004A801A8002F478").unwrap(), 16);
		assert_eq!(part1("620080001611562C8802118E34").unwrap(), 12);
		assert_eq!(part1("C0015000016115A2E0802F182340").unwrap(), 23);
		assert_eq!(part1("A0016C880162017C3686B18A3D4780\n").unwrap(), 31);

		for (input, value) in [
			("C200B40A82", 3u32),
			("04005AC33890", 54),
			("880086C3E88112", 7),
			("CE00C43D881120", 9),
			("D8005AC2A8F0", 1),
			("F600BC2D8F", 0),
			("9C005AC2F8F0", 0),
			("9C0141080250320F1802104A08", 1),
		] {
			assert_eq!(part2(input).unwrap(), BigUint::from(value), "{input}");
		}
	}
}
