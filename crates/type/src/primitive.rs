// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
	sync::Arc,
};

use crate::{Type, TypeRef};

/// All leaf types a column can have
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum PrimitiveType {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte signed integer
	Int,
	/// An 8-byte signed integer
	Long,
	/// A 4-byte floating point
	Float,
	/// An 8-byte floating point
	Double,
	/// A fixed point decimal with the given precision and scale
	Decimal {
		precision: u32,
		scale: u32,
	},
	/// A calendar date without time or timezone
	Date,
	/// A time of day without date or timezone, microsecond precision
	Time,
	/// A timestamp without timezone, microsecond precision
	Timestamp,
	/// A timestamp with timezone, stored as UTC, microsecond precision
	TimestampTz,
	/// A UTF-8 encoded text.
	String,
	/// A universally unique identifier
	Uuid,
	/// A byte array of the given length
	Fixed(u64),
	/// A byte array of arbitrary length
	Binary,
}

impl PrimitiveType {
	pub fn is_integer(&self) -> bool {
		matches!(self, PrimitiveType::Int | PrimitiveType::Long)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, PrimitiveType::Float | PrimitiveType::Double)
	}

	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point() || matches!(self, PrimitiveType::Decimal { .. })
	}

	pub fn is_temporal(&self) -> bool {
		matches!(
			self,
			PrimitiveType::Date | PrimitiveType::Time | PrimitiveType::Timestamp | PrimitiveType::TimestampTz
		)
	}

	pub fn is_binary(&self) -> bool {
		matches!(self, PrimitiveType::Fixed(_) | PrimitiveType::Binary)
	}
}

impl Display for PrimitiveType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PrimitiveType::Boolean => f.write_str("boolean"),
			PrimitiveType::Int => f.write_str("int"),
			PrimitiveType::Long => f.write_str("long"),
			PrimitiveType::Float => f.write_str("float"),
			PrimitiveType::Double => f.write_str("double"),
			PrimitiveType::Decimal {
				precision,
				scale,
			} => write!(f, "decimal({}, {})", precision, scale),
			PrimitiveType::Date => f.write_str("date"),
			PrimitiveType::Time => f.write_str("time"),
			PrimitiveType::Timestamp => f.write_str("timestamp"),
			PrimitiveType::TimestampTz => f.write_str("timestamptz"),
			PrimitiveType::String => f.write_str("string"),
			PrimitiveType::Uuid => f.write_str("uuid"),
			PrimitiveType::Fixed(length) => write!(f, "fixed[{}]", length),
			PrimitiveType::Binary => f.write_str("binary"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown primitive type '{input}'")]
pub struct ParseTypeError {
	pub input: String,
}

impl FromStr for PrimitiveType {
	type Err = ParseTypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let err = || ParseTypeError {
			input: s.to_string(),
		};

		let name = s.trim().to_ascii_lowercase();
		match name.as_str() {
			"boolean" | "bool" => return Ok(PrimitiveType::Boolean),
			"int" | "integer" => return Ok(PrimitiveType::Int),
			"long" => return Ok(PrimitiveType::Long),
			"float" => return Ok(PrimitiveType::Float),
			"double" => return Ok(PrimitiveType::Double),
			"date" => return Ok(PrimitiveType::Date),
			"time" => return Ok(PrimitiveType::Time),
			"timestamp" => return Ok(PrimitiveType::Timestamp),
			"timestamptz" => return Ok(PrimitiveType::TimestampTz),
			"string" => return Ok(PrimitiveType::String),
			"uuid" => return Ok(PrimitiveType::Uuid),
			"binary" => return Ok(PrimitiveType::Binary),
			_ => {}
		}

		if let Some(args) = name.strip_prefix("decimal(").and_then(|rest| rest.strip_suffix(')')) {
			let (precision, scale) = args.split_once(',').ok_or_else(err)?;
			return Ok(PrimitiveType::Decimal {
				precision: precision.trim().parse().map_err(|_| err())?,
				scale: scale.trim().parse().map_err(|_| err())?,
			});
		}

		if let Some(length) = name.strip_prefix("fixed[").and_then(|rest| rest.strip_suffix(']')) {
			return Ok(PrimitiveType::Fixed(length.trim().parse().map_err(|_| err())?));
		}

		Err(err())
	}
}

impl From<PrimitiveType> for TypeRef {
	fn from(value: PrimitiveType) -> Self {
		Arc::new(Type::Primitive(value))
	}
}
