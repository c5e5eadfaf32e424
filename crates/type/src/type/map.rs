// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

use crate::{Field, FieldId, Type, TypeRef};

pub const KEY_NAME: &str = "key";
pub const VALUE_NAME: &str = "value";

/// A map owns exactly two child fields: a required `key` and a `value`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MapType {
	/// `[key, value]`, kept together so both can be borrowed as one slice
	fields: [Field; 2],
}

impl MapType {
	pub fn new(
		key_id: impl Into<FieldId>,
		key_type: impl Into<TypeRef>,
		value_id: impl Into<FieldId>,
		value_type: impl Into<TypeRef>,
		value_optional: bool,
	) -> Self {
		Self {
			fields: [
				Field::required(key_id, KEY_NAME, key_type),
				Field::new(value_id, VALUE_NAME, value_type, value_optional),
			],
		}
	}

	pub fn key(&self) -> &Field {
		&self.fields[0]
	}

	pub fn value(&self) -> &Field {
		&self.fields[1]
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// A map with the same key and value fields but different types.
	pub fn with_types(&self, key_type: TypeRef, value_type: TypeRef) -> Self {
		Self {
			fields: [self.key().with_type(key_type), self.value().with_type(value_type)],
		}
	}
}

impl Display for MapType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "map<{}: {}>", self.key(), self.value())
	}
}

impl From<MapType> for TypeRef {
	fn from(value: MapType) -> Self {
		Arc::new(Type::Map(value))
	}
}
