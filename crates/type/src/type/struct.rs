// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

use crate::{Field, FieldId, Type, TypeRef};

/// An ordered list of named fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StructType {
	fields: Vec<Field>,
}

impl StructType {
	pub fn new(fields: Vec<Field>) -> Self {
		Self {
			fields,
		}
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Find a direct child by position
	pub fn field(&self, index: usize) -> Option<&Field> {
		self.fields.get(index)
	}

	/// Find a direct child by id. Nested fields are not searched.
	pub fn field_by_id(&self, id: FieldId) -> Option<&Field> {
		self.fields.iter().find(|f| f.id == id)
	}

	/// Find a direct child by name. Names are compared as-is, dotted paths
	/// are not resolved; case folding is ASCII only.
	pub fn field_by_name(&self, name: &str, case_sensitive: bool) -> Option<&Field> {
		if case_sensitive {
			self.fields.iter().find(|f| f.name == name)
		} else {
			self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
		}
	}
}

impl Display for StructType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("struct<\n")?;
		for field in &self.fields {
			writeln!(f, "  {}", field)?;
		}
		f.write_str(">")
	}
}

impl From<StructType> for TypeRef {
	fn from(value: StructType) -> Self {
		Arc::new(Type::Struct(value))
	}
}
