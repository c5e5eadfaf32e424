// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

mod list;
mod map;
mod r#struct;

pub use list::{ELEMENT_NAME, ListType};
pub use map::{KEY_NAME, MapType, VALUE_NAME};
pub use r#struct::StructType;

use crate::{Field, PrimitiveType};

/// Shared handle to a node of the type tree.
///
/// The same subtree may appear in several schemas; two handles pointing at
/// the same allocation are the same subtree (`Arc::ptr_eq`), which is how a
/// projection recognises parts it left untouched.
pub type TypeRef = Arc<Type>;

/// A node of the type tree
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
	/// A leaf, no children
	Primitive(PrimitiveType),
	/// An ordered list of named fields
	Struct(StructType),
	/// A single `element` field
	List(ListType),
	/// A `key` field and a `value` field
	Map(MapType),
}

impl Type {
	pub fn is_primitive(&self) -> bool {
		matches!(self, Type::Primitive(_))
	}

	pub fn is_nested(&self) -> bool {
		!self.is_primitive()
	}

	pub fn is_struct(&self) -> bool {
		matches!(self, Type::Struct(_))
	}

	pub fn is_list(&self) -> bool {
		matches!(self, Type::List(_))
	}

	pub fn is_map(&self) -> bool {
		matches!(self, Type::Map(_))
	}

	pub fn as_primitive(&self) -> Option<&PrimitiveType> {
		match self {
			Type::Primitive(primitive) => Some(primitive),
			_ => None,
		}
	}

	pub fn as_struct(&self) -> Option<&StructType> {
		match self {
			Type::Struct(r#struct) => Some(r#struct),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&ListType> {
		match self {
			Type::List(list) => Some(list),
			_ => None,
		}
	}

	pub fn as_map(&self) -> Option<&MapType> {
		match self {
			Type::Map(map) => Some(map),
			_ => None,
		}
	}

	/// The direct child fields of a nested node, in order; empty for primitives.
	pub fn fields(&self) -> &[Field] {
		match self {
			Type::Primitive(_) => &[],
			Type::Struct(r#struct) => r#struct.fields(),
			Type::List(list) => std::slice::from_ref(list.element()),
			Type::Map(map) => map.fields(),
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Primitive(primitive) => Display::fmt(primitive, f),
			Type::Struct(r#struct) => Display::fmt(r#struct, f),
			Type::List(list) => Display::fmt(list, f),
			Type::Map(map) => Display::fmt(map, f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> TypeRef {
		MapType::new(
			1,
			PrimitiveType::String,
			2,
			ListType::new(3, StructType::new(vec![Field::required(4, "x", PrimitiveType::Int)]), true),
			true,
		)
		.into()
	}

	#[test]
	fn test_predicates() {
		let ty = sample();
		assert!(ty.is_map());
		assert!(ty.is_nested());
		assert!(!ty.is_primitive());
		assert!(ty.as_map().is_some());
		assert!(ty.as_list().is_none());

		let value = &ty.fields()[1].field_type;
		assert!(value.is_list());
		assert!(value.fields()[0].field_type.is_struct());
	}

	#[test]
	fn test_fields_per_kind() {
		let ty = sample();
		let names: Vec<&str> = ty.fields().iter().map(|f| f.name.as_str()).collect();
		assert_eq!(names, vec![KEY_NAME, VALUE_NAME]);

		let list = &ty.fields()[1].field_type;
		assert_eq!(list.fields().len(), 1);
		assert_eq!(list.fields()[0].name, ELEMENT_NAME);

		let primitive: TypeRef = PrimitiveType::Int.into();
		assert!(primitive.fields().is_empty());
	}

	#[test]
	fn test_display_nested() {
		let ty = sample();
		assert_eq!(
			ty.to_string(),
			"map<key (1): string (required): value (2): list<element (3): struct<\n  x (4): int (required)\n>>>"
		);
	}
}
