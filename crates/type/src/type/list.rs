// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

use crate::{Field, FieldId, Type, TypeRef};

pub const ELEMENT_NAME: &str = "element";

/// A list owns exactly one child field, always named `element`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListType {
	element: Field,
}

impl ListType {
	pub fn new(element_id: impl Into<FieldId>, element_type: impl Into<TypeRef>, element_optional: bool) -> Self {
		Self {
			element: Field::new(element_id, ELEMENT_NAME, element_type, element_optional),
		}
	}

	pub fn element(&self) -> &Field {
		&self.element
	}

	/// A list with the same element field but a different element type.
	pub fn with_element_type(&self, element_type: TypeRef) -> Self {
		Self {
			element: self.element.with_type(element_type),
		}
	}
}

impl Display for ListType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "list<{}>", self.element)
	}
}

impl From<ListType> for TypeRef {
	fn from(value: ListType) -> Self {
		Arc::new(Type::List(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::PrimitiveType;

	#[test]
	fn test_element_is_named_element() {
		let list = ListType::new(3, PrimitiveType::Long, false);
		assert_eq!(list.element().name, ELEMENT_NAME);
		assert_eq!(list.element().id, FieldId(3));
		assert!(list.element().is_required());
	}

	#[test]
	fn test_with_element_type() {
		let list = ListType::new(3, PrimitiveType::Int, true);
		let widened = list.with_element_type(PrimitiveType::Long.into());
		assert_eq!(widened.element().id, FieldId(3));
		assert!(widened.element().optional);
		assert_eq!(widened.to_string(), "list<element (3): long>");
	}
}
