// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Dispatch over the kinds of the type tree.
//!
//! [`visit`] matches a node once and hands it to the callback for its kind.
//! Callbacks receive both the shared handle and the borrowed variant, so a
//! visitor can return the original subtree untouched. Visitors decide
//! themselves whether and in which order to descend into child fields,
//! usually by calling [`visit`] again on each child's type.

use crate::{ListType, MapType, PrimitiveType, StructType, Type, TypeRef};

pub trait TypeVisitor {
	type Output;
	type Error;

	fn visit_struct(&mut self, ty: &TypeRef, r#struct: &StructType) -> Result<Self::Output, Self::Error>;

	fn visit_list(&mut self, ty: &TypeRef, list: &ListType) -> Result<Self::Output, Self::Error>;

	fn visit_map(&mut self, ty: &TypeRef, map: &MapType) -> Result<Self::Output, Self::Error>;

	fn visit_primitive(&mut self, ty: &TypeRef, primitive: &PrimitiveType) -> Result<Self::Output, Self::Error>;
}

pub fn visit<V: TypeVisitor + ?Sized>(ty: &TypeRef, visitor: &mut V) -> Result<V::Output, V::Error> {
	match ty.as_ref() {
		Type::Primitive(primitive) => visitor.visit_primitive(ty, primitive),
		Type::Struct(r#struct) => visitor.visit_struct(ty, r#struct),
		Type::List(list) => visitor.visit_list(ty, list),
		Type::Map(map) => visitor.visit_map(ty, map),
	}
}

#[cfg(test)]
mod tests {
	use std::convert::Infallible;

	use super::*;
	use crate::Field;

	/// Collects field names in visiting order and returns the tree depth.
	#[derive(Default)]
	struct Collect {
		names: Vec<String>,
	}

	impl Collect {
		fn fields(&mut self, fields: &[Field]) -> Result<usize, Infallible> {
			let mut depth = 0;
			for field in fields {
				self.names.push(field.name.clone());
				depth = depth.max(visit(&field.field_type, self)?);
			}
			Ok(depth + 1)
		}
	}

	impl TypeVisitor for Collect {
		type Output = usize;
		type Error = Infallible;

		fn visit_struct(&mut self, _ty: &TypeRef, r#struct: &StructType) -> Result<usize, Infallible> {
			self.fields(r#struct.fields())
		}

		fn visit_list(&mut self, _ty: &TypeRef, list: &ListType) -> Result<usize, Infallible> {
			self.fields(std::slice::from_ref(list.element()))
		}

		fn visit_map(&mut self, _ty: &TypeRef, map: &MapType) -> Result<usize, Infallible> {
			self.fields(map.fields())
		}

		fn visit_primitive(&mut self, _ty: &TypeRef, _primitive: &PrimitiveType) -> Result<usize, Infallible> {
			Ok(0)
		}
	}

	#[test]
	fn test_pre_order_in_field_order() {
		let ty: TypeRef = StructType::new(vec![
			Field::required(1, "id", PrimitiveType::Long),
			Field::optional(
				2,
				"tags",
				MapType::new(
					3,
					PrimitiveType::String,
					4,
					ListType::new(
						5,
						StructType::new(vec![Field::required(6, "x", PrimitiveType::Int)]),
						false,
					),
					true,
				),
			),
			Field::optional(7, "name", PrimitiveType::String),
		])
		.into();

		let mut collect = Collect::default();
		let depth = visit(&ty, &mut collect).unwrap();

		assert_eq!(collect.names, vec!["id", "tags", "key", "value", "element", "x", "name"]);
		assert_eq!(depth, 4);
	}

	#[test]
	fn test_primitive_dispatch() {
		let ty: TypeRef = PrimitiveType::Boolean.into();
		let mut collect = Collect::default();
		assert_eq!(visit(&ty, &mut collect).unwrap(), 0);
		assert!(collect.names.is_empty());
	}
}
