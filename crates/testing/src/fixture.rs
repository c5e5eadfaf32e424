// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Field lists for building test schemas.
//!
//! Fixtures return top-level fields rather than schemas so the schema crate
//! can depend on this crate for its own tests.

use floe_type::{Field, ListType, MapType, PrimitiveType, StructType};

/// `foo (5): int`, `bar (7): string`
pub fn flat() -> Vec<Field> {
	vec![Field::optional(5, "foo", PrimitiveType::Int), Field::optional(7, "bar", PrimitiveType::String)]
}

/// `Foo (1): int`, `Bar (2): string`, `Foobar (3): int`
pub fn foo_bar() -> StructType {
	StructType::new(vec![
		Field::optional(1, "Foo", PrimitiveType::Int),
		Field::optional(2, "Bar", PrimitiveType::String),
		Field::optional(3, "Foobar", PrimitiveType::Int),
	])
}

/// ```text
/// Value (7): map<
///   key (5): int,
///   value (6): list<element (4): struct<Foo (1), Bar (2), Foobar (3)>>
/// >
/// ```
pub fn map_of_list_of_struct() -> Vec<Field> {
	vec![Field::required(
		7,
		"Value",
		MapType::new(5, PrimitiveType::Int, 6, ListType::new(4, foo_bar(), false), false),
	)]
}

/// ```text
/// Map (9): map<
///   key (7): int,
///   value (8): struct<
///     First_child (5): int,
///     Second_child (6): list<element (4): struct<Foo (1), Bar (2), Foobar (3)>>
///   >
/// >
/// ```
pub fn map_of_struct_of_list() -> Vec<Field> {
	let value = StructType::new(vec![
		Field::required(5, "First_child", PrimitiveType::Int),
		Field::required(6, "Second_child", ListType::new(4, foo_bar(), false)),
	]);
	vec![Field::required(9, "Map", MapType::new(7, PrimitiveType::Int, 8, value, false))]
}

/// `id (1)`, `user (2): struct<name (3), address (4): struct<street (5), city (6)>>`
pub fn user_address() -> Vec<Field> {
	vec![
		Field::required(1, "id", PrimitiveType::Long),
		Field::optional(
			2,
			"user",
			StructType::new(vec![
				Field::optional(3, "name", PrimitiveType::String),
				Field::optional(
					4,
					"address",
					StructType::new(vec![
						Field::optional(5, "street", PrimitiveType::String),
						Field::optional(6, "city", PrimitiveType::String),
					]),
				),
			]),
		),
	]
}
