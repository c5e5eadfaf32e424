// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Table schemas.
//!
//! A [`Schema`] is the root struct of a table's type tree plus three lookup
//! indexes (by field id, by case-preserving dotted name, by lowercased
//! dotted name). Indexes are built on first use, once per schema, and shared
//! by every clone of the handle.
//!
//! ```
//! use floe_schema::{Field, PrimitiveType, Schema};
//!
//! let schema = Schema::new(
//! 	vec![
//! 		Field::required(1, "id", PrimitiveType::Int),
//! 		Field::optional(2, "name", PrimitiveType::String),
//! 	],
//! 	Some(Schema::INITIAL_SCHEMA_ID),
//! );
//!
//! let name = schema.find_field_by_name("name").unwrap().unwrap();
//! assert_eq!(name.id.0, 2);
//!
//! let projected = schema.select(&["name"]).unwrap();
//! assert_eq!(projected.len(), 1);
//! ```

mod error;
pub mod index;
mod project;
mod schema;

pub use error::{ErrorKind, SchemaError};
pub use floe_type::{Field, FieldId, ListType, MapType, PrimitiveType, SchemaId, StructType, Type, TypeRef};
pub use schema::Schema;

pub type Result<T> = std::result::Result<T, SchemaError>;
