// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! The type tree of a Floe table.
//!
//! A table's columns form a tree: primitive leaves and three nested kinds
//! (struct, list, map). Every nested node owns its child [`Field`]s, and
//! every field carries an id that is unique across the whole tree of one
//! schema. Subtrees are shared through [`TypeRef`], so a projection can hand
//! back an unchanged subtree without copying it.

pub mod field;
pub mod id;
pub mod primitive;
mod r#type;
pub mod visit;

pub use field::Field;
pub use id::{FieldId, SchemaId};
pub use primitive::{ParseTypeError, PrimitiveType};
pub use r#type::{ELEMENT_NAME, KEY_NAME, ListType, MapType, StructType, Type, TypeRef, VALUE_NAME};
pub use visit::{TypeVisitor, visit};
