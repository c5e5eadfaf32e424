// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// Identifies a field within the full nested closure of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub i32);

impl Display for FieldId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<i32> for FieldId {
	fn from(value: i32) -> Self {
		Self(value)
	}
}

impl From<FieldId> for i32 {
	fn from(value: FieldId) -> Self {
		value.0
	}
}

/// Identifies one schema among the schemas a table went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaId(pub i32);

impl Display for SchemaId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<i32> for SchemaId {
	fn from(value: i32) -> Self {
		Self(value)
	}
}

impl From<SchemaId> for i32 {
	fn from(value: SchemaId) -> Self {
		value.0
	}
}
