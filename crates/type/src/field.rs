// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use crate::{FieldId, TypeRef};

/// A named, id-tagged slot in the type tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
	/// Unique within the full nested closure of a schema
	pub id: FieldId,
	pub name: String,
	pub field_type: TypeRef,
	/// Whether values of this field may be null
	pub optional: bool,
	pub doc: Option<String>,
}

impl Field {
	pub fn new(
		id: impl Into<FieldId>,
		name: impl Into<String>,
		field_type: impl Into<TypeRef>,
		optional: bool,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			field_type: field_type.into(),
			optional,
			doc: None,
		}
	}

	pub fn required(id: impl Into<FieldId>, name: impl Into<String>, field_type: impl Into<TypeRef>) -> Self {
		Self::new(id, name, field_type, false)
	}

	pub fn optional(id: impl Into<FieldId>, name: impl Into<String>, field_type: impl Into<TypeRef>) -> Self {
		Self::new(id, name, field_type, true)
	}

	pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
		self.doc = Some(doc.into());
		self
	}

	/// Same id, name, optionality and doc, different type.
	pub fn with_type(&self, field_type: TypeRef) -> Self {
		Self {
			id: self.id,
			name: self.name.clone(),
			field_type,
			optional: self.optional,
			doc: self.doc.clone(),
		}
	}

	pub fn is_required(&self) -> bool {
		!self.optional
	}
}

impl Display for Field {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({}): {}", self.name, self.id, self.field_type)?;
		if !self.optional {
			f.write_str(" (required)")?;
		}
		if let Some(doc) = &self.doc {
			write!(f, " - {}", doc)?;
		}
		Ok(())
	}
}
