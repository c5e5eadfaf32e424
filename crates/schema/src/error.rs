// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use floe_type::{FieldId, TypeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// The schema itself breaks an invariant: ids or canonical names collide.
	InvalidSchema,
	/// The request cannot be satisfied by a valid schema.
	InvalidArgument,
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ErrorKind::InvalidSchema => f.write_str("invalid schema"),
			ErrorKind::InvalidArgument => f.write_str("invalid argument"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
	#[error("invalid schema: duplicate field id {id}")]
	DuplicateFieldId {
		id: FieldId,
	},

	#[error("invalid schema: multiple fields for name {path}: {existing} and {conflicting}")]
	DuplicateFieldName {
		path: String,
		existing: FieldId,
		conflicting: FieldId,
	},

	#[error("invalid schema: projection must produce a struct, got {found}")]
	ProjectionNotStruct {
		found: TypeRef,
	},

	#[error("cannot explicitly project List or Map types, {id}:{name} of type {field_type} was selected")]
	ProjectListOrMap {
		id: FieldId,
		name: String,
		field_type: TypeRef,
	},

	#[error("cannot project a map with only key or only value, key {key} and value {value}")]
	ProjectPartialMap {
		key: FieldId,
		value: FieldId,
	},
}

impl SchemaError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			SchemaError::DuplicateFieldId {
				..
			}
			| SchemaError::DuplicateFieldName {
				..
			}
			| SchemaError::ProjectionNotStruct {
				..
			} => ErrorKind::InvalidSchema,
			SchemaError::ProjectListOrMap {
				..
			}
			| SchemaError::ProjectPartialMap {
				..
			} => ErrorKind::InvalidArgument,
		}
	}

	/// Stable code for the failure, independent of the message wording.
	pub fn code(&self) -> &'static str {
		match self {
			SchemaError::DuplicateFieldId {
				..
			} => "SCHEMA_001",
			SchemaError::DuplicateFieldName {
				..
			} => "SCHEMA_002",
			SchemaError::ProjectionNotStruct {
				..
			} => "SCHEMA_003",
			SchemaError::ProjectListOrMap {
				..
			} => "PROJECT_001",
			SchemaError::ProjectPartialMap {
				..
			} => "PROJECT_002",
		}
	}
}

#[cfg(test)]
mod tests {
	use floe_type::PrimitiveType;

	use super::*;

	#[test]
	fn test_duplicate_name_message_carries_both_ids() {
		let err = SchemaError::DuplicateFieldName {
			path: "a.b".to_string(),
			existing: FieldId(2),
			conflicting: FieldId(3),
		};
		assert_eq!(err.to_string(), "invalid schema: multiple fields for name a.b: 2 and 3");
		assert_eq!(err.kind(), ErrorKind::InvalidSchema);
		assert_eq!(err.code(), "SCHEMA_002");
	}

	#[test]
	fn test_projection_errors_are_invalid_argument() {
		let err = SchemaError::ProjectListOrMap {
			id: FieldId(4),
			name: "tags".to_string(),
			field_type: PrimitiveType::String.into(),
		};
		assert_eq!(err.kind(), ErrorKind::InvalidArgument);
		assert_eq!(err.to_string(), "cannot explicitly project List or Map types, 4:tags of type string was selected");

		let err = SchemaError::ProjectPartialMap {
			key: FieldId(5),
			value: FieldId(6),
		};
		assert_eq!(err.kind(), ErrorKind::InvalidArgument);
		assert_eq!(err.code(), "PROJECT_002");
	}
}
