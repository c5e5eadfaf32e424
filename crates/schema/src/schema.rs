// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashSet,
	fmt::{self, Debug, Display, Formatter},
	sync::{Arc, OnceLock},
};

use floe_type::{Field, FieldId, SchemaId, StructType, Type, TypeRef};
use tracing::{debug, instrument, warn};

use crate::{
	Result, SchemaError,
	index::{IdIndex, NameCase, NameIndex},
	project::prune_columns,
};

/// The column structure of a table.
///
/// Cloning is cheap: clones share the type tree and the lookup indexes.
/// Construction never validates; duplicate ids or names surface from the
/// first lookup that needs the offending index.
pub struct Schema(Arc<Inner>);

struct Inner {
	schema_id: Option<SchemaId>,
	/// Always a struct
	root: TypeRef,
	id_index: OnceLock<Result<IdIndex>>,
	name_index: OnceLock<Result<NameIndex>>,
	lowercase_name_index: OnceLock<Result<NameIndex>>,
}

impl Schema {
	pub const INITIAL_SCHEMA_ID: SchemaId = SchemaId(0);

	pub fn new(fields: Vec<Field>, schema_id: Option<SchemaId>) -> Self {
		Self::from_struct(StructType::new(fields), schema_id)
	}

	pub fn from_struct(root: StructType, schema_id: Option<SchemaId>) -> Self {
		Self::from_root(root.into(), schema_id)
	}

	fn from_root(root: TypeRef, schema_id: Option<SchemaId>) -> Self {
		debug_assert!(root.is_struct());
		Self(Arc::new(Inner {
			schema_id,
			root,
			id_index: OnceLock::new(),
			name_index: OnceLock::new(),
			lowercase_name_index: OnceLock::new(),
		}))
	}

	pub fn schema_id(&self) -> Option<SchemaId> {
		self.0.schema_id
	}

	/// Top-level fields in declaration order
	pub fn fields(&self) -> &[Field] {
		self.as_struct().fields()
	}

	pub fn field(&self, index: usize) -> Option<&Field> {
		self.as_struct().field(index)
	}

	pub fn len(&self) -> usize {
		self.as_struct().len()
	}

	pub fn is_empty(&self) -> bool {
		self.as_struct().is_empty()
	}

	pub fn as_struct(&self) -> &StructType {
		match self.0.root.as_ref() {
			Type::Struct(r#struct) => r#struct,
			_ => unreachable!("schema root is always a struct"),
		}
	}

	pub fn as_type(&self) -> &TypeRef {
		&self.0.root
	}

	/// Find a field anywhere in the tree by id.
	#[instrument(name = "schema::find_field_by_id", level = "trace", skip(self))]
	pub fn find_field_by_id(&self, id: FieldId) -> Result<Option<&Field>> {
		let index = self.id_index()?;
		Ok(index.find(self.as_struct(), id))
	}

	/// Case-sensitive [`Schema::find_field_by_name_with`].
	pub fn find_field_by_name(&self, name: &str) -> Result<Option<&Field>> {
		self.find_field_by_name_with(name, true)
	}

	/// Find a field by canonical dotted path (`m.value.x`) or short path
	/// (`m.x`).
	#[instrument(name = "schema::find_field_by_name", level = "trace", skip(self))]
	pub fn find_field_by_name_with(&self, name: &str, case_sensitive: bool) -> Result<Option<&Field>> {
		let id = if case_sensitive {
			self.name_index()?.get(name)
		} else {
			self.lowercase_name_index()?.get(name)
		};
		match id {
			Some(id) => self.find_field_by_id(id),
			None => Ok(None),
		}
	}

	/// The canonical dotted path of a field, as written.
	#[instrument(name = "schema::find_column_name_by_id", level = "trace", skip(self))]
	pub fn find_column_name_by_id(&self, id: FieldId) -> Result<Option<&str>> {
		Ok(self.name_index()?.name(id))
	}

	/// Greatest field id in the tree, `None` for an empty schema.
	pub fn highest_field_id(&self) -> Result<Option<FieldId>> {
		Ok(self.id_index()?.highest())
	}

	/// Case-sensitive [`Schema::select_with`].
	pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Schema> {
		self.select_with(names, true)
	}

	/// Keep the named fields with their whole subtrees, plus the ancestors
	/// needed to reach them. `"*"` keeps everything. Names that resolve to
	/// nothing are ignored.
	#[instrument(name = "schema::select", level = "trace", skip(self, names))]
	pub fn select_with<S: AsRef<str>>(&self, names: &[S], case_sensitive: bool) -> Result<Schema> {
		if names.iter().any(|name| name.as_ref() == "*") {
			return Ok(Self::from_root(self.0.root.clone(), self.0.schema_id));
		}

		let mut selected = HashSet::with_capacity(names.len());
		for name in names {
			let name = name.as_ref();
			match self.find_field_by_name_with(name, case_sensitive)? {
				Some(field) => {
					selected.insert(field.id);
				}
				None => debug!(name, "selected name matches no field"),
			}
		}

		self.prune(&selected, true)
	}

	/// Keep the fields with the given ids. A selected struct keeps only its
	/// selected children, or none. Lists and maps cannot be selected by
	/// their own id.
	#[instrument(name = "schema::project", level = "trace", skip(self))]
	pub fn project(&self, field_ids: &HashSet<FieldId>) -> Result<Schema> {
		self.prune(field_ids, false)
	}

	fn prune(&self, selected: &HashSet<FieldId>, select_full_types: bool) -> Result<Schema> {
		match prune_columns(&self.0.root, selected, select_full_types)? {
			None => Ok(Self::new(Vec::new(), self.0.schema_id)),
			Some(root) if root.is_struct() => Ok(Self::from_root(root, self.0.schema_id)),
			Some(found) => Err(SchemaError::ProjectionNotStruct {
				found,
			}),
		}
	}

	fn id_index(&self) -> Result<&IdIndex> {
		let index = self.0.id_index.get_or_init(|| IdIndex::build(&self.0.root).inspect_err(log_build_failure));
		index.as_ref().map_err(Clone::clone)
	}

	fn name_index(&self) -> Result<&NameIndex> {
		let index = self.0.name_index.get_or_init(|| {
			NameIndex::build(&self.0.root, NameCase::Sensitive, None).inspect_err(log_build_failure)
		});
		index.as_ref().map_err(Clone::clone)
	}

	fn lowercase_name_index(&self) -> Result<&NameIndex> {
		let index = self.0.lowercase_name_index.get_or_init(|| {
			NameIndex::build(&self.0.root, NameCase::Insensitive, None).inspect_err(log_build_failure)
		});
		index.as_ref().map_err(Clone::clone)
	}
}

fn log_build_failure(err: &SchemaError) {
	warn!(code = err.code(), %err, "failed to build schema index");
}

impl Clone for Schema {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl PartialEq for Schema {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0) || (self.0.schema_id == other.0.schema_id && self.0.root == other.0.root)
	}
}

impl Eq for Schema {}

impl Debug for Schema {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Schema").field("schema_id", &self.0.schema_id).field("fields", &self.fields()).finish()
	}
}

impl Display for Schema {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("schema<\n")?;
		for field in self.fields() {
			writeln!(f, "  {}", field)?;
		}
		f.write_str(">")
	}
}
