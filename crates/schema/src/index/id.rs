// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::collections::{HashMap, hash_map::Entry};

use floe_type::{Field, FieldId, ListType, MapType, PrimitiveType, StructType, TypeRef, TypeVisitor, visit};
use tracing::debug;

use crate::{Result, SchemaError};

/// Child indexes from the root struct down to a field.
///
/// `[2, 0, 1]` is the second child of the first child of the third root
/// field. Nodes are immutable once shared, so a position recorded at build
/// time stays valid for as long as the tree it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPosition(Vec<usize>);

impl FieldPosition {
	pub fn as_slice(&self) -> &[usize] {
		&self.0
	}

	/// Nesting depth, 1 for a root field.
	pub fn depth(&self) -> usize {
		self.0.len()
	}

	pub fn resolve<'a>(&self, root: &'a StructType) -> Option<&'a Field> {
		let (first, rest) = self.0.split_first()?;
		let mut field = root.field(*first)?;
		for index in rest {
			field = field.field_type.fields().get(*index)?;
		}
		Some(field)
	}
}

/// Field id to field position, over every field of the tree.
#[derive(Debug, Default)]
pub struct IdIndex {
	positions: HashMap<FieldId, FieldPosition>,
}

impl IdIndex {
	/// Index every field below `root`. Two fields with the same id anywhere
	/// in the tree fail the whole build.
	pub fn build(root: &TypeRef) -> Result<Self> {
		let mut builder = IndexById::default();
		visit(root, &mut builder)?;

		debug!(fields = builder.positions.len(), "built field id index");
		Ok(Self {
			positions: builder.positions,
		})
	}

	pub fn get(&self, id: FieldId) -> Option<&FieldPosition> {
		self.positions.get(&id)
	}

	pub fn find<'a>(&self, root: &'a StructType, id: FieldId) -> Option<&'a Field> {
		self.get(id).and_then(|position| position.resolve(root))
	}

	pub fn contains(&self, id: FieldId) -> bool {
		self.positions.contains_key(&id)
	}

	pub fn ids(&self) -> impl Iterator<Item = FieldId> + '_ {
		self.positions.keys().copied()
	}

	pub fn highest(&self) -> Option<FieldId> {
		self.ids().max()
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}
}

#[derive(Default)]
struct IndexById {
	path: Vec<usize>,
	positions: HashMap<FieldId, FieldPosition>,
}

impl IndexById {
	fn index_fields(&mut self, fields: &[Field]) -> Result<()> {
		for (index, field) in fields.iter().enumerate() {
			self.path.push(index);
			match self.positions.entry(field.id) {
				Entry::Occupied(_) => {
					return Err(SchemaError::DuplicateFieldId {
						id: field.id,
					});
				}
				Entry::Vacant(entry) => {
					entry.insert(FieldPosition(self.path.clone()));
				}
			}
			visit(&field.field_type, self)?;
			self.path.pop();
		}
		Ok(())
	}
}

impl TypeVisitor for IndexById {
	type Output = ();
	type Error = SchemaError;

	fn visit_struct(&mut self, _ty: &TypeRef, r#struct: &StructType) -> Result<()> {
		self.index_fields(r#struct.fields())
	}

	fn visit_list(&mut self, _ty: &TypeRef, list: &ListType) -> Result<()> {
		self.index_fields(std::slice::from_ref(list.element()))
	}

	fn visit_map(&mut self, _ty: &TypeRef, map: &MapType) -> Result<()> {
		self.index_fields(map.fields())
	}

	fn visit_primitive(&mut self, _ty: &TypeRef, _primitive: &PrimitiveType) -> Result<()> {
		Ok(())
	}
}
