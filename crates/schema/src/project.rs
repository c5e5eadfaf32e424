// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{collections::HashSet, sync::Arc};

use floe_type::{Field, FieldId, ListType, MapType, PrimitiveType, StructType, TypeRef, TypeVisitor, visit};

use crate::{Result, SchemaError};

/// Prune `root` down to the fields in `selected`.
///
/// With `select_full_types` a selected field keeps its whole subtree. Without
/// it a selected struct keeps only the children that are selected themselves,
/// and becomes an empty struct if there are none. `None` means nothing
/// survived.
pub(crate) fn prune_columns(
	root: &TypeRef,
	selected: &HashSet<FieldId>,
	select_full_types: bool,
) -> Result<Option<TypeRef>> {
	let mut pruner = PruneColumns {
		selected,
		select_full_types,
	};
	visit(root, &mut pruner)
}

struct PruneColumns<'a> {
	selected: &'a HashSet<FieldId>,
	select_full_types: bool,
}

impl PruneColumns<'_> {
	/// The type a field keeps in the result, if any.
	fn prune_field(&mut self, field: &Field) -> Result<Option<TypeRef>> {
		let selected = self.selected.contains(&field.id);
		if selected && self.select_full_types {
			return Ok(Some(field.field_type.clone()));
		}

		let pruned = visit(&field.field_type, self)?;
		if !selected {
			return Ok(pruned);
		}

		if field.field_type.is_primitive() {
			Ok(Some(field.field_type.clone()))
		} else if field.field_type.is_struct() {
			Ok(Some(pruned.unwrap_or_else(|| StructType::default().into())))
		} else {
			Err(SchemaError::ProjectListOrMap {
				id: field.id,
				name: field.name.clone(),
				field_type: field.field_type.clone(),
			})
		}
	}

	fn prune_map_side(&mut self, field: &Field) -> Result<Option<TypeRef>> {
		let pruned = visit(&field.field_type, self)?;
		if self.selected.contains(&field.id) && field.field_type.is_primitive() {
			return Ok(Some(field.field_type.clone()));
		}
		Ok(pruned)
	}
}

impl TypeVisitor for PruneColumns<'_> {
	type Output = Option<TypeRef>;
	type Error = SchemaError;

	fn visit_struct(&mut self, ty: &TypeRef, r#struct: &StructType) -> Result<Option<TypeRef>> {
		let mut fields = Vec::with_capacity(r#struct.len());
		let mut unchanged = true;

		for field in r#struct.fields() {
			match self.prune_field(field)? {
				Some(pruned) if Arc::ptr_eq(&pruned, &field.field_type) => fields.push(field.clone()),
				Some(pruned) => {
					unchanged = false;
					fields.push(field.with_type(pruned));
				}
				None => unchanged = false,
			}
		}

		if fields.is_empty() {
			return Ok(None);
		}
		if unchanged {
			return Ok(Some(ty.clone()));
		}
		Ok(Some(StructType::new(fields).into()))
	}

	fn visit_list(&mut self, ty: &TypeRef, list: &ListType) -> Result<Option<TypeRef>> {
		let element = list.element();
		match self.prune_field(element)? {
			None => Ok(None),
			Some(pruned) if Arc::ptr_eq(&pruned, &element.field_type) => Ok(Some(ty.clone())),
			Some(pruned) => Ok(Some(list.with_element_type(pruned).into())),
		}
	}

	fn visit_map(&mut self, ty: &TypeRef, map: &MapType) -> Result<Option<TypeRef>> {
		let (key, value) = (map.key(), map.value());
		if self.select_full_types && self.selected.contains(&key.id) && self.selected.contains(&value.id) {
			return Ok(Some(ty.clone()));
		}

		// a selected key or value is kept whole only if it is primitive
		let key_type = self.prune_map_side(key)?;
		let value_type = self.prune_map_side(value)?;

		match (key_type, value_type) {
			(None, None) => Ok(None),
			(Some(_), None) | (None, Some(_)) => Err(SchemaError::ProjectPartialMap {
				key: key.id,
				value: value.id,
			}),
			(Some(key_type), Some(value_type)) => {
				if Arc::ptr_eq(&key_type, &key.field_type) && Arc::ptr_eq(&value_type, &value.field_type) {
					Ok(Some(ty.clone()))
				} else {
					Ok(Some(map.with_types(key_type, value_type).into()))
				}
			}
		}
	}

	fn visit_primitive(&mut self, _ty: &TypeRef, _primitive: &PrimitiveType) -> Result<Option<TypeRef>> {
		Ok(None)
	}
}
