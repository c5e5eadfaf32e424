// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::collections::{HashMap, hash_map::Entry};

use floe_type::{Field, FieldId, ListType, MapType, PrimitiveType, StructType, TypeRef, TypeVisitor, visit};
use tracing::debug;

use crate::{Result, SchemaError};

/// Transforms a field name before it becomes a path segment, e.g. to quote
/// names that contain dots.
pub type QuoteFn<'a> = &'a dyn Fn(&str) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
	/// Paths keep the field names as written
	Sensitive,
	/// Every path segment is ASCII lowercased, and so is every lookup
	Insensitive,
}

/// The position a field takes inside its parent.
///
/// Decides whether a struct-typed child is hopped over in short paths: a
/// list of structs `l` exposes `l.x` next to `l.element.x`, a map with
/// struct values `m` exposes `m.x` next to `m.value.x`. Map keys and struct
/// fields are always spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRole {
	StructField,
	ListElement,
	MapKey,
	MapValue,
}

impl ChildRole {
	pub fn elides_struct(self) -> bool {
		match self {
			ChildRole::StructField => false,
			ChildRole::ListElement => true,
			ChildRole::MapKey => false,
			ChildRole::MapValue => true,
		}
	}
}

/// Dotted path to field id.
///
/// Holds every canonical path (`m.value.x`) and every short path (`m.x`)
/// that no canonical path already claims.
#[derive(Debug)]
pub struct NameIndex {
	case: NameCase,
	name_to_id: HashMap<String, FieldId>,
	/// Canonical paths only
	id_to_name: HashMap<FieldId, String>,
}

impl NameIndex {
	pub fn build(root: &TypeRef, case: NameCase, quote: Option<QuoteFn<'_>>) -> Result<Self> {
		let mut builder = IndexByName {
			case,
			quote,
			path: Vec::new(),
			short_path: Vec::new(),
			canonical: HashMap::new(),
			short: HashMap::new(),
		};
		visit(root, &mut builder)?;

		let IndexByName {
			mut canonical,
			short,
			..
		} = builder;

		let id_to_name = canonical.iter().map(|(name, id)| (*id, name.clone())).collect();

		let canonical_len = canonical.len();
		for (name, id) in short {
			canonical.entry(name).or_insert(id);
		}

		debug!(
			?case,
			canonical = canonical_len,
			short = canonical.len() - canonical_len,
			"built field name index"
		);
		Ok(Self {
			case,
			name_to_id: canonical,
			id_to_name,
		})
	}

	pub fn case(&self) -> NameCase {
		self.case
	}

	/// Resolve a canonical or short dotted path. Insensitive indexes
	/// lowercase `name` before looking it up.
	pub fn get(&self, name: &str) -> Option<FieldId> {
		match self.case {
			NameCase::Sensitive => self.name_to_id.get(name).copied(),
			NameCase::Insensitive => self.name_to_id.get(&name.to_ascii_lowercase()).copied(),
		}
	}

	/// The canonical path of a field.
	pub fn name(&self, id: FieldId) -> Option<&str> {
		self.id_to_name.get(&id).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.name_to_id.len()
	}

	pub fn is_empty(&self) -> bool {
		self.name_to_id.is_empty()
	}
}

struct IndexByName<'q> {
	case: NameCase,
	quote: Option<QuoteFn<'q>>,
	path: Vec<String>,
	short_path: Vec<String>,
	canonical: HashMap<String, FieldId>,
	short: HashMap<String, FieldId>,
}

impl IndexByName<'_> {
	fn segment(&self, name: &str) -> String {
		let segment = match self.quote {
			Some(quote) => quote(name),
			None => name.to_string(),
		};
		match self.case {
			NameCase::Sensitive => segment,
			NameCase::Insensitive => segment.to_ascii_lowercase(),
		}
	}

	fn index_field(&mut self, role: ChildRole, field: &Field) -> Result<()> {
		let segment = self.segment(&field.name);
		let elided = role.elides_struct() && field.field_type.is_struct();

		match self.canonical.entry(join(&self.path, &segment)) {
			Entry::Occupied(entry) => {
				if *entry.get() != field.id {
					return Err(SchemaError::DuplicateFieldName {
						path: entry.key().clone(),
						existing: *entry.get(),
						conflicting: field.id,
					});
				}
			}
			Entry::Vacant(entry) => {
				entry.insert(field.id);
			}
		}

		let short_name = if elided {
			self.short_path.join(".")
		} else {
			join(&self.short_path, &segment)
		};
		self.short.entry(short_name).or_insert(field.id);

		self.path.push(segment.clone());
		if !elided {
			self.short_path.push(segment);
		}

		let result = visit(&field.field_type, self);

		self.path.pop();
		if !elided {
			self.short_path.pop();
		}
		result
	}
}

impl TypeVisitor for IndexByName<'_> {
	type Output = ();
	type Error = SchemaError;

	fn visit_struct(&mut self, _ty: &TypeRef, r#struct: &StructType) -> Result<()> {
		for field in r#struct.fields() {
			self.index_field(ChildRole::StructField, field)?;
		}
		Ok(())
	}

	fn visit_list(&mut self, _ty: &TypeRef, list: &ListType) -> Result<()> {
		self.index_field(ChildRole::ListElement, list.element())
	}

	fn visit_map(&mut self, _ty: &TypeRef, map: &MapType) -> Result<()> {
		self.index_field(ChildRole::MapKey, map.key())?;
		self.index_field(ChildRole::MapValue, map.value())
	}

	fn visit_primitive(&mut self, _ty: &TypeRef, _primitive: &PrimitiveType) -> Result<()> {
		Ok(())
	}
}

fn join(prefix: &[String], segment: &str) -> String {
	if prefix.is_empty() {
		return segment.to_string();
	}
	let mut path = prefix.join(".");
	path.push('.');
	path.push_str(segment);
	path
}

#[cfg(test)]
mod tests {
	use super::*;

	fn root(fields: Vec<Field>) -> TypeRef {
		StructType::new(fields).into()
	}

	fn point() -> StructType {
		StructType::new(vec![
			Field::required(10, "x", PrimitiveType::Double),
			Field::required(11, "y", PrimitiveType::Double),
		])
	}

	#[test]
	fn test_policy_table() {
		assert!(!ChildRole::StructField.elides_struct());
		assert!(ChildRole::ListElement.elides_struct());
		assert!(!ChildRole::MapKey.elides_struct());
		assert!(ChildRole::MapValue.elides_struct());
	}

	#[test]
	fn test_list_of_struct_short_names() {
		let ty = root(vec![Field::optional(1, "l", ListType::new(2, point(), false))]);
		let index = NameIndex::build(&ty, NameCase::Sensitive, None).unwrap();

		assert_eq!(index.get("l"), Some(FieldId(1)));
		assert_eq!(index.get("l.element"), Some(FieldId(2)));
		assert_eq!(index.get("l.element.x"), Some(FieldId(10)));
		assert_eq!(index.get("l.x"), Some(FieldId(10)));
		assert_eq!(index.get("l.y"), Some(FieldId(11)));
		assert_eq!(index.name(FieldId(10)), Some("l.element.x"));
	}

	#[test]
	fn test_list_of_primitive_keeps_element() {
		let ty = root(vec![Field::optional(1, "l", ListType::new(2, PrimitiveType::Int, false))]);
		let index = NameIndex::build(&ty, NameCase::Sensitive, None).unwrap();

		assert_eq!(index.get("l.element"), Some(FieldId(2)));
		assert_eq!(index.len(), 2);
	}

	#[test]
	fn test_map_value_shortens_key_does_not() {
		let ty = root(vec![Field::optional(1, "m", MapType::new(2, point(), 3, point_with_ids(20, 21), true))]);
		let index = NameIndex::build(&ty, NameCase::Sensitive, None).unwrap();

		assert_eq!(index.get("m.value.x"), Some(FieldId(20)));
		assert_eq!(index.get("m.x"), Some(FieldId(20)));
		assert_eq!(index.get("m.key.x"), Some(FieldId(10)));
		assert_eq!(index.get("m.key"), Some(FieldId(2)));
		assert_eq!(index.get("m.value"), Some(FieldId(3)));
	}

	fn point_with_ids(x: i32, y: i32) -> StructType {
		StructType::new(vec![
			Field::required(x, "x", PrimitiveType::Double),
			Field::required(y, "y", PrimitiveType::Double),
		])
	}

	#[test]
	fn test_canonical_wins_over_short() {
		// `l.x` is the short path of l.element.x and the canonical path of
		// the dotted root field.
		let ty = root(vec![
			Field::optional(1, "l", ListType::new(2, point(), false)),
			Field::optional(4, "l.x", PrimitiveType::String),
		]);
		let index = NameIndex::build(&ty, NameCase::Sensitive, None).unwrap();
		assert_eq!(index.get("l.element.x"), Some(FieldId(10)));
		assert_eq!(index.get("l.x"), Some(FieldId(4)));
		assert_eq!(index.get("l.y"), Some(FieldId(11)));
	}

	#[test]
	fn test_first_short_path_wins() {
		// `p.q.r` is a short path of both p.element.`q.r` and `p.q`.element.r,
		// and a canonical path of neither.
		let ty = root(vec![
			Field::optional(
				1,
				"p",
				ListType::new(2, StructType::new(vec![Field::optional(10, "q.r", PrimitiveType::Int)]), false),
			),
			Field::optional(
				3,
				"p.q",
				ListType::new(4, StructType::new(vec![Field::optional(20, "r", PrimitiveType::Int)]), false),
			),
		]);
		let index = NameIndex::build(&ty, NameCase::Sensitive, None).unwrap();
		assert_eq!(index.get("p.element.q.r"), Some(FieldId(10)));
		assert_eq!(index.get("p.q.element.r"), Some(FieldId(20)));
		assert_eq!(index.get("p.q.r"), Some(FieldId(10)));
	}

	#[test]
	fn test_nested_elision() {
		let ty = root(vec![Field::optional(
			1,
			"outer",
			ListType::new(
				2,
				StructType::new(vec![Field::optional(
					3,
					"m",
					MapType::new(4, PrimitiveType::String, 5, point(), true),
				)]),
				false,
			),
		)]);
		let index = NameIndex::build(&ty, NameCase::Sensitive, None).unwrap();
		assert_eq!(index.get("outer.element.m.value.x"), Some(FieldId(10)));
		assert_eq!(index.get("outer.m.x"), Some(FieldId(10)));
		assert_eq!(index.get("outer.m.key"), Some(FieldId(4)));
		assert_eq!(index.get("outer.m.value.x"), None);
		assert_eq!(index.get("outer.element.m.x"), None);
	}

	#[test]
	fn test_duplicate_canonical_path() {
		let ty = root(vec![
			Field::optional(1, "a", StructType::new(vec![Field::optional(2, "b", PrimitiveType::Int)])),
			Field::optional(3, "a.b", PrimitiveType::Int),
		]);

		let err = NameIndex::build(&ty, NameCase::Sensitive, None).unwrap_err();
		assert_eq!(
			err,
			SchemaError::DuplicateFieldName {
				path: "a.b".to_string(),
				existing: FieldId(2),
				conflicting: FieldId(3),
			}
		);
	}

	#[test]
	fn test_case_insensitive_collision() {
		let ty = root(vec![
			Field::optional(1, "Name", PrimitiveType::String),
			Field::optional(2, "name", PrimitiveType::String),
		]);

		assert!(NameIndex::build(&ty, NameCase::Sensitive, None).is_ok());
		let err = NameIndex::build(&ty, NameCase::Insensitive, None).unwrap_err();
		assert!(matches!(err, SchemaError::DuplicateFieldName { ref path, .. } if path == "name"));
	}

	#[test]
	fn test_case_insensitive_lookup() {
		let ty = root(vec![Field::optional(1, "Value", ListType::new(2, point(), false))]);
		let index = NameIndex::build(&ty, NameCase::Insensitive, None).unwrap();

		assert_eq!(index.case(), NameCase::Insensitive);
		assert_eq!(index.get("VALUE.Element.X"), Some(FieldId(10)));
		assert_eq!(index.get("value.y"), Some(FieldId(11)));
		assert_eq!(index.name(FieldId(1)), Some("value"));
	}

	#[test]
	fn test_quoting_hook() {
		let quote = |name: &str| {
			if name.contains('.') {
				format!("`{}`", name)
			} else {
				name.to_string()
			}
		};
		let ty = root(vec![
			Field::optional(1, "a", StructType::new(vec![Field::optional(2, "b", PrimitiveType::Int)])),
			Field::optional(3, "a.b", PrimitiveType::Int),
		]);

		let index = NameIndex::build(&ty, NameCase::Sensitive, Some(&quote)).unwrap();
		assert_eq!(index.get("a.b"), Some(FieldId(2)));
		assert_eq!(index.get("`a.b`"), Some(FieldId(3)));
	}

	#[test]
	fn test_empty_struct() {
		let index = NameIndex::build(&root(vec![]), NameCase::Sensitive, None).unwrap();
		assert!(index.is_empty());
		assert_eq!(index.get(""), None);
	}
}
