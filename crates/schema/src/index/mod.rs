// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Lookup indexes over the full nested closure of a schema.
//!
//! Both indexes are built by one pre-order walk of the type tree:
//! - [`IdIndex`] maps every field id to the position of its field
//! - [`NameIndex`] maps every canonical dotted path, and every short path
//!   that does not collide with a canonical one, to a field id

mod id;
mod name;

pub use id::{FieldPosition, IdIndex};
pub use name::{ChildRole, NameCase, NameIndex, QuoteFn};
