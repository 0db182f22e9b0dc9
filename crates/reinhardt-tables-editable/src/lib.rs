//! Editable column for Reinhardt data tables
//!
//! Provides [`EditableColumn`], a column whose body cells render as
//! `<input type="contenteditable">` elements. The column registers itself in
//! the column library under the type name `editable`, so it can be used from
//! table configuration files:
//!
//! ```toml
//! [[columns]]
//! name = "title"
//! type = "editable"
//!
//! [columns.attrs.td__input]
//! class = "inline-edit"
//! ```
//!
//! Deprecated configuration forms (a flat attribute mapping, the
//! `header_attrs` option) are still accepted. Each one is translated, logged
//! under [`DEPRECATION_TARGET`] and recorded on the column as a
//! [`Deprecation`].

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod deprecation;

pub use column::EditableColumn;
pub use deprecation::{DEPRECATION_TARGET, Deprecation};
