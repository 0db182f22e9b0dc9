//! Columns bound to a name within a table

use super::Column;
use crate::attrs::{AttributeDict, ColumnAttrs};
use crate::html::SafeString;
use serde_json::Value;

/// A column resolved against the table that owns it
///
/// Carries the effective name used in the rendered output (for example the
/// `name` attribute of editable inputs).
#[derive(Debug, Clone, Copy)]
pub struct BoundColumn<'a> {
	name: &'a str,
	column: &'a dyn Column,
}

impl<'a> BoundColumn<'a> {
	/// Binds `column` under `name`
	pub fn new(name: &'a str, column: &'a dyn Column) -> Self {
		Self { name, column }
	}

	/// The column name within its table
	pub fn name(&self) -> &'a str {
		self.name
	}

	/// The underlying column definition
	pub fn column(&self) -> &'a dyn Column {
		self.column
	}

	/// The column's attribute configuration
	pub fn attrs(&self) -> &'a ColumnAttrs {
		self.column.attrs()
	}

	/// Whether the table may be ordered by this column
	pub fn orderable(&self) -> bool {
		self.column.orderable()
	}

	/// Whether the column is rendered
	pub fn visible(&self) -> bool {
		self.column.visible()
	}

	/// Header text: the explicit verbose name, or the humanized column name
	///
	/// `first_name` becomes `First name`.
	pub fn verbose_name(&self) -> String {
		match self.column.verbose_name() {
			Some(verbose) => verbose.to_string(),
			None => humanize(self.name),
		}
	}

	/// Rendered header cell content
	pub fn header(&self) -> SafeString {
		self.column.header(self)
	}

	/// Effective `<th>` attributes
	pub fn header_cell_attrs(&self) -> AttributeDict {
		self.attrs().header_cell()
	}

	/// Effective `<td>` attributes
	pub fn body_cell_attrs(&self) -> AttributeDict {
		self.attrs().body_cell()
	}

	/// Renders a body cell, substituting the column default for `null`
	pub fn render(&self, value: &Value) -> SafeString {
		let value = if value.is_null() {
			self.column.default_value()
		} else {
			value
		};
		self.column.render(value, self)
	}
}

fn humanize(name: &str) -> String {
	let spaced = name.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::{BaseColumn, ColumnOptions};
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("first_name", "First name")]
	#[case("id", "Id")]
	#[case("", "")]
	#[case("élan", "Élan")]
	fn test_humanize(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(humanize(name), expected);
	}

	#[rstest]
	fn test_verbose_name_prefers_explicit() {
		let column = BaseColumn::new(
			ColumnAttrs::new(),
			ColumnOptions::new().verbose_name("Full name"),
		);
		let bound = BoundColumn::new("name", &column);

		assert_eq!(bound.verbose_name(), "Full name");
		assert_eq!(bound.header().as_str(), "Full name");
	}

	#[rstest]
	fn test_render_substitutes_default_for_null() {
		let column = BaseColumn::new(ColumnAttrs::new(), ColumnOptions::new().default_value("—"));
		let bound = BoundColumn::new("note", &column);

		assert_eq!(bound.render(&Value::Null).as_str(), "—");
		assert_eq!(bound.render(&json!("set")).as_str(), "set");
	}
}
