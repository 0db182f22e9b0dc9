//! Column definitions
//!
//! A [`Column`] describes how one table column renders. It does not know its
//! own name: a [`Table`](crate::table::Table) binds each column under a name,
//! producing a [`BoundColumn`] that is handed to the column on every render.

pub mod base;
pub mod bound;

pub use base::{BaseColumn, ColumnOptions};
pub use bound::BoundColumn;

use crate::attrs::ColumnAttrs;
use crate::html::{SafeString, conditional_escape};
use serde_json::Value;
use std::fmt::Debug;

static NULL: Value = Value::Null;

/// Trait for table column definitions
///
/// Implementations are immutable once constructed, so a single column can be
/// rendered from several threads at once.
pub trait Column: Debug + Send + Sync {
	/// Name under which this column type is registered in the column library
	fn type_name(&self) -> &'static str;

	/// Per-context HTML attributes of this column
	fn attrs(&self) -> &ColumnAttrs;

	/// Returns whether the table may be ordered by this column
	fn orderable(&self) -> bool;

	/// Returns whether this column is rendered at all
	///
	/// Default: true
	fn visible(&self) -> bool {
		true
	}

	/// Explicit header text, if any
	fn verbose_name(&self) -> Option<&str> {
		None
	}

	/// Value substituted when a row has no value (or `null`) for this column
	fn default_value(&self) -> &Value {
		&NULL
	}

	/// Renders the header cell content
	fn header(&self, bound_column: &BoundColumn<'_>) -> SafeString {
		let verbose_name = bound_column.verbose_name();
		SafeString::new(conditional_escape(verbose_name.as_str()).into_owned())
	}

	/// Renders one body cell's content
	///
	/// The default renders the value's text form, escaped. `null` renders as
	/// an empty string.
	fn render(&self, value: &Value, _bound_column: &BoundColumn<'_>) -> SafeString {
		let text = crate::attrs::attr_value_to_string(value).unwrap_or_default();
		SafeString::new(conditional_escape(text.as_str()).into_owned())
	}
}
