//! Deprecated configuration forms accepted by [`EditableColumn`](crate::EditableColumn)

use reinhardt_tables_core::{Attrs, VALID_ATTRS_KEYS};
use std::fmt;

/// `tracing` target deprecation warnings are emitted under
pub const DEPRECATION_TARGET: &str = "reinhardt_tables::deprecation";

/// A deprecated configuration form that was translated during construction
#[derive(Debug, Clone, PartialEq)]
pub enum Deprecation {
	/// A flat attribute mapping, reinterpreted as `td__input`
	LegacyFlatAttrs {
		/// The mapping as it was given.
		attrs: Attrs,
	},
	/// The `header_attrs` option, merged into `th__input`
	HeaderAttrs,
}

impl Deprecation {
	/// Emits the warning through `tracing`
	pub(crate) fn emit(&self) {
		tracing::warn!(target: DEPRECATION_TARGET, "{}", self);
	}
}

impl fmt::Display for Deprecation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::LegacyFlatAttrs { attrs } => {
				let attrs = serde_json::to_string(attrs).map_err(|_| fmt::Error)?;
				write!(
					f,
					"attrs keys must be one of {}, interpreting as {{\"td__input\": {}}}",
					VALID_ATTRS_KEYS.join(", "),
					attrs
				)
			}
			Self::HeaderAttrs => f.write_str(
				"header_attrs argument is deprecated, use attrs={\"th__input\": ...} instead",
			),
		}
	}
}
