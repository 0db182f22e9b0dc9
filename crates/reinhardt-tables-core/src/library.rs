//! Column type library
//!
//! Column types register themselves with the library so tables can be built
//! from configuration by type name. Registration happens at link time through
//! `inventory`:
//!
//! ```ignore
//! inventory::submit! {
//!     ColumnRegistration::new("editable", EditableColumn::from_spec)
//! }
//! ```
//!
//! [`ColumnLibrary::from_inventory`] collects every submission. A submission
//! that cannot be registered (bad name, name taken) is not exposed and is
//! reported as a [`RegistrationDiagnostic`] instead.

use crate::column::Column;
use crate::config::ColumnSpec;
use crate::error::{Result, TableError};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::LazyLock;

/// Builds a column from its configuration entry
pub type ColumnFactory = fn(&ColumnSpec) -> Result<Box<dyn Column>>;

/// A column type offered to the library
#[derive(Debug, Clone, Copy)]
pub struct ColumnRegistration {
	/// Name used in configuration (`type = "..."`)
	pub type_name: &'static str,
	/// Constructor for the column type
	pub factory: ColumnFactory,
}

impl ColumnRegistration {
	/// Creates a registration entry
	pub const fn new(type_name: &'static str, factory: ColumnFactory) -> Self {
		Self { type_name, factory }
	}
}

inventory::collect!(ColumnRegistration);

/// Why a submitted column type was left out of the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationDiagnostic {
	/// Another submission already uses the name
	Duplicate {
		/// Contested type name.
		type_name: String,
	},
	/// The name is not a valid column type identifier
	InvalidName {
		/// Rejected type name.
		type_name: String,
		/// Why it was rejected.
		reason: String,
	},
}

impl fmt::Display for RegistrationDiagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Duplicate { type_name } => {
				write!(f, "column type '{}' registered more than once", type_name)
			}
			Self::InvalidName { type_name, reason } => {
				write!(f, "column type name {:?} rejected: {}", type_name, reason)
			}
		}
	}
}

impl RegistrationDiagnostic {
	/// Maps a registration error to its diagnostic, if it is one
	pub fn from_error(err: TableError) -> Option<Self> {
		match err {
			TableError::DuplicateColumnType(type_name) => Some(Self::Duplicate { type_name }),
			TableError::InvalidColumnType { name, reason } => Some(Self::InvalidName {
				type_name: name,
				reason,
			}),
			_ => None,
		}
	}
}

/// Registry of available column types
#[derive(Default)]
pub struct ColumnLibrary {
	types: RwLock<IndexMap<String, ColumnFactory>>,
	diagnostics: RwLock<Vec<RegistrationDiagnostic>>,
}

static GLOBAL_LIBRARY: LazyLock<ColumnLibrary> = LazyLock::new(ColumnLibrary::from_inventory);

impl ColumnLibrary {
	/// Maximum allowed length for column type names.
	const MAX_NAME_LENGTH: usize = 64;

	/// Creates an empty library
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a library holding every column type submitted via `inventory`
	pub fn from_inventory() -> Self {
		let library = Self::new();
		for registration in inventory::iter::<ColumnRegistration> {
			if let Err(err) = library.register(*registration)
				&& let Some(diagnostic) = RegistrationDiagnostic::from_error(err)
			{
				tracing::warn!("{}", diagnostic);
				library.diagnostics.write().push(diagnostic);
			}
		}
		tracing::debug!(
			"column library loaded {} types",
			library.types.read().len()
		);
		library
	}

	/// The process-wide library, built from `inventory` on first use
	pub fn global() -> &'static ColumnLibrary {
		&GLOBAL_LIBRARY
	}

	/// Registers a column type
	pub fn register(&self, registration: ColumnRegistration) -> Result<()> {
		Self::validate_type_name(registration.type_name)?;
		let mut types = self.types.write();
		if types.contains_key(registration.type_name) {
			return Err(TableError::DuplicateColumnType(
				registration.type_name.to_string(),
			));
		}
		types.insert(registration.type_name.to_string(), registration.factory);
		Ok(())
	}

	/// Returns `true` if a column type with this name is registered
	pub fn contains(&self, type_name: &str) -> bool {
		self.types.read().contains_key(type_name)
	}

	/// Names of all registered column types, sorted
	pub fn type_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.types.read().keys().cloned().collect();
		names.sort();
		names
	}

	/// Problems encountered while loading submitted column types
	pub fn diagnostics(&self) -> Vec<RegistrationDiagnostic> {
		self.diagnostics.read().clone()
	}

	/// Builds a column from a configuration entry
	pub fn build(&self, spec: &ColumnSpec) -> Result<Box<dyn Column>> {
		let factory = self
			.types
			.read()
			.get(&spec.type_name)
			.copied()
			.ok_or_else(|| TableError::UnknownColumnType(spec.type_name.clone()))?;
		factory(spec)
	}

	/// Validates a column type name
	///
	/// Valid names are non-empty, at most [`Self::MAX_NAME_LENGTH`] long, and
	/// contain only ASCII lowercase letters, digits, `_` and `-`.
	fn validate_type_name(name: &str) -> Result<()> {
		let reason = if name.is_empty() {
			"name cannot be empty".to_string()
		} else if name.len() > Self::MAX_NAME_LENGTH {
			format!(
				"name exceeds maximum length of {} characters",
				Self::MAX_NAME_LENGTH
			)
		} else if !name
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
		{
			"name may only contain lowercase letters, digits, '_' and '-'".to_string()
		} else {
			return Ok(());
		};
		Err(TableError::InvalidColumnType {
			name: name.to_string(),
			reason,
		})
	}
}

impl fmt::Debug for ColumnLibrary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnLibrary")
			.field("types", &self.type_names())
			.field("diagnostics", &*self.diagnostics.read())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attrs::ColumnAttrs;
	use crate::column::{BaseColumn, ColumnOptions};
	use rstest::rstest;

	fn plain(_spec: &ColumnSpec) -> Result<Box<dyn Column>> {
		Ok(Box::new(BaseColumn::new(ColumnAttrs::new(), ColumnOptions::new())))
	}

	#[rstest]
	fn test_inventory_contains_base_column() {
		let library = ColumnLibrary::from_inventory();

		assert!(library.contains("column"));
		assert!(library.diagnostics().is_empty());
	}

	#[rstest]
	fn test_global_library_is_shared() {
		let first = ColumnLibrary::global() as *const ColumnLibrary;
		let second = ColumnLibrary::global() as *const ColumnLibrary;

		assert_eq!(first, second);
		assert!(ColumnLibrary::global().contains("column"));
	}

	#[rstest]
	fn test_register_duplicate_is_rejected() {
		// Arrange
		let library = ColumnLibrary::new();
		library.register(ColumnRegistration::new("plain", plain)).unwrap();

		// Act
		let result = library.register(ColumnRegistration::new("plain", plain));

		// Assert
		let err = result.unwrap_err();
		assert_eq!(err.to_string(), "column type already registered: plain");
		assert_eq!(library.type_names(), ["plain"]);
	}

	#[rstest]
	#[case("")]
	#[case("Editable")]
	#[case("with space")]
	#[case("dotted.name")]
	fn test_register_rejects_invalid_names(#[case] name: &'static str) {
		let library = ColumnLibrary::new();

		let result = library.register(ColumnRegistration::new(name, plain));

		assert!(matches!(result, Err(TableError::InvalidColumnType { .. })));
		assert!(!library.contains(name));
	}

	#[rstest]
	fn test_build_unknown_type() {
		let library = ColumnLibrary::new();

		let err = library.build(&ColumnSpec::new("name", "missing")).unwrap_err();

		assert_eq!(err.to_string(), "unknown column type: missing");
	}

	#[rstest]
	fn test_error_to_diagnostic() {
		let diagnostic = RegistrationDiagnostic::from_error(TableError::DuplicateColumnType(
			"editable".to_string(),
		));

		assert_eq!(
			diagnostic,
			Some(RegistrationDiagnostic::Duplicate {
				type_name: "editable".to_string()
			})
		);
		assert_eq!(
			diagnostic.unwrap().to_string(),
			"column type 'editable' registered more than once"
		);
	}
}
