//! Error types for table definition and configuration.

use thiserror::Error;

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors that can occur while defining or configuring tables
///
/// Rendering itself never fails; every variant here is raised while a table
/// is being assembled (from code or from a configuration file).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
	/// No column type with this name is registered in the library
	#[error("unknown column type: {0}")]
	UnknownColumnType(String),

	/// A column type with this name is already registered
	#[error("column type already registered: {0}")]
	DuplicateColumnType(String),

	/// Column type name is not a valid identifier
	#[error("invalid column type name '{name}': {reason}")]
	InvalidColumnType {
		/// Offending type name.
		name: String,
		/// Why the name was rejected.
		reason: String,
	},

	/// A column with this name already exists in the table
	#[error("duplicate column name: {0}")]
	DuplicateColumn(String),

	/// Table configuration is malformed
	#[error("invalid table configuration: {0}")]
	InvalidConfig(String),

	/// Configuration file could not be read
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// Configuration file is not valid TOML
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}
