//! HTML escaping and the "marked safe" string type

use std::borrow::Cow;
use std::fmt;

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use reinhardt_tables_core::html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// HTML fragment that is exempt from further escaping
///
/// Column renderers return `SafeString` so the table layer can embed their
/// output directly. Anything else passed through [`conditional_escape`] is
/// escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeString(String);

impl SafeString {
	/// Mark a string as safe HTML
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_tables_core::html::SafeString;
	///
	/// let safe = SafeString::new("<b>Bold</b>");
	/// assert_eq!(safe.as_str(), "<b>Bold</b>");
	/// ```
	pub fn new(s: impl Into<String>) -> Self {
		Self(s.into())
	}

	/// Get the string content
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert to String
	pub fn into_string(self) -> String {
		self.0
	}

	/// Returns `true` if the fragment is empty
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for SafeString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for SafeString {
	fn from(s: String) -> Self {
		Self(s)
	}
}

impl From<&str> for SafeString {
	fn from(s: &str) -> Self {
		Self(s.to_string())
	}
}

impl AsRef<str> for SafeString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// Content that may or may not already be safe HTML
#[derive(Debug, Clone, Copy)]
pub enum Markup<'a> {
	/// Plain text, escaped on output
	Text(&'a str),
	/// Already-safe HTML, emitted verbatim
	Safe(&'a SafeString),
}

impl<'a> From<&'a str> for Markup<'a> {
	fn from(text: &'a str) -> Self {
		Markup::Text(text)
	}
}

impl<'a> From<&'a SafeString> for Markup<'a> {
	fn from(safe: &'a SafeString) -> Self {
		Markup::Safe(safe)
	}
}

/// Escape plain text, pass safe HTML through untouched
///
/// # Examples
///
/// ```
/// use reinhardt_tables_core::html::{conditional_escape, SafeString};
///
/// assert_eq!(conditional_escape("<b>"), "&lt;b&gt;");
/// let safe = SafeString::new("<b>");
/// assert_eq!(conditional_escape(&safe), "<b>");
/// ```
pub fn conditional_escape<'a>(content: impl Into<Markup<'a>>) -> Cow<'a, str> {
	match content.into() {
		Markup::Text(text) => Cow::Owned(escape(text)),
		Markup::Safe(safe) => Cow::Borrowed(safe.as_str()),
	}
}
