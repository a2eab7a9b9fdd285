//! Error types for paginator construction and configuration loading

use crate::url::PLACEHOLDER;

/// Errors reported while building a paginator or loading its options.
///
/// Rendering itself never fails; anomalies in page arithmetic are
/// normalized instead of reported.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PaginatorError {
	/// The URL pattern has no page placeholder.
	#[error("URL pattern {pattern:?} has no '{placeholder}' page placeholder", placeholder = PLACEHOLDER)]
	MissingPlaceholder {
		/// The rejected pattern
		pattern: String,
	},

	/// The URL pattern has more than one page placeholder.
	#[error(
		"URL pattern {pattern:?} has {count} '{placeholder}' page placeholders, expected exactly one",
		placeholder = PLACEHOLDER
	)]
	MultiplePlaceholders {
		/// The rejected pattern
		pattern: String,
		/// Number of placeholders found
		count: usize,
	},

	/// A numeric button selector that is neither previous (0) nor next (1).
	#[error("Unknown button selector: {0}")]
	UnknownButton(u8),

	/// Presentation options could not be parsed from TOML.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Presentation options could not be parsed from JSON.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type alias for paginator operations.
pub type Result<T> = std::result::Result<T, PaginatorError>;
