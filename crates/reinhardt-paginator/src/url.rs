//! Page URL patterns
//!
//! A [`UrlPattern`] is a URL with exactly one `#` marking where the page
//! number goes, such as `/articles/page/#` or `/search?q=rust&page=#`.

use crate::error::{PaginatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character marking the page number position in a URL pattern.
pub const PLACEHOLDER: char = '#';

/// URL template with a single page-number placeholder.
///
/// The pattern is split once at construction so substitution never has to
/// search the string again.
///
/// # Examples
///
/// ```
/// use reinhardt_paginator::UrlPattern;
///
/// let pattern = UrlPattern::new("/blog/page/#").unwrap();
/// assert_eq!(pattern.page_url(3), "/blog/page/3");
/// assert_eq!(pattern.first_page_url(), "/blog/page");
///
/// assert!(UrlPattern::new("/blog/page/").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UrlPattern {
	prefix: String,
	suffix: String,
}

impl UrlPattern {
	/// Parses a pattern, requiring exactly one placeholder.
	pub fn new(pattern: impl AsRef<str>) -> Result<Self> {
		let pattern = pattern.as_ref();
		let count = pattern.matches(PLACEHOLDER).count();
		match count {
			0 => Err(PaginatorError::MissingPlaceholder {
				pattern: pattern.to_string(),
			}),
			1 => {
				// Exactly one placeholder, so the split always succeeds
				let (prefix, suffix) = pattern
					.split_once(PLACEHOLDER)
					.unwrap_or((pattern, ""));
				Ok(Self {
					prefix: prefix.to_string(),
					suffix: suffix.to_string(),
				})
			}
			_ => Err(PaginatorError::MultiplePlaceholders {
				pattern: pattern.to_string(),
				count,
			}),
		}
	}

	/// Returns the URL for `page` by substituting the placeholder.
	pub fn page_url(&self, page: i64) -> String {
		format!("{}{}{}", self.prefix, page, self.suffix)
	}

	/// Returns the URL for page 1 without any page segment.
	///
	/// A `/#` segment is removed as a whole; otherwise only the bare
	/// placeholder is dropped.
	pub fn first_page_url(&self) -> String {
		let prefix = self.prefix.strip_suffix('/').unwrap_or(&self.prefix);
		format!("{}{}", prefix, self.suffix)
	}

	/// Returns the URL for `page`, dropping the page segment for page 1
	/// when `show_first_page_in_url` is false.
	pub fn resolve(&self, page: i64, show_first_page_in_url: bool) -> String {
		if !show_first_page_in_url && page == 1 {
			self.first_page_url()
		} else {
			self.page_url(page)
		}
	}
}

impl fmt::Display for UrlPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.prefix, PLACEHOLDER, self.suffix)
	}
}

impl FromStr for UrlPattern {
	type Err = PaginatorError;

	fn from_str(s: &str) -> Result<Self> {
		Self::new(s)
	}
}

impl TryFrom<String> for UrlPattern {
	type Error = PaginatorError;

	fn try_from(value: String) -> Result<Self> {
		Self::new(value)
	}
}

impl TryFrom<&str> for UrlPattern {
	type Error = PaginatorError;

	fn try_from(value: &str) -> Result<Self> {
		Self::new(value)
	}
}

impl From<UrlPattern> for String {
	fn from(pattern: UrlPattern) -> Self {
		pattern.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/page/#", 4, "/page/4")]
	#[case("/list?page=#", 12, "/list?page=12")]
	#[case("#", 2, "2")]
	#[case("/p/#/comments", 3, "/p/3/comments")]
	fn test_page_url(#[case] pattern: &str, #[case] page: i64, #[case] expected: &str) {
		let pattern = UrlPattern::new(pattern).unwrap();
		assert_eq!(pattern.page_url(page), expected);
	}

	#[rstest]
	#[case("/page/#", "/page")]
	#[case("/p/#/comments", "/p/comments")]
	#[case("/list?page=#", "/list?page=")]
	#[case("/catalog#", "/catalog")]
	fn test_first_page_url(#[case] pattern: &str, #[case] expected: &str) {
		let pattern = UrlPattern::new(pattern).unwrap();
		assert_eq!(pattern.first_page_url(), expected);
	}

	#[rstest]
	fn test_resolve_page_one() {
		let pattern = UrlPattern::new("/page/#").unwrap();
		assert_eq!(pattern.resolve(1, true), "/page/1");
		assert_eq!(pattern.resolve(1, false), "/page");
		assert_eq!(pattern.resolve(2, false), "/page/2");
	}

	#[rstest]
	fn test_missing_placeholder_is_rejected() {
		let err = UrlPattern::new("/page/").unwrap_err();
		assert!(matches!(err, PaginatorError::MissingPlaceholder { ref pattern } if pattern == "/page/"));
	}

	#[rstest]
	fn test_multiple_placeholders_are_rejected() {
		let err = UrlPattern::new("/#/page/#").unwrap_err();
		assert!(matches!(err, PaginatorError::MultiplePlaceholders { count: 2, .. }));
		assert!(err.to_string().contains("expected exactly one"));
	}

	#[rstest]
	fn test_display_restores_pattern() {
		let pattern: UrlPattern = "/page/#?sort=asc".parse().unwrap();
		assert_eq!(pattern.to_string(), "/page/#?sort=asc");
	}

	#[rstest]
	fn test_serde_validates() {
		let pattern: UrlPattern = serde_json::from_str("\"/page/#\"").unwrap();
		assert_eq!(pattern.page_url(9), "/page/9");
		assert!(serde_json::from_str::<UrlPattern>("\"/page\"").is_err());
	}
}
