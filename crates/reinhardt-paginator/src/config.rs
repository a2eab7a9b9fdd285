//! Construction inputs of a paginator

use crate::error::Result;
use crate::url::UrlPattern;

/// Default number of items per page.
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 30;

/// Immutable inputs describing where in a result set the user stands.
///
/// Out-of-range values are normalized here rather than rejected: a negative
/// page size becomes 0 and a non-positive item count means there are no
/// pages at all. The current page is kept as given.
///
/// # Examples
///
/// ```
/// use reinhardt_paginator::PaginatorConfig;
///
/// let config = PaginatorConfig::new(3, 95, "/page/#").unwrap().with_items_per_page(10);
/// assert_eq!(config.total_pages(), 10);
/// assert_eq!(config.offset(), 20);
/// assert_eq!(config.end_offset(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatorConfig {
	current_page: i64,
	total_items: i64,
	items_per_page: i64,
	total_pages: i64,
	url_pattern: UrlPattern,
	show_first_page_in_url: bool,
}

impl PaginatorConfig {
	/// Creates a config with 30 items per page and page 1 shown in URLs.
	pub fn new(
		current_page: i64,
		total_items: i64,
		url_pattern: impl AsRef<str>,
	) -> Result<Self> {
		Ok(Self::with_pattern(
			current_page,
			total_items,
			UrlPattern::new(url_pattern)?,
		))
	}

	/// Creates a config from an already validated pattern.
	pub fn with_pattern(current_page: i64, total_items: i64, url_pattern: UrlPattern) -> Self {
		let total_items = total_items.max(0);
		let mut config = Self {
			current_page,
			total_items,
			items_per_page: DEFAULT_ITEMS_PER_PAGE,
			total_pages: 0,
			url_pattern,
			show_first_page_in_url: true,
		};
		config.total_pages = config.compute_total_pages();
		config
	}

	/// Sets the page size, clamping negative values to 0.
	pub fn with_items_per_page(mut self, items_per_page: i64) -> Self {
		self.items_per_page = items_per_page.max(0);
		self.total_pages = self.compute_total_pages();
		self
	}

	/// Sets whether page 1 carries its number in the URL.
	pub fn with_first_page_in_url(mut self, show: bool) -> Self {
		self.show_first_page_in_url = show;
		self
	}

	fn compute_total_pages(&self) -> i64 {
		if self.total_items <= 0 || self.items_per_page <= 0 {
			0
		} else {
			let full = self.total_items / self.items_per_page;
			full + i64::from(self.total_items % self.items_per_page != 0)
		}
	}

	/// Returns the current page as supplied by the caller.
	pub fn current_page(&self) -> i64 {
		self.current_page
	}

	/// Returns the normalized total item count.
	pub fn total_items(&self) -> i64 {
		self.total_items
	}

	/// Returns the normalized page size.
	pub fn items_per_page(&self) -> i64 {
		self.items_per_page
	}

	/// Returns the number of pages.
	pub fn total_pages(&self) -> i64 {
		self.total_pages
	}

	/// Returns the URL pattern.
	pub fn url_pattern(&self) -> &UrlPattern {
		&self.url_pattern
	}

	/// Returns whether page 1 carries its number in the URL.
	pub fn show_first_page_in_url(&self) -> bool {
		self.show_first_page_in_url
	}

	/// Returns the URL of `page`, honouring the first-page URL setting.
	pub fn page_url(&self, page: i64) -> String {
		self.url_pattern.resolve(page, self.show_first_page_in_url)
	}

	/// Returns whether a page exists before the current one.
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	/// Returns whether a page exists after the current one.
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages
	}

	/// Returns the zero-based index of the first item on the current page.
	pub fn offset(&self) -> i64 {
		self.current_page
			.saturating_sub(1)
			.max(0)
			.saturating_mul(self.items_per_page)
			.min(self.total_items)
	}

	/// Returns the zero-based index one past the last item on the current page.
	pub fn end_offset(&self) -> i64 {
		self.offset()
			.saturating_add(self.items_per_page)
			.min(self.total_items)
	}
}
