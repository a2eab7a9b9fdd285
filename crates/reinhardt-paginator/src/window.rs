//! Page window computation
//!
//! Decides which page numbers a pagination control shows, independent of
//! any markup. Given current page 7 of 10 with two pages on either side the
//! control reads:
//!
//! ```text
//! [Previous] 1 | 5 6 [7] 8 9 | 10 [Next]
//! ```
//!
//! where `1` and `10` are the jump shortcuts.

use crate::config::PaginatorConfig;

/// Visible pages around the current page.
///
/// Produced by [`PageWindow::compute`]; `None` there means the control is
/// not rendered at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
	/// Page the user stands on
	pub current: i64,
	/// Total number of pages
	pub total_pages: i64,
	/// Whether the jump-to-page-1 shortcut is shown
	pub leading_shortcut: bool,
	/// First page listed before the current one
	pub start: i64,
	/// Last page listed after the current one
	pub end: i64,
	/// Whether the jump-to-last-page shortcut is shown
	pub trailing_shortcut: bool,
	/// Target of the previous button, if one is possible
	pub previous: Option<i64>,
	/// Target of the next button, if one is possible
	pub next: Option<i64>,
}

/// Where the current page sits relative to the ends of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
	/// The current page is the first page (or before it)
	First,
	/// The current page is the last page
	Last,
	/// Pages exist on both sides
	Interior,
}

impl PageWindow {
	/// Computes the window, or `None` when there is nothing to paginate.
	///
	/// Nothing is rendered when there is at most one page or the current
	/// page lies beyond the last one.
	pub fn compute(current: i64, total_pages: i64, before: u32, after: u32) -> Option<Self> {
		if current > total_pages || total_pages <= 1 {
			return None;
		}

		let before = i64::from(before);
		let after = i64::from(after);

		// Shown once the gap before the window is at least as wide as the window
		let leading_shortcut = current.saturating_sub(before) >= before;
		let start = current.saturating_sub(before).max(1);
		let end = current.saturating_add(after).min(total_pages);
		let trailing_shortcut = current.saturating_add(after) < total_pages;

		let previous = current.checked_sub(1).filter(|page| *page > 0);
		let next = current
			.checked_add(1)
			.filter(|page| *page <= total_pages);

		Some(Self {
			current,
			total_pages,
			leading_shortcut,
			start,
			end,
			trailing_shortcut,
			previous,
			next,
		})
	}

	/// Computes the window for a config with the given window sizes.
	pub fn for_config(config: &PaginatorConfig, before: u32, after: u32) -> Option<Self> {
		Self::compute(config.current_page(), config.total_pages(), before, after)
	}

	/// Pages listed between the leading shortcut and the current page.
	pub fn before_pages(&self) -> std::ops::Range<i64> {
		self.start..self.current
	}

	/// Pages listed between the current page and the trailing shortcut.
	///
	/// Never below page 1, even when the current page is.
	pub fn after_pages(&self) -> std::ops::RangeInclusive<i64> {
		self.current.saturating_add(1).max(1)..=self.end
	}

	/// Returns whether the current page is at an end of the range.
	pub fn boundary(&self) -> Boundary {
		if self.current <= 1 {
			Boundary::First
		} else if self.current >= self.total_pages {
			Boundary::Last
		} else {
			Boundary::Interior
		}
	}

	/// All page numbers shown, shortcuts included, in display order.
	pub fn pages(&self) -> Vec<i64> {
		let mut pages = Vec::new();
		if self.leading_shortcut {
			pages.push(1);
		}
		pages.extend(self.before_pages());
		pages.push(self.current);
		pages.extend(self.after_pages());
		if self.trailing_shortcut {
			pages.push(self.total_pages);
		}
		pages
	}
}
