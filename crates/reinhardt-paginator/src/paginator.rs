//! Pagination control rendering
//!
//! [`Paginator`] pairs the immutable [`PaginatorConfig`] with mutable
//! [`PresentationOptions`] and renders the control as a [`Page`] tree:
//!
//! ```html
//! <nav class="pagination">
//!   <a href="/page/6" class="pagination-button prev">Previous</a>
//!   <ul class="pagination-pages">
//!     <li class="gost item"><a class="item-content" href="/page">1</a></li>
//!     <li class="item"><a class="item-content" href="/page/5">5</a></li>
//!     <li class="active item"><span class="item-content">7</span></li>
//!     ...
//!   </ul>
//!   <a href="/page/8" class="pagination-button next">Next</a>
//! </nav>
//! ```
//!
//! The serialized output has no whitespace between tags.

use crate::component::{IntoPage, Page, PageElement};
use crate::config::PaginatorConfig;
use crate::error::Result;
use crate::options::{Button, ClassList, PresentationOptions};
use crate::url::UrlPattern;
use crate::window::{Boundary, PageWindow};

/// Class marking the jump-to-first and jump-to-last page items.
pub const SHORTCUT_CLASS: &str = "gost";

/// Class on both navigation buttons, ahead of the configured button classes.
pub const BUTTON_CLASS: &str = "pagination-button";

/// Class of the list holding the page items.
pub const PAGES_CLASS: &str = "pagination-pages";

/// Pagination control for one rendered view.
///
/// # Examples
///
/// ```
/// use reinhardt_paginator::Paginator;
///
/// let paginator = Paginator::new(7, 100, "/page/#").unwrap().with_items_per_page(10);
/// let html = paginator.render_to_string().unwrap();
///
/// assert!(html.starts_with(r#"<nav class="pagination">"#));
/// assert!(html.contains(r#"<li class="active item"><span class="item-content">7</span></li>"#));
/// assert!(html.contains(r#"<li class="gost item"><a class="item-content" href="/page/10">10</a></li>"#));
///
/// // A single page needs no control
/// assert!(Paginator::new(1, 5, "/page/#").unwrap().render().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
	config: PaginatorConfig,
	options: PresentationOptions,
}

impl Paginator {
	/// Creates a paginator with default page size and presentation.
	pub fn new(current_page: i64, total_items: i64, url_pattern: impl AsRef<str>) -> Result<Self> {
		Ok(Self::from_config(PaginatorConfig::new(
			current_page,
			total_items,
			url_pattern,
		)?))
	}

	/// Creates a paginator from a config with default presentation.
	pub fn from_config(config: PaginatorConfig) -> Self {
		Self {
			config,
			options: PresentationOptions::default(),
		}
	}

	/// Creates a paginator from a validated pattern.
	pub fn with_pattern(current_page: i64, total_items: i64, url_pattern: UrlPattern) -> Self {
		Self::from_config(PaginatorConfig::with_pattern(
			current_page,
			total_items,
			url_pattern,
		))
	}

	/// Sets the page size, clamping negative values to 0.
	pub fn with_items_per_page(mut self, items_per_page: i64) -> Self {
		self.config = self.config.with_items_per_page(items_per_page);
		self
	}

	/// Sets whether page 1 carries its number in the URL.
	pub fn with_first_page_in_url(mut self, show: bool) -> Self {
		self.config = self.config.with_first_page_in_url(show);
		self
	}

	/// Replaces the presentation options.
	pub fn with_options(mut self, options: PresentationOptions) -> Self {
		self.options = options;
		self
	}

	/// Applies builder-style changes to the presentation options in place.
	///
	/// ```
	/// use reinhardt_paginator::{Button, Paginator};
	///
	/// let mut paginator = Paginator::new(2, 90, "/page/#").unwrap();
	/// paginator.configure(|options| options.with_button_title(Button::Next, None));
	/// assert_eq!(paginator.options().button(Button::Next).title(), None);
	/// ```
	pub fn configure(
		&mut self,
		f: impl FnOnce(PresentationOptions) -> PresentationOptions,
	) -> &mut Self {
		let options = std::mem::take(&mut self.options);
		self.options = f(options);
		self
	}

	/// Sets the classes of the outer `nav` element.
	pub fn set_main_classes<I, S>(&mut self, classes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.configure(|options| options.with_main_classes(classes))
	}

	/// Sets the inline style of the outer `nav` element.
	pub fn set_main_style(&mut self, style: Option<&str>) -> &mut Self {
		self.configure(|options| options.with_main_style(style))
	}

	/// Sets a button label. `None` removes the button.
	pub fn set_button_title(&mut self, button: Button, title: Option<&str>) -> &mut Self {
		self.configure(|options| options.with_button_title(button, title))
	}

	/// Sets a button id. Whitespace is stripped; an id left empty is unset.
	pub fn set_button_id(&mut self, button: Button, id: Option<&str>) -> &mut Self {
		self.configure(|options| options.with_button_id(button, id))
	}

	/// Sets the classes of a button.
	pub fn set_button_classes<I, S>(&mut self, button: Button, classes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.configure(|options| options.with_button_classes(button, classes))
	}

	/// Sets the classes of every page item.
	pub fn set_item_classes<I, S>(&mut self, classes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.configure(|options| options.with_item_classes(classes))
	}

	/// Sets the extra classes of the current page item.
	pub fn set_active_item_classes<I, S>(&mut self, classes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.configure(|options| options.with_active_item_classes(classes))
	}

	/// Sets the classes of the link or span inside each page item.
	pub fn set_item_content_classes<I, S>(&mut self, classes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.configure(|options| options.with_item_content_classes(classes))
	}

	/// Sets the class added to the current item when it is the first page.
	pub fn set_no_prev_class(&mut self, class: Option<&str>) -> &mut Self {
		self.configure(|options| options.with_no_prev_class(class))
	}

	/// Sets the class added to the current item when it is the last page.
	pub fn set_no_next_class(&mut self, class: Option<&str>) -> &mut Self {
		self.configure(|options| options.with_no_next_class(class))
	}

	/// Sets how many pages are listed before the current one (at least 1).
	pub fn set_window_before(&mut self, pages: i64) -> &mut Self {
		self.configure(|options| options.with_window_before(pages))
	}

	/// Sets how many pages are listed after the current one (at least 1).
	pub fn set_window_after(&mut self, pages: i64) -> &mut Self {
		self.configure(|options| options.with_window_after(pages))
	}

	/// Returns the construction inputs.
	pub fn config(&self) -> &PaginatorConfig {
		&self.config
	}

	/// Returns the presentation options.
	pub fn options(&self) -> &PresentationOptions {
		&self.options
	}

	/// Returns the presentation options for in-place replacement.
	pub fn options_mut(&mut self) -> &mut PresentationOptions {
		&mut self.options
	}

	/// Returns the number of pages.
	pub fn total_pages(&self) -> i64 {
		self.config.total_pages()
	}

	/// Computes the visible pages, or `None` when nothing is rendered.
	pub fn window(&self) -> Option<PageWindow> {
		PageWindow::for_config(
			&self.config,
			self.options.window_before(),
			self.options.window_after(),
		)
	}

	/// Renders the control, or `None` when there is nothing to paginate.
	pub fn render(&self) -> Option<Page> {
		render_with(&self.config, &self.options)
	}

	/// Renders the control to an escaped HTML string.
	pub fn render_to_string(&self) -> Option<String> {
		self.render().map(|page| page.render_to_string())
	}
}

/// Renders a pagination control from explicit inputs.
///
/// This is what [`Paginator::render`] calls; use it directly to share one
/// set of options between several configs.
pub fn render_with(config: &PaginatorConfig, options: &PresentationOptions) -> Option<Page> {
	let Some(window) =
		PageWindow::for_config(config, options.window_before(), options.window_after())
	else {
		tracing::debug!(
			"Pagination suppressed: page {} of {}",
			config.current_page(),
			config.total_pages()
		);
		return None;
	};

	tracing::trace!(?window, "Rendering pagination");

	let pattern = config.url_pattern();
	let show_first = config.show_first_page_in_url();
	let item_classes = options.item_classes().joined();
	let content_classes = options.item_content_classes().joined();
	let link_item = |page: i64, href: String, shortcut: bool| {
		let class = if shortcut {
			join_classes([SHORTCUT_CLASS, item_classes.as_str()])
		} else {
			item_classes.clone()
		};
		PageElement::new("li").attr("class", class).child(
			PageElement::new("a")
				.attr("class", content_classes.clone())
				.attr("href", href)
				.child(page.to_string()),
		)
	};

	let mut items = Vec::new();

	if window.leading_shortcut {
		items.push(link_item(1, pattern.first_page_url(), true));
	}

	for page in window.before_pages() {
		let href = if !show_first && window.start <= 1 && page <= 1 {
			pattern.first_page_url()
		} else {
			pattern.page_url(page)
		};
		items.push(link_item(page, href, false));
	}

	items.push(current_item(&window, options, &content_classes));

	for page in window.after_pages() {
		items.push(link_item(page, pattern.page_url(page), false));
	}

	if window.trailing_shortcut {
		items.push(link_item(
			window.total_pages,
			pattern.page_url(window.total_pages),
			true,
		));
	}

	let previous = window.previous.and_then(|page| {
		nav_button(options, Button::Previous, pattern.resolve(page, show_first))
	});
	let next = window
		.next
		.and_then(|page| nav_button(options, Button::Next, pattern.page_url(page)));

	let nav = PageElement::new("nav")
		.attr_opt("style", options.main_style().map(str::to_string))
		.attr("class", options.main_classes().joined())
		.child(previous)
		.child(
			PageElement::new("ul")
				.attr("class", PAGES_CLASS)
				.children(items),
		)
		.child(next);

	Some(nav.into_page())
}

fn current_item(window: &PageWindow, options: &PresentationOptions, content_classes: &str) -> PageElement {
	let boundary_class = match window.boundary() {
		Boundary::First => options.no_prev_class(),
		Boundary::Last => options.no_next_class(),
		Boundary::Interior => None,
	};
	let class = join_classes(
		boundary_class
			.into_iter()
			.chain(options.active_item_classes().iter())
			.chain(options.item_classes().iter()),
	);

	PageElement::new("li").attr("class", class).child(
		PageElement::new("span")
			.attr("class", content_classes.to_string())
			.child(window.current.to_string()),
	)
}

fn nav_button(options: &PresentationOptions, button: Button, href: String) -> Option<PageElement> {
	let button = options.button(button);
	let title = button.title()?;
	Some(
		PageElement::new("a")
			.attr("href", href)
			.attr_opt("id", button.id().map(str::to_string))
			.attr("class", button_class(button.classes()))
			.child(title.to_string()),
	)
}

fn button_class(classes: &ClassList) -> String {
	join_classes(std::iter::once(BUTTON_CLASS).chain(classes.iter()))
}

fn join_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
	classes
		.into_iter()
		.filter(|class| !class.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn middle() -> Paginator {
		Paginator::new(7, 100, "/page/#")
			.unwrap()
			.with_items_per_page(10)
	}

	fn pages_list(page: &Page) -> &PageElement {
		page.as_element()
			.unwrap()
			.child_elements()
			.find(|el| el.tag_name() == "ul")
			.unwrap()
	}

	fn item_texts(page: &Page) -> Vec<String> {
		pages_list(page)
			.child_elements()
			.map(PageElement::text_content)
			.collect()
	}

	#[rstest]
	fn test_render_middle_page_exact_markup(middle: Paginator) {
		let html = middle.render_to_string().unwrap();
		let expected = concat!(
			r#"<nav class="pagination">"#,
			r#"<a href="/page/6" class="pagination-button prev">Previous</a>"#,
			r#"<ul class="pagination-pages">"#,
			r#"<li class="gost item"><a class="item-content" href="/page">1</a></li>"#,
			r#"<li class="item"><a class="item-content" href="/page/5">5</a></li>"#,
			r#"<li class="item"><a class="item-content" href="/page/6">6</a></li>"#,
			r#"<li class="active item"><span class="item-content">7</span></li>"#,
			r#"<li class="item"><a class="item-content" href="/page/8">8</a></li>"#,
			r#"<li class="item"><a class="item-content" href="/page/9">9</a></li>"#,
			r#"<li class="gost item"><a class="item-content" href="/page/10">10</a></li>"#,
			r#"</ul>"#,
			r#"<a href="/page/8" class="pagination-button next">Next</a>"#,
			r#"</nav>"#,
		);
		assert_eq!(html, expected);
	}

	#[rstest]
	fn test_render_is_idempotent(middle: Paginator) {
		assert_eq!(middle.render(), middle.render());
	}

	#[rstest]
	fn test_first_page_boundary_class() {
		let paginator = Paginator::new(1, 50, "/page/#")
			.unwrap()
			.with_items_per_page(10);
		let page = paginator.render().unwrap();
		let html = page.render_to_string();

		assert!(!html.contains("pagination-button prev"));
		assert!(!html.contains("gost item\"><a class=\"item-content\" href=\"/page\">1"));
		assert!(html.contains(r#"<li class="item-no-prev active item"><span class="item-content">1</span></li>"#));
		assert_eq!(item_texts(&page), vec!["1", "2", "3", "5"]);
	}

	#[rstest]
	fn test_last_page_boundary_class() {
		let paginator = Paginator::new(5, 50, "/page/#")
			.unwrap()
			.with_items_per_page(10);
		let page = paginator.render().unwrap();
		let html = page.render_to_string();

		assert!(!html.contains("pagination-button next"));
		assert!(html.contains(r#"<li class="item-no-next active item">"#));
		assert_eq!(item_texts(&page), vec!["1", "3", "4", "5"]);
	}

	#[rstest]
	fn test_hidden_first_page_in_url() {
		let paginator = Paginator::new(2, 50, "/page/#")
			.unwrap()
			.with_items_per_page(10)
			.with_first_page_in_url(false);
		let html = paginator.render_to_string().unwrap();

		assert!(html.contains(r#"<a href="/page" class="pagination-button prev">Previous</a>"#));
		assert!(html.contains(r#"<li class="item"><a class="item-content" href="/page">1</a></li>"#));
		assert!(!html.contains("/page/1\""));
	}

	#[rstest]
	fn test_first_page_in_url_by_default() {
		let paginator = Paginator::new(2, 50, "/page/#")
			.unwrap()
			.with_items_per_page(10);
		let html = paginator.render_to_string().unwrap();

		assert!(html.contains(r#"<a href="/page/1" class="pagination-button prev">"#));
		assert!(html.contains(r#"<li class="item"><a class="item-content" href="/page/1">1</a></li>"#));
	}

	#[rstest]
	fn test_leading_shortcut_always_uses_bare_url(middle: Paginator) {
		let html = middle.with_first_page_in_url(true).render_to_string().unwrap();
		assert!(html.contains(r#"<li class="gost item"><a class="item-content" href="/page">1</a></li>"#));
	}

	#[rstest]
	fn test_main_style_and_button_ids(middle: Paginator) {
		let paginator = middle.with_options(
			PresentationOptions::new()
				.with_main_style(Some("text-align: center"))
				.with_main_classes(["pager", "pager-lg"])
				.with_button_id(Button::Previous, Some("pager prev"))
				.with_button_classes(Button::Next, Vec::<String>::new()),
		);
		let html = paginator.render_to_string().unwrap();

		assert!(html.starts_with(r#"<nav style="text-align: center" class="pager pager-lg">"#));
		assert!(html.contains(r#"<a href="/page/6" id="pagerprev" class="pagination-button prev">"#));
		assert!(html.contains(r#"<a href="/page/8" class="pagination-button">Next</a>"#));
	}

	#[rstest]
	fn test_buttons_removed_by_title(middle: Paginator) {
		let mut paginator = middle;
		paginator.configure(|options| {
			options
				.with_button_title(Button::Previous, None)
				.with_button_title(Button::Next, None)
		});
		let page = paginator.render().unwrap();
		let nav = page.as_element().unwrap();

		let tags: Vec<_> = nav.child_elements().map(PageElement::tag_name).collect();
		assert_eq!(tags, vec!["ul"]);
	}

	#[rstest]
	fn test_setters_match_builders(middle: Paginator) {
		let mut paginator = middle.clone();
		paginator
			.set_main_classes(["pager"])
			.set_main_style(Some("margin: 0"))
			.set_button_title(Button::Previous, Some("Back"))
			.set_button_id(Button::Previous, Some(" back "))
			.set_button_classes(Button::Next, ["fwd"])
			.set_item_classes(["page-item"])
			.set_active_item_classes(["current"])
			.set_item_content_classes(["page-link"])
			.set_no_prev_class(None)
			.set_no_next_class(Some("at-end"))
			.set_window_before(1)
			.set_window_after(0);

		let built = middle.with_options(
			PresentationOptions::new()
				.with_main_classes(["pager"])
				.with_main_style(Some("margin: 0"))
				.with_button_title(Button::Previous, Some("Back"))
				.with_button_id(Button::Previous, Some("back"))
				.with_button_classes(Button::Next, ["fwd"])
				.with_item_classes(["page-item"])
				.with_active_item_classes(["current"])
				.with_item_content_classes(["page-link"])
				.with_no_prev_class(None)
				.with_no_next_class(Some("at-end"))
				.with_window_before(1)
				.with_window_after(1),
		);

		assert_eq!(paginator, built);
		assert_eq!(paginator.render(), built.render());
	}

	#[rstest]
	fn test_setters_change_rendered_markup(middle: Paginator) {
		let mut paginator = middle;
		paginator
			.set_window_before(1)
			.set_window_after(1)
			.set_button_title(Button::Next, None)
			.set_active_item_classes(["current"]);
		let page = paginator.render().unwrap();
		let html = page.render_to_string();

		assert_eq!(item_texts(&page), vec!["1", "6", "7", "8", "10"]);
		assert!(html.contains(r#"<li class="current item"><span class="item-content">7</span></li>"#));
		assert!(!html.contains("pagination-button next"));
	}

	#[rstest]
	fn test_no_boundary_classes_when_unset() {
		let paginator = Paginator::new(1, 50, "/page/#")
			.unwrap()
			.with_items_per_page(10)
			.with_options(PresentationOptions::new().with_no_prev_class(None));
		let html = paginator.render_to_string().unwrap();
		assert!(html.contains(r#"<li class="active item"><span class="item-content">1</span></li>"#));
	}

	#[rstest]
	fn test_user_strings_are_escaped() {
		let paginator = Paginator::new(2, 50, "/search?q=a&b=\"c\"&page=#")
			.unwrap()
			.with_items_per_page(10)
			.with_options(
				PresentationOptions::new()
					.with_button_title(Button::Next, Some("<Next>"))
					.with_item_classes(["x\"onclick=\"y"]),
			);
		let html = paginator.render_to_string().unwrap();

		assert!(html.contains("href=\"/search?q=a&amp;b=&quot;c&quot;&amp;page=3\""));
		assert!(html.contains("&lt;Next&gt;</a>"));
		assert!(html.contains("class=\"x&quot;onclick=&quot;y\""));
		assert!(!html.contains("<Next>"));
	}

	#[rstest]
	#[case(1, 0)]
	#[case(1, 10)]
	#[case(4, 30)]
	#[case(-1, -1)]
	fn test_suppressed_renders(#[case] current: i64, #[case] total_items: i64) {
		let paginator = Paginator::new(current, total_items, "/page/#")
			.unwrap()
			.with_items_per_page(10);
		assert!(paginator.render().is_none());
		assert!(paginator.render_to_string().is_none());
		assert!(paginator.window().is_none());
	}

	#[rstest]
	fn test_render_with_shares_options() {
		let options = PresentationOptions::new().with_window_before(1).with_window_after(1);
		let a = PaginatorConfig::new(3, 90, "/a/#")
			.unwrap()
			.with_items_per_page(10);
		let b = PaginatorConfig::new(2, 90, "/b/#")
			.unwrap()
			.with_items_per_page(10);

		let a_html = render_with(&a, &options).unwrap().render_to_string();
		let b_html = render_with(&b, &options).unwrap().render_to_string();
		assert!(a_html.contains("href=\"/a/4\""));
		assert!(b_html.contains("href=\"/b/3\""));
	}
}
