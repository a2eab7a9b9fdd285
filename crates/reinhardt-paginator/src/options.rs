//! Presentation options for rendered pagination controls
//!
//! Everything that changes how the control looks but not which pages it
//! shows lives here: class lists, inline style, button labels and ids, and
//! the size of the window around the current page.
//!
//! Options can be built in code or loaded from TOML/JSON. Missing keys fall
//! back to the defaults, so a settings file only needs the overrides. TOML
//! has no null, so a button is removed with `hidden = true`:
//!
//! ```
//! use reinhardt_paginator::{Button, PresentationOptions};
//!
//! let options = PresentationOptions::from_toml_str(
//!     r#"
//!     main_classes = ["pagination", "is-centered"]
//!     window_before = 3
//!
//!     [next]
//!     title = "Older posts"
//!
//!     [previous]
//!     hidden = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(options.window_before(), 3);
//! assert_eq!(options.window_after(), 2);
//! assert_eq!(options.button(Button::Next).title(), Some("Older posts"));
//! assert_eq!(options.button(Button::Next).classes().joined(), "next");
//! assert_eq!(options.button(Button::Previous).title(), None);
//! ```

use crate::error::{PaginatorError, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize};

/// Smallest allowed window on either side of the current page.
pub const MIN_WINDOW: u32 = 1;

/// Default window on either side of the current page.
pub const DEFAULT_WINDOW: u32 = 2;

/// Ordered set of CSS class names.
///
/// Keeps insertion order, ignores duplicates and blank names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ClassList(IndexSet<String>);

impl ClassList {
	/// Creates an empty class list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a class name if it is not blank and not already present.
	pub fn insert(&mut self, class: impl Into<String>) -> bool {
		let class = class.into();
		if class.trim().is_empty() {
			return false;
		}
		self.0.insert(class)
	}

	/// Returns whether `class` is present.
	pub fn contains(&self, class: &str) -> bool {
		self.0.contains(class)
	}

	/// Returns the class names in order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Returns the number of class names.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns whether the list is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the names joined with single spaces.
	pub fn joined(&self) -> String {
		self.iter().collect::<Vec<_>>().join(" ")
	}
}

impl<S: Into<String>> FromIterator<S> for ClassList {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut list = Self::new();
		for class in iter {
			list.insert(class);
		}
		list
	}
}

impl From<Vec<String>> for ClassList {
	fn from(classes: Vec<String>) -> Self {
		classes.into_iter().collect()
	}
}

impl From<ClassList> for Vec<String> {
	fn from(list: ClassList) -> Self {
		list.0.into_iter().collect()
	}
}

/// Navigation button selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
	/// Link to the page before the current one
	Previous = 0,
	/// Link to the page after the current one
	Next = 1,
}

impl TryFrom<u8> for Button {
	type Error = PaginatorError;

	fn try_from(value: u8) -> Result<Self> {
		match value {
			0 => Ok(Button::Previous),
			1 => Ok(Button::Next),
			other => Err(PaginatorError::UnknownButton(other)),
		}
	}
}

/// Label, id and classes of one navigation button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ButtonPatch")]
pub struct ButtonOptions {
	title: Option<String>,
	id: Option<String>,
	classes: ClassList,
}

impl ButtonOptions {
	/// Creates a button with a title and classes and no id.
	pub fn new<I, S>(title: &str, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			title: Some(title.to_string()),
			id: None,
			classes: classes.into_iter().collect(),
		}
	}

	fn default_previous() -> Self {
		Self::new("Previous", ["prev"])
	}

	fn default_next() -> Self {
		Self::new("Next", ["next"])
	}

	/// Returns the label; `None` means the button is not rendered.
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// Returns the element id.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Returns the button classes.
	pub fn classes(&self) -> &ClassList {
		&self.classes
	}
}

/// Serialized form of a button: only the keys that are set.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ButtonPatch {
	#[serde(skip_serializing_if = "Option::is_none")]
	title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	classes: Option<ClassList>,
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	hidden: bool,
}

impl ButtonPatch {
	fn apply(self, mut base: ButtonOptions) -> ButtonOptions {
		if let Some(title) = self.title {
			base.title = Some(title);
		}
		if self.hidden {
			base.title = None;
		}
		if let Some(id) = self.id {
			base.id = normalize_id(&id);
		}
		if let Some(classes) = self.classes {
			base.classes = classes;
		}
		base
	}
}

impl From<ButtonOptions> for ButtonPatch {
	fn from(button: ButtonOptions) -> Self {
		Self {
			hidden: button.title.is_none(),
			title: button.title,
			id: button.id,
			classes: Some(button.classes),
		}
	}
}

/// Presentation configuration of a pagination control.
///
/// Builder methods consume and return the options, so a configuration reads
/// as one chain:
///
/// ```
/// use reinhardt_paginator::{Button, PresentationOptions};
///
/// let options = PresentationOptions::new()
///     .with_main_classes(["pager"])
///     .with_button_title(Button::Previous, Some("«"))
///     .with_button_id(Button::Next, Some("pager next"))
///     .with_window_before(0);
///
/// assert_eq!(options.button(Button::Next).id(), Some("pagernext"));
/// assert_eq!(options.window_before(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationOptions {
	main_classes: ClassList,
	main_style: Option<String>,
	item_classes: ClassList,
	active_item_classes: ClassList,
	item_content_classes: ClassList,
	no_prev_class: Option<String>,
	no_next_class: Option<String>,
	#[serde(deserialize_with = "deserialize_window")]
	window_before: u32,
	#[serde(deserialize_with = "deserialize_window")]
	window_after: u32,
	#[serde(deserialize_with = "deserialize_previous")]
	previous: ButtonOptions,
	#[serde(deserialize_with = "deserialize_next")]
	next: ButtonOptions,
}

impl Default for PresentationOptions {
	fn default() -> Self {
		Self {
			main_classes: ["pagination"].into_iter().collect(),
			main_style: None,
			item_classes: ["item"].into_iter().collect(),
			active_item_classes: ["active"].into_iter().collect(),
			item_content_classes: ["item-content"].into_iter().collect(),
			no_prev_class: Some("item-no-prev".to_string()),
			no_next_class: Some("item-no-next".to_string()),
			window_before: DEFAULT_WINDOW,
			window_after: DEFAULT_WINDOW,
			previous: ButtonOptions::default_previous(),
			next: ButtonOptions::default_next(),
		}
	}
}

impl PresentationOptions {
	/// Creates the default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads options from a TOML document, merging over the defaults.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Loads options from a JSON document, merging over the defaults.
	pub fn from_json_str(source: &str) -> Result<Self> {
		Ok(serde_json::from_str(source)?)
	}

	/// Sets the classes of the outer `nav` element.
	pub fn with_main_classes<I, S>(mut self, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.main_classes = classes.into_iter().collect();
		self
	}

	/// Sets the inline style of the outer `nav` element.
	pub fn with_main_style(mut self, style: Option<&str>) -> Self {
		self.main_style = style.map(str::to_string);
		self
	}

	/// Sets a button label. `None` removes the button.
	pub fn with_button_title(mut self, button: Button, title: Option<&str>) -> Self {
		self.button_mut(button).title = title.map(str::to_string);
		self
	}

	/// Sets a button id. Whitespace is stripped; an id left empty is unset.
	pub fn with_button_id(mut self, button: Button, id: Option<&str>) -> Self {
		self.button_mut(button).id = id.and_then(normalize_id);
		self
	}

	/// Sets the classes of a button.
	pub fn with_button_classes<I, S>(mut self, button: Button, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.button_mut(button).classes = classes.into_iter().collect();
		self
	}

	/// Sets the classes of every page item.
	pub fn with_item_classes<I, S>(mut self, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.item_classes = classes.into_iter().collect();
		self
	}

	/// Sets the extra classes of the current page item.
	pub fn with_active_item_classes<I, S>(mut self, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.active_item_classes = classes.into_iter().collect();
		self
	}

	/// Sets the classes of the link or span inside each page item.
	pub fn with_item_content_classes<I, S>(mut self, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.item_content_classes = classes.into_iter().collect();
		self
	}

	/// Sets the class added to the current item when it is the first page.
	pub fn with_no_prev_class(mut self, class: Option<&str>) -> Self {
		self.no_prev_class = class.map(str::to_string);
		self
	}

	/// Sets the class added to the current item when it is the last page.
	pub fn with_no_next_class(mut self, class: Option<&str>) -> Self {
		self.no_next_class = class.map(str::to_string);
		self
	}

	/// Sets how many pages are listed before the current one (at least 1).
	pub fn with_window_before(mut self, pages: i64) -> Self {
		self.window_before = clamp_window(pages);
		self
	}

	/// Sets how many pages are listed after the current one (at least 1).
	pub fn with_window_after(mut self, pages: i64) -> Self {
		self.window_after = clamp_window(pages);
		self
	}

	fn button_mut(&mut self, button: Button) -> &mut ButtonOptions {
		match button {
			Button::Previous => &mut self.previous,
			Button::Next => &mut self.next,
		}
	}

	/// Returns the options of a button.
	pub fn button(&self, button: Button) -> &ButtonOptions {
		match button {
			Button::Previous => &self.previous,
			Button::Next => &self.next,
		}
	}

	/// Returns the classes of the outer `nav` element.
	pub fn main_classes(&self) -> &ClassList {
		&self.main_classes
	}

	/// Returns the inline style of the outer `nav` element.
	pub fn main_style(&self) -> Option<&str> {
		self.main_style.as_deref()
	}

	/// Returns the classes of every page item.
	pub fn item_classes(&self) -> &ClassList {
		&self.item_classes
	}

	/// Returns the extra classes of the current page item.
	pub fn active_item_classes(&self) -> &ClassList {
		&self.active_item_classes
	}

	/// Returns the classes of the link or span inside each page item.
	pub fn item_content_classes(&self) -> &ClassList {
		&self.item_content_classes
	}

	/// Returns the first-page boundary class.
	pub fn no_prev_class(&self) -> Option<&str> {
		self.no_prev_class.as_deref()
	}

	/// Returns the last-page boundary class.
	pub fn no_next_class(&self) -> Option<&str> {
		self.no_next_class.as_deref()
	}

	/// Returns the window before the current page.
	pub fn window_before(&self) -> u32 {
		self.window_before
	}

	/// Returns the window after the current page.
	pub fn window_after(&self) -> u32 {
		self.window_after
	}
}

fn clamp_window(pages: i64) -> u32 {
	u32::try_from(pages.max(i64::from(MIN_WINDOW))).unwrap_or(u32::MAX)
}

fn normalize_id(id: &str) -> Option<String> {
	let id: String = id.chars().filter(|c| !c.is_whitespace()).collect();
	if id.is_empty() { None } else { Some(id) }
}

fn deserialize_window<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = i64::deserialize(deserializer)?;
	let clamped = clamp_window(raw);
	if i64::from(clamped) != raw {
		tracing::warn!(
			"Pagination window size {} out of range, using {}",
			raw,
			clamped
		);
	}
	Ok(clamped)
}

fn deserialize_previous<'de, D>(deserializer: D) -> std::result::Result<ButtonOptions, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(ButtonPatch::deserialize(deserializer)?.apply(ButtonOptions::default_previous()))
}

fn deserialize_next<'de, D>(deserializer: D) -> std::result::Result<ButtonOptions, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(ButtonPatch::deserialize(deserializer)?.apply(ButtonOptions::default_next()))
}
