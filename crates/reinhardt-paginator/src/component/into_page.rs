//! IntoPage trait and Page enum for pagination markup.

use std::borrow::Cow;

/// Error type for mounting pages to the DOM.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("Document object not available")]
	NoDocument,
	/// Failed to create an element.
	#[error("Failed to create element <{0}>")]
	CreateElementFailed(String),
	/// Failed to set an attribute.
	#[error("Failed to set attribute {0}")]
	SetAttributeFailed(String),
	/// Failed to append a child node.
	#[error("Failed to append child")]
	AppendChildFailed,
}

/// A unified representation of renderable markup.
///
/// Attribute values and text are stored raw. Escaping happens when the tree
/// is serialized, so a caller that mounts the tree into a DOM never sees
/// double-escaped entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// An element node.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// Renders nothing.
	Empty,
}

/// An element node in the page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
}

impl PageElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds an attribute when `value` is present.
	pub fn attr_opt(
		self,
		name: impl Into<Cow<'static, str>>,
		value: Option<impl Into<Cow<'static, str>>>,
	) -> Self {
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the first attribute called `name`.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child nodes.
	pub fn child_pages(&self) -> &[Page] {
		&self.children
	}

	/// Returns the child nodes that are elements.
	pub fn child_elements(&self) -> impl Iterator<Item = &PageElement> {
		self.children.iter().filter_map(Page::as_element)
	}

	/// Returns the concatenated, unescaped text of all descendants.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.collect_text(&mut out);
		}
		out
	}
}

impl Page {
	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&PageElement> {
		match self {
			Page::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Renders the page to an HTML string.
	///
	/// Attribute values and text nodes are escaped for HTML.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				output.push('>');
				for child in el.child_pages() {
					child.render_to_string_inner(output);
				}
				output.push_str("</");
				output.push_str(el.tag_name());
				output.push('>');
			}
			Page::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Page::Empty => {}
		}
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Page::Element(el) => {
				for child in el.child_pages() {
					child.collect_text(out);
				}
			}
			Page::Text(text) => out.push_str(text),
			Page::Empty => {}
		}
	}

	/// Mounts the page under `parent` (client-side only).
	#[cfg(target_arch = "wasm32")]
	pub fn mount(self, parent: &web_sys::Element) -> Result<(), MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;
		self.mount_inner(&document, parent)
	}

	#[cfg(target_arch = "wasm32")]
	fn mount_inner(
		self,
		document: &web_sys::Document,
		parent: &web_sys::Node,
	) -> Result<(), MountError> {
		match self {
			Page::Element(el) => {
				let element = document
					.create_element(&el.tag)
					.map_err(|_| MountError::CreateElementFailed(el.tag.to_string()))?;

				for (name, value) in el.attrs {
					element
						.set_attribute(&name, &value)
						.map_err(|_| MountError::SetAttributeFailed(name.to_string()))?;
				}

				for child in el.children {
					child.mount_inner(document, &element)?;
				}

				parent
					.append_child(&element)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			Page::Text(text) => {
				let text_node = document.create_text_node(&text);
				parent
					.append_child(&text_node)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			Page::Empty => {}
		}

		Ok(())
	}
}

/// Trait for types that can be converted into a Page.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

/// Escapes HTML special characters.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
