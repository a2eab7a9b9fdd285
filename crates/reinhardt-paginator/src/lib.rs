//! Reinhardt Paginator - Page navigation controls for list views
//!
//! Renders the row of page links under a paginated list: an optional jump to
//! the first page, a window of pages around the current one, an optional
//! jump to the last page, and previous/next buttons.
//!
//! ## Features
//!
//! - **Window Computation**: [`PageWindow`] decides which pages are visible, independent of markup
//! - **Markup Tree**: Output is a [`Page`] tree that can be embedded, serialized, or mounted
//! - **Escaped Output**: [`Page::render_to_string`] escapes every attribute and text node
//! - **URL Patterns**: [`UrlPattern`] validates the `#` page placeholder up front
//! - **Settings Files**: [`PresentationOptions`] loads from TOML or JSON over sensible defaults
//!
//! ## Architecture
//!
//! - [`config`]: Construction inputs (current page, item counts, URL pattern)
//! - [`options`]: Presentation options (classes, button labels, window sizes)
//! - [`window`]: Page window computation
//! - [`paginator`]: Rendering of the control
//! - [`component`]: Markup tree and HTML serialization
//! - [`url`]: Page URL patterns
//!
//! ## Example
//!
//! ```
//! use reinhardt_paginator::{Button, Paginator, PresentationOptions};
//!
//! let paginator = Paginator::new(2, 95, "/articles/page/#")
//!     .unwrap()
//!     .with_items_per_page(10)
//!     .with_first_page_in_url(false)
//!     .with_options(
//!         PresentationOptions::new()
//!             .with_button_title(Button::Previous, Some("Newer"))
//!             .with_button_title(Button::Next, Some("Older")),
//!     );
//!
//! let html = paginator.render_to_string().unwrap();
//! assert!(html.contains(r#"<a href="/articles/page" class="pagination-button prev">Newer</a>"#));
//! assert!(html.contains(r#"<a href="/articles/page/3" class="pagination-button next">Older</a>"#));
//! ```
//!
//! When the list fits on one page, or the current page is past the end,
//! rendering returns `None` and the caller emits nothing.

#![warn(missing_docs)]

pub mod component;
pub mod config;
pub mod error;
pub mod options;
pub mod paginator;
pub mod url;
pub mod window;

pub use component::{IntoPage, MountError, Page, PageElement};
pub use config::{DEFAULT_ITEMS_PER_PAGE, PaginatorConfig};
pub use error::{PaginatorError, Result};
pub use options::{Button, ButtonOptions, ClassList, PresentationOptions};
pub use paginator::{Paginator, render_with};
pub use url::UrlPattern;
pub use window::{Boundary, PageWindow};
