//! Markup tree for rendered pagination controls
//!
//! The paginator never concatenates HTML by hand. It builds a [`Page`] tree
//! of elements and text nodes, which callers either embed into
//! their own tree, serialize with [`Page::render_to_string`], or mount into
//! the browser DOM on `wasm32` targets.
//!
//! ## Usage
//!
//! ```
//! use reinhardt_paginator::component::{IntoPage, PageElement};
//!
//! let page = PageElement::new("li")
//!     .attr("class", "item")
//!     .child(PageElement::new("span").child("3"))
//!     .into_page();
//!
//! assert_eq!(page.render_to_string(), r#"<li class="item"><span>3</span></li>"#);
//! ```

mod into_page;

pub use into_page::{IntoPage, MountError, Page, PageElement};
