//! A minimal element builder.
//!
//! [`Tag`] renders one element with ordered attributes and content. Content
//! is emitted verbatim unless set through [`Tag::text`], which escapes it.
//! Block tags put their content on its own line, which is how container
//! elements are laid out:
//!
//! ```rust
//! use tailflash_html::{Attributes, Tag};
//!
//! let inline = Tag::new("span").content("This is a test.");
//! assert_eq!(inline.render(), "<span>This is a test.</span>");
//!
//! let block = Tag::new("div")
//!     .attributes(Attributes::new().with("class", "container"))
//!     .content(inline.render())
//!     .block();
//! assert_eq!(
//!     block.render(),
//!     "<div class=\"container\">\n<span>This is a test.</span>\n</div>"
//! );
//! ```

use std::fmt;

use crate::attributes::{render_attributes, Attributes};
use crate::escape::escape;

/// An HTML element ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    name: String,
    attributes: Attributes,
    content: String,
    block: bool,
}

impl Tag {
    /// Creates an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            content: String::new(),
            block: false,
        }
    }

    /// Replaces the attribute map.
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Appends CSS class tokens to the element.
    pub fn class(mut self, class: &str) -> Self {
        self.attributes.add_class(class);
        self
    }

    /// Sets raw (already safe) markup as the element content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets plain text as the element content, escaping it.
    pub fn text(mut self, text: &str) -> Self {
        self.content = escape(text);
        self
    }

    /// Places the content on its own line between the opening and closing tags.
    ///
    /// Empty content still renders on one line: `<div></div>`.
    pub fn block(mut self) -> Self {
        self.block = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}{}>", self.name, render_attributes(&self.attributes))?;
        if self.block && !self.content.is_empty() {
            write!(f, "\n{}\n", self.content)?;
        } else {
            f.write_str(&self.content)?;
        }
        write!(f, "</{}>", self.name)
    }
}
