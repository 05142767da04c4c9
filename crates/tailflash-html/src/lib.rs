//! # tailflash-html - HTML attribute and tag primitives
//!
//! The small set of HTML helpers the `tailflash` widget is built on:
//!
//! - [`Attributes`]: insertion-ordered attribute maps with additive `class`
//!   merging
//! - [`render_attributes`]: escaped, deterministic attribute serialization
//! - [`Tag`]: a one-element builder with inline and block layouts
//! - [`escape`]: entity encoding for text and attribute values
//!
//! None of these operations can fail.
//!
//! ```rust
//! use tailflash_html::{Attributes, Tag};
//!
//! let button = Tag::new("button")
//!     .attributes(Attributes::new().with("type", "button").with("onclick", "closeAlert()"))
//!     .class("float-right px-4 py-3")
//!     .content("&times;");
//!
//! assert_eq!(
//!     button.render(),
//!     r#"<button type="button" onclick="closeAlert()" class="float-right px-4 py-3">&times;</button>"#
//! );
//! ```

mod attributes;
mod escape;
mod tag;

pub use attributes::{render_attributes, AttrValue, Attributes, CLASS};
pub use escape::escape;
pub use tag::Tag;
