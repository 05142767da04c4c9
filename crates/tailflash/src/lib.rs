//! # tailflash - Flash Messages as Tailwind Alerts
//!
//! `tailflash` renders the flash messages a web application queued during a
//! request into styled HTML alert blocks: one alert per message, in queue
//! order, each made of an optional icon, header, body and dismiss button.
//!
//! ## Core Concepts
//!
//! - [`AlertFlash`]: the widget. An immutable configuration with fluent
//!   setters and a [`render`](AlertFlash::render) entry point
//! - [`FlashStore`]: where messages come from; [`MemoryFlash`] is the
//!   in-memory implementation
//! - [`StyleTable`]: per-type background and icon classes. Its alert table
//!   also decides which types are rendered at all
//! - Layouts: strings such as `"{icon}{body}{button}"` that arrange the
//!   rendered fragments (see [`layout`])
//!
//! Rendering happens in two steps. [`resolve`] merges each message's own
//! settings over the widget configuration, producing an [`AlertSpec`];
//! [`compose`] turns one `AlertSpec` into markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use tailflash::{AlertFlash, Attributes, MemoryFlash};
//!
//! let mut flash = MemoryFlash::new();
//! flash.add("danger", json!({"body": "Something seriously bad happened."}));
//!
//! let widget = AlertFlash::new()
//!     .class("flex items-center px-4 py-3 text-white")
//!     .body_tag("p")
//!     .unwrap()
//!     .button_label("&times;")
//!     .button_on_click("closeAlert()")
//!     .icon_attributes(Attributes::new().with("class", "fa-2x pr-2"))
//!     .layout_body("{icon}{body}{button}");
//!
//! let html = widget.render(&flash);
//!
//! assert!(html.starts_with(
//!     r#"<div id="w0-alert" class="bg-red-600 flex items-center px-4 py-3 text-white" role="alert">"#
//! ));
//! assert!(html.contains(r#"<div><i class="fa-2x pr-2 far fa-times-circle"></i></div>"#));
//! assert!(html.contains(r#"onclick="closeAlert()">&times;</button>"#));
//! ```
//!
//! ## Per-Message Overrides
//!
//! A message payload may carry `header`, `attributes`, `bodyAttributes`,
//! `iconAttributes`, `iconClass` and `iconText`. Each one replaces the
//! widget's value for that message only:
//!
//! ```rust
//! use serde_json::json;
//! use tailflash::{AlertFlash, MemoryFlash};
//!
//! let mut flash = MemoryFlash::new();
//! flash.add("info", json!({"body": "Deploy finished.", "header": "CI", "iconClass": "fas fa-rocket"}));
//!
//! let html = AlertFlash::new()
//!     .layout_header("{icon}{header}")
//!     .render(&flash);
//!
//! assert_eq!(
//!     html,
//!     "<div id=\"w0-alert\" class=\"bg-indigo-600\" role=\"alert\">\n\
//!      <div><i class=\"fas fa-rocket\"></i></div>\n\
//!      <h4>CI</h4>\n\
//!      <span>Deploy finished.</span>\n\
//!      </div>"
//! );
//! ```
//!
//! ## Configuration Files
//!
//! Widgets can be loaded from YAML with [`AlertFlash::from_yaml`] and
//! [`AlertFlash::from_file`]; see [`config`].

mod block;
mod compose;
pub mod config;
mod error;
pub mod flash;
pub mod layout;
pub mod prelude;
mod resolve;
mod style;
mod widget;

pub use block::TextBlock;
pub use compose::compose;
pub use config::AlertFlashConfig;
pub use error::{AlertError, Result};
pub use flash::{collect_records, FlashMessages, FlashRecord, FlashStore, MemoryFlash};
pub use layout::Placeholder;
pub use resolve::{resolve, AlertSpec, BUTTON_CSS_CLASS};
pub use style::StyleTable;
pub use widget::{AlertFlash, IdGenerator};

// Re-export the HTML primitives used throughout the public API
pub use tailflash_html::{escape, render_attributes, AttrValue, Attributes, Tag};
