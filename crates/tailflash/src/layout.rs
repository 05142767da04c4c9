//! Layout templates.
//!
//! A layout is a string with `{placeholder}` tokens. Only four placeholders
//! exist: `{icon}`, `{body}`, `{header}` and `{button}`. Each is replaced by
//! the matching rendered fragment; anything else is copied through
//! untouched, including unknown tokens and unclosed braces.
//!
//! Two fragments that follow each other directly are separated by a newline,
//! so `{icon}{body}{button}` puts each element on its own line. Literal text
//! between placeholders is kept as written. A fragment that renders empty
//! leaves no trace.
//!
//! # Example
//!
//! ```rust
//! use tailflash::layout::{expand, Placeholder};
//!
//! let html = expand("{icon}{body} {missing}", |placeholder| match placeholder {
//!     Placeholder::Icon => "<i></i>".to_string(),
//!     Placeholder::Body => "<span>Hi</span>".to_string(),
//!     _ => String::new(),
//! });
//!
//! assert_eq!(html, "<i></i>\n<span>Hi</span> {missing}");
//! ```

/// The placeholders a layout can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Icon,
    Body,
    Header,
    Button,
}

impl Placeholder {
    /// Looks up a placeholder by the exact name between the braces.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "icon" => Some(Placeholder::Icon),
            "body" => Some(Placeholder::Body),
            "header" => Some(Placeholder::Header),
            "button" => Some(Placeholder::Button),
            _ => None,
        }
    }
}

/// Expands a layout, asking `fragment` for the markup of each placeholder.
///
/// `fragment` is called once per occurrence, and only for placeholders the
/// layout actually contains.
pub fn expand<F>(layout: &str, mut fragment: F) -> String
where
    F: FnMut(Placeholder) -> String,
{
    let mut result = String::with_capacity(layout.len());
    let mut rest = layout;
    let mut after_fragment = false;

    while let Some(open) = rest.find('{') {
        let (text, tail) = rest.split_at(open);
        if !text.is_empty() {
            result.push_str(text);
            after_fragment = false;
        }

        let placeholder = tail[1..].find('}').and_then(|close| {
            Placeholder::from_name(&tail[1..=close]).map(|p| (p, close))
        });

        match placeholder {
            Some((placeholder, close)) => {
                let html = fragment(placeholder);
                if !html.is_empty() {
                    if after_fragment {
                        result.push('\n');
                    }
                    result.push_str(&html);
                    after_fragment = true;
                }
                rest = &tail[close + 2..];
            }
            None => {
                // Not a placeholder: keep the brace and scan on from the next char
                result.push('{');
                after_fragment = false;
                rest = &tail[1..];
            }
        }
    }

    result.push_str(rest);
    result
}
