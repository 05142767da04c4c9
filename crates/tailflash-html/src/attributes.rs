//! Ordered HTML attribute maps.
//!
//! [`Attributes`] keeps attributes in insertion order so rendered markup is
//! deterministic. Two merge rules apply everywhere in tailflash:
//!
//! - `class` is additive: [`Attributes::add_class`] appends each token that is
//!   not already present and never drops existing tokens.
//! - every other key is last-writer-wins via [`Attributes::merge`], so values
//!   supplied by the caller replace computed defaults.
//!
//! # Example
//!
//! ```rust
//! use tailflash_html::{render_attributes, Attributes};
//!
//! let mut attrs = Attributes::new().with("class", "bg-red-600");
//! attrs.add_class("flex text-white");
//! attrs.add_class("flex");
//!
//! assert_eq!(render_attributes(&attrs), r#" class="bg-red-600 flex text-white""#);
//! ```

use indexmap::map::Iter;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::escape::escape;

/// The attribute that merges by token instead of by value.
pub const CLASS: &str = "class";

/// A single attribute value.
///
/// Deserializes from JSON/YAML scalars and string lists, which is how
/// attribute maps arrive inside flash payloads and configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// `true` renders the bare attribute name, `false` omits the attribute.
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Space-joined on output; mostly used for `class` lists.
    List(Vec<String>),
}

impl AttrValue {
    /// Returns the whitespace-separated tokens carried by this value.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            AttrValue::Text(s) => s.split_whitespace().map(str::to_string).collect(),
            AttrValue::List(items) => items
                .iter()
                .flat_map(|item| item.split_whitespace())
                .map(str::to_string)
                .collect(),
            AttrValue::Int(n) => vec![n.to_string()],
            AttrValue::Float(n) => vec![n.to_string()],
            AttrValue::Bool(_) => Vec::new(),
        }
    }

    /// Renders the value as attribute text, or `None` for boolean values.
    fn as_text(&self) -> Option<String> {
        match self {
            AttrValue::Bool(_) => None,
            AttrValue::Int(n) => Some(n.to_string()),
            AttrValue::Float(n) => Some(n.to_string()),
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::List(items) => Some(items.join(" ")),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(value: Vec<&str>) -> Self {
        AttrValue::List(value.into_iter().map(str::to_string).collect())
    }
}

/// An insertion-ordered map of HTML attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets an attribute. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Sets an attribute only when the key is absent.
    pub fn insert_default(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.entry(name.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Removes an attribute, keeping the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.shift_remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> Iter<'_, String, AttrValue> {
        self.0.iter()
    }

    /// Returns the class tokens currently set, in order.
    pub fn classes(&self) -> Vec<String> {
        self.0.get(CLASS).map(AttrValue::tokens).unwrap_or_default()
    }

    /// Appends CSS class tokens to the `class` attribute.
    ///
    /// `class` may hold several whitespace-separated tokens. Tokens already
    /// present are skipped. A blank `class` leaves the map untouched, so no
    /// empty `class=""` attribute is ever created here.
    pub fn add_class(&mut self, class: &str) {
        let mut tokens = self.classes();
        let before = tokens.len();
        for token in class.split_whitespace() {
            if !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
        if tokens.len() != before {
            self.0.insert(CLASS.to_string(), AttrValue::Text(tokens.join(" ")));
        }
    }

    /// Appends CSS class tokens, returning `self` for chaining.
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Merges `other` into `self`.
    ///
    /// Classes from `other` are appended to the existing ones. Any other key
    /// takes the value from `other`, keeping its position if it was already set
    /// here.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            if name == CLASS {
                self.add_class(&value.tokens().join(" "));
            } else {
                self.0.insert(name.clone(), value.clone());
            }
        }
    }

    /// Merges `other` into `self`, returning `self` for chaining.
    pub fn merged(mut self, other: &Attributes) -> Self {
        self.merge(other);
        self
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Serializes attributes into the text that follows a tag name.
///
/// Each attribute is rendered with a leading space, in insertion order. Names
/// and values are escaped. `true` renders as a bare name and `false` is
/// omitted. An empty map renders as the empty string.
pub fn render_attributes(attributes: &Attributes) -> String {
    let mut out = String::new();
    for (name, value) in attributes {
        match value {
            AttrValue::Bool(false) => {}
            AttrValue::Bool(true) => {
                out.push(' ');
                out.push_str(&escape(name));
            }
            other => {
                let text = other.as_text().unwrap_or_default();
                out.push(' ');
                out.push_str(&escape(name));
                out.push_str("=\"");
                out.push_str(&escape(&text));
                out.push('"');
            }
        }
    }
    out
}
