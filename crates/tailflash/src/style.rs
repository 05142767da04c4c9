//! Per-type styling tables.
//!
//! Two tables key CSS classes by flash type: the alert table gives the
//! background class of the outer element, the icon table gives the default
//! icon glyph class. The alert table doubles as the filter of recognized
//! types: a message whose type has no alert class is never rendered.
//!
//! # Example
//!
//! ```rust
//! use tailflash::StyleTable;
//!
//! let alerts = StyleTable::default_alert_types();
//! assert_eq!(alerts.get("danger"), Some("bg-red-600"));
//!
//! let icons = StyleTable::new().add("danger", "fas fa-skull");
//! assert_eq!(icons.get("danger"), Some("fas fa-skull"));
//! assert_eq!(icons.get("info"), None);
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static ALERT_TYPES: Lazy<StyleTable> = Lazy::new(|| {
    StyleTable::new()
        .add("danger", "bg-red-600")
        .add("dark", "bg-gray-600")
        .add("primary", "bg-blue-600")
        .add("info", "bg-indigo-600")
        .add("success", "bg-green-600")
        .add("warning", "bg-yellow-600")
});

static ICON_TYPES: Lazy<StyleTable> = Lazy::new(|| {
    StyleTable::new()
        .add("danger", "far fa-times-circle")
        .add("info", "far fa-info-circle")
        .add("success", "far fa-check-circle")
        .add("warning", "far fa-exclamation-circle")
});

/// An ordered mapping from flash type to CSS class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTable {
    classes: IndexMap<String, String>,
}

impl StyleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in background classes for `danger`, `dark`, `primary`,
    /// `info`, `success` and `warning`.
    pub fn default_alert_types() -> Self {
        ALERT_TYPES.clone()
    }

    /// The built-in icon classes. `dark` and `primary` have no icon.
    pub fn default_icon_types() -> Self {
        ICON_TYPES.clone()
    }

    /// Adds a class for a type, returning `self` for chaining.
    pub fn add(mut self, kind: impl Into<String>, class: impl Into<String>) -> Self {
        self.insert(kind, class);
        self
    }

    pub fn insert(&mut self, kind: impl Into<String>, class: impl Into<String>) {
        self.classes.insert(kind.into(), class.into());
    }

    pub fn get(&self, kind: &str) -> Option<&str> {
        self.classes.get(kind).map(String::as_str)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.classes.contains_key(kind)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Merges another table into this one.
    ///
    /// Entries from `other` take precedence over entries in `self`.
    pub fn merge(mut self, other: StyleTable) -> Self {
        self.classes.extend(other.classes);
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = StyleTable::new();
        for (kind, class) in iter {
            table.insert(kind, class);
        }
        table
    }
}
