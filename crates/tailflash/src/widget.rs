//! The flash alert widget.

use std::path::Path;

use tailflash_html::Attributes;

use crate::block::TextBlock;
use crate::compose::compose;
use crate::config::AlertFlashConfig;
use crate::error::{AlertError, Result};
use crate::flash::{collect_records, FlashRecord, FlashStore};
use crate::resolve::resolve;
use crate::style::StyleTable;

/// Renders queued flash messages as alert blocks.
///
/// `AlertFlash` is an immutable configuration value. Every setter consumes
/// the widget and returns a new one, so a shared base configuration can be
/// cloned and specialised without affecting other users. Setters that
/// validate their input return a [`Result`].
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tailflash::{AlertFlash, MemoryFlash};
///
/// let mut flash = MemoryFlash::new();
/// flash.add("danger", json!({"body": "This is a test."}));
///
/// let html = AlertFlash::new().render(&flash);
///
/// assert_eq!(
///     html,
///     "<div id=\"w0-alert\" class=\"bg-red-600\" role=\"alert\">\n\
///      <span>This is a test.</span>\n\
///      </div>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AlertFlash {
    pub(crate) attributes: Attributes,
    pub(crate) class: String,
    pub(crate) body: TextBlock,
    pub(crate) header: TextBlock,
    pub(crate) button_attributes: Attributes,
    pub(crate) button_label: String,
    pub(crate) button_on_click: String,
    pub(crate) icon_attributes: Attributes,
    pub(crate) alert_types: StyleTable,
    pub(crate) icon_types: StyleTable,
    pub(crate) layout_header: String,
    pub(crate) layout_body: String,
    pub(crate) id_prefix: String,
}

impl Default for AlertFlash {
    fn default() -> Self {
        Self {
            attributes: Attributes::new(),
            class: String::new(),
            body: TextBlock::new("span"),
            header: TextBlock::new("h4"),
            button_attributes: Attributes::new(),
            button_label: String::new(),
            button_on_click: String::new(),
            icon_attributes: Attributes::new(),
            alert_types: StyleTable::default_alert_types(),
            icon_types: StyleTable::default_icon_types(),
            layout_header: String::new(),
            layout_body: String::new(),
            id_prefix: "w".to_string(),
        }
    }
}

impl AlertFlash {
    /// Creates a widget with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from YAML on top of the defaults.
    ///
    /// Keys mirror the setter names in camelCase (`bodyTag`, `layoutBody`,
    /// `iconTypes`, ...). An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::Config`] for malformed YAML or unknown keys and
    /// [`AlertError::EmptyTag`] for an empty `bodyTag`/`headerTag`.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        AlertFlashConfig::from_yaml(yaml)?.apply(Self::new())
    }

    /// Loads a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AlertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    // =========================================================================
    // Outer element
    // =========================================================================

    /// HTML attributes of the outer alert element.
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// CSS class appended after the type's background class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Prefix of the generated alert ids (`w` gives `w0-alert`, `w1-alert`, ...).
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    // =========================================================================
    // Body
    // =========================================================================

    pub fn body_attributes(mut self, attributes: Attributes) -> Self {
        self.body.attributes = attributes;
        self
    }

    pub fn body_class(mut self, class: impl Into<String>) -> Self {
        self.body.class = class.into();
        self
    }

    /// Wraps the body section in a `div` container.
    pub fn body_container(mut self, enabled: bool) -> Self {
        self.body.container = enabled;
        self
    }

    pub fn body_container_attributes(mut self, attributes: Attributes) -> Self {
        self.body.container_attributes = attributes;
        self
    }

    pub fn body_container_class(mut self, class: impl Into<String>) -> Self {
        self.body.container_class = class.into();
        self
    }

    /// Tag name of the body element (`span` by default).
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::EmptyTag`] when `tag` is empty.
    pub fn body_tag(mut self, tag: impl Into<String>) -> Result<Self> {
        self.body.set_tag(tag.into(), "body")?;
        Ok(self)
    }

    // =========================================================================
    // Header
    // =========================================================================

    pub fn header_attributes(mut self, attributes: Attributes) -> Self {
        self.header.attributes = attributes;
        self
    }

    pub fn header_class(mut self, class: impl Into<String>) -> Self {
        self.header.class = class.into();
        self
    }

    /// Wraps the header section in a `div` container.
    pub fn header_container(mut self, enabled: bool) -> Self {
        self.header.container = enabled;
        self
    }

    pub fn header_container_attributes(mut self, attributes: Attributes) -> Self {
        self.header.container_attributes = attributes;
        self
    }

    pub fn header_container_class(mut self, class: impl Into<String>) -> Self {
        self.header.container_class = class.into();
        self
    }

    /// Tag name of the header element (`h4` by default).
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::EmptyTag`] when `tag` is empty.
    pub fn header_tag(mut self, tag: impl Into<String>) -> Result<Self> {
        self.header.set_tag(tag.into(), "header")?;
        Ok(self)
    }

    // =========================================================================
    // Button and icon
    // =========================================================================

    /// Attributes of the dismiss button. When left empty the button gets
    /// [`BUTTON_CSS_CLASS`](crate::BUTTON_CSS_CLASS).
    pub fn button_attributes(mut self, attributes: Attributes) -> Self {
        self.button_attributes = attributes;
        self
    }

    /// Button content, emitted as markup (`&times;` stays an entity).
    pub fn button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }

    /// JavaScript for the button's `onclick` attribute.
    pub fn button_on_click(mut self, script: impl Into<String>) -> Self {
        self.button_on_click = script.into();
        self
    }

    /// Attributes of the `<i>` icon element.
    pub fn icon_attributes(mut self, attributes: Attributes) -> Self {
        self.icon_attributes = attributes;
        self
    }

    /// Replaces the per-type icon class table.
    pub fn icon_types(mut self, table: StyleTable) -> Self {
        self.icon_types = table;
        self
    }

    /// Replaces the per-type background class table.
    ///
    /// Only types present in this table are rendered.
    pub fn alert_types(mut self, table: StyleTable) -> Self {
        self.alert_types = table;
        self
    }

    // =========================================================================
    // Layouts
    // =========================================================================

    /// Layout of the header section. Empty means `{header}`.
    pub fn layout_header(mut self, layout: impl Into<String>) -> Self {
        self.layout_header = layout.into();
        self
    }

    /// Layout of the body section. Empty means `{body}`.
    pub fn layout_body(mut self, layout: impl Into<String>) -> Self {
        self.layout_body = layout.into();
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn body_block(&self) -> &TextBlock {
        &self.body
    }

    pub fn header_block(&self) -> &TextBlock {
        &self.header
    }

    pub fn alert_type_table(&self) -> &StyleTable {
        &self.alert_types
    }

    pub fn icon_type_table(&self) -> &StyleTable {
        &self.icon_types
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Renders every recognized message in `store`, one alert per message.
    ///
    /// Alerts are separated by a newline. Returns an empty string when no
    /// message qualifies.
    pub fn render<S: FlashStore + ?Sized>(&self, store: &S) -> String {
        let records = collect_records(&store.get_all());
        self.render_records(&records)
    }

    /// Renders already decoded records, in the given order.
    pub fn render_records(&self, records: &[FlashRecord]) -> String {
        let mut ids = IdGenerator::new(&self.id_prefix);
        let html: Vec<String> = resolve(records, self)
            .iter()
            .filter(|spec| spec.is_renderable())
            .map(|spec| compose(spec, &ids.next_id()))
            .collect();
        log::trace!("rendered {} flash alert(s)", html.len());
        html.join("\n")
    }
}

/// Hands out sequential alert ids for one render.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    counter: usize,
}

impl IdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}-alert", self.prefix, self.counter);
        self.counter += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let widget = AlertFlash::new();
        assert_eq!(widget.body_block().tag(), "span");
        assert_eq!(widget.header_block().tag(), "h4");
        assert!(!widget.body_block().has_container());
        assert_eq!(widget.alert_type_table(), &StyleTable::default_alert_types());
    }

    #[test]
    fn test_setters_return_new_values() {
        let base = AlertFlash::new();
        let styled = base.clone().body_class("text-sm").layout_body("{icon}{body}");
        assert_ne!(base, styled);
        assert_eq!(base.body_block().class(), "");
        assert_eq!(styled.body_block().class(), "text-sm");
    }

    #[test]
    fn test_body_tag_validation() {
        let err = AlertFlash::new().body_tag("").unwrap_err();
        assert!(matches!(err, AlertError::EmptyTag { element: "body" }));
        assert_eq!(err.to_string(), "body tag must be a non-empty string");
    }

    #[test]
    fn test_header_tag_validation() {
        let err = AlertFlash::new().header_tag("").unwrap_err();
        assert_eq!(err.to_string(), "header tag must be a non-empty string");
    }

    #[test]
    fn test_valid_tags() {
        let widget = AlertFlash::new().body_tag("p").unwrap().header_tag("h2").unwrap();
        assert_eq!(widget.body_block().tag(), "p");
        assert_eq!(widget.header_block().tag(), "h2");
    }

    #[test]
    fn test_id_generator() {
        let mut ids = IdGenerator::new("w");
        assert_eq!(ids.next_id(), "w0-alert");
        assert_eq!(ids.next_id(), "w1-alert");
    }

    #[test]
    fn test_render_records_without_store() {
        let html = AlertFlash::new()
            .id_prefix("flash")
            .render_records(&[FlashRecord::new("info", "Hello.")]);
        assert_eq!(
            html,
            "<div id=\"flash0-alert\" class=\"bg-indigo-600\" role=\"alert\">\n<span>Hello.</span>\n</div>"
        );
    }

    #[test]
    fn test_ids_skip_suppressed_alerts() {
        let html = AlertFlash::new().render_records(&[
            FlashRecord::new("info", ""),
            FlashRecord::new("info", "Shown."),
        ]);
        assert!(html.starts_with("<div id=\"w0-alert\""));
    }
}
