//! Turning flash records into fully resolved alerts.

use tailflash_html::Attributes;

use crate::block::TextBlock;
use crate::flash::FlashRecord;
use crate::widget::AlertFlash;

/// Class given to the dismiss button when no button attributes are configured.
pub const BUTTON_CSS_CLASS: &str = "float-right px-4 py-3";

/// Everything needed to compose one alert.
///
/// Built by [`resolve`] from a [`FlashRecord`] and the widget configuration,
/// with per-record values taking precedence over configured ones.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertSpec {
    pub kind: String,
    /// Outer element attributes (record value, else configured value).
    pub attributes: Attributes,
    /// Configured outer class, appended after `type_class`.
    pub class: String,
    /// Background class looked up for `kind`.
    pub type_class: String,
    pub body: String,
    pub body_block: TextBlock,
    pub header: String,
    pub header_block: TextBlock,
    pub icon_attributes: Attributes,
    pub icon_class: String,
    pub icon_text: String,
    pub button_attributes: Attributes,
    pub button_label: String,
    pub button_on_click: String,
    pub layout_header: String,
    pub layout_body: String,
}

impl AlertSpec {
    /// An alert without body text renders nothing.
    pub fn is_renderable(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Resolves records against the widget configuration.
///
/// Records whose type has no entry in the alert type table are dropped.
/// Every other record yields its own [`AlertSpec`], in input order.
pub fn resolve(records: &[FlashRecord], config: &AlertFlash) -> Vec<AlertSpec> {
    records
        .iter()
        .filter_map(|record| resolve_record(record, config))
        .collect()
}

fn resolve_record(record: &FlashRecord, config: &AlertFlash) -> Option<AlertSpec> {
    let Some(type_class) = config.alert_types.get(&record.kind) else {
        log::debug!("skipping flash message of unrecognized type '{}'", record.kind);
        return None;
    };

    let mut body_block = config.body.clone();
    if let Some(attributes) = &record.body_attributes {
        body_block.attributes = attributes.clone();
    }

    // An empty per-record icon class falls back like a missing one
    let icon_class = record
        .icon_class
        .as_deref()
        .filter(|class| !class.is_empty())
        .or_else(|| config.icon_types.get(&record.kind))
        .unwrap_or_default()
        .to_string();

    let button_attributes = if config.button_attributes.is_empty() {
        Attributes::new().with_class(BUTTON_CSS_CLASS)
    } else {
        config.button_attributes.clone()
    };

    Some(AlertSpec {
        kind: record.kind.clone(),
        attributes: record
            .attributes
            .clone()
            .unwrap_or_else(|| config.attributes.clone()),
        class: config.class.clone(),
        type_class: type_class.to_string(),
        body: record.body.clone(),
        body_block,
        header: record.header.clone().unwrap_or_default(),
        header_block: config.header.clone(),
        icon_attributes: record
            .icon_attributes
            .clone()
            .unwrap_or_else(|| config.icon_attributes.clone()),
        icon_class,
        icon_text: record.icon_text.clone().unwrap_or_default(),
        button_attributes,
        button_label: config.button_label.clone(),
        button_on_click: config.button_on_click.clone(),
        layout_header: config.layout_header.clone(),
        layout_body: config.layout_body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleTable;

    #[test]
    fn test_unknown_types_are_dropped() {
        let records = vec![
            FlashRecord::new("", "x"),
            FlashRecord::new("critical", "y"),
        ];
        assert!(resolve(&records, &AlertFlash::new()).is_empty());
    }

    #[test]
    fn test_order_preserved_and_not_merged() {
        let records = vec![
            FlashRecord::new("info", "one"),
            FlashRecord::new("danger", "two"),
            FlashRecord::new("info", "three"),
        ];
        let bodies: Vec<_> = resolve(&records, &AlertFlash::new())
            .into_iter()
            .map(|spec| spec.body)
            .collect();
        assert_eq!(bodies, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_type_class_lookup() {
        let specs = resolve(&[FlashRecord::new("success", "ok")], &AlertFlash::new());
        assert_eq!(specs[0].type_class, "bg-green-600");
        assert_eq!(specs[0].kind, "success");
    }

    #[test]
    fn test_icon_class_precedence() {
        let config = AlertFlash::new();

        let explicit = resolve(&[FlashRecord::new("danger", "b").with_icon_class("fas fa-bomb")], &config);
        assert_eq!(explicit[0].icon_class, "fas fa-bomb");

        let fallback = resolve(&[FlashRecord::new("danger", "b")], &config);
        assert_eq!(fallback[0].icon_class, "far fa-times-circle");

        let empty_override = resolve(&[FlashRecord::new("danger", "b").with_icon_class("")], &config);
        assert_eq!(empty_override[0].icon_class, "far fa-times-circle");

        let none = resolve(&[FlashRecord::new("dark", "b")], &config);
        assert_eq!(none[0].icon_class, "");
    }

    #[test]
    fn test_icon_types_override() {
        let config = AlertFlash::new().icon_types(StyleTable::new().add("danger", "fas fa-skull"));
        let specs = resolve(
            &[FlashRecord::new("danger", "b"), FlashRecord::new("info", "c")],
            &config,
        );
        assert_eq!(specs[0].icon_class, "fas fa-skull");
        assert_eq!(specs[1].icon_class, "");
    }

    #[test]
    fn test_record_attributes_override_config() {
        let config = AlertFlash::new()
            .attributes(Attributes::new().with("data-source", "config"))
            .body_attributes(Attributes::new().with("class", "config-body"))
            .icon_attributes(Attributes::new().with("class", "config-icon"));
        let record = FlashRecord::new("info", "b")
            .with_attributes(Attributes::new().with("data-source", "record"))
            .with_body_attributes(Attributes::new().with("class", "record-body"))
            .with_icon_attributes(Attributes::new().with("class", "record-icon"))
            .with_icon_text("!");

        let spec = &resolve(&[record], &config)[0];
        assert_eq!(spec.attributes, Attributes::new().with("data-source", "record"));
        assert_eq!(spec.body_block.attributes().classes(), vec!["record-body"]);
        assert_eq!(spec.icon_attributes.classes(), vec!["record-icon"]);
        assert_eq!(spec.icon_text, "!");
    }

    #[test]
    fn test_config_used_when_record_is_silent() {
        let config = AlertFlash::new()
            .attributes(Attributes::new().with("data-source", "config"))
            .body_attributes(Attributes::new().with("class", "config-body"));
        let spec = &resolve(&[FlashRecord::new("info", "b")], &config)[0];
        assert_eq!(spec.attributes, Attributes::new().with("data-source", "config"));
        assert_eq!(spec.body_block.attributes().classes(), vec!["config-body"]);
        assert_eq!(spec.header, "");
    }

    #[test]
    fn test_default_button_class() {
        let spec = &resolve(&[FlashRecord::new("info", "b")], &AlertFlash::new())[0];
        assert_eq!(spec.button_attributes.classes(), vec!["float-right", "px-4", "py-3"]);

        let config = AlertFlash::new().button_attributes(Attributes::new().with("class", "x"));
        let spec = &resolve(&[FlashRecord::new("info", "b")], &config)[0];
        assert_eq!(spec.button_attributes.classes(), vec!["x"]);
    }

    #[test]
    fn test_empty_body_is_kept_but_not_renderable() {
        let specs = resolve(&[FlashRecord::new("info", "")], &AlertFlash::new());
        assert_eq!(specs.len(), 1);
        assert!(!specs[0].is_renderable());
    }
}
