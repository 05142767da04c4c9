//! YAML configuration for [`AlertFlash`].
//!
//! Every setter has a camelCase key. Keys that are left out keep the value of
//! the widget the configuration is applied to.
//!
//! ```rust
//! use tailflash::AlertFlash;
//!
//! let widget = AlertFlash::from_yaml(r#"
//! class: flex font-bold items-center px-4 py-3 text-sm text-white
//! bodyTag: p
//! bodyClass: align-middle flex-grow inline-block mr-8
//! buttonLabel: "&times;"
//! buttonOnClick: closeAlert()
//! iconAttributes:
//!   class: fa-2x pr-2
//! iconTypes:
//!   danger: far fa-times-circle
//! layoutBody: "{icon}{body}{button}"
//! "#).unwrap();
//!
//! assert_eq!(widget.body_block().tag(), "p");
//! ```

use serde::Deserialize;
use tailflash_html::Attributes;

use crate::error::Result;
use crate::style::StyleTable;
use crate::widget::AlertFlash;

/// A partial widget configuration, as read from YAML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlertFlashConfig {
    pub attributes: Option<Attributes>,
    pub class: Option<String>,
    pub id_prefix: Option<String>,

    pub body_attributes: Option<Attributes>,
    pub body_class: Option<String>,
    pub body_container: Option<bool>,
    pub body_container_attributes: Option<Attributes>,
    pub body_container_class: Option<String>,
    pub body_tag: Option<String>,

    pub header_attributes: Option<Attributes>,
    pub header_class: Option<String>,
    pub header_container: Option<bool>,
    pub header_container_attributes: Option<Attributes>,
    pub header_container_class: Option<String>,
    pub header_tag: Option<String>,

    pub button_attributes: Option<Attributes>,
    pub button_label: Option<String>,
    pub button_on_click: Option<String>,

    pub icon_attributes: Option<Attributes>,
    pub icon_types: Option<StyleTable>,
    pub alert_types: Option<StyleTable>,

    pub layout_header: Option<String>,
    pub layout_body: Option<String>,
}

impl AlertFlashConfig {
    /// Parses a YAML document. A blank document is an empty configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Applies the configured values on top of `widget`.
    ///
    /// Tags go through the same validation as
    /// [`AlertFlash::body_tag`]/[`AlertFlash::header_tag`].
    pub fn apply(self, widget: AlertFlash) -> Result<AlertFlash> {
        let mut widget = widget;

        if let Some(v) = self.attributes {
            widget = widget.attributes(v);
        }
        if let Some(v) = self.class {
            widget = widget.class(v);
        }
        if let Some(v) = self.id_prefix {
            widget = widget.id_prefix(v);
        }

        if let Some(v) = self.body_attributes {
            widget = widget.body_attributes(v);
        }
        if let Some(v) = self.body_class {
            widget = widget.body_class(v);
        }
        if let Some(v) = self.body_container {
            widget = widget.body_container(v);
        }
        if let Some(v) = self.body_container_attributes {
            widget = widget.body_container_attributes(v);
        }
        if let Some(v) = self.body_container_class {
            widget = widget.body_container_class(v);
        }
        if let Some(v) = self.body_tag {
            widget = widget.body_tag(v)?;
        }

        if let Some(v) = self.header_attributes {
            widget = widget.header_attributes(v);
        }
        if let Some(v) = self.header_class {
            widget = widget.header_class(v);
        }
        if let Some(v) = self.header_container {
            widget = widget.header_container(v);
        }
        if let Some(v) = self.header_container_attributes {
            widget = widget.header_container_attributes(v);
        }
        if let Some(v) = self.header_container_class {
            widget = widget.header_container_class(v);
        }
        if let Some(v) = self.header_tag {
            widget = widget.header_tag(v)?;
        }

        if let Some(v) = self.button_attributes {
            widget = widget.button_attributes(v);
        }
        if let Some(v) = self.button_label {
            widget = widget.button_label(v);
        }
        if let Some(v) = self.button_on_click {
            widget = widget.button_on_click(v);
        }

        if let Some(v) = self.icon_attributes {
            widget = widget.icon_attributes(v);
        }
        if let Some(v) = self.icon_types {
            widget = widget.icon_types(v);
        }
        if let Some(v) = self.alert_types {
            widget = widget.alert_types(v);
        }

        if let Some(v) = self.layout_header {
            widget = widget.layout_header(v);
        }
        if let Some(v) = self.layout_body {
            widget = widget.layout_body(v);
        }

        Ok(widget)
    }
}
