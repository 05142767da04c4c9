//! Flash message records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tailflash_html::Attributes;

/// One queued flash message.
///
/// The `kind` is the store key the message was queued under (`danger`,
/// `info`, ...). All other fields come from the message payload, whose keys
/// use camelCase (`bodyAttributes`, `iconClass`, ...). Absent optional fields
/// fall back to the widget configuration when the record is resolved.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tailflash::FlashRecord;
///
/// let record = FlashRecord::from_payload(
///     "danger",
///     &json!({"header": "Oops", "body": "Something failed.", "iconClass": "fas fa-bomb"}),
/// )
/// .unwrap();
///
/// assert_eq!(record.kind, "danger");
/// assert_eq!(record.body, "Something failed.");
/// assert_eq!(record.icon_class.as_deref(), Some("fas fa-bomb"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashRecord {
    #[serde(skip)]
    pub kind: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_attributes: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_attributes: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_text: Option<String>,
}

impl FlashRecord {
    /// Creates a record with a type and a body.
    pub fn new(kind: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Decodes a payload queued under `kind`.
    ///
    /// A bare string payload is the message body. `null` decodes to an empty
    /// record, which renders nothing.
    pub fn from_payload(kind: &str, payload: &Value) -> Result<Self, serde_json::Error> {
        let mut record = match payload {
            Value::String(body) => FlashRecord {
                body: body.clone(),
                ..FlashRecord::default()
            },
            Value::Null => FlashRecord::default(),
            other => FlashRecord::deserialize(other)?,
        };
        record.kind = kind.to_string();
        Ok(record)
    }

    /// Encodes the record as a store payload (the kind is not included).
    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_body_attributes(mut self, attributes: Attributes) -> Self {
        self.body_attributes = Some(attributes);
        self
    }

    pub fn with_icon_attributes(mut self, attributes: Attributes) -> Self {
        self.icon_attributes = Some(attributes);
        self
    }

    pub fn with_icon_class(mut self, class: impl Into<String>) -> Self {
        self.icon_class = Some(class.into());
        self
    }

    pub fn with_icon_text(mut self, text: impl Into<String>) -> Self {
        self.icon_text = Some(text.into());
        self
    }
}
