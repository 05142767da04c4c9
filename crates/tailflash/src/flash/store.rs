//! The flash store interface and an in-memory implementation.

use indexmap::IndexMap;
use serde_json::Value;

use super::record::FlashRecord;

/// Messages grouped by type, in the order the types were first queued.
pub type FlashMessages = IndexMap<String, Vec<Value>>;

/// Source of queued flash messages.
///
/// Session-backed stores implement this to feed the widget. The widget calls
/// [`get_all`](FlashStore::get_all) once per render and never writes back.
pub trait FlashStore {
    /// Returns every queued message, grouped by type.
    fn get_all(&self) -> FlashMessages;
}

/// A flash store kept in memory.
///
/// Useful on its own for request-scoped messages and as a stand-in for a
/// session store in tests.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tailflash::{FlashStore, MemoryFlash};
///
/// let mut flash = MemoryFlash::new();
/// flash.add("success", json!({"body": "Profile saved."}));
/// flash.add("success", json!("Email sent."));
///
/// assert_eq!(flash.get_all()["success"].len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFlash {
    messages: FlashMessages,
}

impl MemoryFlash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a message after the ones already queued under `kind`.
    pub fn add(&mut self, kind: impl Into<String>, payload: impl Into<Value>) {
        self.messages
            .entry(kind.into())
            .or_default()
            .push(payload.into());
    }

    /// Queues a typed record under its own kind.
    pub fn add_record(&mut self, record: &FlashRecord) {
        self.add(record.kind.clone(), record.to_payload());
    }

    /// Replaces every message queued under `kind` with a single one.
    pub fn set(&mut self, kind: impl Into<String>, payload: impl Into<Value>) {
        self.messages.insert(kind.into(), vec![payload.into()]);
    }

    pub fn get(&self, kind: &str) -> Option<&[Value]> {
        self.messages.get(kind).map(Vec::as_slice)
    }

    pub fn has(&self, kind: &str) -> bool {
        self.messages.contains_key(kind)
    }

    pub fn remove(&mut self, kind: &str) -> Option<Vec<Value>> {
        self.messages.shift_remove(kind)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drains the store. Messages taken here are gone for later requests.
    pub fn take_all(&mut self) -> FlashMessages {
        std::mem::take(&mut self.messages)
    }
}

impl FlashStore for MemoryFlash {
    fn get_all(&self) -> FlashMessages {
        self.messages.clone()
    }
}

impl FlashStore for FlashMessages {
    fn get_all(&self) -> FlashMessages {
        self.clone()
    }
}

/// Flattens grouped messages into records, type by type.
///
/// Payloads that cannot be decoded are skipped with a warning.
pub fn collect_records(messages: &FlashMessages) -> Vec<FlashRecord> {
    let mut records = Vec::new();
    for (kind, payloads) in messages {
        for payload in payloads {
            match FlashRecord::from_payload(kind, payload) {
                Ok(record) => records.push(record),
                Err(err) => {
                    log::warn!("skipping undecodable '{}' flash message: {}", kind, err)
                }
            }
        }
    }
    records
}
