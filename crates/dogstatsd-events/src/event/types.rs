use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
}

impl Priority {
    pub fn as_token(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Info,
    Error,
    Success,
    Warning,
}

impl AlertType {
    pub fn as_token(self) -> &'static str {
        match self {
            AlertType::Info => "info",
            AlertType::Error => "error",
            AlertType::Success => "success",
            AlertType::Warning => "warning",
        }
    }
}

/// One monitoring event to be submitted to the Datadog intake.
///
/// Setters never fail and never validate; length limits and field formats
/// are enforced by the intake service, not here. An empty string field
/// counts as unset for encoding purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub(super) title: String,
    pub(super) text: String,
    pub(super) date_happened: String,
    pub(super) host: String,
    pub(super) aggregation_key: String,
    pub(super) priority: Option<Priority>,
    pub(super) alert_type: Option<AlertType>,
    pub(super) raw_tags: String,
    pub(super) tag_list: Vec<String>,
}

impl Event {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Stores the epoch timestamp as decimal text. When never set, the
    /// intake service stamps the event with its own receive time.
    pub fn set_date_happened(&mut self, epoch_seconds: u64) {
        self.date_happened = epoch_seconds.to_string();
    }

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    pub fn set_aggregation_key(&mut self, aggregation_key: impl Into<String>) {
        self.aggregation_key = aggregation_key.into();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = Some(priority);
    }

    pub fn set_alert_type(&mut self, alert_type: AlertType) {
        self.alert_type = Some(alert_type);
    }

    /// Stores a preformatted tag fragment used verbatim by the datagram
    /// encoder. The caller supplies any leading delimiter the wire format
    /// needs (for example `|#env:prod,service:api`).
    pub fn set_raw_tags(&mut self, raw_tags: impl Into<String>) {
        self.raw_tags = raw_tags.into();
    }

    /// Appends one `key:value` tag per map entry, in key order.
    pub fn set_tag_map(&mut self, tags: &BTreeMap<String, String>) {
        for (key, value) in tags {
            self.tag_list.push(format!("{key}:{value}"));
        }
    }

    /// Replaces the tag list wholesale.
    pub fn set_tag_list(&mut self, tags: Vec<String>) {
        self.tag_list = tags;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
