use super::types::{AlertType, Event, Priority};
use serde::{Deserialize, Serialize};

/// The flat JSON object accepted by the events API endpoint. Field
/// declaration order fixes the key order in the encoded document; unset
/// fields are omitted rather than sent empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventDocument {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_happened: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<AlertType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentEncodeError {
    #[error("failed to encode event document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Builds the API document for an event. Pure: the event is not mutated,
/// so repeated calls yield the same document. When no structured tag list
/// was set but a raw tag string was, the raw string becomes the single
/// entry of the `tags` array.
pub fn build_event_document(event: &Event) -> EventDocument {
    EventDocument {
        title: event.title.clone(),
        text: non_empty(&event.text),
        date_happened: non_empty(&event.date_happened),
        priority: event.priority,
        alert_type: event.alert_type,
        host: non_empty(&event.host),
        aggregation_key: non_empty(&event.aggregation_key),
        tags: effective_tags(event),
    }
}

pub fn encode_event_document_json(event: &Event) -> Result<String, DocumentEncodeError> {
    Ok(serde_json::to_string(&build_event_document(event))?)
}

pub fn parse_event_document_json(json: &str) -> Result<EventDocument, DocumentEncodeError> {
    Ok(serde_json::from_str::<EventDocument>(json)?)
}

fn effective_tags(event: &Event) -> Vec<String> {
    if !event.tag_list.is_empty() {
        return event.tag_list.clone();
    }
    if !event.raw_tags.is_empty() {
        return vec![event.raw_tags.clone()];
    }
    Vec::new()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
