use super::types::Event;

/// Encodes an event in the DogStatsD datagram format:
///
/// `_e{<titleLen>,<textLen>}:title|text|d:date|h:host|k:key|p:priority|t:alert<rawTags>`
///
/// Field order is a wire contract: the intake parses positionally by prefix.
/// Unset optional fields contribute zero bytes. The `{titleLen,textLen}`
/// header carries the byte lengths of the unescaped title and text, which
/// the receiver uses to delimit those two fields.
pub fn encode_event_datagram(event: &Event) -> String {
    let mut fields = String::new();

    fields.push_str(&event.title);
    fields.push('|');
    if !event.text.is_empty() {
        fields.push_str(&escape_newlines(&event.text));
    }

    if !event.date_happened.is_empty() {
        fields.push_str("|d:");
        fields.push_str(&event.date_happened);
    }
    if !event.host.is_empty() {
        fields.push_str("|h:");
        fields.push_str(&event.host);
    }
    if !event.aggregation_key.is_empty() {
        fields.push_str("|k:");
        fields.push_str(&event.aggregation_key);
    }
    if let Some(priority) = event.priority {
        fields.push_str("|p:");
        fields.push_str(priority.as_token());
    }
    if let Some(alert_type) = event.alert_type {
        fields.push_str("|t:");
        fields.push_str(alert_type.as_token());
    }
    // Raw tags go out verbatim, delimiter included by the caller.
    // The structured tag list is an API-format concern and is not
    // consulted here.
    if !event.raw_tags.is_empty() {
        fields.push_str(&event.raw_tags);
    }

    format!(
        "_e{{{},{}}}:{}",
        event.title.len(),
        event.text.len(),
        fields
    )
}

fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

#[cfg(test)]
#[path = "datagram_test.rs"]
mod tests;
