pub mod event;

pub use event::{
    build_event_document, encode_event_datagram, encode_event_document_json,
    parse_event_document_json, AlertType, DocumentEncodeError, Event, EventDocument, Priority,
};
