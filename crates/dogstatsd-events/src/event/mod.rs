mod datagram;
mod document;
mod types;

pub use datagram::encode_event_datagram;
pub use document::{
    build_event_document, encode_event_document_json, parse_event_document_json,
    DocumentEncodeError, EventDocument,
};
pub use types::{AlertType, Event, Priority};
