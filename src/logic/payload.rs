//! Transfer payload codec
//!
//! A grab serializes the full entry as JSON text; the drop parses it back.
//! The textual round trip mirrors the drag-and-drop data transfer of the
//! browser viewer this replaces, and a malformed payload is a caller-side
//! log line, never a user-facing error.

use crate::model::types::FileEntry;

/// Serialize an entry for transfer
pub fn encode_entry(entry: &FileEntry) -> Result<String, serde_json::Error> {
    serde_json::to_string(entry)
}

/// Parse a dropped payload back into an entry
pub fn decode_entry(payload: &str) -> Result<FileEntry, serde_json::Error> {
    serde_json::from_str(payload)
}
