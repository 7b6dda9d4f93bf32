//! On-disk encoding of the rotation state.
//!
//! The state file is a small JSON object:
//!
//! ```json
//! {
//!     "last_person_index": 2
//! }
//! ```
//!
//! Unknown fields are ignored on read, and a missing `last_person_index`
//! reads as uninitialized.

use chorebot_core::state::RotationState;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Indentation used when writing the state file.
const INDENT: &[u8] = b"    ";

/// Serializes `state` as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if serialization fails.
pub fn encode(state: &RotationState) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    state.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Parses a state file body.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if the body is not a JSON
/// object with an integer `last_person_index`.
pub fn decode(bytes: &[u8]) -> Result<RotationState, serde_json::Error> {
    serde_json::from_slice(bytes)
}
