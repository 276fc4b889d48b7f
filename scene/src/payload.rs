//! Drag payload codec.
//!
//! Native drag-and-drop carries the dragged template between the palette and
//! the placement surface as JSON text stored under [`DRAG_DATA_KEY`]. Decoding
//! is the only fallible step in the studio: a failure means the drop produces
//! no placement.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use crate::catalog::DecorationTemplate;

pub use crate::consts::DRAG_DATA_KEY;

/// Why a drag payload could not be produced or read.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("drag payload is empty")]
    Empty,
    #[error("drag payload is not a decoration template: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("drag payload template has an empty id")]
    MissingId,
    #[error("failed to encode drag payload: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Serialize a template for the drag data channel.
///
/// # Errors
///
/// Returns [`PayloadError::Encode`] if serialization fails.
pub fn encode(template: &DecorationTemplate) -> Result<String, PayloadError> {
    serde_json::to_string(template).map_err(PayloadError::Encode)
}

/// Parse a template out of drag data text.
///
/// # Errors
///
/// Returns [`PayloadError::Empty`] for blank input, [`PayloadError::Malformed`]
/// when the text is not a JSON template, and [`PayloadError::MissingId`] when
/// the template id is empty.
pub fn decode(data: &str) -> Result<DecorationTemplate, PayloadError> {
    if data.trim().is_empty() {
        return Err(PayloadError::Empty);
    }
    let template: DecorationTemplate = serde_json::from_str(data).map_err(PayloadError::Malformed)?;
    if template.id.is_empty() {
        return Err(PayloadError::MissingId);
    }
    Ok(template)
}
