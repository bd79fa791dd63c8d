pub mod favorites;
pub mod racks;

use crate::v1::error::ApiError;
use rack_core::RackId;

/// Normalizes a path segment into a rack id, so `/racks/42` and `/racks/042`
/// address the same rack.
pub fn parse_id(raw: &str) -> Result<RackId, ApiError> {
    Ok(raw.parse()?)
}
