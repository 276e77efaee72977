use serde::Serialize;
use std::fmt;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Stable fingerprint of a piece of content, usable as an HTTP entity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Revision(pub u64);

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Computes the revision of serializable content.
///
/// The content is encoded as CBOR and hashed with XxHash64 (seed 0), so equal
/// content yields the same revision across runs and machines.
pub fn content_revision<T: Serialize>(data: &T) -> Result<Revision, String> {
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to encode content for revision: {e}"))?;
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(&cbor);
    Ok(Revision(hasher.finish()))
}
