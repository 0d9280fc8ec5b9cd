//! Outer file framing: magic bytes, format version, integrity trailer.
//!
//! Legacy files carry none of this; they are a bare section stream. The
//! current framing wraps the same stream so truncation and corruption are
//! caught before the tag layer ever sees misaligned bytes:
//!
//! - 4 bytes: magic (`"FUI"` + revision byte)
//! - 4 bytes: format version (`u32` little-endian)
//! - N bytes: section payload
//! - 8 bytes: SHA-256 digest prefix of the payload

use sha2::{Digest, Sha256};

use crate::error::{FormatError, Result};

/// Magic bytes at the start of current-format project files.
pub const MAGIC_BYTES: [u8; 4] = [b'F', b'U', b'I', 0x01];

/// Current format version.
///
/// Increment on breaking changes to the section layout. The reader
/// rejects files with a newer version than it understands.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Length of the integrity trailer.
pub const TRAILER_LEN: usize = 8;

/// How a project file was framed on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Magic + version + trailer.
    Current { version: u32 },
    /// Bare section stream from the original tool.
    Legacy,
}

/// Wrap a section payload in the current framing.
#[must_use]
pub fn seal(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAGIC_BYTES.len() + 4 + payload.len() + TRAILER_LEN);
    out.extend_from_slice(&MAGIC_BYTES);
    out.extend_from_slice(&CURRENT_FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(payload);
    out.extend_from_slice(&digest(payload));
    out
}

/// Strip and verify framing, returning the section payload.
///
/// Input without the magic prefix is treated as a legacy stream and
/// returned whole, unverified; legacy files predate the trailer.
pub fn unseal(bytes: &[u8]) -> Result<(&[u8], Framing)> {
    if !bytes.starts_with(&MAGIC_BYTES) {
        return Ok((bytes, Framing::Legacy));
    }

    let header_len = MAGIC_BYTES.len() + 4;
    if bytes.len() < header_len + TRAILER_LEN {
        return Err(FormatError::UnexpectedEnd {
            offset: bytes.len(),
        });
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version > CURRENT_FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion {
            found: version,
            max_supported: CURRENT_FORMAT_VERSION,
        });
    }

    let payload = &bytes[header_len..bytes.len() - TRAILER_LEN];
    let trailer = &bytes[bytes.len() - TRAILER_LEN..];
    if trailer != digest(payload) {
        return Err(FormatError::ChecksumMismatch);
    }

    Ok((payload, Framing::Current { version }))
}

/// Digest prefix used for the integrity trailer.
fn digest(payload: &[u8]) -> [u8; TRAILER_LEN] {
    let hash = Sha256::digest(payload);
    let mut out = [0u8; TRAILER_LEN];
    out.copy_from_slice(&hash[..TRAILER_LEN]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_unseal_roundtrip() {
        let payload = b"section bytes";
        let sealed = seal(payload);
        let (unsealed, framing) = unseal(&sealed).unwrap();
        assert_eq!(unsealed, payload);
        assert_eq!(framing, Framing::Current { version: CURRENT_FORMAT_VERSION });
    }

    #[test]
    fn magicless_input_is_legacy() {
        let payload = b"raw legacy stream";
        let (unsealed, framing) = unseal(payload).unwrap();
        assert_eq!(unsealed, payload.as_slice());
        assert_eq!(framing, Framing::Legacy);
    }

    #[test]
    fn corrupted_trailer_is_rejected() {
        let mut sealed = seal(b"payload");
        let last = sealed.len() - 1;
        sealed[last] ^= 0xFF;
        assert!(matches!(
            unseal(&sealed).unwrap_err(),
            FormatError::ChecksumMismatch
        ));
    }

    #[test]
    fn corrupted_payload_is_rejected() {
        let mut sealed = seal(b"payload payload");
        sealed[10] ^= 0x01;
        assert!(matches!(
            unseal(&sealed).unwrap_err(),
            FormatError::ChecksumMismatch
        ));
    }

    #[test]
    fn newer_version_is_rejected() {
        let mut sealed = seal(b"payload");
        sealed[4..8].copy_from_slice(&(CURRENT_FORMAT_VERSION + 1).to_le_bytes());
        assert!(matches!(
            unseal(&sealed).unwrap_err(),
            FormatError::UnsupportedVersion { .. }
        ));
    }

    #[test]
    fn truncated_current_file_is_rejected() {
        let sealed = seal(b"payload");
        let truncated = &sealed[..MAGIC_BYTES.len() + 2];
        assert!(matches!(
            unseal(truncated).unwrap_err(),
            FormatError::UnexpectedEnd { .. }
        ));
    }

    #[test]
    fn empty_payload_roundtrip() {
        let sealed = seal(&[]);
        let (unsealed, _) = unseal(&sealed).unwrap();
        assert!(unsealed.is_empty());
    }
}
