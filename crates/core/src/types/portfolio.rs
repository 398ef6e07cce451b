//! Portfolio image payloads.
//!
//! Portfolio images are stored inline as `data:` URLs so that a profile is a
//! single self-contained record.

use core::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Errors that can occur when building an [`ImagePayload`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImagePayloadError {
    /// The payload is empty.
    #[error("image payload cannot be empty")]
    Empty,
    /// The payload is not a `data:` URL.
    #[error("image payload must be a data: URL")]
    NotDataUrl,
    /// The MIME type is missing or malformed.
    #[error("invalid MIME type: {0}")]
    InvalidMimeType(String),
}

/// One inline image, encoded as a `data:<mime>;base64,<bytes>` URL.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePayload(String);

impl ImagePayload {
    /// Parse an existing `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or does not start with `data:`.
    pub fn parse(s: &str) -> Result<Self, ImagePayloadError> {
        if s.is_empty() {
            return Err(ImagePayloadError::Empty);
        }
        if !s.starts_with("data:") {
            return Err(ImagePayloadError::NotDataUrl);
        }
        Ok(Self(s.to_owned()))
    }

    /// Encode raw image bytes as a base64 `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty or `mime_type` is not of the form
    /// `type/subtype`.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Result<Self, ImagePayloadError> {
        if bytes.is_empty() {
            return Err(ImagePayloadError::Empty);
        }
        let valid_mime = mime_type
            .split_once('/')
            .is_some_and(|(kind, sub)| !kind.is_empty() && !sub.is_empty())
            && !mime_type.contains([';', ',', ' ']);
        if !valid_mime {
            return Err(ImagePayloadError::InvalidMimeType(mime_type.to_owned()));
        }

        Ok(Self(format!(
            "data:{mime_type};base64,{}",
            STANDARD.encode(bytes)
        )))
    }

    /// The MIME type declared in the URL header, if any.
    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        let header = self.0.strip_prefix("data:")?.split(',').next()?;
        header.split(';').next().filter(|m| !m.is_empty())
    }

    /// Size of the encoded URL in bytes.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        self.0.len()
    }

    /// Returns the full `data:` URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ImagePayload {
    // Payloads are routinely hundreds of kilobytes; keep logs readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime_type", &self.mime_type())
            .field("encoded_len", &self.encoded_len())
            .finish()
    }
}

/// Exactly two portfolio images, fixed at registration.
pub type Portfolio = [ImagePayload; 2];
