//! Data-URL image payloads.
//!
//! The payload is carried exactly as received. Providers take the base64
//! body (everything after the first comma) and the MIME type from the
//! header. Nothing is validated here; a malformed payload fails remotely.

use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// MIME type assumed when the data-URL header does not name one.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// A data-URL-encoded image (`data:<mime>;base64,<body>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePayload {
    data_url: String,
}

impl ImagePayload {
    /// Wrap a data URL as produced by a browser file read.
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }

    /// Build a payload from raw bytes and a format name ("jpeg", "png", ...).
    pub fn from_bytes(bytes: &[u8], format: &str) -> Self {
        let media_type = match format.to_lowercase().as_str() {
            "jpeg" | "jpg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            other => {
                tracing::warn!("Unknown image format '{other}', defaulting to {DEFAULT_MIME_TYPE}");
                DEFAULT_MIME_TYPE
            }
        };

        let body = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self {
            data_url: format!("data:{media_type};base64,{body}"),
        }
    }

    /// Read an image file, taking the format from its extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("jpeg");
        Ok(Self::from_bytes(&bytes, format))
    }

    /// The payload as received.
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Raw base64 body: everything after the first comma.
    ///
    /// A payload without a comma is passed through whole.
    pub fn base64_data(&self) -> &str {
        match self.data_url.split_once(',') {
            Some((_, body)) => body,
            None => &self.data_url,
        }
    }

    /// MIME type from the `data:<mime>;` header, or [`DEFAULT_MIME_TYPE`].
    pub fn mime_type(&self) -> &str {
        let Some((header, _)) = self.data_url.split_once(',') else {
            return DEFAULT_MIME_TYPE;
        };
        let mime = header
            .strip_prefix("data:")
            .map(|rest| rest.split(';').next().unwrap_or(""))
            .unwrap_or("");
        if mime.is_empty() {
            DEFAULT_MIME_TYPE
        } else {
            mime
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_base64_strips_header() {
        let payload = ImagePayload::from_data_url("data:image/jpeg;base64,AAAA");
        assert_eq!(payload.base64_data(), "AAAA");
        assert_eq!(payload.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_base64_splits_on_first_comma_only() {
        let payload = ImagePayload::from_data_url("data:image/png;base64,AB,CD");
        assert_eq!(payload.base64_data(), "AB,CD");
        assert_eq!(payload.mime_type(), "image/png");
    }

    #[test]
    fn test_payload_without_header_passes_through() {
        let payload = ImagePayload::from_data_url("AAAA");
        assert_eq!(payload.base64_data(), "AAAA");
        assert_eq!(payload.mime_type(), DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_header_without_mime_defaults() {
        let payload = ImagePayload::from_data_url("data:;base64,AAAA");
        assert_eq!(payload.mime_type(), DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_from_bytes_png() {
        let payload = ImagePayload::from_bytes(&[0x89, 0x50, 0x4E, 0x47], "png");
        assert!(payload.data_url().starts_with("data:image/png;base64,"));
        assert_eq!(payload.base64_data(), "iVBORw==");
    }

    #[test]
    fn test_from_bytes_unknown_format_defaults_to_jpeg() {
        let payload = ImagePayload::from_bytes(&[1, 2, 3], "tiff");
        assert_eq!(payload.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_serde_transparent() {
        let payload = ImagePayload::from_data_url("data:image/gif;base64,R0lG");
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, "\"data:image/gif;base64,R0lG\"");
    }

    #[tokio::test]
    async fn test_from_path_uses_extension() {
        let mut file = tempfile::Builder::new().suffix(".webp").tempfile().unwrap();
        file.write_all(&[0x52, 0x49, 0x46, 0x46]).unwrap();

        let payload = ImagePayload::from_path(file.path()).await.unwrap();
        assert_eq!(payload.mime_type(), "image/webp");
        assert_eq!(payload.base64_data(), "UklGRg==");
    }
}
