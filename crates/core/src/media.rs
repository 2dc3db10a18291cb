//! Signed direct-upload parameters for the media host.
//!
//! The browser uploads straight to the media host; the API only hands out a
//! short-lived signature. The host recomputes the SHA-1 digest of the signed
//! parameters (sorted, `&`-joined) followed by the account secret and rejects
//! the upload if it differs or the timestamp is stale.

use serde::Serialize;
use sha1::{Digest, Sha1};

/// Every upload lands in this folder.
pub const UPLOAD_FOLDER: &str = "portfolio";

/// Used when the caller does not ask for a specific resource type.
pub const DEFAULT_RESOURCE_TYPE: &str = "image";

/// Account credentials for the media host.
#[derive(Clone)]
pub struct MediaCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for MediaCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Everything the browser needs to perform a signed upload.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadSignature {
    pub signature: String,
    pub timestamp: i64,
    pub cloud_name: String,
    pub api_key: String,
    pub folder: String,
    pub resource_type: String,
}

/// Compute the hex-encoded SHA-1 signature for an upload into `folder` at
/// `timestamp` (Unix seconds).
pub fn sign_upload(folder: &str, timestamp: i64, api_secret: &str) -> String {
    let params = format!("folder={folder}&timestamp={timestamp}");
    let mut hasher = Sha1::new();
    hasher.update(params.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Build the full signed-upload payload for the portfolio folder.
///
/// `resource_type` is echoed back untouched; it is not part of the signed
/// parameters.
pub fn upload_signature(
    credentials: &MediaCredentials,
    resource_type: Option<&str>,
    timestamp: i64,
) -> UploadSignature {
    UploadSignature {
        signature: sign_upload(UPLOAD_FOLDER, timestamp, &credentials.api_secret),
        timestamp,
        cloud_name: credentials.cloud_name.clone(),
        api_key: credentials.api_key.clone(),
        folder: UPLOAD_FOLDER.to_string(),
        resource_type: resource_type
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_RESOURCE_TYPE)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> MediaCredentials {
        MediaCredentials {
            cloud_name: "demo-cloud".to_string(),
            api_key: "123456".to_string(),
            api_secret: "abcd".to_string(),
        }
    }

    #[test]
    fn signature_matches_known_digest() {
        // sha1("folder=portfolio&timestamp=1700000000abcd")
        let sig = sign_upload("portfolio", 1_700_000_000, "abcd");
        assert_eq!(sig, "1aba16c550c2cf42e2d900a9af11745ee1252244");
    }

    #[test]
    fn signature_depends_on_secret() {
        let a = sign_upload("portfolio", 1_700_000_000, "secret-a");
        let b = sign_upload("portfolio", 1_700_000_000, "secret-b");
        assert_ne!(a, b);
        assert_eq!(a.len(), 40);
    }

    #[test]
    fn resource_type_defaults_to_image() {
        let payload = upload_signature(&credentials(), None, 1_700_000_000);
        assert_eq!(payload.resource_type, "image");
        assert_eq!(payload.folder, "portfolio");
        assert_eq!(payload.cloud_name, "demo-cloud");
        assert_eq!(payload.api_key, "123456");
        assert_eq!(payload.signature, "1aba16c550c2cf42e2d900a9af11745ee1252244");

        let empty = upload_signature(&credentials(), Some(""), 1_700_000_000);
        assert_eq!(empty.resource_type, "image");
    }

    #[test]
    fn resource_type_is_not_signed() {
        let image = upload_signature(&credentials(), Some("image"), 42);
        let video = upload_signature(&credentials(), Some("video"), 42);
        assert_eq!(video.resource_type, "video");
        assert_eq!(image.signature, video.signature);
    }

    #[test]
    fn debug_output_hides_secret() {
        let rendered = format!("{:?}", credentials());
        assert!(!rendered.contains("abcd"));
        assert!(rendered.contains("<redacted>"));
    }
}
