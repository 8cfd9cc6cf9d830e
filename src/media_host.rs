//! Direct-upload client for the external media host (Cloudinary-shaped).
//!
//! Binary data never passes through the origin server: the caller fetches
//! one-time signed parameters from `/api/upload-params/...`, then posts the
//! file straight to the host and keeps the returned public URL.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of asset is being uploaded. Determines the host folder, the
/// declared resource type, and the upload endpoint segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Audio,
}

impl AssetKind {
    pub fn folder(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Audio => "audio",
        }
    }

    /// Audio goes up as `raw` so any container format is accepted.
    pub fn resource_type(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Audio => "raw",
        }
    }
}

/// One-time signed upload parameters, as served by the origin. Field names
/// match the wire format (two camel-cased, `resource_type` snake-cased).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadParams {
    #[serde(rename = "cloudName")]
    pub cloud_name: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub signature: String,
    pub timestamp: i64,
    pub folder: String,
    pub resource_type: String,
}

#[derive(Debug)]
pub enum UploadError {
    Http(reqwest::Error),
    /// The host rejected the upload or returned no usable URL.
    Rejected(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Http(e) => write!(f, "HTTP error: {e}"),
            UploadError::Rejected(msg) => write!(f, "upload rejected: {msg}"),
        }
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(e: reqwest::Error) -> Self {
        UploadError::Http(e)
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    error: Option<UploadResponseError>,
}

#[derive(Debug, Deserialize)]
struct UploadResponseError {
    message: Option<String>,
}

pub fn upload_url(params: &UploadParams) -> String {
    let segment = if params.resource_type == "raw" {
        "raw"
    } else {
        "image"
    };
    format!(
        "https://api.cloudinary.com/v1_1/{}/{}/upload",
        params.cloud_name, segment
    )
}

/// Multipart upload of `bytes` under the signed parameters. Returns the
/// public `secure_url` of the stored asset.
pub async fn upload_asset(
    client: &reqwest::Client,
    file_name: &str,
    bytes: Vec<u8>,
    params: &UploadParams,
) -> Result<String, UploadError> {
    let file_part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
    let form = reqwest::multipart::Form::new()
        .part("file", file_part)
        .text("api_key", params.api_key.clone())
        .text("timestamp", params.timestamp.to_string())
        .text("signature", params.signature.clone())
        .text("folder", params.folder.clone())
        .text("resource_type", params.resource_type.clone());

    let resp = client.post(upload_url(params)).multipart(form).send().await?;
    let ok = resp.status().is_success();
    let body: UploadResponse = resp.json().await.unwrap_or(UploadResponse {
        secure_url: None,
        error: None,
    });

    match (ok, body.secure_url) {
        (true, Some(url)) => Ok(url),
        _ => {
            let msg = body
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "upload to media host failed".to_string());
            Err(UploadError::Rejected(msg))
        }
    }
}
