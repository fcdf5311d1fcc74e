//! Cloudinary implementation of [`ImageHost`].
//!
//! Uses the signed upload API: every request carries `api_key`, a Unix
//! `timestamp` and a `signature`, which is the SHA-256 hex digest of the
//! signed parameters sorted by name, joined as `k=v` pairs with `&`, with
//! the API secret appended.

use crate::{ImageHost, ImagePayload, MediaError, Result as MediaResult, UploadedImage};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

pub const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com";

const DEFAULT_FILE_NAME: &str = "image";

/// Account credentials for the upload API
#[derive(Debug, Clone)]
pub struct CloudinaryCredentials {
    pub base_url: String,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct CloudinaryClient {
    credentials: CloudinaryCredentials,
    client: ReqwestClient,
}

impl CloudinaryClient {
    pub fn new(credentials: CloudinaryCredentials, timeout: Duration) -> MediaResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            credentials: CloudinaryCredentials {
                base_url: credentials.base_url.trim_end_matches('/').to_string(),
                ..credentials
            },
            client,
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v1_1/{}/image/{}",
            self.credentials.base_url, self.credentials.cloud_name, action
        )
    }

    /// Sign request parameters with the API secret.
    pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
        let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let to_sign = sorted
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Build a multipart form carrying the signed parameters.
    fn signed_form(&self, params: &[(&str, &str)]) -> Form {
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let mut signed: Vec<(&str, &str)> = params.to_vec();
        signed.push(("timestamp", &timestamp));
        let signature = Self::sign(&signed, &self.credentials.api_secret);

        let mut form = Form::new();
        for (key, value) in signed {
            form = form.text(key.to_string(), value.to_string());
        }

        form.text("api_key", self.credentials.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
    }

    /// Turn a non-success reply into the host's own error message.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(body) => format!("{} ({})", body.error.message, status),
            Err(_) => format!("image host returned {}", status),
        }
    }
}

#[async_trait]
impl ImageHost for CloudinaryClient {
    async fn upload(&self, image: ImagePayload, folder: &str) -> MediaResult<UploadedImage> {
        let mut part = Part::stream(image.bytes)
            .file_name(image.file_name.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()));
        if let Some(content_type) = image.content_type {
            part = part.mime_str(&content_type)?;
        }

        let form = self.signed_form(&[("folder", folder)]).part("file", part);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MediaError::upload(Self::error_message(response).await));
        }

        let body: UploadResponse = response.json().await?;
        debug!("Uploaded image {} -> {}", body.public_id, body.secure_url);

        Ok(UploadedImage {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> MediaResult<()> {
        let form = self.signed_form(&[("public_id", public_id)]);

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MediaError::Destroy {
                message: Self::error_message(response).await,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body: DestroyResponse = response.json().await?;
        if body.result != "ok" {
            return Err(MediaError::Destroy {
                message: format!("image host answered '{}' for {}", body.result, public_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
