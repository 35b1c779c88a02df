use crate::domain::model::ProviderConfig;
use crate::domain::ports::ObjectStore;
use crate::utils::error::{BackendError, BackendResult};
use bytes::Bytes;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const DEFAULT_CACHE_CONTROL: &str = "max-age=3600";

/// Error body returned by the Storage API: `{statusCode, error, message}`.
/// The HTTP status is taken from the response itself.
#[derive(Debug, Deserialize)]
struct StorageApiError {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the Supabase Storage REST API (`/storage/v1`).
#[derive(Debug, Clone)]
pub struct SupabaseStorageClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl SupabaseStorageClient {
    pub fn new(config: &ProviderConfig) -> BackendResult<Self> {
        let base_url =
            Url::parse(&config.endpoint_url).map_err(|e| BackendError::InvalidEndpoint {
                endpoint: config.endpoint_url.clone(),
                reason: e.to_string(),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidEndpoint {
                endpoint: config.endpoint_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// `{endpoint}/storage/v1/object/{bucket}/{key...}` with every segment percent-encoded.
    ///
    /// `.` and `..` segments are rejected: the URL path would drop them and the
    /// object would land under a different key than the one published.
    fn object_url(&self, bucket: &str, key: Option<&str>) -> BackendResult<Url> {
        if let Some(key) = key {
            if key.split('/').any(|segment| segment == "." || segment == "..") {
                return Err(BackendError::InvalidObjectKey {
                    key: key.to_string(),
                    reason: "'.' and '..' path segments cannot be addressed".to_string(),
                });
            }
        }

        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["storage", "v1", "object", bucket]);
            if let Some(key) = key {
                segments.extend(key.split('/'));
            }
        }
        Ok(url)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
    }

    async fn check(response: Response) -> BackendResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        tracing::debug!("Storage API responded {}: {}", status, body);

        let (error, message) = match serde_json::from_str::<StorageApiError>(&body) {
            Ok(parsed) => (
                parsed.error.unwrap_or_default(),
                parsed.message.unwrap_or_else(|| body.clone()),
            ),
            Err(_) => (
                status.canonical_reason().unwrap_or_default().to_string(),
                body,
            ),
        };

        Err(BackendError::Api {
            status: status.as_u16(),
            error,
            message,
        })
    }
}

impl ObjectStore for SupabaseStorageClient {
    async fn write_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
        upsert: bool,
    ) -> BackendResult<()> {
        let url = self.object_url(bucket, Some(key))?;
        tracing::debug!("POST {} ({} bytes)", url, data.len());

        let response = self
            .authorized(self.client.post(url))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header(reqwest::header::CACHE_CONTROL, DEFAULT_CACHE_CONTROL)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(data)
            .send()
            .await?;

        Self::check(response).await
    }

    async fn remove_objects(&self, bucket: &str, keys: &[String]) -> BackendResult<()> {
        let url = self.object_url(bucket, None)?;
        tracing::debug!("DELETE {} ({} keys)", url, keys.len());

        let response = self
            .authorized(self.client.delete(url))
            .json(&serde_json::json!({ "prefixes": keys }))
            .send()
            .await?;

        Self::check(response).await
    }
}
