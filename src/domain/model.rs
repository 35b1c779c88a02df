use bytes::Bytes;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chunked file body handed over by the host.
pub type ByteStream = BoxStream<'static, std::io::Result<Bytes>>;

pub enum Payload {
    Buffer(Bytes),
    Stream(ByteStream),
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Buffer(bytes) => f.debug_tuple("Buffer").field(&bytes.len()).finish(),
            Payload::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// A file as the host hands it to the provider. Only `url` is written back.
#[derive(Debug)]
pub struct UploadableFile {
    pub hash: String,
    pub ext: String,
    pub mime: String,
    pub name: Option<String>,
    pub url: String,
    pub payload: Option<Payload>,
}

impl UploadableFile {
    pub fn new(hash: impl Into<String>, ext: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            ext: ext.into(),
            mime: mime.into(),
            name: None,
            url: String::new(),
            payload: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_buffer(mut self, buffer: impl Into<Bytes>) -> Self {
        self.payload = Some(Payload::Buffer(buffer.into()));
        self
    }

    pub fn with_stream(mut self, stream: ByteStream) -> Self {
        self.payload = Some(Payload::Stream(stream));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletableFileRef {
    pub url: String,
}

impl DeletableFileRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(alias = "api_url")]
    pub endpoint_url: String,
    pub api_key: String,
    #[serde(alias = "bucket")]
    pub bucket_name: String,
    #[serde(default, alias = "directory")]
    pub path_prefix: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl ProviderConfig {
    pub fn new(
        endpoint_url: impl Into<String>,
        api_key: impl Into<String>,
        bucket_name: impl Into<String>,
    ) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            api_key: api_key.into(),
            bucket_name: bucket_name.into(),
            path_prefix: String::new(),
            timeout_seconds: None,
        }
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

// The API key stays out of logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("api_key", &"***")
            .field("bucket_name", &self.bucket_name)
            .field("path_prefix", &self.path_prefix)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
