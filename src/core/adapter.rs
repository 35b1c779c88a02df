use crate::adapters::supabase::SupabaseStorageClient;
use crate::core::{naming, payload};
use crate::domain::model::{DeletableFileRef, ProviderConfig, UploadableFile};
use crate::domain::ports::{ObjectStore, UploadProvider};
use crate::utils::error::{Result, UploadError};
use crate::utils::validation::validate_present;

/// Upload provider backed by an object store.
///
/// Holds the configuration and a single client handle for its whole lifetime.
/// Nothing is mutated after construction, so one adapter can serve concurrent
/// calls.
pub struct StorageAdapter<S: ObjectStore> {
    config: ProviderConfig,
    store: S,
}

impl StorageAdapter<SupabaseStorageClient> {
    /// Checks that endpoint, key and bucket are present and opens the Supabase
    /// client. Credentials are only exercised by the first request.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        validate_present("endpoint_url", &config.endpoint_url)?;
        validate_present("api_key", &config.api_key)?;
        validate_present("bucket_name", &config.bucket_name)?;

        let store = SupabaseStorageClient::new(&config)?;
        Ok(Self { config, store })
    }
}

impl<S: ObjectStore> StorageAdapter<S> {
    pub fn with_store(config: ProviderConfig, store: S) -> Self {
        Self { config, store }
    }
}

#[async_trait::async_trait]
impl<S: ObjectStore> UploadProvider for StorageAdapter<S> {
    async fn upload(&self, file: &mut UploadableFile) -> Result<()> {
        let key = naming::object_key(&self.config.path_prefix, file);

        let body = payload::resolve(file.payload.as_mut()).await?;

        tracing::debug!(
            "Uploading {} bytes to {}/{} ({})",
            body.len(),
            self.config.bucket_name,
            key,
            file.mime
        );
        self.store
            .write_object(&self.config.bucket_name, &key, body, &file.mime, true)
            .await?;

        file.url = naming::public_url(&self.config.endpoint_url, &self.config.bucket_name, &key);
        tracing::info!("Uploaded {}", file.url);
        Ok(())
    }

    async fn delete(&self, file: &DeletableFileRef) -> Result<()> {
        let key = naming::key_from_public_url(&file.url, &self.config.bucket_name).ok_or_else(
            || UploadError::InvalidUrl {
                url: file.url.clone(),
            },
        )?;

        tracing::debug!("Removing {}/{}", self.config.bucket_name, key);
        self.store
            .remove_objects(&self.config.bucket_name, &[key.to_string()])
            .await?;

        tracing::info!("Deleted {}", file.url);
        Ok(())
    }
}
