use crate::domain::model::{DeletableFileRef, UploadableFile};
use crate::utils::error::{BackendResult, Result};
use async_trait::async_trait;
use bytes::Bytes;

/// Backend side: the two object-storage calls the adapter needs.
pub trait ObjectStore: Send + Sync {
    fn write_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
        upsert: bool,
    ) -> impl std::future::Future<Output = BackendResult<()>> + Send;

    fn remove_objects(
        &self,
        bucket: &str,
        keys: &[String],
    ) -> impl std::future::Future<Output = BackendResult<()>> + Send;
}

/// Host side: the upload provider contract the CMS calls into.
#[async_trait]
pub trait UploadProvider: Send + Sync {
    async fn upload(&self, file: &mut UploadableFile) -> Result<()>;

    /// The host calls this when the file arrives as a stream. Same contract as `upload`.
    async fn upload_stream(&self, file: &mut UploadableFile) -> Result<()> {
        self.upload(file).await
    }

    async fn delete(&self, file: &DeletableFileRef) -> Result<()>;
}
