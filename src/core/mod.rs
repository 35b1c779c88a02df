pub mod adapter;
pub mod naming;
pub mod payload;

pub use crate::domain::model::{ByteStream, DeletableFileRef, Payload, ProviderConfig, UploadableFile};
pub use crate::domain::ports::{ObjectStore, UploadProvider};
pub use crate::utils::error::Result;
