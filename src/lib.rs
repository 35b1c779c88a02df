pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::supabase::SupabaseStorageClient;
pub use config::TomlConfig;
pub use core::adapter::StorageAdapter;
pub use domain::model::{ByteStream, DeletableFileRef, Payload, ProviderConfig, UploadableFile};
pub use domain::ports::{ObjectStore, UploadProvider};
pub use utils::error::{BackendError, Result, UploadError};
