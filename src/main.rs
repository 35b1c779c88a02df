use anyhow::Context;
use clap::Parser;
use futures::StreamExt;
use std::path::Path;
use supabase_upload::utils::{logger, validation::Validate};
use supabase_upload::{
    CliConfig, Command, DeletableFileRef, ProviderConfig, StorageAdapter, TomlConfig,
    UploadProvider, UploadableFile,
};
use tokio_util::io::ReaderStream;

fn load_provider_config(path: Option<&Path>) -> anyhow::Result<ProviderConfig> {
    let config = match path {
        Some(path) => TomlConfig::from_file(path)?.provider,
        None => ProviderConfig::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

async fn upload(
    adapter: &StorageAdapter<supabase_upload::SupabaseStorageClient>,
    path: &Path,
    name: Option<String>,
    hash: Option<String>,
    mime: String,
    stream: bool,
) -> anyhow::Result<String> {
    let hash = match hash {
        Some(hash) => hash,
        None => path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .with_context(|| format!("Cannot derive a hash from {}", path.display()))?,
    };
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    let mut file = UploadableFile::new(hash, ext, mime);
    file.name = name;

    if stream {
        let handle = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open {}", path.display()))?;
        file = file.with_stream(ReaderStream::new(handle).boxed());
        adapter.upload_stream(&mut file).await?;
    } else {
        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        file = file.with_buffer(content);
        adapter.upload(&mut file).await?;
    }

    Ok(file.url)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let provider_config = match load_provider_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Provider config: {:?}", provider_config);

    let adapter = StorageAdapter::new(provider_config)?;

    let outcome = match cli.command {
        Command::Upload {
            path,
            name,
            hash,
            mime,
            stream,
        } => upload(&adapter, &path, name, hash, mime, stream).await,
        Command::Delete { url } => adapter
            .delete(&DeletableFileRef::new(url.clone()))
            .await
            .map(|_| url)
            .map_err(anyhow::Error::from),
    };

    match outcome {
        Ok(url) => {
            tracing::info!("✅ Done: {}", url);
            println!("{}", url);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Operation failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}
