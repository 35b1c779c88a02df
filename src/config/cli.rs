use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "supabase-upload")]
#[command(about = "Upload and delete CMS files in a Supabase Storage bucket")]
pub struct CliConfig {
    /// TOML file with a [provider] table; falls back to SUPABASE_* environment variables
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Upload a local file and print its public URL
    Upload {
        path: PathBuf,

        /// Stored file name; defaults to <hash><ext>
        #[arg(long)]
        name: Option<String>,

        /// Content hash used when no name is given; defaults to the file stem
        #[arg(long)]
        hash: Option<String>,

        #[arg(long, default_value = "application/octet-stream")]
        mime: String,

        /// Send the file as a chunked stream instead of reading it up front
        #[arg(long)]
        stream: bool,
    },

    /// Delete a previously uploaded file by its public URL
    Delete { url: String },
}
