use clap::Subcommand;
use std::path::PathBuf;

pub mod columns;
mod execute;
pub mod outline;
pub mod render;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the column layout derived from object metadata
    Columns {
        /// Object info JSON file
        #[arg(short, long)]
        metadata: PathBuf,

        /// Grid config (TOML) supplying the field list and parent field
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Comma-separated field list (overrides the config)
        #[arg(short, long)]
        fields: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Build the hierarchy and print the forest as JSON
    Render {
        /// Grid config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Object info JSON file
        #[arg(short, long)]
        metadata: PathBuf,

        /// Records JSON file (array of objects)
        #[arg(short, long)]
        records: PathBuf,

        /// Starting record (overrides the config)
        #[arg(long)]
        record_id: Option<String>,

        /// Deep-link origin (overrides the config)
        #[arg(long)]
        origin: Option<String>,

        /// Comma-separated field list (overrides the config)
        #[arg(short, long)]
        fields: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Build the hierarchy and print it as an indented outline
    Outline {
        /// Grid config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Object info JSON file
        #[arg(short, long)]
        metadata: PathBuf,

        /// Records JSON file (array of objects)
        #[arg(short, long)]
        records: PathBuf,

        /// Starting record (overrides the config)
        #[arg(long)]
        record_id: Option<String>,

        /// Comma-separated field list (overrides the config)
        #[arg(short, long)]
        fields: Option<String>,

        /// Only show root rows
        #[arg(long)]
        collapsed: bool,
    },
}
