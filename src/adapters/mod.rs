// Adapters - External system implementations

pub mod dry_run;
pub mod exec_ffmpeg;
pub mod toml_config;

// Re-export adapters
pub use dry_run::DryRunAdapter;
pub use exec_ffmpeg::FFmpegAdapter;
pub use toml_config::{FileConfig, TomlConfigAdapter};
