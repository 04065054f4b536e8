pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::memory::MemoryStorage;
pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use core::{
    batch::BatchDriver, converter::ConvertPipeline, etl::EtlEngine, naming::OutputNaming,
    transliterate::RomajiTransliterator,
};
pub use utils::error::{KanaError, Result};
