pub mod cli;
pub mod toml_config;

/// 未指定檔案清單時依序處理的資料檔
pub const DEFAULT_INPUT_FILES: [&str; 7] = [
    "src/data-501-1000.csv",
    "src/data-1001-1500.csv",
    "src/data-1501-2000.csv",
    "src/data-2001-3000.csv",
    "src/data-3001-4000.csv",
    "src/data-4001-5000.csv",
    "src/data-5001-6000.csv",
];

pub const DEFAULT_INPUT_SUFFIX: &str = ".csv";

#[cfg(feature = "cli")]
pub use self::cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::{DEFAULT_INPUT_FILES, DEFAULT_INPUT_SUFFIX};
    use crate::core::{ConfigProvider, ErrorPolicy, KanaScript, NamingMode};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "kana-etl")]
    #[command(about = "Convert romaji readings in 'kanji romaji' files to kana")]
    pub struct CliConfig {
        /// Input files, processed in order; missing ones are skipped
        #[arg(long, value_delimiter = ',', default_values = DEFAULT_INPUT_FILES)]
        pub files: Vec<String>,

        /// Directory the file paths are resolved against
        #[arg(long, default_value = ".")]
        pub base_path: String,

        #[arg(long, value_enum, default_value_t = KanaScript::Hiragana)]
        pub script: KanaScript,

        /// How output file names are derived from input names
        #[arg(long, value_enum, default_value_t = NamingMode::Anchored)]
        pub naming: NamingMode,

        #[arg(long, default_value = DEFAULT_INPUT_SUFFIX)]
        pub input_suffix: String,

        /// Defaults to `-hiragana.csv` or `-katakana.csv` depending on the script
        #[arg(long)]
        pub output_suffix: Option<String>,

        /// Keep going when a file cannot be read or written
        #[arg(long)]
        pub continue_on_error: bool,

        /// Also merge the converted files into a JSON dictionary at this path
        #[arg(long)]
        pub export_json: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn input_files(&self) -> &[String] {
            &self.files
        }

        fn base_path(&self) -> &str {
            &self.base_path
        }

        fn script(&self) -> KanaScript {
            self.script
        }

        fn naming(&self) -> NamingMode {
            self.naming
        }

        fn input_suffix(&self) -> &str {
            &self.input_suffix
        }

        fn output_suffix(&self) -> &str {
            self.output_suffix
                .as_deref()
                .unwrap_or_else(|| self.script.default_output_suffix())
        }

        fn error_policy(&self) -> ErrorPolicy {
            if self.continue_on_error {
                ErrorPolicy::Continue
            } else {
                ErrorPolicy::Abort
            }
        }

        fn export_path(&self) -> Option<&str> {
            self.export_json.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_file_list("files", &self.files)?;
            validation::validate_path("base_path", &self.base_path)?;
            validation::validate_suffixes(self.input_suffix(), self.output_suffix())?;
            if let Some(path) = self.export_path() {
                validation::validate_path("export_json", path)?;
            }
            Ok(())
        }
    }

}
