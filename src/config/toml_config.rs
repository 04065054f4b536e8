use crate::config::DEFAULT_INPUT_SUFFIX;
use crate::core::{ConfigProvider, ErrorPolicy, KanaScript, NamingMode};
use crate::utils::error::{KanaError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub batch: BatchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub name: Option<String>,
    pub base_path: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub script: KanaScript,
    #[serde(default)]
    pub naming: NamingMode,
    pub input_suffix: Option<String>,
    pub output_suffix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub path: String,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| KanaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn name(&self) -> &str {
        self.batch.name.as_deref().unwrap_or("kana-etl")
    }
}

impl ConfigProvider for TomlConfig {
    fn input_files(&self) -> &[String] {
        &self.batch.files
    }

    fn base_path(&self) -> &str {
        self.batch.base_path.as_deref().unwrap_or(".")
    }

    fn script(&self) -> KanaScript {
        self.output.script
    }

    fn naming(&self) -> NamingMode {
        self.output.naming
    }

    fn input_suffix(&self) -> &str {
        self.output
            .input_suffix
            .as_deref()
            .unwrap_or(DEFAULT_INPUT_SUFFIX)
    }

    fn output_suffix(&self) -> &str {
        self.output
            .output_suffix
            .as_deref()
            .unwrap_or_else(|| self.output.script.default_output_suffix())
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.batch.on_error
    }

    fn export_path(&self) -> Option<&str> {
        self.export.as_ref().map(|e| e.path.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_file_list("batch.files", &self.batch.files)?;
        validation::validate_path("batch.base_path", self.base_path())?;
        validation::validate_suffixes(self.input_suffix(), self.output_suffix())?;
        if let Some(path) = self.export_path() {
            validation::validate_path("export.path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[batch]
name = "kanji-readings"
files = ["src/data-501-1000.csv", "src/data-1001-1500.csv"]
on_error = "continue"

[output]
script = "katakana"
naming = "replace_all"

[export]
path = "src/data/kanji-furigana.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.name(), "kanji-readings");
        assert_eq!(config.input_files().len(), 2);
        assert_eq!(config.script(), KanaScript::Katakana);
        assert_eq!(config.naming(), NamingMode::ReplaceAll);
        assert_eq!(config.output_suffix(), "-katakana.csv");
        assert_eq!(config.error_policy(), ErrorPolicy::Continue);
        assert_eq!(config.export_path(), Some("src/data/kanji-furigana.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_output_section_missing() {
        let config = TomlConfig::from_toml_str("[batch]\nfiles = [\"a.csv\"]\n").unwrap();

        assert_eq!(config.base_path(), ".");
        assert_eq!(config.script(), KanaScript::Hiragana);
        assert_eq!(config.naming(), NamingMode::Anchored);
        assert_eq!(config.input_suffix(), ".csv");
        assert_eq!(config.output_suffix(), "-hiragana.csv");
        assert_eq!(config.error_policy(), ErrorPolicy::Abort);
        assert!(config.export_path().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("KANA_ETL_TEST_DATA_DIR", "/srv/kanji");

        let toml_content = r#"
[batch]
base_path = "${KANA_ETL_TEST_DATA_DIR}"
files = ["a.csv"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_path(), "/srv/kanji");

        std::env::remove_var("KANA_ETL_TEST_DATA_DIR");
    }

    #[test]
    fn test_empty_file_list_fails_validation() {
        let config = TomlConfig::from_toml_str("[batch]\nfiles = []\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(KanaError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[batch\nfiles = ");
        assert!(matches!(
            result,
            Err(KanaError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[batch]\nname = \"file-test\"\nfiles = [\"a.csv\"]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name(), "file-test");
    }
}
