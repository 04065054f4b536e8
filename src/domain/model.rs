use serde::{Deserialize, Serialize};

/// 輸入檔中的一行：`label romaji`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub label: String,
    pub romaji: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedRecord {
    pub label: String,
    pub kana: String,
}

impl ConvertedRecord {
    pub fn to_line(&self) -> String {
        format!("{} {}", self.label, self.kana)
    }
}

/// extract 階段的結果；`dropped` 為欄位不足而略過的行數
#[derive(Debug, Clone, Default)]
pub struct Extracted {
    pub records: Vec<Record>,
    pub dropped: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<ConvertedRecord>,
    pub content: String,
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum KanaScript {
    #[default]
    Hiragana,
    Katakana,
}

impl KanaScript {
    /// 預設輸出後綴，例如 `-hiragana.csv`
    pub fn default_output_suffix(&self) -> &'static str {
        match self {
            KanaScript::Hiragana => "-hiragana.csv",
            KanaScript::Katakana => "-katakana.csv",
        }
    }
}

/// 輸出檔名的推導方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum NamingMode {
    /// 只替換路徑結尾的後綴
    #[default]
    Anchored,
    /// 純文字替換路徑中所有出現的後綴
    ReplaceAll,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    #[default]
    Abort,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted {
        input: String,
        output: String,
        records: usize,
        dropped: usize,
    },
    Missing {
        input: String,
    },
    Failed {
        input: String,
        error: String,
    },
}

impl FileOutcome {
    pub fn input(&self) -> &str {
        match self {
            FileOutcome::Converted { input, .. }
            | FileOutcome::Missing { input }
            | FileOutcome::Failed { input, .. } => input,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn converted_outputs(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                FileOutcome::Converted { output, .. } => Some(output.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn missing(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                FileOutcome::Missing { input } => Some(input.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Failed { .. }))
            .count()
    }

    pub fn total_records(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                FileOutcome::Converted { records, .. } => *records,
                _ => 0,
            })
            .sum()
    }
}

/// 字典匯出統計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub entries: usize,
    pub duplicates: usize,
    pub invalid: usize,
}
