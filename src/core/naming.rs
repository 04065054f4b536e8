use crate::domain::model::{FilePair, NamingMode};

/// Output naming rule, e.g. `data-501-1000.csv` -> `data-501-1000-hiragana.csv`.
#[derive(Debug, Clone)]
pub struct OutputNaming {
    input_suffix: String,
    output_suffix: String,
    mode: NamingMode,
}

impl OutputNaming {
    pub fn new(
        input_suffix: impl Into<String>,
        output_suffix: impl Into<String>,
        mode: NamingMode,
    ) -> Self {
        Self {
            input_suffix: input_suffix.into(),
            output_suffix: output_suffix.into(),
            mode,
        }
    }

    pub fn output_path(&self, input: &str) -> String {
        match self.mode {
            NamingMode::Anchored => match input.strip_suffix(&self.input_suffix) {
                Some(stem) => format!("{}{}", stem, self.output_suffix),
                // 沒有後綴時直接附加，避免覆寫輸入檔
                None => format!("{}{}", input, self.output_suffix),
            },
            NamingMode::ReplaceAll => input.replace(&self.input_suffix, &self.output_suffix),
        }
    }

    pub fn pair(&self, input: &str) -> FilePair {
        FilePair {
            input: input.to_string(),
            output: self.output_path(input),
        }
    }
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self::new(".csv", "-hiragana.csv", NamingMode::Anchored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_suffix() {
        let naming = OutputNaming::default();
        assert_eq!(
            naming.output_path("src/data-501-1000.csv"),
            "src/data-501-1000-hiragana.csv"
        );
        assert_eq!(
            naming.output_path("exports.csv/data.csv"),
            "exports.csv/data-hiragana.csv"
        );
    }

    #[test]
    fn test_anchored_without_suffix_appends() {
        let naming = OutputNaming::default();
        assert_eq!(naming.output_path("readings.txt"), "readings.txt-hiragana.csv");
    }

    #[test]
    fn test_replace_all_matches_plain_text_replace() {
        let naming = OutputNaming::new(".csv", "-hiragana.csv", NamingMode::ReplaceAll);
        assert_eq!(
            naming.output_path("exports.csv/data.csv"),
            "exports-hiragana.csv/data-hiragana.csv"
        );
        assert_eq!(naming.output_path("readings.txt"), "readings.txt");
    }

    #[test]
    fn test_pair() {
        let pair = OutputNaming::new(".csv", "-katakana.csv", NamingMode::Anchored).pair("a.csv");
        assert_eq!(pair.input, "a.csv");
        assert_eq!(pair.output, "a-katakana.csv");
    }
}
