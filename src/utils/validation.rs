use crate::utils::error::{KanaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(KanaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(KanaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 檢查檔案清單：至少一個，且每個路徑合法
pub fn validate_file_list(field_name: &str, files: &[String]) -> Result<()> {
    if files.is_empty() {
        return Err(KanaError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for file in files {
        validate_path(field_name, file)?;
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KanaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_suffixes(input_suffix: &str, output_suffix: &str) -> Result<()> {
    validate_non_empty_string("output.input_suffix", input_suffix)?;
    validate_non_empty_string("output.output_suffix", output_suffix)?;

    // 相同後綴會覆寫輸入檔
    if input_suffix == output_suffix {
        return Err(KanaError::InvalidConfigValueError {
            field: "output.output_suffix".to_string(),
            value: output_suffix.to_string(),
            reason: "Output suffix must differ from input suffix".to_string(),
        });
    }

    Ok(())
}
