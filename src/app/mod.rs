// Application layer: wires configuration, storage and the batch driver together.

use crate::config::cli::LocalStorage;
use crate::core::batch::BatchDriver;
use crate::core::export::export_dictionary;
use crate::core::{BatchReport, ConfigProvider, ExportReport, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub batch: BatchReport,
    pub export: Option<ExportReport>,
}

/// 依配置在本機檔案系統上執行整個批次
pub async fn run<C: ConfigProvider>(config: &C) -> Result<RunSummary> {
    let storage = LocalStorage::new(config.base_path().to_string());
    run_with_storage(storage, config).await
}

pub async fn run_with_storage<S: Storage, C: ConfigProvider>(
    storage: S,
    config: &C,
) -> Result<RunSummary> {
    let driver = BatchDriver::from_config(storage, config);
    let batch = driver.process_all(config.input_files()).await?;

    let export = match config.export_path() {
        Some(json_path) => {
            let outputs = batch.converted_outputs();
            if outputs.is_empty() {
                tracing::warn!("No converted files, skipping export to {}", json_path);
                None
            } else {
                Some(export_dictionary(driver.storage(), &outputs, json_path).await?)
            }
        }
        None => None,
    };

    Ok(RunSummary { batch, export })
}
