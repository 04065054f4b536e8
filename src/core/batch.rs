use crate::core::converter::ConvertPipeline;
use crate::core::etl::EtlEngine;
use crate::core::naming::OutputNaming;
use crate::core::transliterate::RomajiTransliterator;
use crate::core::{BatchReport, ConfigProvider, ErrorPolicy, FileOutcome, Storage};
use crate::domain::ports::Transliterator;
use crate::utils::error::{KanaError, Result};

/// Converts an ordered list of candidate files, skipping the ones that do not exist.
pub struct BatchDriver<S: Storage, T: Transliterator> {
    storage: S,
    transliterator: T,
    naming: OutputNaming,
    policy: ErrorPolicy,
}

impl<S: Storage> BatchDriver<S, RomajiTransliterator> {
    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Self {
        let naming = OutputNaming::new(
            config.input_suffix(),
            config.output_suffix(),
            config.naming(),
        );
        Self::new(storage, RomajiTransliterator::new(config.script()), naming)
            .with_error_policy(config.error_policy())
    }
}

impl<S: Storage, T: Transliterator> BatchDriver<S, T> {
    pub fn new(storage: S, transliterator: T, naming: OutputNaming) -> Self {
        Self {
            storage,
            transliterator,
            naming,
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn naming(&self) -> &OutputNaming {
        &self.naming
    }

    pub async fn process_all(&self, paths: &[String]) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for path in paths {
            match self.process_one(path).await {
                Ok(outcome) => report.outcomes.push(outcome),
                Err(e) => match self.policy {
                    ErrorPolicy::Abort => {
                        tracing::error!("❌ Failed to convert {}: {}", path, e);
                        return Err(e);
                    }
                    ErrorPolicy::Continue => {
                        tracing::error!("❌ Failed to convert {}, continuing: {}", path, e);
                        report.outcomes.push(FileOutcome::Failed {
                            input: path.clone(),
                            error: e.to_string(),
                        });
                    }
                },
            }
        }

        tracing::info!(
            "📊 Batch finished: {} converted, {} missing, {} failed, {} records",
            report.converted_outputs().len(),
            report.missing().len(),
            report.failed_count(),
            report.total_records()
        );

        Ok(report)
    }

    async fn process_one(&self, path: &str) -> Result<FileOutcome> {
        if !self.storage.exists(path).await? {
            tracing::warn!("File not found: {}", path);
            return Ok(FileOutcome::Missing {
                input: path.to_string(),
            });
        }

        let pair = self.naming.pair(path);
        if pair.output == pair.input {
            return Err(KanaError::ProcessingError {
                message: format!("output path for {} would overwrite the input", path),
            });
        }

        tracing::info!("Converting {}...", pair.input);
        let pipeline = ConvertPipeline::new(&self.storage, &self.transliterator, pair);
        let engine = EtlEngine::new(pipeline);
        let run = engine.run().await?;
        tracing::info!("Created {}", run.output_path);

        Ok(FileOutcome::Converted {
            input: path.to_string(),
            output: run.output_path,
            records: run.records,
            dropped: run.dropped,
        })
    }
}
