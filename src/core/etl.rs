use crate::core::Pipeline;
use crate::utils::error::Result;

/// 一次管道執行的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun {
    pub output_path: String,
    pub records: usize,
    pub dropped: usize,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<PipelineRun> {
        // Extract
        tracing::debug!("Extracting records...");
        let raw_data = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} records", raw_data.records.len());

        // Transform
        let transformed = self.pipeline.transform(raw_data).await?;
        let records = transformed.records.len();
        let dropped = transformed.dropped;
        tracing::debug!("Transliterated {} records", records);

        // Load
        let output_path = self.pipeline.load(transformed).await?;
        tracing::debug!("Wrote {}", output_path);

        Ok(PipelineRun {
            output_path,
            records,
            dropped,
        })
    }
}
