use crate::domain::model::{ErrorPolicy, Extracted, KanaScript, NamingMode, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
}

/// Latin phonetic spelling to kana. Characters without a mapping are returned unchanged.
pub trait Transliterator: Send + Sync {
    fn transliterate(&self, romaji: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn input_files(&self) -> &[String];
    fn base_path(&self) -> &str;
    fn script(&self) -> KanaScript;
    fn naming(&self) -> NamingMode;
    fn input_suffix(&self) -> &str;
    fn output_suffix(&self) -> &str;
    fn error_policy(&self) -> ErrorPolicy;
    fn export_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Extracted>;
    async fn transform(&self, data: Extracted) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}

impl<F> Transliterator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn transliterate(&self, romaji: &str) -> String {
        self(romaji)
    }
}
