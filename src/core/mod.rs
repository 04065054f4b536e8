pub mod batch;
pub mod converter;
pub mod etl;
pub mod export;
pub mod naming;
pub mod transliterate;

pub use crate::domain::model::{
    BatchReport, ConvertedRecord, ErrorPolicy, ExportReport, Extracted, FileOutcome, FilePair, KanaScript,
    NamingMode, Record, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, Transliterator};
pub use crate::utils::error::Result;
