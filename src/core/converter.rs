use crate::core::{
    ConvertedRecord, Extracted, FilePair, Pipeline, Record, Storage, TransformResult,
};
use crate::domain::ports::Transliterator;
use crate::utils::error::Result;

/// Parse one input line into a record.
///
/// The line is trimmed and split on single spaces; anything with fewer than two
/// fields yields `None`, fields past the second are ignored.
pub fn parse_line(line: &str) -> Option<Record> {
    let mut fields = line.trim().split(' ');
    let label = fields.next()?;
    let romaji = fields.next()?;
    Some(Record {
        label: label.to_string(),
        romaji: romaji.to_string(),
    })
}

pub fn parse_records(content: &str) -> Vec<Record> {
    content.lines().filter_map(parse_line).collect()
}

pub fn render_lines(records: &[ConvertedRecord]) -> String {
    records
        .iter()
        .map(ConvertedRecord::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 對整份文字內容做轉換，不經過存儲層
pub fn convert_content<T: Transliterator + ?Sized>(content: &str, transliterator: &T) -> String {
    let converted: Vec<ConvertedRecord> = parse_records(content)
        .into_iter()
        .map(|record| convert_record(record, transliterator))
        .collect();
    render_lines(&converted)
}

fn convert_record<T: Transliterator + ?Sized>(record: Record, transliterator: &T) -> ConvertedRecord {
    let kana = transliterator.transliterate(&record.romaji);
    ConvertedRecord {
        label: record.label,
        kana,
    }
}

/// 單一檔案的轉換管道：讀取、轉寫、寫出
pub struct ConvertPipeline<'a, S: Storage, T: Transliterator> {
    storage: &'a S,
    transliterator: &'a T,
    pair: FilePair,
}

impl<'a, S: Storage, T: Transliterator> ConvertPipeline<'a, S, T> {
    pub fn new(storage: &'a S, transliterator: &'a T, pair: FilePair) -> Self {
        Self {
            storage,
            transliterator,
            pair,
        }
    }

    pub fn pair(&self) -> &FilePair {
        &self.pair
    }
}

#[async_trait::async_trait]
impl<'a, S: Storage, T: Transliterator> Pipeline for ConvertPipeline<'a, S, T> {
    async fn extract(&self) -> Result<Extracted> {
        let bytes = self.storage.read_file(&self.pair.input).await?;
        let content = String::from_utf8(bytes)?;

        let total_lines = content.lines().count();
        let records = parse_records(&content);

        let dropped = total_lines - records.len();
        if dropped > 0 {
            tracing::debug!(
                "Dropped {} line(s) with fewer than two fields from {}",
                dropped,
                self.pair.input
            );
        }

        Ok(Extracted { records, dropped })
    }

    async fn transform(&self, data: Extracted) -> Result<TransformResult> {
        let records: Vec<ConvertedRecord> = data
            .records
            .into_iter()
            .map(|record| convert_record(record, self.transliterator))
            .collect();
        let content = render_lines(&records);

        Ok(TransformResult {
            records,
            content,
            dropped: data.dropped,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        self.storage
            .write_file(&self.pair.output, result.content.as_bytes())
            .await?;
        Ok(self.pair.output.clone())
    }
}
