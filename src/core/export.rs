use crate::core::{ExportReport, Storage};
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Merge converted `label reading` files into one `{label: reading}` JSON dictionary.
///
/// Files are read in order, so a label seen twice keeps the reading that came last.
/// Lines missing either field are logged and skipped.
pub async fn export_dictionary<S: Storage>(
    storage: &S,
    sources: &[&str],
    json_path: &str,
) -> Result<ExportReport> {
    let mut dictionary: BTreeMap<String, String> = BTreeMap::new();
    let mut report = ExportReport::default();

    for source in sources {
        let data = storage.read_file(source).await?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(data.as_slice());

        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let label = record.get(0).unwrap_or("");
            let reading = record.get(1).unwrap_or("");

            if label.is_empty() || reading.is_empty() {
                tracing::warn!("Invalid line {} in {}: {:?}", line, source, record);
                report.invalid += 1;
                continue;
            }

            if let Some(previous) = dictionary.insert(label.to_string(), reading.to_string()) {
                tracing::warn!(
                    "Duplicate entry for {}: {} and {}",
                    label,
                    previous,
                    reading
                );
                report.duplicates += 1;
            }
        }
    }

    let json = serde_json::to_string_pretty(&dictionary)?;
    storage.write_file(json_path, json.as_bytes()).await?;

    report.entries = dictionary.len();
    tracing::info!(
        "📚 Exported {} entries to {} ({} duplicates, {} invalid)",
        report.entries,
        json_path,
        report.duplicates,
        report.invalid
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStorage;

    #[test]
    fn test_export_merges_files_in_order() {
        let storage = MemoryStorage::new()
            .with_file("a-hiragana.csv", "山 やま\n川 かわ")
            .with_file("b-hiragana.csv", "火 ひ\n山 さん");

        let report = tokio_test::block_on(export_dictionary(
            &storage,
            &["a-hiragana.csv", "b-hiragana.csv"],
            "dict.json",
        ))
        .unwrap();

        assert_eq!(
            report,
            ExportReport {
                entries: 3,
                duplicates: 1,
                invalid: 0,
            }
        );

        let json: serde_json::Value =
            serde_json::from_str(&storage.get_string("dict.json").unwrap()).unwrap();
        assert_eq!(json["山"], "さん");
        assert_eq!(json["川"], "かわ");
        assert_eq!(json["火"], "ひ");
    }

    #[test]
    fn test_export_skips_invalid_lines() {
        let storage = MemoryStorage::new().with_file("a-hiragana.csv", "山 やま\n水 \n木  き");

        let report =
            tokio_test::block_on(export_dictionary(&storage, &["a-hiragana.csv"], "dict.json"))
                .unwrap();

        assert_eq!(report.entries, 1);
        assert_eq!(report.invalid, 2);
    }
}
