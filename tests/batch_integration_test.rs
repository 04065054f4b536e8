use anyhow::Result;
use kana_etl::core::batch::BatchDriver;
use kana_etl::core::FileOutcome;
use kana_etl::{KanaError, LocalStorage, OutputNaming, RomajiTransliterator, TomlConfig};
use tempfile::TempDir;

fn local_driver(temp_dir: &TempDir) -> BatchDriver<LocalStorage, RomajiTransliterator> {
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    BatchDriver::new(
        storage,
        RomajiTransliterator::hiragana(),
        OutputNaming::default(),
    )
}

/// 一個存在、一個不存在：只產生一個輸出檔
#[tokio::test]
async fn test_existing_and_missing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir_all(temp_dir.path().join("src"))?;
    std::fs::write(
        temp_dir.path().join("src/data-501-1000.csv"),
        "山 yama\n川 kawa\n",
    )?;

    let driver = local_driver(&temp_dir);
    let report = driver
        .process_all(&[
            "src/data-501-1000.csv".to_string(),
            "src/data-1001-1500.csv".to_string(),
        ])
        .await?;

    assert_eq!(report.missing(), vec!["src/data-1001-1500.csv"]);
    assert_eq!(
        report.converted_outputs(),
        vec!["src/data-501-1000-hiragana.csv"]
    );

    let output = std::fs::read_to_string(temp_dir.path().join("src/data-501-1000-hiragana.csv"))?;
    assert_eq!(output, "山 やま\n川 かわ");
    assert!(!temp_dir
        .path()
        .join("src/data-1001-1500-hiragana.csv")
        .exists());

    let mut entries: Vec<String> = std::fs::read_dir(temp_dir.path().join("src"))?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<_>>()?;
    entries.sort();
    assert_eq!(
        entries,
        vec!["data-501-1000-hiragana.csv", "data-501-1000.csv"]
    );

    Ok(())
}

#[tokio::test]
async fn test_all_missing_creates_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let driver = local_driver(&temp_dir);

    let report = driver.process_all(&["nope.csv".to_string()]).await?;

    assert_eq!(
        report.outcomes,
        vec![FileOutcome::Missing {
            input: "nope.csv".to_string()
        }]
    );
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);

    Ok(())
}

/// 路徑存在但無法讀取（目錄）：視為 I/O 錯誤並中止後續檔案
#[tokio::test]
async fn test_unreadable_input_aborts_batch() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir_all(temp_dir.path().join("dir.csv"))?;
    std::fs::write(temp_dir.path().join("b.csv"), "川 kawa")?;

    let driver = local_driver(&temp_dir);
    let result = driver
        .process_all(&["dir.csv".to_string(), "b.csv".to_string()])
        .await;

    assert!(matches!(result, Err(KanaError::IoError(_))));
    assert!(!temp_dir.path().join("b-hiragana.csv").exists());

    Ok(())
}

#[tokio::test]
async fn test_conversion_is_deterministic_and_overwrites() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("words.csv"),
        "火 hi\n水\n学校 gakkou extra\n新聞 shinbun",
    )?;
    std::fs::write(temp_dir.path().join("words-hiragana.csv"), "stale content")?;

    let driver = local_driver(&temp_dir);
    let paths = vec!["words.csv".to_string()];

    driver.process_all(&paths).await?;
    let first = std::fs::read(temp_dir.path().join("words-hiragana.csv"))?;
    driver.process_all(&paths).await?;
    let second = std::fs::read(temp_dir.path().join("words-hiragana.csv"))?;

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first)?,
        "火 ひ\n学校 がっこう\n新聞 しんぶん"
    );

    Ok(())
}

#[tokio::test]
async fn test_toml_config_run_with_export() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().replace('\\', "/");
    std::fs::write(temp_dir.path().join("a.csv"), "山 yama\n川 kawa")?;
    std::fs::write(temp_dir.path().join("b.csv"), "火 hi")?;

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[batch]
name = "export-test"
base_path = "{}"
files = ["a.csv", "missing.csv", "b.csv"]

[export]
path = "data/kanji-furigana.json"
"#,
        base
    ))?;

    let summary = kana_etl::app::run(&config).await?;

    assert_eq!(summary.batch.converted_outputs().len(), 2);
    assert_eq!(summary.batch.missing(), vec!["missing.csv"]);

    let export = summary.export.expect("export should run");
    assert_eq!(export.entries, 3);

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        temp_dir.path().join("data/kanji-furigana.json"),
    )?)?;
    assert_eq!(json["山"], "やま");
    assert_eq!(json["火"], "ひ");

    Ok(())
}

#[tokio::test]
async fn test_katakana_output_naming() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("menu.csv"), "拉麺 ra-men")?;

    let config = TomlConfig::from_toml_str(&format!(
        "[batch]\nbase_path = \"{}\"\nfiles = [\"menu.csv\"]\n\n[output]\nscript = \"katakana\"\n",
        temp_dir.path().to_str().unwrap().replace('\\', "/")
    ))?;

    kana_etl::app::run(&config).await?;

    let output = std::fs::read_to_string(temp_dir.path().join("menu-katakana.csv"))?;
    assert_eq!(output, "拉麺 ラーメン");

    Ok(())
}
