use clap::Parser;
use kana_etl::utils::{logger, validation::Validate};
use kana_etl::CliConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting kana-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    match kana_etl::app::run(&config).await {
        Ok(summary) => {
            // 逐檔訊息已由 tracing 輸出，這裡只印總結
            let export_note = summary
                .export
                .map(|export| format!(", {} dictionary entries", export.entries))
                .unwrap_or_default();
            println!(
                "✅ {} converted, {} missing, {} failed, {} records{}",
                summary.batch.converted_outputs().len(),
                summary.batch.missing().len(),
                summary.batch.failed_count(),
                summary.batch.total_records(),
                export_note
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            println!("❌ Batch aborted: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
