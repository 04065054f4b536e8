use clap::Parser;
use kana_etl::config::toml_config::TomlConfig;
use kana_etl::core::ConfigProvider;
use kana_etl::utils::{logger, validation::Validate};
use kana_etl::OutputNaming;
use std::path::Path;

#[derive(Parser)]
#[command(name = "toml-convert")]
#[command(about = "Romaji to kana conversion driven by a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "kana-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be converted without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based kana conversion");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    match kana_etl::app::run(&config).await {
        Ok(summary) => {
            println!(
                "✅ Converted {} file(s), {} record(s)",
                summary.batch.converted_outputs().len(),
                summary.batch.total_records()
            );
            if !summary.batch.missing().is_empty() {
                println!("⚠️ {} file(s) not found", summary.batch.missing().len());
            }
            if summary.batch.failed_count() > 0 {
                println!("❌ {} file(s) failed", summary.batch.failed_count());
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Batch: {}", config.name());
    println!("  Base path: {}", config.base_path());
    println!("  Files: {}", config.input_files().len());
    println!("  Script: {:?}", config.script());
    println!(
        "  Naming: {:?} ({} -> {})",
        config.naming(),
        config.input_suffix(),
        config.output_suffix()
    );
    println!("  On error: {:?}", config.error_policy());

    if let Some(path) = config.export_path() {
        println!("  Export: {}", path);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    let naming = OutputNaming::new(
        config.input_suffix(),
        config.output_suffix(),
        config.naming(),
    );
    let base = Path::new(config.base_path());

    println!("🔍 Dry Run Analysis:");
    for input in config.input_files() {
        let pair = naming.pair(input);
        if base.join(&pair.input).exists() {
            println!("  ✅ {} -> {}", pair.input, pair.output);
        } else {
            println!("  ⚠️ {} (not found, will be skipped)", pair.input);
        }
    }

    println!();
    println!("✅ Dry run analysis complete.");
}
