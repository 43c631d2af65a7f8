use certgen::core::ConfigProvider;
use certgen::utils::error::ErrorSeverity;
use certgen::utils::validators::strip_non_digits;
use certgen::utils::{logger, validation::Validate};
use certgen::{CertificateEngine, CliConfig, LocalStorage, SimpleCertificatePipeline};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting certgen CLI");
    tracing::debug!("CPF digits entered: {}", strip_non_digits(&config.cpf).len());

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.list_courses {
        for course in settings.certificate_types() {
            println!("{:<24} {}", course.id, course.label);
        }
        return Ok(());
    }

    let storage = LocalStorage::new(settings.output_path().to_string());
    let pipeline = SimpleCertificatePipeline::new(storage, settings);
    let engine = CertificateEngine::new(pipeline);

    let result = if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        engine.preview(config.request()).await.map(|rendered| {
            format!(
                "{} ({} bytes, not written)",
                rendered.file_name,
                rendered.content.len()
            )
        })
    } else {
        engine.run(config.request()).await
    };

    match result {
        Ok(output) => {
            tracing::info!("✅ Certificate generated successfully!");
            println!("✅ Certificado gerado com sucesso!");
            println!("📁 {}", output);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Certificate generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2, // 輸入錯誤，修正後重試
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3, // 系統錯誤
            };

            std::process::exit(exit_code);
        }
    }

    Ok(())
}
