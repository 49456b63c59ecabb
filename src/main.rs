use clap::Parser;
use person_demo::utils::error::{ErrorSeverity, PersonError};
use person_demo::utils::{logger, validation::Validate};
use person_demo::{CliConfig, DemoEngine, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.format.trim().eq_ignore_ascii_case("json") {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting person-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(e);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };

    let clock = settings.clock();
    let engine = DemoEngine::new(&settings.person, clock.as_ref());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = engine.run_to(settings.format, &mut out)?;

    match (&report.error, settings.format) {
        (None, _) => tracing::info!("✅ Person processed successfully"),
        // 文字模式已經印出錯誤行
        (Some(message), OutputFormat::Text) => tracing::debug!("Reported: {}", message),
        (Some(message), OutputFormat::Json) => tracing::warn!("Reported in JSON: {}", message),
    }

    Ok(())
}

fn fail(e: PersonError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
