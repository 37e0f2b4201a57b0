use anyhow::Context;
use clap::Parser;
use user_intake::core::ConfigProvider;
use user_intake::utils::error::ErrorSeverity;
use user_intake::utils::{logger, validation::Validate};
use user_intake::{CliConfig, InputSource, IntakeEngine, IntakeError, OutputTarget, TomlConfig};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting user-intake");
    tracing::debug!("CLI config: {:?}", args);

    let result = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path.display()));
            let config = match config {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ {:#}", e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            execute(apply_overrides(config, &args), &args)
        }
        None => execute(args.clone(), &args),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Intake failed: {} (Category: {:?}, Severity: {:?})",
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
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

/// 命令列參數覆蓋 TOML 設定
fn apply_overrides(mut config: TomlConfig, args: &CliConfig) -> TomlConfig {
    if args.by_name {
        config.set_by_alias(false);
        tracing::info!("🔧 Dumping internal field names");
    }
    if args.pretty {
        config.set_pretty(true);
    }
    if let Some(output) = &args.output {
        config.set_output_path(output.to_string_lossy().into_owned());
    }
    config
}

fn execute<C: ConfigProvider + Validate>(config: C, args: &CliConfig) -> Result<(), IntakeError> {
    config.validate()?;
    tracing::debug!(
        "Effective output: by_alias={}, pretty={}",
        config.by_alias(),
        config.pretty()
    );

    let source = InputSource::from_arg(args.input.as_deref());
    let sink = OutputTarget::from_arg(config.output_path());

    IntakeEngine::new(source, sink, config).run()?;
    tracing::info!("✅ Intake completed successfully!");
    Ok(())
}
