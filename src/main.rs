use clap::Parser;
use heart_risk::utils::{logger, validation::Validate};
use heart_risk::{
    AppConfig, ClassifierHandle, CliConfig, ConsoleDisplay, DisplayFormat, PatientFile,
    RiskEngine, RiskError,
};

fn main() {
    let config = CliConfig::parse();

    let app_config = match load_app_config(&config) {
        Ok(app_config) => app_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code().max(1));
        }
    };

    // 初始化日誌
    if app_config.json_logs() {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting heart-risk");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config, &app_config) {
        tracing::error!(
            "❌ Evaluation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn load_app_config(config: &CliConfig) -> Result<AppConfig, RiskError> {
    let mut app_config = match &config.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    // 應用命令列覆蓋設定
    if let Some(model) = &config.model {
        app_config.model.path = model.clone();
    }
    if config.json {
        app_config.display.format = "json".to_string();
    }

    app_config.validate()?;
    Ok(app_config)
}

fn run(config: &CliConfig, app_config: &AppConfig) -> Result<(), RiskError> {
    let handle = ClassifierHandle::load(app_config.model_path());
    let mut engine = RiskEngine::new(handle);

    let format = if app_config.json_display() {
        DisplayFormat::Json
    } else {
        DisplayFormat::Text
    };
    let mut display = ConsoleDisplay::stdout(format);

    match &config.input {
        Some(path) => engine.run(&PatientFile::new(path), &mut display)?,
        None => engine.run(&config.form, &mut display)?,
    };

    Ok(())
}
