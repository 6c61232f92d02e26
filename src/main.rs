use clap::Parser;
use shadow_knows::utils::{logger, validation::Validate};
use shadow_knows::{CliConfig, Result, Settings, TaskContext, TaskRegistry, TracingSink};

fn main() {
    let config = CliConfig::parse();

    let settings = match config.validate().and_then(|_| Settings::from_cli(&config)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    logger::init_cli_logger(
        config.verbose,
        settings.log_level.as_deref(),
        settings.log_format,
    );
    tracing::debug!("CLI config: {:?}", config);
    match &settings.resource_dir {
        Some(dir) => tracing::debug!("Reading resources from {}", dir.display()),
        None => tracing::debug!("Using bundled resources"),
    }

    if let Err(e) = run(&config, &settings) {
        tracing::error!(
            "❌ '{}' failed: {} (Category: {:?}, Severity: {:?})",
            config.task,
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }
}

fn run(config: &CliConfig, settings: &Settings) -> Result<()> {
    let registry = TaskRegistry::with_defaults();

    if config.list {
        let tasks = registry.list();
        if config.json {
            let json = serde_json::to_string_pretty(&tasks)?;
            println!("{}", json);
        } else {
            for task in tasks {
                println!("{:<12} [{}] {}", task.name, task.group, task.description);
            }
        }
        return Ok(());
    }

    let resources = settings.resource_source();
    let sink = TracingSink;
    registry.run(&config.task, &TaskContext::new(resources.as_ref(), &sink))
}
