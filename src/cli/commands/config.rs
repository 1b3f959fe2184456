//! Engine config management - init, show

use std::fs;
use std::path::Path;

use crate::cli::app::ConfigAction;
use cartwise::config::EngineConfig;
use cartwise::output::{OperationResult, OutputMode};
use cartwise::paths;

/// Handle config subcommands
pub fn config(
    action: ConfigAction,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init { path, force } => {
            let target = path.unwrap_or_else(paths::user_engine_config);
            init(&target, force, mode)
        },
        ConfigAction::Show => show(config_path, mode),
    }
}

fn init(target: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if target.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Config already exists at {}. Use --force to overwrite.",
                target.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = format!(
        "# cartwise engine config\n\
         # Approximate matches must score below similarity_threshold (0 = identical).\n\
         # Travel cost = distance_km * travel_round_trip_factor * travel_rate_per_km.\n\n{}",
        EngineConfig::default().to_toml()?
    );
    fs::write(target, content)?;

    OperationResult {
        success: true,
        message: format!("Created {}", target.display()),
    }
    .render(mode);
    Ok(())
}

fn show(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = EngineConfig::load(config_path)?;
    match mode {
        OutputMode::Human => print!("{}", config.to_toml()?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
