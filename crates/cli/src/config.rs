use std::{fs, path::Path};

use anyhow::{Context, Result};
use optima::Settings;

use crate::cli::{Command, OptimaCli};

/// Reads settings from a TOML file, or the defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("parse settings file {}", path.display()))
}

pub fn parse_settings(text: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(text)
}

/// Applies command-line overrides on top of file settings.
pub fn apply_flags(mut settings: Settings, cli: &OptimaCli) -> Settings {
    if let Some(tolerance) = cli.tolerance {
        settings.tolerance = tolerance;
    }
    if let Some(ms) = cli.time_limit {
        settings.time_limit_ms = Some(ms);
    }
    if let Some(max_iters) = cli.max_iters {
        match cli.cmd {
            Command::Bisect { .. } => settings.bisection_max_iters = max_iters,
            Command::Golden { .. } => settings.golden_max_iters = max_iters,
            Command::Newton { .. } => settings.newton_max_iters = max_iters,
            Command::Descent { .. } => settings.descent_max_iters = max_iters,
            _ => {}
        }
    }
    if let Command::Descent {
        window: Some(ref window),
        ..
    } = cli.cmd
    {
        if let [low, high] = window[..] {
            settings.window = [low, high];
        }
    }
    settings
}
