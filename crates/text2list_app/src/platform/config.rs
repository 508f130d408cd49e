use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use form_logging::form_info;
use serde::{Deserialize, Serialize};
use text2list_core::{EntryValidator, FormConfig, FormSettings};

use super::logging::LogDestination;

/// Everything the terminal host reads from its RON config file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub form: FormSettings,
    /// Accept only entries shorter than this many characters.
    pub max_entry_len: Option<usize>,
    pub log_destination: LogDestination,
    pub verbose: bool,
}

/// Loads the config at `path`, or defaults when no path was given.
pub(crate) fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {:?}", path))?;
    let config: AppConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config from {:?}", path))?;
    Ok(config)
}

pub(crate) fn build_form_config(config: &AppConfig) -> anyhow::Result<FormConfig> {
    let validator = config.max_entry_len.map(|max_len| {
        form_info!("entries must be shorter than {} characters", max_len);
        let validator: Arc<dyn EntryValidator> =
            Arc::new(move |entry: &str| entry.chars().count() < max_len);
        validator
    });
    FormConfig::from_settings(config.form.clone(), validator).context("invalid form settings")
}
