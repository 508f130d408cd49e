use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::PipelineConfig;

/// Space, pipe or comma.
pub const DEFAULT_SEPARATORS: &str = " |,";
pub const DEFAULT_MAX_VISIBLE_ITEMS: usize = 4;

static DEFAULT_SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_SEPARATORS).expect("default separator pattern compiles")
});

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid separator pattern {pattern:?}: {source}")]
    InvalidSeparator {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("separator pattern {pattern:?} matches the empty string")]
    EmptySeparator { pattern: String },
    #[error("max_visible_items must be at least 1")]
    ZeroVisibleItems,
}

/// Caller-supplied check applied to every entry of a batch.
pub trait EntryValidator: Send + Sync {
    fn is_valid(&self, entry: &str) -> bool;
}

impl<F> EntryValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, entry: &str) -> bool {
        self(entry)
    }
}

/// Compiled token-boundary pattern.
#[derive(Clone)]
pub struct Separators {
    regex: Regex,
}

impl Separators {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidSeparator {
            pattern: pattern.to_string(),
            source,
        })?;
        // An empty match would split every character apart.
        if regex.is_match("") {
            return Err(ConfigError::EmptySeparator {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn split<'s, 't>(&'s self, text: &'t str) -> regex::Split<'s, 't> {
        self.regex.split(text)
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            regex: DEFAULT_SEPARATOR_REGEX.clone(),
        }
    }
}

impl fmt::Debug for Separators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Separators").field(&self.as_str()).finish()
    }
}

/// Cosmetic labels. None of these change behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayText {
    pub heading: String,
    pub placeholder: String,
    pub enter_button_text: String,
    pub pending_enter_button_text: String,
    pub remove_all_text: String,
    pub remove_one_text: String,
    pub validation_error_message: String,
}

impl Default for DisplayText {
    fn default() -> Self {
        Self {
            heading: "Product code/number".to_string(),
            placeholder: "1 or more codes accepted".to_string(),
            enter_button_text: "Enter".to_string(),
            pending_enter_button_text: "Validating...".to_string(),
            remove_all_text: "Remove all".to_string(),
            remove_one_text: "Delete".to_string(),
            validation_error_message: "Entries need to be valid.".to_string(),
        }
    }
}

/// Serializable form settings, as read from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    pub separators: String,
    pub stop_on_duplicate: bool,
    pub stop_on_max_items_error: bool,
    pub stop_on_validation_error: bool,
    pub max_items: Option<usize>,
    pub async_validation: bool,
    pub max_visible_items: usize,
    pub text: DisplayText,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_string(),
            stop_on_duplicate: false,
            stop_on_max_items_error: false,
            stop_on_validation_error: false,
            max_items: None,
            async_validation: false,
            max_visible_items: DEFAULT_MAX_VISIBLE_ITEMS,
            text: DisplayText::default(),
        }
    }
}

/// Validated configuration for one form instance.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub pipeline: PipelineConfig,
    pub async_validation: bool,
    pub max_visible_items: usize,
    pub text: DisplayText,
}

impl FormConfig {
    pub fn from_settings(
        settings: FormSettings,
        validator: Option<Arc<dyn EntryValidator>>,
    ) -> Result<Self, ConfigError> {
        if settings.max_visible_items == 0 {
            return Err(ConfigError::ZeroVisibleItems);
        }
        let separators = Separators::new(&settings.separators)?;
        Ok(Self {
            pipeline: PipelineConfig {
                separators,
                stop_on_duplicate: settings.stop_on_duplicate,
                max_items: settings.max_items,
                stop_on_max_items_error: settings.stop_on_max_items_error,
                validator,
                stop_on_validation_error: settings.stop_on_validation_error,
            },
            async_validation: settings.async_validation,
            max_visible_items: settings.max_visible_items,
            text: settings.text,
        })
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            async_validation: false,
            max_visible_items: DEFAULT_MAX_VISIBLE_ITEMS,
            text: DisplayText::default(),
        }
    }
}
