use std::{collections::HashMap, fs, path::Path};

use paging_core::PagingOptions;

pub const SETTINGS_FILE: &str = "pager_demo.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub initial_pages: usize,
    pub default_animated: bool,
    pub command_queue_capacity: usize,
    pub log_filter: String,
    pub print_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let options = PagingOptions::default();
        Self {
            initial_pages: 3,
            default_animated: options.default_animated,
            command_queue_capacity: options.command_queue_capacity,
            log_filter: "info".into(),
            print_json: false,
        }
    }
}

impl Settings {
    pub fn options(&self) -> PagingOptions {
        PagingOptions {
            default_animated: self.default_animated,
            command_queue_capacity: self.command_queue_capacity.max(1),
        }
    }

    /// Applies one `key = value` pair; unknown keys and unparsable values are
    /// skipped.
    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "initial_pages" => {
                if let Ok(parsed) = value.parse() {
                    self.initial_pages = parsed;
                }
            }
            "default_animated" => {
                if let Ok(parsed) = value.parse() {
                    self.default_animated = parsed;
                }
            }
            "command_queue_capacity" => {
                if let Ok(parsed) = value.parse() {
                    self.command_queue_capacity = parsed;
                }
            }
            "log_filter" => self.log_filter = value.to_string(),
            "print_json" => {
                if let Ok(parsed) = value.parse() {
                    self.print_json = parsed;
                }
            }
            _ => {}
        }
    }
}

const KEYS: [&str; 5] = [
    "initial_pages",
    "default_animated",
    "command_queue_capacity",
    "log_filter",
    "print_json",
];

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the toml file at `path`, then `PAGER_DEMO_*` and `APP__*`
/// environment variables, later sources winning.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            for (key, value) in &file_cfg {
                match value {
                    toml::Value::String(text) => settings.apply(key, text),
                    other => settings.apply(key, &other.to_string()),
                }
            }
        }
    }

    for key in KEYS {
        let upper = key.to_ascii_uppercase();
        if let Some(v) = env(&format!("PAGER_DEMO_{upper}")) {
            settings.apply(key, &v);
        }
        if let Some(v) = env(&format!("APP__{upper}")) {
            settings.apply(key, &v);
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
