use serde::Deserialize;

const DEFAULT_COMMAND_QUEUE_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagingOptions {
    /// Animation used by queued commands that leave it unspecified.
    pub default_animated: bool,
    pub command_queue_capacity: usize,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            default_animated: true,
            command_queue_capacity: DEFAULT_COMMAND_QUEUE_CAPACITY,
        }
    }
}

impl PagingOptions {
    pub fn animated(&self, requested: Option<bool>) -> bool {
        requested.unwrap_or(self.default_animated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options: PagingOptions = toml::from_str("default_animated = false").expect("parse");

        assert!(!options.default_animated);
        assert_eq!(options.command_queue_capacity, DEFAULT_COMMAND_QUEUE_CAPACITY);
        assert!(options.animated(Some(true)));
        assert!(!options.animated(None));
    }
}
