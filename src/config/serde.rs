use super::{Config, error::ConfigError};
use crate::template::ElementTemplate;
use log::debug;
use serde::{Deserialize, Serialize};

/// A serializable configuration.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableConfig {
    #[serde(default)]
    self_closers: Vec<String>,
    element: Option<ElementTemplate>,
}

/// Compiles a configuration.
pub fn compile_config(config: SerializableConfig) -> Result<Config, ConfigError> {
    let element = config.element.ok_or(ConfigError::MissingElement)?;

    element.validate()?;

    debug!(
        "compiled configuration for <{}> with {} extra self-closing tags",
        element.tag(),
        config.self_closers.len()
    );

    Ok(Config::new(config.self_closers, element))
}
