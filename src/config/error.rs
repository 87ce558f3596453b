use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use std::io;

/// A configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// An element template with a blank tag.
    EmptyTag,
    /// A configuration file that cannot be read.
    Io(io::Error),
    /// A configuration without a root element.
    MissingElement,
    /// Malformed TOML or an unknown field.
    TomlDeserialize(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTag => write!(formatter, "element tag must not be empty"),
            Self::Io(error) => write!(formatter, "cannot read configuration: {error}"),
            Self::MissingElement => write!(formatter, "element not defined"),
            Self::TomlDeserialize(error) => write!(formatter, "invalid configuration: {error}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::TomlDeserialize(error) => Some(error),
            Self::EmptyTag | Self::MissingElement => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        Self::TomlDeserialize(error)
    }
}
