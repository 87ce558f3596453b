mod error;
mod serde;

pub use self::{
    error::ConfigError,
    serde::{SerializableConfig, compile_config},
};
use crate::{element::Element, template::ElementTemplate};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// A configuration describing an element to build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    self_closers: Vec<String>,
    element: ElementTemplate,
}

impl Config {
    /// Creates a configuration.
    pub const fn new(self_closers: Vec<String>, element: ElementTemplate) -> Self {
        Self {
            self_closers,
            element,
        }
    }

    /// Returns self-closing tags applied to every element.
    pub fn self_closers(&self) -> impl Iterator<Item = &str> {
        self.self_closers.iter().map(String::as_str)
    }

    /// Returns a root element template.
    pub const fn element(&self) -> &ElementTemplate {
        &self.element
    }

    /// Builds a root element.
    pub fn build(&self) -> Element {
        self.element.compile(&self.self_closers)
    }
}

/// Parses a TOML configuration.
pub fn parse_config(source: &str) -> Result<Config, ConfigError> {
    compile_config(toml::from_str(source)?)
}

/// Reads a TOML configuration file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    debug!("reading configuration file {}", path.display());

    parse_config(&read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::fs::write;
    use tempfile::tempdir;

    #[test]
    fn build_element() {
        let config = Config::new(
            vec!["foo".into()],
            ElementTemplate::new("div")
                .add_child(ElementTemplate::new("foo"))
                .add_child(ElementTemplate::new("hr")),
        );

        assert_eq!(config.self_closers().collect::<Vec<_>>(), vec!["foo"]);
        assert_eq!(config.element().tag(), "div");
        assert_eq!(config.build().render(), "<div><foo /><hr /></div>");
    }

    #[test]
    fn parse() {
        let config = parse_config(indoc! {r#"
            self_closers = ["foo"]

            [element]
            tag = "div"
            attributes = { id = "main" }

            [[element.children]]
            tag = "foo"
            content = "ignored"
        "#})
        .unwrap();

        assert_eq!(config.build().render(), r#"<div id="main"><foo /></div>"#);
    }

    #[test]
    fn reject_extend() {
        assert!(matches!(
            parse_config(indoc! {r#"
                extend = "base.toml"

                [element]
                tag = "p"
            "#}),
            Err(ConfigError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(matches!(
            parse_config("element = 42\n"),
            Err(ConfigError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn read_file() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("element.toml");

        write(
            &file,
            indoc! {r#"
                [element]
                tag = "H1"
                content = "This is the title"
            "#},
        )
        .unwrap();

        assert_eq!(
            read_config(&file).unwrap().build().render(),
            "<h1>This is the title</h1>"
        );
    }

    #[test]
    fn fail_on_missing_file() {
        let directory = tempdir().unwrap();

        assert!(matches!(
            read_config(&directory.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
