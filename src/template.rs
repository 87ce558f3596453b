use crate::{config::ConfigError, element::Element};
use serde::{Deserialize, Serialize};
use toml::{Table, Value};

/// A serializable description of an element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementTemplate {
    tag: String,
    #[serde(default)]
    attributes: Table,
    content: Option<String>,
    #[serde(default)]
    children: Vec<ElementTemplate>,
    #[serde(default)]
    self_closers: Vec<String>,
}

impl ElementTemplate {
    /// Creates an element template.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Returns a tag.
    #[allow(clippy::missing_const_for_fn)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns child templates.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }

    /// Sets an attribute.
    pub fn set_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into(), Value::String(value.into()));
        self
    }

    /// Sets content.
    pub fn set_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Adds a child template.
    pub fn add_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Adds a self-closing tag.
    pub fn add_self_closer(mut self, tag: impl Into<String>) -> Self {
        self.self_closers.push(tag.into());
        self
    }

    /// Compiles the template into an element.
    ///
    /// Children are rendered in order after the content.
    pub fn compile(&self, self_closers: &[String]) -> Element {
        let mut element = Element::new(&self.tag);

        for tag in self_closers.iter().chain(&self.self_closers) {
            element.add_self_closer(tag.as_str());
        }

        element.set_attributes(
            self.attributes
                .iter()
                .map(|(name, value)| (name.as_str(), attribute_value(value))),
        );

        if let Some(content) = &self.content {
            element.set_content(content);
        }

        for child in &self.children {
            element.append_content(child.compile(self_closers));
        }

        element
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.tag.trim().is_empty() {
            return Err(ConfigError::EmptyTag);
        }

        self.children.iter().try_for_each(Self::validate)
    }
}

fn attribute_value(value: &Value) -> String {
    match value {
        Value::String(string) => string.clone(),
        value => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn compile_template() {
        assert_eq!(
            ElementTemplate::new("H2")
                .set_attribute("class", "heading-2")
                .set_content("Heading Two")
                .compile(&[])
                .render(),
            r#"<h2 class="heading-2">Heading Two</h2>"#
        );
    }

    #[test]
    fn compile_children_after_content() {
        let element = ElementTemplate::new("p")
            .set_content("foo")
            .add_child(ElementTemplate::new("span").set_content("bar"))
            .add_child(ElementTemplate::new("br"))
            .compile(&[]);

        assert_eq!(element.render(), "<p>foo<span>bar</span><br /></p>");
    }

    #[test]
    fn compile_self_closers() {
        let element = ElementTemplate::new("div")
            .add_self_closer("bar")
            .add_child(ElementTemplate::new("foo"))
            .add_child(ElementTemplate::new("bar"))
            .compile(&["foo".into()]);

        assert_eq!(element.render(), "<div><foo /><bar></bar></div>");
    }

    #[test]
    fn deserialize_template() {
        let template = toml::from_str::<ElementTemplate>(indoc! {r#"
            tag = "a"
            content = "Home"
            attributes = { href = "/", title = "Home page", tabindex = 1, hidden = false }
        "#})
        .unwrap();

        assert_snapshot!(
            template.compile(&[]).render(),
            @r#"<a href="/" title="Home page" tabindex="1" hidden="false">Home</a>"#
        );
    }

    #[test]
    fn deserialize_nested_template() {
        let template = toml::from_str::<ElementTemplate>(indoc! {r#"
            tag = "ul"
            attributes = { class = "menu" }

            [[children]]
            tag = "li"
            content = "foo"

            [[children]]
            tag = "li"
            content = "bar"
        "#})
        .unwrap();

        assert_eq!(template.children().count(), 2);
        assert_snapshot!(
            template.compile(&[]).render(),
            @r#"<ul class="menu"><li>foo</li><li>bar</li></ul>"#
        );
    }

    #[test]
    fn reject_unknown_field() {
        assert!(toml::from_str::<ElementTemplate>("tag = \"a\"\nfoo = 1").is_err());
    }

    #[test]
    fn validate_empty_tag() {
        assert!(ElementTemplate::new("p").validate().is_ok());
        assert!(matches!(
            ElementTemplate::new(" ").validate(),
            Err(ConfigError::EmptyTag)
        ));
        assert!(matches!(
            ElementTemplate::new("p")
                .add_child(ElementTemplate::new(""))
                .validate(),
            Err(ConfigError::EmptyTag)
        ));
    }
}
