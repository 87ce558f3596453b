use crate::content::Content;
use alloc::collections::BTreeSet;
use core::fmt::{self, Display, Formatter};
use log::trace;

/// Tags rendered as self-closing by default.
pub const DEFAULT_SELF_CLOSERS: &[&str] = &["input", "img", "hr", "br", "meta", "link", "iframe"];

/// An HTML element.
///
/// Every mutation returns the element itself so that calls can be chained.
///
/// ```
/// use html_element::Element;
///
/// let mut heading = Element::new("h2");
/// heading.set("class", "heading-2").set_content("Heading Two");
///
/// assert_eq!(heading.render(), r#"<h2 class="heading-2">Heading Two</h2>"#);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    content: Option<String>,
    self_closers: BTreeSet<String>,
}

impl Element {
    /// Creates an element.
    ///
    /// The tag is trimmed and lower-cased.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase().trim().to_owned(),
            attributes: vec![],
            content: None,
            self_closers: DEFAULT_SELF_CLOSERS
                .iter()
                .copied()
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    /// Creates an element with initial content.
    ///
    /// Empty text leaves the content unset.
    pub fn with_content<'a>(tag: &str, content: impl Into<Content<'a>>) -> Self {
        let mut element = Self::new(tag);
        let content: Content = content.into();

        if !content.is_empty() {
            element.set_content(content);
        }

        element
    }

    /// Returns a tag.
    #[allow(clippy::missing_const_for_fn)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns content, if any has been set.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns tags rendered as self-closing.
    pub fn self_closers(&self) -> impl Iterator<Item = &str> {
        self.self_closers.iter().map(String::as_str)
    }

    /// Returns `true` if the element renders as a self-closing tag.
    pub fn is_self_closing(&self) -> bool {
        self.self_closers.contains(&self.tag)
    }

    /// Registers a tag rendered as self-closing.
    ///
    /// The tag is compared as is, without normalization.
    pub fn add_self_closer(&mut self, tag: impl Into<String>) -> &mut Self {
        let tag = tag.into();

        trace!("registering self-closing tag {tag} on <{}>", self.tag);
        self.self_closers.insert(tag);
        self
    }

    /// Replaces content.
    pub fn set_content<'a>(&mut self, content: impl Into<Content<'a>>) -> &mut Self {
        self.content = Some(String::new());
        self.append_content(content)
    }

    /// Appends content.
    ///
    /// An element is rendered immediately and only its markup is kept.
    pub fn append_content<'a>(&mut self, content: impl Into<Content<'a>>) -> &mut Self {
        let content: Content = content.into();

        self.content
            .get_or_insert_with(String::new)
            .push_str(&content.render());
        self
    }

    /// Gets an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute.
    ///
    /// An existing attribute keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();

        if let Some((_, current)) = self.attributes.iter_mut().find(|(key, _)| *key == name) {
            *current = value;
        } else {
            self.attributes.push((name, value));
        }

        self
    }

    /// Sets an attribute with an empty value.
    pub fn set_empty(&mut self, name: impl Into<String>) -> &mut Self {
        self.set(name, String::new())
    }

    /// Merges attributes.
    ///
    /// Incoming values overwrite existing ones and new names are appended in
    /// iteration order.
    pub fn set_attributes<K: Into<String>, V: Into<String>>(
        &mut self,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self {
        for (name, value) in attributes {
            self.set(name, value);
        }

        self
    }

    /// Removes an attribute.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.attributes.retain(|(key, _)| key != name);
        self
    }

    /// Clears attributes and content.
    pub fn clear(&mut self) -> &mut Self {
        self.attributes.clear();
        self.content = None;
        self
    }

    /// Builds markup.
    pub fn build(&self) -> String {
        let mut string = String::from("<");
        string.push_str(&self.tag);

        for (name, value) in &self.attributes {
            string.push(' ');
            string.push_str(name);
            string.push_str("=\"");
            string.push_str(value);
            string.push('"');
        }

        if self.is_self_closing() {
            string.push_str(" />");
        } else {
            string.push('>');

            if let Some(content) = &self.content {
                string.push_str(content);
            }

            string.push_str("</");
            string.push_str(&self.tag);
            string.push('>');
        }

        string
    }

    /// Renders markup.
    ///
    /// This is equivalent to [`Element::build`].
    pub fn render(&self) -> String {
        self.build()
    }
}

impl Display for Element {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.build())
    }
}
