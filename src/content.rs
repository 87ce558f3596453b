use crate::element::Element;
use alloc::borrow::Cow;

/// Content inserted into an element.
///
/// Elements are rendered at the moment they are inserted, so later changes to
/// them are not reflected in the parent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Content<'a> {
    /// Text inserted verbatim.
    Text(Cow<'a, str>),
    /// A nested element.
    Element(Cow<'a, Element>),
}

impl Content<'_> {
    /// Returns `true` if the content renders to an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Element(_) => false,
        }
    }

    /// Renders the content into markup.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_ref()),
            Self::Element(element) => Cow::Owned(element.build()),
        }
    }
}

impl<'a> From<&'a str> for Content<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Content<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Content<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl From<char> for Content<'_> {
    fn from(character: char) -> Self {
        Self::Text(Cow::Owned(character.into()))
    }
}

impl From<Element> for Content<'_> {
    fn from(element: Element) -> Self {
        Self::Element(Cow::Owned(element))
    }
}

impl<'a> From<&'a Element> for Content<'a> {
    fn from(element: &'a Element) -> Self {
        Self::Element(Cow::Borrowed(element))
    }
}

impl<'a> From<&'a mut Element> for Content<'a> {
    fn from(element: &'a mut Element) -> Self {
        Self::Element(Cow::Borrowed(element))
    }
}
