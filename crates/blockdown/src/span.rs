//! Inline text spans.
//!
//! A span is a run of inline text tagged with exactly one style. Spans are
//! produced by [`crate::split`] and consumed by the block rules.

use crate::{BlockdownError, Result};

/// Inline span kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextKind {
    /// Whether spans of this kind carry a url
    pub fn has_url(self) -> bool {
        matches!(self, TextKind::Link | TextKind::Image)
    }
}

/// A run of inline text with a single style.
///
/// `url` is set exactly for [`TextKind::Link`] and [`TextKind::Image`] spans;
/// for images `text` holds the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: TextKind,
    pub url: Option<String>,
}

impl TextSpan {
    /// Create an unstyled span
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TextKind::Plain,
            url: None,
        }
    }

    /// Create a span of a kind without a url; fails for links and images
    pub fn styled(text: impl Into<String>, kind: TextKind) -> Result<Self> {
        if kind.has_url() {
            return Err(BlockdownError::MissingUrl { kind });
        }
        Ok(Self {
            text: text.into(),
            kind,
            url: None,
        })
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(text, TextKind::Link, url)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(alt, TextKind::Image, url)
    }

    fn with_url(text: impl Into<String>, kind: TextKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold(text: &str) -> TextSpan {
        TextSpan::styled(text, TextKind::Bold).unwrap()
    }

    #[test]
    fn test_equality_compares_all_fields() {
        assert_eq!(TextSpan::plain("a"), TextSpan::plain("a"));
        assert_ne!(TextSpan::plain("a"), bold("a"));
        assert_ne!(TextSpan::link("a", "x"), TextSpan::link("a", "y"));
        assert_ne!(TextSpan::link("a", "x"), TextSpan::image("a", "x"));
    }

    #[test]
    fn test_url_only_on_link_and_image() {
        assert_eq!(TextSpan::plain("text").url, None);
        assert_eq!(bold("strong").url, None);
        assert_eq!(TextSpan::image("alt", "cat.png").url.as_deref(), Some("cat.png"));
        assert!(TextKind::Link.has_url());
        assert!(!TextKind::Italic.has_url());
    }

    #[test]
    fn test_styled_rejects_url_kinds() {
        for kind in [TextKind::Link, TextKind::Image] {
            assert_eq!(
                TextSpan::styled("x", kind).unwrap_err(),
                BlockdownError::MissingUrl { kind }
            );
        }
    }
}
