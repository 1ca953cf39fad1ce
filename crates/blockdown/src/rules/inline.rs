//! Span to leaf element conversion.

use blockdown_core::{Element, IMAGE_TAG};

use crate::span::{TextKind, TextSpan};
use crate::{BlockdownError, Result};

/// Convert a span into its leaf element.
///
/// Images become void `img` leaves with `src` then `alt` attributes.
pub fn span_to_element(span: TextSpan) -> Result<Element> {
    let TextSpan { text, kind, url } = span;
    if url.is_some() && !kind.has_url() {
        return Err(BlockdownError::UnexpectedUrl { kind });
    }

    let element = match kind {
        TextKind::Plain => Element::text(text),
        TextKind::Bold => Element::leaf("b", text),
        TextKind::Italic => Element::leaf("i", text),
        TextKind::Code => Element::leaf("code", text),
        TextKind::Link => {
            let href = url.ok_or(BlockdownError::MissingUrl { kind })?;
            Element::leaf("a", text).with_attr("href", href)
        }
        TextKind::Image => {
            let src = url.ok_or(BlockdownError::MissingUrl { kind })?;
            Element::leaf(IMAGE_TAG, "")
                .with_attr("src", src)
                .with_attr("alt", text)
        }
    };

    Ok(element)
}
