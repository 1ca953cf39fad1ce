//! Element tree serialization
//!
//! Converts an element tree into an HTML string. Text and attribute values
//! are emitted verbatim.

use crate::element::{Attributes, Element};
use crate::utilities::{is_void, IMAGE_TAG};
use crate::{RenderError, Result};

/// Serialize an element tree to an HTML string
pub fn render(element: &Element) -> Result<String> {
    let mut output = String::with_capacity(1024);
    render_element(element, &mut output)?;
    Ok(output)
}

fn render_element(element: &Element, out: &mut String) -> Result<()> {
    match element {
        Element::Leaf {
            tag,
            text,
            attributes,
        } => render_leaf(tag.as_deref(), text, attributes, out),

        Element::Container {
            tag,
            children,
            attributes,
        } => render_container(tag, children, attributes, out),
    }
}

fn render_leaf(
    tag: Option<&str>,
    text: &str,
    attributes: &Attributes,
    out: &mut String,
) -> Result<()> {
    let tag = tag.filter(|t| !t.is_empty());

    match tag {
        // An image carries its alt text and source in attributes
        Some(tag) if tag == IMAGE_TAG && text.is_empty() => {
            open_tag(tag, attributes, out);
            return Ok(());
        }
        Some(tag) if is_void(tag) && !text.is_empty() => {
            return Err(RenderError::VoidLeafText {
                tag: tag.to_string(),
            });
        }
        _ => {}
    }

    if text.is_empty() {
        return Err(RenderError::EmptyLeafValue {
            tag: tag.map(str::to_string),
        });
    }

    match tag {
        None => out.push_str(text),
        Some(tag) => {
            open_tag(tag, attributes, out);
            out.push_str(text);
            close_tag(tag, out);
        }
    }

    Ok(())
}

fn render_container(
    tag: &str,
    children: &[Element],
    attributes: &Attributes,
    out: &mut String,
) -> Result<()> {
    if tag.is_empty() {
        return Err(RenderError::MissingTag);
    }
    if children.is_empty() {
        return Err(RenderError::EmptyChildren {
            tag: tag.to_string(),
        });
    }

    open_tag(tag, attributes, out);
    for child in children {
        render_element(child, out)?;
    }
    close_tag(tag, out);

    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    render_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn render_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
