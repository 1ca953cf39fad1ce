//! Convert a markdown document to an element tree

use blockdown_core::Element;
use log::debug;

use crate::block::{classify, to_blocks};
use crate::rules::block_to_element;
use crate::{BlockdownError, Result};

/// Tag of the container wrapping all blocks
pub const ROOT_TAG: &str = "div";

/// Convert a markdown document into a `div` element holding one child per block.
///
/// The first failing block aborts the whole conversion.
pub fn convert(markdown: &str) -> Result<Element> {
    let blocks = to_blocks(markdown);
    debug!("converting {} markdown blocks", blocks.len());

    let children = blocks
        .into_iter()
        .map(|block| block_to_element(block, classify(block)))
        .collect::<Result<Vec<_>>>()?;

    Ok(Element::container(ROOT_TAG, children))
}

/// Convert a markdown document to an HTML string
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(convert(markdown)?.render()?)
}

/// Text of the first `# ` heading line, trimmed
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(BlockdownError::NoTitle)
}
