//! One rule per block type.

use blockdown_core::Element;

use super::inline_children;
use crate::block::CODE_FENCE;
use crate::{BlockdownError, Result};

pub(super) fn heading_rule(block: &str, level: u8) -> Result<Element> {
    // `level` hashes plus the space after them
    let text = block.get(usize::from(level) + 1..).unwrap_or("");
    Ok(Element::container(&format!("h{level}"), inline_children(text)?))
}

pub(super) fn code_block_rule(block: &str) -> Result<Element> {
    let code = block
        .strip_prefix(CODE_FENCE)
        .and_then(|rest| rest.strip_suffix(CODE_FENCE))
        .ok_or_else(|| BlockdownError::MalformedCodeBlock(block.to_string()))?;

    let code = Element::container("code", inline_children(code.trim())?);
    Ok(Element::container("pre", vec![code]))
}

pub(super) fn quote_rule(block: &str) -> Result<Element> {
    let text = block
        .split('\n')
        .map(|line| line.trim().strip_prefix('>').unwrap_or(line).trim())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Element::container("blockquote", inline_children(&text)?))
}

pub(super) fn unordered_list_rule(block: &str) -> Result<Element> {
    // "- " and "* " are both two bytes
    list_rule("ul", block, |line| line.get(2..).unwrap_or(""))
}

pub(super) fn ordered_list_rule(block: &str) -> Result<Element> {
    list_rule("ol", block, |line| {
        line.split_once(". ").map_or(line, |(_, item)| item)
    })
}

pub(super) fn paragraph_rule(block: &str) -> Result<Element> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(Element::container("p", inline_children(&text)?))
}

fn list_rule(tag: &str, block: &str, strip_marker: fn(&str) -> &str) -> Result<Element> {
    let items = block
        .split('\n')
        .map(|line| {
            inline_children(strip_marker(line)).map(|children| Element::container("li", children))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Element::container(tag, items))
}
