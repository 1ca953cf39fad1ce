//! Rules turning classified blocks into element subtrees.

mod inline;
mod markdown;

pub use inline::span_to_element;

use blockdown_core::Element;

use crate::block::BlockType;
use crate::split::text_to_spans;
use crate::Result;

/// Build the element subtree for one block
pub fn block_to_element(block: &str, block_type: BlockType) -> Result<Element> {
    match block_type {
        BlockType::Heading(level) => markdown::heading_rule(block, level),
        BlockType::CodeBlock => markdown::code_block_rule(block),
        BlockType::Quote => markdown::quote_rule(block),
        BlockType::UnorderedList => markdown::unordered_list_rule(block),
        BlockType::OrderedList => markdown::ordered_list_rule(block),
        BlockType::Paragraph => markdown::paragraph_rule(block),
    }
}

/// Split inline text into spans and convert each to a leaf element
fn inline_children(text: &str) -> Result<Vec<Element>> {
    text_to_spans(text)?
        .into_iter()
        .map(span_to_element)
        .collect()
}
