//! Block segmentation and classification.

use log::trace;

/// Opening and closing fence of a code block
pub const CODE_FENCE: &str = "```";

/// Block-level kinds, derived from a block's raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// ATX heading with its level (1-6)
    Heading(u8),
    CodeBlock,
    Quote,
    UnorderedList,
    /// List numbered `1.`, `2.`, ... in order
    OrderedList,
    Paragraph,
}

/// Split a document into trimmed, non-empty blocks separated by blank lines
pub fn to_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a single block. Every block is at least a paragraph.
pub fn classify(block: &str) -> BlockType {
    let block_type = if let Some(level) = heading_level(block) {
        BlockType::Heading(level)
    } else if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        BlockType::CodeBlock
    } else if block.split('\n').all(|line| line.starts_with('>')) {
        BlockType::Quote
    } else if block
        .split('\n')
        .all(|line| line.starts_with("- ") || line.starts_with("* "))
    {
        BlockType::UnorderedList
    } else if is_ordered_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    };

    trace!("classified block as {:?}", block_type);
    block_type
}

/// Number of leading `#` when followed by a space, if between 1 and 6
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) || !block[hashes..].starts_with(' ') {
        return None;
    }
    u8::try_from(hashes).ok()
}

fn is_ordered_list(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(i, line)| line.trim_start().starts_with(&format!("{}. ", i + 1)))
}
