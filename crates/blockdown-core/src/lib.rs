//! blockdown-core - HTML element tree and serialization
//!
//! This crate provides the output data structure of the blockdown markdown
//! compiler: a tree of [`Element`]s that serializes to an HTML string.
//! It is used by `blockdown` (the markdown compiler) and can be used on its
//! own to assemble small HTML fragments.
//!
//! # Architecture
//!
//! ```text
//!                    ┌──────────────┐
//! Markdown Blocks ──▶│ Element Tree │ ──render──▶ HTML String
//!                    └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use blockdown_core::Element;
//!
//! let tree = Element::container(
//!     "p",
//!     vec![
//!         Element::text("This is "),
//!         Element::leaf("b", "bold"),
//!         Element::text(" text."),
//!     ],
//! );
//!
//! let html = tree.render().unwrap();
//! assert_eq!(html, "<p>This is <b>bold</b> text.</p>");
//! ```

mod element;
mod render;
mod utilities;

pub use element::{Attributes, Element};
pub use render::render;
pub use utilities::{is_void, IMAGE_TAG, VOID_ELEMENTS};

/// Error type for element serialization
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Container element has no tag")]
    MissingTag,

    #[error("Container <{tag}> has no children")]
    EmptyChildren { tag: String },

    #[error("Leaf element has no text (tag: {tag:?})")]
    EmptyLeafValue { tag: Option<String> },

    #[error("Void element <{tag}> cannot hold text")]
    VoidLeafText { tag: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
