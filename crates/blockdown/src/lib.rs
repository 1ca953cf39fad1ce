//! # blockdown
//!
//! Compile a small markdown dialect to HTML.
//!
//! A document is split into blank-line separated blocks, each block is
//! classified (heading, code block, quote, list, paragraph), its text is split
//! into inline spans (bold, italic, code, links, images) and the result is
//! assembled into a [`blockdown_core::Element`] tree wrapped in one `<div>`.
//!
//! ## Supported syntax
//!
//! - ATX headings `#` to `######`
//! - fenced code blocks opened and closed by three backticks
//! - `>` block quotes
//! - `-` / `*` unordered lists and sequentially numbered `1.` ordered lists
//! - `**bold**`, `*italic*`, `` `code` ``, `[label](url)` and `![alt](url)`
//!
//! Spans do not nest, and delimiters cannot be escaped.
//!
//! ## Example
//!
//! ```rust
//! use blockdown::markdown_to_html;
//!
//! let html = markdown_to_html("This is **bold** and *italic*").unwrap();
//! assert_eq!(html, "<div><p>This is <b>bold</b> and <i>italic</i></p></div>");
//! ```
//!
//! ## Example (page template)
//!
//! ```rust
//! use blockdown::BlockdownService;
//!
//! let service = BlockdownService::new();
//! let page = service
//!     .render_page("# Hello", "<title>{{ Title }}</title>{{ Content }}")
//!     .unwrap();
//! assert_eq!(page, "<title>Hello</title><div><h1>Hello</h1></div>");
//! ```

pub mod block;
mod convert;
pub mod extract;
mod rules;
mod service;
pub mod span;
pub mod split;

pub use blockdown_core::{Element, RenderError};
pub use block::{classify, to_blocks, BlockType};
pub use convert::{convert, extract_title, markdown_to_html, ROOT_TAG};
pub use extract::{extract_images, extract_links};
pub use service::{BlockdownOptions, BlockdownService};
pub use span::{TextKind, TextSpan};
pub use split::{split_by_delimiter, split_by_pattern, text_to_spans};

/// Error type for blockdown operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockdownError {
    #[error("Unbalanced delimiter {delimiter:?} in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("No top-level heading found")]
    NoTitle,

    #[error("Malformed code block: {0:?}")]
    MalformedCodeBlock(String),

    #[error("{kind:?} span has no url")]
    MissingUrl { kind: TextKind },

    #[error("{kind:?} span cannot carry a url")]
    UnexpectedUrl { kind: TextKind },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, BlockdownError>;
