//! BlockdownService - the main entry point for markdown to HTML conversion.

use blockdown_core::Element;
use log::debug;

use crate::convert::{convert, extract_title, markdown_to_html};
use crate::Result;

/// Options for BlockdownService
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockdownOptions {
    /// Template marker replaced by the document title
    pub title_placeholder: String,

    /// Template marker replaced by the rendered HTML
    pub content_placeholder: String,
}

impl Default for BlockdownOptions {
    fn default() -> Self {
        Self {
            title_placeholder: "{{ Title }}".to_string(),
            content_placeholder: "{{ Content }}".to_string(),
        }
    }
}

/// The main service for converting markdown to HTML
#[derive(Debug, Clone, Default)]
pub struct BlockdownService {
    options: BlockdownOptions,
}

impl BlockdownService {
    /// Create a new BlockdownService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a BlockdownService with custom options
    pub fn with_options(options: BlockdownOptions) -> Self {
        Self { options }
    }

    /// Convert markdown to an element tree
    pub fn convert(&self, markdown: &str) -> Result<Element> {
        convert(markdown)
    }

    /// Convert markdown to HTML
    pub fn to_html(&self, markdown: &str) -> Result<String> {
        markdown_to_html(markdown)
    }

    /// Title of the document, taken from its first `# ` heading
    pub fn extract_title(&self, markdown: &str) -> Result<String> {
        extract_title(markdown)
    }

    /// Render a full page: the first title and content placeholders in
    /// `template` are replaced by the document title and its HTML.
    pub fn render_page(&self, markdown: &str, template: &str) -> Result<String> {
        let content = self.to_html(markdown)?;
        let title = self.extract_title(markdown)?;
        debug!("rendering page {:?} ({} bytes of HTML)", title, content.len());

        Ok(template
            .replacen(&self.options.title_placeholder, &title, 1)
            .replacen(&self.options.content_placeholder, &content, 1))
    }

    /// Get the current options
    pub fn options(&self) -> &BlockdownOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut BlockdownOptions {
        &mut self.options
    }
}
