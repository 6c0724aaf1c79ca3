mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;
mod site;

pub use block::{Block, BlockKind, TextKind, TextToken};
pub use config::{Config, ConfigError, ListNumbering, MarkdownOptions, SiteConfig};
pub use error::{Error, Result, SiteError};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_children, text_to_tokens, token_to_html_node,
};
pub use node::{Attributes, HtmlNode};
pub use parser::{classify_block, classify_block_with_options, split_blocks};
pub use site::{
    build_site, copy_static, extract_title, generate_page, generate_pages_recursive, render_page,
};

/// Parse markdown text into a vector of classified blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Parse markdown text into classified blocks with custom options.
pub fn parse_with_options(markdown: &str, options: &MarkdownOptions) -> Vec<Block> {
    parser::parse_with_options(markdown, options)
}

/// Convert markdown to an HTML node tree rooted at a `div`.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    markdown_to_html_node_with_options(markdown, &MarkdownOptions::default())
}

/// Convert markdown to an HTML node tree with custom options.
pub fn markdown_to_html_node_with_options(
    markdown: &str,
    options: &MarkdownOptions,
) -> Result<HtmlNode> {
    let blocks = parse_with_options(markdown, options);
    html::blocks_to_html(&blocks)
}

/// Convert markdown to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_with_options(markdown, &MarkdownOptions::default())
}

/// Convert markdown to an HTML string with custom options.
pub fn markdown_to_html_with_options(markdown: &str, options: &MarkdownOptions) -> Result<String> {
    markdown_to_html_node_with_options(markdown, options)?.render()
}
