use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, BlockKind};
use crate::config::{ListNumbering, MarkdownOptions};

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6} ").expect("valid heading regex"));
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A```.*```\z").expect("valid code regex"));
static QUOTE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^> ").expect("valid quote regex"));
static UNORDERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s").expect("valid unordered list regex"));
pub(crate) static ORDERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.\s").expect("valid ordered list regex"));

/// Split a document into blocks on runs of blank lines.
///
/// Every line is trimmed; blocks that end up empty are dropped.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush_block(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush_block(&mut current, &mut blocks);

    blocks
}

fn flush_block(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let block = current.join("\n");
    current.clear();
    let block = block.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
}

/// Classify a block with the default options.
pub fn classify_block(block: &str) -> BlockKind {
    classify_block_with_options(block, &MarkdownOptions::default())
}

/// Classify a block. Rules are tried in order and the first match wins.
pub fn classify_block_with_options(block: &str, options: &MarkdownOptions) -> BlockKind {
    if HEADING_RE.is_match(block) {
        let level = block.bytes().take_while(|&b| b == b'#').count();
        return BlockKind::Heading(level as u8);
    }
    if CODE_RE.is_match(block) {
        return BlockKind::Code;
    }
    if block.split('\n').all(|line| QUOTE_LINE_RE.is_match(line)) {
        return BlockKind::Quote;
    }
    if block.split('\n').all(|line| UNORDERED_LINE_RE.is_match(line)) {
        return BlockKind::UnorderedList;
    }
    if is_ordered_list(block, options.ordered_list_numbering) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

fn is_ordered_list(block: &str, numbering: ListNumbering) -> bool {
    let mut expected: u64 = 1;
    for line in block.split('\n') {
        let Some(caps) = ORDERED_LINE_RE.captures(line) else {
            return false;
        };
        if numbering == ListNumbering::Strict {
            match caps[1].parse::<u64>() {
                Ok(n) if n == expected => expected += 1,
                _ => return false,
            }
        }
    }
    true
}

/// Split and classify a document with the default options.
pub fn parse(markdown: &str) -> Vec<Block> {
    parse_with_options(markdown, &MarkdownOptions::default())
}

/// Split a document into blocks and classify each one.
pub fn parse_with_options(markdown: &str, options: &MarkdownOptions) -> Vec<Block> {
    split_blocks(markdown)
        .into_iter()
        .map(|raw| {
            let kind = classify_block_with_options(&raw, options);
            log::debug!("classified block as {kind:?}: {raw:?}");
            Block { kind, raw }
        })
        .collect()
}
