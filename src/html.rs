use crate::block::{Block, BlockKind, TextKind, TextToken};
use crate::error::Result;
use crate::inline::{text_to_children, token_to_html_node};
use crate::node::HtmlNode;
use crate::parser::ORDERED_LINE_RE;

const FENCE: &str = "```";

/// Convert blocks to a single `div` root node
pub fn blocks_to_html(blocks: &[Block]) -> Result<HtmlNode> {
    let children = blocks
        .iter()
        .map(block_to_html)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("built document with {} blocks", children.len());
    Ok(HtmlNode::parent("div", children))
}

fn block_to_html(block: &Block) -> Result<HtmlNode> {
    let raw = block.raw.as_str();
    match block.kind {
        BlockKind::Paragraph => paragraph_to_html(raw),
        BlockKind::Heading(level) => heading_to_html(raw, level),
        BlockKind::Code => Ok(code_to_html(raw)),
        BlockKind::Quote => quote_to_html(raw),
        BlockKind::UnorderedList => list_to_html(raw, "ul", strip_unordered_marker),
        BlockKind::OrderedList => list_to_html(raw, "ol", strip_ordered_marker),
    }
}

fn paragraph_to_html(raw: &str) -> Result<HtmlNode> {
    let text = raw.replace('\n', " ");
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

fn heading_to_html(raw: &str, level: u8) -> Result<HtmlNode> {
    let text = raw.trim_start_matches('#');
    let text = text.strip_prefix(' ').unwrap_or(text);
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

fn code_to_html(raw: &str) -> HtmlNode {
    let inner = raw.strip_prefix(FENCE).unwrap_or(raw);
    let inner = inner.strip_suffix(FENCE).unwrap_or(inner);
    let mut content = inner.trim().to_string();
    content.push('\n');

    // Code is never inline-tokenized
    let code = token_to_html_node(TextToken::new(content, TextKind::Code));
    HtmlNode::parent("pre", vec![code])
}

fn quote_to_html(raw: &str) -> Result<HtmlNode> {
    let text = raw
        .split('\n')
        .map(|line| {
            line.strip_prefix("> ")
                .or_else(|| line.strip_prefix('>'))
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

fn list_to_html(raw: &str, tag: &str, strip_marker: fn(&str) -> &str) -> Result<HtmlNode> {
    let items = raw
        .split('\n')
        .map(|line| -> Result<HtmlNode> {
            Ok(HtmlNode::parent("li", text_to_children(strip_marker(line))?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent(tag, items))
}

fn strip_unordered_marker(line: &str) -> &str {
    line.strip_prefix("- ").unwrap_or(line)
}

fn strip_ordered_marker(line: &str) -> &str {
    match ORDERED_LINE_RE.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    }
}
