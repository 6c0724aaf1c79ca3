use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::block::{TextKind, TextToken};
use crate::error::{Error, Result};
use crate::node::HtmlNode;

/// Delimiter passes, applied in this order. Each pass only re-splits
/// tokens that are still plain.
const DELIMITERS: [(&str, TextKind); 3] = [
    ("`", TextKind::Code),
    ("**", TextKind::Bold),
    ("_", TextKind::Italic),
];

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image regex"));

// The regex crate has no lookbehind, so a leading `!` is captured and
// such matches are discarded.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link regex"));

/// A `[text](url)` or `![alt](url)` occurrence within a string
struct Markup {
    span: Range<usize>,
    text: String,
    url: String,
}

fn find_images(text: &str) -> Vec<Markup> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Markup {
                span: whole.range(),
                text: caps[1].to_string(),
                url: caps[2].to_string(),
            })
        })
        .collect()
}

fn find_links(text: &str) -> Vec<Markup> {
    LINK_RE
        .captures_iter(text)
        .filter(|caps| caps[1].is_empty())
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Markup {
                span: whole.range(),
                text: caps[2].to_string(),
                url: caps[3].to_string(),
            })
        })
        .collect()
}

/// Extract `(alt, url)` pairs of every markdown image in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Extract `(text, url)` pairs of every markdown link in `text`, skipping images.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Split every plain token on `delimiter`, typing the odd segments as `kind`.
///
/// Segments alternate plain and styled starting and ending with plain, so
/// empty plain tokens appear when a delimiter touches either end. An odd
/// number of delimiters means an unclosed span and fails the whole call.
pub fn split_nodes_delimiter(
    tokens: Vec<TextToken>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextToken>> {
    if delimiter.is_empty() {
        return Ok(tokens);
    }

    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let segments: Vec<&str> = token.text.split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: token.text,
            });
        }
        for (i, segment) in segments.into_iter().enumerate() {
            let segment_kind = if i % 2 == 0 { TextKind::Plain } else { kind };
            out.push(TextToken::new(segment, segment_kind));
        }
    }
    Ok(out)
}

fn split_markup(
    tokens: Vec<TextToken>,
    kind: TextKind,
    find: fn(&str) -> Vec<Markup>,
) -> Vec<TextToken> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let matches = find(&token.text);
        if matches.is_empty() {
            out.push(token);
            continue;
        }

        let mut last = 0;
        for markup in matches {
            let before = &token.text[last..markup.span.start];
            if !before.is_empty() {
                out.push(TextToken::plain(before));
            }
            out.push(TextToken::with_target(markup.text, kind, markup.url));
            last = markup.span.end;
        }
        let rest = &token.text[last..];
        if !rest.is_empty() {
            out.push(TextToken::plain(rest));
        }
    }
    out
}

/// Pull `![alt](url)` images out of plain tokens.
pub fn split_nodes_image(tokens: Vec<TextToken>) -> Vec<TextToken> {
    split_markup(tokens, TextKind::Image, find_images)
}

/// Pull `[text](url)` links out of plain tokens.
pub fn split_nodes_link(tokens: Vec<TextToken>) -> Vec<TextToken> {
    split_markup(tokens, TextKind::Link, find_links)
}

/// Tokenize a span of inline markdown.
pub fn text_to_tokens(text: &str) -> Result<Vec<TextToken>> {
    let mut tokens = vec![TextToken::plain(text)];
    for (delimiter, kind) in DELIMITERS {
        tokens = split_nodes_delimiter(tokens, delimiter, kind)?;
    }
    let tokens = split_nodes_image(tokens);
    Ok(split_nodes_link(tokens))
}

/// Convert one token into the leaf that renders it.
pub fn token_to_html_node(token: TextToken) -> HtmlNode {
    match token.kind {
        TextKind::Plain => HtmlNode::text(token.text),
        TextKind::Bold => HtmlNode::leaf("b", token.text),
        TextKind::Italic => HtmlNode::leaf("i", token.text),
        TextKind::Code => HtmlNode::leaf("code", token.text),
        TextKind::Link => {
            HtmlNode::leaf("a", token.text).with_attribute("href", token.target.unwrap_or_default())
        }
        TextKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", token.target.unwrap_or_default())
            .with_attribute("alt", token.text),
    }
}

/// Tokenize `text` and convert it to leaf nodes, dropping empty plain runs.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(text_to_tokens(text)?
        .into_iter()
        .filter(|token| !(token.is_plain() && token.text.is_empty()))
        .map(token_to_html_node)
        .collect())
}
