use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of an inline text token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TextKind::Plain => "plain",
            TextKind::Bold => "bold",
            TextKind::Italic => "italic",
            TextKind::Code => "code",
            TextKind::Link => "link",
            TextKind::Image => "image",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "text" => Ok(TextKind::Plain),
            "bold" => Ok(TextKind::Bold),
            "italic" => Ok(TextKind::Italic),
            "code" => Ok(TextKind::Code),
            "link" => Ok(TextKind::Link),
            "image" => Ok(TextKind::Image),
            other => Err(Error::UnknownTokenKind(other.to_string())),
        }
    }
}

/// A typed run of inline text. `target` holds the URL of links and images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToken {
    pub text: String,
    pub kind: TextKind,
    pub target: Option<String>,
}

impl TextToken {
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Plain)
    }

    pub fn with_target(text: impl Into<String>, kind: TextKind, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            target: Some(target.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }
}

/// Block-level kind, derived from a block's text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A whitespace-normalized piece of the source document and its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub raw: String,
}
