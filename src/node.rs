use crate::error::{Error, Result};

/// Ordered attribute list, rendered in insertion order.
pub type Attributes = Vec<(String, String)>;

/// A node of the output HTML tree.
///
/// Leaves carry literal content and never have children; parents only
/// ever render the concatenation of their children. Fields are optional
/// so an invalid node can still be built, and is rejected at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    Parent {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// An untagged leaf, rendered as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Vec::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, replacing the value of an existing key in place.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        let attributes = match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        };
        match attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => attributes.push((key, value)),
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Render this node and its subtree to an HTML string.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value.as_deref().ok_or(Error::MissingValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(tag, attributes, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                let tag = tag.as_deref().ok_or(Error::MissingTag)?;
                let children = children.as_ref().ok_or(Error::MissingChildren)?;
                open_tag(tag, attributes, out);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attributes: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grandchild_tree() -> HtmlNode {
        let grandchild = HtmlNode::leaf("span", "Grandchild").with_attribute("class", "grandchild");
        let child = HtmlNode::parent("p", vec![grandchild]).with_attribute("class", "child");
        HtmlNode::parent("div", vec![child]).with_attribute("class", "parent")
    }

    #[test]
    fn leaf_with_tag() {
        assert_eq!(
            HtmlNode::leaf("p", "Hello, world!").render().unwrap(),
            "<p>Hello, world!</p>"
        );
    }

    #[test]
    fn leaf_with_attributes() {
        let node = HtmlNode::leaf("a", "link tag").with_attribute("href", "https://www.google.com");
        assert_eq!(
            node.render().unwrap(),
            r#"<a href="https://www.google.com">link tag</a>"#
        );
    }

    #[test]
    fn leaf_without_tag_renders_raw_value() {
        assert_eq!(HtmlNode::text("no tag").render().unwrap(), "no tag");
    }

    #[test]
    fn leaf_with_empty_value() {
        assert_eq!(HtmlNode::leaf("b", "").render().unwrap(), "<b></b>");
    }

    #[test]
    fn leaf_without_value_fails() {
        let node = HtmlNode::Leaf {
            tag: Some("p".to_string()),
            value: None,
            attributes: Vec::new(),
        };
        assert!(matches!(node.render(), Err(Error::MissingValue)));
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let node = HtmlNode::leaf("img", "")
            .with_attribute("src", "cat.png")
            .with_attribute("alt", "a cat");
        assert_eq!(
            node.render().unwrap(),
            r#"<img src="cat.png" alt="a cat"></img>"#
        );
    }

    #[test]
    fn repeated_attribute_replaces_value() {
        let node = HtmlNode::leaf("a", "x")
            .with_attribute("href", "one")
            .with_attribute("class", "c")
            .with_attribute("href", "two");
        assert_eq!(node.render().unwrap(), r#"<a href="two" class="c">x</a>"#);
    }

    #[test]
    fn parent_with_nested_children() {
        assert_eq!(
            grandchild_tree().render().unwrap(),
            r#"<div class="parent"><p class="child"><span class="grandchild">Grandchild</span></p></div>"#
        );
    }

    #[test]
    fn parent_with_grandchildren_no_attributes() {
        let node = HtmlNode::parent(
            "div",
            vec![HtmlNode::parent("span", vec![HtmlNode::leaf("b", "grandchild")])],
        );
        assert_eq!(
            node.render().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn parent_with_empty_children() {
        assert_eq!(HtmlNode::parent("div", vec![]).render().unwrap(), "<div></div>");
    }

    #[test]
    fn parent_without_tag_fails() {
        let node = HtmlNode::Parent {
            tag: None,
            children: Some(vec![HtmlNode::text("x")]),
            attributes: Vec::new(),
        };
        assert!(matches!(node.render(), Err(Error::MissingTag)));
    }

    #[test]
    fn parent_without_children_fails() {
        let node = HtmlNode::Parent {
            tag: Some("div".to_string()),
            children: None,
            attributes: Vec::new(),
        };
        assert!(matches!(node.render(), Err(Error::MissingChildren)));
    }

    #[test]
    fn invalid_descendant_fails_whole_render() {
        let broken = HtmlNode::Leaf {
            tag: Some("i".to_string()),
            value: None,
            attributes: Vec::new(),
        };
        let node = HtmlNode::parent("p", vec![HtmlNode::text("ok"), broken]);
        assert!(matches!(node.render(), Err(Error::MissingValue)));
    }

    #[test]
    fn accessors() {
        let node = grandchild_tree();
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(
            node.attributes(),
            &[("class".to_string(), "parent".to_string())]
        );
        assert_eq!(HtmlNode::text("x").tag(), None);
    }
}
