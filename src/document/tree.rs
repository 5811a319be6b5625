//! Tree-document records
//!
//! A tree-document record is the parsed metadata a tree-structured store
//! produces for one stored document: the declared root node kind, the root
//! node itself for structured documents, and for binary roots either the
//! inline payload or the byte range of the payload within a backing
//! container file. The on-disk format parser is an external collaborator;
//! this module only models its output.

use serde::{Deserialize, Serialize};

use super::large_binary::BinaryRef;

/// Node kinds a tree document can declare at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Document,
    Element,
    Attribute,
    Text,
    ProcessingInstruction,
    Comment,
    Namespace,
    Binary,
}

impl NodeKind {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Element => "element",
            NodeKind::Attribute => "attribute",
            NodeKind::Text => "text",
            NodeKind::ProcessingInstruction => "processing-instruction",
            NodeKind::Comment => "comment",
            NodeKind::Namespace => "namespace",
            NodeKind::Binary => "binary",
        }
    }
}

/// A navigable node of a parsed tree document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeNode {
    /// An element with a name, attributes, and child nodes
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<TreeNode>,
    },
    /// A text node
    Text(String),
}

impl TreeNode {
    /// Convenience constructor for an element with no attributes
    pub fn element(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::Element {
            name: name.into(),
            attributes: Vec::new(),
            children,
        }
    }

    /// Convenience constructor for a text node
    pub fn text(text: impl Into<String>) -> Self {
        TreeNode::Text(text.into())
    }

    /// The kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            TreeNode::Element { .. } => NodeKind::Element,
            TreeNode::Text(_) => NodeKind::Text,
        }
    }

    /// Serialize this node to markup text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        match self {
            TreeNode::Text(text) => escape_into(out, text),
            TreeNode::Element {
                name,
                attributes,
                children,
            } => {
                out.push('<');
                out.push_str(name);
                for (key, value) in attributes {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    escape_into(out, value);
                    out.push('"');
                }
                if children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for child in children {
                        child.write_into(out);
                    }
                    out.push_str("</");
                    out.push_str(name);
                    out.push('>');
                }
            }
        }
    }
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

/// Parsed metadata describing one stored document.
///
/// For binary roots the payload is either inline (small binaries unpacked
/// by the parser) or out of line, addressed by byte offset and size within
/// a container file named by a path relative to the forest data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRecord {
    pub(crate) root_kind: NodeKind,
    pub(crate) root: Option<TreeNode>,
    pub(crate) binary_data: Option<Vec<u8>>,
    pub(crate) binary_path: Option<String>,
    pub(crate) binary_offset: u64,
    pub(crate) binary_size: u64,
    pub(crate) binary_orig_len: u64,
}

impl TreeRecord {
    /// A record whose root is a parsed element
    pub fn element(root: TreeNode) -> Self {
        Self {
            root_kind: NodeKind::Element,
            root: Some(root),
            binary_data: None,
            binary_path: None,
            binary_offset: 0,
            binary_size: 0,
            binary_orig_len: 0,
        }
    }

    /// A record whose root is a text node
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            root_kind: NodeKind::Text,
            root: Some(TreeNode::Text(text.into())),
            binary_data: None,
            binary_path: None,
            binary_offset: 0,
            binary_size: 0,
            binary_orig_len: 0,
        }
    }

    /// A binary record whose payload was unpacked inline
    pub fn inline_binary(bytes: Vec<u8>) -> Self {
        Self {
            root_kind: NodeKind::Binary,
            root: None,
            binary_data: Some(bytes),
            binary_path: None,
            binary_offset: 0,
            binary_size: 0,
            binary_orig_len: 0,
        }
    }

    /// A binary record whose payload lives in a container file
    pub fn binary_ref(
        path: impl Into<String>,
        offset: u64,
        size: u64,
        orig_len: u64,
    ) -> Self {
        Self {
            root_kind: NodeKind::Binary,
            root: None,
            binary_data: None,
            binary_path: Some(path.into()),
            binary_offset: offset,
            binary_size: size,
            binary_orig_len: orig_len,
        }
    }

    /// A record of some other root kind (attribute, comment, ...)
    pub fn of_kind(kind: NodeKind) -> Self {
        Self {
            root_kind: kind,
            root: None,
            binary_data: None,
            binary_path: None,
            binary_offset: 0,
            binary_size: 0,
            binary_orig_len: 0,
        }
    }

    /// The declared root node kind
    pub fn root_kind(&self) -> NodeKind {
        self.root_kind
    }

    /// Inline binary payload, if the parser unpacked one
    pub fn binary_data(&self) -> Option<&[u8]> {
        self.binary_data.as_deref()
    }

    /// Descriptor of the out-of-line payload, if this record has one
    pub fn binary(&self) -> Option<BinaryRef> {
        self.binary_path.as_ref().map(|path| BinaryRef {
            path: path.clone(),
            offset: self.binary_offset,
            size: self.binary_size,
            orig_len: self.binary_orig_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node_serialization() {
        let node = TreeNode::text("a < b & c");
        assert_eq!(node.to_text(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_element_serialization() {
        let node = TreeNode::Element {
            name: "doc".to_string(),
            attributes: vec![("lang".to_string(), "en".to_string())],
            children: vec![
                TreeNode::element("empty", vec![]),
                TreeNode::text("body"),
            ],
        };
        assert_eq!(node.to_text(), r#"<doc lang="en"><empty/>body</doc>"#);
    }

    #[test]
    fn test_attribute_value_escaping() {
        let node = TreeNode::Element {
            name: "a".to_string(),
            attributes: vec![("title".to_string(), "say \"hi\"".to_string())],
            children: vec![],
        };
        assert_eq!(node.to_text(), r#"<a title="say &quot;hi&quot;"/>"#);
    }

    #[test]
    fn test_binary_ref_record() {
        let record = TreeRecord::binary_ref("container.bin", 128, 4096, 8192);
        assert_eq!(record.root_kind(), NodeKind::Binary);
        assert!(record.binary_data().is_none());

        let binary = record.binary().unwrap();
        assert_eq!(binary.path, "container.bin");
        assert_eq!(binary.offset, 128);
        assert_eq!(binary.size, 4096);
        assert_eq!(binary.orig_len, 8192);
    }

    #[test]
    fn test_inline_binary_record() {
        let record = TreeRecord::inline_binary(vec![1, 2, 3]);
        assert_eq!(record.binary_data(), Some(&[1u8, 2, 3][..]));
        assert!(record.binary().is_none());
    }
}
