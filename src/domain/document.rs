//! Document - In-memory page tree
//!
//! A minimal element/text tree with attributes and parent links, enough to
//! express the attribute reads and writes the language toggle performs.

use std::collections::BTreeMap;

use crate::constants::ROOT_TAG;
use crate::error::{Error, Result};

/// Handle to a node inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Node payload
#[derive(Debug, Clone)]
pub enum NodeKind {
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Page document with a single root element
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only the root element
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Element {
                    tag: ROOT_TAG.to_string(),
                    attributes: BTreeMap::new(),
                },
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root element
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    // ==================== Construction ====================

    /// Create a detached element
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
        })
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text { text: text.into() })
    }

    /// Attach `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.is_element(parent) {
            return Err(Error::Invalid {
                message: format!("{parent:?} cannot hold children"),
            });
        }
        let Some(node) = self.nodes.get(child.0) else {
            return Err(Error::Invalid {
                message: format!("unknown node {child:?}"),
            });
        };
        if node.parent.is_some() || child == self.root() {
            return Err(Error::Invalid {
                message: format!("{child:?} is already attached"),
            });
        }
        if self.ancestors(parent).any(|id| id == child) {
            return Err(Error::Invalid {
                message: format!("appending {child:?} to {parent:?} would create a cycle"),
            });
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    // ==================== Attributes ====================

    /// Set an attribute; ignored for text nodes and unknown ids
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(attributes) = self.attributes_mut(node) {
            attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Read an attribute value
    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match self.nodes.get(node.0).map(|n| &n.kind) {
            Some(NodeKind::Element { attributes, .. }) => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    fn attributes_mut(&mut self, node: NodeId) -> Option<&mut BTreeMap<String, String>> {
        match self.nodes.get_mut(node.0).map(|n| &mut n.kind) {
            Some(NodeKind::Element { attributes, .. }) => Some(attributes),
            _ => None,
        }
    }

    // ==================== Queries ====================

    /// Whether `node` exists and is an element
    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(
            self.nodes.get(node.0).map(|n| &n.kind),
            Some(NodeKind::Element { .. })
        )
    }

    /// Node payload
    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.nodes.get(node.0).map(|n| &n.kind)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(node.0).map_or(&[], |n| n.children.as_slice())
    }

    /// `node` followed by each of its ancestors up to the root
    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let start = self.nodes.get(node.0).map(|_| node);
        std::iter::successors(start, |id| self.parent(*id))
    }

    /// Nearest element, starting at `node` itself, that carries `attr`
    pub fn closest(&self, node: NodeId, attr: &str) -> Option<NodeId> {
        self.ancestors(node)
            .filter(|id| self.is_element(*id))
            .find(|id| self.get_attribute(*id, attr).is_some())
    }

    /// First element in document order whose `attr` equals `value`
    pub fn query_first_by_attr(&self, attr: &str, value: &str) -> Option<NodeId> {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if self.get_attribute(id, attr) == Some(value) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }
}
