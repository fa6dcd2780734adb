//! Element tree model for the Embiggen shorthand compiler.
//!
//! One parsed input line becomes one [`Tree`]: an anonymous root element
//! whose children are the top-level elements of the line.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, so the parent back-reference needed by the line parser's
//! ascend operation is a plain index rather than an owning pointer.
//!
//! An element's content is the explicit tri-state [`Content`] enum instead
//! of an ad-hoc node list. This makes the placeholder invariant
//! type-checkable: a node is in the placeholder state ([`Content::Empty`])
//! exactly until real content arrives, and [`Tree::append_child`] consumes
//! the placeholder on the first append.

use std::collections::HashMap;

use serde::Serialize;

pub mod tags;

/// Map of attribute names to values for an element.
///
/// Insertion order is irrelevant; the renderer sorts attribute names
/// lexicographically before emitting them.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the element tree arena.
///
/// Provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The anonymous root element is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// Element-specific data: a tag name and an attribute map.
///
/// The anonymous root element uses an empty `tag_name` and is never
/// rendered as a tag itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementData {
    /// The element's tag name, e.g. `div` or `img`.
    pub tag_name: String,
    /// The element's attribute list.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with the given tag name and no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
        }
    }

    /// Returns the element's `id` attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&String> {
        self.attrs.get("id")
    }
}

/// What an element contains.
///
/// The three states correspond to the three ways a shorthand descriptor can
/// leave an element: nothing decided yet, literal braced text, or real
/// child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Content {
    /// The placeholder state: no braced content was given and no children
    /// have been attached yet. Renders like a single empty text child.
    Empty,

    /// Literal text content from a `{...}` group, outer whitespace trimmed.
    Text(String),

    /// Child nodes, in document order. The vector may be empty (void tags
    /// and explicit empty braces), which renders as a self-closing tag.
    Children(Vec<NodeId>),
}

impl Content {
    /// Number of children this content renders as.
    ///
    /// [`Content::Empty`] counts as one (the implicit empty text child),
    /// matching how the renderer decides between the inline and block
    /// layouts.
    #[must_use]
    pub fn child_count(&self) -> usize {
        match self {
            Self::Empty | Self::Text(_) => 1,
            Self::Children(children) => children.len(),
        }
    }
}

/// The two kinds of node the arena stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// An element with attributes and content.
    Element {
        /// Tag name and attributes.
        data: ElementData,
        /// The element's tri-state content.
        content: Content,
    },

    /// A literal text leaf.
    ///
    /// Arena text nodes only exist for mixed content: when a child element
    /// is appended to a node currently holding [`Content::Text`], the text
    /// is materialized as the first arena child so both survive.
    Text(String),
}

/// One node in the tree: its kind plus a non-owning parent link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Element or text payload.
    pub kind: NodeKind,
    /// Parent index, used only for upward cursor movement during parsing.
    /// `None` for the root and for nodes not yet attached.
    pub parent: Option<NodeId>,
}

/// Arena-based element tree rooted at one anonymous element.
///
/// All nodes live in a contiguous vector indexed by [`NodeId`]; ownership
/// flows strictly parent to child through [`Content::Children`], while the
/// parent back-reference is a plain index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    /// All nodes in the tree. The anonymous root is always at index 0.
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a new tree containing just the anonymous root element.
    ///
    /// The root starts with an empty child list (never a placeholder): it
    /// exists only to collect the top-level elements of one line.
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            kind: NodeKind::Element {
                data: ElementData::new(""),
                content: Content::Children(Vec::new()),
            },
            parent: None,
        };
        Tree { nodes: vec![root] }
    }

    /// Get the root node ID.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the arena (the root included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty (never true for a constructed tree).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new element node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc_element(&mut self, data: ElementData, content: Content) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::Element { data, content },
            parent: None,
        });
        id
    }

    /// Allocate a new text node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc_text(&mut self, data: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::Text(data),
            parent: None,
        });
        id
    }

    /// Append `child` as the last child of `parent`, updating the parent
    /// link and transitioning the parent's content state:
    ///
    /// - [`Content::Empty`] becomes `Children([child])`: the placeholder
    ///   is consumed by the first real child.
    /// - [`Content::Text`] is materialized as an arena text node first, so
    ///   existing literal content is kept ahead of the new child.
    /// - [`Content::Children`] simply grows.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is a text node or if either ID is out of bounds,
    /// which indicates a bug in the caller.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        // Materialize sole text content before taking the mutable borrow of
        // the parent slot below.
        let text_id = match self.content(parent) {
            Some(Content::Text(data)) => {
                let data = data.clone();
                let id = self.alloc_text(data);
                self.nodes[id.0].parent = Some(parent);
                Some(id)
            }
            _ => None,
        };

        self.nodes[child.0].parent = Some(parent);

        let NodeKind::Element { content, .. } = &mut self.nodes[parent.0].kind else {
            panic!("append_child called on a text node");
        };
        match content {
            Content::Empty => *content = Content::Children(vec![child]),
            Content::Text(_) => {
                let text_id = text_id.expect("text content materialized above");
                *content = Content::Children(vec![text_id, child]);
            }
            Content::Children(children) => children.push(child),
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get an element's content, or `None` for text nodes and bad IDs.
    #[must_use]
    pub fn content(&self, id: NodeId) -> Option<&Content> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Element { content, .. } => Some(content),
            NodeKind::Text(_) => None,
        })
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Element { data, .. } => Some(data),
            NodeKind::Text(_) => None,
        })
    }

    /// Get text content if this node is an arena text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Text(data) => Some(data.as_str()),
            NodeKind::Element { .. } => None,
        })
    }

    /// The top-level elements of the line: the root's children.
    #[must_use]
    pub fn top_level(&self) -> &[NodeId] {
        match self.content(NodeId::ROOT) {
            Some(Content::Children(children)) => children,
            // The root is constructed with Children and only ever grows.
            _ => &[],
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Print an indented debug view of the tree to stdout.
///
/// Elements show their tag and attributes, bare attribute names standing in
/// for empty values; text shows with spaces made visible. This is a debug
/// aid for the CLI's dump mode, not the HTML renderer.
pub fn print_tree(tree: &Tree, id: NodeId, depth: usize) {
    let prefix = "  ".repeat(depth);
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.kind {
        NodeKind::Element { data, content } => {
            if data.tag_name.is_empty() {
                println!("{prefix}Root");
            } else if data.attrs.is_empty() {
                println!("{prefix}<{}>", data.tag_name);
            } else {
                let mut attrs: Vec<String> = data
                    .attrs
                    .iter()
                    .map(|(k, v)| {
                        if v.is_empty() {
                            k.clone()
                        } else {
                            format!("{k}=\"{v}\"")
                        }
                    })
                    .collect();
                attrs.sort();
                println!("{prefix}<{} {}>", data.tag_name, attrs.join(" "));
            }
            match content {
                Content::Empty => {}
                Content::Text(data) => print_text(data, depth + 1),
                Content::Children(children) => {
                    for &child in children {
                        print_tree(tree, child, depth + 1);
                    }
                }
            }
        }
        NodeKind::Text(data) => print_text(data, depth),
    }
}

/// Print one text payload with whitespace made visible.
fn print_text(data: &str, depth: usize) {
    let prefix = "  ".repeat(depth);
    let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
    println!("{prefix}\"{display}\"");
}
