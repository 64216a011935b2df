//! Node tree: immutable, content-hashed UI descriptions.
//!
//! A fresh tree is built on every reactive run. Each node carries a Merkle
//! hash of its type, props and children, so identical subtrees compare equal
//! with a single integer comparison.

mod builder;
mod hash;
pub mod props;

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

pub use builder::{box_node, component, custom, fragment, text, NodeBuilder};
pub use props::{keys, FromPropValue, PropValue, Props};

// =============================================================================
// Component
// =============================================================================

type RenderFn = dyn Fn(&Props, &[Node]) -> Node;

/// A user-defined function component.
#[derive(Clone)]
pub struct Component {
    name: Rc<str>,
    render: Rc<RenderFn>,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        render: impl Fn(&Props, &[Node]) -> Node + 'static,
    ) -> Self {
        Self {
            name: Rc::from(name.into()),
            render: Rc::new(render),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call the render function once.
    pub fn render(&self, props: &Props, children: &[Node]) -> Node {
        (self.render)(props, children)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("name", &self.name).finish()
    }
}

// =============================================================================
// NodeType
// =============================================================================

/// What a node is.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// Flex container.
    Box,
    /// Text leaf; content lives in the `content` prop.
    Text,
    /// Children stacked vertically, no box of its own.
    Fragment,
    /// Leaf type owned by an external widget layer; laid out as a container.
    Custom(String),
    /// Function component, replaced by its output on [`Node::expand`].
    Component(Component),
}

impl NodeType {
    /// Stable tag that feeds the hash.
    pub fn tag(&self) -> Cow<'_, str> {
        match self {
            Self::Box => Cow::Borrowed("box"),
            Self::Text => Cow::Borrowed("text"),
            Self::Fragment => Cow::Borrowed("fragment"),
            Self::Custom(name) => Cow::Owned(format!("custom:{name}")),
            Self::Component(c) => Cow::Owned(format!("component:{}", c.name())),
        }
    }

    pub fn is_component(&self) -> bool {
        matches!(self, Self::Component(_))
    }
}

// =============================================================================
// Node
// =============================================================================

struct NodeData {
    kind: NodeType,
    props: Props,
    children: Vec<Node>,
    hash: u64,
}

/// An immutable node. Clones share the same data.
#[derive(Clone)]
pub struct Node(Rc<NodeData>);

impl Node {
    /// Construct a node; the hash is computed eagerly.
    pub fn new(kind: NodeType, props: Props, children: Vec<Node>) -> Self {
        let hash = hash::node_hash(&kind.tag(), &props, children.iter().map(Node::hash));
        Self(Rc::new(NodeData {
            kind,
            props,
            children,
            hash,
        }))
    }

    pub fn kind(&self) -> &NodeType {
        &self.0.kind
    }

    pub fn props(&self) -> &Props {
        &self.0.props
    }

    pub fn children(&self) -> &[Node] {
        &self.0.children
    }

    pub fn hash(&self) -> u64 {
        self.0.hash
    }

    /// Hash as 16 lowercase hex digits.
    pub fn hash_hex(&self) -> String {
        format!("{:016x}", self.0.hash)
    }

    /// Text content of a text node.
    pub fn content(&self) -> Option<&str> {
        self.0.props.get_str(keys::CONTENT)
    }

    /// Replace every component with its rendered output, recursively.
    ///
    /// Subtrees without components are shared, not rebuilt.
    pub fn expand(&self) -> Node {
        if let NodeType::Component(component) = &self.0.kind {
            return component.render(&self.0.props, &self.0.children).expand();
        }
        let children: Vec<Node> = self.0.children.iter().map(Node::expand).collect();
        let unchanged = children
            .iter()
            .zip(&self.0.children)
            .all(|(new, old)| Rc::ptr_eq(&new.0, &old.0));
        if unchanged {
            return self.clone();
        }
        Node::new(self.0.kind.clone(), self.0.props.clone(), children)
    }

    /// Whether the subtree still contains component nodes.
    pub fn has_components(&self) -> bool {
        self.0.kind.is_component() || self.0.children.iter().any(Node::has_components)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.0.kind)
            .field("props", &self.0.props)
            .field("children", &self.0.children)
            .field("hash", &format_args!("{:016x}", self.0.hash))
            .finish()
    }
}

impl From<NodeBuilder> for Node {
    fn from(builder: NodeBuilder) -> Self {
        builder.build()
    }
}
