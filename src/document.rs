//! Host document collaborators.
//!
//! The crate never talks to a concrete design tool. The host implements
//! [`DocumentHost`] to expose the current selection, node children, text-node
//! projections, font acquisition, text commits, and user notifications. The
//! pipeline only ever sees [`TextNodeView`] values built from that trait.

use async_trait::async_trait;

use crate::error::Result;

/// Opaque node handle supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Result of looking up a node's named text style.
///
/// The reference system swallowed style-lookup exceptions; here the failure
/// is a value, and both `Absent` and `Failed` fold to the layer-name
/// heuristic in classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleLookup {
    /// The node references a style with this name.
    Found(String),
    /// The node has no style reference.
    Absent,
    /// The host failed to resolve the style reference.
    Failed,
}

impl StyleLookup {
    /// The style name, when the lookup succeeded.
    pub fn name(&self) -> Option<&str> {
        match self {
            StyleLookup::Found(name) => Some(name),
            StyleLookup::Absent | StyleLookup::Failed => None,
        }
    }
}

/// Read-only projection of one document text node.
///
/// Constructed by the host per traversal step; the pipeline never holds onto
/// one across nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNodeView {
    /// Host-assigned layer name, the classification fallback signal.
    pub layer_name: String,
    /// Named text style lookup, the primary classification signal.
    pub style: StyleLookup,
    /// Current text content.
    pub characters: String,
}

impl TextNodeView {
    /// Create a new text node view.
    pub fn new<L, C>(layer_name: L, style: StyleLookup, characters: C) -> Self
    where
        L: Into<String>,
        C: Into<String>,
    {
        TextNodeView {
            layer_name: layer_name.into(),
            style,
            characters: characters.into(),
        }
    }
}

/// Host-side document access used by the pass driver.
///
/// `load_font` must succeed before `set_characters` is called for the same
/// node; the driver guarantees that ordering. Failures from either abort the
/// remaining pass with no rollback of nodes already committed.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Currently selected root nodes, in selection order.
    fn selection(&self) -> Vec<NodeId>;

    /// Direct children of a node, in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Text projection of a node, or `None` when the node is not a text node.
    fn text_view(&self, node: NodeId) -> Option<TextNodeView>;

    /// Acquire the font resources needed to mutate this node's text.
    async fn load_font(&self, node: NodeId) -> Result<()>;

    /// Replace the node's text content.
    async fn set_characters(&mut self, node: NodeId, text: &str) -> Result<()>;

    /// Show a human-readable status message to the user.
    fn notify(&self, message: &str);
}

/// Collect every text node under `root` in depth-first pre-order.
pub fn collect_text_nodes<H>(host: &H, root: NodeId) -> Vec<NodeId>
where
    H: DocumentHost + ?Sized,
{
    let mut out = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if host.text_view(node).is_some() {
            out.push(node);
        }
        // Reversed so the leftmost child is visited first.
        for child in host.children(node).into_iter().rev() {
            stack.push(child);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct TreeHost {
        children: HashMap<NodeId, Vec<NodeId>>,
        texts: HashMap<NodeId, TextNodeView>,
    }

    #[async_trait]
    impl DocumentHost for TreeHost {
        fn selection(&self) -> Vec<NodeId> {
            vec![NodeId(0)]
        }

        fn children(&self, node: NodeId) -> Vec<NodeId> {
            self.children.get(&node).cloned().unwrap_or_default()
        }

        fn text_view(&self, node: NodeId) -> Option<TextNodeView> {
            self.texts.get(&node).cloned()
        }

        async fn load_font(&self, _node: NodeId) -> Result<()> {
            Ok(())
        }

        async fn set_characters(&mut self, _node: NodeId, _text: &str) -> Result<()> {
            Ok(())
        }

        fn notify(&self, _message: &str) {}
    }

    fn text(name: &str) -> TextNodeView {
        TextNodeView::new(name, StyleLookup::Absent, "x")
    }

    #[test]
    fn test_collect_is_preorder() {
        // 0 -> [1, 4]; 1 -> [2, 3]; only 2, 3, 4 are text nodes.
        let mut children = HashMap::new();
        children.insert(NodeId(0), vec![NodeId(1), NodeId(4)]);
        children.insert(NodeId(1), vec![NodeId(2), NodeId(3)]);

        let mut texts = HashMap::new();
        texts.insert(NodeId(2), text("a"));
        texts.insert(NodeId(3), text("b"));
        texts.insert(NodeId(4), text("c"));

        let host = TreeHost { children, texts };
        let nodes = collect_text_nodes(&host, NodeId(0));

        assert_eq!(nodes, vec![NodeId(2), NodeId(3), NodeId(4)]);
    }

    #[test]
    fn test_collect_includes_text_root() {
        let mut texts = HashMap::new();
        texts.insert(NodeId(7), text("root"));

        let host = TreeHost {
            children: HashMap::new(),
            texts,
        };

        assert_eq!(collect_text_nodes(&host, NodeId(7)), vec![NodeId(7)]);
    }

    #[test]
    fn test_style_lookup_name() {
        assert_eq!(
            StyleLookup::Found("label/medium".to_string()).name(),
            Some("label/medium")
        );
        assert_eq!(StyleLookup::Absent.name(), None);
        assert_eq!(StyleLookup::Failed.name(), None);
    }
}
