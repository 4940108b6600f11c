use crate::error::UiError;
use crate::view::node::{Geometry, Node};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct NodeId;
}

/// Arena of nodes. Parents are plain back references, children are owned
/// ordered lists.
#[derive(Debug, Default)]
pub struct NodeTree {
    nodes: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a detached node as a new root.
    pub fn insert(&mut self, mut node: Node) -> NodeId {
        node.parent = None;
        node.children.clear();
        let id = self.nodes.insert(node);
        self.roots.push(id);
        id
    }

    /// Moves `child` to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), UiError> {
        self.require(parent)?;
        self.require(child)?;
        if parent == child || self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(UiError::WouldCycle { parent, child });
        }

        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    /// Removes `id` and its whole subtree, returning the removed root node.
    pub fn remove(&mut self, id: NodeId) -> Result<Node, UiError> {
        self.require(id)?;
        self.detach(id);

        let mut stack = self.nodes[id].children.clone();
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(next) {
                stack.extend(node.children);
            }
        }
        self.nodes.remove(id).ok_or(UiError::UnknownNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Parent first, up to the root. Excludes `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// `id` and every node below it, parents before children.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.contains(id) {
            return out;
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn geometry(&self, id: NodeId) -> Option<&Geometry> {
        self.nodes.get(id).map(Node::geometry)
    }

    pub(crate) fn require(&self, id: NodeId) -> Result<&Node, UiError> {
        self.nodes.get(id).ok_or(UiError::UnknownNode(id))
    }

    pub(crate) fn require_mut(&mut self, id: NodeId) -> Result<&mut Node, UiError> {
        self.nodes.get_mut(id).ok_or(UiError::UnknownNode(id))
    }

    fn detach(&mut self, id: NodeId) {
        match self.nodes.get_mut(id).and_then(|node| node.parent.take()) {
            Some(parent) => {
                if let Some(parent) = self.nodes.get_mut(parent) {
                    parent.children.retain(|child| *child != id);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }
    }
}
