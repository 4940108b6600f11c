use crate::error::UiError;
use crate::layout::{LayoutRegistry, default_layout_registry};
use crate::style::{
    Invalidation, InteractionState, ParsedStyle, Positioning, StyleDescriptor, StyleParser,
    Visibility, compute_style,
};
use crate::view::{Geometry, Interaction, Node, NodeId, NodeTree, UiConfig};
use crate::visual::{DrawRect, VisualRegistry, default_visual_registry};
use glam::Vec2;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Work done by one [`Ui::flush`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameUpdate {
    /// Subtrees that were laid out again, outermost only.
    pub relayout_roots: Vec<NodeId>,
    /// Nodes the host should repaint.
    pub redraw: Vec<NodeId>,
}

impl FrameUpdate {
    pub fn is_empty(&self) -> bool {
        self.relayout_roots.is_empty() && self.redraw.is_empty()
    }
}

/// Owns a node tree together with its engines and invalidation queue.
///
/// Style writes never lay anything out directly. They queue work which
/// [`Ui::flush`] performs once per frame.
pub struct Ui {
    tree: NodeTree,
    layouts: LayoutRegistry,
    visuals: VisualRegistry,
    config: UiConfig,
    pending_relayout: FxHashSet<NodeId>,
    pending_redraw: FxHashSet<NodeId>,
}

impl Ui {
    pub fn new(config: UiConfig) -> Self {
        Self::with_registries(config, default_layout_registry(), default_visual_registry())
    }

    pub fn with_registries(config: UiConfig, layouts: LayoutRegistry, visuals: VisualRegistry) -> Self {
        Self {
            tree: NodeTree::new(),
            layouts,
            visuals,
            config,
            pending_relayout: FxHashSet::default(),
            pending_redraw: FxHashSet::default(),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.tree.node(id)
    }

    pub fn geometry(&self, id: NodeId) -> Option<&Geometry> {
        self.tree.geometry(id)
    }

    pub fn layouts_mut(&mut self) -> &mut LayoutRegistry {
        &mut self.layouts
    }

    pub fn visuals_mut(&mut self) -> &mut VisualRegistry {
        &mut self.visuals
    }

    pub fn has_pending_work(&self) -> bool {
        !self.pending_relayout.is_empty() || !self.pending_redraw.is_empty()
    }

    fn parser(&self) -> StyleParser {
        StyleParser::new().with_warnings(self.config.parse_warnings)
    }

    /// Creates a root node styled by `style` in its normal state.
    pub fn create_node(&mut self, style: &StyleDescriptor) -> Result<NodeId, UiError> {
        let parsed = self.parser().parse(style)?;
        let id = self.tree.insert(Node::with_style(parsed));
        self.pending_relayout.insert(id);
        Ok(id)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), UiError> {
        let previous = self.tree.parent(child);
        self.tree.append_child(parent, child)?;
        if let Some(previous) = previous {
            self.invalidate(previous, Invalidation::RELAYOUT)?;
        }
        self.invalidate(child, Invalidation::all())
    }

    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, UiError> {
        let parent = self.tree.parent(id);
        let node = self.tree.remove(id)?;
        if let Some(parent) = parent {
            self.invalidate(parent, Invalidation::all())?;
        }
        Ok(node)
    }

    /// Replaces the style layer `state` of `id` with `style`.
    ///
    /// A malformed side list fails before anything changes.
    pub fn set_style(
        &mut self,
        id: NodeId,
        state: InteractionState,
        style: &StyleDescriptor,
    ) -> Result<Invalidation, UiError> {
        let parsed = self.parser().parse(style)?;
        let layer = &mut self.tree.require_mut(id)?.styles[state.index()];
        layer.assign(&parsed);
        layer.take_invalidation();
        self.restyle(id)
    }

    /// Edits the style layer `state` of `id` in place.
    pub fn edit_style(
        &mut self,
        id: NodeId,
        state: InteractionState,
        edit: impl FnOnce(&mut ParsedStyle),
    ) -> Result<Invalidation, UiError> {
        let layer = &mut self.tree.require_mut(id)?.styles[state.index()];
        edit(layer);
        layer.take_invalidation();
        self.restyle(id)
    }

    pub fn set_hovered(&mut self, id: NodeId, value: bool) -> Result<Invalidation, UiError> {
        self.set_interaction(id, Interaction::HOVERED, value)
    }

    pub fn set_focused(&mut self, id: NodeId, value: bool) -> Result<Invalidation, UiError> {
        self.set_interaction(id, Interaction::FOCUSED, value)
    }

    pub fn set_pressed(&mut self, id: NodeId, value: bool) -> Result<Invalidation, UiError> {
        self.set_interaction(id, Interaction::PRESSED, value)
    }

    fn set_interaction(
        &mut self,
        id: NodeId,
        flag: Interaction,
        value: bool,
    ) -> Result<Invalidation, UiError> {
        let node = self.tree.require_mut(id)?;
        if node.interaction.contains(flag) == value {
            return Ok(Invalidation::empty());
        }
        node.interaction.set(flag, value);
        self.restyle(id)
    }

    /// Re-merges the layers of `id` and queues whatever the merged style change needs.
    ///
    /// A change that moves an in-flow node's siblings also relays out its
    /// parent, even when the node is a flow root.
    fn restyle(&mut self, id: NodeId) -> Result<Invalidation, UiError> {
        let node = self.tree.require_mut(id)?;
        let previous = node.refresh_current();
        let changed = previous.diff(&node.current);
        let left_flow = previous.positioning() != node.current.positioning();
        let in_flow = node.current.positioning() != Some(Positioning::Absolute);
        let moves_siblings = in_flow && previous.flow_extent_differs(&node.current);

        if left_flow || moves_siblings {
            if let Some(parent) = self.tree.parent(id) {
                self.invalidate(parent, Invalidation::RELAYOUT)?;
            }
        }
        self.invalidate(id, changed)?;
        Ok(changed)
    }

    /// Marks `id` as a boundary for relayout escalation.
    pub fn set_flow_root(&mut self, id: NodeId, value: bool) -> Result<(), UiError> {
        self.tree.require_mut(id)?.flow_root = value;
        Ok(())
    }

    /// The node a relayout of `id` escalates to: `id` itself or its nearest
    /// flow root ancestor.
    pub fn flow_root_of(&self, id: NodeId) -> Option<NodeId> {
        std::iter::once(id)
            .chain(self.tree.ancestors(id))
            .find(|candidate| self.tree.node(*candidate).is_some_and(Node::is_flow_root))
    }

    /// Queues the work `mask` asks for.
    pub fn invalidate(&mut self, id: NodeId, mask: Invalidation) -> Result<(), UiError> {
        self.tree.require(id)?;
        if mask.needs_redraw() {
            self.pending_redraw.insert(id);
        }
        if mask.needs_relayout() {
            let root = self.flow_root_of(id).unwrap_or(id);
            self.pending_relayout.insert(root);
        }
        Ok(())
    }

    /// Updates the host viewport and queues every root for relayout.
    pub fn set_viewport_size(&mut self, size: Vec2) {
        if self.config.viewport == size {
            return;
        }
        self.config.viewport = size;
        self.pending_relayout.extend(self.tree.roots().iter().copied());
    }

    /// Runs the queued relayouts and returns what changed.
    pub fn flush(&mut self) -> FrameUpdate {
        let mut queued: Vec<NodeId> = self
            .pending_relayout
            .drain()
            .filter(|id| self.tree.contains(*id))
            .collect();
        queued.sort();
        let queued_set: FxHashSet<NodeId> = queued.iter().copied().collect();
        let relayout_roots: Vec<NodeId> = queued
            .into_iter()
            .filter(|id| !self.tree.ancestors(*id).any(|ancestor| queued_set.contains(&ancestor)))
            .collect();

        let mut redraw: FxHashSet<NodeId> = self
            .pending_redraw
            .drain()
            .filter(|id| self.tree.contains(*id))
            .collect();
        let viewport = self.config.effective_viewport();
        for id in &redraw {
            self.refresh_computed(*id, viewport);
        }
        for root in &relayout_roots {
            if self.update_layout(*root).is_ok() {
                redraw.extend(self.tree.descendants(*root));
            }
        }
        let mut redraw: Vec<NodeId> = redraw.into_iter().collect();
        redraw.sort();

        debug!(
            relayout = relayout_roots.len(),
            redraw = redraw.len(),
            "flushed invalidation queue"
        );
        FrameUpdate {
            relayout_roots,
            redraw,
        }
    }

    /// Recomputes style, size and position of `id` and everything below it.
    pub fn update_layout(&mut self, id: NodeId) -> Result<(), UiError> {
        self.tree.require(id)?;
        let viewport = self.config.effective_viewport();
        debug!(node = ?id, viewport = ?viewport, "relayout");
        self.compute_node(id, viewport);
        self.layout_subtree(id, viewport);
        Ok(())
    }

    fn parent_content(&self, id: NodeId) -> Vec2 {
        match self.tree.parent(id) {
            Some(parent) => self
                .tree
                .geometry(parent)
                .map_or(Vec2::ZERO, Geometry::content_size),
            None => self.config.root_parent_content(),
        }
    }

    /// Recomputes the style of a node whose geometry is unaffected.
    fn refresh_computed(&mut self, id: NodeId, viewport: Vec2) {
        let parent_content = self.parent_content(id);
        if let Some(node) = self.tree.node_mut(id) {
            compute_style(&mut node.computed, &node.current, viewport, parent_content);
        }
    }

    fn compute_node(&mut self, id: NodeId, viewport: Vec2) {
        let parent_content = self.parent_content(id);
        let Some(node) = self.tree.node_mut(id) else {
            return;
        };
        compute_style(&mut node.computed, &node.current, viewport, parent_content);
        let engine = self.layouts.resolve(node.current.layout().map(|handle| &**handle));
        engine.compute_size(node);
    }

    fn layout_subtree(&mut self, id: NodeId, viewport: Vec2) {
        let children = self.tree.children(id).to_vec();
        for child in &children {
            self.compute_node(*child, viewport);
        }

        let Some(node) = self.tree.node(id) else {
            return;
        };
        let resource = node.current.layout().cloned();
        let engine = self.layouts.resolve(resource.as_deref());
        engine.apply_layout(&mut self.tree, id, resource.as_deref());

        let Some(geometry) = self.tree.geometry(id) else {
            return;
        };
        trace!(
            node = ?id,
            position = ?geometry.position(),
            size = ?geometry.size(),
            content = ?geometry.content_size(),
            "laid out"
        );
        if !geometry.visible() {
            return;
        }
        for child in children {
            let hidden = self
                .tree
                .node(child)
                .is_none_or(|node| node.computed.visibility == Visibility::Hidden);
            if !hidden {
                self.layout_subtree(child, viewport);
            }
        }
    }

    /// Draw commands for every painted node, parents before children.
    pub fn display_list(&self) -> Vec<DrawRect> {
        let mut out = Vec::new();
        for root in self.tree.roots() {
            self.paint_subtree(*root, &mut out);
        }
        out
    }

    fn paint_subtree(&self, id: NodeId, out: &mut Vec<DrawRect>) {
        let Some(node) = self.tree.node(id) else {
            return;
        };
        if !node.geometry.visible() {
            return;
        }
        if node.geometry.painted() {
            let resource = node.current.visual().map(|handle| &**handle);
            self.visuals.resolve(resource).paint(id, node, resource, out);
        }
        for child in &node.children {
            self.paint_subtree(*child, out);
        }
    }
}
