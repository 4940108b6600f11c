mod block;
mod flex;

pub use block::*;
pub use flex::*;

use crate::registry::EngineRegistry;
use crate::style::{LayoutResource, Positioning, Visibility};
use crate::view::{Node, NodeId, NodeTree};
use glam::Vec2;

/// Sizes and positions nodes.
///
/// For every node `compute_size` runs before `apply_layout`, and a parent's
/// pass completes before any of its children's.
pub trait LayoutEngine {
    /// Sizes `node` from its computed style.
    fn compute_size(&self, node: &mut Node) {
        compute_box_size(node);
    }

    /// Positions the direct children of `id`. Their sizes are already final.
    fn apply_layout(&self, tree: &mut NodeTree, id: NodeId, resource: Option<&dyn LayoutResource>);
}

pub type LayoutRegistry = EngineRegistry<dyn LayoutEngine>;

/// Block layout by default, flex for [`FlexLayout`] resources.
pub fn default_layout_registry() -> LayoutRegistry {
    let mut registry: LayoutRegistry = EngineRegistry::new(Box::new(BlockLayoutEngine));
    registry.register::<FlexLayout>(Box::new(FlexLayoutEngine));
    registry
}

/// Content box of a node that takes part in layout.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContentFrame {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Applies the node's own visibility and absolute offset.
///
/// Returns `None` when the node is hidden, which also stops positioning of
/// everything below it.
pub(crate) fn place_self(tree: &mut NodeTree, id: NodeId) -> Option<ContentFrame> {
    let node = tree.node_mut(id)?;
    let style = &node.computed;
    node.geometry.set_visibility(style.visibility);
    if style.visibility == Visibility::Hidden {
        return None;
    }
    if style.positioning == Positioning::Absolute {
        node.geometry.set_position(style.position());
    }

    let inset = Vec2::new(
        style.padding.left + style.border_width.left,
        style.padding.top + style.border_width.top,
    );
    Some(ContentFrame {
        origin: node.geometry.position() + inset,
        size: node.geometry.content_size(),
    })
}

/// How a child takes part in its parent's flow.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ChildFlow {
    /// Hidden: no space, no position.
    Skipped,
    /// Out of flow at its own offset.
    Absolute(Vec2),
    InFlow {
        /// Margin box extent.
        outer: Vec2,
        /// Offset of the border box inside the margin box.
        margin: Vec2,
        /// Extra offset of a relative child.
        offset: Vec2,
    },
}

pub(crate) fn child_flow(node: &Node) -> ChildFlow {
    let style = &node.computed;
    if style.visibility == Visibility::Hidden {
        return ChildFlow::Skipped;
    }
    match style.positioning {
        Positioning::Absolute => ChildFlow::Absolute(style.position()),
        positioning => ChildFlow::InFlow {
            outer: node.geometry.size()
                + Vec2::new(style.margin.horizontal(), style.margin.vertical()),
            margin: Vec2::new(style.margin.left, style.margin.top),
            offset: if positioning == Positioning::Relative {
                style.position()
            } else {
                Vec2::ZERO
            },
        },
    }
}

/// Marks hidden children and pins absolute ones. In-flow children are left to
/// the caller.
pub(crate) fn place_out_of_flow(tree: &mut NodeTree, child: NodeId, flow: ChildFlow) {
    let Some(node) = tree.node_mut(child) else {
        return;
    };
    match flow {
        ChildFlow::Skipped => node.geometry.set_visibility(Visibility::Hidden),
        ChildFlow::Absolute(position) => node.geometry.set_position(position),
        ChildFlow::InFlow { .. } => {}
    }
}
