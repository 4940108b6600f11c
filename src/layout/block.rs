use crate::layout::{ChildFlow, LayoutEngine, child_flow, place_out_of_flow, place_self};
use crate::style::{LayoutResource, SizingPolicy};
use crate::view::{Node, NodeId, NodeTree};
use glam::Vec2;
use tracing::trace;

/// Box model shared by every engine.
///
/// The declared size is clamped to `[min, max]` per axis (max wins), then the
/// sizing policy decides how much padding and border it already includes.
/// The content size is always `size - padding - border`.
pub fn compute_box_size(node: &mut Node) {
    let style = &node.computed;
    let clamped = Vec2::new(
        style.width.max(style.min_width).min(style.max_width),
        style.height.max(style.min_height).min(style.max_height),
    );
    let padding = Vec2::new(style.padding.horizontal(), style.padding.vertical());
    let border = Vec2::new(style.border_width.horizontal(), style.border_width.vertical());

    let size = match style.sizing {
        SizingPolicy::Border => clamped,
        SizingPolicy::Padding => clamped + border,
        SizingPolicy::Content => clamped + padding + border,
    };
    node.geometry.set_size(size, padding + border);
    trace!(
        size = ?node.geometry.size(),
        content = ?node.geometry.content_size(),
        "computed box size"
    );
}

/// Stacks in-flow children vertically along the content box's left edge.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockLayoutEngine;

impl LayoutEngine for BlockLayoutEngine {
    fn apply_layout(&self, tree: &mut NodeTree, id: NodeId, _resource: Option<&dyn LayoutResource>) {
        let Some(frame) = place_self(tree, id) else {
            return;
        };

        let mut cursor = frame.origin;
        for child in tree.children(id).to_vec() {
            let Some(node) = tree.node(child) else {
                continue;
            };
            let flow = child_flow(node);
            let ChildFlow::InFlow {
                outer,
                margin,
                offset,
            } = flow
            else {
                place_out_of_flow(tree, child, flow);
                continue;
            };

            if let Some(node) = tree.node_mut(child) {
                node.geometry.set_position(cursor + margin + offset);
            }
            cursor.y += outer.y;
        }
    }
}
