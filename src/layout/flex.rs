use crate::layout::{ChildFlow, LayoutEngine, child_flow, place_out_of_flow, place_self};
use crate::style::{LayoutResource, Resource, UnitValue};
use crate::view::{NodeId, NodeTree};
use glam::Vec2;
use std::any::Any;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    /// Wraps, walking the children last to first.
    WrapReverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JustifyContent {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignItems {
    #[default]
    Start,
    Center,
    End,
}

/// Layout resource selecting [`FlexLayoutEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlexLayout {
    pub wrap: FlexWrap,
    pub direction: FlexDirection,
    pub justify: JustifyContent,
    pub align_items: AlignItems,
    /// Stored for authoring, not applied yet.
    pub gap: UnitValue,
}

impl FlexLayout {
    pub const fn new() -> Self {
        Self {
            wrap: FlexWrap::NoWrap,
            direction: FlexDirection::Row,
            justify: JustifyContent::Start,
            align_items: AlignItems::Start,
            gap: UnitValue::AUTO,
        }
    }

    pub const fn wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub const fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    pub const fn justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    pub const fn align_items(mut self, align_items: AlignItems) -> Self {
        self.align_items = align_items;
        self
    }

    pub const fn gap(mut self, gap: UnitValue) -> Self {
        self.gap = gap;
        self
    }
}

impl Resource for FlexLayout {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl LayoutResource for FlexLayout {}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Row,
    Column,
}

impl Axis {
    fn main(self, v: Vec2) -> f32 {
        match self {
            Self::Row => v.x,
            Self::Column => v.y,
        }
    }

    fn cross(self, v: Vec2) -> f32 {
        match self {
            Self::Row => v.y,
            Self::Column => v.x,
        }
    }

    fn compose(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Self::Row => Vec2::new(main, cross),
            Self::Column => Vec2::new(cross, main),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FlexItem {
    id: NodeId,
    /// Margin box extent across the line.
    cross: f32,
    main_offset: f32,
    margin: Vec2,
    offset: Vec2,
}

#[derive(Debug, Default)]
struct FlexLine {
    items: Vec<FlexItem>,
    main: f32,
    cross: f32,
    cross_start: f32,
}

/// Main axis shift of item `index` out of `count` on a line with `available`
/// free space.
pub fn justify_shift(justify: JustifyContent, available: f32, index: usize, count: usize) -> f32 {
    if available <= 0.0 || count == 0 {
        return 0.0;
    }
    let i = index as f32;
    let n = count as f32;
    match justify {
        JustifyContent::Start => 0.0,
        JustifyContent::End => available,
        JustifyContent::Center => available / 2.0,
        JustifyContent::SpaceBetween if count > 1 => available / (n - 1.0) * i,
        JustifyContent::SpaceBetween => 0.0,
        JustifyContent::SpaceAround => available / n * (i + 0.5),
        JustifyContent::SpaceEvenly => available / (n + 1.0) * (i + 1.0),
    }
}

fn align_shift(align: AlignItems, line_cross: f32, item_cross: f32) -> f32 {
    match align {
        AlignItems::Start => 0.0,
        AlignItems::Center => (line_cross - item_cross) / 2.0,
        AlignItems::End => line_cross - item_cross,
    }
}

/// Places children in lines along the main axis, wrapping when allowed, then
/// distributes each line's free space.
///
/// Without a [`FlexLayout`] resource it behaves as an unwrapped start-aligned
/// row.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlexLayoutEngine;

impl FlexLayoutEngine {
    fn collect_lines(tree: &mut NodeTree, id: NodeId, flex: &FlexLayout, axis: Axis, limit: f32) -> Vec<FlexLine> {
        let mut order = tree.children(id).to_vec();
        if flex.wrap == FlexWrap::WrapReverse {
            order.reverse();
        }
        let wraps = flex.wrap != FlexWrap::NoWrap;

        let mut lines = Vec::new();
        let mut current = FlexLine::default();
        for child in order {
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

            let main = axis.main(outer);
            let cross = axis.cross(outer);
            if wraps && !current.items.is_empty() && current.main + main > limit {
                let cross_start = current.cross_start + current.cross;
                lines.push(std::mem::take(&mut current));
                current.cross_start = cross_start;
            }
            current.items.push(FlexItem {
                id: child,
                cross,
                main_offset: current.main,
                margin,
                offset,
            });
            current.main += main;
            current.cross = current.cross.max(cross);
        }
        if !current.items.is_empty() {
            lines.push(current);
        }
        lines
    }
}

impl LayoutEngine for FlexLayoutEngine {
    fn apply_layout(&self, tree: &mut NodeTree, id: NodeId, resource: Option<&dyn LayoutResource>) {
        let Some(frame) = place_self(tree, id) else {
            return;
        };
        let flex = resource
            .and_then(|resource| resource.as_any().downcast_ref::<FlexLayout>())
            .copied()
            .unwrap_or_default();
        let axis = match flex.direction {
            FlexDirection::Row => Axis::Row,
            FlexDirection::Column => Axis::Column,
        };
        let limit = axis.main(frame.size);

        let lines = Self::collect_lines(tree, id, &flex, axis, limit);
        for (index, line) in lines.iter().enumerate() {
            let available = limit - line.main;
            trace!(
                line = index,
                main = line.main,
                cross = line.cross,
                available,
                "flex line"
            );
            let count = line.items.len();
            for (i, item) in line.items.iter().enumerate() {
                let main = item.main_offset + justify_shift(flex.justify, available, i, count);
                let cross = line.cross_start + align_shift(flex.align_items, line.cross, item.cross);
                let position = frame.origin + axis.compose(main, cross) + item.margin + item.offset;
                if let Some(node) = tree.node_mut(item.id) {
                    node.geometry.set_position(position);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AlignItems, FlexDirection, FlexLayout, FlexLayoutEngine, FlexWrap, JustifyContent,
        justify_shift,
    };
    use crate::layout::{LayoutEngine, compute_box_size};
    use crate::style::{BlockLayout, ComputedStyle, Positioning, Visibility};
    use crate::view::{Node, NodeId, NodeTree};
    use glam::Vec2;

    fn sized(width: f32, height: f32) -> ComputedStyle {
        ComputedStyle {
            width,
            height,
            ..ComputedStyle::default()
        }
    }

    fn node_with(style: ComputedStyle) -> Node {
        let mut node = Node::new();
        node.computed = style;
        compute_box_size(&mut node);
        node
    }

    fn container(width: f32, height: f32, children: &[(f32, f32)]) -> (NodeTree, NodeId, Vec<NodeId>) {
        let mut tree = NodeTree::new();
        let root = tree.insert(node_with(sized(width, height)));
        let ids = children
            .iter()
            .map(|&(w, h)| {
                let id = tree.insert(node_with(sized(w, h)));
                tree.append_child(root, id).unwrap();
                id
            })
            .collect();
        (tree, root, ids)
    }

    fn positions(tree: &NodeTree, ids: &[NodeId]) -> Vec<Vec2> {
        ids.iter()
            .map(|id| tree.geometry(*id).unwrap().position())
            .collect()
    }

    #[test]
    fn wrap_starts_a_new_line_when_full() {
        let (mut tree, root, ids) = container(250.0, 300.0, &[(100.0, 40.0); 3]);
        let flex = FlexLayout::new().wrap(FlexWrap::Wrap);
        FlexLayoutEngine.apply_layout(&mut tree, root, Some(&flex));
        assert_eq!(
            positions(&tree, &ids),
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(100.0, 0.0),
                Vec2::new(0.0, 40.0)
            ]
        );
    }

    #[test]
    fn no_wrap_overflows_one_line() {
        let (mut tree, root, ids) = container(250.0, 300.0, &[(100.0, 40.0); 3]);
        FlexLayoutEngine.apply_layout(&mut tree, root, Some(&FlexLayout::new()));
        assert_eq!(positions(&tree, &ids)[2], Vec2::new(200.0, 0.0));
    }

    #[test]
    fn wrap_reverse_walks_children_backwards() {
        let (mut tree, root, ids) = container(250.0, 300.0, &[(100.0, 10.0), (100.0, 20.0), (100.0, 30.0)]);
        let flex = FlexLayout::new().wrap(FlexWrap::WrapReverse);
        FlexLayoutEngine.apply_layout(&mut tree, root, Some(&flex));
        assert_eq!(
            positions(&tree, &ids),
            vec![
                Vec2::new(0.0, 30.0),
                Vec2::new(100.0, 0.0),
                Vec2::new(0.0, 0.0)
            ]
        );
    }

    #[test]
    fn column_swaps_the_axes() {
        let (mut tree, root, ids) = container(300.0, 100.0, &[(20.0, 60.0), (30.0, 60.0), (10.0, 10.0)]);
        let flex = FlexLayout::new()
            .direction(FlexDirection::Column)
            .wrap(FlexWrap::Wrap);
        FlexLayoutEngine.apply_layout(&mut tree, root, Some(&flex));
        assert_eq!(
            positions(&tree, &ids),
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(20.0, 0.0),
                Vec2::new(20.0, 60.0)
            ]
        );
    }

    #[test]
    fn justify_distributes_free_space_per_line() {
        let (mut tree, root, ids) = container(300.0, 100.0, &[(50.0, 10.0); 3]);
        let cases = [
            (JustifyContent::Start, [0.0, 50.0, 100.0]),
            (JustifyContent::End, [150.0, 200.0, 250.0]),
            (JustifyContent::Center, [75.0, 125.0, 175.0]),
            (JustifyContent::SpaceBetween, [0.0, 125.0, 250.0]),
            (JustifyContent::SpaceAround, [25.0, 125.0, 225.0]),
            (JustifyContent::SpaceEvenly, [37.5, 125.0, 212.5]),
        ];
        for (justify, expected) in cases {
            let flex = FlexLayout::new().justify(justify);
            FlexLayoutEngine.apply_layout(&mut tree, root, Some(&flex));
            let xs: Vec<f32> = positions(&tree, &ids).iter().map(|p| p.x).collect();
            assert_eq!(xs, expected, "{justify:?}");
        }
    }

    #[test]
    fn overfull_line_is_not_shifted() {
        assert_eq!(justify_shift(JustifyContent::End, -20.0, 1, 3), 0.0);
        assert_eq!(justify_shift(JustifyContent::SpaceBetween, 0.0, 2, 3), 0.0);
        assert_eq!(justify_shift(JustifyContent::SpaceBetween, 90.0, 0, 1), 0.0);
    }

    #[test]
    fn align_items_positions_within_the_line() {
        let (mut tree, root, ids) = container(300.0, 100.0, &[(50.0, 40.0), (50.0, 10.0)]);
        let flex = FlexLayout::new().align_items(AlignItems::Center);
        FlexLayoutEngine.apply_layout(&mut tree, root, Some(&flex));
        assert_eq!(positions(&tree, &ids)[1], Vec2::new(50.0, 15.0));

        let flex = FlexLayout::new().align_items(AlignItems::End);
        FlexLayoutEngine.apply_layout(&mut tree, root, Some(&flex));
        assert_eq!(positions(&tree, &ids)[1], Vec2::new(50.0, 30.0));
    }

    #[test]
    fn unknown_resource_falls_back_to_a_start_row() {
        let (mut tree, root, ids) = container(150.0, 100.0, &[(100.0, 10.0); 2]);
        FlexLayoutEngine.apply_layout(&mut tree, root, Some(&BlockLayout));
        assert_eq!(
            positions(&tree, &ids),
            vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)]
        );
    }

    #[test]
    fn hidden_children_take_no_space() {
        let mut tree = NodeTree::new();
        let root = tree.insert(node_with(sized(300.0, 100.0)));
        let hidden = tree.insert(node_with(ComputedStyle {
            visibility: Visibility::Hidden,
            ..sized(100.0, 10.0)
        }));
        let shown = tree.insert(node_with(sized(100.0, 10.0)));
        tree.append_child(root, hidden).unwrap();
        tree.append_child(root, shown).unwrap();

        FlexLayoutEngine.apply_layout(&mut tree, root, Some(&FlexLayout::new()));
        assert_eq!(tree.geometry(shown).unwrap().position(), Vec2::ZERO);
        assert!(!tree.geometry(hidden).unwrap().visible());
    }

    #[test]
    fn absolute_children_are_pinned_outside_the_lines() {
        let mut tree = NodeTree::new();
        let root = tree.insert(node_with(sized(300.0, 100.0)));
        let pinned = tree.insert(node_with(ComputedStyle {
            positioning: Positioning::Absolute,
            position_x: 70.0,
            position_y: 80.0,
            ..sized(100.0, 10.0)
        }));
        let first = tree.insert(node_with(sized(50.0, 10.0)));
        let second = tree.insert(node_with(sized(50.0, 10.0)));
        for child in [pinned, first, second] {
            tree.append_child(root, child).unwrap();
        }

        let flex = FlexLayout::new().justify(JustifyContent::End);
        FlexLayoutEngine.apply_layout(&mut tree, root, Some(&flex));
        assert_eq!(
            positions(&tree, &[pinned, first, second]),
            vec![
                Vec2::new(70.0, 80.0),
                Vec2::new(200.0, 0.0),
                Vec2::new(250.0, 0.0)
            ]
        );
    }

    #[test]
    fn relative_offset_applies_after_justify_and_align() {
        let mut tree = NodeTree::new();
        let root = tree.insert(node_with(sized(300.0, 100.0)));
        let tall = tree.insert(node_with(sized(50.0, 40.0)));
        let shifted = tree.insert(node_with(ComputedStyle {
            positioning: Positioning::Relative,
            position_x: 3.0,
            position_y: 4.0,
            ..sized(50.0, 10.0)
        }));
        tree.append_child(root, tall).unwrap();
        tree.append_child(root, shifted).unwrap();

        let flex = FlexLayout::new()
            .justify(JustifyContent::Center)
            .align_items(AlignItems::Center);
        FlexLayoutEngine.apply_layout(&mut tree, root, Some(&flex));
        assert_eq!(
            positions(&tree, &[tall, shifted]),
            vec![Vec2::new(100.0, 0.0), Vec2::new(153.0, 19.0)]
        );
    }
}
