use crate::style::{
    ComputedStyle, InteractionState, ParsedStyle, Positioning, Visibility, merge_states,
};
use crate::view::NodeId;
use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Live interaction toggles of a node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Interaction: u8 {
        const HOVERED = 1 << 0;
        const FOCUSED = 1 << 1;
        const PRESSED = 1 << 2;
    }
}

impl Interaction {
    /// Whether the style layer of `state` is active. Normal always is.
    pub const fn is_active(self, state: InteractionState) -> bool {
        match state {
            InteractionState::Normal => true,
            InteractionState::Hover => self.contains(Self::HOVERED),
            InteractionState::Focus => self.contains(Self::FOCUSED),
            InteractionState::Pressed => self.contains(Self::PRESSED),
        }
    }
}

/// Layout output of a node. Written only by layout engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    size: Vec2,
    content_size: Vec2,
    position: Vec2,
    visible: bool,
    painted: bool,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            size: Vec2::ZERO,
            content_size: Vec2::ZERO,
            position: Vec2::ZERO,
            visible: true,
            painted: true,
        }
    }
}

impl Geometry {
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Always within `[0, size]`.
    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    /// Global position of the border box.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn painted(&self) -> bool {
        self.painted
    }

    /// Stores `size` and derives the content size by removing `insets`, the
    /// summed padding and border per axis.
    pub(crate) fn set_size(&mut self, size: Vec2, insets: Vec2) {
        let size = size.max(Vec2::ZERO);
        self.size = size;
        self.content_size = (size - insets).max(Vec2::ZERO).min(size);
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visible = visibility != Visibility::Hidden;
        self.painted = visibility == Visibility::Visible;
    }
}

/// One element of the tree: its per-state styles, the merged style, the
/// computed style and the layout output.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub(crate) styles: [ParsedStyle; 4],
    pub(crate) current: ParsedStyle,
    pub(crate) computed: ComputedStyle,
    pub(crate) geometry: Geometry,
    pub(crate) interaction: Interaction,
    pub(crate) flow_root: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: ParsedStyle) -> Self {
        let mut node = Self::default();
        node.styles[InteractionState::Normal.index()] = style;
        node.refresh_current();
        node
    }

    pub fn style(&self, state: InteractionState) -> &ParsedStyle {
        &self.styles[state.index()]
    }

    /// The merged style of the active interaction layers.
    pub fn current_style(&self) -> &ParsedStyle {
        &self.current
    }

    pub fn computed(&self) -> &ComputedStyle {
        &self.computed
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Relayout requests stop here: roots, absolute nodes and nodes the host
    /// marked explicitly.
    pub fn is_flow_root(&self) -> bool {
        self.parent.is_none()
            || self.flow_root
            || self.current.positioning() == Some(Positioning::Absolute)
    }

    /// Re-merges the active layers and returns the previous merged style.
    pub(crate) fn refresh_current(&mut self) -> ParsedStyle {
        let interaction = self.interaction;
        let merged = merge_states(&self.styles, |state| interaction.is_active(state));
        std::mem::replace(&mut self.current, merged)
    }
}
