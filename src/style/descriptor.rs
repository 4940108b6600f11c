use crate::style::color::Color;
use crate::style::resource::{InputHandle, LayoutHandle, VisualHandle};
use smol_str::SmolStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Not painted, still occupies space.
    Transparent,
    /// Not painted and removed from flow.
    Hidden,
}

/// What a declared width/height measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizingPolicy {
    /// The declared size is the whole box.
    #[default]
    Border,
    /// The declared size excludes the border.
    Padding,
    /// The declared size is the content area.
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Positioning {
    #[default]
    Normal,
    /// Flow position plus the node's own offset.
    Relative,
    /// Placed at its own offset, out of flow.
    Absolute,
}

/// The four per-node style layers, lowest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Normal,
    Hover,
    Focus,
    Pressed,
}

impl InteractionState {
    pub const ALL: [Self; 4] = [Self::Normal, Self::Hover, Self::Focus, Self::Pressed];

    pub const fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Hover => 1,
            Self::Focus => 2,
            Self::Pressed => 3,
        }
    }
}

/// Authored, string typed style for one interaction state.
///
/// `None` means unset: the field falls through to the lower priority layer.
/// Lengths use `<number>[px|%|vw|vh|w%|h%]` or `auto`; side lists take one to
/// four space separated lengths.
#[derive(Debug, Clone, Default)]
pub struct StyleDescriptor {
    pub visibility: Option<Visibility>,
    pub sizing: Option<SizingPolicy>,
    pub width: Option<SmolStr>,
    pub height: Option<SmolStr>,
    pub min_width: Option<SmolStr>,
    pub min_height: Option<SmolStr>,
    pub max_width: Option<SmolStr>,
    pub max_height: Option<SmolStr>,
    pub positioning: Option<Positioning>,
    pub position_x: Option<SmolStr>,
    pub position_y: Option<SmolStr>,
    pub padding: Option<SmolStr>,
    pub margin: Option<SmolStr>,
    pub border_width: Option<SmolStr>,
    pub border_radius: Option<SmolStr>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub shadow_color: Option<Color>,
    pub shadow_offset_x: Option<SmolStr>,
    pub shadow_offset_y: Option<SmolStr>,
    pub layout: Option<LayoutHandle>,
    pub visual: Option<VisualHandle>,
    pub input: Option<InputHandle>,
}

impl StyleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(mut self, value: Visibility) -> Self {
        self.visibility = Some(value);
        self
    }

    pub fn sizing(mut self, value: SizingPolicy) -> Self {
        self.sizing = Some(value);
        self
    }

    pub fn width(mut self, value: impl Into<SmolStr>) -> Self {
        self.width = Some(value.into());
        self
    }

    pub fn height(mut self, value: impl Into<SmolStr>) -> Self {
        self.height = Some(value.into());
        self
    }

    pub fn size(self, width: impl Into<SmolStr>, height: impl Into<SmolStr>) -> Self {
        self.width(width).height(height)
    }

    pub fn min_width(mut self, value: impl Into<SmolStr>) -> Self {
        self.min_width = Some(value.into());
        self
    }

    pub fn min_height(mut self, value: impl Into<SmolStr>) -> Self {
        self.min_height = Some(value.into());
        self
    }

    pub fn max_width(mut self, value: impl Into<SmolStr>) -> Self {
        self.max_width = Some(value.into());
        self
    }

    pub fn max_height(mut self, value: impl Into<SmolStr>) -> Self {
        self.max_height = Some(value.into());
        self
    }

    pub fn positioning(mut self, value: Positioning) -> Self {
        self.positioning = Some(value);
        self
    }

    pub fn position(mut self, x: impl Into<SmolStr>, y: impl Into<SmolStr>) -> Self {
        self.position_x = Some(x.into());
        self.position_y = Some(y.into());
        self
    }

    pub fn padding(mut self, value: impl Into<SmolStr>) -> Self {
        self.padding = Some(value.into());
        self
    }

    pub fn margin(mut self, value: impl Into<SmolStr>) -> Self {
        self.margin = Some(value.into());
        self
    }

    pub fn border_width(mut self, value: impl Into<SmolStr>) -> Self {
        self.border_width = Some(value.into());
        self
    }

    pub fn border_radius(mut self, value: impl Into<SmolStr>) -> Self {
        self.border_radius = Some(value.into());
        self
    }

    pub fn background_color(mut self, value: Color) -> Self {
        self.background_color = Some(value);
        self
    }

    pub fn border_color(mut self, value: Color) -> Self {
        self.border_color = Some(value);
        self
    }

    pub fn shadow(
        mut self,
        color: Color,
        offset_x: impl Into<SmolStr>,
        offset_y: impl Into<SmolStr>,
    ) -> Self {
        self.shadow_color = Some(color);
        self.shadow_offset_x = Some(offset_x.into());
        self.shadow_offset_y = Some(offset_y.into());
        self
    }

    pub fn layout(mut self, value: LayoutHandle) -> Self {
        self.layout = Some(value);
        self
    }

    pub fn visual(mut self, value: VisualHandle) -> Self {
        self.visual = Some(value);
        self
    }

    pub fn input(mut self, value: InputHandle) -> Self {
        self.input = Some(value);
        self
    }
}
