use glam::Vec2;

/// Host settings of a [`Ui`](crate::view::Ui).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiConfig {
    pub viewport: Vec2,
    /// Replaces `viewport` for unit resolution, for design-time previews.
    pub design_viewport: Option<Vec2>,
    /// Roots resolve against the viewport instead of a zero parent.
    pub root_fills_viewport: bool,
    pub parse_warnings: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::ZERO,
            design_viewport: None,
            root_fills_viewport: false,
            parse_warnings: true,
        }
    }
}

impl UiConfig {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub const fn with_design_viewport(mut self, size: Vec2) -> Self {
        self.design_viewport = Some(size);
        self
    }

    pub const fn with_root_fills_viewport(mut self, value: bool) -> Self {
        self.root_fills_viewport = value;
        self
    }

    pub const fn with_parse_warnings(mut self, value: bool) -> Self {
        self.parse_warnings = value;
        self
    }

    /// The size `vw`/`vh` units resolve against.
    pub fn effective_viewport(&self) -> Vec2 {
        self.design_viewport.unwrap_or(self.viewport)
    }

    /// Parent content size seen by a root node.
    pub fn root_parent_content(&self) -> Vec2 {
        if self.root_fills_viewport {
            self.effective_viewport()
        } else {
            Vec2::ZERO
        }
    }
}
