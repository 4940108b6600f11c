use bitflags::bitflags;

bitflags! {
    /// Work a style change requires from the node that owns the style.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Invalidation: u8 {
        /// Repaint only, geometry is unchanged.
        const REDRAW = 1 << 0;
        /// Sizes or positions may change; escalates to the nearest flow root.
        const RELAYOUT = 1 << 1;
    }
}

impl Invalidation {
    pub const fn needs_relayout(self) -> bool {
        self.contains(Self::RELAYOUT)
    }

    pub const fn needs_redraw(self) -> bool {
        self.contains(Self::REDRAW)
    }
}
