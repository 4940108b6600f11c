use glam::Vec2;

/// Unit attached to a [`UnitValue`].
///
/// Every percent-family kind stores its magnitude as a fraction, so `50%`
/// is kept as `0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitKind {
    #[default]
    Auto,
    Pixel,
    /// Fraction of the parent side matching the property's axis.
    Percent,
    ViewportWidth,
    ViewportHeight,
    /// Fraction of the parent content width, whatever the property's axis.
    ParentWidthPercent,
    /// Fraction of the parent content height, whatever the property's axis.
    ParentHeightPercent,
}

impl UnitKind {
    pub const fn is_percent_family(self) -> bool {
        !matches!(self, Self::Auto | Self::Pixel)
    }
}

/// An unresolved style length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UnitValue {
    pub magnitude: f32,
    pub kind: UnitKind,
}

impl UnitValue {
    pub const AUTO: Self = Self::new(0.0, UnitKind::Auto);

    pub const fn new(magnitude: f32, kind: UnitKind) -> Self {
        Self { magnitude, kind }
    }

    pub const fn auto() -> Self {
        Self::AUTO
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, UnitKind::Pixel)
    }

    /// `fraction` is already divided by 100.
    pub const fn percent(fraction: f32) -> Self {
        Self::new(fraction, UnitKind::Percent)
    }

    pub const fn vw(fraction: f32) -> Self {
        Self::new(fraction, UnitKind::ViewportWidth)
    }

    pub const fn vh(fraction: f32) -> Self {
        Self::new(fraction, UnitKind::ViewportHeight)
    }

    pub const fn parent_width(fraction: f32) -> Self {
        Self::new(fraction, UnitKind::ParentWidthPercent)
    }

    pub const fn parent_height(fraction: f32) -> Self {
        Self::new(fraction, UnitKind::ParentHeightPercent)
    }

    pub const fn is_auto(self) -> bool {
        matches!(self.kind, UnitKind::Auto)
    }

    /// Resolves to pixels.
    ///
    /// `parent_side` backs [`UnitKind::Percent`], `parent` backs the explicit
    /// parent-axis kinds and `auto_fallback` is returned for [`UnitKind::Auto`].
    pub fn resolve(self, viewport: Vec2, parent: Vec2, parent_side: f32, auto_fallback: f32) -> f32 {
        match self.kind {
            UnitKind::Auto => auto_fallback,
            UnitKind::Pixel => self.magnitude,
            UnitKind::Percent => parent_side * self.magnitude,
            UnitKind::ViewportWidth => viewport.x * self.magnitude,
            UnitKind::ViewportHeight => viewport.y * self.magnitude,
            UnitKind::ParentWidthPercent => parent.x * self.magnitude,
            UnitKind::ParentHeightPercent => parent.y * self.magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{UnitKind, UnitValue};
    use glam::Vec2;

    const VIEWPORT: Vec2 = Vec2::new(1000.0, 500.0);
    const PARENT: Vec2 = Vec2::new(200.0, 100.0);

    #[test]
    fn auto_returns_the_fallback() {
        assert_eq!(UnitValue::AUTO.resolve(VIEWPORT, PARENT, 200.0, 42.0), 42.0);
        assert_eq!(
            UnitValue::AUTO.resolve(VIEWPORT, PARENT, 200.0, f32::INFINITY),
            f32::INFINITY
        );
    }

    #[test]
    fn percent_uses_the_matching_parent_side() {
        for m in [0.0_f32, 0.25, 0.5, 1.0, 1.5] {
            assert_eq!(UnitValue::percent(m).resolve(VIEWPORT, PARENT, 100.0, 0.0), 100.0 * m);
        }
    }

    #[test]
    fn parent_axis_kinds_ignore_the_property_axis() {
        let w = UnitValue::parent_width(0.5).resolve(VIEWPORT, PARENT, 100.0, 0.0);
        let h = UnitValue::parent_height(0.5).resolve(VIEWPORT, PARENT, 200.0, 0.0);
        assert_eq!(w, 100.0);
        assert_eq!(h, 50.0);
    }

    #[test]
    fn viewport_kinds_scale_the_viewport() {
        assert_eq!(UnitValue::vw(0.25).resolve(VIEWPORT, PARENT, 0.0, 0.0), 250.0);
        assert_eq!(UnitValue::vh(0.1).resolve(VIEWPORT, PARENT, 0.0, 0.0), 50.0);
        assert_eq!(UnitValue::px(-7.5).resolve(VIEWPORT, PARENT, 0.0, 0.0), -7.5);
    }

    #[test]
    fn percent_family_classification() {
        assert!(!UnitKind::Auto.is_percent_family());
        assert!(!UnitKind::Pixel.is_percent_family());
        assert!(UnitKind::Percent.is_percent_family());
        assert!(UnitKind::ParentHeightPercent.is_percent_family());
    }
}
