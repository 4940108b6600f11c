use crate::style::color::Color;
use crate::style::descriptor::{Positioning, SizingPolicy, Visibility};
use crate::style::parsed_style::ParsedStyle;
use crate::style::sides::BoxSides;
use crate::style::unit::UnitValue;
use glam::Vec2;

/// Style resolved to pixels for one node against its viewport and parent.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub visibility: Visibility,
    pub sizing: SizingPolicy,
    pub positioning: Positioning,
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
    pub position_x: f32,
    pub position_y: f32,
    pub padding: BoxSides<f32>,
    pub margin: BoxSides<f32>,
    pub border_width: BoxSides<f32>,
    pub border_radius: BoxSides<f32>,
    pub background_color: Color,
    pub border_color: Color,
    pub shadow_color: Color,
    pub shadow_offset_x: f32,
    pub shadow_offset_y: f32,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            visibility: Visibility::Visible,
            sizing: SizingPolicy::Border,
            positioning: Positioning::Normal,
            width: 0.0,
            height: 0.0,
            min_width: 0.0,
            min_height: 0.0,
            max_width: f32::INFINITY,
            max_height: f32::INFINITY,
            position_x: 0.0,
            position_y: 0.0,
            padding: BoxSides::ZERO,
            margin: BoxSides::ZERO,
            border_width: BoxSides::ZERO,
            border_radius: BoxSides::ZERO,
            background_color: Color::transparent(),
            border_color: Color::transparent(),
            shadow_color: Color::transparent(),
            shadow_offset_x: 0.0,
            shadow_offset_y: 0.0,
        }
    }
}

impl ComputedStyle {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position_x, self.position_y)
    }

    pub fn shadow_offset(&self) -> Vec2 {
        Vec2::new(self.shadow_offset_x, self.shadow_offset_y)
    }
}

/// Resolves `style` into `target` in place.
///
/// `parent_content` must already be final: the pass never iterates.
pub fn compute_style(
    target: &mut ComputedStyle,
    style: &ParsedStyle,
    viewport: Vec2,
    parent_content: Vec2,
) {
    let along_x = |value: UnitValue, fallback: f32| {
        value.resolve(viewport, parent_content, parent_content.x, fallback)
    };
    let along_y = |value: UnitValue, fallback: f32| {
        value.resolve(viewport, parent_content, parent_content.y, fallback)
    };
    let sides = |value: BoxSides<UnitValue>| BoxSides {
        top: along_y(value.top, 0.0),
        right: along_x(value.right, 0.0),
        bottom: along_y(value.bottom, 0.0),
        left: along_x(value.left, 0.0),
    };

    target.visibility = style.visibility().unwrap_or_default();
    target.sizing = style.sizing().unwrap_or_default();
    target.positioning = style.positioning().unwrap_or_default();

    target.width = along_x(style.width(), parent_content.x);
    target.height = along_y(style.height(), parent_content.y);
    target.min_width = along_x(style.min_width(), 0.0);
    target.min_height = along_y(style.min_height(), 0.0);
    target.max_width = along_x(style.max_width(), f32::INFINITY);
    target.max_height = along_y(style.max_height(), f32::INFINITY);

    target.position_x = along_x(style.position_x(), 0.0);
    target.position_y = along_y(style.position_y(), 0.0);

    target.padding = sides(style.padding());
    target.margin = sides(style.margin());
    target.border_width = sides(style.border_width());
    target.border_radius = sides(style.border_radius());

    target.background_color = style.background_color().unwrap_or_default();
    target.border_color = style.border_color().unwrap_or_default();
    target.shadow_color = style.shadow_color().unwrap_or_default();

    let own = Vec2::new(target.width, target.height);
    target.shadow_offset_x = style.shadow_offset_x().resolve(viewport, own, own.x, 0.0);
    target.shadow_offset_y = style.shadow_offset_y().resolve(viewport, own, own.y, 0.0);
}

#[cfg(test)]
mod tests {
    use super::{ComputedStyle, compute_style};
    use crate::style::color::Color;
    use crate::style::descriptor::{Positioning, SizingPolicy, StyleDescriptor, Visibility};
    use crate::style::parser::parse_style;
    use crate::style::sides::BoxSides;
    use glam::Vec2;

    const VIEWPORT: Vec2 = Vec2::new(1000.0, 800.0);
    const PARENT: Vec2 = Vec2::new(400.0, 200.0);

    fn computed(raw: StyleDescriptor) -> ComputedStyle {
        let parsed = parse_style(&raw).unwrap();
        let mut target = ComputedStyle::default();
        compute_style(&mut target, &parsed, VIEWPORT, PARENT);
        target
    }

    #[test]
    fn unset_style_fills_the_parent() {
        let style = computed(StyleDescriptor::new());
        assert_eq!(style.width, 400.0);
        assert_eq!(style.height, 200.0);
        assert_eq!(style.min_width, 0.0);
        assert_eq!(style.max_height, f32::INFINITY);
        assert_eq!(style.padding, BoxSides::ZERO);
        assert_eq!(style.visibility, Visibility::Visible);
        assert_eq!(style.sizing, SizingPolicy::Border);
        assert_eq!(style.positioning, Positioning::Normal);
        assert_eq!(style.background_color, Color::transparent());
    }

    #[test]
    fn units_resolve_against_their_base() {
        let style = computed(
            StyleDescriptor::new()
                .size("50%", "10vh")
                .min_width("10vw")
                .max_height("50w%")
                .position("25%", "h%"),
        );
        assert_eq!(style.width, 200.0);
        assert_eq!(style.height, 80.0);
        assert_eq!(style.min_width, 100.0);
        assert_eq!(style.max_height, 200.0);
        assert_eq!(style.position_x, 100.0);
        assert_eq!(style.position_y, 0.0);
    }

    #[test]
    fn horizontal_sides_use_parent_width() {
        let style = computed(StyleDescriptor::new().padding("10% 5%"));
        assert_eq!(style.padding, BoxSides::new(20.0, 20.0, 20.0, 20.0));
        let style = computed(StyleDescriptor::new().margin("1px 2px 3px 4px"));
        assert_eq!(style.margin, BoxSides::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn shadow_offsets_use_the_nodes_own_size() {
        let style = computed(
            StyleDescriptor::new()
                .size("100px", "50px")
                .shadow(Color::rgb(0, 0, 0), "10%", "50%"),
        );
        assert_eq!(style.shadow_offset_x, 10.0);
        assert_eq!(style.shadow_offset_y, 25.0);
        assert_eq!(style.shadow_color, Color::rgb(0, 0, 0));
    }

    #[test]
    fn recomputing_is_bit_identical() {
        let parsed = parse_style(
            &StyleDescriptor::new()
                .size("33.3%", "17vh")
                .padding("1.5px 7%")
                .border_width("0.25px"),
        )
        .unwrap();
        let mut first = ComputedStyle::default();
        compute_style(&mut first, &parsed, VIEWPORT, PARENT);
        let mut second = first.clone();
        compute_style(&mut second, &parsed, VIEWPORT, PARENT);
        assert_eq!(first, second);
        assert_eq!(first.width.to_bits(), second.width.to_bits());
    }
}
