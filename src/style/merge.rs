use crate::style::descriptor::InteractionState;
use crate::style::invalidation::Invalidation;
use crate::style::parsed_style::ParsedStyle;
use crate::style::sides::BoxSides;
use crate::style::unit::UnitValue;

/// Overlays `secondary` on `primary`, field by field.
///
/// An auto length in `secondary` counts as unset, so an overlay cannot force a
/// length back to auto. Side lists merge per side.
pub fn merge(primary: &ParsedStyle, secondary: &ParsedStyle) -> ParsedStyle {
    ParsedStyle {
        visibility: secondary.visibility.or(primary.visibility),
        sizing: secondary.sizing.or(primary.sizing),
        width: merge_value(primary.width, secondary.width),
        height: merge_value(primary.height, secondary.height),
        min_width: merge_value(primary.min_width, secondary.min_width),
        min_height: merge_value(primary.min_height, secondary.min_height),
        max_width: merge_value(primary.max_width, secondary.max_width),
        max_height: merge_value(primary.max_height, secondary.max_height),
        positioning: secondary.positioning.or(primary.positioning),
        position_x: merge_value(primary.position_x, secondary.position_x),
        position_y: merge_value(primary.position_y, secondary.position_y),
        padding: merge_sides(primary.padding, secondary.padding),
        margin: merge_sides(primary.margin, secondary.margin),
        border_width: merge_sides(primary.border_width, secondary.border_width),
        border_radius: merge_sides(primary.border_radius, secondary.border_radius),
        background_color: secondary.background_color.or(primary.background_color),
        border_color: secondary.border_color.or(primary.border_color),
        shadow_color: secondary.shadow_color.or(primary.shadow_color),
        shadow_offset_x: merge_value(primary.shadow_offset_x, secondary.shadow_offset_x),
        shadow_offset_y: merge_value(primary.shadow_offset_y, secondary.shadow_offset_y),
        layout: secondary.layout.clone().or_else(|| primary.layout.clone()),
        visual: secondary.visual.clone().or_else(|| primary.visual.clone()),
        input: secondary.input.clone().or_else(|| primary.input.clone()),
        pending: Invalidation::empty(),
    }
}

fn merge_value(primary: UnitValue, secondary: UnitValue) -> UnitValue {
    if secondary.is_auto() { primary } else { secondary }
}

fn merge_sides(primary: BoxSides<UnitValue>, secondary: BoxSides<UnitValue>) -> BoxSides<UnitValue> {
    primary.zip(secondary, merge_value)
}

/// Left fold of `layers` in order. An empty iterator yields an unset style.
pub fn merge_layers<'a>(layers: impl IntoIterator<Item = &'a ParsedStyle>) -> ParsedStyle {
    let mut layers = layers.into_iter();
    let Some(first) = layers.next() else {
        return ParsedStyle::default();
    };
    let mut merged = first.clone();
    merged.take_invalidation();
    for layer in layers {
        merged = merge(&merged, layer);
    }
    merged
}

/// Merges the per-state styles of a node: normal, then every active overlay in
/// priority order.
pub fn merge_states(
    styles: &[ParsedStyle; 4],
    active: impl Fn(InteractionState) -> bool,
) -> ParsedStyle {
    merge_layers(
        InteractionState::ALL
            .into_iter()
            .filter(|state| *state == InteractionState::Normal || active(*state))
            .map(|state| &styles[state.index()]),
    )
}
