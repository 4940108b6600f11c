use crate::style::color::Color;
use crate::style::descriptor::{Positioning, SizingPolicy, Visibility};
use crate::style::invalidation::Invalidation;
use crate::style::resource::{InputHandle, LayoutHandle, VisualHandle, same_handle};
use crate::style::sides::BoxSides;
use crate::style::unit::UnitValue;
use std::rc::Rc;

const REDRAW: Invalidation = Invalidation::REDRAW;
const RELAYOUT: Invalidation = Invalidation::RELAYOUT;
const REPAINT_AND_RELAYOUT: Invalidation = Invalidation::REDRAW.union(Invalidation::RELAYOUT);
const NONE: Invalidation = Invalidation::empty();

trait SameValue {
    fn same_value(&self, other: &Self) -> bool;
}

macro_rules! same_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SameValue for $ty {
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

same_by_eq!(
    UnitValue,
    BoxSides<UnitValue>,
    Option<Color>,
    Option<Visibility>,
    Option<SizingPolicy>,
    Option<Positioning>,
);

impl<T: ?Sized> SameValue for Option<Rc<T>> {
    fn same_value(&self, other: &Self) -> bool {
        same_handle(self, other)
    }
}

macro_rules! style_properties {
    (
        values { $($field:ident / $setter:ident : $ty:ty = $mask:expr),* $(,)? }
        handles { $($hfield:ident / $hsetter:ident : $hty:ty = $hmask:expr),* $(,)? }
    ) => {
        /// Unit typed style for one interaction state.
        ///
        /// Enum and color fields use `None` as unset, lengths use
        /// [`UnitValue::AUTO`]. Every setter that changes a value returns the
        /// change's [`Invalidation`] and also accumulates it until
        /// [`ParsedStyle::take_invalidation`] drains it.
        #[derive(Debug, Clone, Default)]
        pub struct ParsedStyle {
            $(pub(crate) $field: $ty,)*
            $(pub(crate) $hfield: Option<$hty>,)*
            pub(crate) pending: Invalidation,
        }

        impl ParsedStyle {
            $(
                pub fn $field(&self) -> $ty {
                    self.$field
                }

                pub fn $setter(&mut self, value: $ty) -> Invalidation {
                    if self.$field.same_value(&value) {
                        return Invalidation::empty();
                    }
                    self.$field = value;
                    self.pending |= $mask;
                    $mask
                }
            )*

            $(
                pub fn $hfield(&self) -> Option<&$hty> {
                    self.$hfield.as_ref()
                }

                pub fn $hsetter(&mut self, value: Option<$hty>) -> Invalidation {
                    if self.$hfield.same_value(&value) {
                        return Invalidation::empty();
                    }
                    self.$hfield = value;
                    self.pending |= $hmask;
                    $hmask
                }
            )*

            /// Union of the masks of every property that differs.
            pub fn diff(&self, other: &Self) -> Invalidation {
                let mut changed = Invalidation::empty();
                $(
                    if !self.$field.same_value(&other.$field) {
                        changed |= $mask;
                    }
                )*
                $(
                    if !self.$hfield.same_value(&other.$hfield) {
                        changed |= $hmask;
                    }
                )*
                changed
            }

            /// Overwrites every property through its setter.
            pub fn assign(&mut self, other: &Self) -> Invalidation {
                let mut changed = Invalidation::empty();
                $(changed |= self.$setter(other.$field);)*
                $(changed |= self.$hsetter(other.$hfield.clone());)*
                changed
            }
        }
    };
}

style_properties! {
    values {
        visibility / set_visibility: Option<Visibility> = REPAINT_AND_RELAYOUT,
        sizing / set_sizing: Option<SizingPolicy> = RELAYOUT,
        width / set_width: UnitValue = RELAYOUT,
        height / set_height: UnitValue = RELAYOUT,
        min_width / set_min_width: UnitValue = RELAYOUT,
        min_height / set_min_height: UnitValue = RELAYOUT,
        max_width / set_max_width: UnitValue = RELAYOUT,
        max_height / set_max_height: UnitValue = RELAYOUT,
        positioning / set_positioning: Option<Positioning> = RELAYOUT,
        position_x / set_position_x: UnitValue = RELAYOUT,
        position_y / set_position_y: UnitValue = RELAYOUT,
        padding / set_padding: BoxSides<UnitValue> = RELAYOUT,
        margin / set_margin: BoxSides<UnitValue> = RELAYOUT,
        border_width / set_border_width: BoxSides<UnitValue> = REPAINT_AND_RELAYOUT,
        border_radius / set_border_radius: BoxSides<UnitValue> = REPAINT_AND_RELAYOUT,
        background_color / set_background_color: Option<Color> = REDRAW,
        border_color / set_border_color: Option<Color> = REDRAW,
        shadow_color / set_shadow_color: Option<Color> = REDRAW,
        shadow_offset_x / set_shadow_offset_x: UnitValue = REDRAW,
        shadow_offset_y / set_shadow_offset_y: UnitValue = REDRAW,
    }
    handles {
        layout / set_layout: LayoutHandle = RELAYOUT,
        visual / set_visual: VisualHandle = REDRAW,
        input / set_input: InputHandle = NONE,
    }
}

impl ParsedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the changes accumulated by the setters.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.pending)
    }

    pub fn pending_invalidation(&self) -> Invalidation {
        self.pending
    }

    /// Whether the margin box or the visibility differs, which moves the
    /// following siblings in the parent's flow.
    pub fn flow_extent_differs(&self, other: &Self) -> bool {
        self.visibility != other.visibility
            || self.sizing != other.sizing
            || self.width != other.width
            || self.height != other.height
            || self.min_width != other.min_width
            || self.min_height != other.min_height
            || self.max_width != other.max_width
            || self.max_height != other.max_height
            || self.padding != other.padding
            || self.margin != other.margin
            || self.border_width != other.border_width
    }
}
