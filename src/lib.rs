//! Style resolution and layout for retained ui trees.
//!
//! Authored [`StyleDescriptor`]s are parsed into unit typed styles, merged
//! across interaction states, resolved to pixels and laid out by pluggable
//! engines. Style changes queue redraw or relayout work that [`Ui::flush`]
//! performs once per frame.

pub mod error;
pub mod layout;
pub mod registry;
pub mod style;
pub mod view;
pub mod visual;

pub use error::UiError;
pub use layout::{FlexLayout, LayoutEngine};
pub use registry::EngineRegistry;
pub use style::{Color, ComputedStyle, Invalidation, InteractionState, ParsedStyle, StyleDescriptor};
pub use view::{FrameUpdate, NodeId, NodeTree, Ui, UiConfig};
pub use visual::{DrawRect, VisualEngine};
