use crate::registry::EngineRegistry;
use crate::style::{BoxSides, Color, VisualResource};
use crate::view::{Node, NodeId};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Shadow,
    Box,
}

/// One rounded rectangle for the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub node: NodeId,
    pub kind: DrawKind,
    pub position: Vec2,
    pub size: Vec2,
    pub fill: Color,
    pub border_color: Color,
    pub border_width: BoxSides<f32>,
    pub border_radius: BoxSides<f32>,
}

/// Turns a laid out node into draw commands. Rasterizing them is the host's job.
pub trait VisualEngine {
    fn paint(
        &self,
        id: NodeId,
        node: &Node,
        resource: Option<&dyn VisualResource>,
        out: &mut Vec<DrawRect>,
    );
}

pub type VisualRegistry = EngineRegistry<dyn VisualEngine>;

pub fn default_visual_registry() -> VisualRegistry {
    let default: Box<dyn VisualEngine> = Box::new(BaseVisualEngine);
    EngineRegistry::new(default)
}

/// Drop shadow, then background with border.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaseVisualEngine;

impl VisualEngine for BaseVisualEngine {
    fn paint(
        &self,
        id: NodeId,
        node: &Node,
        _resource: Option<&dyn VisualResource>,
        out: &mut Vec<DrawRect>,
    ) {
        let style = node.computed();
        let geometry = node.geometry();
        let shadow_offset = style.shadow_offset();

        if !style.shadow_color.is_transparent() && shadow_offset != Vec2::ZERO {
            out.push(DrawRect {
                node: id,
                kind: DrawKind::Shadow,
                position: geometry.position() + shadow_offset,
                size: geometry.size(),
                fill: style.shadow_color,
                border_color: Color::transparent(),
                border_width: BoxSides::ZERO,
                border_radius: style.border_radius,
            });
        }
        out.push(DrawRect {
            node: id,
            kind: DrawKind::Box,
            position: geometry.position(),
            size: geometry.size(),
            fill: style.background_color,
            border_color: style.border_color,
            border_width: style.border_width,
            border_radius: style.border_radius,
        });
    }
}
