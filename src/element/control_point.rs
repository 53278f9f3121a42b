use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use super::common::CONTROL_POINT_RADIUS;
use super::{Element, NodeId};

const HANDLE_FILL: Color32 = Color32::from_rgb(255, 255, 255);
const HANDLE_OUTLINE: Color32 = Color32::from_rgb(33, 150, 243);

/// Draggable handle bound to one vertex of a polygon
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    id: NodeId,
    owner: NodeId,
    index: usize,
    center: Pos2,
    radius: f32,
}

impl ControlPoint {
    pub fn new(id: NodeId, owner: NodeId, index: usize, center: Pos2) -> Self {
        Self {
            id,
            owner,
            index,
            center,
            radius: CONTROL_POINT_RADIUS,
        }
    }

    /// The polygon this handle belongs to
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// Vertex index within the owner
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }
}

impl Element for ControlPoint {
    fn id(&self) -> NodeId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "control_point"
    }

    fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::splat(self.radius * 2.0))
    }

    fn draw(&self, painter: &Painter) {
        painter.circle(
            self.center,
            self.radius,
            HANDLE_FILL,
            Stroke::new(1.5, HANDLE_OUTLINE),
        );
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.center.distance(pos) <= self.radius
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
