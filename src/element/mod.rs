use egui::{Painter, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod common;
mod control_point;
mod poly_shape;
mod selection_area;

pub use common::{CONTROL_POINT_RADIUS, DEFAULT_STROKE_WIDTH, SHAPE_HIT_TOLERANCE};
pub use control_point::ControlPoint;
pub use poly_shape::{DecodeError, MAX_SIDES, PolyShape, RECORD_LINES};
pub use selection_area::SelectionArea;

/// Stable identity of a node on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Common trait that all canvas elements implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> NodeId;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Get the bounding rectangle for this element
    fn rect(&self) -> Rect;

    /// Draw the element using the provided painter
    fn draw(&self, painter: &Painter);

    /// Test if the element contains the given position
    fn hit_test(&self, pos: Pos2) -> bool;

    /// Translate the element by the given delta
    fn translate(&mut self, delta: Vec2);
}

/// Everything the display list can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Shape(PolyShape),
    ControlPoint(ControlPoint),
    Selection(SelectionArea),
}

impl Node {
    pub fn as_shape(&self) -> Option<&PolyShape> {
        match self {
            Node::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_shape_mut(&mut self) -> Option<&mut PolyShape> {
        match self {
            Node::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_control_point(&self) -> Option<&ControlPoint> {
        match self {
            Node::ControlPoint(point) => Some(point),
            _ => None,
        }
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, Node::Shape(_))
    }
}

impl Element for Node {
    fn id(&self) -> NodeId {
        match self {
            Node::Shape(s) => s.id(),
            Node::ControlPoint(p) => p.id(),
            Node::Selection(a) => a.id(),
        }
    }

    fn element_type(&self) -> &'static str {
        match self {
            Node::Shape(s) => s.element_type(),
            Node::ControlPoint(p) => p.element_type(),
            Node::Selection(a) => a.element_type(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            Node::Shape(s) => s.rect(),
            Node::ControlPoint(p) => p.rect(),
            Node::Selection(a) => a.rect(),
        }
    }

    fn draw(&self, painter: &Painter) {
        match self {
            Node::Shape(s) => s.draw(painter),
            Node::ControlPoint(p) => p.draw(painter),
            Node::Selection(a) => a.draw(painter),
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        match self {
            Node::Shape(s) => s.hit_test(pos),
            Node::ControlPoint(p) => p.hit_test(pos),
            Node::Selection(a) => a.hit_test(pos),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            Node::Shape(s) => s.translate(delta),
            Node::ControlPoint(p) => p.translate(delta),
            Node::Selection(a) => a.translate(delta),
        }
    }
}

impl From<PolyShape> for Node {
    fn from(shape: PolyShape) -> Self {
        Node::Shape(shape)
    }
}

impl From<ControlPoint> for Node {
    fn from(point: ControlPoint) -> Self {
        Node::ControlPoint(point)
    }
}
