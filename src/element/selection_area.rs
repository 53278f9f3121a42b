use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use super::{Element, Node, NodeId};

const AREA_FILL: Color32 = Color32::from_rgba_premultiplied(20, 60, 120, 40);
const AREA_OUTLINE: Color32 = Color32::from_rgb(33, 150, 243);

/// Rubber-band rectangle shown while the Select tool is dragging
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionArea {
    id: NodeId,
    anchor: Option<Pos2>,
    corner: Option<Pos2>,
}

impl Default for SelectionArea {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionArea {
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            anchor: None,
            corner: None,
        }
    }

    /// Anchor the rectangle at `pos`
    pub fn start(&mut self, pos: Pos2) {
        self.anchor = Some(pos);
        self.corner = Some(pos);
    }

    /// Stretch the free corner to `pos`; ignored before `start`
    pub fn end(&mut self, pos: Pos2) {
        if self.anchor.is_some() {
            self.corner = Some(pos);
        }
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Hand the ids of every polygon touching the rectangle to `consumer`
    pub fn contains_any<'a, I, F>(&self, nodes: I, consumer: F)
    where
        I: IntoIterator<Item = &'a Node>,
        F: FnOnce(&[NodeId]),
    {
        let area = self.rect();
        let hits: Vec<NodeId> = if area == Rect::NOTHING {
            Vec::new()
        } else {
            nodes
                .into_iter()
                .filter(|node| node.is_shape() && node.rect().intersects(area))
                .map(|node| node.id())
                .collect()
        };
        consumer(&hits);
    }

    /// Forget both corners
    pub fn clear(&mut self) {
        self.anchor = None;
        self.corner = None;
    }
}

impl Element for SelectionArea {
    fn id(&self) -> NodeId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "selection"
    }

    fn rect(&self) -> Rect {
        match (self.anchor, self.corner) {
            (Some(a), Some(b)) => Rect::from_two_pos(a, b),
            _ => Rect::NOTHING,
        }
    }

    fn draw(&self, painter: &Painter) {
        if self.is_active() {
            let rect = self.rect();
            painter.rect_filled(rect, 0.0, AREA_FILL);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, AREA_OUTLINE));
        }
    }

    // The overlay never captures the pointer
    fn hit_test(&self, _pos: Pos2) -> bool {
        false
    }

    fn translate(&mut self, delta: Vec2) {
        if let Some(anchor) = &mut self.anchor {
            *anchor += delta;
        }
        if let Some(corner) = &mut self.corner {
            *corner += delta;
        }
    }
}
