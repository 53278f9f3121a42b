use egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::display_list::DisplayList;
use crate::element::Element;

/// Paints the display list onto the canvas area
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    grid_color: Color32,
    grid_spacing: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(245, 243, 236),
            grid_color: Color32::from_rgb(225, 222, 212),
            grid_spacing: 25.0,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw background, grid and every node.
    ///
    /// Nodes live in canvas-local coordinates; they are shifted to `rect.min`.
    pub fn render(&self, painter: &Painter, rect: Rect, list: &dyn DisplayList) {
        painter.rect_filled(rect, 0.0, self.background);
        self.draw_grid(painter, rect);

        let offset = rect.min.to_vec2();
        let painter = painter.with_clip_rect(rect);
        for node in list.nodes() {
            let mut node = node.clone();
            node.translate(offset);
            node.draw(&painter);
        }
    }

    fn draw_grid(&self, painter: &Painter, rect: Rect) {
        if self.grid_spacing <= 0.0 {
            return;
        }
        let stroke = Stroke::new(1.0, self.grid_color);

        let mut x = rect.left() + self.grid_spacing;
        while x < rect.right() {
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
            x += self.grid_spacing;
        }

        let mut y = rect.top() + self.grid_spacing;
        while y < rect.bottom() {
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
            y += self.grid_spacing;
        }
    }
}
