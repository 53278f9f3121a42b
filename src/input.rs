use egui::{Context, Pos2, Rect};

/// One step of a pointer gesture on the canvas, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button went down over the canvas
    Press(Pos2),
    /// Pointer moved while the button is held
    Drag(Pos2),
    /// Primary button came up, wherever the pointer is
    Release(Pos2),
}

impl CanvasEvent {
    pub fn position(&self) -> Pos2 {
        match self {
            CanvasEvent::Press(pos) | CanvasEvent::Drag(pos) | CanvasEvent::Release(pos) => *pos,
        }
    }
}

/// Handles converting raw egui input into press/drag/release events for the canvas
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    // Set between a press on the canvas and the matching release
    pressed: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            pressed: false,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        pos - self.canvas_rect.min.to_vec2()
    }

    /// Process raw egui input for this frame.
    ///
    /// `hovered` must be false when a menu or window covers the canvas, so
    /// clicks meant for them never start a gesture.
    pub fn process_input(&mut self, ctx: &Context, hovered: bool) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;
            let pos = pointer.latest_pos().or(self.last_pointer_pos);

            if pointer.primary_pressed() && hovered && !self.pressed {
                if let Some(pos) = pos.filter(|p| self.canvas_rect.contains(*p)) {
                    events.push(CanvasEvent::Press(self.to_local(pos)));
                    self.pressed = true;
                    self.last_pointer_pos = Some(pos);
                }
            }

            if self.pressed && pointer.primary_down() {
                if let Some(pos) = pos.filter(|p| Some(*p) != self.last_pointer_pos) {
                    events.push(CanvasEvent::Drag(self.to_local(pos)));
                    self.last_pointer_pos = Some(pos);
                }
            }

            // The release is delivered even off-canvas so gestures always end
            if self.pressed && (pointer.primary_released() || !pointer.primary_down()) {
                if let Some(pos) = pos {
                    events.push(CanvasEvent::Release(self.to_local(pos)));
                }
                self.pressed = false;
                self.last_pointer_pos = None;
            }
        });

        events
    }
}
