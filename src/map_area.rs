//! Canvas gesture dispatch.
//!
//! `MapArea` is a small state machine: the active [`Tool`] picks the
//! transition, the [`Gesture`] carries whatever a press/drag/release sequence
//! needs to remember, and every transition yields [`Command`]s that are then
//! applied to the display list.
//!
//! ```text
//!            press (Room)              release
//!   Idle ───────────────────► Building ────────► Idle   (control points added)
//!     │      press (Select)             release
//!     ├─────────────────────► Selecting ───────► Idle   (rectangle removed)
//!     │      press (other)              release
//!     └─────────────────────► Pressed ─────────► Idle
//! ```
//!
//! Changing the tool while a gesture is open settles it first: a room under
//! construction is finalized and a selection rectangle is taken down. Later
//! drag and release events then follow the new tool.

use std::collections::BTreeMap;

use egui::Pos2;

use crate::command::Command;
use crate::display_list::{Canvas, DisplayList};
use crate::element::{Element, MAX_SIDES, Node, NodeId, PolyShape, SelectionArea};
use crate::error::MapError;
use crate::input::CanvasEvent;
use crate::tool::{Tool, ToolState};

/// Per-gesture memory of the canvas
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// A tool without press-time state (Move, Erase, Door, Path) is held down
    Pressed(Tool),
    /// A room polygon is being dragged out from `start`
    Building { shape: PolyShape, start: Pos2 },
    /// The selection rectangle is on the canvas
    Selecting { area: SelectionArea },
}

type SelectHandler = Box<dyn FnMut(&[NodeId])>;

/// Routes canvas gestures into display-list mutations according to the active tool
pub struct MapArea<D: DisplayList = Canvas> {
    tool: ToolState,
    list: D,
    gesture: Gesture,
    // Cursor at the previous press or drag
    last_pos: Pos2,
    on_select: Option<SelectHandler>,
}

impl<D: DisplayList + std::fmt::Debug> std::fmt::Debug for MapArea<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapArea")
            .field("tool", &self.tool)
            .field("list", &self.list)
            .field("gesture", &self.gesture)
            .field("last_pos", &self.last_pos)
            .finish_non_exhaustive()
    }
}

impl Default for MapArea<Canvas> {
    fn default() -> Self {
        Self::new(ToolState::default(), Canvas::new())
    }
}

impl<D: DisplayList> MapArea<D> {
    pub fn new(tool: ToolState, list: D) -> Self {
        Self {
            tool,
            list,
            gesture: Gesture::Idle,
            last_pos: Pos2::ZERO,
            on_select: None,
        }
    }

    pub fn active_tool(&self) -> Tool {
        self.tool.tool()
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tool
    }

    pub fn display_list(&self) -> &D {
        &self.list
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Receives the polygons caught by every completed selection rectangle
    pub fn set_select_handler(&mut self, handler: impl FnMut(&[NodeId]) + 'static) {
        self.on_select = Some(Box::new(handler));
    }

    /// Switch tools, settling any gesture that is still open.
    ///
    /// The option is reset to zero, as it is for every tool change.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Command> {
        let pending = std::mem::take(&mut self.gesture);
        let commands = self.settle(pending);
        self.apply(&commands);

        log::info!("Tool changed: {} -> {}", self.tool.tool(), tool);
        self.tool.set_tool(tool);
        commands
    }

    /// Set the option of the active tool; only the next Room press reads it
    pub fn set_option(&mut self, option: i32) {
        log::info!("Option for {} set to {}", self.tool.tool(), option);
        self.tool.set_option(option);
    }

    pub fn press(&mut self, pos: Pos2) -> Vec<Command> {
        self.handle(CanvasEvent::Press(pos))
    }

    pub fn drag(&mut self, pos: Pos2) -> Vec<Command> {
        self.handle(CanvasEvent::Drag(pos))
    }

    pub fn release(&mut self, pos: Pos2) -> Vec<Command> {
        self.handle(CanvasEvent::Release(pos))
    }

    /// Run one transition and apply its commands, returning what was applied
    pub fn handle(&mut self, event: CanvasEvent) -> Vec<Command> {
        let tool = self.tool.tool();
        let gesture = std::mem::take(&mut self.gesture);

        let (next, commands) = match event {
            CanvasEvent::Press(pos) => self.on_press(tool, gesture, pos),
            CanvasEvent::Drag(pos) => self.on_drag(tool, gesture, pos),
            CanvasEvent::Release(pos) => self.on_release(tool, gesture, pos),
        };

        log::debug!(
            "{:?} with {}: {} command(s), now {}",
            event,
            tool,
            commands.len(),
            gesture_name(&next)
        );

        self.gesture = next;
        self.apply(&commands);
        commands
    }

    fn on_press(&mut self, tool: Tool, gesture: Gesture, pos: Pos2) -> (Gesture, Vec<Command>) {
        self.last_pos = pos;

        // A press without a release in between (e.g. the button came up
        // outside the window) closes the previous gesture first
        let mut commands = self.settle(gesture);

        let next = match tool {
            Tool::Room => {
                let sides = usize::try_from(self.tool.option()).unwrap_or(0);
                match PolyShape::new(sides, pos) {
                    Some(shape) => {
                        commands.push(Command::AddNode(Node::Shape(shape.clone())));
                        Gesture::Building { shape, start: pos }
                    }
                    None => {
                        log::warn!(
                            "Room needs 2 to {} sides, option is {}; pick a polygon first",
                            MAX_SIDES,
                            self.tool.option()
                        );
                        Gesture::Idle
                    }
                }
            }
            Tool::Select => {
                let mut area = SelectionArea::new();
                area.start(pos);
                commands.push(Command::AddNode(Node::Selection(area.clone())));
                Gesture::Selecting { area }
            }
            Tool::Move | Tool::Erase | Tool::Door | Tool::Path => Gesture::Pressed(tool),
        };

        (next, commands)
    }

    fn on_drag(&mut self, tool: Tool, gesture: Gesture, pos: Pos2) -> (Gesture, Vec<Command>) {
        let mut commands = Vec::new();

        let next = match (tool, gesture) {
            (Tool::Room, Gesture::Building { mut shape, start }) => {
                shape.redraw(start, pos, true);
                commands.push(Command::UpdateNode(Node::Shape(shape.clone())));
                Gesture::Building { shape, start }
            }
            (Tool::Select, Gesture::Selecting { mut area }) => {
                area.end(pos);
                commands.push(Command::UpdateNode(Node::Selection(area.clone())));
                Gesture::Selecting { area }
            }
            (Tool::Move, gesture) => {
                // Per-event delta: the total displacement is the sum of every step
                let delta = pos - self.last_pos;
                match self.list.node_at(self.last_pos) {
                    Some(Node::Shape(shape)) => commands.push(Command::TranslateNode {
                        id: shape.id(),
                        delta,
                    }),
                    Some(Node::ControlPoint(point)) => commands.push(Command::MoveVertex {
                        shape: point.owner(),
                        index: point.index(),
                        to: point.center() + delta,
                    }),
                    Some(Node::Selection(_)) | None => {}
                }
                gesture
            }
            (_, gesture) => gesture,
        };

        self.last_pos = pos;
        (next, commands)
    }

    fn on_release(&mut self, tool: Tool, gesture: Gesture, pos: Pos2) -> (Gesture, Vec<Command>) {
        let commands = match (tool, gesture) {
            (Tool::Room, gesture @ Gesture::Building { .. }) => self.settle(gesture),
            (Tool::Select, gesture @ Gesture::Selecting { .. }) => self.settle(gesture),
            (Tool::Erase, _) => self.erase_at(pos),
            _ => Vec::new(),
        };
        (Gesture::Idle, commands)
    }

    /// Commands that close an open gesture the way its own release would
    fn settle(&mut self, gesture: Gesture) -> Vec<Command> {
        match gesture {
            Gesture::Building { mut shape, .. } => {
                shape.register_control_points();
                let mut commands = vec![Command::UpdateNode(Node::Shape(shape.clone()))];
                commands.extend(
                    shape
                        .control_points()
                        .into_iter()
                        .map(|point| Command::AddNode(Node::ControlPoint(point))),
                );
                commands
            }
            Gesture::Selecting { mut area } => {
                let commands = vec![Command::RemoveNodes(vec![area.id()])];
                let handler = &mut self.on_select;
                area.contains_any(self.list.nodes(), |hits| {
                    if let Some(handler) = handler {
                        handler(hits);
                    }
                });
                area.clear();
                commands
            }
            Gesture::Idle | Gesture::Pressed(_) => Vec::new(),
        }
    }

    /// Remove the polygon under `pos` together with its own control points
    fn erase_at(&self, pos: Pos2) -> Vec<Command> {
        let shape = match self.list.node_at(pos) {
            Some(Node::Shape(shape)) => shape,
            Some(Node::ControlPoint(point)) => {
                match self.list.get(point.owner()).and_then(Node::as_shape) {
                    Some(shape) => shape,
                    None => return vec![Command::RemoveNodes(vec![point.id()])],
                }
            }
            Some(Node::Selection(_)) | None => return Vec::new(),
        };

        let mut ids = vec![shape.id()];
        ids.extend_from_slice(shape.control_point_ids());
        vec![Command::RemoveNodes(ids)]
    }

    fn apply(&mut self, commands: &[Command]) {
        for command in commands {
            command.execute(&mut self.list);
        }
    }

    /// Every polygon on the canvas, one encoded record each, joined with newlines
    pub fn convert_to_string(&self) -> String {
        self.list
            .shapes()
            .map(PolyShape::encode)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Rebuild one polygon per key, in key order, adding it and its control points.
    ///
    /// Records that fail to decode are logged and skipped. Returns how many
    /// polygons were added.
    pub fn convert_from_string<K: Ord + std::fmt::Debug>(
        &mut self,
        records: &BTreeMap<K, Vec<String>>,
    ) -> usize {
        let mut commands = Vec::new();
        let mut loaded = 0;

        for (key, lines) in records {
            match PolyShape::decode(lines) {
                Ok(shape) => {
                    let points = shape.control_points();
                    commands.push(Command::AddNode(Node::Shape(shape)));
                    commands.extend(
                        points
                            .into_iter()
                            .map(|point| Command::AddNode(Node::ControlPoint(point))),
                    );
                    loaded += 1;
                }
                Err(err) => log::warn!("Skipping shape record {:?}: {}", key, MapError::from(err)),
            }
        }

        self.apply(&commands);
        loaded
    }

    /// Remove every node; an open gesture is dropped with it
    pub fn clear_map(&mut self) {
        self.gesture = Gesture::Idle;
        self.apply(&[Command::Clear]);
    }
}

fn gesture_name(gesture: &Gesture) -> &'static str {
    match gesture {
        Gesture::Idle => "idle",
        Gesture::Pressed(_) => "pressed",
        Gesture::Building { .. } => "building",
        Gesture::Selecting { .. } => "selecting",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_area(sides: i32) -> MapArea {
        let mut area = MapArea::default();
        area.set_tool(Tool::Room);
        area.set_option(sides);
        area
    }

    #[test]
    fn test_room_gesture_walks_through_building() {
        let mut area = room_area(4);
        area.press(Pos2::new(10.0, 10.0));
        assert!(matches!(area.gesture(), Gesture::Building { .. }));
        area.drag(Pos2::new(50.0, 50.0));
        assert!(matches!(area.gesture(), Gesture::Building { .. }));
        area.release(Pos2::new(50.0, 50.0));
        assert_eq!(area.gesture(), &Gesture::Idle);
    }

    #[test]
    fn test_room_without_sides_does_not_start() {
        let mut area = MapArea::default();
        let commands = area.press(Pos2::new(10.0, 10.0));
        assert!(commands.is_empty());
        assert_eq!(area.gesture(), &Gesture::Idle);
        assert!(area.display_list().is_empty());
    }

    #[test]
    fn test_oversized_room_does_not_start() {
        let mut area = room_area(MAX_SIDES as i32 + 1);
        assert!(area.press(Pos2::new(10.0, 10.0)).is_empty());
        assert_eq!(area.gesture(), &Gesture::Idle);
        assert!(area.display_list().is_empty());
    }

    #[test]
    fn test_release_without_press_is_harmless() {
        let mut area = room_area(3);
        assert!(area.release(Pos2::new(1.0, 1.0)).is_empty());
        area.set_tool(Tool::Select);
        assert!(area.release(Pos2::new(1.0, 1.0)).is_empty());
        assert!(area.display_list().is_empty());
    }
}
