use std::fmt;
use std::str::FromStr;

use crate::error::MapError;

/// Editing modes the canvas can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Door,
    Move,
    Path,
    Select,
    Erase,
    Room,
}

impl Tool {
    /// Every tool, in palette order
    pub const ALL: [Tool; 6] = [
        Tool::Select,
        Tool::Move,
        Tool::Room,
        Tool::Path,
        Tool::Erase,
        Tool::Door,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Door => "Door",
            Tool::Move => "Move",
            Tool::Path => "Path",
            Tool::Select => "Select",
            Tool::Erase => "Erase",
            Tool::Room => "Room",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MapError::UnknownTool(s.to_owned()))
    }
}

/// Room vertex counts offered in the palette submenu
pub const ROOM_OPTIONS: [(i32, &str); 5] = [
    (2, "Line"),
    (3, "Triangle"),
    (4, "Rectangle"),
    (5, "Pentagon"),
    (6, "Hexagon"),
];

/// Display name of a Room option, if it is one of the named polygons
pub fn option_label(option: i32) -> Option<&'static str> {
    ROOM_OPTIONS
        .iter()
        .find(|(sides, _)| *sides == option)
        .map(|(_, label)| *label)
}

/// The active tool and its numeric option.
///
/// Owned by the canvas dispatcher and handed out by reference, so there is no
/// process-wide instance. Starts as `Room` with option `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    tool: Tool,
    option: i32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Room,
            option: 0,
        }
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `tool` and reset the option to zero
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.option = 0;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// No bounds checking; Room callers are expected to pass 2..=6
    pub fn set_option(&mut self, option: i32) {
        self.option = option;
    }

    pub fn option(&self) -> i32 {
        self.option
    }

    /// Status-bar text for the current option
    pub fn option_label(&self) -> String {
        match option_label(self.option) {
            Some(label) => label.to_owned(),
            None if self.tool == Tool::Room && self.option >= 2 => format!("{}-gon", self.option),
            None => "None".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tool_names_case_insensitively() {
        assert_eq!("room".parse::<Tool>().unwrap(), Tool::Room);
        assert_eq!(" Erase ".parse::<Tool>().unwrap(), Tool::Erase);
        assert!(matches!("Stairs".parse::<Tool>(), Err(MapError::UnknownTool(_))));
    }

    #[test]
    fn test_every_named_option_has_its_own_label() {
        assert_eq!(option_label(2), Some("Line"));
        assert_eq!(option_label(3), Some("Triangle"));
        assert_eq!(option_label(4), Some("Rectangle"));
        assert_eq!(option_label(5), Some("Pentagon"));
        assert_eq!(option_label(6), Some("Hexagon"));
        assert_eq!(option_label(0), None);
        assert_eq!(option_label(7), None);
    }
}
