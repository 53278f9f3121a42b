#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod display_list;
pub mod element;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod map_area;
pub mod panels;
pub mod renderer;
pub mod tool;

pub use app::MapMakerApp;
pub use command::Command;
pub use config::AppConfig;
pub use display_list::{Canvas, DisplayList};
pub use element::{ControlPoint, Element, Node, NodeId, PolyShape, SelectionArea};
pub use error::{MapError, MapResult};
pub use input::{CanvasEvent, InputHandler};
pub use map_area::{Gesture, MapArea};
pub use renderer::Renderer;
pub use tool::{Tool, ToolState};
