use egui::{Pos2, Vec2};

use crate::display_list::DisplayList;
use crate::element::{Element, Node, NodeId};

/// Display-list effects produced by canvas gestures
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a node on top of the display list
    AddNode(Node),
    /// Replace the node carrying the same id
    UpdateNode(Node),
    /// Remove nodes by id; missing ids are ignored
    RemoveNodes(Vec<NodeId>),
    /// Translate a node; a polygon drags its control points along
    TranslateNode { id: NodeId, delta: Vec2 },
    /// Move one polygon vertex and its control point
    MoveVertex {
        shape: NodeId,
        index: usize,
        to: Pos2,
    },
    /// Empty the display list
    Clear,
}

impl Command {
    pub fn execute(&self, list: &mut dyn DisplayList) {
        match self {
            Command::AddNode(node) => {
                list.add(node.clone());
            }
            Command::UpdateNode(node) => {
                if let Some(slot) = list.get_mut(node.id()) {
                    *slot = node.clone();
                    if node.is_shape() {
                        sync_control_points(list, node.id());
                    }
                } else {
                    log::warn!("Update for missing node {}", node.id());
                }
            }
            Command::RemoveNodes(ids) => {
                for id in ids {
                    list.remove(*id);
                }
            }
            Command::TranslateNode { id, delta } => {
                let Some(node) = list.get_mut(*id) else {
                    log::warn!("Translate for missing node {}", id);
                    return;
                };
                node.translate(*delta);
                if node.is_shape() {
                    sync_control_points(list, *id);
                }
            }
            Command::MoveVertex { shape, index, to } => {
                let moved = list
                    .get_mut(*shape)
                    .and_then(Node::as_shape_mut)
                    .is_some_and(|s| s.set_point(*index, *to));
                if moved {
                    sync_control_points(list, *shape);
                } else {
                    log::warn!("No vertex {} on shape {}", index, shape);
                }
            }
            Command::Clear => list.clear(),
        }
    }
}

/// Re-seat the displayed control points of `shape_id` on its current vertices
fn sync_control_points(list: &mut dyn DisplayList, shape_id: NodeId) {
    let Some(points) = list
        .get(shape_id)
        .and_then(Node::as_shape)
        .map(|shape| shape.control_points())
    else {
        return;
    };

    for point in points {
        if let Some(slot) = list.get_mut(point.id()) {
            *slot = Node::ControlPoint(point);
        }
    }
}
