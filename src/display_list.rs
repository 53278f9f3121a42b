use egui::Pos2;

use crate::element::{Element, Node, NodeId, PolyShape};

/// Ordered collection of everything visible on the canvas.
///
/// Order is paint order: later nodes are drawn on top and win hit tests.
pub trait DisplayList {
    /// Append a node on top of everything else
    fn add(&mut self, node: Node);

    /// Remove the node with `id`, returning it if it was present
    fn remove(&mut self, id: NodeId) -> Option<Node>;

    /// All nodes in paint order
    fn nodes(&self) -> &[Node];

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node>;

    /// Drop every node
    fn clear(&mut self);

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes().iter().find(|node| node.id() == id)
    }

    fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize {
        self.nodes().len()
    }

    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// Topmost node under `pos`
    fn node_at(&self, pos: Pos2) -> Option<&Node> {
        self.nodes().iter().rev().find(|node| node.hit_test(pos))
    }

    /// Every polygon, bottom to top
    fn shapes(&self) -> Box<dyn Iterator<Item = &PolyShape> + '_> {
        Box::new(self.nodes().iter().filter_map(Node::as_shape))
    }
}

/// The display list behind the map canvas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    nodes: Vec<Node>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayList for Canvas {
    fn add(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn remove(&mut self, id: NodeId) -> Option<Node> {
        let index = self.nodes.iter().position(|node| node.id() == id)?;
        Some(self.nodes.remove(index))
    }

    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id() == id)
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}
