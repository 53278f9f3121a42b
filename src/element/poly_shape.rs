use std::f32::consts::TAU;

use egui::{Color32, Mesh, Painter, Pos2, Rect, Shape, Stroke, Vec2};
use thiserror::Error;

use super::common::{self, DEFAULT_STROKE_WIDTH, SHAPE_HIT_TOLERANCE};
use super::{ControlPoint, Element, NodeId};

/// Number of text lines one polygon occupies in a map file
pub const RECORD_LINES: usize = 5;

/// Largest vertex count a room may have
pub const MAX_SIDES: usize = 64;

const KEY_SIDES: &str = "sides";
const KEY_POINTS: &str = "points";
const KEY_FILL: &str = "fill";
const KEY_STROKE: &str = "stroke";
const KEY_WIDTH: &str = "width";

const DEFAULT_FILL: Color32 = Color32::from_rgb(222, 214, 190);
const DEFAULT_OUTLINE: Color32 = Color32::from_rgb(60, 60, 60);

/// Reasons a polygon record could not be read back
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("expected {expected} lines, found {found}")]
    LineCount { expected: usize, found: usize },

    #[error("line {line}: expected key \"{expected}\", found \"{found}\"")]
    UnexpectedKey {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("invalid number \"{value}\" for \"{key}\"")]
    InvalidNumber { key: &'static str, value: String },

    #[error("invalid colour \"{0}\"")]
    InvalidColor(String),

    #[error("{sides} sides but {found} points")]
    PointCount { sides: usize, found: usize },

    #[error("a polygon needs at least 2 sides, got {0}")]
    TooFewSides(usize),

    #[error("a polygon has at most {} sides, got {0}", MAX_SIDES)]
    TooManySides(usize),
}

/// A room outline: a closed polygon with one draggable control point per vertex
#[derive(Debug, Clone, PartialEq)]
pub struct PolyShape {
    id: NodeId,
    sides: usize,
    points: Vec<Pos2>,
    fill: Color32,
    stroke: Color32,
    stroke_width: f32,
    // Ids of the control point nodes, empty until registered
    handles: Vec<NodeId>,
}

impl PolyShape {
    /// Create a degenerate polygon with every vertex at `anchor`.
    ///
    /// Returns `None` unless `sides` is within `2..=MAX_SIDES`.
    pub fn new(sides: usize, anchor: Pos2) -> Option<Self> {
        if !(2..=MAX_SIDES).contains(&sides) {
            return None;
        }
        Some(Self {
            id: NodeId::new(),
            sides,
            points: vec![anchor; sides],
            fill: DEFAULT_FILL,
            stroke: DEFAULT_OUTLINE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            handles: Vec::new(),
        })
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn fill(&self) -> Color32 {
        self.fill
    }

    pub fn stroke(&self) -> Color32 {
        self.stroke
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Mean of the vertices
    pub fn center(&self) -> Pos2 {
        let sum = self
            .points
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        (sum / self.points.len() as f32).to_pos2()
    }

    /// Recompute every vertex from a drag that started at `start` and is now at `end`.
    ///
    /// The polygon is inscribed in the box spanned by the two points. When
    /// `symmetrical` is set it is regular and its last vertex sits on `end`;
    /// a 2-sided polygon is then exactly the segment `start..end`.
    pub fn redraw(&mut self, start: Pos2, end: Pos2, symmetrical: bool) {
        let center = start + (end - start) / 2.0;
        let n = self.sides as f32;

        if symmetrical {
            let radius = start.distance(end) / 2.0;
            let toward = end - center;
            let theta = toward.y.atan2(toward.x);
            for (i, point) in self.points.iter_mut().enumerate() {
                let angle = theta + (i + 1) as f32 * TAU / n;
                *point = center + Vec2::angled(angle) * radius;
            }
        } else {
            let radii = (end - start).abs() / 2.0;
            let theta = -TAU / 4.0;
            for (i, point) in self.points.iter_mut().enumerate() {
                let dir = Vec2::angled(theta + i as f32 * TAU / n);
                *point = center + Vec2::new(dir.x * radii.x, dir.y * radii.y);
            }
        }
    }

    /// Move a single vertex, as when its control point is dragged
    pub fn set_point(&mut self, index: usize, pos: Pos2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = pos;
                true
            }
            None => false,
        }
    }

    /// Allocate ids for the control points; a no-op once registered
    pub fn register_control_points(&mut self) {
        if self.handles.len() != self.sides {
            self.handles = (0..self.sides).map(|_| NodeId::new()).collect();
        }
    }

    /// Ids of the registered control points, in vertex order
    pub fn control_point_ids(&self) -> &[NodeId] {
        &self.handles
    }

    /// Control point nodes positioned on the current vertices
    pub fn control_points(&self) -> Vec<ControlPoint> {
        self.handles
            .iter()
            .zip(&self.points)
            .enumerate()
            .map(|(index, (id, center))| ControlPoint::new(*id, self.id, index, *center))
            .collect()
    }

    /// Encode as `RECORD_LINES` lines joined with `\n`
    pub fn encode(&self) -> String {
        let points = self
            .points
            .iter()
            .map(|p| format!("{} {}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        [
            format!("{KEY_SIDES} {}", self.sides),
            format!("{KEY_POINTS} {points}"),
            format!("{KEY_FILL} {}", common::color_to_hex(self.fill)),
            format!("{KEY_STROKE} {}", common::color_to_hex(self.stroke)),
            format!("{KEY_WIDTH} {}", self.stroke_width),
        ]
        .join("\n")
    }

    /// Rebuild a polygon from one record. Control points come back registered.
    pub fn decode<S: AsRef<str>>(lines: &[S]) -> Result<Self, DecodeError> {
        if lines.len() != RECORD_LINES {
            return Err(DecodeError::LineCount {
                expected: RECORD_LINES,
                found: lines.len(),
            });
        }

        let value = |line: usize, key: &'static str| field(lines, line, key);

        let sides_text = value(0, KEY_SIDES)?;
        let sides: usize = sides_text.parse().map_err(|_| DecodeError::InvalidNumber {
            key: KEY_SIDES,
            value: sides_text.to_owned(),
        })?;
        if sides < 2 {
            return Err(DecodeError::TooFewSides(sides));
        }
        if sides > MAX_SIDES {
            return Err(DecodeError::TooManySides(sides));
        }

        let coords = value(1, KEY_POINTS)?
            .split_whitespace()
            .map(|v| {
                v.parse::<f32>().map_err(|_| DecodeError::InvalidNumber {
                    key: KEY_POINTS,
                    value: v.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if coords.len() != sides * 2 {
            return Err(DecodeError::PointCount {
                sides,
                found: coords.len() / 2,
            });
        }
        let points = coords
            .chunks_exact(2)
            .map(|xy| Pos2::new(xy[0], xy[1]))
            .collect();

        let color = |line: usize, key: &'static str| -> Result<Color32, DecodeError> {
            let text = value(line, key)?;
            common::color_from_hex(text).ok_or_else(|| DecodeError::InvalidColor(text.to_owned()))
        };
        let fill = color(2, KEY_FILL)?;
        let stroke = color(3, KEY_STROKE)?;

        let width_text = value(4, KEY_WIDTH)?;
        let stroke_width = width_text.parse().map_err(|_| DecodeError::InvalidNumber {
            key: KEY_WIDTH,
            value: width_text.to_owned(),
        })?;

        let mut shape = Self {
            id: NodeId::new(),
            sides,
            points,
            fill,
            stroke,
            stroke_width,
            handles: Vec::new(),
        };
        shape.register_control_points();
        Ok(shape)
    }
}

/// Value of the `key` line at `line`, or why it is not there
fn field<'a, S: AsRef<str>>(
    lines: &'a [S],
    line: usize,
    key: &'static str,
) -> Result<&'a str, DecodeError> {
    let text = lines[line].as_ref().trim();
    let (found, rest) = text.split_once(' ').unwrap_or((text, ""));
    if found == key {
        Ok(rest.trim())
    } else {
        Err(DecodeError::UnexpectedKey {
            line,
            expected: key,
            found: found.to_owned(),
        })
    }
}

impl Element for PolyShape {
    fn id(&self) -> NodeId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "polygon"
    }

    fn rect(&self) -> Rect {
        common::calculate_bounds(&self.points, self.stroke_width / 2.0)
    }

    fn draw(&self, painter: &Painter) {
        let outline = Stroke::new(self.stroke_width, self.stroke);
        if self.sides == 2 {
            painter.add(Shape::line_segment([self.points[0], self.points[1]], outline));
            return;
        }

        // Vertex drags can leave the outline concave, so the fill is triangulated
        let triangles = common::triangulate(&self.points);
        if !triangles.is_empty() {
            let mut mesh = Mesh::default();
            for point in &self.points {
                mesh.colored_vertex(*point, self.fill);
            }
            for [a, b, c] in triangles {
                mesh.add_triangle(a, b, c);
            }
            painter.add(Shape::mesh(mesh));
        }
        painter.add(Shape::closed_line(self.points.clone(), outline));
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        if common::polygon_contains(&self.points, pos) {
            return true;
        }

        // Outline, including the closing edge
        let tolerance = self.stroke_width / 2.0 + SHAPE_HIT_TOLERANCE;
        let n = self.points.len();
        (0..n).any(|i| {
            let (a, b) = (self.points[i], self.points[(i + 1) % n]);
            common::distance_to_line_segment(pos, a, b) <= tolerance
        })
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }
}
