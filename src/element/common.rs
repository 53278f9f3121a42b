use egui::{Color32, Pos2, Rect, Vec2};

// Common constants for all element types
pub const CONTROL_POINT_RADIUS: f32 = 5.0;
pub const SHAPE_HIT_TOLERANCE: f32 = 4.0;
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Calculate distance from a point to a line segment (useful for outline hit testing)
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

/// Even-odd ray casting; works for concave outlines left behind by vertex edits
pub(crate) fn polygon_contains(points: &[Pos2], pos: Pos2) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > pos.y) != (b.y > pos.y) {
            let cross_x = (b.x - a.x) * (pos.y - a.y) / (b.y - a.y) + a.x;
            if pos.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn cross(u: Vec2, v: Vec2) -> f32 {
    u.x * v.y - u.y * v.x
}

fn in_triangle(p: Pos2, a: Pos2, b: Pos2, c: Pos2) -> bool {
    let d1 = cross(b - a, p - a);
    let d2 = cross(c - b, p - b);
    let d3 = cross(a - c, p - c);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Ear-clipping triangulation of a simple polygon, as vertex index triples.
///
/// Empty for zero-area outlines. Self-intersecting outlines may come back
/// partially covered.
pub(crate) fn triangulate(points: &[Pos2]) -> Vec<[u32; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let twice_area: f32 = (0..n)
        .map(|i| cross(points[i].to_vec2(), points[(i + 1) % n].to_vec2()))
        .sum();
    if twice_area.abs() <= f32::EPSILON {
        return Vec::new();
    }
    let winding = twice_area.signum();

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);
    while remaining.len() > 3 {
        let m = remaining.len();
        let corner = |i: usize| {
            (
                remaining[(i + m - 1) % m],
                remaining[i],
                remaining[(i + 1) % m],
            )
        };

        let ear = (0..m).find(|&i| {
            let (a, b, c) = corner(i);
            let (pa, pb, pc) = (points[a], points[b], points[c]);
            cross(pb - pa, pc - pb) * winding > 0.0
                && remaining
                    .iter()
                    .filter(|&&j| j != a && j != b && j != c)
                    .all(|&j| !in_triangle(points[j], pa, pb, pc))
        });

        match ear {
            Some(i) => {
                let (a, b, c) = corner(i);
                triangles.push([a as u32, b as u32, c as u32]);
                remaining.remove(i);
            }
            None => {
                // Collinear vertices add no area; anything else cannot be clipped
                let flat = (0..m).find(|&i| {
                    let (a, b, c) = corner(i);
                    cross(points[b] - points[a], points[c] - points[b]).abs() <= f32::EPSILON
                });
                match flat {
                    Some(i) => {
                        remaining.remove(i);
                    }
                    None => return triangles,
                }
            }
        }
    }

    if let [a, b, c] = remaining[..] {
        triangles.push([a as u32, b as u32, c as u32]);
    }
    triangles
}

pub(crate) fn color_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
}

pub(crate) fn color_from_hex(text: &str) -> Option<Color32> {
    let hex = text.strip_prefix('#')?;
    if hex.len() != 8 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color32::from_rgba_unmultiplied(
        channel(0)?,
        channel(2)?,
        channel(4)?,
        channel(6)?,
    ))
}
