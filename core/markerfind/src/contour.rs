use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

/// A traced region boundary with two-level nesting information.
///
/// `parent` is the enclosing outer border for hole boundaries; `has_child`
/// marks outer borders that enclose at least one hole.
#[derive(Debug, Clone)]
pub(crate) struct TracedContour {
    pub points: Vec<Point<i32>>,
    pub parent: Option<usize>,
    pub has_child: bool,
}

impl TracedContour {
    /// Neither nested inside another region nor enclosing a hole.
    pub fn is_isolated(&self) -> bool {
        self.parent.is_none() && !self.has_child
    }
}

/// Trace all foreground region boundaries of a binary mask.
///
/// The tracer's full nesting tree is flattened to two levels: every outer
/// border is top-level, even when it sits inside another component's hole,
/// and every hole border keeps its enclosing outer border as parent. The
/// returned order is the tracer's discovery order and is deterministic for
/// a given mask.
pub(crate) fn trace_contours(mask: &GrayImage) -> Vec<TracedContour> {
    let raw = find_contours::<i32>(mask);

    let mut child_counts = vec![0usize; raw.len()];
    for contour in &raw {
        if matches!(contour.border_type, BorderType::Hole) {
            if let Some(parent) = contour.parent {
                child_counts[parent] += 1;
            }
        }
    }

    raw.into_iter()
        .enumerate()
        .map(|(i, contour)| TracedContour {
            parent: match contour.border_type {
                BorderType::Hole => contour.parent,
                BorderType::Outer => None,
            },
            has_child: child_counts[i] > 0,
            points: compress_collinear(contour.points),
        })
        .collect()
}

/// Drop interior collinear vertices from a closed polyline, keeping only the
/// points where the boundary changes direction. Enclosed area and moments
/// are unchanged by this compression.
pub(crate) fn compress_collinear(points: Vec<Point<i32>>) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    let mut kept = Vec::with_capacity(n.min(16));
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let cur = points[i];
        let next = points[(i + 1) % n];
        let cross = (cur.x - prev.x) * (next.y - cur.y) - (cur.y - prev.y) * (next.x - cur.x);
        if cross != 0 {
            kept.push(cur);
        }
    }
    kept
}
