use imageproc::point::Point;

/// Zeroth- and first-order geometric moments of the region enclosed by a
/// boundary polygon.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Moments {
    /// Total mass; equals the enclosed area.
    pub m00: f64,
    /// First-order moment along x.
    pub m10: f64,
    /// First-order moment along y.
    pub m01: f64,
}

impl Moments {
    /// Centroid (m10/m00, m01/m00), or `None` for a zero-mass region.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.m00 == 0.0 {
            return None;
        }
        Some((self.m10 / self.m00, self.m01 / self.m00))
    }
}

/// Enclosed area of a closed boundary polygon (shoelace formula, absolute
/// value). Fewer than three vertices enclose nothing.
pub(crate) fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        acc += f64::from(p.x) * f64::from(q.y) - f64::from(q.x) * f64::from(p.y);
    }
    (acc / 2.0).abs()
}

/// Moments of a closed boundary polygon via Green's theorem, sign-normalized
/// so m00 is non-negative regardless of winding direction.
pub(crate) fn contour_moments(points: &[Point<i32>]) -> Moments {
    if points.len() < 3 {
        return Moments::default();
    }
    let (mut m00, mut m10, mut m01) = (0.0, 0.0, 0.0);
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        let (xi, yi) = (f64::from(p.x), f64::from(p.y));
        let (xj, yj) = (f64::from(q.x), f64::from(q.y));
        let cross = xi * yj - xj * yi;
        m00 += cross;
        m10 += cross * (xi + xj);
        m01 += cross * (yi + yj);
    }
    m00 /= 2.0;
    m10 /= 6.0;
    m01 /= 6.0;
    if m00 < 0.0 {
        m00 = -m00;
        m10 = -m10;
        m01 = -m01;
    }
    Moments { m00, m10, m01 }
}
