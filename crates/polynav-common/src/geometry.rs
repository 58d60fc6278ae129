//! 2D geometry operations on the horizontal plane
//!
//! Navigation meshes handled by polynav are planar: X and Y span the
//! walkable plane and Z is elevation. Every predicate here ignores Z, so
//! vertically stacked geometry is not distinguished.

use glam::{Vec2, Vec3};

/// Projects a point onto the horizontal plane.
#[inline]
pub fn to_2d(p: &Vec3) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Calculate squared distance between two points on the horizontal plane.
#[inline]
pub fn dist_sqr_2d(a: &Vec3, b: &Vec3) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Calculate distance between two points on the horizontal plane.
#[inline]
pub fn dist_2d(a: &Vec3, b: &Vec3) -> f32 {
    dist_sqr_2d(a, b).sqrt()
}

/// Check if a point is inside a polygon on the horizontal plane.
///
/// Uses the even-odd (ray casting) rule: a ray is cast along +X and the
/// point is inside when it crosses the boundary an odd number of times.
/// Points exactly on an edge may report either result; callers that need
/// a stable answer resolve overlaps by polygon order.
pub fn point_in_polygon_2d(p: &Vec3, verts: &[Vec3]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = &verts[i];
        let vj = &verts[j];

        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Arithmetic mean of a set of points. Returns the origin for an empty set.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = points.iter().copied().sum();
    sum / points.len() as f32
}
