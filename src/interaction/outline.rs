//! Wireframe outline geometry

use crate::scene::Vec3;

/// Name given to outline nodes
pub const OUTLINE_NAME: &str = "outline";

/// The 12 edges of a box of `size`, centered on the origin
pub fn box_edges(size: Vec3) -> Vec<(Vec3, Vec3)> {
    let h = size * 0.5;
    let corner = |sx: f32, sy: f32, sz: f32| Vec3::new(sx * h.x, sy * h.y, sz * h.z);

    let mut edges = Vec::with_capacity(12);
    for &s in &[-1.0, 1.0] {
        for &t in &[-1.0, 1.0] {
            // Parallel to X, Y and Z respectively
            edges.push((corner(-1.0, s, t), corner(1.0, s, t)));
            edges.push((corner(s, -1.0, t), corner(s, 1.0, t)));
            edges.push((corner(s, t, -1.0), corner(s, t, 1.0)));
        }
    }
    edges
}
