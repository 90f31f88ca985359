//! Ray casting utilities for picking and drag operations
//!
//! Converts pointer coordinates to NDC and then to world-space rays through
//! the orbit camera, plus the intersection tests the picker needs.

use super::camera::OrbitCamera;
use super::math::Vec3;

/// A 3D ray with origin and direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,  // Normalized
}

impl Ray {
    /// Create a new ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get point at distance t along ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Convert a pointer position in viewport pixels to normalized device coordinates.
///
/// Both axes land in [-1, 1]; Y is flipped so +1 is the top edge.
pub fn pointer_to_ndc(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    (
        (x / width) * 2.0 - 1.0,
        -(y / height) * 2.0 + 1.0,
    )
}

/// Generate a ray from NDC through a perspective camera.
///
/// The ray starts at the camera position. At unit distance along the view
/// direction the image plane spans `tan(fov/2)` vertically and
/// `tan(fov/2) * aspect` horizontally.
pub fn screen_to_ray(ndc_x: f32, ndc_y: f32, camera: &OrbitCamera) -> Ray {
    let half_h = (camera.fov_radians() * 0.5).tan();
    let half_w = half_h * camera.aspect;

    let forward = camera.forward();
    let right = camera.right();
    let up = camera.up();

    let dir = forward + right * (ndc_x * half_w) + up * (ndc_y * half_h);
    Ray::new(camera.position(), dir)
}

/// Find the intersection of a ray with a plane.
///
/// Returns the distance along the ray to the intersection point,
/// or None if the ray is parallel to the plane or intersection is behind ray origin.
pub fn ray_plane_intersection(
    ray: &Ray,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<f32> {
    let denom = ray.direction.dot(plane_normal);
    if denom.abs() < 0.0001 {
        return None;  // Ray parallel to plane
    }

    let t = (plane_point - ray.origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None;  // Intersection behind ray origin
    }

    Some(t)
}

/// Slab test against an axis-aligned box.
///
/// Returns the entry distance, or the exit distance when the origin is inside.
pub fn ray_aabb_intersection(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for (o, d, lo, hi) in [
        (ray.origin.x, ray.direction.x, min.x, max.x),
        (ray.origin.y, ray.direction.y, min.y, max.y),
        (ray.origin.z, ray.direction.z, min.z, max.z),
    ] {
        if d.abs() < 1e-8 {
            // Parallel to this slab: must already be inside it
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let t1 = (lo - o) / d;
        let t2 = (hi - o) / d;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Ray-sphere intersection, nearest non-negative distance
pub fn ray_sphere_intersection(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = -b - sq;
    let t1 = -b + sq;
    if t0 >= 0.0 {
        Some(t0)
    } else if t1 >= 0.0 {
        Some(t1)
    } else {
        None
    }
}

/// Closest approach between a ray and a line segment.
///
/// Returns `(distance_along_ray, gap)` where `gap` is the shortest distance
/// between the two, or None if the closest point on the ray is behind its origin.
pub fn ray_segment_closest(ray: &Ray, a: Vec3, b: Vec3) -> Option<(f32, f32)> {
    let seg = b - a;
    let w = ray.origin - a;

    let d1 = ray.direction;
    let aa = d1.dot(d1);
    let bb = d1.dot(seg);
    let cc = seg.dot(seg);
    let dd = w.dot(d1);
    let ee = w.dot(seg);

    let denom = aa * cc - bb * bb;

    // s: parameter along segment in [0, 1]
    let mut s = if denom.abs() < 1e-8 || cc < 1e-12 {
        0.0
    } else {
        ((aa * ee - bb * dd) / denom).clamp(0.0, 1.0)
    };

    // Re-solve t for the clamped s, then re-clamp s for the ray's t >= 0
    let mut t = (s * bb - dd) / aa;
    if t < 0.0 {
        t = 0.0;
        if cc > 1e-12 {
            s = (ee / cc).clamp(0.0, 1.0);
        }
        let on_ray = ray.origin;
        let on_seg = a + seg * s;
        let gap = (on_ray - on_seg).len();
        // Closest point sits at the ray origin; treat as a miss when the segment is behind
        if (on_seg - ray.origin).dot(ray.direction) < 0.0 {
            return None;
        }
        return Some((t, gap));
    }

    let on_ray = ray.at(t);
    let on_seg = a + seg * s;
    Some((t, (on_ray - on_seg).len()))
}
