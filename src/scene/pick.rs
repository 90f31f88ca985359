//! Nearest-hit picking against the scene

use super::ray::{ray_aabb_intersection, ray_segment_closest, ray_sphere_intersection, Ray};
use super::{NodeId, Scene, SceneNode, Shape};

/// A pick result: which node, and how far along the ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub node: NodeId,
    pub distance: f32,
}

/// Distance along `ray` at which it hits `node`, if it does.
///
/// Line segments count as hit when the ray passes within `line_threshold`.
pub fn intersect_node(ray: &Ray, node: &SceneNode, line_threshold: f32) -> Option<f32> {
    match &node.shape {
        Shape::Box { size } => {
            let half = size.mul_elem(node.scale) * 0.5;
            ray_aabb_intersection(ray, node.position - half, node.position + half)
        }
        Shape::Sphere { radius } => {
            ray_sphere_intersection(ray, node.position, radius * node.scale.max_elem())
        }
        Shape::Lines { segments } => segments
            .iter()
            .filter_map(|(a, b)| {
                let a = node.position + a.mul_elem(node.scale);
                let b = node.position + b.mul_elem(node.scale);
                ray_segment_closest(ray, a, b)
            })
            .filter(|(_, gap)| *gap <= line_threshold)
            .map(|(t, _)| t)
            .reduce(f32::min),
    }
}

/// Nearest node along the ray within `[near, far]`, or None.
///
/// Ties keep the node that was added first.
pub fn pick(
    scene: &Scene,
    ray: &Ray,
    near: f32,
    far: f32,
    line_threshold: f32,
) -> Option<PickHit> {
    pick_among(scene, ray, near, far, line_threshold, |_| true)
}

/// Like `pick`, restricted to nodes accepted by `filter`
pub fn pick_among(
    scene: &Scene,
    ray: &Ray,
    near: f32,
    far: f32,
    line_threshold: f32,
    filter: impl Fn(&SceneNode) -> bool,
) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for node in scene.nodes().iter().filter(|n| filter(n)) {
        let Some(distance) = intersect_node(ray, node, line_threshold) else {
            continue;
        };
        if distance < near || distance > far {
            continue;
        }
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(PickHit { node: node.id, distance });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Color, Vec3};

    fn forward_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_empty_scene_picks_nothing() {
        let scene = Scene::new();
        assert!(pick(&scene, &forward_ray(), 0.1, 1000.0, 1.0).is_none());
    }

    #[test]
    fn test_nearest_wins() {
        let mut scene = Scene::new();
        let far = scene.add("far", Vec3::new(0.0, 0.0, -2.0), Shape::Box { size: Vec3::ONE }, Color::WHITE);
        let near = scene.add("near", Vec3::new(0.0, 0.0, 1.0), Shape::Sphere { radius: 0.2 }, Color::WHITE);

        let hit = pick(&scene, &forward_ray(), 0.1, 1000.0, 1.0).unwrap();
        assert_eq!(hit.node, near);
        assert!((hit.distance - 3.8).abs() < 1e-4);

        scene.remove(near);
        assert_eq!(pick(&scene, &forward_ray(), 0.1, 1000.0, 1.0).unwrap().node, far);
    }

    #[test]
    fn test_scale_grows_box() {
        let mut scene = Scene::new();
        let cube = scene.add("cube", Vec3::ZERO, Shape::Box { size: Vec3::ONE }, Color::WHITE);
        let ray = Ray::new(Vec3::new(0.8, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(pick(&scene, &ray, 0.1, 1000.0, 1.0).is_none());

        scene.get_mut(cube).unwrap().scale = Vec3::new(2.0, 1.0, 1.0);
        assert_eq!(pick(&scene, &ray, 0.1, 1000.0, 1.0).unwrap().node, cube);
    }

    #[test]
    fn test_line_threshold() {
        let mut scene = Scene::new();
        let segments = vec![(Vec3::new(-1.0, 0.5, 0.0), Vec3::new(1.0, 0.5, 0.0))];
        let lines = scene.add("lines", Vec3::ZERO, Shape::Lines { segments }, Color::WHITE);

        assert_eq!(pick(&scene, &forward_ray(), 0.1, 1000.0, 1.0).unwrap().node, lines);
        assert!(pick(&scene, &forward_ray(), 0.1, 1000.0, 0.25).is_none());
    }

    #[test]
    fn test_far_plane() {
        let mut scene = Scene::new();
        scene.add("cube", Vec3::ZERO, Shape::Box { size: Vec3::ONE }, Color::WHITE);
        assert!(pick(&scene, &forward_ray(), 0.1, 2.0, 1.0).is_none());
    }

    #[test]
    fn test_pick_among_filter() {
        let mut scene = Scene::new();
        scene.add("cube", Vec3::ZERO, Shape::Box { size: Vec3::ONE }, Color::WHITE);
        let ball = scene.add("ball", Vec3::new(0.0, 0.0, -2.0), Shape::Sphere { radius: 0.1 }, Color::WHITE);
        let hit = pick_among(&scene, &forward_ray(), 0.1, 1000.0, 1.0, |n| n.name == "ball");
        assert_eq!(hit.map(|h| h.node), Some(ball));
    }
}
