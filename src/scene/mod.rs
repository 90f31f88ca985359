//! Scene graph, camera and picking
//!
//! The thin harness the interaction core talks to: a flat list of
//! renderable nodes, an orbit camera convertible to rays, a nearest-hit
//! picker, and the macroquad draw pass.
//!
//! # Module Organization
//!
//! - `math` - Vec3
//! - `types` - Color, Axis
//! - `camera` - OrbitCamera (projection + pose)
//! - `ray` - Ray, pointer-to-ray conversion, intersection tests
//! - `pick` - nearest-hit query against the scene
//! - `render` - per-frame draw calls

#![allow(dead_code)]

pub mod camera;
pub mod math;
pub mod pick;
pub mod ray;
pub mod render;
pub mod types;

pub use camera::OrbitCamera;
pub use math::Vec3;
#[allow(unused_imports)]
pub use pick::{pick, PickHit};
pub use ray::{pointer_to_ndc, screen_to_ray, Ray};
#[allow(unused_imports)]
pub use types::{Axis, Color};

/// Stable identity of a node for the lifetime of the scene
pub type NodeId = u32;

/// Geometry of a node, before its scale is applied
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned box centered on the node position
    Box { size: Vec3 },
    /// Sphere centered on the node position
    Sphere { radius: f32 },
    /// Line segments in node-local space
    Lines { segments: Vec<(Vec3, Vec3)> },
}

/// A renderable object in the scene
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub id: NodeId,
    /// Identity tag used for pick matching
    pub name: String,
    pub position: Vec3,
    pub scale: Vec3,
    pub shape: Shape,
    pub color: Color,
}

impl SceneNode {
    pub fn is_lines(&self) -> bool {
        matches!(self.shape, Shape::Lines { .. })
    }
}

/// Flat scene graph. Nodes draw and pick in insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    next_id: NodeId,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at unit scale and return its id
    pub fn add(&mut self, name: impl Into<String>, position: Vec3, shape: Shape, color: Color) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.push(SceneNode {
            id,
            name: name.into(),
            position,
            scale: Vec3::ONE,
            shape,
            color,
        });
        id
    }

    /// Remove a node, returning it if it was present
    pub fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(idx))
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove() {
        let mut scene = Scene::new();
        let a = scene.add("a", Vec3::ZERO, Shape::Sphere { radius: 1.0 }, Color::WHITE);
        let b = scene.add("b", Vec3::ZERO, Shape::Sphere { radius: 1.0 }, Color::WHITE);
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);

        let removed = scene.remove(a).unwrap();
        assert_eq!(removed.name, "a");
        assert!(!scene.contains(a));
        assert!(scene.remove(a).is_none());
        assert_eq!(scene.find_by_name("b").map(|n| n.id), Some(b));
    }

    #[test]
    fn test_ids_not_reused() {
        let mut scene = Scene::new();
        let a = scene.add("a", Vec3::ZERO, Shape::Sphere { radius: 1.0 }, Color::WHITE);
        scene.remove(a);
        let b = scene.add("b", Vec3::ZERO, Shape::Sphere { radius: 1.0 }, Color::WHITE);
        assert_ne!(a, b);
    }
}
