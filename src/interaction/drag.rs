//! Drag capture for a fixed set of nodes
//!
//! Bound to a list of draggable nodes at creation. A pointer-down on one of
//! them starts a drag on the plane facing the camera through the node; each
//! pointer move slides the node across that plane, keeping the grab offset.
//! Dropping the capture disposes it: no further events are produced.

use crate::scene::pick::pick_among;
use crate::scene::ray::ray_plane_intersection;
use crate::scene::{NodeId, OrbitCamera, Ray, Scene, Vec3};

/// Events emitted while dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Start { node: NodeId },
    /// The node has already been moved to `position`
    Move { node: NodeId, position: Vec3 },
    End { node: NodeId },
}

/// State of an in-progress drag
#[derive(Debug, Clone)]
pub struct DragState {
    pub node: NodeId,
    /// Node position at drag start
    pub initial_position: Vec3,
    pub plane_point: Vec3,
    pub plane_normal: Vec3,
    /// Offset from the node center to the grab point on the plane
    pub handle_offset: Vec3,
}

/// Drag capture bound to `targets`
#[derive(Debug)]
pub struct DragCapture {
    targets: Vec<NodeId>,
    active: Option<DragState>,
}

impl DragCapture {
    pub fn new(targets: Vec<NodeId>) -> Self {
        Self { targets, active: None }
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&DragState> {
        self.active.as_ref()
    }

    /// Start a drag if the ray hits one of the targets
    pub fn pointer_down(&mut self, scene: &Scene, camera: &OrbitCamera, ray: &Ray) -> Option<DragEvent> {
        let hit = pick_among(scene, ray, camera.near, camera.far, 0.0, |n| self.targets.contains(&n.id))?;
        let node = scene.get(hit.node)?;

        let plane_normal = camera.forward();
        let plane_point = node.position;
        let handle_offset = match ray_plane_intersection(ray, plane_point, plane_normal) {
            Some(t) => ray.at(t) - node.position,
            None => Vec3::ZERO,
        };

        self.active = Some(DragState {
            node: node.id,
            initial_position: node.position,
            plane_point,
            plane_normal,
            handle_offset,
        });
        Some(DragEvent::Start { node: node.id })
    }

    /// Slide the dragged node to where `ray` meets the drag plane
    pub fn pointer_move(&mut self, scene: &mut Scene, ray: &Ray) -> Option<DragEvent> {
        let state = self.active.as_ref()?;
        let t = ray_plane_intersection(ray, state.plane_point, state.plane_normal)?;
        let position = ray.at(t) - state.handle_offset;

        let node = scene.get_mut(state.node)?;
        node.position = position;
        Some(DragEvent::Move { node: state.node, position })
    }

    pub fn pointer_up(&mut self) -> Option<DragEvent> {
        self.active.take().map(|s| DragEvent::End { node: s.node })
    }
}
