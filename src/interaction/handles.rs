//! Scale handles
//!
//! One sphere per axis, offset from the cube along that axis. Dragging a
//! handle moves it along its own axis only; its distance from the cube sets
//! the cube's scale on that axis.

use std::collections::BTreeMap;

use crate::config::{InteractionConfig, RestPosition};
use crate::scene::{Axis, NodeId, Scene, Shape, Vec3};

/// Scene name for the handle on `axis`
pub fn handle_name(axis: Axis) -> String {
    format!("control_{}", axis.label())
}

/// Cube scale on `axis` implied by a handle position.
///
/// A handle sitting at exactly `offset` from the cube gives 1.0.
pub fn axis_scale(handle: Vec3, cube: Vec3, axis: Axis, offset: f32) -> f32 {
    (handle.get(axis) - cube.get(axis)).abs() / offset
}

/// A live handle in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleHandle {
    pub axis: Axis,
    pub node: NodeId,
}

/// Owns the handle nodes and their rest positions
#[derive(Debug, Default)]
pub struct HandleManager {
    handles: Vec<ScaleHandle>,
    rest_positions: BTreeMap<Axis, Vec3>,
}

impl HandleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the three handles to the scene. Does nothing if they already exist.
    ///
    /// With `RestPosition::Origin` the rest position is captured before the
    /// handle is moved out to its offset.
    pub fn create(&mut self, scene: &mut Scene, config: &InteractionConfig) -> Vec<NodeId> {
        if !self.handles.is_empty() {
            return self.nodes();
        }

        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            let mut position = Vec3::ZERO;
            let offset = axis.unit_vector() * config.handle_offset;

            let rest = match config.rest_position {
                RestPosition::Origin => position,
                RestPosition::Offset => offset,
            };
            self.rest_positions.insert(axis, rest);
            position = position + offset;

            let node = scene.add(
                handle_name(axis),
                position,
                Shape::Sphere { radius: config.handle_radius },
                config.handle_colors[i],
            );
            self.handles.push(ScaleHandle { axis, node });
        }
        self.nodes()
    }

    /// Remove all handles from the scene and stop tracking them
    pub fn destroy(&mut self, scene: &mut Scene) {
        for handle in self.handles.drain(..) {
            scene.remove(handle.node);
        }
    }

    /// Move every tracked handle back to its rest position
    pub fn reset_positions(&self, scene: &mut Scene) {
        for handle in &self.handles {
            let Some(rest) = self.rest_positions.get(&handle.axis) else {
                continue;
            };
            if let Some(node) = scene.get_mut(handle.node) {
                node.position = *rest;
            }
        }
    }

    /// Pin a dragged handle's off-axis coordinates to the cube.
    ///
    /// Returns the handle's axis, or None if `node` is not a handle.
    pub fn constrain(&self, scene: &mut Scene, node: NodeId, cube_position: Vec3) -> Option<Axis> {
        let axis = self.axis_of(node)?;
        let handle = scene.get_mut(node)?;
        for other in axis.others() {
            handle.position.set(other, cube_position.get(other));
        }
        Some(axis)
    }

    pub fn axis_of(&self, node: NodeId) -> Option<Axis> {
        self.handles.iter().find(|h| h.node == node).map(|h| h.axis)
    }

    pub fn node_for(&self, axis: Axis) -> Option<NodeId> {
        self.handles.iter().find(|h| h.axis == axis).map(|h| h.node)
    }

    pub fn nodes(&self) -> Vec<NodeId> {
        self.handles.iter().map(|h| h.node).collect()
    }

    pub fn rest_position(&self, axis: Axis) -> Option<Vec3> {
        self.rest_positions.get(&axis).copied()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(rest: RestPosition) -> (Scene, HandleManager, InteractionConfig) {
        let config = InteractionConfig { rest_position: rest, ..Default::default() };
        (Scene::new(), HandleManager::new(), config)
    }

    #[test]
    fn test_scale_formula() {
        let cube = Vec3::ZERO;
        assert_eq!(axis_scale(Vec3::new(1.5, 0.0, 0.0), cube, Axis::X, 1.5), 1.0);
        assert_eq!(axis_scale(Vec3::new(0.75, 0.0, 0.0), cube, Axis::X, 1.5), 0.5);
        assert_eq!(axis_scale(Vec3::new(0.0, -3.0, 0.0), cube, Axis::Y, 1.5), 2.0);
        assert_eq!(axis_scale(Vec3::new(9.0, 9.0, 0.0), cube, Axis::Z, 1.5), 0.0);
    }

    #[test]
    fn test_create_positions_and_names() {
        let (mut scene, mut handles, config) = setup(RestPosition::Origin);
        let nodes = handles.create(&mut scene, &config);
        assert_eq!(nodes.len(), 3);

        let expected = [
            (Axis::X, Vec3::new(1.5, 0.0, 0.0)),
            (Axis::Y, Vec3::new(0.0, 1.5, 0.0)),
            (Axis::Z, Vec3::new(0.0, 0.0, 1.5)),
        ];
        for (axis, pos) in expected {
            let node = scene.get(handles.node_for(axis).unwrap()).unwrap();
            assert_eq!(node.position, pos);
            assert_eq!(node.name, handle_name(axis));
        }
        assert_eq!(scene.find_by_name("control_X").unwrap().color.to_hex(), 0xFF0000);
    }

    #[test]
    fn test_create_is_idempotent() {
        let (mut scene, mut handles, config) = setup(RestPosition::Origin);
        let first = handles.create(&mut scene, &config);
        let second = handles.create(&mut scene, &config);
        assert_eq!(first, second);
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn test_rest_position_modes() {
        let (mut scene, mut handles, config) = setup(RestPosition::Origin);
        handles.create(&mut scene, &config);
        assert_eq!(handles.rest_position(Axis::Y), Some(Vec3::ZERO));

        let (mut scene, mut handles, config) = setup(RestPosition::Offset);
        handles.create(&mut scene, &config);
        assert_eq!(handles.rest_position(Axis::Y), Some(Vec3::new(0.0, 1.5, 0.0)));
    }

    #[test]
    fn test_reset_positions() {
        let (mut scene, mut handles, config) = setup(RestPosition::Offset);
        handles.create(&mut scene, &config);
        let x = handles.node_for(Axis::X).unwrap();
        scene.get_mut(x).unwrap().position = Vec3::new(0.3, 0.0, 0.0);

        handles.reset_positions(&mut scene);
        assert_eq!(scene.get(x).unwrap().position, Vec3::new(1.5, 0.0, 0.0));

        let (mut scene, mut handles, config) = setup(RestPosition::Origin);
        handles.create(&mut scene, &config);
        handles.reset_positions(&mut scene);
        for node in scene.nodes() {
            assert_eq!(node.position, Vec3::ZERO);
        }
    }

    #[test]
    fn test_destroy() {
        let (mut scene, mut handles, config) = setup(RestPosition::Origin);
        handles.create(&mut scene, &config);
        handles.destroy(&mut scene);
        assert!(handles.is_empty());
        assert!(scene.is_empty());
        // Rest positions outlive the handles
        assert!(handles.rest_position(Axis::Z).is_some());
    }

    #[test]
    fn test_constrain_pins_off_axis() {
        let (mut scene, mut handles, config) = setup(RestPosition::Origin);
        handles.create(&mut scene, &config);
        let y = handles.node_for(Axis::Y).unwrap();
        scene.get_mut(y).unwrap().position = Vec3::new(0.4, 2.0, -0.7);

        let axis = handles.constrain(&mut scene, y, Vec3::ZERO);
        assert_eq!(axis, Some(Axis::Y));
        assert_eq!(scene.get(y).unwrap().position, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_constrain_ignores_non_handles() {
        let (mut scene, handles, _) = setup(RestPosition::Origin);
        let other = scene.add("cube", Vec3::ZERO, Shape::Box { size: Vec3::ONE }, crate::scene::Color::WHITE);
        assert!(handles.constrain(&mut scene, other, Vec3::ZERO).is_none());
    }
}
