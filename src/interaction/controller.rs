//! Cube interaction controller
//!
//! Owns the selection state and everything hanging off it: the handles, the
//! drag capture, the outline node and the color animation. Pointer events
//! come in with the scene and camera passed alongside; nothing here is
//! global.

use crate::config::InteractionConfig;
use crate::scene::{pick, Color, NodeId, OrbitCamera, PickHit, Ray, Scene, Shape, Vec3};

use super::color::ColorTransition;
use super::drag::{DragCapture, DragEvent};
use super::frame::FrameTasks;
use super::handles::{axis_scale, HandleManager};
use super::outline::{box_edges, OUTLINE_NAME};
use super::selection::{PickClass, Selection, Transition};

/// Identity tag of the cube node
pub const CUBE_NAME: &str = "cube_1";

/// Keys for frame-scheduled animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    CubeColor,
}

pub struct CubeInteraction {
    config: InteractionConfig,
    selection: Selection,
    cube: NodeId,
    handles: HandleManager,
    drag: Option<DragCapture>,
    outline: Option<NodeId>,
    animations: FrameTasks<Animation, ColorTransition>,
    /// Orbit rotate speed restored on deactivation
    default_rotate_speed: f32,
}

impl CubeInteraction {
    /// Add the cube to `scene` and start in the inactive state
    pub fn new(scene: &mut Scene, config: InteractionConfig, default_rotate_speed: f32) -> Self {
        let cube = scene.add(
            CUBE_NAME,
            Vec3::ZERO,
            Shape::Box { size: Vec3::ONE },
            config.original_color,
        );
        Self {
            config,
            selection: Selection::Inactive,
            cube,
            handles: HandleManager::new(),
            drag: None,
            outline: None,
            animations: FrameTasks::new(),
            default_rotate_speed,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_active(&self) -> bool {
        self.selection.is_active()
    }

    pub fn cube(&self) -> NodeId {
        self.cube
    }

    pub fn outline(&self) -> Option<NodeId> {
        self.outline
    }

    pub fn handles(&self) -> &HandleManager {
        &self.handles
    }

    pub fn drag_capture(&self) -> Option<&DragCapture> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.as_ref().map_or(false, |d| d.is_dragging())
    }

    /// The color animation currently in flight, if any
    pub fn color_transition(&self) -> Option<&ColorTransition> {
        self.animations.get(Animation::CubeColor)
    }

    /// Nearest node under the ray
    pub fn pick(&self, scene: &Scene, camera: &OrbitCamera, ray: &Ray) -> Option<PickHit> {
        pick(scene, ray, camera.near, camera.far, self.config.line_pick_threshold)
    }

    /// Sort a pick result into what the selection machine needs
    pub fn classify(&self, hit: Option<PickHit>) -> PickClass {
        match hit {
            None => PickClass::Empty,
            Some(hit) => {
                let node = hit.node;
                if node == self.cube
                    || self.outline == Some(node)
                    || self.handles.axis_of(node).is_some()
                {
                    PickClass::Subject
                } else {
                    PickClass::Other
                }
            }
        }
    }

    /// Handle a pointer-down. Returns the selection transition it caused, if any.
    pub fn pointer_down(
        &mut self,
        scene: &mut Scene,
        camera: &mut OrbitCamera,
        ray: &Ray,
        now: f64,
    ) -> Option<Transition> {
        if let Some(capture) = self.drag.as_mut() {
            if let Some(DragEvent::Start { node }) = capture.pointer_down(scene, camera, ray) {
                if let Some(axis) = self.handles.axis_of(node) {
                    println!("Dragging {} handle", axis.label());
                }
            }
        }

        let hit = self.pick(scene, camera, ray);
        let (next, transition) = self.selection.next(self.classify(hit));
        self.selection = next;

        match transition {
            Some(Transition::Activate) => self.activate(scene, now),
            Some(Transition::Deactivate) => self.deactivate(scene, camera, now),
            None => {}
        }
        transition
    }

    /// Handle a pointer move. Returns true if a handle was dragged.
    pub fn pointer_move(&mut self, scene: &mut Scene, camera: &mut OrbitCamera, ray: &Ray) -> bool {
        let event = match self.drag.as_mut() {
            Some(capture) => capture.pointer_move(scene, ray),
            None => None,
        };
        match event {
            Some(DragEvent::Move { node, .. }) => {
                self.on_drag(scene, camera, node);
                true
            }
            _ => false,
        }
    }

    pub fn pointer_up(&mut self, camera: &mut OrbitCamera) {
        let ended = self.drag.as_mut().and_then(|capture| capture.pointer_up());
        if let Some(DragEvent::End { node }) = ended {
            if let Some(axis) = self.handles.axis_of(node) {
                println!("Released {} handle", axis.label());
            }
            if self.config.restore_orbit_on_drag_end {
                camera.rotate_speed = self.default_rotate_speed;
            }
        }
    }

    /// Sample running animations. Call once per frame.
    pub fn tick(&mut self, scene: &mut Scene, now: f64) {
        for (key, color) in self.animations.tick(now) {
            match key {
                Animation::CubeColor => {
                    if let Some(cube) = scene.get_mut(self.cube) {
                        cube.color = color;
                    }
                }
            }
        }
    }

    fn activate(&mut self, scene: &mut Scene, now: f64) {
        println!("Cube selected");
        let nodes = self.handles.create(scene, &self.config);
        self.drag = Some(DragCapture::new(nodes));
        self.start_color(scene, self.config.highlight_color, now);
        self.rebuild_outline(scene);
    }

    fn deactivate(&mut self, scene: &mut Scene, camera: &mut OrbitCamera, now: f64) {
        println!("Cube deselected");
        camera.rotate_speed = self.default_rotate_speed;
        self.handles.destroy(scene);
        self.drag = None;
        self.handles.reset_positions(scene);
        self.start_color(scene, self.config.original_color, now);
        self.remove_outline(scene);
    }

    /// A handle moved: pin it to its axis, rescale the cube, rebuild the outline
    fn on_drag(&mut self, scene: &mut Scene, camera: &mut OrbitCamera, node: NodeId) {
        camera.rotate_speed = 0.0;

        let Some(cube_position) = scene.get(self.cube).map(|c| c.position) else {
            return;
        };
        let Some(axis) = self.handles.constrain(scene, node, cube_position) else {
            return;
        };
        let Some(handle_position) = scene.get(node).map(|n| n.position) else {
            return;
        };

        let scale = axis_scale(handle_position, cube_position, axis, self.config.handle_offset);
        if let Some(cube) = scene.get_mut(self.cube) {
            cube.scale.set(axis, scale);
        }
        self.rebuild_outline(scene);
    }

    /// Begin a transition from the color currently on the cube
    fn start_color(&mut self, scene: &Scene, target: Color, now: f64) {
        let Some(current) = scene.get(self.cube).map(|c| c.color) else {
            return;
        };
        let transition = ColorTransition::new(current, target, now, self.config.color_duration_ms);
        self.animations.schedule(Animation::CubeColor, transition);
    }

    fn rebuild_outline(&mut self, scene: &mut Scene) {
        self.remove_outline(scene);
        let Some((position, scale)) = scene.get(self.cube).map(|c| (c.position, c.scale)) else {
            return;
        };
        let id = scene.add(
            OUTLINE_NAME,
            position,
            Shape::Lines { segments: box_edges(scale) },
            self.config.outline_color,
        );
        self.outline = Some(id);
    }

    fn remove_outline(&mut self, scene: &mut Scene) {
        if let Some(id) = self.outline.take() {
            scene.remove(id);
        }
    }
}
