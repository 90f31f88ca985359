//! Per-frame draw pass using macroquad's 3D primitives

use macroquad::prelude::{
    clear_background, draw_cube, draw_line_3d, draw_sphere, set_camera, set_default_camera,
};

use super::{OrbitCamera, Scene, Shape};
use super::types::Color;

/// Draw every node through the orbit camera
pub fn draw_scene(scene: &Scene, camera: &OrbitCamera, background: Color) {
    clear_background(background.to_macroquad());
    set_camera(&camera.to_camera3d());

    for node in scene.nodes() {
        let color = node.color.to_macroquad();
        let position = node.position.to_macroquad();
        match &node.shape {
            Shape::Box { size } => {
                draw_cube(position, size.mul_elem(node.scale).to_macroquad(), None, color);
            }
            Shape::Sphere { radius } => {
                draw_sphere(position, radius * node.scale.max_elem(), None, color);
            }
            Shape::Lines { segments } => {
                for (a, b) in segments {
                    let a = node.position + a.mul_elem(node.scale);
                    let b = node.position + b.mul_elem(node.scale);
                    draw_line_3d(a.to_macroquad(), b.to_macroquad(), color);
                }
            }
        }
    }

    set_default_camera();
}
