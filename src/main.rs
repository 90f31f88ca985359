//! CUBE-SCALER: click a cube, drag its axis handles to rescale it
//!
//! Runs natively or in the browser (wasm32 + macroquad's JS bundle).
//! - Left-drag anywhere orbits the camera, the wheel zooms
//! - Click the cube to select it: it brightens, gains an outline and three handles
//! - Drag a handle to scale the cube along that handle's axis
//! - Click empty space to deselect

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod input;
mod interaction;
mod scene;

use macroquad::prelude::*;

use config::{AppConfig, CONFIG_PATH};
use input::{PointerState, Viewport};
use interaction::CubeInteraction;
use scene::render::draw_scene;
use scene::{pointer_to_ndc, screen_to_ray, OrbitCamera, Scene};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("CUBE-SCALER v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    println!("=== CUBE-SCALER v{} ===", VERSION);

    let config = AppConfig::load_or_default(CONFIG_PATH).await;

    let mut viewport = Viewport::current();
    let mut camera = OrbitCamera::new(&config.camera, viewport.aspect());
    let mut scene = Scene::new();
    let mut cube = CubeInteraction::new(&mut scene, config.interaction.clone(), config.camera.rotate_speed);

    let mut pointer = PointerState::poll(&PointerState::default());

    loop {
        // Resize: only the camera aspect follows the surface
        if viewport.resize(Viewport::current()) {
            camera.aspect = viewport.aspect();
            println!("Viewport resized to {}x{}", viewport.width, viewport.height);
        }

        pointer = PointerState::poll(&pointer);
        let (ndc_x, ndc_y) = pointer_to_ndc(pointer.x, pointer.y, viewport.width, viewport.height);
        let ray = screen_to_ray(ndc_x, ndc_y, &camera);
        let now = get_time();

        if pointer.left_pressed {
            cube.pointer_down(&mut scene, &mut camera, &ray, now);
        } else if pointer.left_down && pointer.moved() {
            // Handle drags zero the rotate speed before the orbit sees this delta
            cube.pointer_move(&mut scene, &mut camera, &ray);
            camera.rotate(pointer.dx, pointer.dy, viewport.height);
        }
        if pointer.left_released {
            cube.pointer_up(&mut camera);
        }
        camera.zoom(pointer.scroll);
        camera.update();

        cube.tick(&mut scene, now);

        draw_scene(&scene, &camera, config.background);

        next_frame().await;
    }
}
