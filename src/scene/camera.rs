//! Orbit camera
//!
//! Spherical-coordinate camera circling a target point. Left-drag rotates,
//! the wheel dollies, and optional damping lets rotation coast to a stop.

use std::f32::consts::PI;

use macroquad::camera::Camera3D;

use super::math::Vec3;
use crate::config::CameraConfig;

/// Keeps phi away from the poles so the basis never degenerates
const POLE_EPSILON: f32 = 0.000001;

/// Camera state for 3D rendering and picking
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Distance from target
    pub radius: f32,
    /// Azimuth around +Y, 0 looks down -Z
    pub theta: f32,
    /// Polar angle from +Y
    pub phi: f32,

    /// Viewport width / height
    pub aspect: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,

    /// Multiplier on pointer rotation; 0 disables rotation
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    // Pending spherical deltas, drained by update()
    delta_theta: f32,
    delta_phi: f32,
    dolly: f32,
}

impl OrbitCamera {
    /// Camera on +Z looking at the origin, distance from config
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            radius: config.distance,
            theta: 0.0,
            phi: PI / 2.0,
            aspect,
            fov_degrees: config.fov_degrees,
            near: config.near,
            far: config.far,
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            delta_theta: 0.0,
            delta_phi: 0.0,
            dolly: 1.0,
        }
    }

    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// World-space eye position
    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        );
        self.target + offset
    }

    /// Unit view direction
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::UP).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Queue a rotation from a pointer drag of (dx, dy) pixels.
    ///
    /// A full viewport height of horizontal travel turns 2*pi at speed 1.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.delta_theta -= 2.0 * PI * dx / viewport_height * self.rotate_speed;
        self.delta_phi -= 2.0 * PI * dy / viewport_height * self.rotate_speed;
    }

    /// Queue a dolly from wheel notches (positive = zoom in)
    pub fn zoom(&mut self, notches: f32) {
        if notches == 0.0 {
            return;
        }
        let scale = 0.95f32.powf(self.zoom_speed * notches.abs());
        if notches > 0.0 {
            self.dolly *= scale;
        } else {
            self.dolly /= scale;
        }
    }

    /// Apply queued deltas. Call once per frame.
    pub fn update(&mut self) {
        if self.enable_damping {
            self.theta += self.delta_theta * self.damping_factor;
            self.phi += self.delta_phi * self.damping_factor;
        } else {
            self.theta += self.delta_theta;
            self.phi += self.delta_phi;
        }
        self.phi = self.phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);

        self.radius = (self.radius * self.dolly).clamp(self.min_distance, self.max_distance);
        self.dolly = 1.0;

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
    }

    /// macroquad camera with matching pose and projection
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position().to_macroquad(),
            target: self.target.to_macroquad(),
            up: Vec3::UP.to_macroquad(),
            fovy: self.fov_radians(),
            aspect: Some(self.aspect),
            z_near: self.near,
            z_far: self.far,
            ..Default::default()
        }
    }
}
