//! Core scene value types: Color and Axis

use serde::{Deserialize, Serialize};

use super::math::Vec3;

/// Linear RGB color with components in [0, 1]
///
/// Serialized as a `0xRRGGBB` integer so config files can use hex literals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Pack back into `0xRRGGBB`, rounding each channel
    pub fn to_hex(self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Component-wise linear interpolation; `t = 0` is `self`, `t = 1` is `target`
    pub fn lerp(self, target: Color, t: f32) -> Color {
        Color {
            r: self.r + (target.r - self.r) * t,
            g: self.g + (target.g - self.g) * t,
            b: self.b + (target.b - self.b) * t,
        }
    }

    pub fn to_macroquad(self) -> macroquad::color::Color {
        macroquad::color::Color::new(self.r, self.g, self.b, 1.0)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Color::from_hex(hex)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// World axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Get the unit vector for this axis
    pub fn unit_vector(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::new(1.0, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, 1.0, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, 1.0),
        }
    }

    /// The two axes orthogonal to this one
    pub fn others(&self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0x808080);
        assert!((c.r - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        assert_eq!(c.to_hex(), 0x808080);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::from_hex(0x808080);
        let b = Color::from_hex(0xA0A0A0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0).to_hex(), 0xA0A0A0);
        assert_eq!(a.lerp(b, 0.5).to_hex(), 0x909090);
    }

    #[test]
    fn test_axis_others() {
        assert_eq!(Axis::Y.others(), [Axis::X, Axis::Z]);
        for axis in Axis::ALL {
            assert!(!axis.others().contains(&axis));
        }
    }

    #[test]
    fn test_color_ron_hex() {
        let c: Color = ron::from_str("0xA0A0A0").unwrap();
        assert_eq!(c.to_hex(), 0xA0A0A0);
    }
}
