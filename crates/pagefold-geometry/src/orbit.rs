//! View-sector classification for the orbit-controlled about scene.
//!
//! Maps a free-orbiting camera's offset from its target to one of five
//! discrete sectors; the host page shows the panel bound to the sector.

use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn normalized(&self) -> Option<Vec3> {
        let len = self.length();
        if len == 0.0 {
            None
        } else {
            Some(Vec3::new(self.x / len, self.y / len, self.z / len))
        }
    }
}

/// Discrete camera sector, one per about-page panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewSector {
    Front,
    Back,
    Left,
    Right,
    Down,
}

impl ViewSector {
    /// Classify a camera offset (camera position minus orbit target).
    ///
    /// Below-horizon views (polar angle past 0.6 pi) always classify as
    /// `Down`; otherwise the azimuth picks one of four 90-degree quadrants
    /// centered on the axes. A zero offset has no direction and classifies
    /// as `Front`.
    pub fn classify(offset: Vec3) -> ViewSector {
        let Some(unit) = offset.normalized() else {
            log::warn!("ViewSector::classify: zero-length offset, defaulting to Front");
            return ViewSector::Front;
        };

        let polar = unit.y.clamp(-1.0, 1.0).acos();
        if polar > PI * 0.6 {
            return ViewSector::Down;
        }

        let angle_deg = unit.x.atan2(unit.z).to_degrees();
        if angle_deg > -45.0 && angle_deg <= 45.0 {
            ViewSector::Front
        } else if angle_deg > 45.0 && angle_deg <= 135.0 {
            ViewSector::Right
        } else if angle_deg <= -45.0 && angle_deg > -135.0 {
            ViewSector::Left
        } else {
            ViewSector::Back
        }
    }
}

#[cfg(test)]
#[path = "tests/orbit_tests.rs"]
mod tests;
