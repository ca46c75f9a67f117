//! Level domain: goal and platform components.

use bevy::prelude::*;

/// Sensor that ends the level when the player enters it
#[derive(Component, Debug)]
pub struct Goal;

/// Kinematic platform that patrols horizontally around `origin`.
#[derive(Component, Debug, Clone)]
pub struct MovingPlatform {
    pub origin: Vec2,
    /// Max distance from origin before turning around
    pub extent: f32,
    pub speed: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
}

impl MovingPlatform {
    pub fn new(origin: Vec2, extent: f32, speed: f32) -> Self {
        Self {
            origin,
            extent,
            speed,
            direction: 1.0,
        }
    }

    /// Horizontal velocity for a platform currently at `x`, turning around at
    /// either end of the patrol.
    pub fn patrol_velocity(&mut self, x: f32) -> f32 {
        let offset = x - self.origin.x;
        if offset >= self.extent {
            self.direction = -1.0;
        } else if offset <= -self.extent {
            self.direction = 1.0;
        }
        self.direction * self.speed
    }
}
