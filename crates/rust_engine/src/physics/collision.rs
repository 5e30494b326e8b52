//! Narrow-phase collision tests for circular hit areas
//!
//! Arcade collision here is purely a distance test between centers; there is
//! no penetration response.

use crate::foundation::math::Vec2;

/// A bounding circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    /// The center position of the circle
    pub center: Vec2,
    /// The radius of the circle
    pub radius: f32,
}

impl BoundingCircle {
    /// Creates a new bounding circle with the given center and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check whether a point lies strictly inside the circle
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.center).magnitude_squared() < self.radius * self.radius
    }

    /// Check if this circle overlaps another by more than `tolerance`
    ///
    /// The centers must be closer than `r1 + r2 - tolerance`; a positive
    /// tolerance gives a forgiving hitbox.
    pub fn intersects_with_tolerance(&self, other: &BoundingCircle, tolerance: f32) -> bool {
        let reach = self.radius + other.radius - tolerance;
        if reach <= 0.0 {
            return false;
        }
        (self.center - other.center).magnitude_squared() < reach * reach
    }

    /// Check if this circle intersects another
    pub fn intersects(&self, other: &BoundingCircle) -> bool {
        self.intersects_with_tolerance(other, 0.0)
    }
}
