//! Math utilities and types
//!
//! Provides the 2D math used by vector arcade games: a nalgebra-backed
//! `Vec2`, heading helpers and toroidal wrapping of play-area coordinates.

pub use nalgebra::Vector2;

/// 2D vector type used for positions and velocities
pub type Vec2 = Vector2<f32>;

/// Full turn in radians
pub const TAU: f32 = std::f32::consts::TAU;

/// Convert degrees to radians
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Unit vector pointing along `angle` (radians, screen coordinates)
pub fn heading(angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos, sin)
}

/// Point at `distance` from `origin` along `angle`
pub fn polar_offset(origin: Vec2, angle: f32, distance: f32) -> Vec2 {
    origin + heading(angle) * distance
}

/// Euclidean distance between two points
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).magnitude()
}

/// Wrap a single coordinate around a play-area axis of length `size`.
///
/// The coordinate re-enters from the opposite edge once it is more than
/// `margin` outside the area, so the result always lies in
/// `[-margin, size + margin]`.
pub fn wrap_coordinate(value: f32, size: f32, margin: f32) -> f32 {
    if value < -margin {
        size + margin
    } else if value > size + margin {
        -margin
    } else {
        value
    }
}

/// Wrap both axes of a point; see [`wrap_coordinate`]
pub fn wrap_point(point: Vec2, width: f32, height: f32, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_coordinate(point.x, width, margin),
        wrap_coordinate(point.y, height, margin),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_heading_points_along_axes() {
        let right = heading(0.0);
        assert_relative_eq!(right.x, 1.0);
        assert_relative_eq!(right.y, 0.0);

        let up = heading(-std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(up.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(up.y, -1.0);
    }

    #[test]
    fn test_deg_to_rad() {
        assert_relative_eq!(deg_to_rad(180.0), std::f32::consts::PI);
        assert_relative_eq!(deg_to_rad(5.0), 0.087_266_46, epsilon = 1e-6);
    }

    #[test]
    fn test_wrap_with_margin() {
        assert_eq!(wrap_coordinate(-16.0, 800.0, 15.0), 815.0);
        assert_eq!(wrap_coordinate(816.0, 800.0, 15.0), -15.0);
        // Inside the margin band nothing happens yet
        assert_eq!(wrap_coordinate(-10.0, 800.0, 15.0), -10.0);
        assert_eq!(wrap_coordinate(810.0, 800.0, 15.0), 810.0);
    }

    #[test]
    fn test_wrap_zero_margin_wraps_at_boundary() {
        assert_eq!(wrap_coordinate(-0.5, 600.0, 0.0), 600.0);
        assert_eq!(wrap_coordinate(600.5, 600.0, 0.0), 0.0);
        assert_eq!(wrap_coordinate(600.0, 600.0, 0.0), 600.0);
    }

    #[test]
    fn test_wrap_point_both_axes() {
        let wrapped = wrap_point(Vec2::new(-50.0, 700.0), 800.0, 600.0, 45.0);
        assert_eq!(wrapped, Vec2::new(845.0, -45.0));
    }

    #[test]
    fn test_distance() {
        assert_relative_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
    }
}
