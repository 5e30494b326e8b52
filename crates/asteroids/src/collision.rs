//! Hit tests and asteroid break-up
//!
//! Bullets are points; asteroids and the ship are circles. The ship's
//! contact distance is shortened by a tolerance so grazing passes survive.

use rand::Rng;

use crate::entities::{Asteroid, Bullet, Ship};

/// Fragments produced when a Large or Medium asteroid is shot
pub const FRAGMENT_COUNT: usize = 2;

/// Index of the live bullet inside `asteroid`, scanning the newest bullets first
pub fn find_bullet_hit(asteroid: &Asteroid, bullets: &[Bullet]) -> Option<usize> {
    let bounds = asteroid.bounds();
    bullets
        .iter()
        .enumerate()
        .rev()
        .find(|(_, bullet)| bullet.alive && bounds.contains_point(bullet.position))
        .map(|(index, _)| index)
}

/// Whether `asteroid` destroys `ship`
///
/// Invisible and invulnerable ships never collide.
pub fn ship_hit(asteroid: &Asteroid, ship: &Ship, tolerance: f32) -> bool {
    ship.visible
        && !ship.invulnerable
        && asteroid.alive
        && asteroid.bounds().intersects_with_tolerance(&ship.bounds(), tolerance)
}

/// Children of a destroyed asteroid: two of the next size at its position, none for Small
pub fn fragments<R: Rng + ?Sized>(parent: &Asteroid, vertices: usize, rng: &mut R) -> Vec<Asteroid> {
    match parent.size.split_into() {
        Some(size) => (0..FRAGMENT_COUNT)
            .map(|_| Asteroid::new(parent.position, size, vertices, rng))
            .collect(),
        None => Vec::new(),
    }
}
