//! Line-art renderer
//!
//! Strokes every entity into an engine [`DrawList`] in a single phosphor
//! colour. The previous frame is faded rather than erased, which leaves the
//! short trails of the classic vector display.

use rust_engine::foundation::math::Vec2;
use rust_engine::render::DrawList;

use super::Renderer;
use crate::entities::{Asteroid, Bullet, Particle, Ship};

/// Opacity of the black wash between frames
pub const FRAME_FADE: f32 = 0.8;

const STROKE_WIDTH: f32 = 1.5;
const BULLET_RADIUS: f32 = 2.0;
const PARTICLE_SIZE: f32 = 2.0;

/// Renderer producing a vector draw list per frame
#[derive(Debug, Default)]
pub struct VectorRenderer {
    frame: DrawList,
    frames: u64,
}

impl VectorRenderer {
    /// Create a renderer with an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes of the frame being built (or the last finished one)
    pub fn frame(&self) -> &DrawList {
        &self.frame
    }

    /// Frames started so far
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}

impl Renderer for VectorRenderer {
    fn clear(&mut self, extent: Vec2) {
        self.frame.begin_frame(extent, FRAME_FADE);
        self.frames += 1;
    }

    fn draw_ship(&mut self, ship: &Ship) {
        if !ship.is_drawn() {
            return;
        }
        self.frame.closed_polyline(&ship.outline(), STROKE_WIDTH, 1.0);
        if let Some(flame) = ship.flame() {
            self.frame.polyline(&flame, STROKE_WIDTH, 1.0);
        }
    }

    fn draw_bullet(&mut self, bullet: &Bullet) {
        self.frame.disc(bullet.position, BULLET_RADIUS, 1.0);
    }

    fn draw_asteroid(&mut self, asteroid: &Asteroid) {
        self.frame.closed_polyline(&asteroid.outline(), STROKE_WIDTH, 1.0);
    }

    fn draw_particle(&mut self, particle: &Particle) {
        self.frame.dot(particle.position, PARTICLE_SIZE, particle.life);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameplayConfig;
    use crate::entities::AsteroidSize;
    use rand::{rngs::StdRng, SeedableRng};
    use rust_engine::render::DrawShape;

    #[test]
    fn test_clear_starts_a_faded_frame() {
        let mut renderer = VectorRenderer::new();
        renderer.draw_bullet(&Bullet::new(Vec2::zeros(), 0.0, 7.0, 60));
        renderer.clear(Vec2::new(800.0, 600.0));

        assert!(renderer.frame().is_empty());
        assert_eq!(renderer.frame().fade, FRAME_FADE);
        assert_eq!(renderer.frames_rendered(), 1);
    }

    #[test]
    fn test_ship_hull_and_flame() {
        let config = GameplayConfig::default();
        let mut renderer = VectorRenderer::new();
        let mut ship = Ship::spawn(Vec2::new(400.0, 300.0), 0.0, &config);
        ship.invulnerable = false;

        renderer.draw_ship(&ship);
        assert_eq!(renderer.frame().line_count(), 4);

        ship.thrusting = true;
        renderer.draw_ship(&ship);
        assert_eq!(renderer.frame().line_count(), 4 + 4 + 2);
    }

    #[test]
    fn test_blinking_ship_is_skipped() {
        let config = GameplayConfig::default();
        let mut renderer = VectorRenderer::new();
        let ship = Ship::spawn(Vec2::new(400.0, 300.0), 0.0, &config);

        renderer.draw_ship(&ship);
        assert!(renderer.frame().is_empty());
    }

    #[test]
    fn test_asteroid_and_particle_shapes() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut renderer = VectorRenderer::new();
        let asteroid = Asteroid::new(Vec2::new(100.0, 100.0), AsteroidSize::Small, 12, &mut rng);
        renderer.draw_asteroid(&asteroid);
        assert_eq!(renderer.frame().line_count(), 12);

        let mut particle = Particle::new(Vec2::new(5.0, 5.0), &mut rng);
        particle.life = 0.25;
        renderer.draw_particle(&particle);
        assert_eq!(
            renderer.frame().shapes().last(),
            Some(&DrawShape::Dot { position: Vec2::new(5.0, 5.0), size: 2.0, intensity: 0.25 })
        );
    }
}
