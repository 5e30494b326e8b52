//! Interfaces the simulator drives
//!
//! The simulation core never touches a window, a sound card or a keyboard.
//! It talks to these traits; the submodules provide the implementations
//! used by the binary.

pub mod audio;
pub mod display;
pub mod input;
pub mod render;

use bitflags::bitflags;
use rust_engine::foundation::math::Vec2;

use crate::entities::{Asteroid, AsteroidSize, Bullet, Particle, Ship};

pub use audio::{SoundCue, SynthAudio};
pub use display::LogDisplay;
pub use input::{KeyBindings, KeyboardInput, TouchButton};
pub use render::VectorRenderer;

bitflags! {
    /// Player intents sampled once per frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Intents: u8 {
        /// Rotate counter-clockwise
        const TURN_LEFT = 1 << 0;
        /// Rotate clockwise
        const TURN_RIGHT = 1 << 1;
        /// Accelerate along the heading
        const THRUST = 1 << 2;
        /// Shoot (rate limited)
        const FIRE = 1 << 3;
    }
}

/// Draws entities; called once per visible entity per frame
pub trait Renderer {
    /// Wipe or fade the frame for a play area of `extent`
    fn clear(&mut self, extent: Vec2);

    /// Draw the ship
    fn draw_ship(&mut self, ship: &Ship);

    /// Draw a bullet
    fn draw_bullet(&mut self, bullet: &Bullet);

    /// Draw an asteroid
    fn draw_asteroid(&mut self, asteroid: &Asteroid);

    /// Draw an explosion particle
    fn draw_particle(&mut self, particle: &Particle);
}

/// Fire-and-forget sound triggers; must never block the frame
pub trait AudioSystem {
    /// A bullet left the ship
    fn shoot_fired(&mut self);

    /// Thrust was applied this frame
    fn thrust_active(&mut self);

    /// Something of `size` exploded (the ship explodes as `Large`)
    fn explosion_occurred(&mut self, size: AsteroidSize);

    /// The last asteroid of a level was destroyed
    fn level_cleared(&mut self);
}

/// Source of player intents
pub trait InputSource {
    /// Intents held this frame
    fn intents(&self) -> Intents;
}

impl InputSource for Intents {
    fn intents(&self) -> Intents {
        *self
    }
}

/// Score, lives and overlay display
pub trait UiDisplay {
    /// Score changed
    fn update_score(&mut self, score: u32);

    /// Lives changed
    fn update_lives(&mut self, lives: u32);

    /// Game ended with `final_score`
    fn show_game_over(&mut self, final_score: u32);

    /// Waiting for the player to start
    fn show_menu(&mut self);
}

/// Current play-area size; may change between frames
pub trait Viewport {
    /// Width and height in play-area units
    fn size(&self) -> Vec2;
}

/// Fixed-size play area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    /// Width in units
    pub width: f32,
    /// Height in units
    pub height: f32,
}

impl PlayArea {
    /// Create a play area
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Resize, as a window would
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Viewport for PlayArea {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intents_are_their_own_source() {
        let held = Intents::THRUST | Intents::FIRE;
        assert_eq!(held.intents(), held);
        assert!(!held.intents().contains(Intents::TURN_LEFT));
        assert_eq!(Intents::default(), Intents::empty());
    }

    #[test]
    fn test_play_area_resize() {
        let mut area = PlayArea::default();
        assert_eq!(area.size(), Vec2::new(800.0, 600.0));
        area.resize(1024.0, 768.0);
        assert_eq!(area.size(), Vec2::new(1024.0, 768.0));
    }
}
