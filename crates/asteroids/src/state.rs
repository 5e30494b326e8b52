//! Game state
//!
//! One [`GameState`] holds the phase, score, lives, level and every entity.
//! It is owned by the simulator; nothing else mutates it.

use std::fmt;

use rand::Rng;
use rust_engine::prelude::*;

use crate::config::GameplayConfig;
use crate::entities::{Asteroid, AsteroidSize, Bullet, Particle, Ship};

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Waiting for the player to start
    Menu,
    /// Game running
    Playing,
    /// Lives exhausted; waiting for a restart
    GameOver,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Wall-clock delayed transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledEvent {
    /// Bring a new ship in after a death
    RespawnShip,
    /// Switch to the game-over screen after the last death
    RevealGameOver,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Score; only ever grows within a game
    pub score: u32,
    /// Lives left
    pub lives: u32,
    /// Current level, starting at 1
    pub level: u32,
    /// Bumped on every reset; scheduled events from older epochs are stale
    pub epoch: Epoch,
    /// Time of the last shot
    pub last_shot: Option<f64>,
    /// Score frozen when the last life is lost
    pub final_score: Option<u32>,
    /// The ship, once a level has started
    pub ship: Option<Ship>,
    /// Bullets in firing order
    pub bullets: Vec<Bullet>,
    /// Asteroids in creation order
    pub asteroids: Vec<Asteroid>,
    /// Explosion particles
    pub particles: Vec<Particle>,
}

impl GameState {
    /// Fresh state in the menu
    pub fn new(lives: u32) -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            lives,
            level: 1,
            epoch: 0,
            last_shot: None,
            final_score: None,
            ship: None,
            bullets: Vec::new(),
            asteroids: Vec::new(),
            particles: Vec::new(),
        }
    }

    /// Start a new game: zero the score, restore lives and invalidate pending events
    pub fn reset(&mut self, lives: u32) {
        self.epoch += 1;
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = lives;
        self.level = 1;
        self.last_shot = None;
        self.final_score = None;
        self.bullets.clear();
        self.particles.clear();
    }

    /// Large asteroids spawned at the start of the current level
    pub fn asteroid_target(&self, base: u32) -> u32 {
        base + self.level.saturating_sub(1)
    }

    /// Whether a ship is present and visible
    pub fn ship_visible(&self) -> bool {
        self.ship.as_ref().is_some_and(|ship| ship.visible)
    }

    /// Whether the level is over: no asteroids left while the ship is flying
    pub fn level_cleared(&self) -> bool {
        self.asteroids.is_empty() && self.ship_visible()
    }

    /// Add points for a kill and return the new score; no-op once the game is lost
    pub fn award(&mut self, points: u32) -> u32 {
        if self.final_score.is_none() {
            self.score = self.score.saturating_add(points);
        }
        self.score
    }

    /// Take one life and return how many remain; losing the last one freezes the score
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.final_score = Some(self.score);
        }
        self.lives
    }

    /// Spawn a fresh ship at the center and a new wave of Large asteroids around it
    pub fn start_level<R: Rng + ?Sized>(&mut self, now: f64, extent: Vec2, config: &GameplayConfig, rng: &mut R) {
        let ship = Ship::spawn(extent / 2.0, now, config);
        let keep_clear = ship.position;
        self.ship = Some(ship);

        let count = self.asteroid_target(config.base_asteroid_count);
        self.asteroids.clear();
        for _ in 0..count {
            let position = spawn_position(rng, extent, keep_clear, config.spawn_clearance, config.spawn_attempts);
            self.asteroids
                .push(Asteroid::new(position, AsteroidSize::Large, config.asteroid_vertices, rng));
        }
        log::debug!("Level {} started with {} asteroids", self.level, count);
    }
}

/// Random point in the play area at least `clearance` away from `keep_clear`.
///
/// After `attempts` rejected samples the next sample is taken as is, so a
/// play area smaller than the clearance still terminates.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    extent: Vec2,
    keep_clear: Vec2,
    clearance: f32,
    attempts: u32,
) -> Vec2 {
    let mut sample = || Vec2::new(rng.gen::<f32>() * extent.x, rng.gen::<f32>() * extent.y);
    for _ in 0..attempts {
        let candidate = sample();
        if distance(candidate, keep_clear) >= clearance {
            return candidate;
        }
    }
    log::debug!("No spawn point {} units clear after {} attempts", clearance, attempts);
    sample()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_new_state_is_in_menu() {
        let state = GameState::new(3);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.level, 1);
        assert!(state.ship.is_none());
        assert!(!state.level_cleared());
    }

    #[test]
    fn test_reset_bumps_epoch_and_clears() {
        let mut state = GameState::new(3);
        state.score = 250;
        state.lives = 0;
        state.level = 4;
        state.bullets.push(Bullet::new(Vec2::zeros(), 0.0, 7.0, 60));

        state.reset(3);
        assert_eq!(state.epoch, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!((state.score, state.lives, state.level), (0, 3, 1));
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_asteroid_target_grows_with_level() {
        let mut state = GameState::new(3);
        assert_eq!(state.asteroid_target(3), 3);
        state.level = 4;
        assert_eq!(state.asteroid_target(3), 6);
    }

    #[test]
    fn test_start_level_respects_clearance() {
        let config = GameplayConfig::default();
        let mut rng = StdRng::seed_from_u64(21);
        let mut state = GameState::new(3);
        state.reset(3);
        state.level = 3;

        let extent = Vec2::new(800.0, 600.0);
        state.start_level(0.0, extent, &config, &mut rng);

        let ship = state.ship.as_ref().unwrap();
        assert_eq!(ship.position, Vec2::new(400.0, 300.0));
        assert_eq!(state.asteroids.len(), 5);
        for asteroid in &state.asteroids {
            assert_eq!(asteroid.size, AsteroidSize::Large);
            assert!(distance(asteroid.position, ship.position) >= 200.0);
        }
    }

    #[test]
    fn test_spawn_position_gives_up_in_tiny_area() {
        let mut rng = StdRng::seed_from_u64(2);
        let extent = Vec2::new(100.0, 100.0);
        let position = spawn_position(&mut rng, extent, Vec2::new(50.0, 50.0), 200.0, 100);
        assert!((0.0..=100.0).contains(&position.x));
        assert!((0.0..=100.0).contains(&position.y));
    }

    #[test]
    fn test_score_and_lives_saturate() {
        let mut state = GameState::new(1);
        assert_eq!(state.award(20), 20);
        assert_eq!(state.award(100), 120);
        assert_eq!(state.lose_life(), 0);
        assert_eq!(state.lose_life(), 0);
        assert_eq!(state.final_score, Some(120));

        // Kills after the last death do not count
        assert_eq!(state.award(50), 120);
        state.reset(3);
        assert_eq!(state.final_score, None);
        assert_eq!(state.award(50), 50);
    }
}
