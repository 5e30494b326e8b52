//! Frame loop
//!
//! [`Simulator::tick`] runs once per display refresh. It delivers due
//! scheduled events, clears the frame and, while playing, advances every
//! entity in a fixed order:
//!
//! 1. ship
//! 2. firing
//! 3. bullets
//! 4. asteroids, interleaved with bullet and ship collisions
//! 5. particles
//! 6. level advance
//!
//! Entities removed during a pass are only flagged; containers are pruned
//! once the pass is over and asteroid fragments are appended after it.

use rand::{rngs::StdRng, SeedableRng};
use rust_engine::prelude::*;

use crate::collaborators::{AudioSystem, InputSource, Intents, Renderer, UiDisplay, Viewport};
use crate::collision;
use crate::config::GameplayConfig;
use crate::entities::{Asteroid, AsteroidSize, Bullet, Particle, Ship};
use crate::state::{GamePhase, GameState, ScheduledEvent};

/// Owns the game state and drives the collaborators
pub struct Simulator<R: Renderer, A: AudioSystem, U: UiDisplay> {
    config: GameplayConfig,
    state: GameState,
    scheduler: Scheduler<ScheduledEvent>,
    rng: StdRng,
    renderer: R,
    audio: A,
    ui: U,
    frames: u64,
}

impl<R: Renderer, A: AudioSystem, U: UiDisplay> Simulator<R, A, U> {
    /// Create a simulator in the menu, seeded from the OS
    pub fn new(config: GameplayConfig, renderer: R, audio: A, ui: U) -> Self {
        Self::with_rng(config, StdRng::from_entropy(), renderer, audio, ui)
    }

    /// Create a simulator whose random choices are reproducible
    pub fn with_seed(config: GameplayConfig, seed: u64, renderer: R, audio: A, ui: U) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed), renderer, audio, ui)
    }

    fn with_rng(config: GameplayConfig, rng: StdRng, renderer: R, audio: A, ui: U) -> Self {
        let state = GameState::new(config.starting_lives);
        let mut simulator = Self {
            config,
            state,
            scheduler: Scheduler::new(),
            rng,
            renderer,
            audio,
            ui,
            frames: 0,
        };
        simulator.ui.update_score(simulator.state.score);
        simulator.ui.update_lives(simulator.state.lives);
        simulator.ui.show_menu();
        simulator
    }

    /// Leave the menu and start a game. Ignored in any other phase.
    pub fn start(&mut self, now: f64, viewport: &dyn Viewport) -> bool {
        if self.state.phase != GamePhase::Menu {
            log::warn!("Ignoring start while in {}", self.state.phase);
            return false;
        }
        self.begin_game(now, viewport.size());
        true
    }

    /// Start over after a game over. Ignored in any other phase.
    pub fn restart(&mut self, now: f64, viewport: &dyn Viewport) -> bool {
        if self.state.phase != GamePhase::GameOver {
            log::warn!("Ignoring restart while in {}", self.state.phase);
            return false;
        }
        self.begin_game(now, viewport.size());
        true
    }

    fn begin_game(&mut self, now: f64, extent: Vec2) {
        self.state.reset(self.config.starting_lives);
        self.ui.update_score(self.state.score);
        self.ui.update_lives(self.state.lives);
        self.state.start_level(now, extent, &self.config, &mut self.rng);
        log::info!("Game started (epoch {})", self.state.epoch);
    }

    /// Advance one frame at wall-clock time `now` (seconds)
    pub fn tick(&mut self, now: f64, input: &dyn InputSource, viewport: &dyn Viewport) {
        let extent = viewport.size();
        self.frames += 1;

        self.deliver_due_events(now, extent);
        self.renderer.clear(extent);

        if self.state.phase != GamePhase::Playing {
            return;
        }

        let intents = input.intents();
        self.update_ship(now, intents, extent);
        self.fire(now, intents);
        self.update_bullets(extent);
        self.update_asteroids(now, extent);
        self.update_particles();
        self.advance_level(now, extent);
    }

    fn deliver_due_events(&mut self, now: f64, extent: Vec2) {
        for due in self.scheduler.drain_due(now) {
            if !due.is_current(self.state.epoch) {
                log::debug!("Dropping stale {:?} from epoch {}", due.event, due.epoch);
                continue;
            }
            if self.state.phase != GamePhase::Playing {
                log::debug!("Dropping {:?} while in {}", due.event, self.state.phase);
                continue;
            }

            match due.event {
                ScheduledEvent::RespawnShip => {
                    self.state.ship = Some(Ship::spawn(extent / 2.0, now, &self.config));
                    log::debug!("Ship respawned, {} lives left", self.state.lives);
                }
                ScheduledEvent::RevealGameOver => {
                    let final_score = self.state.final_score.unwrap_or(self.state.score);
                    self.state.phase = GamePhase::GameOver;
                    self.ui.show_game_over(final_score);
                    log::info!("Game over at level {} with {} points", self.state.level, final_score);
                }
            }
        }
    }

    fn update_ship(&mut self, now: f64, intents: Intents, extent: Vec2) {
        let Some(ship) = self.state.ship.as_mut() else {
            return;
        };
        ship.refresh_invulnerability(now);
        if ship.update(intents, extent, &self.config) {
            self.audio.thrust_active();
        }
        if ship.visible {
            self.renderer.draw_ship(ship);
        }
    }

    fn fire(&mut self, now: f64, intents: Intents) {
        if !intents.contains(Intents::FIRE) {
            return;
        }
        let Some(ship) = self.state.ship.as_ref().filter(|ship| ship.visible) else {
            return;
        };
        if let Some(last) = self.state.last_shot {
            if now - last <= self.config.fire_cooldown {
                return;
            }
        }

        self.state.bullets.push(Bullet::new(
            ship.nose(),
            ship.angle,
            self.config.bullet_speed,
            self.config.bullet_life_frames,
        ));
        self.state.last_shot = Some(now);
        self.audio.shoot_fired();
    }

    fn update_bullets(&mut self, extent: Vec2) {
        for bullet in &mut self.state.bullets {
            bullet.update(extent);
            self.renderer.draw_bullet(bullet);
        }
        self.state.bullets.retain(|bullet| bullet.alive);
    }

    fn update_asteroids(&mut self, now: f64, extent: Vec2) {
        let tolerance = self.config.ship_hit_tolerance;
        let mut fragments = Vec::new();

        for index in (0..self.state.asteroids.len()).rev() {
            let (shot, rammed) = {
                let asteroid = &mut self.state.asteroids[index];
                asteroid.update(extent);
                self.renderer.draw_asteroid(asteroid);

                let shot = collision::find_bullet_hit(asteroid, &self.state.bullets);
                if shot.is_some() {
                    asteroid.alive = false;
                }
                let rammed = self
                    .state
                    .ship
                    .as_ref()
                    .is_some_and(|ship| collision::ship_hit(asteroid, ship, tolerance));
                (shot, rammed)
            };

            if let Some(bullet) = shot {
                self.state.bullets[bullet].alive = false;
                self.asteroid_destroyed(index, &mut fragments);
            }
            if rammed {
                self.ship_destroyed(now);
            }
        }

        self.state.bullets.retain(|bullet| bullet.alive);
        self.state.asteroids.retain(|asteroid| asteroid.alive);
        self.state.asteroids.extend(fragments);
    }

    fn asteroid_destroyed(&mut self, index: usize, fragments: &mut Vec<Asteroid>) {
        let asteroid = &self.state.asteroids[index];
        let (position, size) = (asteroid.position, asteroid.size);

        self.audio.explosion_occurred(size);
        fragments.extend(collision::fragments(asteroid, self.config.asteroid_vertices, &mut self.rng));
        self.state
            .particles
            .extend(Particle::burst(position, self.config.asteroid_debris, &mut self.rng));

        let before = self.state.score;
        let score = self.state.award(size.points());
        if score != before {
            self.ui.update_score(score);
        }
        log::debug!("Destroyed {} asteroid, score {}", size, score);
    }

    fn ship_destroyed(&mut self, now: f64) {
        let Some(ship) = self.state.ship.as_mut() else {
            return;
        };
        let wreck = ship.position;
        ship.destroy();

        self.audio.explosion_occurred(AsteroidSize::Large);
        self.state
            .particles
            .extend(Particle::burst(wreck, self.config.ship_debris, &mut self.rng));

        let lives = self.state.lose_life();
        self.ui.update_lives(lives);

        let due_at = now + self.config.respawn_delay;
        if lives > 0 {
            self.scheduler.post(due_at, self.state.epoch, ScheduledEvent::RespawnShip);
            log::debug!("Ship destroyed, respawn at {:.2}s", due_at);
        } else {
            self.scheduler.post(due_at, self.state.epoch, ScheduledEvent::RevealGameOver);
            log::info!("Last ship destroyed");
        }
    }

    fn update_particles(&mut self) {
        for particle in &mut self.state.particles {
            particle.update();
            self.renderer.draw_particle(particle);
        }
        self.state.particles.retain(Particle::is_alive);
    }

    fn advance_level(&mut self, now: f64, extent: Vec2) {
        if !self.state.level_cleared() {
            return;
        }
        self.state.level += 1;
        self.audio.level_cleared();
        log::info!("Level {} reached", self.state.level);
        self.state.start_level(now, extent, &self.config, &mut self.rng);
    }

    /// Current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable game state, for tooling and scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Gameplay tuning in use
    pub fn config(&self) -> &GameplayConfig {
        &self.config
    }

    /// Scheduled events not yet delivered, stale ones included
    pub fn pending_events(&self) -> usize {
        self.scheduler.len()
    }

    /// Frames ticked so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Audio system
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// UI display
    pub fn ui(&self) -> &U {
        &self.ui
    }
}
