//! Game entities
//!
//! Ship, bullets, asteroids and particles with their per-frame physics. All
//! quantities are in play-area units per frame; positions wrap around the
//! play area except for particles.

use std::fmt;

use rand::Rng;
use rust_engine::prelude::*;

use crate::collaborators::Intents;
use crate::config::GameplayConfig;

/// Initial heading of a new ship (pointing up the screen)
pub const SHIP_START_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;

/// Where a destroyed ship is parked so it cannot be seen or collided with
pub const SHIP_PARKING_X: f32 = -1000.0;

const SHIP_REAR_ANGLE: f32 = 2.5;
const SHIP_NOTCH: f32 = 0.3;
const FLAME_BASE: f32 = 0.5;
const FLAME_ANGLE: f32 = 2.8;
const FLAME_REACH: f32 = 10.0;
const BLINK_PERIOD: u32 = 10;

/// Player ship
#[derive(Debug, Clone)]
pub struct Ship {
    /// Center position
    pub position: Vec2,
    /// Velocity per frame
    pub velocity: Vec2,
    /// Heading in radians (screen coordinates, y down)
    pub angle: f32,
    /// Hit radius and wrap margin
    pub radius: f32,
    /// Whether thrust was applied on the last update
    pub thrusting: bool,
    /// Invisible ships are destroyed and wait for a respawn
    pub visible: bool,
    /// Collisions are ignored while set
    pub invulnerable: bool,
    /// Time at which invulnerability ends
    pub invulnerable_until: f64,
    blink: u32,
}

impl Ship {
    /// Create a ship at `position` with a fresh invulnerability window starting at `now`
    pub fn spawn(position: Vec2, now: f64, config: &GameplayConfig) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            angle: SHIP_START_ANGLE,
            radius: config.ship_radius,
            thrusting: false,
            visible: true,
            invulnerable: true,
            invulnerable_until: now + config.invulnerability,
            blink: 0,
        }
    }

    /// Drop invulnerability once its window has passed
    pub fn refresh_invulnerability(&mut self, now: f64) {
        if self.invulnerable && now >= self.invulnerable_until {
            self.invulnerable = false;
        }
    }

    /// Apply one frame of steering, thrust, motion and friction.
    ///
    /// Returns whether thrust was applied this frame.
    pub fn update(&mut self, intents: Intents, extent: Vec2, config: &GameplayConfig) -> bool {
        if !self.visible {
            return false;
        }

        let turn = deg_to_rad(config.ship_turn_degrees);
        if intents.contains(Intents::TURN_LEFT) {
            self.angle -= turn;
        }
        if intents.contains(Intents::TURN_RIGHT) {
            self.angle += turn;
        }

        self.thrusting = intents.contains(Intents::THRUST);
        if self.thrusting {
            self.velocity += heading(self.angle) * config.ship_thrust;
        }

        self.position += self.velocity;
        self.velocity *= config.friction;
        self.position = wrap_point(self.position, extent.x, extent.y, self.radius);

        if self.invulnerable {
            self.blink = self.blink.wrapping_add(1);
        }

        self.thrusting
    }

    /// Mark the ship destroyed and park it off-screen
    pub fn destroy(&mut self) {
        self.visible = false;
        self.thrusting = false;
        self.position.x = SHIP_PARKING_X;
    }

    /// Tip of the ship, where bullets appear
    pub fn nose(&self) -> Vec2 {
        polar_offset(self.position, self.angle, self.radius)
    }

    /// Whether the ship should be drawn this frame (blinks while invulnerable)
    pub fn is_drawn(&self) -> bool {
        self.visible && (!self.invulnerable || self.blink % BLINK_PERIOD >= BLINK_PERIOD / 2)
    }

    /// Hull outline: nose, rear left, notch, rear right
    pub fn outline(&self) -> [Vec2; 4] {
        [
            self.nose(),
            polar_offset(self.position, self.angle + SHIP_REAR_ANGLE, self.radius),
            polar_offset(self.position, self.angle, -self.radius * SHIP_NOTCH),
            polar_offset(self.position, self.angle - SHIP_REAR_ANGLE, self.radius),
        ]
    }

    /// Exhaust flame, only while thrusting
    pub fn flame(&self) -> Option<[Vec2; 3]> {
        self.thrusting.then(|| {
            let reach = self.radius + FLAME_REACH;
            [
                polar_offset(self.position, self.angle, -self.radius * FLAME_BASE),
                polar_offset(self.position, self.angle + FLAME_ANGLE, reach),
                polar_offset(self.position, self.angle - FLAME_ANGLE, reach),
            ]
        })
    }

    /// Bounding circle used for asteroid contact
    pub fn bounds(&self) -> BoundingCircle {
        BoundingCircle::new(self.position, self.radius)
    }
}

/// Bullet fired by the ship
#[derive(Debug, Clone)]
pub struct Bullet {
    /// Position
    pub position: Vec2,
    /// Velocity per frame
    pub velocity: Vec2,
    /// Frames left before the bullet expires
    pub life: u32,
    /// Cleared on expiry or impact
    pub alive: bool,
}

impl Bullet {
    /// Fire a bullet from `position` along `angle`
    pub fn new(position: Vec2, angle: f32, speed: f32, life: u32) -> Self {
        Self {
            position,
            velocity: heading(angle) * speed,
            life,
            alive: life > 0,
        }
    }

    /// Move one frame and age the bullet; wraps exactly at the play-area edge
    pub fn update(&mut self, extent: Vec2) {
        self.position += self.velocity;
        self.life = self.life.saturating_sub(1);
        self.position = wrap_point(self.position, extent.x, extent.y, 0.0);
        if self.life == 0 {
            self.alive = false;
        }
    }
}

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    /// Large asteroid (splits into medium)
    Large,

    /// Medium asteroid (splits into small)
    Medium,

    /// Small asteroid (destroyed completely)
    Small,
}

impl AsteroidSize {
    /// Base radius for this size
    pub fn radius(self) -> f32 {
        match self {
            AsteroidSize::Large => 45.0,
            AsteroidSize::Medium => 25.0,
            AsteroidSize::Small => 12.0,
        }
    }

    /// Speed multiplier for this size; smaller rocks drift faster
    pub fn speed_multiplier(self) -> f32 {
        match self {
            AsteroidSize::Large => 1.0,
            AsteroidSize::Medium => 1.5,
            AsteroidSize::Small => 2.0,
        }
    }

    /// Get the points awarded for destroying this size
    pub fn points(self) -> u32 {
        match self {
            AsteroidSize::Large => 20,
            AsteroidSize::Medium => 50,
            AsteroidSize::Small => 100,
        }
    }

    /// Get the next smaller size when split
    pub fn split_into(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

impl fmt::Display for AsteroidSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AsteroidSize::Large => "large",
            AsteroidSize::Medium => "medium",
            AsteroidSize::Small => "small",
        };
        f.write_str(name)
    }
}

/// Drifting, rotating rock with a jagged outline
#[derive(Debug, Clone)]
pub struct Asteroid {
    /// Center position
    pub position: Vec2,
    /// Velocity per frame
    pub velocity: Vec2,
    /// Size category
    pub size: AsteroidSize,
    /// Hit radius, derived from the size
    pub radius: f32,
    /// Outline rotation in radians
    pub rotation: f32,
    /// Rotation per frame
    pub rotation_speed: f32,
    /// Cleared when shot
    pub alive: bool,
    shape: Vec<f32>,
}

impl Asteroid {
    /// Create an asteroid at `position` with a random drift, spin and outline
    pub fn new<R: Rng + ?Sized>(position: Vec2, size: AsteroidSize, vertices: usize, rng: &mut R) -> Self {
        let direction = rng.gen::<f32>() * TAU;
        let speed = size.speed_multiplier();
        // Each axis gets its own speed jitter
        let velocity = Vec2::new(
            direction.cos() * speed * (rng.gen::<f32>() + 0.5),
            direction.sin() * speed * (rng.gen::<f32>() + 0.5),
        );
        let shape = (0..vertices).map(|_| rng.gen_range(0.8..1.2)).collect();

        Self {
            position,
            velocity,
            size,
            radius: size.radius(),
            rotation: 0.0,
            rotation_speed: (rng.gen::<f32>() - 0.5) * 0.05,
            alive: true,
            shape,
        }
    }

    /// Per-vertex radius multipliers, fixed for the asteroid's lifetime
    pub fn shape(&self) -> &[f32] {
        &self.shape
    }

    /// Drift and spin one frame
    pub fn update(&mut self, extent: Vec2) {
        self.position += self.velocity;
        self.rotation += self.rotation_speed;
        self.position = wrap_point(self.position, extent.x, extent.y, self.radius);
    }

    /// Outline vertices at the current rotation
    pub fn outline(&self) -> Vec<Vec2> {
        if self.shape.is_empty() {
            return Vec::new();
        }
        let step = TAU / self.shape.len() as f32;
        self.shape
            .iter()
            .enumerate()
            .map(|(i, offset)| polar_offset(self.position, self.rotation + i as f32 * step, self.radius * offset))
            .collect()
    }

    /// Bounding circle used for hit tests
    pub fn bounds(&self) -> BoundingCircle {
        BoundingCircle::new(self.position, self.radius)
    }
}

/// Cosmetic explosion debris
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position
    pub position: Vec2,
    /// Velocity per frame
    pub velocity: Vec2,
    /// Remaining life, starts at 1
    pub life: f32,
    /// Life lost per frame
    pub decay: f32,
}

impl Particle {
    /// Create a particle flying out of `origin` in a random direction
    pub fn new<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        let direction = rng.gen::<f32>() * TAU;
        let speed = rng.gen::<f32>() * 3.0;
        Self {
            position: origin,
            velocity: heading(direction) * speed,
            life: 1.0,
            decay: rng.gen::<f32>() * 0.03 + 0.01,
        }
    }

    /// Burst of `count` particles at `origin`
    pub fn burst<R: Rng + ?Sized>(origin: Vec2, count: usize, rng: &mut R) -> impl Iterator<Item = Particle> + '_ {
        (0..count).map(move |_| Particle::new(origin, rng))
    }

    /// Move and fade one frame; particles never wrap
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.life -= self.decay;
    }

    /// Whether the particle is still visible
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}
