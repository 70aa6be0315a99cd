//! Game state and core simulation types
//!
//! Entity ids come from a monotonic counter so runs are reproducible; all
//! gameplay randomness draws from the state-owned seeded RNG.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Game is frozen; the renderer keeps drawing the last pose
    Paused,
}

/// A destructible obstacle drifting toward the viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec3,
    /// Approach speed along +z (units/sec)
    pub speed: f32,
    /// Visual tessellation detail for the renderer; collision uses
    /// `ASTEROID_RADIUS` regardless
    pub size: f32,
}

impl Asteroid {
    pub fn advance(&mut self, dt: f32) {
        self.pos.z += self.speed * dt;
    }

    /// True once the asteroid has drifted past the camera
    pub fn past_camera(&self) -> bool {
        self.pos.z >= ASTEROID_CULL_DEPTH
    }
}

/// A player-fired projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec3,
    /// Unit direction of travel
    pub dir: Vec3,
    pub speed: f32,
}

impl Projectile {
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.dir * self.speed * dt;
    }

    /// True once the projectile has flown out the back of the scene
    pub fn out_of_range(&self) -> bool {
        self.pos.z < PROJECTILE_CULL_DEPTH
    }
}

/// Transient explosion marker at a hit point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub id: u32,
    pub pos: Vec3,
    /// Seconds since spawn
    pub age: f32,
}

impl Explosion {
    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
    }

    pub fn expired(&self) -> bool {
        self.age >= EFFECT_DURATION
    }
}

/// Floating "+100" label that rises from a hit point and fades out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreLabel {
    pub id: u32,
    pub pos: Vec3,
    pub value: u32,
    pub age: f32,
}

impl ScoreLabel {
    pub fn advance(&mut self, dt: f32) {
        self.pos.y += LABEL_RISE_SPEED * dt;
        self.age += dt;
    }

    pub fn expired(&self) -> bool {
        self.age >= EFFECT_DURATION
    }

    /// Remaining opacity for the renderer (1 at spawn, 0 at expiry)
    pub fn opacity(&self) -> f32 {
        (1.0 - self.age / EFFECT_DURATION).max(0.0)
    }
}

/// A debris particle for explosion visuals (not gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    pub life: f32, // 0-1, decreases over time
    pub size: f32,
}

/// Maximum particles
pub const MAX_PARTICLES: usize = 512;

/// The player's turret, aimed by hand position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turret {
    /// Position on the z=0 plane
    pub pos: Vec3,
    /// Crosshair position on the aim plane
    pub aim: Vec3,
}

impl Default for Turret {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            aim: Vec3::new(0.0, 0.0, AIM_DEPTH),
        }
    }
}

impl Turret {
    /// Map a normalized hand sample onto turret and crosshair positions.
    ///
    /// X is mirrored so moving the hand left steers the turret left from the
    /// player's point of view (the webcam image is flipped).
    pub fn track(&mut self, hand: Vec2) {
        self.pos = Vec3::new(-hand.x * TURRET_RANGE_X, hand.y * TURRET_RANGE_Y, 0.0);
        self.aim = Vec3::new(-hand.x * AIM_RANGE_X, hand.y * AIM_RANGE_Y, AIM_DEPTH);
    }

    /// Unit direction from the muzzle toward the crosshair
    pub fn fire_direction(&self) -> Vec3 {
        (self.aim - self.pos).normalize_or(Vec3::NEG_Z)
    }
}

/// Complete game state (deterministic; serialized for debug dumps)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG (spawn positions, speeds, detail levels)
    #[serde(skip)]
    rng: Pcg32,
    /// Score, incremented only by the hit resolver
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Most recent hand sample (live input, or carried when tracking drops)
    pub last_hand: Vec2,
    /// Hand sample captured at the moment of pausing
    pub frozen_hand: Option<Vec2>,
    /// Time since the last asteroid spawn (frozen while paused)
    pub spawn_clock: f32,
    /// Time since the last shot
    pub fire_clock: f32,
    /// Player turret
    pub turret: Turret,
    /// Active asteroids (sorted by id for determinism)
    pub asteroids: Vec<Asteroid>,
    /// Active projectiles (sorted by id for determinism)
    pub projectiles: Vec<Projectile>,
    /// Active explosion effects
    pub explosions: Vec<Explosion>,
    /// Active floating score labels
    pub labels: Vec<ScoreLabel>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            last_hand: Vec2::ZERO,
            frozen_hand: None,
            spawn_clock: 0.0,
            fire_clock: 0.0,
            turret: Turret::default(),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            explosions: Vec::new(),
            labels: Vec::new(),
            particles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one asteroid randomized within the spawn field
    pub fn spawn_asteroid(&mut self) {
        let pos = Vec3::new(
            self.rng.random_range(-SPAWN_HALF_WIDTH..SPAWN_HALF_WIDTH),
            self.rng.random_range(-SPAWN_HALF_HEIGHT..SPAWN_HALF_HEIGHT),
            SPAWN_DEPTH,
        );
        let speed = self.rng.random_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED);
        let size = self.rng.random_range(ASTEROID_MIN_DETAIL..ASTEROID_MAX_DETAIL);
        let id = self.next_entity_id();
        self.asteroids.push(Asteroid { id, pos, speed, size });
    }

    /// Fire one projectile from the turret toward the crosshair
    pub fn fire_projectile(&mut self) {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            pos: self.turret.pos,
            dir: self.turret.fire_direction(),
            speed: PROJECTILE_SPEED,
        });
    }

    /// Spawn the explosion, floating label, and particle burst for a hit.
    ///
    /// Particle scatter uses a hash mix instead of the gameplay RNG so visual
    /// effects never perturb the spawn stream.
    pub fn spawn_hit_effects(&mut self, point: Vec3) {
        let explosion_id = self.next_entity_id();
        self.explosions.push(Explosion {
            id: explosion_id,
            pos: point,
            age: 0.0,
        });

        let label_id = self.next_entity_id();
        self.labels.push(ScoreLabel {
            id: label_id,
            pos: point,
            value: HIT_SCORE,
            age: 0.0,
        });

        let burst_seed = (self.time_ticks as u32).wrapping_add(explosion_id);
        for i in 0..EXPLOSION_PARTICLES {
            if self.particles.len() >= MAX_PARTICLES {
                self.particles.remove(0);
            }
            let hash = burst_seed
                .wrapping_mul(2654435761)
                .wrapping_add(i as u32 * 7919);
            let rand1 = (hash % 1000) as f32 / 1000.0;
            let rand2 = ((hash >> 10) % 1000) as f32 / 1000.0;
            let rand3 = ((hash >> 20) % 1000) as f32 / 1000.0;

            let theta = rand1 * std::f32::consts::TAU;
            let phi = rand2 * std::f32::consts::PI;
            let speed = PARTICLE_MIN_SPEED + rand3 * (PARTICLE_MAX_SPEED - PARTICLE_MIN_SPEED);
            let vel = Vec3::new(
                phi.sin() * theta.cos(),
                phi.sin() * theta.sin(),
                phi.cos(),
            ) * speed;

            self.particles.push(Particle {
                pos: point,
                vel,
                life: 1.0,
                size: 0.1,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ids_monotonic() {
        let mut state = GameState::new(1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_spawn_asteroid_within_field() {
        let mut state = GameState::new(42);
        for _ in 0..32 {
            state.spawn_asteroid();
        }
        for asteroid in &state.asteroids {
            assert!(asteroid.pos.x >= -SPAWN_HALF_WIDTH && asteroid.pos.x < SPAWN_HALF_WIDTH);
            assert!(asteroid.pos.y >= -SPAWN_HALF_HEIGHT && asteroid.pos.y < SPAWN_HALF_HEIGHT);
            assert_eq!(asteroid.pos.z, SPAWN_DEPTH);
            assert!(asteroid.speed >= ASTEROID_MIN_SPEED && asteroid.speed < ASTEROID_MAX_SPEED);
        }
    }

    #[test]
    fn test_turret_track_mirrors_x() {
        let mut turret = Turret::default();
        turret.track(Vec2::new(1.0, 0.5));
        assert!((turret.pos.x - -TURRET_RANGE_X).abs() < 1e-6);
        assert!((turret.pos.y - 0.5 * TURRET_RANGE_Y).abs() < 1e-6);
        assert!((turret.aim.x - -AIM_RANGE_X).abs() < 1e-6);
        assert_eq!(turret.aim.z, AIM_DEPTH);
    }

    #[test]
    fn test_fire_direction_is_unit() {
        let mut turret = Turret::default();
        turret.track(Vec2::new(0.3, -0.7));
        let dir = turret.fire_direction();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        // Crosshair sits in front of the turret, so shots travel into the scene
        assert!(dir.z < 0.0);
    }

    #[test]
    fn test_hit_effects_spawn_one_of_each() {
        let mut state = GameState::new(7);
        state.spawn_hit_effects(Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(state.labels.len(), 1);
        assert_eq!(state.labels[0].value, HIT_SCORE);
        assert_eq!(state.particles.len(), EXPLOSION_PARTICLES);
    }
}
