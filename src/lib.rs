//! Neon Asteroids - hand-tracked 3D asteroid shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, hit testing, game state)
//! - `input`: Hand-tracking input adapter (normalized palm samples)
//! - `settings`: Debug-panel tunables, persisted to LocalStorage on web
//! - `bridge`: wasm boundary driven by the external renderer's frame callback

pub mod input;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod bridge;

pub use input::HandTracker;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth hit testing)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Seconds of simulated time between asteroid spawns
    pub const SPAWN_INTERVAL: f32 = 2.0;
    /// Spawn field half-extents at the spawn plane
    pub const SPAWN_HALF_WIDTH: f32 = 5.0;
    pub const SPAWN_HALF_HEIGHT: f32 = 3.0;
    /// Depth at which asteroids enter the scene
    pub const SPAWN_DEPTH: f32 = -15.0;
    /// Asteroid approach speed range (units/sec toward the viewer)
    pub const ASTEROID_MIN_SPEED: f32 = 5.0;
    pub const ASTEROID_MAX_SPEED: f32 = 7.0;
    /// Bounding sphere radius used for hit testing
    pub const ASTEROID_RADIUS: f32 = 0.3;
    /// Visual tessellation detail range (renderer-side sphere segments)
    pub const ASTEROID_MIN_DETAIL: f32 = 15.0;
    pub const ASTEROID_MAX_DETAIL: f32 = 145.0;
    /// Depth at which an asteroid has passed the camera and despawns
    pub const ASTEROID_CULL_DEPTH: f32 = 10.0;

    /// Projectile speed (units/sec)
    pub const PROJECTILE_SPEED: f32 = 15.0;
    /// Depth past which a projectile despawns
    pub const PROJECTILE_CULL_DEPTH: f32 = -20.0;
    /// Seconds between shots while the turret is live
    pub const FIRE_INTERVAL: f32 = 0.2;

    /// Turret position mapping: mirrored, scaled hand position
    pub const TURRET_RANGE_X: f32 = 4.5;
    pub const TURRET_RANGE_Y: f32 = 3.5;
    /// Crosshair mapping (aim plane)
    pub const AIM_RANGE_X: f32 = 10.0;
    pub const AIM_RANGE_Y: f32 = 10.0;
    pub const AIM_DEPTH: f32 = -5.0;

    /// Score awarded per destroyed asteroid
    pub const HIT_SCORE: u32 = 100;
    /// Lifetime of explosion and floating-score entities (seconds)
    pub const EFFECT_DURATION: f32 = 1.0;
    /// Upward drift of floating score labels (units/sec)
    pub const LABEL_RISE_SPEED: f32 = 0.6;

    /// Explosion particle burst size
    pub const EXPLOSION_PARTICLES: usize = 50;
    /// Particle ejection speed range (units/sec)
    pub const PARTICLE_MIN_SPEED: f32 = 2.0;
    pub const PARTICLE_MAX_SPEED: f32 = 4.0;
}
