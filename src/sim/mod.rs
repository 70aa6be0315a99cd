//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{HitEvent, ray_sphere, resolve_hits};
pub use state::{
    Asteroid, Explosion, GamePhase, GameState, Particle, Projectile, ScoreLabel, Turret,
    MAX_PARTICLES,
};
pub use tick::{TickInput, tick};
