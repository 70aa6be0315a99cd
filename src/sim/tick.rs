//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically: spawn and fire
//! cadences, entity movement, hit resolution, and the pause state machine.

use glam::Vec2;

use super::collision::resolve_hits;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Normalized palm position from the hand tracker, if one was detected.
    /// `None` keeps aiming from the last known sample.
    pub hand: Option<Vec2>,
    /// Pause toggle (edge-triggered, one per keypress)
    pub pause: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.frozen_hand = Some(state.last_hand);
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => {
                state.frozen_hand = None;
                // Restart the spawn interval from zero so resuming never
                // double-fires a pending spawn
                state.spawn_clock = 0.0;
                state.phase = GamePhase::Running;
            }
        }
    }

    // Everything freezes while paused; the renderer keeps drawing the pose
    if state.phase == GamePhase::Paused {
        return;
    }

    state.time_ticks += 1;

    // Input adapter: a live sample wins, otherwise the last known one carries
    if let Some(hand) = input.hand {
        state.last_hand = hand.clamp(Vec2::splat(-1.0), Vec2::ONE);
    }
    state.turret.track(state.last_hand);

    // Spawn cadence
    state.spawn_clock += dt;
    while state.spawn_clock >= SPAWN_INTERVAL {
        state.spawn_clock -= SPAWN_INTERVAL;
        state.spawn_asteroid();
    }

    // Fire cadence, independent of input change
    state.fire_clock += dt;
    while state.fire_clock >= FIRE_INTERVAL {
        state.fire_clock -= FIRE_INTERVAL;
        state.fire_projectile();
    }

    // Advance entities
    for asteroid in &mut state.asteroids {
        asteroid.advance(dt);
    }
    for projectile in &mut state.projectiles {
        projectile.advance(dt);
    }

    // Resolve hits over this frame's entity collections, then apply removals.
    // Events reference entities by id, so removal order cannot alias.
    let hits = resolve_hits(&state.projectiles, &state.asteroids, dt);
    for hit in &hits {
        state.projectiles.retain(|p| p.id != hit.projectile_id);
        state.asteroids.retain(|a| a.id != hit.asteroid_id);
        state.score += u64::from(HIT_SCORE);
        state.spawn_hit_effects(hit.point);
    }

    // Cull entities that left the scene
    state.asteroids.retain(|a| !a.past_camera());
    state.projectiles.retain(|p| !p.out_of_range());

    // Age transient effects
    for explosion in &mut state.explosions {
        explosion.advance(dt);
    }
    state.explosions.retain(|e| !e.expired());

    for label in &mut state.labels {
        label.advance(dt);
    }
    state.labels.retain(|l| !l.expired());

    for particle in &mut state.particles {
        particle.pos += particle.vel * dt;
        particle.life -= dt / EFFECT_DURATION;
    }
    state.particles.retain(|p| p.life > 0.0);
}
