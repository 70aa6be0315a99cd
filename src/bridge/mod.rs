//! wasm boundary
//!
//! The JS side owns the three external collaborators: the 3D renderer (which
//! also owns the frame clock), the MediaPipe hand tracker, and the debug
//! control panel. This module exposes the simulation to them as a single
//! `Game` class: palm samples come in, flat entity buffers go out, and
//! `frame()` advances the fixed-timestep sim off the renderer's clock.

use wasm_bindgen::prelude::*;

use crate::consts::*;
use crate::input::HandTracker;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// Called automatically when the WASM module loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Game instance driven by the renderer's animation frame callback
#[wasm_bindgen]
pub struct Game {
    state: GameState,
    tracker: HandTracker,
    input: TickInput,
    accumulator: f32,
    last_time: f64,
}

#[wasm_bindgen]
impl Game {
    /// Create a game. Pass a seed for a reproducible run, or nothing to seed
    /// from the clock.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> Game {
        let seed = seed
            .map(|s| s as u64)
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Game initialized with seed: {seed}");
        Game {
            state: GameState::new(seed),
            tracker: HandTracker::new(),
            input: TickInput::default(),
            accumulator: 0.0,
            last_time: 0.0,
        }
    }

    /// Submit a normalized palm sample from the hand tracker. Call whenever
    /// a detection pass finds a hand; skipping frames is fine.
    pub fn set_hand_position(&mut self, x: f32, y: f32) {
        self.tracker.submit(x, y);
    }

    /// Edge-triggered pause toggle (Escape keypress on the JS side)
    pub fn toggle_pause(&mut self) {
        self.input.pause = true;
    }

    /// Advance the simulation to the renderer's clock (milliseconds)
    pub fn frame(&mut self, now_ms: f64) {
        let dt = if self.last_time > 0.0 {
            ((now_ms - self.last_time) / 1000.0) as f32
        } else {
            0.0
        };
        self.last_time = now_ms;
        self.accumulator += dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.input.hand = self.tracker.sample();
            let input = self.input.clone();
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.pause = false;
        }
    }

    pub fn score(&self) -> f64 {
        self.state.score as f64
    }

    pub fn is_paused(&self) -> bool {
        self.state.phase == GamePhase::Paused
    }

    /// `[id, x, y, z, size]` per asteroid
    pub fn asteroid_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.state.asteroids.len() * 5);
        for a in &self.state.asteroids {
            out.push(a.id as f32);
            out.extend_from_slice(bytemuck::cast_slice(&[a.pos]));
            out.push(a.size);
        }
        out
    }

    /// `[id, x, y, z, dx, dy, dz]` per projectile
    pub fn projectile_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.state.projectiles.len() * 7);
        for p in &self.state.projectiles {
            out.push(p.id as f32);
            out.extend_from_slice(bytemuck::cast_slice(&[p.pos, p.dir]));
        }
        out
    }

    /// `[id, x, y, z, age]` per explosion
    pub fn explosion_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.state.explosions.len() * 5);
        for e in &self.state.explosions {
            out.push(e.id as f32);
            out.extend_from_slice(bytemuck::cast_slice(&[e.pos]));
            out.push(e.age);
        }
        out
    }

    /// `[x, y, z, size, life]` per debris particle
    pub fn particle_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.state.particles.len() * 5);
        for p in &self.state.particles {
            out.extend_from_slice(bytemuck::cast_slice(&[p.pos]));
            out.push(p.size);
            out.push(p.life);
        }
        out
    }

    /// `[id, x, y, z, value, opacity]` per floating score label
    pub fn score_label_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.state.labels.len() * 6);
        for l in &self.state.labels {
            out.push(l.id as f32);
            out.extend_from_slice(bytemuck::cast_slice(&[l.pos]));
            out.push(l.value as f32);
            out.push(l.opacity());
        }
        out
    }

    /// `[pos.x, pos.y, pos.z, aim.x, aim.y, aim.z]` for turret and crosshair
    pub fn turret_data(&self) -> Vec<f32> {
        bytemuck::cast_slice(&[self.state.turret.pos, self.state.turret.aim]).to_vec()
    }

    /// Full sim state as JSON for the debug panel
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_default()
    }

    /// Persisted debug-panel settings as JSON
    pub fn settings_json(&self) -> String {
        serde_json::to_string(&Settings::load()).unwrap_or_default()
    }

    /// Persist debug-panel settings (JSON payload from the panel)
    pub fn save_settings_json(&self, json: &str) {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.save(),
            Err(e) => log::warn!("Ignoring malformed settings payload: {e}"),
        }
    }
}
