//! Neon Asteroids entry point
//!
//! The web build is driven entirely through `bridge::Game` by the JS
//! renderer; the native binary runs a short headless demo of the simulation.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use neon_asteroids::consts::SIM_DT;
    use neon_asteroids::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Neon Asteroids (native) starting...");

    // Headless demo: sweep the "hand" in a slow circle for thirty simulated
    // seconds and report what the sim did.
    let seed = 0xA57E_401D;
    let mut state = GameState::new(seed);
    let ticks = (30.0 / SIM_DT) as u64;
    for i in 0..ticks {
        let t = i as f32 * SIM_DT;
        let hand = Vec2::new((t * 0.8).cos() * 0.6, (t * 0.8).sin() * 0.4);
        let input = TickInput {
            hand: Some(hand),
            pause: false,
        };
        tick(&mut state, &input, SIM_DT);
    }

    log::info!(
        "demo finished: score={} asteroids={} projectiles={}",
        state.score,
        state.asteroids.len(),
        state.projectiles.len()
    );
    println!("Seed {seed}: score {} after 30 simulated seconds", state.score);
    println!("Build for wasm32 to play with hand tracking and the 3D renderer.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry points live in `bridge`; this is just to satisfy the compiler.
}
