//! Debug-panel tunables
//!
//! Mirrors the control panel on the JS side: camera offsets and
//! post-processing intensities. None of these affect game logic; the sim
//! never reads them. Persisted to LocalStorage on web so panel tweaks
//! survive a reload.

use serde::{Deserialize, Serialize};

/// Renderer-side tunables exposed through the debug panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Camera ===
    pub camera_x: f32,
    pub camera_y: f32,
    pub camera_z: f32,

    // === Bloom ===
    pub bloom_enabled: bool,
    pub bloom_intensity: f32,
    pub bloom_luminance_threshold: f32,
    pub bloom_luminance_smoothing: f32,

    // === Film grain ===
    pub noise_opacity: f32,
    pub noise_intensity: f32,

    // === Vignette ===
    pub vignette_offset: f32,
    pub vignette_darkness: f32,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera_x: 0.0,
            camera_y: 1.55,
            camera_z: 2.0,

            bloom_enabled: true,
            bloom_intensity: 0.5,
            bloom_luminance_threshold: 1.0,
            bloom_luminance_smoothing: 0.05,

            noise_opacity: 0.39,
            noise_intensity: 0.25,

            vignette_offset: 0.44,
            vignette_darkness: 0.8,

            show_fps: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "neon_asteroids_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
