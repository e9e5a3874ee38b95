//! Almanac configuration — `config.json` next to the executable.
//!
//! Loaded once at startup; written back whenever the player changes a
//! setting in-game. A missing file is created with defaults, a corrupt one
//! is left alone and defaults are used for the session.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

// ═══════════════════════════════════════════════════════════════════════
// CONFIG RESOURCE
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlmanacConfig {
    /// Master toggle. When off, opening the almanac skips the whole
    /// scan-predict-aggregate pipeline and the view stays empty.
    #[serde(default = "AlmanacConfig::default_enabled")]
    pub enabled: bool,
    /// Icon footprint in tenths of a day cell, 1 (small) to 4 (extra large).
    #[serde(default = "AlmanacConfig::default_icon_size")]
    pub icon_size: u8,
    /// Icon anchor inside the cell: 0.0 = left edge, 1.0 = right edge.
    #[serde(default = "AlmanacConfig::default_icon_x")]
    pub icon_x: f32,
    /// Icon anchor inside the cell: 0.0 = top edge, 1.0 = bottom edge.
    #[serde(default = "AlmanacConfig::default_icon_y")]
    pub icon_y: f32,
}

impl AlmanacConfig {
    fn default_enabled() -> bool {
        true
    }
    fn default_icon_size() -> u8 {
        2
    }
    fn default_icon_x() -> f32 {
        1.0
    }
    fn default_icon_y() -> f32 {
        0.0
    }

    /// Clamp out-of-range values from a hand-edited file.
    pub fn sanitize(&mut self) {
        self.icon_size = self.icon_size.clamp(1, 4);
        self.icon_x = self.icon_x.clamp(0.0, 1.0);
        self.icon_y = self.icon_y.clamp(0.0, 1.0);
    }
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            icon_size: Self::default_icon_size(),
            icon_x: Self::default_icon_x(),
            icon_y: Self::default_icon_y(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AlmanacConfig>()
            .add_systems(Startup, load_config);
    }
}

fn load_config(mut config: ResMut<AlmanacConfig>) {
    match read_config() {
        Ok(Some(mut loaded)) => {
            loaded.sanitize();
            info!("[Config] Loaded {:?}", loaded);
            *config = loaded;
        }
        Ok(None) => {
            // First run: write the defaults so the player has a file to edit.
            if let Err(e) = write_config(&config) {
                warn!("[Config] Could not write default config: {}", e);
            } else {
                info!("[Config] Wrote default config");
            }
        }
        Err(e) => {
            warn!("[Config] {} — using defaults for this session", e);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FILESYSTEM HELPERS
// ═══════════════════════════════════════════════════════════════════════

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join("config.json")
}

/// Read `config.json`. `Ok(None)` means the file doesn't exist yet.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_config() -> Result<Option<AlmanacConfig>, String> {
    let path = config_path();
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    let config =
        serde_json::from_str(&json).map_err(|e| format!("Config parse failed: {}", e))?;
    Ok(Some(config))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_config(config: &AlmanacConfig) -> Result<(), String> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Serialization failed: {}", e))?;

    let path = config_path();
    // Write to a temp file first, then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, &path).map_err(|e| format!("Rename failed: {}", e))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn read_config() -> Result<Option<AlmanacConfig>, String> {
    Ok(None)
}

#[cfg(target_arch = "wasm32")]
pub fn write_config(_config: &AlmanacConfig) -> Result<(), String> {
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
