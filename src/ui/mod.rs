//! UI domain — HUD, the almanac screen, and the config keybinds.

mod almanac_screen;
mod hud;

use bevy::prelude::*;

use crate::almanac;
use crate::config::{self, AlmanacConfig};
use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // ─── HUD — always present ───
        app.add_systems(Startup, hud::spawn_hud);
        app.add_systems(Update, (hud::update_date_display, toggle_almanac, config_keybinds));

        // ─── ALMANAC SCREEN ───
        // The cache is populated in the same OnEnter schedule; the screen
        // spawns after it so the icons see the finished aggregation.
        app.add_systems(
            OnEnter(GameState::Almanac),
            almanac_screen::spawn_almanac_screen.after(almanac::populate_cache_on_open),
        );
        app.add_systems(
            OnExit(GameState::Almanac),
            almanac_screen::despawn_almanac_screen,
        );
        app.add_systems(
            Update,
            (
                almanac_screen::almanac_navigation,
                almanac_screen::update_cell_highlight,
                almanac_screen::update_detail_text,
            )
                .run_if(in_state(GameState::Almanac)),
        );
    }
}

// ─── View toggling ────────────────────────────────────────────────────────────

/// K opens the almanac from Playing; K or Esc closes it again.
fn toggle_almanac(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match state.get() {
        GameState::Playing => {
            if keys.just_pressed(KeyCode::KeyK) {
                next_state.set(GameState::Almanac);
            }
        }
        GameState::Almanac => {
            if keys.just_pressed(KeyCode::KeyK) || keys.just_pressed(KeyCode::Escape) {
                next_state.set(GameState::Playing);
            }
        }
    }
}

// ─── Config keybinds ──────────────────────────────────────────────────────────

/// F6 toggles the almanac pipeline; [ and ] resize the calendar icons.
/// Every change is written straight back to config.json. Size and toggle
/// changes apply the next time the view opens.
fn config_keybinds(keys: Res<ButtonInput<KeyCode>>, mut config: ResMut<AlmanacConfig>) {
    let mut changed = false;

    if keys.just_pressed(KeyCode::F6) {
        config.enabled = !config.enabled;
        info!(
            "[Config] Almanac {}",
            if config.enabled { "enabled" } else { "disabled" }
        );
        changed = true;
    }
    if keys.just_pressed(KeyCode::BracketLeft) && config.icon_size > 1 {
        config.icon_size -= 1;
        info!("[Config] Icon size {}", config.icon_size);
        changed = true;
    }
    if keys.just_pressed(KeyCode::BracketRight) && config.icon_size < 4 {
        config.icon_size += 1;
        info!("[Config] Icon size {}", config.icon_size);
        changed = true;
    }

    if changed {
        if let Err(e) = config::write_config(&config) {
            warn!("[Config] Persist failed: {}", e);
        }
    }
}
