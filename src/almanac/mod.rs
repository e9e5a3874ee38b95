//! Almanac domain — the harvest calendar.
//!
//! Responsible for:
//! - Predicting the next harvest day of every planted crop (`predictor`)
//! - Aggregating predictions into per-day summaries (`aggregator`)
//! - Owning the view cache: populated once when the almanac opens,
//!   dropped when it closes
//!
//! The whole pipeline is synchronous and runs to completion inside the
//! state-transition handler; nothing mutates world state while it scans.

pub mod aggregator;
pub mod predictor;

use bevy::prelude::*;
use std::collections::BTreeMap;

use crate::config::AlmanacConfig;
use crate::shared::*;
use aggregator::{aggregate, DaySummary};

/// Day-keyed summaries for the currently open almanac view.
///
/// Built fresh on every view-opening, cached while the view stays open so
/// the full-world scan runs once per opening rather than once per frame,
/// and discarded entirely on close.
#[derive(Resource, Debug, Clone, Default)]
pub struct AlmanacCache {
    pub days: BTreeMap<u8, DaySummary>,
    pub populated: bool,
}

pub struct AlmanacPlugin;

impl Plugin for AlmanacPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AlmanacCache>()
            .add_systems(OnEnter(GameState::Almanac), populate_cache_on_open)
            .add_systems(OnExit(GameState::Almanac), clear_cache_on_close);
    }
}

// ─── View lifecycle ───────────────────────────────────────────────────────────

/// Runs the scan-predict-aggregate pipeline when the almanac view opens.
/// Public so the UI can order its screen spawn after it.
pub fn populate_cache_on_open(
    mut cache: ResMut<AlmanacCache>,
    world_state: Res<WorldState>,
    calendar: Res<Calendar>,
    config: Res<AlmanacConfig>,
) {
    if !config.enabled {
        return;
    }
    // A populated cache means the view re-opened without a close in between;
    // leave it untouched.
    if cache.populated {
        return;
    }

    let today = calendar.day;
    cache.days = aggregate(&world_state, today);
    cache.populated = true;

    info!(
        "[Almanac] Aggregated {} harvest day(s) from day {} onward",
        cache.days.len(),
        today
    );

    // Near-term detail goes to the log as well, once per opening.
    for (day, summary) in cache.days.range(..=today.saturating_add(3)) {
        for (location, count) in &summary.location_counts {
            info!(
                "[Almanac] On day {}: {} has {} crops to be harvested",
                day, location, count
            );
        }
    }
}

/// Drops the cache when the almanac view closes.
fn clear_cache_on_close(mut cache: ResMut<AlmanacCache>) {
    cache.days.clear();
    cache.populated = false;
    info!("[Almanac] View closed, cache cleared");
}
