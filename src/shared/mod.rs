//! Shared components, resources, events, and states for Harvest Almanac.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Playing,
    /// The almanac (calendar) view is open. Entering this state triggers the
    /// full scan-predict-aggregate pipeline; leaving it drops the cache.
    Almanac,
}

// ═══════════════════════════════════════════════════════════════════════
// CALENDAR
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn next(self) -> Self {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    pub year: u32,
    pub season: Season,
    pub day: u8, // 1-28
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            year: 1,
            season: Season::Spring,
            day: 1,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ITEMS & CROP DEFINITIONS
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for every item type in the game.
/// Using string IDs for data-driven flexibility.
pub type ItemId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropDef {
    pub id: ItemId,
    pub name: String,
    /// Item produced on harvest (also the calendar icon id).
    pub harvest_id: ItemId,
    /// Days to spend in each growth phase before the mature phase.
    /// The terminal sentinel is appended when the crop is planted.
    pub phase_days: Vec<u32>,
    pub regrows: bool,
    pub regrow_days: u32, // days to regrow after harvest (if regrows)
    pub seasons: Vec<Season>,
    /// Placeholder icon colour until a sprite atlas exists.
    pub icon_rgb: (f32, f32, f32),
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CropRegistry {
    pub crops: HashMap<ItemId, CropDef>,
}

impl CropRegistry {
    pub fn get(&self, id: &str) -> Option<&CropDef> {
        self.crops.get(id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD — locations and planted crops
// ═══════════════════════════════════════════════════════════════════════

/// Classification used as the almanac's eligibility filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Farm,
    Greenhouse,
    /// Designated special growing region outside the farm proper.
    IslandField,
    Town,
    Interior,
}

impl LocationKind {
    /// Whether crops planted here count for harvest prediction.
    pub fn supports_crops(self) -> bool {
        matches!(
            self,
            LocationKind::Farm | LocationKind::Greenhouse | LocationKind::IslandField
        )
    }
}

/// A growing plant occupying a plot.
///
/// `phase_days` always ends with [`PHASE_TERMINAL`]; `current_phase` indexes
/// into it, and reaching the last index means the plant is mature. While a
/// regrowing plant sits in that terminal phase waiting for its next produce,
/// `day_of_current_phase` counts *down* from `regrow_days` to 0 rather than
/// up — the almanac predictor relies on that bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantedCrop {
    /// Harvest item id (what the calendar icon shows).
    pub crop_id: ItemId,
    pub current_phase: usize,
    pub day_of_current_phase: u32,
    pub phase_days: Vec<u32>,
    pub regrows: bool,
    pub regrow_days: u32,
    pub dead: bool,
    /// Forage-only variant: spawned produce that is never harvest-predicted.
    pub forage_variant: bool,
    pub ready_for_harvest: bool,
}

impl PlantedCrop {
    /// Plant a fresh crop from its definition (phase 0, day 0).
    pub fn from_def(def: &CropDef) -> Self {
        let mut phase_days = def.phase_days.clone();
        phase_days.push(PHASE_TERMINAL);
        Self {
            crop_id: def.harvest_id.clone(),
            current_phase: 0,
            day_of_current_phase: 0,
            phase_days,
            regrows: def.regrows,
            regrow_days: def.regrow_days,
            dead: false,
            forage_variant: false,
            ready_for_harvest: false,
        }
    }

    /// Index of the terminal (mature) phase.
    pub fn mature_phase(&self) -> usize {
        self.phase_days.len() - 1
    }
}

/// A tilled plot. May or may not hold a crop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlotTile {
    pub crop: Option<PlantedCrop>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub kind: LocationKind,
    /// Plots keyed by grid position.
    pub plots: HashMap<(i32, i32), PlotTile>,
}

impl Location {
    pub fn new(name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            plots: HashMap::new(),
        }
    }
}

/// The complete, centrally-owned view of all locations.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldState {
    pub locations: Vec<Location>,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct DayEndEvent {
    pub day: u8,
    pub season: Season,
    pub year: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const DAYS_PER_MONTH: u8 = 28;

/// Sentinel duration marking the terminal (mature/regrowing) phase in a
/// crop's phase-day sequence.
pub const PHASE_TERMINAL: u32 = 99_999;

pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 540.0;
