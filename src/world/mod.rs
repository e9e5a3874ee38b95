//! World domain — locations, planting, daily crop growth, harvest.
//!
//! Owns the demo world the almanac scans: a farm, a greenhouse, an island
//! field and an (ineligible) town square. Crop growth is phase-based; a
//! regrowing crop that has been harvested counts its phase-day field *down*
//! from the regrow interval to zero, which is the bookkeeping the almanac
//! predictor reproduces.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_demo_world).add_systems(
            Update,
            (harvest_ready_crops, on_day_end).run_if(in_state(GameState::Playing)),
        );
    }
}

// ─── Growth & harvest ─────────────────────────────────────────────────────────

/// Advance one crop by one day.
///
/// Before maturity the phase-day counter runs up and rolls the crop into the
/// next phase when the phase duration is reached; entering the terminal
/// phase flags the crop ready. After a harvest, a regrowing crop runs the
/// same counter down until its next produce is ready.
pub fn advance_crop_day(crop: &mut PlantedCrop) {
    if crop.dead {
        return;
    }

    let mature = crop.mature_phase();
    if crop.current_phase < mature {
        crop.day_of_current_phase += 1;
        if crop.day_of_current_phase >= crop.phase_days[crop.current_phase] {
            crop.current_phase += 1;
            crop.day_of_current_phase = 0;
        }
        if crop.current_phase == mature {
            crop.ready_for_harvest = true;
        }
    } else if crop.regrows && !crop.ready_for_harvest {
        // Steady-state regrow: countdown to the next produce.
        crop.day_of_current_phase = crop.day_of_current_phase.saturating_sub(1);
        if crop.day_of_current_phase == 0 {
            crop.ready_for_harvest = true;
        }
    }
}

/// Harvest the plot if its crop is ready. Returns the harvested item id.
///
/// Regrowing crops stay planted and enter the regrow countdown;
/// single-harvest crops leave the plot empty.
pub fn harvest_plot(plot: &mut PlotTile) -> Option<ItemId> {
    let crop = plot.crop.as_mut()?;
    if !crop.ready_for_harvest || crop.dead || crop.forage_variant {
        return None;
    }

    let harvested = crop.crop_id.clone();
    if crop.regrows {
        crop.ready_for_harvest = false;
        crop.day_of_current_phase = crop.regrow_days;
    } else {
        plot.crop = None;
    }
    Some(harvested)
}

/// Reads DayEndEvent and grows every planted crop by one day.
pub fn on_day_end(mut day_end_reader: EventReader<DayEndEvent>, mut world_state: ResMut<WorldState>) {
    for event in day_end_reader.read() {
        let mut grown = 0;
        for location in &mut world_state.locations {
            for plot in location.plots.values_mut() {
                if let Some(crop) = plot.crop.as_mut() {
                    advance_crop_day(crop);
                    grown += 1;
                }
            }
        }
        info!(
            "[World] Day {} ended — advanced {} crops",
            event.day, grown
        );
    }
}

/// H harvests every ready crop in the world.
fn harvest_ready_crops(
    keys: Res<ButtonInput<KeyCode>>,
    mut world_state: ResMut<WorldState>,
) {
    if !keys.just_pressed(KeyCode::KeyH) {
        return;
    }

    let mut harvested = 0;
    for location in &mut world_state.locations {
        for plot in location.plots.values_mut() {
            if harvest_plot(plot).is_some() {
                harvested += 1;
            }
        }
    }
    info!("[World] Harvested {} crops", harvested);
}

// ─── Demo world setup ─────────────────────────────────────────────────────────

/// Plant a crop and grow it for `age_days` days, as if planted in the past.
pub fn plant_aged(def: &CropDef, age_days: u32) -> PlantedCrop {
    let mut crop = PlantedCrop::from_def(def);
    for _ in 0..age_days {
        advance_crop_day(&mut crop);
    }
    crop
}

/// Seeds the world the demo runs on. The almanac itself works over any
/// `WorldState`; this just gives the player something to look at.
pub fn setup_demo_world(mut world_state: ResMut<WorldState>, crop_registry: Res<CropRegistry>) {
    let mut rng = rand::thread_rng();

    // Farm: rows of spring crops at varied ages, plus the skip cases.
    let mut farm = Location::new("Riverbend Farm", LocationKind::Farm);
    for (row, crop_id) in ["turnip", "strawberry", "cauliflower"].iter().enumerate() {
        let Some(def) = crop_registry.get(crop_id) else {
            continue;
        };
        let total: u32 = def.phase_days.iter().sum();
        for col in 0..6 {
            let age = rng.gen_range(0..=total);
            farm.plots.insert(
                (col, row as i32),
                PlotTile {
                    crop: Some(plant_aged(def, age)),
                },
            );
        }
    }
    // A dead crop, a forage spawn, and a bare tilled plot.
    if let Some(def) = crop_registry.get("turnip") {
        let mut withered = PlantedCrop::from_def(def);
        withered.dead = true;
        farm.plots.insert((0, 3), PlotTile { crop: Some(withered) });
    }
    let forage = PlantedCrop {
        crop_id: "ginger".into(),
        current_phase: 0,
        day_of_current_phase: 0,
        phase_days: vec![1, PHASE_TERMINAL],
        regrows: false,
        regrow_days: 0,
        dead: false,
        forage_variant: true,
        ready_for_harvest: true,
    };
    farm.plots.insert((1, 3), PlotTile { crop: Some(forage) });
    farm.plots.insert((2, 3), PlotTile::default());

    // Greenhouse: ancient fruit in steady-state regrow at varied countdowns.
    let mut greenhouse = Location::new("Greenhouse", LocationKind::Greenhouse);
    if let Some(def) = crop_registry.get("ancient_fruit") {
        let total: u32 = def.phase_days.iter().sum();
        for col in 0..4 {
            let mut plot = PlotTile {
                crop: Some(plant_aged(def, total)),
            };
            if col % 2 == 1 {
                // Harvested some days ago: mid-countdown.
                harvest_plot(&mut plot);
                if let Some(crop) = plot.crop.as_mut() {
                    for _ in 0..rng.gen_range(0..def.regrow_days) {
                        advance_crop_day(crop);
                    }
                }
            }
            greenhouse.plots.insert((col, 0), plot);
        }
    }

    // Island field: regrowing pineapples partway through growth.
    let mut island = Location::new("Island Field", LocationKind::IslandField);
    if let Some(def) = crop_registry.get("pineapple") {
        for col in 0..3 {
            let age = rng.gen_range(0..8);
            island.plots.insert(
                (col, 0),
                PlotTile {
                    crop: Some(plant_aged(def, age)),
                },
            );
        }
    }

    // Town square: scanned but never counted.
    let mut town = Location::new("Town Square", LocationKind::Town);
    if let Some(def) = crop_registry.get("turnip") {
        town.plots.insert(
            (0, 0),
            PlotTile {
                crop: Some(PlantedCrop::from_def(def)),
            },
        );
    }

    let locations = vec![farm, greenhouse, island, town];
    let plot_count: usize = locations.iter().map(|l| l.plots.len()).sum();
    world_state.locations = locations;

    info!(
        "[World] Demo world seeded: {} locations, {} plots",
        world_state.locations.len(),
        plot_count
    );
}

// ─── Tests ────────────────────────────────────────────────────────────────────
