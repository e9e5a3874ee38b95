//! Whole-world harvest aggregation.
//!
//! One pass over every eligible location builds a flat
//! `(day, location, crop)` → count table; two folds over that table produce
//! the per-day icon choice and the per-day location detail, merged into
//! [`DaySummary`] records keyed by day of month.

use std::collections::BTreeMap;

use super::predictor::predict;
use crate::shared::*;

/// One slot in the flat harvest-count table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HarvestKey {
    pub day: u8,
    pub location: String,
    pub crop_id: ItemId,
}

/// Flat count table. Ordered so that both groupings (and therefore the
/// aggregate output) are deterministic regardless of plot iteration order.
pub type HarvestTable = BTreeMap<HarvestKey, u32>;

/// Everything the calendar needs to render one future day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day: u8,
    /// Crop with the largest aggregated count on this day; drawn as the icon.
    pub icon_crop: ItemId,
    /// Per-location harvest counts, in grouping order. Never re-sorted.
    pub location_counts: Vec<(String, u32)>,
}

impl DaySummary {
    pub fn new(day: u8, icon_crop: ItemId) -> Self {
        Self {
            day,
            icon_crop,
            location_counts: Vec::new(),
        }
    }

    pub fn add_location(&mut self, location: impl Into<String>, count: u32) {
        self.location_counts.push((location.into(), count));
    }

    /// Total crops ready on this day across all locations.
    pub fn total_count(&self) -> u32 {
        self.location_counts.iter().map(|(_, n)| n).sum()
    }
}

/// Fold one location's live crops into the flat count table.
///
/// Skips empty plots, dead crops, and forage variants. Each surviving crop
/// is predicted once, then projected across the remaining days of the month:
/// the first harvest at `today + days_until`, and for regrowing crops one
/// further harvest every regrow interval until the month runs out.
pub fn collect_location(location: &Location, today: u8, table: &mut HarvestTable) {
    for plot in location.plots.values() {
        let Some(crop) = plot.crop.as_ref() else {
            continue;
        };
        if crop.dead || crop.forage_variant {
            continue;
        }

        let prediction = predict(crop);

        let mut day = today as u32 + prediction.days_until;
        while day <= DAYS_PER_MONTH as u32 {
            let key = HarvestKey {
                day: day as u8,
                location: location.name.clone(),
                crop_id: crop.crop_id.clone(),
            };
            *table.entry(key).or_insert(0) += 1;

            match prediction.regrow {
                Some(interval) => {
                    debug_assert!(interval > 0, "regrow interval must be positive");
                    if interval == 0 {
                        break;
                    }
                    day += interval;
                }
                None => break,
            }
        }
    }
}

/// Scan every eligible location and build the day-keyed summary map.
///
/// Days before `today` never appear: the projection starts at
/// `today + days_until` with `days_until >= 0`. Ineligible locations are
/// scanned past without contributing.
pub fn aggregate(world: &WorldState, today: u8) -> BTreeMap<u8, DaySummary> {
    let mut table = HarvestTable::new();
    for location in &world.locations {
        if !location.kind.supports_crops() {
            continue;
        }
        collect_location(location, today, &mut table);
    }
    summarize(&table)
}

/// Fold the flat table into per-day summaries.
pub fn summarize(table: &HarvestTable) -> BTreeMap<u8, DaySummary> {
    // Icon grouping: (day, crop) → count summed across locations.
    // Detail grouping: (day, location) → count summed across crops.
    let mut by_crop: BTreeMap<(u8, ItemId), u32> = BTreeMap::new();
    let mut by_location: BTreeMap<(u8, String), u32> = BTreeMap::new();
    for (key, count) in table {
        *by_crop.entry((key.day, key.crop_id.clone())).or_insert(0) += count;
        *by_location
            .entry((key.day, key.location.clone()))
            .or_insert(0) += count;
    }

    // Pick each day's icon: largest summed count wins; only a strictly
    // larger count displaces the current winner, so ties resolve to the
    // smallest crop id.
    let mut days: BTreeMap<u8, DaySummary> = BTreeMap::new();
    let mut best_counts: BTreeMap<u8, u32> = BTreeMap::new();
    for ((day, crop_id), count) in &by_crop {
        match best_counts.get(day) {
            None => {
                best_counts.insert(*day, *count);
                days.insert(*day, DaySummary::new(*day, crop_id.clone()));
            }
            Some(best) if count > best => {
                best_counts.insert(*day, *count);
                if let Some(summary) = days.get_mut(day) {
                    summary.icon_crop = crop_id.clone();
                }
            }
            Some(_) => {}
        }
    }

    // Append the location detail. Both groupings derive from the same table,
    // so every detail day must already have a summary.
    for ((day, location), count) in &by_location {
        let summary = days.get_mut(day);
        debug_assert!(
            summary.is_some(),
            "day {day} present in detail grouping but not in icon grouping"
        );
        if let Some(summary) = summary {
            summary.add_location(location.clone(), *count);
        }
    }

    days
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn planted(
        crop_id: &str,
        current_phase: usize,
        day_of_current_phase: u32,
        phase_days: Vec<u32>,
        regrows: bool,
        regrow_days: u32,
    ) -> PlantedCrop {
        PlantedCrop {
            crop_id: crop_id.to_string(),
            current_phase,
            day_of_current_phase,
            phase_days,
            regrows,
            regrow_days,
            dead: false,
            forage_variant: false,
            ready_for_harvest: false,
        }
    }

    fn world_with(location: Location) -> WorldState {
        WorldState {
            locations: vec![location],
        }
    }

    fn plant_at(location: &mut Location, x: i32, crop: PlantedCrop) {
        location.plots.insert((x, 0), PlotTile { crop: Some(crop) });
    }

    #[test]
    fn test_single_crop_single_day() {
        let mut farm = Location::new("Farm", LocationKind::Farm);
        plant_at(
            &mut farm,
            0,
            planted("turnip", 0, 0, vec![1, PHASE_TERMINAL], false, 0),
        );
        let days = aggregate(&world_with(farm), 1);

        assert_eq!(days.len(), 1);
        let summary = &days[&2];
        assert_eq!(summary.icon_crop, "turnip");
        assert_eq!(summary.location_counts, vec![("Farm".to_string(), 1)]);
    }

    #[test]
    fn test_regrowing_crop_projects_until_month_end() {
        let mut farm = Location::new("Farm", LocationKind::Farm);
        let mut berry = planted("blueberry", 5, 0, vec![1, 3, 3, 4, 2, PHASE_TERMINAL], true, 4);
        berry.ready_for_harvest = true;
        plant_at(&mut farm, 0, berry);

        let days = aggregate(&world_with(farm), 10);
        let expected: Vec<u8> = vec![10, 14, 18, 22, 26];
        assert_eq!(days.keys().copied().collect::<Vec<_>>(), expected);
        for day in expected {
            assert_eq!(days[&day].location_counts, vec![("Farm".to_string(), 1)]);
        }
    }

    #[test]
    fn test_counts_accumulate_per_key() {
        let mut farm = Location::new("Farm", LocationKind::Farm);
        for x in 0..3 {
            plant_at(
                &mut farm,
                x,
                planted("turnip", 0, 0, vec![2, PHASE_TERMINAL], false, 0),
            );
        }
        let days = aggregate(&world_with(farm), 5);
        assert_eq!(days[&7].location_counts, vec![("Farm".to_string(), 3)]);
    }

    #[test]
    fn test_icon_is_largest_count_detail_sums_location() {
        // Two crop types in one location, both ready on day 15: counts 3 and 5.
        let mut farm = Location::new("Farm", LocationKind::Farm);
        for x in 0..3 {
            plant_at(
                &mut farm,
                x,
                planted("melon", 0, 0, vec![5, PHASE_TERMINAL], false, 0),
            );
        }
        for x in 3..8 {
            plant_at(
                &mut farm,
                x,
                planted("tomato", 0, 0, vec![5, PHASE_TERMINAL], false, 0),
            );
        }
        let days = aggregate(&world_with(farm), 10);

        let summary = &days[&15];
        assert_eq!(summary.icon_crop, "tomato");
        assert_eq!(summary.location_counts, vec![("Farm".to_string(), 8)]);
    }

    #[test]
    fn test_icon_tie_resolves_to_smallest_crop_id() {
        let mut farm = Location::new("Farm", LocationKind::Farm);
        plant_at(
            &mut farm,
            0,
            planted("melon", 0, 0, vec![5, PHASE_TERMINAL], false, 0),
        );
        plant_at(
            &mut farm,
            1,
            planted("artichoke", 0, 0, vec![5, PHASE_TERMINAL], false, 0),
        );
        let days = aggregate(&world_with(farm), 10);
        assert_eq!(days[&15].icon_crop, "artichoke");
    }

    #[test]
    fn test_dead_and_forage_crops_skipped() {
        let mut farm = Location::new("Farm", LocationKind::Farm);
        let mut dead = planted("turnip", 0, 0, vec![1, PHASE_TERMINAL], false, 0);
        dead.dead = true;
        let mut forage = planted("ginger", 0, 0, vec![1, PHASE_TERMINAL], false, 0);
        forage.forage_variant = true;
        plant_at(&mut farm, 0, dead);
        plant_at(&mut farm, 1, forage);
        farm.plots.insert((2, 0), PlotTile { crop: None });
        plant_at(
            &mut farm,
            3,
            planted("turnip", 0, 0, vec![1, PHASE_TERMINAL], false, 0),
        );

        let days = aggregate(&world_with(farm), 1);
        assert_eq!(days.len(), 1);
        assert_eq!(days[&2].location_counts, vec![("Farm".to_string(), 1)]);
    }

    #[test]
    fn test_ineligible_location_contributes_nothing() {
        let mut town = Location::new("Town", LocationKind::Town);
        plant_at(
            &mut town,
            0,
            planted("turnip", 0, 0, vec![1, PHASE_TERMINAL], false, 0),
        );
        assert!(aggregate(&world_with(town), 1).is_empty());
    }

    #[test]
    fn test_harvest_past_month_end_dropped() {
        let mut farm = Location::new("Farm", LocationKind::Farm);
        plant_at(
            &mut farm,
            0,
            planted("melon", 0, 0, vec![5, PHASE_TERMINAL], false, 0),
        );
        // Ready on day 30 — past the 28-day month.
        assert!(aggregate(&world_with(farm), 25).is_empty());
    }

    #[test]
    fn test_detail_order_spans_locations() {
        let mut farm = Location::new("Farm", LocationKind::Farm);
        plant_at(
            &mut farm,
            0,
            planted("turnip", 0, 0, vec![1, PHASE_TERMINAL], false, 0),
        );
        let mut greenhouse = Location::new("Greenhouse", LocationKind::Greenhouse);
        plant_at(
            &mut greenhouse,
            0,
            planted("turnip", 0, 0, vec![1, PHASE_TERMINAL], false, 0),
        );
        let world = WorldState {
            locations: vec![farm, greenhouse],
        };

        let days = aggregate(&world, 3);
        assert_eq!(
            days[&4].location_counts,
            vec![("Farm".to_string(), 1), ("Greenhouse".to_string(), 1)]
        );
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let mut farm = Location::new("Farm", LocationKind::Farm);
        let mut berry = planted("blueberry", 5, 2, vec![1, 3, 3, 4, 2, PHASE_TERMINAL], true, 4);
        berry.ready_for_harvest = false;
        plant_at(&mut farm, 0, berry);
        plant_at(
            &mut farm,
            1,
            planted("melon", 1, 1, vec![1, 5, 5, PHASE_TERMINAL], false, 0),
        );
        let world = world_with(farm);

        assert_eq!(aggregate(&world, 8), aggregate(&world, 8));
    }

    #[test]
    fn test_count_conservation_between_groupings() {
        let mut farm = Location::new("Farm", LocationKind::Farm);
        for x in 0..4 {
            plant_at(
                &mut farm,
                x,
                planted("turnip", 0, 0, vec![3, PHASE_TERMINAL], false, 0),
            );
        }
        let mut island = Location::new("Island Field", LocationKind::IslandField);
        for x in 0..2 {
            plant_at(
                &mut island,
                x,
                planted("pineapple", 0, 0, vec![3, PHASE_TERMINAL], false, 0),
            );
        }
        let world = WorldState {
            locations: vec![farm, island],
        };

        let mut table = HarvestTable::new();
        for location in &world.locations {
            collect_location(location, 1, &mut table);
        }
        let days = summarize(&table);

        for (day, summary) in &days {
            let icon_total: u32 = table
                .iter()
                .filter(|(key, _)| key.day == *day)
                .map(|(_, count)| count)
                .sum();
            assert_eq!(summary.total_count(), icon_total);
        }
    }

    #[test]
    fn test_output_days_within_month() {
        let mut farm = Location::new("Farm", LocationKind::Farm);
        let mut berry = planted("blueberry", 5, 0, vec![1, 3, 3, 4, 2, PHASE_TERMINAL], true, 4);
        berry.ready_for_harvest = true;
        plant_at(&mut farm, 0, berry);

        let today = 17;
        let days = aggregate(&world_with(farm), today);
        assert!(!days.is_empty());
        for day in days.keys() {
            assert!(*day >= today && *day <= DAYS_PER_MONTH);
        }
    }
}
