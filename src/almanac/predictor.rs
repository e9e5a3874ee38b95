//! Harvest prediction for a single planted crop.

use crate::shared::*;

/// Result of predicting one crop: days until its next harvest, and the
/// regrow interval if the crop keeps producing after harvest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestPrediction {
    pub days_until: u32,
    pub regrow: Option<u32>,
}

/// Compute how many days remain until `crop` can next be harvested.
///
/// Walks the phase-day sequence from the current phase to the end, counting
/// the remaining full phases and discounting the days already spent in the
/// current phase. Two special cases:
///
/// - a crop flagged ready is harvestable today (0 days);
/// - a regrowing crop sitting in its terminal phase reports
///   `day_of_current_phase` directly — in that steady state the field counts
///   down toward the next produce instead of up.
///
/// Total over well-formed input. An out-of-range `current_phase` is a bug in
/// the world state, not a condition this function recovers from.
pub fn predict(crop: &PlantedCrop) -> HarvestPrediction {
    let regrow = crop.regrows.then_some(crop.regrow_days);

    if crop.ready_for_harvest {
        return HarvestPrediction {
            days_until: 0,
            regrow,
        };
    }

    let mut days = 0;
    for phase in crop.current_phase..crop.phase_days.len() {
        let duration = crop.phase_days[phase];
        if duration < PHASE_TERMINAL {
            days += duration;
            if phase == crop.current_phase {
                days -= crop.day_of_current_phase;
            }
        } else if crop.current_phase == crop.phase_days.len() - 1 && crop.regrows {
            // Steady-state regrow: the day counter runs backwards here.
            days = crop.day_of_current_phase;
        }
    }

    HarvestPrediction {
        days_until: days,
        regrow,
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
