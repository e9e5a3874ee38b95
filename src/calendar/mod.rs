//! Calendar domain — day advancement.
//!
//! Time in this host is day-granular: pressing N ("sleep") ends the current
//! day, which advances the calendar with month/season/year rollover and
//! emits a DayEndEvent for the world domain to process crop growth.

use bevy::prelude::*;

use crate::shared::*;

pub struct CalendarPlugin;

impl Plugin for CalendarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, trigger_sleep.run_if(in_state(GameState::Playing)));
    }
}

// ─── Manual sleep trigger ────────────────────────────────────────────────────

/// Ends the day when the player presses N. Only available while Playing;
/// the calendar never advances while the almanac view is open.
fn trigger_sleep(
    keys: Res<ButtonInput<KeyCode>>,
    mut calendar: ResMut<Calendar>,
    mut day_end_events: EventWriter<DayEndEvent>,
) {
    if !keys.just_pressed(KeyCode::KeyN) {
        return;
    }

    info!(
        "[Calendar] Player triggered sleep on Day {} {:?} Year {}",
        calendar.day, calendar.season, calendar.year
    );

    end_day(&mut calendar, &mut day_end_events);
}

/// Emits DayEndEvent for the ending day, then advances the calendar.
/// Handles day -> month -> season -> year rollovers.
fn end_day(calendar: &mut Calendar, day_end_writer: &mut EventWriter<DayEndEvent>) {
    // Emit with the CURRENT day (the day that just ended).
    day_end_writer.send(DayEndEvent {
        day: calendar.day,
        season: calendar.season,
        year: calendar.year,
    });

    calendar.day += 1;

    if calendar.day > DAYS_PER_MONTH {
        calendar.day = 1;
        let old_season = calendar.season;
        calendar.season = calendar.season.next();

        info!(
            "[Calendar] Season changed: {:?} -> {:?} (Year {})",
            old_season, calendar.season, calendar.year
        );

        // Year rollover happens when Spring begins again
        if calendar.season == Season::Spring {
            calendar.year += 1;
            info!("[Calendar] New Year! Year {}", calendar.year);
        }
    }

    info!(
        "[Calendar] New day: Day {} {:?} Year {}",
        calendar.day, calendar.season, calendar.year
    );
}

// ─── Tests ────────────────────────────────────────────────────────────────────
