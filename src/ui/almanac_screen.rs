//! The almanac screen — a month grid with harvest icons and per-day detail.

use bevy::prelude::*;

use crate::almanac::AlmanacCache;
use crate::config::AlmanacConfig;
use crate::shared::*;

const CELL_WIDTH: f32 = 90.0;
const CELL_HEIGHT: f32 = 58.0;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct AlmanacScreenRoot;

#[derive(Component)]
pub struct AlmanacDayCell {
    pub day: u8,
}

#[derive(Component)]
pub struct AlmanacDetailText;

/// Tracks which day the selection cursor is on.
#[derive(Resource, Default)]
pub struct AlmanacUiState {
    pub cursor_day: u8,
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_almanac_screen(
    mut commands: Commands,
    cache: Res<AlmanacCache>,
    calendar: Res<Calendar>,
    config: Res<AlmanacConfig>,
    crop_registry: Res<CropRegistry>,
) {
    commands.insert_resource(AlmanacUiState {
        cursor_day: calendar.day,
    });

    let season_name = match calendar.season {
        Season::Spring => "Spring",
        Season::Summer => "Summer",
        Season::Fall => "Fall",
        Season::Winter => "Winter",
    };

    commands
        .spawn((
            AlmanacScreenRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
        ))
        .with_children(|parent| {
            // Main almanac panel
            parent
                .spawn((
                    Node {
                        width: Val::Px(700.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(16.0)),
                        row_gap: Val::Px(10.0),
                        border: UiRect::all(Val::Px(3.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.12, 0.1, 0.08, 0.95)),
                    BorderColor(Color::srgb(0.5, 0.4, 0.25)),
                ))
                .with_children(|panel| {
                    // Title
                    panel.spawn((
                        Text::new(format!(
                            "ALMANAC — {} YEAR {}",
                            season_name.to_uppercase(),
                            calendar.year
                        )),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.9, 0.6)),
                    ));

                    // Hint text
                    panel.spawn((
                        Text::new("Arrows: Select Day | Esc/K: Close"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.6, 0.6, 0.6)),
                    ));

                    // Grid: 4 rows x 7 columns = 28 days
                    for row in 0..4 {
                        panel
                            .spawn(Node {
                                width: Val::Percent(100.0),
                                flex_direction: FlexDirection::Row,
                                justify_content: JustifyContent::Center,
                                column_gap: Val::Px(3.0),
                                ..default()
                            })
                            .with_children(|row_node| {
                                for col in 0..7 {
                                    let day = (row * 7 + col + 1) as u8;
                                    spawn_day_cell(
                                        row_node,
                                        day,
                                        calendar.day,
                                        &cache,
                                        &config,
                                        &crop_registry,
                                    );
                                }
                            });
                    }

                    // Detail panel for the selected day
                    panel.spawn((
                        AlmanacDetailText,
                        Text::new(""),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.9, 0.9, 0.85)),
                        Node {
                            min_height: Val::Px(64.0),
                            ..default()
                        },
                    ));
                });
        });
}

/// One day cell: the day number, plus a placeholder-colour icon square for
/// the day's representative crop if any harvest is predicted.
fn spawn_day_cell(
    row_node: &mut ChildBuilder,
    day: u8,
    today: u8,
    cache: &AlmanacCache,
    config: &AlmanacConfig,
    crop_registry: &CropRegistry,
) {
    let is_past = day < today;
    let bg = if is_past {
        Color::srgba(0.1, 0.09, 0.08, 0.9)
    } else {
        Color::srgba(0.2, 0.17, 0.13, 0.9)
    };
    let number_color = if is_past {
        Color::srgb(0.4, 0.4, 0.4)
    } else {
        Color::srgb(0.85, 0.8, 0.7)
    };

    row_node
        .spawn((
            AlmanacDayCell { day },
            Node {
                width: Val::Px(CELL_WIDTH),
                height: Val::Px(CELL_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                padding: UiRect::all(Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(bg),
            BorderColor(Color::srgba(0.35, 0.3, 0.2, 0.9)),
        ))
        .with_children(|cell| {
            cell.spawn((
                Text::new(format!("{}", day)),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(number_color),
            ));

            // Icon: footprint is icon_size tenths of the cell, anchored by
            // the configured fractions (1.0/0.0 default = top-right corner).
            if let Some(summary) = cache.days.get(&day) {
                let icon_w = CELL_WIDTH / 10.0 * config.icon_size as f32;
                let icon_h = CELL_HEIGHT / 10.0 * config.icon_size as f32;
                let left = (CELL_WIDTH - icon_w) * config.icon_x;
                let top = (CELL_HEIGHT - icon_h) * config.icon_y;

                let (r, g, b) = crop_registry
                    .get(&summary.icon_crop)
                    .map(|def| def.icon_rgb)
                    .unwrap_or((0.6, 0.6, 0.6));

                cell.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(left),
                        top: Val::Px(top),
                        width: Val::Px(icon_w),
                        height: Val::Px(icon_h),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(r, g, b)),
                ));
            }
        });
}

pub fn despawn_almanac_screen(
    mut commands: Commands,
    root_query: Query<Entity, With<AlmanacScreenRoot>>,
) {
    for entity in &root_query {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<AlmanacUiState>();
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

pub fn almanac_navigation(
    keys: Res<ButtonInput<KeyCode>>,
    mut ui_state: ResMut<AlmanacUiState>,
) {
    let day = ui_state.cursor_day as i16;
    let mut next = day;
    if keys.just_pressed(KeyCode::ArrowLeft) {
        next = day - 1;
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        next = day + 1;
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        next = day - 7;
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        next = day + 7;
    }
    let next = next.clamp(1, DAYS_PER_MONTH as i16) as u8;
    if next != ui_state.cursor_day {
        ui_state.cursor_day = next;
    }
}

pub fn update_cell_highlight(
    ui_state: Res<AlmanacUiState>,
    mut cells: Query<(&AlmanacDayCell, &mut BorderColor)>,
) {
    if !ui_state.is_changed() {
        return;
    }
    for (cell, mut border) in &mut cells {
        *border = if cell.day == ui_state.cursor_day {
            BorderColor(Color::srgb(1.0, 0.85, 0.3))
        } else {
            BorderColor(Color::srgba(0.35, 0.3, 0.2, 0.9))
        };
    }
}

pub fn update_detail_text(
    ui_state: Res<AlmanacUiState>,
    cache: Res<AlmanacCache>,
    calendar: Res<Calendar>,
    mut query: Query<&mut Text, With<AlmanacDetailText>>,
) {
    if !ui_state.is_changed() && !cache.is_changed() {
        return;
    }
    let day = ui_state.cursor_day;
    let mut lines = vec![format!("Day {}:", day)];
    match cache.days.get(&day) {
        Some(summary) => {
            for (location, count) in &summary.location_counts {
                lines.push(format!("{} has {} crops to be harvested", location, count));
            }
        }
        None if day < calendar.day => lines.push("Already gone by.".to_string()),
        None => lines.push("No harvests predicted.".to_string()),
    }
    for mut text in &mut query {
        **text = lines.join("\n");
    }
}
