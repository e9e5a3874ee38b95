//! Minimal HUD — current date plus the keybind hints.

use bevy::prelude::*;

use crate::shared::*;

#[derive(Component)]
pub struct HudDateText;

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(2.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.55)),
        ))
        .with_children(|parent| {
            parent.spawn((
                HudDateText,
                Text::new("Spring 1, Year 1"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.9, 0.6)),
            ));
            parent.spawn((
                Text::new("K: Almanac | N: Sleep | H: Harvest"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

pub fn update_date_display(
    calendar: Res<Calendar>,
    mut query: Query<&mut Text, With<HudDateText>>,
) {
    if !calendar.is_changed() {
        return;
    }
    for mut text in &mut query {
        let season_name = match calendar.season {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        };
        **text = format!("{} {}, Year {}", season_name, calendar.day, calendar.year);
    }
}
