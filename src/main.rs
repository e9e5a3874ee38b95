mod shared;
mod calendar;
mod almanac;
mod world;
mod data;
mod config;
mod ui;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Harvest Almanac".into(),
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<Calendar>()
        .init_resource::<WorldState>()
        .init_resource::<CropRegistry>()
        // Events
        .add_event::<DayEndEvent>()
        // Domain plugins
        .add_plugins(data::DataPlugin)
        .add_plugins(calendar::CalendarPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(almanac::AlmanacPlugin)
        .add_plugins(config::ConfigPlugin)
        .add_plugins(ui::UiPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
