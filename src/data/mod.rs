//! Data layer — populates the crop registry at startup.
//!
//! The registry is filled from hard-coded crop definitions in `crops`.
//! All domain plugins can safely read it after Startup.

mod crops;

use bevy::prelude::*;

use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_all_data);
    }
}

fn load_all_data(mut crop_registry: ResMut<CropRegistry>) {
    crops::populate_crops(&mut crop_registry);
    info!("[Data] Crops loaded: {}", crop_registry.crops.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_populates() {
        let mut registry = CropRegistry::default();
        crops::populate_crops(&mut registry);
        assert!(!registry.crops.is_empty());
    }

    #[test]
    fn test_regrow_crops_have_positive_interval() {
        let mut registry = CropRegistry::default();
        crops::populate_crops(&mut registry);
        for def in registry.crops.values() {
            if def.regrows {
                assert!(def.regrow_days > 0, "{} regrows with no interval", def.id);
            }
            assert!(
                !def.phase_days.is_empty(),
                "{} has an empty phase sequence",
                def.id
            );
            assert!(
                def.phase_days.iter().all(|d| *d < PHASE_TERMINAL),
                "{} carries the terminal sentinel in its definition",
                def.id
            );
        }
    }
}
