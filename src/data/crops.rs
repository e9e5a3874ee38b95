use crate::shared::*;

/// Populate the CropRegistry with all crop definitions.
///
/// The `phase_days` vec stores how many days each growth phase lasts, in
/// order. The terminal sentinel phase is appended at planting time, so the
/// definitions here list only the real growth phases. Regrowing crops keep
/// producing every `regrow_days` after their first harvest.
pub fn populate_crops(registry: &mut CropRegistry) {
    let crops: Vec<CropDef> = vec![
        // ── Spring ──────────────────────────────────────────────────────────

        CropDef {
            id: "turnip".into(),
            name: "Turnip".into(),
            harvest_id: "turnip".into(),
            phase_days: vec![1, 1, 1, 1],
            regrows: false,
            regrow_days: 0,
            seasons: vec![Season::Spring],
            icon_rgb: (0.85, 0.75, 0.9),
        },
        CropDef {
            id: "strawberry".into(),
            name: "Strawberry".into(),
            harvest_id: "strawberry".into(),
            phase_days: vec![1, 1, 2, 4],
            regrows: true,
            regrow_days: 4,
            seasons: vec![Season::Spring],
            icon_rgb: (0.9, 0.15, 0.2),
        },
        CropDef {
            id: "cauliflower".into(),
            name: "Cauliflower".into(),
            harvest_id: "cauliflower".into(),
            phase_days: vec![1, 2, 4, 4, 1],
            regrows: false,
            regrow_days: 0,
            seasons: vec![Season::Spring],
            icon_rgb: (0.95, 0.95, 0.85),
        },

        // ── Summer ──────────────────────────────────────────────────────────

        CropDef {
            id: "melon".into(),
            name: "Melon".into(),
            harvest_id: "melon".into(),
            phase_days: vec![1, 2, 3, 3, 3],
            regrows: false,
            regrow_days: 0,
            seasons: vec![Season::Summer],
            icon_rgb: (0.4, 0.8, 0.4),
        },
        CropDef {
            id: "blueberry".into(),
            name: "Blueberry".into(),
            harvest_id: "blueberry".into(),
            phase_days: vec![1, 3, 3, 4, 2],
            regrows: true,
            regrow_days: 4,
            seasons: vec![Season::Summer],
            icon_rgb: (0.25, 0.3, 0.8),
        },
        CropDef {
            id: "tomato".into(),
            name: "Tomato".into(),
            harvest_id: "tomato".into(),
            phase_days: vec![2, 2, 3, 4],
            regrows: true,
            regrow_days: 4,
            seasons: vec![Season::Summer],
            icon_rgb: (0.9, 0.25, 0.15),
        },

        // ── Fall ────────────────────────────────────────────────────────────

        CropDef {
            id: "amaranth".into(),
            name: "Amaranth".into(),
            harvest_id: "amaranth".into(),
            phase_days: vec![1, 2, 2, 2],
            regrows: false,
            regrow_days: 0,
            seasons: vec![Season::Fall],
            icon_rgb: (0.6, 0.1, 0.3),
        },
        CropDef {
            id: "cranberry".into(),
            name: "Cranberry".into(),
            harvest_id: "cranberry".into(),
            phase_days: vec![1, 2, 1, 1, 2],
            regrows: true,
            regrow_days: 5,
            seasons: vec![Season::Fall],
            icon_rgb: (0.75, 0.1, 0.15),
        },
        CropDef {
            id: "fairy_rose".into(),
            name: "Fairy Rose".into(),
            harvest_id: "fairy_rose".into(),
            phase_days: vec![1, 4, 4, 3],
            regrows: false,
            regrow_days: 0,
            seasons: vec![Season::Fall],
            icon_rgb: (0.9, 0.6, 0.85),
        },

        // ── Any season (greenhouse staples) ─────────────────────────────────

        CropDef {
            id: "ancient_fruit".into(),
            name: "Ancient Fruit".into(),
            harvest_id: "ancient_fruit".into(),
            phase_days: vec![1, 5, 5, 6, 4],
            regrows: true,
            regrow_days: 7,
            seasons: vec![Season::Spring, Season::Summer, Season::Fall, Season::Winter],
            icon_rgb: (0.55, 0.35, 0.75),
        },
        CropDef {
            id: "pineapple".into(),
            name: "Pineapple".into(),
            harvest_id: "pineapple".into(),
            phase_days: vec![1, 2, 3, 4, 4],
            regrows: true,
            regrow_days: 7,
            seasons: vec![Season::Summer],
            icon_rgb: (0.95, 0.8, 0.2),
        },
        CropDef {
            id: "wheat".into(),
            name: "Wheat".into(),
            harvest_id: "wheat".into(),
            phase_days: vec![1, 1, 1, 1],
            regrows: false,
            regrow_days: 0,
            seasons: vec![Season::Summer, Season::Fall],
            icon_rgb: (0.9, 0.85, 0.5),
        },
    ];

    for crop in crops {
        registry.crops.insert(crop.id.clone(), crop);
    }
}
