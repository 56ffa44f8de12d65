//! Procedural world used when the data service cannot be reached.

use std::collections::HashSet;

use rand::Rng;

use crate::config::{CollectibleKind, ExpeditionConfig};
use crate::model::{
    Biome, Cell, CellCoord, CoralSample, Grid, Hazard, Lifeform, PointOfInterest, Resource,
};

struct MockHazard {
    row: usize,
    col: usize,
    kind: &'static str,
    label: &'static str,
}

struct MockPoi {
    row: usize,
    col: usize,
    id: &'static str,
    label: &'static str,
    desc: &'static str,
}

struct MockLife {
    row: usize,
    col: usize,
    species: &'static str,
    threat: i32,
}

const MOCK_HAZARDS: &[MockHazard] = &[
    MockHazard { row: 26, col: 11, kind: "thermal_vent", label: "Active Chimney" },
    MockHazard { row: 42, col: 44, kind: "acidic_zone", label: "Low pH Mass" },
    MockHazard { row: 0, col: 4, kind: "trench_wall", label: "Steep Escarpment" },
    MockHazard { row: 42, col: 34, kind: "methane_leak", label: "Bubbling Seep" },
    MockHazard { row: 12, col: 46, kind: "methane_leak", label: "Bubbling Seep" },
];

const MOCK_POIS: &[MockPoi] = &[
    MockPoi { row: 2, col: 0, id: "WRECK_001", label: "Sunken Freighter", desc: "20th Century hull." },
    MockPoi { row: 0, col: 0, id: "WRECK_002", label: "Sunken Freighter", desc: "Cargo hold breach." },
    MockPoi { row: 32, col: 0, id: "REEF_032", label: "Reef Sanctuary", desc: "High biodiversity." },
    MockPoi { row: 5, col: 7, id: "WRECK_005", label: "Sunken Freighter", desc: "Deep resting state." },
];

const MOCK_LIFE: &[MockLife] = &[
    MockLife { row: 22, col: 45, species: "Abyssal_Ray", threat: 2 },
    MockLife { row: 44, col: 38, species: "Abyssal_Ray", threat: 2 },
    MockLife { row: 47, col: 31, species: "Abyssal_Plant", threat: 0 },
    MockLife { row: 25, col: 29, species: "Giant_Isopod", threat: 1 },
];

pub const VENT_KIND: &str = "thermal_vent";
const VENT_LABEL: &str = "Unknown Thermal Spike";

pub fn generate(config: &ExpeditionConfig, rng: &mut impl Rng) -> Grid {
    generate_with_vents(config, rng).0
}

/// Same as [`generate`], also returning the distinct cells that received a procedural vent.
pub fn generate_with_vents(
    config: &ExpeditionConfig,
    rng: &mut impl Rng,
) -> (Grid, HashSet<CellCoord>) {
    let mut grid = Grid::from_fn(config.rows, config.cols, |coord| {
        let mut cell = Cell::new(
            coord,
            rng.gen_range(config.depth.clone()),
            rng.gen_range(config.pressure.clone()),
        );
        if config.slope_chance > 0.0 && rng.gen_bool(config.slope_chance) {
            cell.biome = Biome::Slope;
        }
        if rng.gen_bool(config.collectible_chance) {
            match &config.collectible {
                CollectibleKind::Mineral { value } => cell.place_mineral(Resource {
                    kind: "Manganese_Nodule".to_string(),
                    value: rng.gen_range(value.clone()),
                }),
                CollectibleKind::Coral { cover } => cell.place_coral(random_coral(rng, cover.clone())),
            }
        }
        cell
    });

    for h in MOCK_HAZARDS {
        if let Some(cell) = grid.get_mut(CellCoord::new(h.row, h.col)) {
            cell.hazard = Some(Hazard {
                kind: h.kind.to_string(),
                label: h.label.to_string(),
                severity: None,
            });
        }
    }
    for p in MOCK_POIS {
        if let Some(cell) = grid.get_mut(CellCoord::new(p.row, p.col)) {
            cell.poi = Some(PointOfInterest {
                id: p.id.to_string(),
                category: None,
                label: p.label.to_string(),
                desc: p.desc.to_string(),
                research_value: None,
            });
        }
    }
    if config.include_mock_life {
        for l in MOCK_LIFE {
            if let Some(cell) = grid.get_mut(CellCoord::new(l.row, l.col)) {
                cell.life = Some(Lifeform {
                    species: l.species.to_string(),
                    threat: l.threat,
                });
            }
        }
    }

    let vents = scatter_vents(&mut grid, config.vent_count, rng);
    (grid, vents)
}

fn random_coral(rng: &mut impl Rng, cover: std::ops::RangeInclusive<i64>) -> CoralSample {
    let health: f64 = rng.r#gen();
    CoralSample {
        cover: rng.gen_range(cover) as f64,
        health,
        bleaching: 1.0 - health,
        biodiversity: rng.r#gen(),
    }
}

/// Drops `count` vents at random cells; repeated draws land on the same cell.
pub fn scatter_vents(grid: &mut Grid, count: usize, rng: &mut impl Rng) -> HashSet<CellCoord> {
    let mut sites = HashSet::new();
    if grid.rows() == 0 || grid.cols() == 0 {
        return sites;
    }
    for _ in 0..count {
        let coord = CellCoord::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
        if let Some(cell) = grid.get_mut(coord) {
            cell.hazard = Some(Hazard {
                kind: VENT_KIND.to_string(),
                label: VENT_LABEL.to_string(),
                severity: None,
            });
            sites.insert(coord);
        }
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Expedition;
    use crate::model::CollectibleItem;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn vent_cells(grid: &Grid) -> usize {
        grid.cells()
            .filter(|c| c.hazard.as_ref().is_some_and(|h| h.kind == VENT_KIND))
            .count()
    }

    #[test]
    fn fallback_has_full_shape_and_ranges() {
        let config = Expedition::Minerals.config();
        let grid = generate(&config, &mut SmallRng::seed_from_u64(1));
        assert_eq!((grid.rows(), grid.cols()), (50, 50));
        assert_eq!(grid.cells().count(), 2500);
        for cell in grid.cells() {
            assert!((4000.0..6000.0).contains(&cell.depth));
            assert!((400.0..600.0).contains(&cell.pressure));
            if let Some(CollectibleItem::Mineral(r)) = cell.available_item() {
                assert!((20000..=50000).contains(&r.value));
            }
        }
    }

    #[test]
    fn vents_cover_every_distinct_draw() {
        let config = Expedition::Minerals.config();
        for seed in 0..20 {
            let (grid, sites) = generate_with_vents(&config, &mut SmallRng::seed_from_u64(seed));
            assert!(!sites.is_empty() && sites.len() <= 40);
            assert!(vent_cells(&grid) >= sites.len());
            for coord in &sites {
                let hazard = grid.get(*coord).and_then(|c| c.hazard.as_ref()).unwrap();
                assert_eq!(hazard.kind, VENT_KIND);
            }
        }
    }

    #[test]
    fn scatter_without_collisions_places_all_vents() {
        let mut grid = Grid::from_fn(50, 50, |c| Cell::new(c, 0.0, 0.0));
        let sites = scatter_vents(&mut grid, 40, &mut SmallRng::seed_from_u64(3));
        assert_eq!(vent_cells(&grid), sites.len());
    }

    #[test]
    fn mock_landmarks_are_injected() {
        let config = Expedition::Minerals.config();
        let grid = generate(&config, &mut SmallRng::seed_from_u64(9));
        let freighter = grid.get(CellCoord::new(5, 7)).and_then(|c| c.poi.as_ref()).unwrap();
        assert_eq!(freighter.label, "Sunken Freighter");
        let ray = grid.get(CellCoord::new(22, 45)).and_then(|c| c.life.as_ref()).unwrap();
        assert_eq!(ray.species, "Abyssal_Ray");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = Expedition::CoralReef.config();
        let a = generate(&config, &mut SmallRng::seed_from_u64(42));
        let b = generate(&config, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
        let corals = a
            .cells()
            .filter(|c| matches!(c.available_item(), Some(CollectibleItem::Coral(_))))
            .count();
        assert!(corals > 0);
        assert!(a.cells().all(|c| c.life.is_none()));
    }
}
