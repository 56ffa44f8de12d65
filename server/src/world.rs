//! The world served to clients, assembled once at startup.

use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{info, warn};

use crate::records::{Biome, CoralRecord, HazardRecord, PoiRecord, Sources};

pub const GRID_ROWS: usize = 50;
pub const GRID_COLS: usize = 50;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HazardView {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub severity: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PoiView {
    pub id: String,
    pub category: Option<String>,
    pub label: String,
    pub desc: String,
    #[serde(rename = "researchValue")]
    pub research_value: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LifeView {
    pub species: String,
    pub threat: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResourceView {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoralView {
    pub cover: f64,
    pub health: f64,
    pub bleaching: f64,
    pub biodiversity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub depth: f64,
    pub pressure: f64,
    pub biome: Biome,
    pub hazard: Option<HazardView>,
    pub poi: Option<PoiView>,
    pub life: Option<LifeView>,
    pub resource: Option<ResourceView>,
    pub coral: Option<CoralView>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub rows: usize,
    pub cols: usize,
}

/// `GET /api/gamestate`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameState {
    pub grid: Vec<Vec<CellView>>,
    pub metadata: Metadata,
}

/// Read-only world shared by every request handler.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    pub gamestate: GameState,
    pub corals: Vec<CoralRecord>,
    pub hazards: Vec<HazardRecord>,
    pub pois: Vec<PoiRecord>,
}

impl WorldState {
    pub fn load(data_dir: &Path, terrain_seed: u64) -> Self {
        let world = Self::build(Sources::load(data_dir), terrain_seed);
        info!(
            data_dir = %data_dir.display(),
            corals = world.corals.len(),
            hazards = world.hazards.len(),
            pois = world.pois.len(),
            "world assembled"
        );
        world
    }

    pub fn build(sources: Sources, terrain_seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(terrain_seed);
        let mut grid: Vec<Vec<CellView>> = (0..GRID_ROWS)
            .map(|row| {
                (0..GRID_COLS)
                    .map(|col| CellView {
                        row,
                        col,
                        depth: rng.gen_range(4000.0..6000.0),
                        pressure: rng.gen_range(400.0..600.0),
                        biome: Biome::Plain,
                        hazard: None,
                        poi: None,
                        life: None,
                        resource: None,
                        coral: None,
                    })
                    .collect()
            })
            .collect();

        let Sources {
            terrain,
            hazards,
            pois,
            corals,
            life,
            resources,
        } = sources;

        for t in terrain {
            if let Some(cell) = cell_mut(&mut grid, t.row, t.col, "terrain") {
                cell.depth = t.depth;
                cell.pressure = t.pressure;
                cell.biome = t.biome;
            }
        }
        for h in &hazards {
            if let Some(cell) = cell_mut(&mut grid, h.row, h.col, "hazards") {
                cell.hazard = Some(HazardView {
                    kind: h.kind.clone(),
                    label: h.notes.clone(),
                    severity: h.severity,
                });
            }
        }
        for p in &pois {
            if let Some(cell) = cell_mut(&mut grid, p.row, p.col, "poi") {
                cell.poi = Some(PoiView {
                    id: p.id.clone(),
                    category: p.category.clone(),
                    label: p.label.clone(),
                    desc: p.description.clone(),
                    research_value: p.research_value,
                });
            }
        }
        for c in &corals {
            if let Some(cell) = cell_mut(&mut grid, c.row, c.col, "corals") {
                cell.coral = Some(CoralView {
                    cover: c.coral_cover_pct,
                    health: c.health_index,
                    bleaching: c.bleaching_risk,
                    biodiversity: c.biodiversity_index,
                });
                cell.biome = Biome::Coral;
            }
        }
        for l in life {
            if let Some(cell) = cell_mut(&mut grid, l.row, l.col, "life") {
                cell.life = Some(LifeView {
                    species: l.species,
                    threat: l.threat,
                });
            }
        }
        for r in resources {
            if let Some(cell) = cell_mut(&mut grid, r.row, r.col, "resources") {
                cell.resource = Some(ResourceView {
                    kind: r.kind,
                    value: r.value,
                });
            }
        }

        Self {
            gamestate: GameState {
                grid,
                metadata: Metadata {
                    rows: GRID_ROWS,
                    cols: GRID_COLS,
                },
            },
            corals,
            hazards,
            pois,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        self.gamestate.grid.get(row)?.get(col)
    }
}

fn cell_mut<'a>(
    grid: &'a mut [Vec<CellView>],
    row: usize,
    col: usize,
    source: &str,
) -> Option<&'a mut CellView> {
    let cell = grid.get_mut(row).and_then(|r| r.get_mut(col));
    if cell.is_none() {
        warn!(source, row, col, "record outside grid, dropped");
    }
    cell
}
