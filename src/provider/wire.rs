//! JSON shapes served by the data service and their conversion into a [`Grid`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ExpeditionConfig;
use crate::model::{
    Biome, Cell, CellCoord, CoralSample, Grid, Hazard, Lifeform, PointOfInterest, Resource,
};
use crate::provider::LoadError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridMetadata {
    pub rows: usize,
    pub cols: usize,
}

/// `GET /api/gamestate`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameStatePayload {
    pub grid: Vec<Vec<WireCell>>,
    pub metadata: GridMetadata,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WireCell {
    #[serde(default)]
    pub depth: f64,
    #[serde(default)]
    pub pressure: f64,
    #[serde(default)]
    pub biome: Biome,
    #[serde(default)]
    pub hazard: Option<Hazard>,
    #[serde(default)]
    pub poi: Option<PointOfInterest>,
    #[serde(default)]
    pub life: Option<Lifeform>,
    #[serde(default)]
    pub resource: Option<Resource>,
    #[serde(default)]
    pub coral: Option<CoralSample>,
}

impl GameStatePayload {
    /// Builds the grid from array positions; ragged payloads are rejected.
    pub fn into_grid(self) -> Result<Grid, LoadError> {
        let GridMetadata { rows, cols } = self.metadata;
        let bad_row = self.grid.iter().any(|r| r.len() != cols);
        if self.grid.len() != rows || bad_row {
            return Err(LoadError::Shape {
                rows,
                cols,
                found: self.grid.len(),
            });
        }
        let mut wire = self.grid;
        Ok(Grid::from_fn(rows, cols, |coord| {
            let w = std::mem::replace(&mut wire[coord.row][coord.col], WireCell::empty());
            w.into_cell(coord)
        }))
    }
}

impl WireCell {
    fn empty() -> Self {
        Self {
            depth: 0.0,
            pressure: 0.0,
            biome: Biome::Plain,
            hazard: None,
            poi: None,
            life: None,
            resource: None,
            coral: None,
        }
    }

    fn into_cell(self, coord: CellCoord) -> Cell {
        let mut cell = Cell::new(coord, self.depth, self.pressure);
        cell.biome = self.biome;
        cell.hazard = self.hazard;
        cell.poi = self.poi;
        cell.life = self.life;
        if let Some(coral) = self.coral {
            cell.place_coral(coral);
        } else if let Some(resource) = self.resource {
            cell.place_mineral(resource);
        }
        cell
    }
}

/// One row of `GET /api/corals`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoralRecord {
    pub row: usize,
    pub col: usize,
    pub coral_cover_pct: f64,
    pub health_index: f64,
    pub bleaching_risk: f64,
    pub biodiversity_index: f64,
}

/// One row of `GET /api/hazards`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HazardRecord {
    pub row: usize,
    pub col: usize,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub severity: Option<i32>,
    #[serde(default)]
    pub notes: String,
}

/// One row of `GET /api/poi`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoiRecord {
    pub row: usize,
    pub col: usize,
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub research_value: Option<i64>,
}

#[derive(Clone, Debug, Default)]
pub struct ReefFeeds {
    pub corals: Vec<CoralRecord>,
    pub hazards: Vec<HazardRecord>,
    pub pois: Vec<PoiRecord>,
}

/// Merges the three reef feeds onto a fresh grid. Records outside the grid are dropped.
pub fn assemble_reef(feeds: ReefFeeds, config: &ExpeditionConfig, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::from_fn(config.rows, config.cols, |coord| {
        Cell::new(
            coord,
            rng.gen_range(config.depth.clone()),
            rng.gen_range(config.pressure.clone()),
        )
    });
    for c in feeds.corals {
        if let Some(cell) = grid.get_mut(CellCoord::new(c.row, c.col)) {
            cell.place_coral(CoralSample {
                cover: c.coral_cover_pct,
                health: c.health_index,
                bleaching: c.bleaching_risk,
                biodiversity: c.biodiversity_index,
            });
        }
    }
    for h in feeds.hazards {
        if let Some(cell) = grid.get_mut(CellCoord::new(h.row, h.col)) {
            cell.hazard = Some(Hazard {
                kind: h.kind,
                label: h.notes,
                severity: h.severity,
            });
        }
    }
    for p in feeds.pois {
        if let Some(cell) = grid.get_mut(CellCoord::new(p.row, p.col)) {
            cell.poi = Some(PointOfInterest {
                id: p.id,
                category: p.category,
                label: p.label,
                desc: p.description,
                research_value: p.research_value,
            });
        }
    }
    grid
}
