//! Core data model for the abyss grid.
//! Cells are stored row-major in a dense grid whose shape is fixed at load.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    #[default]
    Plain,
    Slope,
    Coral,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, alias = "notes")]
    pub label: String,
    #[serde(default)]
    pub severity: Option<i32>,
}

impl Hazard {
    /// Text for the warning banner, e.g. `methane_leak` -> `METHANE LEAK`.
    pub fn warning_text(&self) -> String {
        if self.kind.is_empty() {
            "DANGER".to_string()
        } else {
            self.kind.replace('_', " ").to_uppercase()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default, alias = "description")]
    pub desc: String,
    #[serde(
        default,
        rename = "researchValue",
        alias = "research_value",
        alias = "value"
    )]
    pub research_value: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lifeform {
    pub species: String,
    #[serde(default)]
    pub threat: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoralSample {
    /// Coverage percentage, 0..=100.
    pub cover: f64,
    /// Health index in 0..=1.
    pub health: f64,
    pub bleaching: f64,
    pub biodiversity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CollectibleItem {
    Mineral(Resource),
    Coral(CoralSample),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Available,
    Collected,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub item: CollectibleItem,
    pub state: Availability,
}

impl Collectible {
    pub fn available(item: CollectibleItem) -> Self {
        Self {
            item,
            state: Availability::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.state == Availability::Available
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub coord: CellCoord,
    pub depth: f64,
    pub pressure: f64,
    pub biome: Biome,
    pub hazard: Option<Hazard>,
    pub poi: Option<PointOfInterest>,
    pub life: Option<Lifeform>,
    pub collectible: Option<Collectible>,
}

impl Cell {
    pub fn new(coord: CellCoord, depth: f64, pressure: f64) -> Self {
        Self {
            coord,
            depth,
            pressure,
            biome: Biome::Plain,
            hazard: None,
            poi: None,
            life: None,
            collectible: None,
        }
    }

    pub fn place_coral(&mut self, sample: CoralSample) {
        self.collectible = Some(Collectible::available(CollectibleItem::Coral(sample)));
        self.biome = Biome::Coral;
    }

    pub fn place_mineral(&mut self, resource: Resource) {
        self.collectible = Some(Collectible::available(CollectibleItem::Mineral(resource)));
    }

    /// The collectible still lying in this cell, if any.
    pub fn available_item(&self) -> Option<&CollectibleItem> {
        self.collectible
            .as_ref()
            .filter(|c| c.is_available())
            .map(|c| &c.item)
    }

    /// Consumes the collectible. Returns `None` when there is nothing left to take.
    pub fn collect(&mut self) -> Option<CollectibleItem> {
        let c = self.collectible.as_mut()?;
        if !c.is_available() {
            return None;
        }
        c.state = Availability::Collected;
        if matches!(c.item, CollectibleItem::Coral(_)) {
            self.biome = Biome::Plain;
        }
        Some(c.item.clone())
    }

    /// Puts a collected item back (run reset).
    pub fn restore(&mut self) {
        if let Some(c) = self.collectible.as_mut() {
            c.state = Availability::Available;
            if matches!(c.item, CollectibleItem::Coral(_)) {
                self.biome = Biome::Coral;
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells; length = rows * cols.
    cells: Vec<Cell>,
}

impl Grid {
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(CellCoord) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(CellCoord::new(row, col)));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Validates signed coordinates (e.g. from a pointer) against the grid shape.
    pub fn coord(&self, row: i64, col: i64) -> Option<CellCoord> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(CellCoord::new(row as usize, col as usize))
    }

    pub fn get(&self, coord: CellCoord) -> Option<&Cell> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return None;
        }
        self.cells.get(coord.row * self.cols + coord.col)
    }

    pub fn get_mut(&mut self, coord: CellCoord) -> Option<&mut Cell> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return None;
        }
        self.cells.get_mut(coord.row * self.cols + coord.col)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn restore_collectibles(&mut self) {
        for cell in &mut self.cells {
            cell.restore();
        }
    }
}
