//! CSV source rows and their loading.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

pub const TERRAIN_FILE: &str = "terrain.csv";
pub const HAZARDS_FILE: &str = "hazards.csv";
pub const POI_FILE: &str = "poi.csv";
pub const CORALS_FILE: &str = "corals.csv";
pub const LIFE_FILE: &str = "life.csv";
pub const RESOURCES_FILE: &str = "resources.csv";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    #[default]
    Plain,
    Slope,
    Coral,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainRecord {
    pub row: usize,
    pub col: usize,
    pub depth: f64,
    pub pressure: f64,
    #[serde(default)]
    pub biome: Biome,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HazardRecord {
    pub row: usize,
    pub col: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Option<i32>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoiRecord {
    pub row: usize,
    pub col: usize,
    pub id: String,
    pub category: Option<String>,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub research_value: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoralRecord {
    pub row: usize,
    pub col: usize,
    pub coral_cover_pct: f64,
    pub health_index: f64,
    pub bleaching_risk: f64,
    pub biodiversity_index: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifeRecord {
    pub row: usize,
    pub col: usize,
    pub species: String,
    #[serde(default)]
    pub threat: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub row: usize,
    pub col: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i64,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("{} not found", .0.display())]
    Missing(PathBuf),
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Reads every row of a headed CSV file. Rows that fail to parse are skipped.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    if !path.exists() {
        return Err(DataError::Missing(path.to_path_buf()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let mut out = Vec::new();
    for (i, row) in reader.deserialize::<T>().enumerate() {
        match row {
            Ok(record) => out.push(record),
            Err(e) => warn!(path = %path.display(), line = i + 2, error = %e, "skipping unreadable row"),
        }
    }
    Ok(out)
}

/// Like [`read_records`], degrading any failure to an empty set.
pub fn load_or_empty<T: DeserializeOwned>(dir: &Path, file: &str) -> Vec<T> {
    let path = dir.join(file);
    match read_records(&path) {
        Ok(records) => {
            info!(file, count = records.len(), "loaded data source");
            records
        }
        Err(e) => {
            warn!(file, error = %e, "data source unavailable, using empty set");
            Vec::new()
        }
    }
}

/// Every source the world is assembled from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sources {
    pub terrain: Vec<TerrainRecord>,
    pub hazards: Vec<HazardRecord>,
    pub pois: Vec<PoiRecord>,
    pub corals: Vec<CoralRecord>,
    pub life: Vec<LifeRecord>,
    pub resources: Vec<ResourceRecord>,
}

impl Sources {
    pub fn load(dir: &Path) -> Self {
        Self {
            terrain: load_or_empty(dir, TERRAIN_FILE),
            hazards: load_or_empty(dir, HAZARDS_FILE),
            pois: load_or_empty(dir, POI_FILE),
            corals: load_or_empty(dir, CORALS_FILE),
            life: load_or_empty(dir, LIFE_FILE),
            resources: load_or_empty(dir, RESOURCES_FILE),
        }
    }
}
