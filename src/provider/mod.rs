//! Grid supply: remote data service first, procedural world on any failure.

pub mod fallback;
pub mod fetch;
pub mod wire;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::config::{API_BASE, DataSource, ExpeditionConfig, FETCH_TIMEOUT_MS};
use crate::model::Grid;
use crate::util::{clog, cwarn};
use fetch::fetch_json;
use wire::{GameStatePayload, ReefFeeds};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    Connecting,
    Online,
    Offline,
}

impl Connectivity {
    pub fn label(&self) -> &'static str {
        match self {
            Connectivity::Connecting => "CONNECTING",
            Connectivity::Online => "ONLINE",
            Connectivity::Offline => "OFFLINE",
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no browser window")]
    NoWindow,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server answered {0}")]
    Status(u16),
    #[error("response body was not text")]
    Body,
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("grid shape {found} rows does not match {rows}x{cols}")]
    Shape { rows: usize, cols: usize, found: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedGrid {
    pub grid: Grid,
    pub connectivity: Connectivity,
}

/// Loads the grid for an expedition. Never fails: any remote error degrades to
/// the procedural world and marks the result offline.
pub async fn load(config: &ExpeditionConfig) -> LoadedGrid {
    match load_remote(config).await {
        Ok(grid) => {
            clog(&format!(
                "Loaded {}x{} grid from data service",
                grid.rows(),
                grid.cols()
            ));
            LoadedGrid {
                grid,
                connectivity: Connectivity::Online,
            }
        }
        Err(e) => {
            cwarn(&format!("Backend unreachable, using simulation mode: {}", e));
            let mut rng = SmallRng::from_entropy();
            LoadedGrid {
                grid: fallback::generate(config, &mut rng),
                connectivity: Connectivity::Offline,
            }
        }
    }
}

async fn load_remote(config: &ExpeditionConfig) -> Result<Grid, LoadError> {
    match config.source {
        DataSource::GameState => {
            let payload: GameStatePayload =
                fetch_json(&format!("{}/api/gamestate", API_BASE), FETCH_TIMEOUT_MS).await?;
            let grid = payload.into_grid()?;
            check_shape(&grid, config)?;
            Ok(grid)
        }
        DataSource::ReefFeeds => {
            let feeds = ReefFeeds {
                corals: fetch_json(&format!("{}/api/corals", API_BASE), FETCH_TIMEOUT_MS).await?,
                hazards: fetch_json(&format!("{}/api/hazards", API_BASE), FETCH_TIMEOUT_MS)
                    .await?,
                pois: fetch_json(&format!("{}/api/poi", API_BASE), FETCH_TIMEOUT_MS).await?,
            };
            let mut rng = SmallRng::from_entropy();
            Ok(wire::assemble_reef(feeds, config, &mut rng))
        }
    }
}

/// The session assumes the configured dimensions, so a differently sized remote
/// grid is treated as a failed load.
fn check_shape(grid: &Grid, config: &ExpeditionConfig) -> Result<(), LoadError> {
    if grid.rows() != config.rows || grid.cols() != config.cols {
        return Err(LoadError::Shape {
            rows: config.rows,
            cols: config.cols,
            found: grid.rows(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Expedition;
    use crate::model::{Cell, Grid};

    #[test]
    fn connectivity_badge_labels() {
        assert_eq!(Connectivity::Connecting.label(), "CONNECTING");
        assert_eq!(Connectivity::Online.label(), "ONLINE");
        assert_eq!(Connectivity::Offline.label(), "OFFLINE");
    }

    #[test]
    fn remote_grid_must_match_configured_shape() {
        let config = Expedition::Minerals.config();
        let small = Grid::from_fn(10, 50, |c| Cell::new(c, 0.0, 0.0));
        assert!(matches!(
            check_shape(&small, &config),
            Err(LoadError::Shape { rows: 50, cols: 50, found: 10 })
        ));
        let full = Grid::from_fn(50, 50, |c| Cell::new(c, 0.0, 0.0));
        assert!(check_shape(&full, &config).is_ok());
    }
}
