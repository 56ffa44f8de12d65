use std::ops::{Range, RangeInclusive};

pub const GRID_SIZE: usize = 50;
pub const CELL_SIZE: f64 = 40.0;
pub const FETCH_TIMEOUT_MS: i32 = 3000;
pub const API_BASE: &str = "http://localhost:3000";

pub const EDGE_THRESHOLD: f64 = 100.0;
pub const PAN_SPEED: f64 = 5.0;

pub const SHAKE_STRENGTH: f64 = 5.0;
/// Full width of the per-frame shake jitter, in px.
pub const SHAKE_JITTER: f64 = 20.0;
/// Cells drawn around the focus cell in each direction.
pub const VISIBLE_RADIUS: i64 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expedition {
    Minerals,
    CoralReef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// `GET /api/gamestate` returning the whole grid.
    GameState,
    /// `/api/corals`, `/api/hazards`, `/api/poi` merged client-side.
    ReefFeeds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconStyle {
    Glyph,
    Sprite,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CollectibleKind {
    /// Manganese nodules with a value drawn from the range.
    Mineral { value: RangeInclusive<i64> },
    /// Coral samples with cover drawn from the range.
    Coral { cover: RangeInclusive<i64> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpeditionConfig {
    pub expedition: Expedition,
    pub title: &'static str,
    pub loading_text: &'static str,
    pub source: DataSource,
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f64,
    pub depth: Range<f64>,
    pub pressure: Range<f64>,
    pub slope_chance: f64,
    pub collectible_chance: f64,
    pub collectible: CollectibleKind,
    pub vent_count: usize,
    pub include_mock_life: bool,
    pub hazard_limit: u32,
    pub collect_target: u32,
    pub icons: IconStyle,
    pub background: &'static str,
    pub flashlight_radius: f64,
    /// (offset, alpha) color stops of the reveal mask.
    pub flashlight_stops: [(f32, f64); 3],
    pub show_coords: bool,
}

impl Expedition {
    pub const ALL: [Expedition; 2] = [Expedition::Minerals, Expedition::CoralReef];

    pub fn config(self) -> ExpeditionConfig {
        match self {
            Expedition::Minerals => ExpeditionConfig {
                expedition: self,
                title: "Abyssal Survey",
                loading_text: "INITIALIZING ABYSSAL INTERFACE...",
                source: DataSource::GameState,
                rows: GRID_SIZE,
                cols: GRID_SIZE,
                cell_size: CELL_SIZE,
                depth: 4000.0..6000.0,
                pressure: 400.0..600.0,
                slope_chance: 0.10,
                collectible_chance: 0.05,
                collectible: CollectibleKind::Mineral {
                    value: 20000..=50000,
                },
                vent_count: 40,
                include_mock_life: true,
                hazard_limit: 5,
                collect_target: 10,
                icons: IconStyle::Glyph,
                background: "#050505",
                flashlight_radius: 180.0,
                flashlight_stops: [(0.0, 1.0), (0.8, 0.5), (1.0, 0.0)],
                show_coords: true,
            },
            Expedition::CoralReef => ExpeditionConfig {
                expedition: self,
                title: "Coral Reef Survey",
                loading_text: "INITIALIZING CORAL REEF SCANNER...",
                source: DataSource::ReefFeeds,
                rows: GRID_SIZE,
                cols: GRID_SIZE,
                cell_size: CELL_SIZE,
                depth: 10.0..100.0,
                pressure: 1.0..10.0,
                slope_chance: 0.0,
                collectible_chance: 0.15,
                collectible: CollectibleKind::Coral { cover: 50..=100 },
                vent_count: 20,
                include_mock_life: false,
                hazard_limit: 10,
                collect_target: 30,
                icons: IconStyle::Sprite,
                background: "#0a1628",
                flashlight_radius: 200.0,
                flashlight_stops: [(0.0, 1.0), (0.7, 0.6), (1.0, 0.0)],
                show_coords: true,
            },
        }
    }

    pub fn collectible_noun(self) -> &'static str {
        match self {
            Expedition::Minerals => "Minerals",
            Expedition::CoralReef => "Samples",
        }
    }
}
