use std::collections::HashSet;

use crate::config::SHAKE_STRENGTH;
use crate::model::{CellCoord, CollectibleItem, Grid, Lifeform, PointOfInterest};
use crate::state::camera::Camera;
use crate::state::run::{GameStatus, RunState};

/// Depth/pressure/coordinate readout of the last hovered cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Readout {
    pub depth: Option<f64>,
    pub pressure: Option<f64>,
    pub coords: Option<CellCoord>,
}

/// What the scanner shows for the hovered cell.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult {
    pub poi: Option<PointOfInterest>,
    pub life: Option<Lifeform>,
    pub item: Option<CollectibleItem>,
    /// True when `item` was picked up by this very move.
    pub just_collected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TrackerEvent {
    Readout(Readout),
    Scan(Option<ScanResult>),
    /// Hazard warning text while in panic, `None` once it clears.
    Warning(Option<String>),
    Score { hazard_hits: u32, collected: u32 },
    Transition(GameStatus),
}

#[derive(Debug, Clone)]
pub struct InteractionTracker {
    cell_size: f64,
    active: Option<CellCoord>,
    panic: bool,
    shake: f64,
    readout: Readout,
    scan: Option<ScanResult>,
    visited_hazards: HashSet<CellCoord>,
}

impl InteractionTracker {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            active: None,
            panic: false,
            shake: 0.0,
            readout: Readout::default(),
            scan: None,
            visited_hazards: HashSet::new(),
        }
    }

    pub fn active(&self) -> Option<CellCoord> {
        self.active
    }

    pub fn panic(&self) -> bool {
        self.panic
    }

    pub fn shake_strength(&self) -> f64 {
        self.shake
    }

    pub fn scan(&self) -> Option<&ScanResult> {
        self.scan.as_ref()
    }

    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Handles a hover at a canvas position. Moves are ignored once the run has ended.
    pub fn on_pointer_move(
        &mut self,
        grid: &mut Grid,
        run: &mut RunState,
        camera: &Camera,
        screen_x: f64,
        screen_y: f64,
    ) -> Vec<TrackerEvent> {
        let mut events = Vec::new();
        if !run.is_playing() {
            return events;
        }
        let (row, col) = camera.screen_to_cell(screen_x, screen_y, self.cell_size);
        let Some(coord) = grid.coord(row, col) else {
            if self.active.take().is_some() {
                self.calm();
                self.scan = None;
                self.readout.coords = None;
                events.push(TrackerEvent::Scan(None));
                events.push(TrackerEvent::Warning(None));
                events.push(TrackerEvent::Readout(self.readout.clone()));
            }
            return events;
        };
        if self.active == Some(coord) {
            return events;
        }
        let Some(cell) = grid.get_mut(coord) else {
            return events;
        };
        self.active = Some(coord);

        self.readout = Readout {
            depth: Some(cell.depth),
            pressure: Some(cell.pressure),
            coords: Some(coord),
        };
        events.push(TrackerEvent::Readout(self.readout.clone()));

        if let Some(hazard) = &cell.hazard {
            self.panic = true;
            self.shake = SHAKE_STRENGTH;
            events.push(TrackerEvent::Warning(Some(hazard.warning_text())));
            if self.visited_hazards.insert(coord) {
                let transition = run.record_hazard_contact();
                events.push(score(run));
                if let Some(status) = transition {
                    self.calm();
                    events.push(TrackerEvent::Warning(None));
                    events.push(TrackerEvent::Transition(status));
                    return events;
                }
            }
        } else {
            self.calm();
            events.push(TrackerEvent::Warning(None));
        }

        let mut collected = None;
        if let Some(item) = cell.collect() {
            let transition = run.record_collection();
            events.push(score(run));
            if let Some(status) = transition {
                self.calm();
                events.push(TrackerEvent::Warning(None));
                events.push(TrackerEvent::Transition(status));
            }
            collected = Some(item);
        }

        let just_collected = collected.is_some();
        let item = collected.or_else(|| cell.available_item().cloned());
        self.scan = if cell.poi.is_some() || cell.life.is_some() || item.is_some() {
            Some(ScanResult {
                poi: cell.poi.clone(),
                life: cell.life.clone(),
                item,
                just_collected,
            })
        } else {
            None
        };
        events.push(TrackerEvent::Scan(self.scan.clone()));
        events
    }

    /// Forgets everything about the current run.
    pub fn reset(&mut self) {
        *self = Self::new(self.cell_size);
    }

    fn calm(&mut self) {
        self.panic = false;
        self.shake = 0.0;
    }
}

fn score(run: &RunState) -> TrackerEvent {
    TrackerEvent::Score {
        hazard_hits: run.hazard_hits,
        collected: run.collected,
    }
}
