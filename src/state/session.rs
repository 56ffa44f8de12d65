use crate::config::ExpeditionConfig;
use crate::model::Grid;
use crate::state::camera::{Camera, PanBounds, Viewport};
use crate::state::run::{GameStatus, RunRules, RunState};
use crate::state::tracker::{InteractionTracker, Readout, TrackerEvent};

/// Everything one dive owns. The frame loop and the pointer listeners share it
/// through `Rc<RefCell<Session>>`; both run on the browser's single thread.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: ExpeditionConfig,
    pub grid: Grid,
    pub camera: Camera,
    pub tracker: InteractionTracker,
    pub run: RunState,
    /// Last hover position in canvas pixels; `None` until the pointer enters.
    pub pointer: Option<(f64, f64)>,
    pub viewport: Viewport,
}

impl Session {
    pub fn new(config: ExpeditionConfig, grid: Grid) -> Self {
        let rules = RunRules {
            hazard_limit: config.hazard_limit,
            collect_target: config.collect_target,
        };
        let tracker = InteractionTracker::new(config.cell_size);
        Self {
            config,
            grid,
            camera: Camera::default(),
            tracker,
            run: RunState::new(rules),
            pointer: None,
            viewport: Viewport::default(),
        }
    }

    pub fn pan_bounds(&self) -> PanBounds {
        PanBounds::new(
            self.viewport,
            self.grid.cols() as f64 * self.config.cell_size,
            self.grid.rows() as f64 * self.config.cell_size,
        )
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport { width, height };
        let bounds = self.pan_bounds();
        self.camera.clamp(bounds);
    }

    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) {
        if self.run.is_playing() {
            self.camera.begin_drag(client_x, client_y);
        }
    }

    pub fn pointer_up(&mut self) {
        self.camera.end_drag();
    }

    /// Routes a move either to the drag pan or to hover tracking; drag wins.
    pub fn pointer_move(
        &mut self,
        canvas_x: f64,
        canvas_y: f64,
        client_x: f64,
        client_y: f64,
    ) -> Vec<TrackerEvent> {
        if !self.run.is_playing() {
            return Vec::new();
        }
        if self.camera.dragging {
            let bounds = self.pan_bounds();
            self.camera.drag_to(client_x, client_y, bounds);
            return Vec::new();
        }
        self.pointer = Some((canvas_x, canvas_y));
        self.tracker.on_pointer_move(
            &mut self.grid,
            &mut self.run,
            &self.camera,
            canvas_x,
            canvas_y,
        )
    }

    /// Per-frame camera update: edge autopan while playing.
    pub fn advance_frame(&mut self) {
        if !self.run.is_playing() {
            return;
        }
        if let Some(pointer) = self.pointer {
            let bounds = self.pan_bounds();
            self.camera.autopan(pointer, self.viewport, bounds);
        }
    }

    /// Starts the run over on the same grid, with every collectible back in place.
    pub fn reset(&mut self) -> Vec<TrackerEvent> {
        self.run.reset();
        self.tracker.reset();
        self.grid.restore_collectibles();
        self.camera.end_drag();
        vec![
            TrackerEvent::Readout(Readout::default()),
            TrackerEvent::Scan(None),
            TrackerEvent::Warning(None),
            TrackerEvent::Score {
                hazard_hits: 0,
                collected: 0,
            },
            TrackerEvent::Transition(GameStatus::Playing),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Expedition;
    use crate::model::{Cell, CellCoord, Resource};

    fn session_with_mineral_at(coord: CellCoord) -> Session {
        let config = Expedition::Minerals.config();
        let mut grid = Grid::from_fn(config.rows, config.cols, |c| Cell::new(c, 4200.0, 420.0));
        grid.get_mut(coord).unwrap().place_mineral(Resource {
            kind: "Manganese_Nodule".into(),
            value: 25000,
        });
        let mut session = Session::new(config, grid);
        session.resize(800.0, 600.0);
        session
    }

    fn centre_of(session: &Session, coord: CellCoord) -> (f64, f64) {
        let size = session.config.cell_size;
        (
            session.camera.offset_x + coord.col as f64 * size + size / 2.0,
            session.camera.offset_y + coord.row as f64 * size + size / 2.0,
        )
    }

    #[test]
    fn reset_allows_collecting_same_cell_again() {
        let coord = CellCoord::new(3, 3);
        let mut session = session_with_mineral_at(coord);
        let (x, y) = centre_of(&session, coord);
        session.pointer_move(x, y, x, y);
        assert_eq!(session.run.collected, 1);

        let events = session.reset();
        assert!(events.contains(&TrackerEvent::Transition(GameStatus::Playing)));
        assert_eq!(session.run.collected, 0);
        assert_eq!(session.run.hazard_hits, 0);
        assert_eq!(session.run.status, GameStatus::Playing);

        session.pointer_move(x, y, x, y);
        assert_eq!(session.run.collected, 1);
    }

    #[test]
    fn drag_takes_precedence_over_hover() {
        let coord = CellCoord::new(2, 2);
        let mut session = session_with_mineral_at(coord);
        let (x, y) = centre_of(&session, coord);
        session.pointer_down(300.0, 300.0);
        let events = session.pointer_move(x, y, 280.0, 290.0);
        assert!(events.is_empty());
        assert_eq!(session.run.collected, 0);
        assert_eq!((session.camera.offset_x, session.camera.offset_y), (-20.0, -10.0));

        session.pointer_up();
        let (x, y) = centre_of(&session, coord);
        session.pointer_move(x, y, x, y);
        assert_eq!(session.run.collected, 1);
    }

    #[test]
    fn autopan_runs_only_while_playing() {
        let mut session = session_with_mineral_at(CellCoord::new(0, 0));
        session.advance_frame();
        assert_eq!(session.camera.offset_x, 0.0);

        session.pointer = Some((790.0, 300.0));
        session.advance_frame();
        assert_eq!(session.camera.offset_x, -5.0);

        session.run.status = GameStatus::Dead;
        session.advance_frame();
        assert_eq!(session.camera.offset_x, -5.0);
    }
}
