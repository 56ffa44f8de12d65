use std::rc::Rc;
use yew::Reducible;

use crate::provider::Connectivity;
use crate::state::run::GameStatus;
use crate::state::tracker::{Readout, ScanResult, TrackerEvent};

/// What the overlay panels display. Folded from tracker events.
#[derive(Clone, Debug, PartialEq)]
pub struct HudState {
    pub connectivity: Connectivity,
    pub readout: Readout,
    pub scan: Option<ScanResult>,
    pub warning: Option<String>,
    pub hazard_hits: u32,
    pub collected: u32,
    pub status: GameStatus,
}

impl HudState {
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            readout: Readout::default(),
            scan: None,
            warning: None,
            hazard_hits: 0,
            collected: 0,
            status: GameStatus::Playing,
        }
    }

    fn apply(&mut self, event: TrackerEvent) {
        match event {
            TrackerEvent::Readout(r) => self.readout = r,
            TrackerEvent::Scan(s) => self.scan = s,
            TrackerEvent::Warning(w) => self.warning = w,
            TrackerEvent::Score {
                hazard_hits,
                collected,
            } => {
                self.hazard_hits = hazard_hits;
                self.collected = collected;
            }
            TrackerEvent::Transition(status) => self.status = status,
        }
    }
}

#[derive(Clone, Debug)]
pub enum HudAction {
    Apply(Vec<TrackerEvent>),
}

impl Reducible for HudState {
    type Action = HudAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            HudAction::Apply(events) => {
                if events.is_empty() {
                    return self;
                }
                let mut new = (*self).clone();
                for e in events {
                    new.apply(e);
                }
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellCoord;

    #[test]
    fn events_fold_into_display_state() {
        let hud = Rc::new(HudState::new(Connectivity::Offline));
        let hud = hud.reduce(HudAction::Apply(vec![
            TrackerEvent::Readout(Readout {
                depth: Some(4521.7),
                pressure: Some(455.2),
                coords: Some(CellCoord::new(26, 11)),
            }),
            TrackerEvent::Warning(Some("THERMAL VENT".into())),
            TrackerEvent::Score {
                hazard_hits: 1,
                collected: 0,
            },
        ]));
        assert!(hud.warning.is_some());
        assert_eq!(hud.hazard_hits, 1);
        assert_eq!(hud.readout.coords, Some(CellCoord::new(26, 11)));

        let hud = hud.reduce(HudAction::Apply(vec![
            TrackerEvent::Warning(None),
            TrackerEvent::Transition(GameStatus::Dead),
        ]));
        assert!(hud.warning.is_none());
        assert_eq!(hud.status, GameStatus::Dead);
        assert_eq!(hud.connectivity, Connectivity::Offline);
    }

    #[test]
    fn empty_batch_keeps_same_state() {
        let hud = Rc::new(HudState::new(Connectivity::Online));
        let next = hud.clone().reduce(HudAction::Apply(Vec::new()));
        assert!(Rc::ptr_eq(&hud, &next));
    }
}
