// Run bookkeeping and the playing/dead/success state machine

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Playing,
    Dead,
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRules {
    /// Distinct hazard contacts that end the run.
    pub hazard_limit: u32,
    /// Collected items that complete the run.
    pub collect_target: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunState {
    pub rules: RunRules,
    pub hazard_hits: u32,
    pub collected: u32,
    pub status: GameStatus,
}

impl RunState {
    pub fn new(rules: RunRules) -> Self {
        Self {
            rules,
            hazard_hits: 0,
            collected: 0,
            status: GameStatus::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Counts a first contact with a hazard cell. Returns the new status on transition.
    pub fn record_hazard_contact(&mut self) -> Option<GameStatus> {
        if !self.is_playing() {
            return None;
        }
        self.hazard_hits = self.hazard_hits.saturating_add(1);
        if self.hazard_hits >= self.rules.hazard_limit {
            self.status = GameStatus::Dead;
            return Some(self.status);
        }
        None
    }

    /// Counts a first collection. Returns the new status on transition.
    pub fn record_collection(&mut self) -> Option<GameStatus> {
        if !self.is_playing() {
            return None;
        }
        self.collected = self.collected.saturating_add(1);
        if self.collected >= self.rules.collect_target {
            self.status = GameStatus::Success;
            return Some(self.status);
        }
        None
    }

    /// Remaining hull in percent; each hit costs an equal share of the limit.
    pub fn hull_integrity(&self) -> u32 {
        let limit = self.rules.hazard_limit.max(1);
        let lost = self.hazard_hits.min(limit) * 100 / limit;
        100 - lost
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.rules);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RunRules {
        RunRules {
            hazard_limit: 5,
            collect_target: 10,
        }
    }

    #[test]
    fn hazard_limit_kills_and_is_terminal() {
        let mut run = RunState::new(rules());
        for _ in 0..4 {
            assert_eq!(run.record_hazard_contact(), None);
        }
        assert_eq!(run.record_hazard_contact(), Some(GameStatus::Dead));
        assert_eq!(run.status, GameStatus::Dead);
        // Terminal until reset: neither counter nor status moves.
        assert_eq!(run.record_collection(), None);
        assert_eq!(run.record_hazard_contact(), None);
        assert_eq!((run.hazard_hits, run.collected), (5, 0));
    }

    #[test]
    fn collect_target_succeeds() {
        let mut run = RunState::new(rules());
        for _ in 0..9 {
            assert_eq!(run.record_collection(), None);
        }
        assert_eq!(run.record_collection(), Some(GameStatus::Success));
        assert_eq!(run.record_hazard_contact(), None);
    }

    #[test]
    fn reset_returns_to_playing() {
        let mut run = RunState::new(rules());
        for _ in 0..5 {
            run.record_hazard_contact();
        }
        run.reset();
        assert_eq!(run, RunState::new(rules()));
    }

    #[test]
    fn hull_drops_in_equal_steps() {
        let mut run = RunState::new(RunRules {
            hazard_limit: 10,
            collect_target: 30,
        });
        assert_eq!(run.hull_integrity(), 100);
        run.record_hazard_contact();
        run.record_hazard_contact();
        assert_eq!(run.hull_integrity(), 80);
        for _ in 0..8 {
            run.record_hazard_contact();
        }
        assert_eq!(run.hull_integrity(), 0);
    }
}
