pub mod camera;
pub mod hud;
pub mod run;
pub mod session;
pub mod tracker;

pub use camera::{Camera, PanBounds, Viewport};
pub use hud::{HudAction, HudState};
pub use run::{GameStatus, RunRules, RunState};
pub use session::Session;
pub use tracker::{InteractionTracker, Readout, ScanResult, TrackerEvent};
