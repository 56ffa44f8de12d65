use crate::config::{EDGE_THRESHOLD, PAN_SPEED};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Allowed range of the camera offset so the grid never leaves the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PanBounds {
    pub fn new(viewport: Viewport, grid_width_px: f64, grid_height_px: f64) -> Self {
        let (min_x, max_x) = axis_bounds(viewport.width, grid_width_px);
        let (min_y, max_y) = axis_bounds(viewport.height, grid_height_px);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

// A grid narrower than the viewport is pinned centred on that axis.
fn axis_bounds(view: f64, grid: f64) -> (f64, f64) {
    let min = view - grid;
    if min > 0.0 {
        let centred = min / 2.0;
        (centred, centred)
    } else {
        (min, 0.0)
    }
}

// Pan offset plus drag bookkeeping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub dragging: bool,
    pub last_x: f64,
    pub last_y: f64,
}

impl Camera {
    pub fn begin_drag(&mut self, client_x: f64, client_y: f64) {
        self.dragging = true;
        self.last_x = client_x;
        self.last_y = client_y;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Moves the offset by the pointer delta since the last drag sample.
    pub fn drag_to(&mut self, client_x: f64, client_y: f64, bounds: PanBounds) {
        if !self.dragging {
            return;
        }
        self.offset_x += client_x - self.last_x;
        self.offset_y += client_y - self.last_y;
        self.last_x = client_x;
        self.last_y = client_y;
        self.clamp(bounds);
    }

    /// Edge autopan for one frame. A drag in progress suppresses it.
    pub fn autopan(&mut self, pointer: (f64, f64), viewport: Viewport, bounds: PanBounds) {
        if self.dragging {
            return;
        }
        let (x, y) = pointer;
        if x > viewport.width - EDGE_THRESHOLD {
            self.offset_x -= PAN_SPEED;
        } else if x < EDGE_THRESHOLD {
            self.offset_x += PAN_SPEED;
        }
        if y > viewport.height - EDGE_THRESHOLD {
            self.offset_y -= PAN_SPEED;
        } else if y < EDGE_THRESHOLD {
            self.offset_y += PAN_SPEED;
        }
        self.clamp(bounds);
    }

    pub fn clamp(&mut self, bounds: PanBounds) {
        self.offset_x = self.offset_x.clamp(bounds.min_x, bounds.max_x);
        self.offset_y = self.offset_y.clamp(bounds.min_y, bounds.max_y);
    }

    /// Screen position to signed (row, col); may lie outside the grid.
    pub fn screen_to_cell(&self, screen_x: f64, screen_y: f64, cell_size: f64) -> (i64, i64) {
        let col = ((screen_x - self.offset_x) / cell_size).floor() as i64;
        let row = ((screen_y - self.offset_y) / cell_size).floor() as i64;
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const VIEW: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    fn bounds() -> PanBounds {
        PanBounds::new(VIEW, 2000.0, 2000.0)
    }

    #[test]
    fn bounds_keep_grid_covering_viewport() {
        let b = bounds();
        assert_eq!((b.min_x, b.max_x), (-720.0, 0.0));
        assert_eq!((b.min_y, b.max_y), (-1280.0, 0.0));
    }

    #[test]
    fn small_grid_is_centred() {
        let b = PanBounds::new(VIEW, 400.0, 400.0);
        assert_eq!((b.min_x, b.max_x), (440.0, 440.0));
        assert_eq!((b.min_y, b.max_y), (160.0, 160.0));
    }

    #[test]
    fn autopan_moves_toward_revealed_edge() {
        let mut cam = Camera {
            offset_x: -300.0,
            offset_y: -300.0,
            ..Camera::default()
        };
        cam.autopan((1250.0, 10.0), VIEW, bounds());
        assert_eq!(cam.offset_x, -305.0);
        assert_eq!(cam.offset_y, -295.0);
        cam.autopan((640.0, 360.0), VIEW, bounds());
        assert_eq!((cam.offset_x, cam.offset_y), (-305.0, -295.0));
    }

    #[test]
    fn drag_disables_autopan() {
        let mut cam = Camera::default();
        cam.offset_x = -100.0;
        cam.begin_drag(500.0, 500.0);
        cam.autopan((1270.0, 360.0), VIEW, bounds());
        assert_eq!(cam.offset_x, -100.0);
        cam.drag_to(460.0, 480.0, bounds());
        assert_eq!((cam.offset_x, cam.offset_y), (-140.0, -20.0));
        cam.end_drag();
        cam.drag_to(0.0, 0.0, bounds());
        assert_eq!((cam.offset_x, cam.offset_y), (-140.0, -20.0));
    }

    #[test]
    fn offset_stays_in_bounds_for_any_pan_sequence() {
        let b = bounds();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut cam = Camera::default();
        for _ in 0..5000 {
            let x = rng.gen_range(-200.0..1500.0);
            let y = rng.gen_range(-200.0..900.0);
            match rng.gen_range(0..4) {
                0 => cam.begin_drag(x, y),
                1 => cam.end_drag(),
                2 => cam.drag_to(x * 3.0, y * 3.0, b),
                _ => cam.autopan((x, y), VIEW, b),
            }
            assert!(b.min_x <= cam.offset_x && cam.offset_x <= b.max_x);
            assert!(b.min_y <= cam.offset_y && cam.offset_y <= b.max_y);
        }
    }

    #[test]
    fn screen_to_cell_accounts_for_offset() {
        let cam = Camera {
            offset_x: -400.0,
            offset_y: -80.0,
            ..Camera::default()
        };
        assert_eq!(cam.screen_to_cell(15.0, 15.0, 40.0), (2, 10));
        assert_eq!(Camera::default().screen_to_cell(-1.0, 5.0, 40.0), (0, -1));
    }
}
