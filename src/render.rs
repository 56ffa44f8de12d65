//! Per-frame canvas drawing: visible cells, icons, flashlight mask and panic effects.

use std::ops::Range;

use rand::Rng;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::config::{Expedition, IconStyle, SHAKE_JITTER, VISIBLE_RADIUS};
use crate::model::{Biome, Cell, CellCoord, CollectibleItem};
use crate::state::Session;
use crate::util::cwarn;

const ICON_SIZE: f64 = 24.0;
const SUBMARINE_SIZE: f64 = 40.0;
const MASK_INNER_RADIUS: f64 = 10.0;
const PANIC_RADIUS: f64 = 200.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleWindow {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

/// Cells within `radius` of the focus cell, clamped to the grid. The focus may
/// lie outside the grid, in which case the window can be empty.
pub fn visible_window(
    grid_rows: usize,
    grid_cols: usize,
    focus_row: i64,
    focus_col: i64,
    radius: i64,
) -> VisibleWindow {
    let span = |focus: i64, len: usize| {
        let start = (focus - radius).clamp(0, len as i64) as usize;
        let end = (focus + radius).clamp(0, len as i64) as usize;
        start..end.max(start)
    };
    VisibleWindow {
        rows: span(focus_row, grid_rows),
        cols: span(focus_col, grid_cols),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Hazard,
    Poi,
    Life,
    Mineral,
    Coral,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Hazard => "\u{26a0}\u{fe0f}",
            Icon::Poi => "\u{2693}",
            Icon::Life => "\u{1f991}",
            Icon::Mineral => "\u{1f48e}",
            Icon::Coral => "\u{1fab8}",
        }
    }
}

/// First match wins: hazard, point of interest, lifeform, then anything still collectible.
pub fn icon_for(cell: &Cell) -> Option<Icon> {
    if cell.hazard.is_some() {
        return Some(Icon::Hazard);
    }
    if cell.poi.is_some() {
        return Some(Icon::Poi);
    }
    if cell.life.is_some() {
        return Some(Icon::Life);
    }
    match cell.available_item()? {
        CollectibleItem::Mineral(_) => Some(Icon::Mineral),
        CollectibleItem::Coral(_) => Some(Icon::Coral),
    }
}

pub fn cell_fill(expedition: Expedition, cell: &Cell) -> &'static str {
    if cell.hazard.is_some() {
        return "#1a0a0a";
    }
    match expedition {
        Expedition::Minerals => match cell.biome {
            Biome::Slope => "#00261a",
            _ => "#001a11",
        },
        Expedition::CoralReef => match (cell.biome, cell.available_item()) {
            (Biome::Coral, Some(CollectibleItem::Coral(sample))) => {
                if sample.health > 0.9 {
                    "#1a4d2e"
                } else if sample.health > 0.7 {
                    "#4d4d1a"
                } else {
                    "#4d1a1a"
                }
            }
            _ => "#0d2840",
        },
    }
}

/// Icon images for the sprite style. Failed loads are logged and never drawn.
pub struct Sprites {
    hazard: HtmlImageElement,
    poi: HtmlImageElement,
    coral: HtmlImageElement,
    submarine: HtmlImageElement,
    _onerror: Vec<Closure<dyn FnMut()>>,
}

impl Sprites {
    pub fn load() -> Result<Self, JsValue> {
        let mut handlers = Vec::new();
        let mut image = |src: &'static str| -> Result<HtmlImageElement, JsValue> {
            let img = HtmlImageElement::new()?;
            let onerror = Closure::wrap(Box::new(move || {
                cwarn(&format!("Failed to load sprite {}", src));
            }) as Box<dyn FnMut()>);
            img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            img.set_src(src);
            handlers.push(onerror);
            Ok(img)
        };
        let hazard = image("assets/hazard.png")?;
        let poi = image("assets/poi.png")?;
        let coral = image("assets/coral.png")?;
        let submarine = image("assets/submarine.png")?;
        Ok(Self {
            hazard,
            poi,
            coral,
            submarine,
            _onerror: handlers,
        })
    }

    fn for_icon(&self, icon: Icon) -> Option<&HtmlImageElement> {
        let img = match icon {
            Icon::Hazard => &self.hazard,
            Icon::Poi => &self.poi,
            Icon::Coral => &self.coral,
            Icon::Life | Icon::Mineral => return None,
        };
        ready(img)
    }
}

fn ready(img: &HtmlImageElement) -> Option<&HtmlImageElement> {
    (img.complete() && img.natural_width() > 0).then_some(img)
}

/// Where the flashlight and visible window centre: the pointer, or the middle
/// of the viewport before the pointer has entered.
pub fn focus_point(session: &Session) -> (f64, f64) {
    session.pointer.unwrap_or((
        session.viewport.width / 2.0,
        session.viewport.height / 2.0,
    ))
}

pub fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    session: &Session,
    sprites: Option<&Sprites>,
    rng: &mut impl Rng,
) {
    let config = &session.config;
    let (w, h) = (session.viewport.width, session.viewport.height);
    let cell = config.cell_size;

    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_global_composite_operation("source-over").ok();
    ctx.set_fill_style_str(config.background);
    ctx.fill_rect(0.0, 0.0, w, h);

    let shaking = session.tracker.shake_strength() > 0.0;
    let (shake_x, shake_y) = if shaking {
        (
            (rng.r#gen::<f64>() - 0.5) * SHAKE_JITTER,
            (rng.r#gen::<f64>() - 0.5) * SHAKE_JITTER,
        )
    } else {
        (0.0, 0.0)
    };
    let origin_x = session.camera.offset_x + shake_x;
    let origin_y = session.camera.offset_y + shake_y;

    let focus = focus_point(session);
    let (focus_row, focus_col) = session.camera.screen_to_cell(focus.0, focus.1, cell);
    let window = visible_window(
        session.grid.rows(),
        session.grid.cols(),
        focus_row,
        focus_col,
        VISIBLE_RADIUS,
    );

    ctx.save();
    ctx.translate(origin_x, origin_y).ok();
    for r in window.rows.clone() {
        for c in window.cols.clone() {
            let Some(cell_data) = session.grid.get(CellCoord::new(r, c)) else {
                continue;
            };
            let x = c as f64 * cell;
            let y = r as f64 * cell;
            ctx.set_fill_style_str(cell_fill(config.expedition, cell_data));
            ctx.fill_rect(x, y, cell - 1.0, cell - 1.0);

            let cx = x + cell / 2.0;
            let cy = y + cell / 2.0;
            if let Some(icon) = icon_for(cell_data) {
                draw_icon(ctx, config.icons, sprites, icon, cx, cy);
            }
            if config.show_coords {
                ctx.set_fill_style_str("rgba(0, 255, 157, 0.1)");
                ctx.set_font("8px monospace");
                ctx.set_text_align("center");
                ctx.fill_text(&format!("{},{}", r, c), cx, y + cell - 5.0).ok();
            }
        }
    }
    ctx.restore();

    let submarine = sprites.and_then(|s| ready(&s.submarine));
    if config.icons == IconStyle::Sprite {
        if let (Some(sub), Some(pointer)) = (submarine, session.pointer) {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(
                sub,
                pointer.0 - SUBMARINE_SIZE / 2.0,
                pointer.1 - SUBMARINE_SIZE / 2.0,
                SUBMARINE_SIZE,
                SUBMARINE_SIZE,
            )
            .ok();
        }
    }

    if let Err(e) = flashlight(ctx, session, focus) {
        cwarn(&format!("flashlight mask failed: {:?}", e));
    }
    if session.tracker.panic() {
        if let Err(e) = panic_overlay(ctx, w, h, focus, rng) {
            cwarn(&format!("panic overlay failed: {:?}", e));
        }
    }
}

fn draw_icon(
    ctx: &CanvasRenderingContext2d,
    style: IconStyle,
    sprites: Option<&Sprites>,
    icon: Icon,
    cx: f64,
    cy: f64,
) {
    if style == IconStyle::Sprite {
        match sprites.and_then(|s| s.for_icon(icon)) {
            Some(img) => {
                ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    cx - ICON_SIZE / 2.0,
                    cy - ICON_SIZE / 2.0,
                    ICON_SIZE,
                    ICON_SIZE,
                )
                .ok();
                return;
            }
            // Sprites only cover hazards, landmarks and coral.
            None if matches!(icon, Icon::Hazard | Icon::Poi | Icon::Coral) => return,
            None => {}
        }
    }
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("20px Arial");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(icon.glyph(), cx, cy).ok();
    ctx.set_text_baseline("alphabetic");
}

fn flashlight(
    ctx: &CanvasRenderingContext2d,
    session: &Session,
    (x, y): (f64, f64),
) -> Result<(), JsValue> {
    let config = &session.config;
    ctx.save();
    ctx.set_global_composite_operation("destination-in")?;
    let grad = ctx.create_radial_gradient(x, y, MASK_INNER_RADIUS, x, y, config.flashlight_radius)?;
    for (offset, alpha) in config.flashlight_stops {
        grad.add_color_stop(offset, &format!("rgba(0, 0, 0, {})", alpha))?;
    }
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.fill_rect(0.0, 0.0, session.viewport.width, session.viewport.height);
    ctx.restore();
    Ok(())
}

fn panic_overlay(
    ctx: &CanvasRenderingContext2d,
    w: f64,
    h: f64,
    (x, y): (f64, f64),
    rng: &mut impl Rng,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_global_composite_operation("source-over")?;
    let grad = ctx.create_radial_gradient(x, y, MASK_INNER_RADIUS, x, y, PANIC_RADIUS)?;
    grad.add_color_stop(0.0, "rgba(255, 0, 0, 0.3)")?;
    grad.add_color_stop(1.0, "rgba(255, 0, 0, 0)")?;
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.fill_rect(0.0, 0.0, w, h);

    // glitch scanline
    let alpha = rng.r#gen::<f64>() * 0.2;
    ctx.set_fill_style_str(&format!("rgba(255, 0, 0, {:.3})", alpha));
    ctx.fill_rect(0.0, rng.r#gen::<f64>() * h, w, 2.0);
    ctx.restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoralSample, Hazard, Lifeform, PointOfInterest, Resource};

    fn blank() -> Cell {
        Cell::new(CellCoord::new(0, 0), 10.0, 1.0)
    }

    fn coral(health: f64) -> CoralSample {
        CoralSample {
            cover: 60.0,
            health,
            bleaching: 1.0 - health,
            biodiversity: 0.5,
        }
    }

    #[test]
    fn window_is_clamped_to_grid() {
        let w = visible_window(50, 50, 25, 25, 6);
        assert_eq!(w.rows, 19..31);
        assert_eq!(w.cols, 19..31);

        let corner = visible_window(50, 50, 0, 49, 6);
        assert_eq!(corner.rows, 0..6);
        assert_eq!(corner.cols, 43..50);

        let outside = visible_window(50, 50, -20, 80, 6);
        assert!(outside.rows.is_empty());
        assert!(outside.cols.is_empty());
    }

    #[test]
    fn icon_priority_is_hazard_poi_life_collectible() {
        let mut cell = blank();
        assert_eq!(icon_for(&cell), None);
        cell.place_mineral(Resource {
            kind: "Manganese_Nodule".into(),
            value: 30000,
        });
        assert_eq!(icon_for(&cell), Some(Icon::Mineral));
        cell.life = Some(Lifeform {
            species: "Giant_Isopod".into(),
            threat: 1,
        });
        assert_eq!(icon_for(&cell), Some(Icon::Life));
        cell.poi = Some(PointOfInterest {
            id: "WRECK_001".into(),
            category: None,
            label: "Sunken Freighter".into(),
            desc: String::new(),
            research_value: None,
        });
        assert_eq!(icon_for(&cell), Some(Icon::Poi));
        cell.hazard = Some(Hazard {
            kind: "acidic_zone".into(),
            label: "Low pH Mass".into(),
            severity: None,
        });
        assert_eq!(icon_for(&cell), Some(Icon::Hazard));
    }

    #[test]
    fn collected_items_lose_their_icon() {
        let mut cell = blank();
        cell.place_coral(coral(0.5));
        assert_eq!(icon_for(&cell), Some(Icon::Coral));
        cell.collect();
        assert_eq!(icon_for(&cell), None);
    }

    #[test]
    fn reef_fill_follows_coral_health() {
        let mut cell = blank();
        assert_eq!(cell_fill(Expedition::CoralReef, &cell), "#0d2840");
        cell.place_coral(coral(0.95));
        assert_eq!(cell_fill(Expedition::CoralReef, &cell), "#1a4d2e");
        cell.place_coral(coral(0.8));
        assert_eq!(cell_fill(Expedition::CoralReef, &cell), "#4d4d1a");
        cell.place_coral(coral(0.2));
        assert_eq!(cell_fill(Expedition::CoralReef, &cell), "#4d1a1a");
        cell.collect();
        assert_eq!(cell_fill(Expedition::CoralReef, &cell), "#0d2840");
    }

    #[test]
    fn mineral_fill_marks_slopes_and_hazards() {
        let mut cell = blank();
        assert_eq!(cell_fill(Expedition::Minerals, &cell), "#001a11");
        cell.biome = Biome::Slope;
        assert_eq!(cell_fill(Expedition::Minerals, &cell), "#00261a");
        cell.hazard = Some(Hazard {
            kind: "trench_wall".into(),
            label: String::new(),
            severity: None,
        });
        assert_eq!(cell_fill(Expedition::Minerals, &cell), "#1a0a0a");
        assert_eq!(cell_fill(Expedition::CoralReef, &cell), "#1a0a0a");
    }
}
