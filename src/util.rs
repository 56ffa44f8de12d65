// Console logging and HUD text formatting

use crate::model::CellCoord;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

pub fn format_depth(depth: Option<f64>) -> String {
    match depth {
        Some(d) => format!("{:.1}m", d),
        None => "--".to_string(),
    }
}

pub fn format_pressure(pressure: Option<f64>) -> String {
    match pressure {
        Some(p) => format!("{:.1} atm", p),
        None => "--".to_string(),
    }
}

pub fn format_coords(coords: Option<CellCoord>) -> String {
    match coords {
        Some(c) => format!("{}, {}", c.row, c.col),
        None => "--".to_string(),
    }
}

/// `Giant_Isopod` -> `Giant Isopod`
pub fn humanize(ident: &str) -> String {
    ident.replace('_', " ")
}
