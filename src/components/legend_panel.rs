use super::legend::{LegendRow, Swatch};
use crate::config::{Expedition, IconStyle};
use crate::render::Icon;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    pub expedition: Expedition,
}

fn icon_html(style: IconStyle, icon: Icon) -> Html {
    let sprite = match (style, icon) {
        (IconStyle::Sprite, Icon::Hazard) => Some("assets/hazard.png"),
        (IconStyle::Sprite, Icon::Poi) => Some("assets/poi.png"),
        (IconStyle::Sprite, Icon::Coral) => Some("assets/coral.png"),
        _ => None,
    };
    match sprite {
        Some(src) => html! { <img src={src} width="16" height="16" alt="" /> },
        None => html! { <span>{ icon.glyph() }</span> },
    }
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    let style = props.expedition.config().icons;
    let rows: Vec<(Html, &'static str)> = match props.expedition {
        Expedition::Minerals => vec![
            (icon_html(style, Icon::Hazard), "Hazard"),
            (icon_html(style, Icon::Poi), "Point of interest"),
            (icon_html(style, Icon::Life), "Lifeform"),
            (icon_html(style, Icon::Mineral), "Mineral deposit"),
            (html! { <Swatch color="#00261a" /> }, "Slope"),
        ],
        Expedition::CoralReef => vec![
            (icon_html(style, Icon::Hazard), "Hazard"),
            (icon_html(style, Icon::Poi), "Point of interest"),
            (icon_html(style, Icon::Coral), "Coral colony"),
            (html! { <Swatch color="#1a4d2e" /> }, "Healthy reef"),
            (html! { <Swatch color="#4d4d1a" /> }, "Stressed reef"),
            (html! { <Swatch color="#4d1a1a" /> }, "Bleaching reef"),
        ],
    };
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:170px; font-family:monospace; font-size:12px; color:#c9d1d9;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        { for rows.into_iter().map(|(icon, label)| html! { <LegendRow icon={icon} label={label} /> }) }
    </div>}
}
