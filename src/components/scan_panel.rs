use crate::model::{CollectibleItem, CoralSample, Lifeform, PointOfInterest, Resource};
use crate::state::ScanResult;
use crate::util::humanize;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScanPanelProps {
    pub scan: Option<ScanResult>,
}

const HEADER_STYLE: &str = "font-weight:700; font-size:13px;";
const DETAIL_STYLE: &str = "font-size:11px; color:#9aa4ad; margin-top:2px;";
const SECTION_STYLE: &str = "padding-top:6px; margin-top:6px; border-top:1px solid #30363d;";

fn poi_section(poi: &PointOfInterest) -> Html {
    html! {
        <div>
            <div style={format!("{} color:#f2cc60;", HEADER_STYLE)}>{ format!("Target: {}", poi.label) }</div>
            <div style={DETAIL_STYLE}>{ &poi.desc }</div>
            {
                if let Some(v) = poi.research_value {
                    html! { <div style={DETAIL_STYLE}>{ format!("Research value: {}", v) }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn life_section(life: &Lifeform) -> Html {
    html! {
        <div style={SECTION_STYLE}>
            <div style={format!("{} color:#00ff9d;", HEADER_STYLE)}>{ format!("Bio-sign: {}", humanize(&life.species)) }</div>
            <div style={DETAIL_STYLE}>{ format!("Threat: {}", life.threat) }</div>
        </div>
    }
}

fn mineral_section(r: &Resource, just_collected: bool) -> Html {
    let header = if just_collected { "Collected" } else { "Mineral" };
    html! {
        <div style={SECTION_STYLE}>
            <div style={format!("{} color:#b1bac4;", HEADER_STYLE)}>{ format!("{}: {}", header, humanize(&r.kind)) }</div>
            <div style={DETAIL_STYLE}>{ format!("Value: ${}", r.value) }</div>
        </div>
    }
}

fn coral_section(c: &CoralSample, just_collected: bool) -> Html {
    let header = if just_collected { "Sample collected" } else { "Coral colony" };
    html! {
        <div style={SECTION_STYLE}>
            <div style={format!("{} color:#ff7b72;", HEADER_STYLE)}>{ header }</div>
            <div style={DETAIL_STYLE}>{ format!("Cover: {:.0}%", c.cover) }</div>
            <div style={DETAIL_STYLE}>{ format!("Health: {:.0}%", c.health * 100.0) }</div>
            <div style={DETAIL_STYLE}>{ format!("Bleaching risk: {:.0}%", c.bleaching * 100.0) }</div>
            <div style={DETAIL_STYLE}>{ format!("Biodiversity: {:.2}", c.biodiversity) }</div>
        </div>
    }
}

#[function_component]
pub fn ScanPanel(props: &ScanPanelProps) -> Html {
    let Some(scan) = &props.scan else {
        return html! {};
    };
    let panel_style = "position:absolute; right:12px; top:12px; \
        background:rgba(10,14,20,0.92); border:1px solid #30363d; border-radius:6px; \
        padding:10px 14px; min-width:220px; max-width:280px; font-family:monospace; color:#c9d1d9;";
    html! {
        <div style={panel_style}>
            <div style="font-size:11px; letter-spacing:2px; opacity:0.6; margin-bottom:6px;">{"SCAN RESULTS"}</div>
            { scan.poi.as_ref().map(poi_section).unwrap_or_default() }
            { scan.life.as_ref().map(life_section).unwrap_or_default() }
            {
                match &scan.item {
                    Some(CollectibleItem::Mineral(r)) => mineral_section(r, scan.just_collected),
                    Some(CollectibleItem::Coral(c)) => coral_section(c, scan.just_collected),
                    None => html! {},
                }
            }
        </div>
    }
}
