use crate::model::CellCoord;
use crate::provider::Connectivity;
use crate::util::{format_coords, format_depth, format_pressure};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub title: AttrValue,
    pub connectivity: Connectivity,
    pub depth: Option<f64>,
    pub pressure: Option<f64>,
    pub coords: Option<CellCoord>,
    pub collected: u32,
    pub target: u32,
    pub noun: AttrValue,
}

fn badge_color(c: Connectivity) -> &'static str {
    match c {
        Connectivity::Online => "#00ff9d",
        Connectivity::Offline => "#f0883e",
        Connectivity::Connecting => "#8b949e",
    }
}

#[function_component]
pub fn StatusPanel(props: &StatusPanelProps) -> Html {
    let row_style = "display:flex; justify-content:space-between; gap:16px;";
    let label_style = "opacity:0.75;";
    let value_style = "color:#ffffff; font-weight:700; font-variant-numeric:tabular-nums;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(0,20,14,0.85); border:1px solid #00ff9d55; border-radius:6px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:6px; font-size:13px; color:#00ff9d; font-family:monospace;">
            <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:4px;">
                <span style="font-weight:700; letter-spacing:1px;">{ props.title.to_uppercase() }</span>
                <span style={format!("font-size:11px; padding:1px 6px; border:1px solid {0}; color:{0}; border-radius:3px;", badge_color(props.connectivity))}>
                    { props.connectivity.label() }
                </span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"DEPTH:"}</span>
                <span style={value_style}>{ format_depth(props.depth) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"PRESSURE:"}</span>
                <span style={value_style}>{ format_pressure(props.pressure) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"COORDS:"}</span>
                <span style={value_style}>{ format_coords(props.coords) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{ format!("{}:", props.noun.to_uppercase()) }</span>
                <span style={value_style}>{ format!("{}/{}", props.collected, props.target) }</span>
            </div>
        </div>
    }
}
