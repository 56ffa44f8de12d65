use crate::config::Expedition;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BriefingOverlayProps {
    pub choose: Callback<Expedition>,
}

fn objectives(expedition: Expedition) -> [&'static str; 3] {
    match expedition {
        Expedition::Minerals => [
            "Sweep the seafloor and collect 10 manganese nodules.",
            "Five distinct hazard contacts will breach the hull.",
            "Wrecks and lifeforms show up in the scan panel.",
        ],
        Expedition::CoralReef => [
            "Sample 30 coral colonies across the reef.",
            "Each hazard costs 10% hull integrity.",
            "Cell color shows colony health: green, amber, red.",
        ],
    }
}

#[function_component(BriefingOverlay)]
pub fn briefing_overlay(props: &BriefingOverlayProps) -> Html {
    let card = |expedition: Expedition| {
        let config = expedition.config();
        let choose = {
            let cb = props.choose.clone();
            Callback::from(move |_| cb.emit(expedition))
        };
        html! {
            <div style="flex:1; border:1px solid #30363d; border-radius:8px; padding:14px; display:flex; flex-direction:column; gap:8px;">
                <h3 style="margin:0; color:#00ff9d;">{ config.title }</h3>
                <ul style="margin:0 0 0 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                    { for objectives(expedition).iter().map(|line| html! { <li>{ *line }</li> }) }
                </ul>
                <button onclick={choose} style="margin-top:auto;">{"Begin Dive"}</button>
            </div>
        }
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:640px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4; font-family:monospace; color:#c9d1d9;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{"Project Abyss"}</h2>
            <p style="margin:4px 0 14px 0; text-align:center; opacity:0.85;">{"Move the pointer to steer the flashlight. Drag to pan; edges pan on their own."}</p>
            <div style="display:flex; gap:14px;">
                { for Expedition::ALL.iter().map(|e| card(*e)) }
            </div>
        </div>
    }
}
