use crate::state::GameStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EndOverlayProps {
    pub status: GameStatus,
    pub hazard_hits: u32,
    pub collected: u32,
    pub noun: AttrValue,
    pub retry: Callback<()>,
    pub change_expedition: Callback<()>,
}

#[function_component]
pub fn EndOverlay(props: &EndOverlayProps) -> Html {
    let (title, color, blurb) = match props.status {
        GameStatus::Playing => return html! {},
        GameStatus::Dead => (
            "MISSION FAILED",
            "#f85149",
            "Hull breach. The submersible was lost to the abyss.",
        ),
        GameStatus::Success => (
            "RESEARCH COMPLETE",
            "#00ff9d",
            "Survey quota met. Surfacing with the collected data.",
        ),
    };
    let retry_btn = {
        let cb = props.retry.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let change_btn = {
        let cb = props.change_expedition.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style={format!("position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.88); border:2px solid {}; padding:24px 32px; border-radius:8px; text-align:center; min-width:320px; font-family:monospace; color:#c9d1d9; z-index:60;", color)}>
            <h2 style={format!("margin:0 0 12px 0; color:{}; letter-spacing:2px;", color)}>{ title }</h2>
            <p style="margin:4px 0; opacity:0.8;">{ blurb }</p>
            <p style="margin:4px 0;">{ format!("Hazard contacts: {}", props.hazard_hits) }</p>
            <p style="margin:4px 0;">{ format!("{} collected: {}", props.noun, props.collected) }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={retry_btn}>{"Retry Dive"}</button>
                <button onclick={change_btn}>{"Change Expedition"}</button>
            </div>
        </div>
    }
}
