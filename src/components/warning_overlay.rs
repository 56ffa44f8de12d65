use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WarningOverlayProps {
    pub warning: Option<AttrValue>,
}

#[function_component]
pub fn WarningOverlay(props: &WarningOverlayProps) -> Html {
    let Some(text) = &props.warning else {
        return html! {};
    };
    html! {
        <div class="abyss-flash" style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); border:4px solid #dc2626; background:rgba(127,29,29,0.9); color:#ef4444; padding:24px 40px; font-size:32px; font-weight:700; font-family:monospace; text-align:center; pointer-events:none; z-index:50;">
            <div>{ format!("WARNING: {}", text) }</div>
            <div style="font-size:13px; margin-top:8px; color:#fca5a5;">{"HULL STRESS DETECTED"}</div>
        </div>
    }
}
