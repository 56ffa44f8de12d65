use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingScreenProps {
    pub text: AttrValue,
}

#[function_component]
pub fn LoadingScreen(props: &LoadingScreenProps) -> Html {
    html! {
        <div style="height:100vh; width:100%; background:#000; display:flex; align-items:center; justify-content:center; color:#00ff9d; font-family:monospace; letter-spacing:2px;">
            { props.text.clone() }
        </div>
    }
}
