use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HullBarProps {
    /// 0..=100
    pub integrity: u32,
}

pub fn hull_color(integrity: u32) -> &'static str {
    if integrity > 60 {
        "#2ea043"
    } else if integrity > 30 {
        "#d29922"
    } else {
        "#f85149"
    }
}

#[function_component]
pub fn HullBar(props: &HullBarProps) -> Html {
    let pct = props.integrity.min(100);
    html! {
        <div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); width:260px; font-family:monospace; font-size:12px; color:#c9d1d9;">
            <div style="display:flex; justify-content:space-between; margin-bottom:3px;">
                <span>{"HULL INTEGRITY"}</span>
                <span style="font-variant-numeric:tabular-nums;">{ format!("{}%", pct) }</span>
            </div>
            <div style="height:8px; background:#161b22; border:1px solid #30363d; border-radius:4px; overflow:hidden;">
                <div style={format!("height:100%; width:{}%; background:{}; transition:width 0.2s;", pct, hull_color(pct))}></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_bands() {
        assert_eq!(hull_color(100), "#2ea043");
        assert_eq!(hull_color(61), "#2ea043");
        assert_eq!(hull_color(60), "#d29922");
        assert_eq!(hull_color(31), "#d29922");
        assert_eq!(hull_color(30), "#f85149");
        assert_eq!(hull_color(0), "#f85149");
    }
}
