use std::rc::Rc;

use super::{
    briefing_overlay::BriefingOverlay, loading_screen::LoadingScreen, run_view::RunView,
};
use crate::config::Expedition;
use crate::model::Grid;
use crate::provider::{self, Connectivity};
use yew::prelude::*;

#[derive(PartialEq, Clone)]
enum View {
    Briefing,
    Loading(Expedition),
    Diving {
        expedition: Expedition,
        grid: Rc<Grid>,
        connectivity: Connectivity,
    },
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Briefing);
    // Bumped per load so each dive mounts a fresh session.
    let dive = use_mut_ref(|| 0_u32);

    let choose = {
        let view = view.clone();
        let dive = dive.clone();
        Callback::from(move |expedition: Expedition| {
            view.set(View::Loading(expedition));
            let view = view.clone();
            let dive = dive.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let loaded = provider::load(&expedition.config()).await;
                *dive.borrow_mut() += 1;
                view.set(View::Diving {
                    expedition,
                    grid: Rc::new(loaded.grid),
                    connectivity: loaded.connectivity,
                });
            });
        })
    };
    let to_briefing = {
        let view = view.clone();
        Callback::from(move |()| view.set(View::Briefing))
    };

    match &*view {
        View::Briefing => html! {
            <div style="position:relative; width:100vw; height:100vh; background:#000;">
                <BriefingOverlay choose={choose} />
            </div>
        },
        View::Loading(expedition) => html! {
            <LoadingScreen text={expedition.config().loading_text} />
        },
        View::Diving {
            expedition,
            grid,
            connectivity,
        } => html! { <RunView
            key={*dive.borrow()}
            config={expedition.config()}
            grid={grid.clone()}
            connectivity={*connectivity}
            change_expedition={to_briefing}
        /> },
    }
}
