use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::config::{ExpeditionConfig, IconStyle};
use crate::model::Grid;
use crate::provider::Connectivity;
use crate::render::{Sprites, draw_frame};
use crate::state::{HudAction, HudState, Session};
use crate::util::{clog, cwarn};

use super::{
    end_overlay::EndOverlay, hull_bar::HullBar, legend_panel::LegendPanel,
    scan_panel::ScanPanel, status_panel::StatusPanel, warning_overlay::WarningOverlay,
};

#[derive(Properties, PartialEq, Clone)]
pub struct RunViewProps {
    pub config: ExpeditionConfig,
    pub grid: Rc<Grid>,
    pub connectivity: Connectivity,
    pub change_expedition: Callback<()>,
}

type Teardown = Box<dyn FnOnce()>;

/// Wires the canvas listeners and the frame loop. The returned closure undoes all of it.
fn attach(
    canvas: HtmlCanvasElement,
    session: Rc<RefCell<Session>>,
    hud: UseReducerDispatcher<HudState>,
) -> Result<Teardown, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let fit_canvas = {
        let canvas = canvas.clone();
        let window = window.clone();
        let session = session.clone();
        move || {
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            canvas.set_width(width.max(0.0) as u32);
            canvas.set_height(height.max(0.0) as u32);
            session.borrow_mut().resize(width, height);
        }
    };
    fit_canvas();

    let sprites = if session.borrow().config.icons == IconStyle::Sprite {
        match Sprites::load() {
            Ok(s) => Some(s),
            Err(e) => {
                cwarn(&format!("sprites unavailable: {:?}", e));
                None
            }
        }
    } else {
        None
    };

    // RAF loop
    let raf_id = Rc::new(RefCell::new(None));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let raf_id_loop = raf_id.clone();
        let frame_loop = frame.clone();
        let window_loop = window.clone();
        let session = session.clone();
        let mut rng = SmallRng::from_entropy();
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            {
                let mut s = session.borrow_mut();
                s.advance_frame();
                draw_frame(&ctx, &s, sprites.as_ref(), &mut rng);
            }
            if let Some(cb) = frame_loop.borrow().as_ref() {
                if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id_loop.borrow_mut() = Some(id);
                }
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(cb) = frame.borrow().as_ref() {
        *raf_id.borrow_mut() = Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?);
    }

    let mousemove_cb = {
        let session = session.clone();
        let hud = hud.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let events = session.borrow_mut().pointer_move(
                e.offset_x() as f64,
                e.offset_y() as f64,
                e.client_x() as f64,
                e.client_y() as f64,
            );
            if !events.is_empty() {
                hud.dispatch(HudAction::Apply(events));
            }
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())?;

    let mousedown_cb = {
        let session = session.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            if e.button() == 0 {
                session
                    .borrow_mut()
                    .pointer_down(e.client_x() as f64, e.client_y() as f64);
            }
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())?;

    let mouseup_cb = {
        let session = session.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            session.borrow_mut().pointer_up();
        }) as Box<dyn FnMut(_)>)
    };
    window.add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())?;
    canvas.add_event_listener_with_callback("mouseleave", mouseup_cb.as_ref().unchecked_ref())?;

    let resize_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        fit_canvas();
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

    clog("Dive started");
    Ok(Box::new(move || {
        let _ = canvas.remove_event_listener_with_callback(
            "mousemove",
            mousemove_cb.as_ref().unchecked_ref(),
        );
        let _ = canvas.remove_event_listener_with_callback(
            "mousedown",
            mousedown_cb.as_ref().unchecked_ref(),
        );
        let _ = canvas.remove_event_listener_with_callback(
            "mouseleave",
            mouseup_cb.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "mouseup",
            mouseup_cb.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "resize",
            resize_cb.as_ref().unchecked_ref(),
        );
        if let Some(id) = raf_id.borrow_mut().take() {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the frame closure's reference to itself.
        frame.borrow_mut().take();
        let _keep_alive = (&mousemove_cb, &mousedown_cb, &mouseup_cb, &resize_cb);
    }))
}

#[function_component(RunView)]
pub fn run_view(props: &RunViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let session = use_mut_ref(|| Session::new(props.config.clone(), (*props.grid).clone()));
    let hud = use_reducer({
        let connectivity = props.connectivity;
        move || HudState::new(connectivity)
    });

    // Main mount effect (listeners, frame loop)
    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let dispatcher = hud.dispatcher();
        use_effect_with((), move |_| {
            let teardown = match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => attach(canvas, session, dispatcher)
                    .map_err(|e| cwarn(&format!("failed to start dive view: {:?}", e)))
                    .ok(),
                None => None,
            };
            move || {
                if let Some(teardown) = teardown {
                    teardown();
                }
            }
        });
    }

    let retry_cb: Callback<()> = {
        let session = session.clone();
        let dispatcher = hud.dispatcher();
        Callback::from(move |()| {
            let events = session.borrow_mut().reset();
            dispatcher.dispatch(HudAction::Apply(events));
        })
    };

    let config = &props.config;
    let noun = config.expedition.collectible_noun();
    let integrity = session.borrow().run.hull_integrity();
    let warning = hud.warning.clone().map(AttrValue::from);

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#000;">
        <canvas ref={canvas_ref} id="abyss-canvas" style="display:block; width:100%; height:100%; cursor:none;"></canvas>
        <StatusPanel
            title={config.title}
            connectivity={hud.connectivity}
            depth={hud.readout.depth}
            pressure={hud.readout.pressure}
            coords={hud.readout.coords}
            collected={hud.collected}
            target={config.collect_target}
            noun={noun}
        />
        <HullBar integrity={integrity} />
        <ScanPanel scan={hud.scan.clone()} />
        <LegendPanel expedition={config.expedition} />
        <WarningOverlay warning={warning} />
        <EndOverlay
            status={hud.status}
            hazard_hits={hud.hazard_hits}
            collected={hud.collected}
            noun={noun}
            retry={retry_cb}
            change_expedition={props.change_expedition.clone()}
        />
    </div>}
}
