use web_sys::TouchEvent;
use yew::prelude::*;

use super::RenderTarget;
use crate::error::Error;
use crate::listeners::touch_point;
use crate::model::StyleValue;
use crate::state::{AccumulationPolicy, GestureTracker};
use crate::util::{MAIN_KEY, normalize};

#[derive(Properties, PartialEq, Clone)]
pub struct TouchableProps {
    pub target: RenderTarget,
    /// Base position; read once at mount.
    pub style: StyleValue,
    /// Read once at mount.
    #[prop_or(AccumulationPolicy::AccumulateFromOrigin)]
    pub policy: AccumulationPolicy,
    #[prop_or_default]
    pub on_touch_start: Option<Callback<TouchEvent>>,
    #[prop_or_default]
    pub on_touch_move: Option<Callback<TouchEvent>>,
    #[prop_or_default]
    pub on_touch_end: Option<Callback<TouchEvent>>,
}

fn emit(cb: &Option<Callback<TouchEvent>>, e: TouchEvent) {
    if let Some(cb) = cb {
        cb.emit(e);
    }
}

/// Follows a finger across its target, re-rendering with the moved position
/// on every touch move.
#[function_component(Touchable)]
pub fn touchable(props: &TouchableProps) -> Html {
    let tracker = use_mut_ref(|| {
        GestureTracker::new(&props.style, props.policy)
            .inspect_err(|err| log::error!("touchable disabled: {err}"))
            .ok()
    });
    let force_update = use_force_update();

    let ontouchstart = {
        let tracker = tracker.clone();
        let force_update = force_update.clone();
        let cb = props.on_touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            if let (Some(point), Some(t)) = (touch_point(&e), tracker.borrow_mut().as_mut()) {
                t.touch_start(point);
                force_update.force_update();
            }
            emit(&cb, e);
        })
    };

    let ontouchmove = {
        let tracker = tracker.clone();
        let force_update = force_update.clone();
        let cb = props.on_touch_move.clone();
        Callback::from(move |e: TouchEvent| {
            if let (Some(point), Some(t)) = (touch_point(&e), tracker.borrow_mut().as_mut()) {
                match t.touch_move(point) {
                    Ok(_) => force_update.force_update(),
                    Err(err @ Error::GestureState { .. }) => log::debug!("{err}"),
                    Err(err) => log::error!("touch move failed: {err}"),
                }
            }
            emit(&cb, e);
        })
    };

    let ontouchend = {
        let tracker = tracker.clone();
        let cb = props.on_touch_end.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t) = tracker.borrow_mut().as_mut() {
                if !t.touch_end() {
                    log::debug!("{}", Error::GestureState { event: "touchend" });
                }
            }
            emit(&cb, e);
        })
    };

    let state = tracker.borrow();
    let Some(tracker) = state.as_ref() else {
        return props
            .target
            .resolve(&normalize(props.style.clone(), MAIN_KEY, Default::default()));
    };

    html! {
        <div
            style="display: contents;"
            {ontouchstart}
            {ontouchmove}
            ontouchend={ontouchend.clone()}
            ontouchcancel={ontouchend}
        >
            { props.target.resolve(&tracker.position().current) }
        </div>
    }
}
