use web_sys::TouchEvent;
use yew::prelude::*;

use super::RenderTarget;
use crate::listeners::{DocumentTouchListeners, Subscription, touch_point};
use crate::model::{StyleMap, StyleValue};
use crate::state::{AccumulationPolicy, DragSession, RafScheduler};
use crate::util::{MAIN_KEY, normalize};

/// Payload handed from a draggable region to the ones nested inside it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassThrough(pub StyleMap);

#[derive(Properties, PartialEq, Clone)]
pub struct DraggableProps {
    /// Receives the ancestor pass-through overlaid with this region's
    /// position and `dx`/`dy`.
    pub target: RenderTarget,
    /// Base position; read once at mount.
    pub style: StyleValue,
    /// Read once at mount.
    #[prop_or_default]
    pub policy: AccumulationPolicy,
    #[prop_or_default]
    pub on_touch_start: Option<Callback<TouchEvent>>,
    #[prop_or_default]
    pub on_drag: Option<Callback<StyleMap>>,
}

type Session = DragSession<RafScheduler>;

#[function_component(Draggable)]
pub fn draggable(props: &DraggableProps) -> Html {
    let ancestor = use_context::<PassThrough>().unwrap_or_default();
    let session = use_mut_ref(|| {
        Session::new(&props.style, props.policy, RafScheduler::new())
            .inspect_err(|err| log::error!("draggable disabled: {err}"))
            .ok()
    });
    let subscription = use_mut_ref(|| None::<Subscription>);
    // latest on_drag handle, read when a frame fires
    let on_drag = use_mut_ref(|| None::<Callback<StyleMap>>);
    *on_drag.borrow_mut() = props.on_drag.clone();
    let force_update = use_force_update();

    let listeners = {
        let session = session.clone();
        let subscription = subscription.clone();
        let on_drag = on_drag.clone();
        let force_update = force_update.clone();
        use_mut_ref(move || {
            let on_move = {
                let session = session.clone();
                let on_drag = on_drag.clone();
                let force_update = force_update.clone();
                move |e: TouchEvent| {
                    e.prevent_default();
                    let Some(point) = touch_point(&e) else { return };
                    let flush = {
                        let session = session.clone();
                        let on_drag = on_drag.clone();
                        let force_update = force_update.clone();
                        move || {
                            let flushed = session.borrow_mut().as_mut().map(|s| s.flush());
                            match flushed {
                                Some(Ok(Some(position))) => {
                                    if let Some(cb) = &*on_drag.borrow() {
                                        cb.emit(position);
                                    }
                                    force_update.force_update();
                                }
                                Some(Err(err)) => log::warn!("drag frame dropped: {err}"),
                                _ => {}
                            }
                        }
                    };
                    if let Some(s) = session.borrow_mut().as_mut() {
                        if let Err(err) = s.queue_move(point, flush) {
                            log::debug!("{err}");
                        }
                    }
                }
            };
            let on_end = move |_e: TouchEvent| {
                // releases the document listeners, including this one
                subscription.borrow_mut().take();
                if let Some(s) = session.borrow_mut().as_mut() {
                    s.end();
                }
                force_update.force_update();
            };
            DocumentTouchListeners::new(on_move, on_end)
        })
    };

    // Teardown mid-gesture must not leave document listeners or a frame behind.
    {
        let session = session.clone();
        let subscription = subscription.clone();
        use_effect_with((), move |_| {
            move || {
                subscription.borrow_mut().take();
                if let Some(s) = session.borrow_mut().as_mut() {
                    s.end();
                }
            }
        });
    }

    let ontouchstart = {
        let session = session.clone();
        let subscription = subscription.clone();
        let force_update = force_update.clone();
        let cb = props.on_touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(cb) = &cb {
                cb.emit(e.clone());
            }
            let Some(point) = touch_point(&e) else { return };
            let mut state = session.borrow_mut();
            let Some(s) = state.as_mut() else { return };
            s.start(point);
            drop(state);
            if subscription.borrow().is_none() {
                match listeners.borrow().subscribe() {
                    Ok(sub) => *subscription.borrow_mut() = Some(sub),
                    Err(err) => log::error!("{err}"),
                }
            }
            force_update.force_update();
        })
    };

    let pass_through = session
        .borrow()
        .as_ref()
        .map(|s| s.pass_through(&ancestor.0));
    let Some(pass_through) = pass_through else {
        let mut fallback = ancestor.0.clone();
        fallback.extend(normalize(props.style.clone(), MAIN_KEY, StyleMap::new()));
        return props.target.resolve(&fallback);
    };

    html! {
        <ContextProvider<PassThrough> context={PassThrough(pass_through.clone())}>
            <div style="display: contents;" {ontouchstart}>
                { props.target.resolve(&pass_through) }
            </div>
        </ContextProvider<PassThrough>>
    }
}
