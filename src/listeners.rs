//! Scoped DOM event subscriptions.
//!
//! A [`Subscription`] removes every listener it registered when dropped, so a
//! gesture that ends, gets cancelled, or whose component is torn down never
//! leaves document-level handlers behind. The closures themselves are shared
//! (`Rc`) and outlive any one subscription, which makes it safe to drop a
//! subscription from inside one of its own handlers.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, TouchEvent};

use crate::error::{Error, Result};
use crate::model::Point;

pub type Listener = Rc<Closure<dyn FnMut(Event)>>;

fn function(listener: &Closure<dyn FnMut(Event)>) -> &js_sys::Function {
    listener.as_ref().unchecked_ref()
}

/// Point of the first active touch contact, if any.
pub fn touch_point(event: &TouchEvent) -> Option<Point> {
    event
        .touches()
        .item(0)
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
}

pub fn touch_listener(mut handler: impl FnMut(TouchEvent) + 'static) -> Listener {
    Rc::new(Closure::wrap(Box::new(move |e: Event| {
        if let Ok(touch) = e.dyn_into::<TouchEvent>() {
            handler(touch);
        }
    }) as Box<dyn FnMut(_)>))
}

pub struct Subscription {
    target: EventTarget,
    registered: Vec<(&'static str, Listener)>,
}

impl Subscription {
    pub fn new(target: EventTarget) -> Self {
        Self {
            target,
            registered: Vec::new(),
        }
    }

    /// Registers a non-passive listener so handlers may call `preventDefault`.
    pub fn listen(&mut self, event: &'static str, listener: &Listener) -> Result<()> {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        self.target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                function(listener),
                &options,
            )
            .map_err(|err| Error::ListenerRegistration {
                event,
                reason: format!("{err:?}"),
            })?;
        self.registered.push((event, Rc::clone(listener)));
        Ok(())
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for (event, listener) in self.registered.drain(..) {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(event, function(&listener))
            {
                log::warn!("could not remove `{event}` listener: {err:?}");
            }
        }
    }
}

/// Document-level move/end handlers for one draggable region.
pub struct DocumentTouchListeners {
    on_move: Listener,
    on_end: Listener,
}

impl DocumentTouchListeners {
    pub fn new(
        on_move: impl FnMut(TouchEvent) + 'static,
        on_end: impl FnMut(TouchEvent) + 'static,
    ) -> Self {
        Self {
            on_move: touch_listener(on_move),
            on_end: touch_listener(on_end),
        }
    }

    /// Attaches `touchmove`, `touchend` and `touchcancel` to the document.
    pub fn subscribe(&self) -> Result<Subscription> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| Error::ListenerRegistration {
                event: "touchmove",
                reason: "no document available".to_string(),
            })?;
        let mut subscription = Subscription::new(document.into());
        subscription.listen("touchmove", &self.on_move)?;
        subscription.listen("touchend", &self.on_end)?;
        subscription.listen("touchcancel", &self.on_end)?;
        Ok(subscription)
    }
}
