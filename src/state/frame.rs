// Frame-throttled position updates for draggable regions.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::touch::{AccumulationPolicy, GestureTracker};
use crate::error::{Error, Result};
use crate::model::{Point, StyleMap, StyleValue};

/// Defers work to the next display refresh.
pub trait FrameScheduler {
    type Handle: Copy + fmt::Debug;

    fn request(&mut self, callback: Box<dyn FnOnce()>) -> Result<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// `requestAnimationFrame` on the global window.
pub struct RafScheduler {
    window: Option<web_sys::Window>,
    // Kept alive until the frame fires or is cancelled.
    pending: Option<Closure<dyn FnMut()>>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
            pending: None,
        }
    }
}

impl Default for RafScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self, callback: Box<dyn FnOnce()>) -> Result<i32> {
        let window = self.window.as_ref().ok_or_else(|| Error::FrameRequest {
            reason: "no global `window` exists".to_string(),
        })?;
        let closure: Closure<dyn FnMut()> = Closure::once(move || callback());
        let handle = window
            .request_animation_frame(closure.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(|err| Error::FrameRequest {
                reason: format!("{err:?}"),
            })?;
        self.pending = Some(closure);
        Ok(handle)
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = &self.window {
            if let Err(err) = window.cancel_animation_frame(handle) {
                log::warn!("could not cancel frame {handle}: {err:?}");
            }
        }
        self.pending = None;
    }
}

/// Scheduler driven by hand; frames run only when [`ManualScheduler::tick`]
/// is called. Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>,
    next_id: Rc<Cell<u32>>,
    requests: Rc<Cell<usize>>,
}

impl ManualScheduler {
    /// Runs every frame queued so far.
    pub fn tick(&self) -> usize {
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let ran = due.len();
        for (_, callback) in due {
            callback();
        }
        ran
    }

    pub fn queued(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Total frames ever requested.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn request(&mut self, callback: Box<dyn FnOnce()>) -> Result<u32> {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.requests.set(self.requests.get() + 1);
        self.queue.borrow_mut().push((id, callback));
        Ok(id)
    }

    fn cancel(&mut self, handle: u32) {
        self.queue.borrow_mut().retain(|(id, _)| *id != handle);
    }
}

/// Coalesces move samples so at most one recompute runs per frame.
pub struct DragAnimator<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    latest: Option<Point>,
}

impl<S: FrameScheduler> DragAnimator<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            latest: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records `point` as the target of the next frame and schedules `flush`
    /// unless a frame is already pending. Returns whether a frame was requested.
    pub fn push(&mut self, point: Point, flush: impl FnOnce() + 'static) -> bool {
        self.latest = Some(point);
        if self.pending.is_some() {
            return false;
        }
        match self.scheduler.request(Box::new(flush)) {
            Ok(handle) => {
                self.pending = Some(handle);
                true
            }
            Err(err) => {
                log::warn!("{err}; retrying on next move");
                false
            }
        }
    }

    /// Called from the frame: clears the pending flag and yields the target.
    pub fn take(&mut self) -> Option<Point> {
        self.pending = None;
        self.latest.take()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            log::trace!("cancelling frame {handle:?}");
            self.scheduler.cancel(handle);
        }
        self.latest = None;
    }
}

/// Gesture tracking for one draggable region: a tracker whose moves are
/// applied once per frame.
pub struct DragSession<S: FrameScheduler> {
    tracker: GestureTracker,
    animator: DragAnimator<S>,
}

impl<S: FrameScheduler> DragSession<S> {
    pub fn new(style: &StyleValue, policy: AccumulationPolicy, scheduler: S) -> Result<Self> {
        Ok(Self {
            tracker: GestureTracker::new(style, policy)?,
            animator: DragAnimator::new(scheduler),
        })
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn is_frame_pending(&self) -> bool {
        self.animator.is_pending()
    }

    pub fn start(&mut self, point: Point) {
        self.animator.cancel();
        self.tracker.touch_start(point);
    }

    /// Queues a move; `flush` runs on the next frame and should call
    /// [`DragSession::flush`].
    pub fn queue_move(&mut self, point: Point, flush: impl FnOnce() + 'static) -> Result<bool> {
        if !self.tracker.touch().is_tracking() {
            return Err(Error::GestureState { event: "touchmove" });
        }
        Ok(self.animator.push(point, flush))
    }

    /// Applies the latest queued move. `Ok(None)` when nothing is queued,
    /// which is the case for a frame that fires after the gesture ended.
    pub fn flush(&mut self) -> Result<Option<StyleMap>> {
        let Some(point) = self.animator.take() else {
            return Ok(None);
        };
        let position = self.tracker.touch_move(point)?;
        Ok(Some(position.clone()))
    }

    /// Ends the gesture and drops any pending frame.
    pub fn end(&mut self) -> bool {
        self.animator.cancel();
        self.tracker.touch_end()
    }

    /// `ancestor` overlaid with this region's position and deltas.
    pub fn pass_through(&self, ancestor: &StyleMap) -> StyleMap {
        let mut out = ancestor.clone();
        out.extend(self.tracker.pass_through());
        out
    }
}
