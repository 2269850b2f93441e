pub mod frame;
pub mod touch;

pub use frame::{DragAnimator, DragSession, FrameScheduler, ManualScheduler, RafScheduler};
pub use touch::{AccumulationPolicy, GestureTracker, TouchState};
