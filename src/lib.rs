//! Touch-gesture components for Yew.
//!
//! [`components::Touchable`] and [`components::Draggable`] wrap a single child
//! and re-render it with a position that follows the user's finger. The
//! gesture math lives in [`model`], [`position`] and [`state`] and does not
//! touch the DOM.

pub mod components;
pub mod css;
pub mod error;
pub mod listeners;
pub mod model;
pub mod position;
pub mod state;
pub mod util;

pub use components::{Draggable, PassThrough, RenderTarget, Touchable};
pub use error::{Error, Result};
pub use model::{Delta, Point, PositionState, StyleMap, StyleValue, compute_deltas};
pub use position::compute_position_style;
pub use state::{AccumulationPolicy, DragSession, FrameScheduler, GestureTracker, TouchState};
pub use util::normalize;
