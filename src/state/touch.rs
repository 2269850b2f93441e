// Gesture tracking: touch lifecycle plus the position it drives.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Delta, Point, PositionState, StyleMap, StyleValue, compute_deltas};
use crate::position::compute_position_style;

/// Touch lifecycle of one gesture. Idle reports no points and zero deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TouchState {
    #[default]
    Idle,
    Tracking {
        initial: Point,
        current: Point,
        deltas: Delta,
    },
}

impl TouchState {
    pub fn idle() -> Self {
        Self::Idle
    }

    pub fn started(point: Point) -> Self {
        Self::Tracking {
            initial: point,
            current: point,
            deltas: Delta::ZERO,
        }
    }

    /// Next sample of a tracked gesture. `deltas` is measured from `from`,
    /// which the caller picks according to its accumulation policy.
    fn moved(self, from: Point, to: Point) -> Self {
        match self {
            Self::Tracking { initial, .. } => Self::Tracking {
                initial,
                current: to,
                deltas: compute_deltas(Some(from), to),
            },
            Self::Idle => Self::Idle,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking { .. })
    }

    pub fn initial(&self) -> Option<Point> {
        match self {
            Self::Tracking { initial, .. } => Some(*initial),
            Self::Idle => None,
        }
    }

    pub fn current(&self) -> Option<Point> {
        match self {
            Self::Tracking { current, .. } => Some(*current),
            Self::Idle => None,
        }
    }

    pub fn deltas(&self) -> Delta {
        match self {
            Self::Tracking { deltas, .. } => *deltas,
            Self::Idle => Delta::ZERO,
        }
    }
}

/// How a move sample is folded into the element position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccumulationPolicy {
    /// Delta from the gesture origin, applied to the position the element
    /// had when the gesture started.
    AccumulateFromOrigin,
    /// Delta from the previous sample, applied to the current position.
    #[default]
    AccumulateIncremental,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureTracker {
    policy: AccumulationPolicy,
    touch: TouchState,
    position: PositionState,
    gesture_origin: StyleMap,
}

impl GestureTracker {
    pub fn new(style: &StyleValue, policy: AccumulationPolicy) -> Result<Self> {
        let initial = compute_position_style(style, Delta::ZERO)?;
        Ok(Self {
            policy,
            touch: TouchState::idle(),
            gesture_origin: initial.clone(),
            position: PositionState::new(initial),
        })
    }

    pub fn policy(&self) -> AccumulationPolicy {
        self.policy
    }

    pub fn touch(&self) -> &TouchState {
        &self.touch
    }

    pub fn position(&self) -> &PositionState {
        &self.position
    }

    /// Starts (or restarts) a gesture at `point`.
    pub fn touch_start(&mut self, point: Point) {
        log::trace!("touch start at ({}, {})", point.x, point.y);
        self.touch = TouchState::started(point);
        self.gesture_origin = self.position.current.clone();
    }

    /// Feeds one move sample and returns the new absolute position.
    pub fn touch_move(&mut self, point: Point) -> Result<&StyleMap> {
        let TouchState::Tracking {
            initial, current, ..
        } = self.touch
        else {
            return Err(Error::GestureState { event: "touchmove" });
        };
        let (touch, position) = match self.policy {
            AccumulationPolicy::AccumulateIncremental => {
                let touch = self.touch.moved(current, point);
                let position = compute_position_style(
                    &StyleValue::Map(self.position.current.clone()),
                    touch.deltas(),
                )?;
                (touch, position)
            }
            AccumulationPolicy::AccumulateFromOrigin => {
                let touch = self.touch.moved(initial, point);
                let position = compute_position_style(
                    &StyleValue::Map(self.gesture_origin.clone()),
                    touch.deltas(),
                )?;
                (touch, position)
            }
        };
        self.touch = touch;
        self.position.current = position;
        Ok(&self.position.current)
    }

    /// Ends the gesture; the element keeps its last position. Returns whether
    /// a gesture was active.
    pub fn touch_end(&mut self) -> bool {
        let was_tracking = self.touch.is_tracking();
        self.touch = TouchState::idle();
        was_tracking
    }

    /// Current position merged with the latest sample's deltas.
    pub fn pass_through(&self) -> StyleMap {
        let deltas = self.touch.deltas();
        let mut out = self.position.current.clone();
        out.insert("dx".to_string(), StyleValue::Number(deltas.dx));
        out.insert("dy".to_string(), StyleValue::Number(deltas.dy));
        out
    }
}
