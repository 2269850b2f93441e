//! Core data model for touch tracking.
//! Points and deltas are screen-space; style values describe where the
//! tracked element sits and are what the components hand to their render target.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub const ZERO: Delta = Delta { dx: 0.0, dy: 0.0 };
}

/// Displacement from `from` to `to`; zero when there is no previous sample.
pub fn compute_deltas(from: Option<Point>, to: Point) -> Delta {
    match from {
        Some(from) => Delta {
            dx: to.x - from.x,
            dy: to.y - from.y,
        },
        None => Delta::ZERO,
    }
}

pub type StyleMap = BTreeMap<String, StyleValue>;

/// A style/position descriptor: a bare distance or a keyed structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
    List(Vec<StyleValue>),
    Map(StyleMap),
}

impl StyleValue {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Short description used in configuration errors.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleValue::Number(_) => "number",
            StyleValue::Text(_) => "text",
            StyleValue::List(_) => "list",
            StyleValue::Map(_) => "map",
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<Vec<StyleValue>> for StyleValue {
    fn from(value: Vec<StyleValue>) -> Self {
        StyleValue::List(value)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(value: StyleMap) -> Self {
        StyleValue::Map(value)
    }
}

impl<K: Into<String>, V: Into<StyleValue>, const N: usize> From<[(K, V); N]> for StyleValue {
    fn from(entries: [(K, V); N]) -> Self {
        StyleValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Where the tracked element was at mount and where it is now.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionState {
    pub initial: StyleMap,
    pub current: StyleMap,
}

impl PositionState {
    pub fn new(initial: StyleMap) -> Self {
        Self {
            current: initial.clone(),
            initial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn deltas_from_nothing_are_zero() {
        assert_eq!(compute_deltas(None, Point::new(12.0, -3.0)), Delta::ZERO);
    }

    #[test]
    fn deltas_are_signed() {
        let d = compute_deltas(Some(Point::new(10.0, 10.0)), Point::new(4.0, 18.0));
        assert_eq!(d, Delta { dx: -6.0, dy: 8.0 });
    }

    #[test]
    fn style_json_keeps_shape() {
        let style = StyleValue::from_json(r#"{"x": 0, "y": {"main": 10, "unit": "em"}, "z": [1, 2]}"#)
            .unwrap();
        let StyleValue::Map(map) = style else {
            panic!("expected a map");
        };
        assert_eq!(map["x"], StyleValue::Number(0.0));
        assert_eq!(map["y"], StyleValue::from([("main", StyleValue::Number(10.0)), ("unit", "em".into())]));
        assert_eq!(map["z"], StyleValue::List(vec![1.0.into(), 2.0.into()]));
    }

    #[test]
    fn bad_style_json_is_reported() {
        assert!(matches!(
            StyleValue::from_json("{x: 0"),
            Err(crate::Error::Json(_))
        ));
    }

    proptest! {
        #[test]
        fn deltas_from_none_always_zero(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            prop_assert_eq!(compute_deltas(None, Point::new(x, y)), Delta::ZERO);
        }

        #[test]
        fn deltas_match_coordinate_difference(
            ax in -1e6f64..1e6, ay in -1e6f64..1e6,
            bx in -1e6f64..1e6, by in -1e6f64..1e6,
        ) {
            let d = compute_deltas(Some(Point::new(ax, ay)), Point::new(bx, by));
            prop_assert_eq!(d.dx, bx - ax);
            prop_assert_eq!(d.dy, by - ay);
        }
    }
}
