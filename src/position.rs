//! Applies a touch delta to a position style.
//!
//! Recognized axes are `x`, `left` and `right` (horizontal) and `y`, `top`
//! and `bottom` (vertical). `right` and `bottom` measure from the opposite
//! edge, so they move against the delta. An axis holds either a bare number
//! or a descriptor map whose numeric `main` entry carries the distance, e.g.
//! `{"main": 10, "unit": "em"}`. Any other map-valued key is a nested layout
//! block and is updated recursively.

use crate::error::{Error, Result};
use crate::model::{Delta, StyleMap, StyleValue};
use crate::util::{MAIN_KEY, normalize};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Axis {
    Horizontal,
    Vertical,
}

fn axis_offset(key: &str, delta: Delta) -> Option<f64> {
    let (axis, sign) = match key {
        "x" | "left" => (Axis::Horizontal, 1.0),
        "right" => (Axis::Horizontal, -1.0),
        "y" | "top" => (Axis::Vertical, 1.0),
        "bottom" => (Axis::Vertical, -1.0),
        _ => return None,
    };
    Some(match axis {
        Axis::Horizontal => sign * delta.dx,
        Axis::Vertical => sign * delta.dy,
    })
}

/// Returns `style` normalized and moved by `delta`, keeping each value's shape.
pub fn compute_position_style(style: &StyleValue, delta: Delta) -> Result<StyleMap> {
    let normalized = normalize(style.clone(), MAIN_KEY, StyleMap::new());
    shift_map(normalized, delta)
}

fn shift_map(map: StyleMap, delta: Delta) -> Result<StyleMap> {
    map.into_iter()
        .map(|(key, value)| {
            let shifted = match axis_offset(&key, delta) {
                Some(offset) => shift_axis(&key, value, offset)?,
                None => match value {
                    StyleValue::Map(nested) => StyleValue::Map(shift_map(nested, delta)?),
                    other => other,
                },
            };
            Ok((key, shifted))
        })
        .collect()
}

fn shift_axis(key: &str, value: StyleValue, offset: f64) -> Result<StyleValue> {
    match value {
        StyleValue::Number(n) => Ok(StyleValue::Number(n + offset)),
        StyleValue::Map(mut descriptor) => {
            match descriptor.get_mut(MAIN_KEY) {
                Some(StyleValue::Number(n)) => *n += offset,
                Some(other) => {
                    return Err(Error::configuration(key, format!("`main` as {}", other.kind())));
                }
                None => return Err(Error::configuration(key, "descriptor without `main`")),
            }
            Ok(StyleValue::Map(descriptor))
        }
        other => Err(Error::configuration(key, other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn xy(x: f64, y: f64) -> StyleValue {
        StyleValue::from([("x", x), ("y", y)])
    }

    fn as_map(value: StyleValue) -> StyleMap {
        match value {
            StyleValue::Map(map) => map,
            other => panic!("expected a map, got {other:?}"),
        }
    }

    #[test]
    fn moves_bare_axes() {
        let moved = compute_position_style(&xy(1.0, 2.0), Delta { dx: 5.0, dy: 8.0 }).unwrap();
        assert_eq!(moved, as_map(xy(6.0, 10.0)));
    }

    #[test]
    fn far_edges_move_against_delta() {
        let style = StyleValue::from([("right", 20.0), ("bottom", 4.0)]);
        let moved = compute_position_style(&style, Delta { dx: 5.0, dy: -2.0 }).unwrap();
        assert_eq!(moved, as_map(StyleValue::from([("right", 15.0), ("bottom", 6.0)])));
    }

    #[test]
    fn descriptor_main_is_updated_in_place() {
        let style = StyleValue::from([(
            "left",
            StyleValue::from([("main", StyleValue::Number(10.0)), ("unit", "em".into())]),
        )]);
        let moved = compute_position_style(&style, Delta { dx: 2.5, dy: 0.0 }).unwrap();
        assert_eq!(
            moved["left"],
            StyleValue::from([("main", StyleValue::Number(12.5)), ("unit", "em".into())])
        );
    }

    #[test]
    fn nested_layout_blocks_and_other_keys() {
        let style = StyleValue::from([
            ("transform", xy(0.0, 0.0)),
            ("opacity", StyleValue::Number(0.5)),
            ("position", "absolute".into()),
        ]);
        let moved = compute_position_style(&style, Delta { dx: 1.0, dy: -1.0 }).unwrap();
        assert_eq!(moved["transform"], xy(1.0, -1.0));
        assert_eq!(moved["opacity"], StyleValue::Number(0.5));
        assert_eq!(moved["position"], StyleValue::from("absolute"));
    }

    #[test]
    fn bare_style_is_not_an_axis() {
        let moved = compute_position_style(&StyleValue::Number(7.0), Delta { dx: 3.0, dy: 3.0 })
            .unwrap();
        assert_eq!(moved, as_map(StyleValue::from([("main", 7.0)])));
    }

    #[test]
    fn rejects_non_numeric_axis() {
        let err = compute_position_style(&StyleValue::from([("x", "auto")]), Delta::ZERO).unwrap_err();
        assert!(matches!(err, Error::Configuration { ref key, .. } if key == "x"));

        let err = compute_position_style(
            &StyleValue::from([("top", StyleValue::from([("unit", "px")]))]),
            Delta::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Configuration { ref key, .. } if key == "top"));

        let nested = StyleValue::from([("transform", StyleValue::from([("y", StyleValue::List(vec![]))]))]);
        assert!(compute_position_style(&nested, Delta::ZERO).is_err());
    }

    fn style_strategy() -> impl Strategy<Value = StyleValue> {
        let number = -1e4f64..1e4;
        prop_oneof![
            number.clone().prop_map(StyleValue::Number),
            (number.clone(), number.clone()).prop_map(|(x, y)| xy(x, y)),
            (number.clone(), number.clone(), number).prop_map(|(l, t, o)| {
                StyleValue::from([
                    ("left", StyleValue::Number(l)),
                    ("top", StyleValue::from([("main", StyleValue::Number(t)), ("unit", "px".into())])),
                    ("opacity", StyleValue::Number(o)),
                ])
            }),
        ]
    }

    proptest! {
        #[test]
        fn zero_delta_only_normalizes(style in style_strategy()) {
            let moved = compute_position_style(&style, Delta::ZERO).unwrap();
            prop_assert_eq!(moved, normalize(style, MAIN_KEY, StyleMap::new()));
        }

        #[test]
        fn deltas_add_up_on_bare_axes(
            x in -1e4f64..1e4, y in -1e4f64..1e4,
            dx1 in -1e3f64..1e3, dy1 in -1e3f64..1e3,
            dx2 in -1e3f64..1e3, dy2 in -1e3f64..1e3,
        ) {
            let style = xy(x, y);
            let once = compute_position_style(&style, Delta { dx: dx1, dy: dy1 }).unwrap();
            let twice = compute_position_style(&StyleValue::Map(once), Delta { dx: dx2, dy: dy2 }).unwrap();
            let combined = compute_position_style(&style, Delta { dx: dx1 + dx2, dy: dy1 + dy2 }).unwrap();
            for key in ["x", "y"] {
                let a = twice[key].as_number().unwrap();
                let b = combined[key].as_number().unwrap();
                prop_assert!((a - b).abs() < 1e-6, "{key}: {a} != {b}");
            }
        }
    }
}
