// Shared helpers: defaults normalization and logger setup.

use crate::model::{StyleMap, StyleValue};

pub const MAIN_KEY: &str = "main";

/// Turns a scalar-or-structure value into a keyed map layered over `defaults`.
///
/// Scalars and lists land under `main_key`; maps are merged with their own
/// keys taking precedence.
pub fn normalize(value: StyleValue, main_key: &str, defaults: StyleMap) -> StyleMap {
    let mut out = defaults;
    match value {
        StyleValue::Map(map) => out.extend(map),
        other => {
            out.insert(main_key.to_string(), other);
        }
    }
    out
}

/// Routes `log` records to the browser console.
pub fn init_logging(level: log::Level) {
    wasm_logger::init(wasm_logger::Config::new(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, StyleValue)]) -> StyleMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn scalar_goes_under_main_key() {
        assert_eq!(
            normalize(5.0.into(), MAIN_KEY, StyleMap::new()),
            map(&[("main", 5.0.into())])
        );
    }

    #[test]
    fn map_is_kept_as_is() {
        let value = StyleValue::from([("main", 5.0), ("extra", 1.0)]);
        assert_eq!(
            normalize(value, MAIN_KEY, StyleMap::new()),
            map(&[("main", 5.0.into()), ("extra", 1.0.into())])
        );
    }

    #[test]
    fn list_is_treated_as_scalar() {
        let list = StyleValue::List(vec![1.0.into(), 2.0.into()]);
        assert_eq!(
            normalize(list.clone(), MAIN_KEY, StyleMap::new()),
            map(&[("main", list)])
        );
    }

    #[test]
    fn value_keys_override_defaults() {
        let defaults = map(&[("main", 0.0.into()), ("unit", "px".into())]);
        assert_eq!(
            normalize(StyleValue::from([("unit", "em")]), MAIN_KEY, defaults.clone()),
            map(&[("main", 0.0.into()), ("unit", "em".into())])
        );
        assert_eq!(
            normalize(3.0.into(), "width", defaults),
            map(&[("main", 0.0.into()), ("unit", "px".into()), ("width", 3.0.into())])
        );
    }
}
