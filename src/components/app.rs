use super::{Draggable, RenderTarget, Touchable};
use crate::css::style_attribute;
use crate::model::{StyleMap, StyleValue};
use yew::prelude::*;

// Style descriptors are plain JSON so they can be tweaked without touching the
// component tree.
const CARD_STYLE: &str = r#"{"x": 24, "y": 24}"#;
const PANEL_STYLE: &str = r#"{"left": 24, "top": {"main": 180, "unit": "px"}}"#;
const HANDLE_STYLE: &str = r#"{"x": 12, "y": 12}"#;

fn style(raw: &str) -> StyleValue {
    StyleValue::from_json(raw).unwrap_or_else(|err| {
        log::error!("demo style {raw}: {err}");
        StyleValue::Map(StyleMap::new())
    })
}

fn coord(position: &StyleMap, key: &str) -> String {
    match position.get(key) {
        Some(StyleValue::Number(n)) => format!("{n:.0}"),
        Some(StyleValue::Map(d)) => d
            .get("main")
            .and_then(StyleValue::as_number)
            .map(|n| format!("{n:.0}"))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let last_drag = use_state(|| None::<StyleMap>);

    let on_drag = {
        let last_drag = last_drag.clone();
        Callback::from(move |position: StyleMap| last_drag.set(Some(position)))
    };
    let on_touch_start = Callback::from(|_e: web_sys::TouchEvent| log::debug!("panel grabbed"));

    let card = RenderTarget::render(|position| {
        let css = format!(
            "position:absolute; {} width:120px; padding:8px; background:#1f6feb; border-radius:8px;",
            style_attribute(&position)
        );
        html! {
            <div style={css}>
                { format!("touch me ({}, {})", coord(&position, "x"), coord(&position, "y")) }
            </div>
        }
    });

    let handle = RenderTarget::render(|mut position| {
        // the panel's own offsets arrive through the pass-through as well
        position.retain(|key, _| key == "x" || key == "y");
        let css = format!(
            "position:absolute; {} width:48px; height:48px; background:#d29922; border-radius:24px;",
            style_attribute(&position)
        );
        html! { <div style={css}></div> }
    });

    let panel = {
        let handle = handle.clone();
        RenderTarget::render(move |position| {
            let css = format!(
                "position:absolute; {} width:200px; height:140px; background:#238636; border-radius:8px;",
                style_attribute(&position)
            );
            html! {
                <div style={css}>
                    <Draggable target={handle.clone()} style={style(HANDLE_STYLE)} />
                </div>
            }
        })
    };

    let status = match &*last_drag {
        Some(position) => format!(
            "panel at ({}, {})",
            coord(position, "left"),
            coord(position, "top")
        ),
        None => "drag the green panel".to_string(),
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; touch-action:none;">
            <div style="position:absolute; top:8px; right:12px; font-family:sans-serif;">{ status }</div>
            <Touchable target={card} style={style(CARD_STYLE)} />
            <Draggable target={panel} style={style(PANEL_STYLE)} {on_drag} {on_touch_start} />
        </div>
    }
}
