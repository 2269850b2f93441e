pub mod app;
pub mod draggable;
pub mod touchable;

pub use draggable::{Draggable, DraggableProps, PassThrough};
pub use touchable::{Touchable, TouchableProps};

use crate::model::StyleMap;
use yew::prelude::*;

/// What a gesture component renders: a fixed element, or a function of the
/// tracked position.
#[derive(Clone, PartialEq)]
pub enum RenderTarget {
    Element(Html),
    Render(Callback<StyleMap, Html>),
}

impl RenderTarget {
    pub fn render(f: impl Fn(StyleMap) -> Html + 'static) -> Self {
        RenderTarget::Render(Callback::from(f))
    }

    pub fn resolve(&self, position: &StyleMap) -> Html {
        match self {
            RenderTarget::Element(html) => html.clone(),
            RenderTarget::Render(render) => render.emit(position.clone()),
        }
    }
}

impl From<Html> for RenderTarget {
    fn from(html: Html) -> Self {
        RenderTarget::Element(html)
    }
}

impl From<Callback<StyleMap, Html>> for RenderTarget {
    fn from(render: Callback<StyleMap, Html>) -> Self {
        RenderTarget::Render(render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StyleValue;

    #[test]
    fn element_ignores_position() {
        let target = RenderTarget::from(html! { <span>{"fixed"}</span> });
        let position = StyleMap::from([("x".to_string(), StyleValue::Number(1.0))]);
        assert_eq!(target.resolve(&position), html! { <span>{"fixed"}</span> });
    }

    #[test]
    fn render_function_sees_position() {
        let target = RenderTarget::render(|position| {
            let x = position.get("x").and_then(StyleValue::as_number).unwrap_or_default();
            html! { <span>{ x.to_string() }</span> }
        });
        let position = StyleMap::from([("x".to_string(), StyleValue::Number(4.0))]);
        assert_eq!(target.resolve(&position), html! { <span>{ "4" }</span> });
    }
}
