use yew::prelude::*;
use web_sys::Element;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::motion::is_in_view;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let check = move || {
                if let (Some(window), Some(element)) = (web_sys::window(), node.cast::<Element>()) {
                    let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                    if is_in_view(element.get_bounding_client_rect().top(), viewport) {
                        visible.set(true);
                    }
                }
            };
            check();

            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
