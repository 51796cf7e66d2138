use yew::prelude::*;

use super::motion::{clamp_drag, drag_tilt};

const COMPANIES: [&str; 7] = [
    "Goldman Sachs",
    "BlackRock",
    "JP Morgan",
    "Knight Frank",
    "Sotheby’s",
    "CBRE",
    "Christie’s",
];

/// Row of institution names the visitor can drag sideways; the row tilts
/// toward the drag direction.
#[function_component(TrustedBy)]
pub fn trusted_by() -> Html {
    let offset = use_state_eq(|| 0.0_f64);
    // Pointer x minus offset at the moment the drag started.
    let drag_origin = use_state_eq(|| None::<f64>);

    let on_down = {
        let offset = offset.clone();
        let drag_origin = drag_origin.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drag_origin.set(Some(e.client_x() as f64 - *offset));
        })
    };

    let on_move = {
        let offset = offset.clone();
        let drag_origin = drag_origin.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(origin) = *drag_origin {
                offset.set(clamp_drag(e.client_x() as f64 - origin));
            }
        })
    };

    let on_release = {
        let drag_origin = drag_origin.clone();
        Callback::from(move |_: MouseEvent| drag_origin.set(None))
    };

    let style = format!(
        "transform: translateX({}px) rotateY({}deg);",
        *offset,
        drag_tilt(*offset)
    );

    html! {
        <section class="trusted-by">
            <p class="trusted-by-caption">{"Trusted by institutions & private offices"}</p>
            <div
                class={classes!("trusted-by-row", drag_origin.is_some().then(|| "dragging"))}
                {style}
                onmousedown={on_down}
                onmousemove={on_move}
                onmouseup={on_release.clone()}
                onmouseleave={on_release}
            >
                { for COMPANIES.iter().map(|name| html! {
                    <div class="trusted-by-card">{*name}</div>
                }) }
            </div>
        </section>
    }
}
