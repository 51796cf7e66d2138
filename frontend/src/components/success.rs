use yew::prelude::*;

use crate::lead::catalog::Variant;

#[derive(Properties, PartialEq)]
pub struct SuccessViewProps {
    pub variant: Variant,
}

#[function_component(SuccessView)]
pub fn success_view(props: &SuccessViewProps) -> Html {
    let catalog = props.variant.catalog();

    html! {
        <div class={classes!("success-view", props.variant.class())}>
            <div class="success-icon">{"✓"}</div>
            <h3 class="success-title">{catalog.success_title}</h3>
            { for catalog.success_body.iter().map(|line| html! {
                <p class="success-body">{*line}</p>
            }) }
        </div>
    }
}
