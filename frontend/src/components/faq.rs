use yew::prelude::*;

/// Next open item after `index` is clicked: the active item closes, any
/// other opens in its place.
pub fn toggle_active(active: Option<usize>, index: usize) -> Option<usize> {
    if active == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub index: usize,
    pub active: Option<usize>,
    pub question: &'static str,
    pub answer: &'static str,
    pub on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = props.active == Some(props.index);
    let onclick = {
        let index = props.index;
        props.on_toggle.reform(move |_: MouseEvent| index)
    };

    html! {
        <div class={classes!("faq-item", is_open.then(|| "open"))}>
            <button class="faq-question" {onclick}>
                <span>{props.question}</span>
                <span class="faq-sign">{ if is_open { "−" } else { "+" } }</span>
            </button>
            if is_open {
                <div class="faq-answer">
                    <p>{props.answer}</p>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_item_is_open() {
        assert_eq!(toggle_active(None, 1), Some(1));
        assert_eq!(toggle_active(Some(1), 2), Some(2));
        assert_eq!(toggle_active(Some(2), 2), None);
    }
}
