use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: &'static str,
    pub answer: &'static str,
    #[prop_or_default]
    pub default_open: bool,
}

/// One collapsible FAQ entry. Each item owns its open flag, so toggling one
/// never touches its neighbors.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| props.default_open);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq", (*is_open).then(|| "faq--open"))}>
            <button class="faq__q" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span>{ props.question }</span>
                <span class="faq__chev" aria-hidden="true">{ if *is_open { "▾" } else { "▸" } }</span>
            </button>
            <div class="faq__a">
                <p>{ props.answer }</p>
            </div>
        </div>
    }
}
