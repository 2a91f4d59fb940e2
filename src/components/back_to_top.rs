use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll;

/// Floating button that appears once the reader is well below the fold and
/// smooth-scrolls back to the top.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let show = use_state(|| false);

    {
        let show = show.clone();
        use_effect_with_deps(
            move |_| {
                show.set(scroll::show_back_to_top(scroll::scroll_y()));

                let on_scroll = {
                    let show = show.clone();
                    Closure::wrap(Box::new(move || {
                        show.set(scroll::show_back_to_top(scroll::scroll_y()));
                    }) as Box<dyn FnMut()>)
                };
                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    if !*show {
        return html! {};
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_top();
    });

    html! {
        <button class="backtotop" {onclick} aria-label="Back to top" title="Back to top">
            {"↑"}
        </button>
    }
}
