use web_sys::MouseEvent;
use yew::prelude::*;

use crate::{config, scroll};

/// Hero banner with the two primary calls to action. Both buttons scroll
/// in-page; the HTMW mention links out.
#[function_component(Hero)]
pub fn hero() -> Html {
    let go_registration = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section("registration");
    });
    let go_how = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section("how");
    });

    html! {
        <header class="hero" role="banner">
            <div class="container hero__inner">
                <h1 class="hero__title">{"The InvestWest Competition"}</h1>
                <p class="hero__subtitle">
                    {"A national investment challenge created by high school students from \
                      Westchester to promote financial literacy and real-world investing \
                      skills — hosted on "}
                    <a
                        class="link"
                        href={config::HTMW_HOME_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"How The Market Works (HTMW)"}
                    </a>
                    {"."}
                </p>
                <div class="hero__actions">
                    <button class="btn btn--primary" onclick={go_registration}>
                        {"Register Now"}
                    </button>
                    <button class="btn" onclick={go_how}>
                        {"See How It Works"}
                    </button>
                </div>
            </div>
            <div class="hero__wave" aria-hidden="true"></div>
        </header>
    }
}
