use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer" role="contentinfo">
            <div class="container footer__inner">
                <div class="footer__brand">{"InvestWest"}</div>
                <div class="footer__meta">{"© 2025 InvestWest Competition • All Rights Reserved"}</div>
            </div>
        </footer>
    }
}
