use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod content;
mod scroll;
mod components {
    pub mod back_to_top;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod section;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

/// Fixed navbar: brand button scrolls home, one button per anchored section.
/// Picks up a solid background once the page is scrolled at all.
#[function_component(Navbar)]
fn navbar() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                is_scrolled.set(scroll::nav_scrolled(scroll::scroll_y()));

                let on_scroll = {
                    let is_scrolled = is_scrolled.clone();
                    Closure::wrap(Box::new(move || {
                        is_scrolled.set(scroll::nav_scrolled(scroll::scroll_y()));
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

    let to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_top();
    });

    html! {
        <nav class={classes!("nav", (*is_scrolled).then(|| "nav--scrolled"))}>
            <div class="container nav__inner">
                <button class="brand" onclick={to_top} aria-label="Back to top">
                    {"InvestWest"}
                </button>

                <ul class="nav__list" role="menubar" aria-label="Site sections">
                    { for content::NAV_ITEMS.iter().map(|item| {
                        let id = item.id;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll::scroll_to_section(id);
                        });
                        html! {
                            <li role="none">
                                <button class="nav__link" role="menuitem" {onclick}>
                                    { item.label }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </div>

            <style>
                {r#"
                .nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: transparent;
                    transition: background 0.2s ease, box-shadow 0.2s ease;
                }

                .nav--scrolled {
                    background: rgba(255, 255, 255, 0.96);
                    box-shadow: 0 2px 12px rgba(16, 42, 84, 0.12);
                }

                .nav__inner {
                    height: 72px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }

                .brand {
                    background: none;
                    border: none;
                    font-size: 1.2rem;
                    font-weight: 800;
                    letter-spacing: -0.01em;
                    color: inherit;
                    cursor: pointer;
                }

                .nav .brand {
                    color: #ffffff;
                }

                .nav--scrolled .brand {
                    color: #0b2447;
                }

                .nav__list {
                    display: flex;
                    gap: 0.25rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    flex-wrap: wrap;
                }

                .nav__link {
                    background: none;
                    border: none;
                    padding: 0.45rem 0.7rem;
                    border-radius: 8px;
                    color: #dbe4f3;
                    font-weight: 500;
                    cursor: pointer;
                }

                .nav__link:hover {
                    background: rgba(255, 255, 255, 0.12);
                    color: #ffffff;
                }

                .nav--scrolled .nav__link {
                    color: #334155;
                }

                .nav--scrolled .nav__link:hover {
                    background: #eef2f8;
                    color: #0b2447;
                }

                @media (max-width: 820px) {
                    .nav__inner {
                        height: auto;
                        padding-top: 0.5rem;
                        padding-bottom: 0.5rem;
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Navbar />
            <Home />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting InvestWest site");
    yew::Renderer::<App>::new().render();
}
