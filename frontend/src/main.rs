use yew::prelude::*;
use log::info;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};

mod config;
mod hooks;
mod motion {
    pub mod counter;
    pub mod frame;
    pub mod scroll;
    pub mod viewport;
}
mod components {
    pub mod cards;
    pub mod counter;
    pub mod floating_ball;
    pub mod icons;
}
mod pages {
    pub mod landing;
}

use components::icons::{Icon, IconSvg};
use hooks::use_scroll_past;
use pages::landing::{Landing, CONTACT_ANCHOR, NAV_LINKS};

fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Logo)]
fn logo() -> Html {
    html! {
        <svg viewBox="0 0 240 80" aria-label="Pure Pilates Franchising">
            <g transform="translate(10, 10) scale(0.6)">
                <circle cx="20" cy="20" r="16" fill="#D6001C" />
                <path d="M 22 36 C 22 36, 25 50, 35 55 C 45 60, 50 65, 48 75 C 46 85, 30 85, 25 75 C 20 65, 15 55, 22 36 Z" fill="#111" />
                <circle cx="45" cy="80" r="6" fill="#111" />
                <path d="M 18 30 L 25 45 L 30 40 Z" fill="#111" />
            </g>
            <g transform="translate(55, 15)">
                <text x="0" y="35" font-family="'Montserrat', sans-serif" font-weight="800" font-size="42" fill="#D6001C" letter-spacing="-1">{"Pure"}</text>
                <text x="2" y="58" font-family="'Montserrat', sans-serif" font-weight="600" font-size="11" fill="#111" letter-spacing="2.5">{"FRANCHISING"}</text>
            </g>
        </svg>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scroll_past(config::NAV_SCROLL_THRESHOLD);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links still navigate to their anchor, this only folds the menu away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let on_logo = Callback::from(|_: MouseEvent| scroll_to_top());

    let links = |onclick: Option<Callback<MouseEvent>>| -> Html {
        NAV_LINKS
            .iter()
            .map(|(name, href)| {
                html! {
                    <a key={*href} href={*href} class="nav-link" onclick={onclick.clone()}>
                        { *name }
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="container nav-content">
                <button type="button" class="nav-logo" onclick={on_logo}>
                    <Logo />
                </button>

                <div class="nav-links">
                    { links(None) }
                    <a href={CONTACT_ANCHOR} class="button button-primary button-small">
                        {"Seja Franqueado"}
                    </a>
                </div>

                <button type="button" class="burger-menu" onclick={toggle_menu}>
                    <IconSvg icon={if *menu_open { Icon::Close } else { Icon::Menu }} size={28} />
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { links(Some(close_menu.clone())) }
                            <a href={CONTACT_ANCHOR} class="button button-primary button-large" onclick={close_menu.clone()}>
                                {"Quero conversar"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
