use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod forms;
mod motion;

mod components {
    pub mod contact;
    pub mod hero;
    pub mod marquee;
    pub mod pricing;
    pub mod showcase;
    pub mod testimonials;
}
mod pages {
    pub mod faq;
    pub mod landing;
}

use pages::{faq::Faq, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    // Tint the bar once the page has moved off the very top.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("window");
                let window_clone = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    let scrolled = window_clone.scroll_y().unwrap_or(0.0) > 24.0;
                    is_scrolled.set(scrolled);
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .expect("attach nav scroll listener");
                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 10;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(12, 12, 14, 0.9);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid rgba(245, 242, 234, 0.08);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1.1rem 1.5rem;
                    }
                    .nav-logo {
                        color: #f5f2ea;
                        font-size: 1.2rem;
                        text-decoration: none;
                        letter-spacing: 0.05em;
                    }
                    .nav-right { display: flex; gap: 1.8rem; align-items: center; }
                    .nav-link, .nav-anchor {
                        color: rgba(245, 242, 234, 0.75);
                        text-decoration: none;
                        font-size: 0.95rem;
                    }
                    .nav-link:hover, .nav-anchor:hover { color: #e8ff63; }
                    .burger-menu { display: none; }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                            background: none;
                            border: none;
                            cursor: pointer;
                        }
                        .burger-menu span {
                            display: block;
                            width: 22px;
                            height: 2px;
                            margin: 5px 0;
                            background: #f5f2ea;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem;
                            background: rgba(12, 12, 14, 0.97);
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"kairo"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="/#work" class="nav-anchor" onclick={close_menu.clone()}>{"Work"}</a>
                    <a href="/#pricing" class="nav-anchor" onclick={close_menu.clone()}>{"Pricing"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                    <a href="/#contact" class="nav-anchor" onclick={close_menu}>{"Contact"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <footer style="padding: 2.5rem 1.5rem; text-align: center; background: #0c0c0e; color: rgba(245, 242, 234, 0.4); font-size: 0.85rem;">
                {"© 2026 Kairo Studio — sites that move."}
            </footer>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
