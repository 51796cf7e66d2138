use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod lead {
    pub mod answers;
    pub mod catalog;
    pub mod session;
    pub mod validate;
}
mod components {
    pub mod faq;
    pub mod form_steps;
    pub mod lead_form;
    pub mod motion;
    pub mod reveal;
    pub mod success;
    pub mod trusted_by;
}
mod pages {
    pub mod estate;
    pub mod premium;
}

use components::motion::scroll_to_section;
use pages::{
    estate::{RealEstateLanding, FORM_SECTION_ID},
    premium::{PremiumLanding, CAPTURE_SECTION_ID},
};

/// Scroll offset past which the nav bar turns opaque.
const NAV_SOLID_AFTER_PX: f64 = 80.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/premium")]
    Premium,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <RealEstateLanding /> }
        },
        Route::Premium => {
            info!("Rendering Premium page");
            html! { <PremiumLanding /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let route = use_route::<Route>().unwrap_or(Route::Home);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                    is_scrolled.set(scroll_y > NAV_SOLID_AFTER_PX);
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    // The form section has a different anchor on each page.
    let get_started = {
        let close_menu = close_menu.clone();
        let target = match route {
            Route::Premium => CAPTURE_SECTION_ID,
            _ => FORM_SECTION_ID,
        };
        Callback::from(move |e: MouseEvent| {
            close_menu.emit(e);
            scroll_to_section(target);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"), (route == Route::Premium).then(|| "dark"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"HomeMatch"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Find a Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Premium} classes="nav-link">
                            {"Private Office"}
                        </Link<Route>>
                    </div>
                    <button class="nav-cta" onclick={get_started}>
                        {"Get Started"}
                    </button>
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
        </BrowserRouter>
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
