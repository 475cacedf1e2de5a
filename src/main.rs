use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod navigation;
mod components {
    pub mod button;
    pub mod icons;
    pub mod logo;
    pub mod section_title;
}
mod pages {
    pub mod home;
}

use components::button::{Button, ButtonVariant};
use components::logo::BrandLogo;
use navigation::{scroll_to_section, Section};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_for_offset = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_for_offset.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(navigation::past_scroll_threshold(offset));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Navigating anywhere closes the mobile menu.
    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: Section| {
            scroll_to_section(section);
            menu_open.set(false);
        })
    };

    let nav_links = Section::NAV
        .iter()
        .map(|section| {
            let section = *section;
            let go_to = go_to.clone();
            html! {
                <button
                    key={section.label()}
                    class="nav-link"
                    onclick={Callback::from(move |_: MouseEvent| go_to.emit(section))}
                >
                    { section.label() }
                </button>
            }
        })
        .collect::<Html>();

    let quote_click = {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(Section::Contact))
    };

    let brand_click = {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(Section::Home))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-brand" onclick={brand_click}>
                    <BrandLogo class="nav-logo" />
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    { nav_links }
                    <Button variant={ButtonVariant::Gold} onclick={quote_click}>
                        {"Get Quote"}
                    </Button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NavBar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
