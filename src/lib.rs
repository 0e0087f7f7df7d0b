use dioxus::prelude::*;

pub mod activation;
pub mod checkbox;
pub mod class_names;
pub mod context_menu;
pub mod presence;
pub mod settings;
mod ui;

pub use activation::ActivationEvent;
pub use checkbox::{CheckState, CheckTransition, CheckedChange, Checkbox};
pub use settings::MenuSettings;

use ui::checkboxes::Checkboxes;
use ui::showcase::Showcase;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Showcase app demonstrating every component.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Showcase {},
    #[route("/checkboxes")]
    Checkboxes {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        nav {
            Link { to: Route::Showcase {}, "Context menu" }
            Link { to: Route::Checkboxes {}, "Checkboxes" }
        }
        main {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Showcase {}, "Go To Showcase" }
    }
}
