//! A small single-page dashboard: a navigation shell over four views that
//! talk to a JSON REST backend.

pub mod api;
pub mod components;

use dioxus::prelude::*;

use components::{Home, MakeOrder, NavBar, Payment, ViewItems};

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/items")]
        ViewItems {},
        #[route("/orders")]
        MakeOrder {},
        #[route("/payment")]
        Payment {},
}

static MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
