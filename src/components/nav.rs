use dioxus::prelude::*;

use crate::Route;

/// Persistent shell: the header with its four navigation links stays put
/// while the routed view swaps inside the main region.
#[component]
pub fn NavBar() -> Element {
    rsx! {
        div { class: "bg-blue-900 min-h-screen text-blue-100",
            header { class: "bg-blue-700 shadow-lg p-4",
                nav { class: "flex justify-between",
                    h1 { class: "text-2xl font-bold", "Dashboard" }
                    div {
                        Link { to: Route::Home {}, class: "mr-4 hover:text-blue-300", "Home" }
                        Link {
                            to: Route::ViewItems {},
                            class: "mr-4 hover:text-blue-300",
                            "View Items"
                        }
                        Link {
                            to: Route::MakeOrder {},
                            class: "mr-4 hover:text-blue-300",
                            "Make Order"
                        }
                        Link { to: Route::Payment {}, class: "hover:text-blue-300", "Payment" }
                    }
                }
            }
            main { class: "p-8", Outlet::<Route> {} }
        }
    }
}
