use dioxus::prelude::*;

/// Static landing view. No state, no side effects.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "text-center",
            h2 { class: "text-4xl font-bold mb-4", "Welcome to the Dashboard" }
            p { class: "text-xl", "Manage your items, orders, and payments effortlessly!" }
        }
    }
}
