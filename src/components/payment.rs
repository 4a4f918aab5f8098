use dioxus::prelude::*;

use crate::components::Button;

/// Payment form placeholder. No submit handler, no state, no network call;
/// submission falls through to default browser behavior.
#[component]
pub fn Payment() -> Element {
    rsx! {
        div { class: "max-w-xl mx-auto bg-blue-800 p-6 rounded-lg shadow-md",
            h2 { class: "text-2xl font-bold mb-4", "Make a Payment" }
            form {
                label { class: "block mb-2", "Order ID:" }
                input {
                    r#type: "text",
                    class: "w-full p-2 mb-4 rounded-md bg-blue-900 text-blue-100 border border-blue-500",
                    placeholder: "Enter order ID",
                }
                label { class: "block mb-2", "Amount:" }
                input {
                    r#type: "number",
                    class: "w-full p-2 mb-4 rounded-md bg-blue-900 text-blue-100 border border-blue-500",
                    placeholder: "Enter amount",
                }
                Button { r#type: "submit", class: "w-full bg-blue-500 hover:bg-blue-600", "Pay Now" }
            }
        }
    }
}
