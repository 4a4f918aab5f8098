use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::api::{self, Item};
use crate::components::{Button, Card, CardContent};

/// Item listing view. Fetches the collection once on mount; the resource
/// is dropped with the scope, so a late response never touches a replaced
/// view.
#[component]
pub fn ViewItems() -> Element {
    let items = use_resource(|| async {
        match api::fetch_items().await {
            Ok(items) => Ok(items),
            Err(err) => {
                error!("failed to fetch items: {err}");
                Err(err)
            }
        }
    });

    // A failed fetch keeps its error in the resource but renders exactly
    // like an empty collection.
    let items = items.read();
    match &*items {
        None => rsx! {
            p { "Loading items..." }
        },
        Some(Ok(items)) => rsx! {
            ItemGrid { items: items.clone() }
        },
        Some(Err(_)) => rsx! {
            ItemGrid { items: Vec::new() }
        },
    }
}

/// One card per item, or the empty-state message.
#[component]
pub fn ItemGrid(items: Vec<Item>) -> Element {
    if items.is_empty() {
        return rsx! {
            p { "No items available." }
        };
    }

    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
            for item in items {
                Card { key: "{item.id}", class: "bg-blue-800 text-blue-100",
                    CardContent {
                        h3 { class: "text-xl font-bold", "{item.name}" }
                        p { "Category: {item.category}" }
                        p { "Quantity: {item.quantity}" }
                        p { "Description: {item.description}" }
                        Button { class: "mt-4 bg-blue-500 hover:bg-blue-600", "View Details" }
                    }
                }
            }
        }
    }
}
