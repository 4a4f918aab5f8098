use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::api::{self, ApiError, Item, OrderRequest};
use crate::components::Button;

pub const ORDER_PLACED: &str = "Order placed successfully!";
pub const ORDER_FAILED: &str = "Error placing the order. Please try again.";

/// Order placement view. Fetches the selectable items once on mount; a
/// failed fetch leaves the selector without options and the form otherwise
/// usable.
#[component]
pub fn MakeOrder() -> Element {
    let fetched = use_resource(|| async {
        match api::fetch_items().await {
            Ok(items) => items,
            Err(err) => {
                error!("failed to fetch items for the order form: {err}");
                Vec::new()
            }
        }
    });

    let items = fetched.cloned().unwrap_or_default();

    rsx! {
        OrderFormView { items }
    }
}

/// The controlled order form. Options come in as props so the form renders
/// independently of the fetch.
#[component]
pub fn OrderFormView(items: Vec<Item>) -> Element {
    let mut form = use_signal(OrderRequest::default);
    let mut message = use_signal(|| None::<&'static str>);

    let submit = move |_: FormEvent| async move {
        let request = form();
        let result = api::place_order(&request).await;
        if let Err(err) = &result {
            error!("failed to place order: {err}");
        }
        message.set(Some(apply_submit_result(&mut form.write(), result)));
    };

    rsx! {
        div { class: "max-w-xl mx-auto bg-blue-800 p-6 rounded-lg shadow-md",
            h2 { class: "text-2xl font-bold mb-4", "Make an Order" }
            form { onsubmit: submit,
                label { class: "block mb-2", "Item:" }
                select {
                    name: "item_id",
                    class: "w-full p-2 mb-4 rounded-md bg-blue-900 text-blue-100 border border-blue-500",
                    required: true,
                    value: "{form.read().item_id}",
                    oninput: move |event| form.write().item_id = event.value(),
                    option { value: "", "Select an item" }
                    for item in items {
                        option { key: "{item.id}", value: "{item.id}", {item.option_label()} }
                    }
                }
                label { class: "block mb-2", "Quantity:" }
                input {
                    r#type: "number",
                    name: "quantity",
                    class: "w-full p-2 mb-4 rounded-md bg-blue-900 text-blue-100 border border-blue-500",
                    placeholder: "Enter quantity",
                    required: true,
                    value: "{form.read().quantity}",
                    oninput: move |event| form.write().quantity = event.value(),
                }
                Button { r#type: "submit", class: "w-full bg-blue-500 hover:bg-blue-600", "Place Order" }
            }
            {message().map(|msg| rsx! {
                p { class: "mt-4 text-center text-blue-300", "{msg}" }
            })}
        }
    }
}

/// Applies one submission outcome to the form state and picks the status
/// message: success clears the form, failure keeps it so the user can
/// resubmit without retyping.
pub fn apply_submit_result(form: &mut OrderRequest, result: Result<(), ApiError>) -> &'static str {
    match result {
        Ok(()) => {
            *form = OrderRequest::default();
            ORDER_PLACED
        }
        Err(_) => ORDER_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> OrderRequest {
        OrderRequest {
            item_id: "1".into(),
            quantity: "3".into(),
        }
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let mut form = filled_form();
        let message = apply_submit_result(&mut form, Ok(()));
        assert_eq!(message, ORDER_PLACED);
        assert_eq!(form, OrderRequest::default());
    }

    #[test]
    fn failed_submission_keeps_the_form_for_resubmission() {
        let mut form = filled_form();
        let before = form.clone();
        let message = apply_submit_result(
            &mut form,
            Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)),
        );
        assert_eq!(message, ORDER_FAILED);
        assert_eq!(form, before);
    }
}
