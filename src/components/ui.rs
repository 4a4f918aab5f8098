use dioxus::prelude::*;

/// Styled `button` wrapper: fixed base classes merged with the caller's,
/// remaining attributes and children forwarded verbatim.
#[component]
pub fn Button(
    class: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = button, extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        button {
            class: "px-4 py-2 rounded-lg text-white {class}",
            onclick: move |event| {
                if let Some(handler) = onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

/// Styled container wrapper.
#[component]
pub fn Card(
    class: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        div { class: "p-4 rounded-lg shadow-md {class}", ..attributes, {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { {children} }
    }
}
