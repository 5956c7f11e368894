use leptos::prelude::*;

/// Button with variants (primary, secondary, danger, ghost).
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] button_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button button--secondary",
        "danger" => "button button--danger",
        "ghost" => "button button--ghost",
        _ => "button button--primary",
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=variant_class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
