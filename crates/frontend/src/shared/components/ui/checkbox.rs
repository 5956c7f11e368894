use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <label class="form__checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span>{label}</span>
        </label>
    }
}
