use leptos::prelude::*;

/// Input with optional label, wired to a string callback.
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "password", "number", "date", "datetime-local", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    /// Helper line under the field (e.g. a suggestion hint).
    #[prop(optional, into)]
    hint: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>{l}</label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=disabled
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || hint.get().filter(|h| !h.is_empty()).map(|h| view! {
                <span class="form__hint">{h}</span>
            })}
        </div>
    }
}
