use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 300;

/// Search field with debounce and a clear button. Fires `on_change` only
/// after the user pauses typing, so list screens don't hammer the server.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Each keystroke bumps the generation; only the latest timer fires.
    let generation = StoredValue::new(0u64);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let my_generation = generation.with_value(|g| g + 1);
        generation.set_value(my_generation);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == my_generation {
                on_change.run(new_value);
            }
        });
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        generation.update_value(|g| *g += 1);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear title="Limpiar">
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
