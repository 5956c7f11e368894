use contracts::system::auth::Credenciales;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{iniciar_sesion, use_sesion, Sesion};
use crate::system::auth::storage;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_sesion) = use_sesion();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let credenciales = Credenciales {
            username: username.get(),
            password: password.get(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match iniciar_sesion(credenciales).await {
                Ok(usuario) => {
                    set_sesion.set(Sesion {
                        token: storage::get_token(),
                        usuario: Some(usuario),
                        restaurando: false,
                    });
                    set_is_loading.set(false);
                    // Land on the dashboard regardless of where login ran.
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Plan de Producción"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="username">"Usuario"</label>
                        <input
                            type="text"
                            id="username"
                            class="form__input"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            class="form__input"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
