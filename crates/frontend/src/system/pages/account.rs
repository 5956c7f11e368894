use contracts::system::auth::{CambioPassword, PerfilUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::pwa::install;
use crate::pwa::sw_client::{enviar_control, ControlWorker};
use crate::shared::components::ui::{Button, Input};
use crate::system::auth::api;
use crate::system::auth::context::use_sesion;

/// Profile editing plus password change for the logged-in user.
#[component]
pub fn AccountPage() -> impl IntoView {
    let (sesion, set_sesion) = use_sesion();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (perfil_msg, set_perfil_msg) = signal(Option::<Result<String, String>>::None);
    let (guardando_perfil, set_guardando_perfil) = signal(false);

    // Seed the form once the profile is resolved.
    Effect::new(move |_| {
        if let Some(usuario) = sesion.get().usuario {
            set_username.set(usuario.username.clone());
            set_email.set(usuario.email.clone());
            set_full_name.set(usuario.full_name.clone().unwrap_or_default());
        }
    });

    let guardar_perfil = move |_| {
        let datos = PerfilUpdate {
            username: Some(username.get()),
            email: Some(email.get()),
            full_name: Some(full_name.get()),
        };
        set_guardando_perfil.set(true);
        set_perfil_msg.set(None);
        spawn_local(async move {
            match api::update_perfil(&datos).await {
                Ok(usuario) => {
                    set_sesion.update(|s| s.usuario = Some(usuario));
                    set_perfil_msg.set(Some(Ok("Perfil actualizado".to_string())));
                }
                Err(e) => set_perfil_msg.set(Some(Err(e))),
            }
            set_guardando_perfil.set(false);
        });
    };

    let (pass_actual, set_pass_actual) = signal(String::new());
    let (pass_nueva, set_pass_nueva) = signal(String::new());
    let (pass_confirmacion, set_pass_confirmacion) = signal(String::new());
    let (pass_msg, set_pass_msg) = signal(Option::<Result<String, String>>::None);
    let (cambiando_pass, set_cambiando_pass) = signal(false);

    let cambiar_password = move |_| {
        if pass_nueva.get() != pass_confirmacion.get() {
            set_pass_msg.set(Some(Err("Las contraseñas no coinciden".to_string())));
            return;
        }
        let datos = CambioPassword {
            current_password: pass_actual.get(),
            new_password: pass_nueva.get(),
            confirm_password: pass_confirmacion.get(),
        };
        set_cambiando_pass.set(true);
        set_pass_msg.set(None);
        spawn_local(async move {
            match api::cambiar_password(&datos).await {
                Ok(respuesta) => {
                    set_pass_msg.set(Some(Ok(respuesta.message)));
                    set_pass_actual.set(String::new());
                    set_pass_nueva.set(String::new());
                    set_pass_confirmacion.set(String::new());
                }
                Err(e) => set_pass_msg.set(Some(Err(e))),
            }
            set_cambiando_pass.set(false);
        });
    };

    let mensaje = |msg: Option<Result<String, String>>| {
        msg.map(|m| match m {
            Ok(texto) => view! { <div class="success-message">{texto}</div> }.into_any(),
            Err(texto) => view! { <div class="error-message">{texto}</div> }.into_any(),
        })
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1>"Mi cuenta"</h1>
            </div>

            <div class="card">
                <h3>"Datos del perfil"</h3>
                {move || mensaje(perfil_msg.get())}
                <Input label="Usuario" value=username on_input=Callback::new(move |v| set_username.set(v)) />
                <Input label="Email" input_type="email" value=email on_input=Callback::new(move |v| set_email.set(v)) />
                <Input label="Nombre completo" value=full_name on_input=Callback::new(move |v| set_full_name.set(v)) />
                <Button on_click=Callback::new(guardar_perfil) disabled=Signal::derive(move || guardando_perfil.get())>
                    "Guardar cambios"
                </Button>
            </div>

            <div class="card">
                <h3>"Cambiar contraseña"</h3>
                {move || mensaje(pass_msg.get())}
                <Input label="Contraseña actual" input_type="password" value=pass_actual
                    on_input=Callback::new(move |v| set_pass_actual.set(v)) />
                <Input label="Contraseña nueva" input_type="password" value=pass_nueva
                    on_input=Callback::new(move |v| set_pass_nueva.set(v)) />
                <Input label="Confirmar contraseña" input_type="password" value=pass_confirmacion
                    on_input=Callback::new(move |v| set_pass_confirmacion.set(v)) />
                <Button on_click=Callback::new(cambiar_password) disabled=Signal::derive(move || cambiando_pass.get())>
                    "Cambiar contraseña"
                </Button>
            </div>

            <div class="card">
                <h3>"Aplicación"</h3>
                <p class="form__hint">
                    "Controles del almacenamiento sin conexión y la versión instalada."
                </p>
                <div class="form__row">
                    <Button variant="secondary"
                        on_click=Callback::new(move |_| enviar_control(&ControlWorker::SkipWaiting))>
                        "Activar versión pendiente"
                    </Button>
                    <Button variant="secondary"
                        on_click=Callback::new(move |_| enviar_control(&ControlWorker::ClearCache))>
                        "Limpiar caché"
                    </Button>
                    <Button variant="secondary"
                        on_click=Callback::new(move |_| install::restablecer_guia())>
                        "Mostrar guía de instalación"
                    </Button>
                </div>
            </div>
        </div>
    }
}
