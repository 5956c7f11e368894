use contracts::system::auth::Usuario;
use contracts::system::users::{Rol, UsuarioCreate, UsuarioUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::system::users::api;

/// Create/edit user dialog. `on_close(true)` means the list must reload.
#[component]
pub fn UsuarioForm(
    editando: Option<Usuario>,
    roles: Vec<Rol>,
    on_close: Callback<bool>,
) -> impl IntoView {
    let es_edicion = editando.is_some();
    let usuario_id = editando.as_ref().map(|u| u.id);

    let (email, set_email) = signal(editando.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let (username, set_username) =
        signal(editando.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(
        editando
            .as_ref()
            .and_then(|u| u.full_name.clone())
            .unwrap_or_default(),
    );
    let (role_id, set_role_id) = signal(
        editando
            .as_ref()
            .map(|u| u.role_id.to_string())
            .unwrap_or_default(),
    );
    let (activo, set_activo) = signal(editando.as_ref().map(|u| u.is_active).unwrap_or(true));
    let (error, set_error) = signal(Option::<String>::None);
    let (guardando, set_guardando) = signal(false);

    let opciones_rol: Vec<(String, String)> = std::iter::once(("".to_string(), "Seleccione un rol".to_string()))
        .chain(roles.iter().map(|r| (r.id.to_string(), r.name.clone())))
        .collect();

    let guardar = move |_| {
        let rol = match role_id.get().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                set_error.set(Some("Debe seleccionar un rol".to_string()));
                return;
            }
        };

        set_guardando.set(true);
        set_error.set(None);

        spawn_local(async move {
            let resultado = match usuario_id {
                Some(id) => {
                    let datos = UsuarioUpdate {
                        email: Some(email.get_untracked()),
                        username: Some(username.get_untracked()),
                        full_name: Some(full_name.get_untracked()).filter(|n| !n.is_empty()),
                        role_id: Some(rol),
                        is_active: Some(activo.get_untracked()),
                    };
                    api::update(id, &datos).await
                }
                None => {
                    let datos = UsuarioCreate {
                        email: email.get_untracked(),
                        username: username.get_untracked(),
                        password: password.get_untracked(),
                        full_name: Some(full_name.get_untracked()).filter(|n| !n.is_empty()),
                        role_id: rol,
                        is_active: Some(activo.get_untracked()),
                    };
                    api::create(&datos).await
                }
            };
            match resultado {
                Ok(_) => on_close.run(true),
                Err(e) => {
                    set_error.set(Some(e));
                    set_guardando.set(false);
                }
            }
        });
    };

    view! {
        <Modal
            title=if es_edicion { "Editar usuario".to_string() } else { "Nuevo usuario".to_string() }
            on_close=Callback::new(move |_| on_close.run(false))
        >
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Input label="Usuario" value=username required=true
                on_input=Callback::new(move |v| set_username.set(v)) />
            <Input label="Email" input_type="email" value=email required=true
                on_input=Callback::new(move |v| set_email.set(v)) />
            <Show when=move || !es_edicion>
                <Input label="Contraseña" input_type="password" value=password required=true
                    on_input=Callback::new(move |v| set_password.set(v)) />
            </Show>
            <Input label="Nombre completo" value=full_name
                on_input=Callback::new(move |v| set_full_name.set(v)) />
            <Select label="Rol" value=role_id options=opciones_rol
                on_change=Callback::new(move |v| set_role_id.set(v)) />
            <Checkbox label="Activo" checked=activo
                on_change=Callback::new(move |v| set_activo.set(v)) />

            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(false))>
                    "Cancelar"
                </Button>
                <Button on_click=Callback::new(guardar) disabled=Signal::derive(move || guardando.get())>
                    {move || if guardando.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>
        </Modal>
    }
}
