use contracts::system::auth::Usuario;
use contracts::system::users::{ResetPassword, Rol, UsuariosListParams};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::UsuarioForm;
use crate::shared::components::modal::Modal;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Button, Input};
use crate::shared::date_utils::format_fecha_hora;
use crate::shared::icons::icon;
use crate::shared::request_guard::RequestGuard;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;

#[component]
pub fn UsuariosPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsuariosList />
        </RequireAdmin>
    }
}

#[component]
fn UsuariosList() -> impl IntoView {
    let usuarios: RwSignal<Vec<Usuario>> = RwSignal::new(Vec::new());
    let roles: RwSignal<Vec<Rol>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    // None = closed, Some(None) = create, Some(Some(u)) = edit
    let form_abierto: RwSignal<Option<Option<Usuario>>> = RwSignal::new(None);
    let reset_para: RwSignal<Option<Usuario>> = RwSignal::new(None);
    let guard = RequestGuard::new();

    let load = {
        let guard = guard.clone();
        move || {
            let token = guard.issue();
            let params = UsuariosListParams {
                limit: Some(100),
                search: Some(search.get_untracked()).filter(|s| !s.is_empty()),
                ..Default::default()
            };
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                let resultado = api::list(&params).await;
                if !token.is_current() {
                    return;
                }
                match resultado {
                    Ok(data) => usuarios.set(data),
                    Err(e) => set_error.set(Some(e)),
                }
                set_loading.set(false);
            });
        }
    };

    Effect::new({
        let load = load.clone();
        move |_| {
            search.track();
            load();
        }
    });

    Effect::new(move |_| {
        spawn_local(async move {
            match api::roles().await {
                Ok(data) => roles.set(data),
                Err(e) => log::error!("No se pudieron cargar los roles: {}", e),
            }
        });
    });

    let eliminar = {
        let load = load.clone();
        move |usuario: Usuario| {
            let confirmado = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!("¿Eliminar el usuario '{}'?", usuario.username))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::delete(usuario.id).await {
                    Ok(()) => load(),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    let alternar_activo = {
        let load = load.clone();
        move |id: i64| {
            let load = load.clone();
            spawn_local(async move {
                match api::toggle_active(id).await {
                    Ok(_) => load(),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1>{icon("users")} " Usuarios"</h1>
                <div class="page__actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |v| set_search.set(v))
                        placeholder="Buscar por usuario o email..."
                    />
                    <Button on_click=Callback::new(move |_| form_abierto.set(Some(None)))>
                        {icon("plus")} " Nuevo usuario"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show when=move || loading.get()>
                <div class="loading">"Cargando..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Usuario"</th>
                        <th>"Nombre"</th>
                        <th>"Email"</th>
                        <th>"Rol"</th>
                        <th>"Activo"</th>
                        <th>"Creado"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || usuarios.get()
                        key=|u| u.id
                        children={
                            let eliminar = eliminar.clone();
                            let alternar_activo = alternar_activo.clone();
                            move |usuario: Usuario| {
                                let editar = usuario.clone();
                                let borrar = usuario.clone();
                                let reset = usuario.clone();
                                let eliminar = eliminar.clone();
                                let alternar_activo = alternar_activo.clone();
                                view! {
                                    <tr>
                                        <td>{usuario.username.clone()}</td>
                                        <td>{usuario.full_name.clone().unwrap_or_default()}</td>
                                        <td>{usuario.email.clone()}</td>
                                        <td>{usuario.role_name.clone()}</td>
                                        <td>
                                            <button
                                                class=if usuario.is_active { "badge badge--ok" } else { "badge badge--off" }
                                                on:click=move |_| alternar_activo(usuario.id)
                                                title="Activar / desactivar"
                                            >
                                                {if usuario.is_active { "Sí" } else { "No" }}
                                            </button>
                                        </td>
                                        <td>{usuario.created_at.map(format_fecha_hora).unwrap_or_default()}</td>
                                        <td class="data-table__actions">
                                            <button class="button button--icon" title="Editar"
                                                on:click=move |_| form_abierto.set(Some(Some(editar.clone())))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="Restablecer contraseña"
                                                on:click=move |_| reset_para.set(Some(reset.clone()))>
                                                {icon("user")}
                                            </button>
                                            <button class="button button--icon" title="Eliminar"
                                                on:click=move |_| eliminar(borrar.clone())>
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        }
                    />
                </tbody>
            </table>

            {move || form_abierto.get().map(|editando| {
                let load = load.clone();
                view! {
                    <UsuarioForm
                        editando=editando
                        roles=roles.get()
                        on_close=Callback::new(move |guardado: bool| {
                            form_abierto.set(None);
                            if guardado {
                                load();
                            }
                        })
                    />
                }
            })}

            {move || reset_para.get().map(|usuario| view! {
                <ResetPasswordModal usuario=usuario on_close=Callback::new(move |_| reset_para.set(None)) />
            })}
        </div>
    }
}

#[component]
fn ResetPasswordModal(usuario: Usuario, on_close: Callback<()>) -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (guardando, set_guardando) = signal(false);
    let usuario_id = usuario.id;

    let guardar = move |_| {
        let datos = ResetPassword {
            new_password: password.get(),
        };
        set_guardando.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::reset_password(usuario_id, &datos).await {
                Ok(_) => on_close.run(()),
                Err(e) => {
                    set_error.set(Some(e));
                    set_guardando.set(false);
                }
            }
        });
    };

    view! {
        <Modal
            title=format!("Restablecer contraseña de {}", usuario.username)
            on_close=Callback::new(move |_| on_close.run(()))
        >
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            <Input
                label="Contraseña nueva"
                input_type="password"
                value=password
                on_input=Callback::new(move |v| set_password.set(v))
            />
            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                    "Cancelar"
                </Button>
                <Button on_click=Callback::new(guardar) disabled=Signal::derive(move || guardando.get())>
                    "Guardar"
                </Button>
            </div>
        </Modal>
    }
}
