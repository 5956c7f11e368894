use contracts::common::ListParams;
use contracts::domain::sector::Sector;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::SectorForm;
use crate::domain::sectores::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::request_guard::RequestGuard;
use crate::system::auth::guard::RequireAdmin;

const PAGE_SIZE: i64 = 10;

#[component]
pub fn SectoresPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <SectoresList />
        </RequireAdmin>
    }
}

#[component]
fn SectoresList() -> impl IntoView {
    let items: RwSignal<Vec<Sector>> = RwSignal::new(Vec::new());
    let (page, set_page) = signal(1i64);
    let (pages, set_pages) = signal(1i64);
    let (total, set_total) = signal(0i64);
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let form_abierto: RwSignal<Option<Option<Sector>>> = RwSignal::new(None);
    let guard = RequestGuard::new();

    let load = {
        let guard = guard.clone();
        move || {
            let token = guard.issue();
            let params = ListParams {
                page: Some(page.get_untracked()),
                size: Some(PAGE_SIZE),
                search: Some(search.get_untracked()).filter(|s| !s.is_empty()),
                activo: None,
            };
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                let resultado = api::list(&params).await;
                if !token.is_current() {
                    return;
                }
                match resultado {
                    Ok(data) => {
                        items.set(data.items);
                        set_pages.set(data.pages);
                        set_total.set(data.total);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
                set_loading.set(false);
            });
        }
    };

    Effect::new({
        let load = load.clone();
        move |_| {
            page.track();
            search.track();
            load();
        }
    });

    let eliminar = {
        let load = load.clone();
        move |sector: Sector| {
            let confirmado = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!("¿Eliminar el sector '{}'?", sector.nombre))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::delete(sector.id).await {
                    Ok(()) => load(),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1>{icon("layers")} " Sectores"</h1>
                <div class="page__actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |v| {
                            set_page.set(1);
                            set_search.set(v);
                        })
                        placeholder="Buscar sector..."
                    />
                    <Button on_click=Callback::new(move |_| form_abierto.set(Some(None)))>
                        {icon("plus")} " Nuevo sector"
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
                        <th>"Nombre"</th>
                        <th>"Descripción"</th>
                        <th>"Activo"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|s| s.id
                        children={
                            let eliminar = eliminar.clone();
                            move |sector: Sector| {
                                let editar = sector.clone();
                                let borrar = sector.clone();
                                let eliminar = eliminar.clone();
                                view! {
                                    <tr>
                                        <td>{sector.nombre.clone()}</td>
                                        <td>{sector.descripcion.clone().unwrap_or_default()}</td>
                                        <td>
                                            <span class=if sector.activo { "badge badge--ok" } else { "badge badge--off" }>
                                                {if sector.activo { "Sí" } else { "No" }}
                                            </span>
                                        </td>
                                        <td class="data-table__actions">
                                            <button class="button button--icon" title="Editar"
                                                on:click=move |_| form_abierto.set(Some(Some(editar.clone())))>
                                                {icon("edit")}
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

            <PaginationControls
                page=page
                pages=pages
                total=total
                on_page_change=Callback::new(move |p| set_page.set(p))
            />

            {move || form_abierto.get().map(|editando| {
                let load = load.clone();
                view! {
                    <SectorForm
                        editando=editando
                        on_close=Callback::new(move |guardado: bool| {
                            form_abierto.set(None);
                            if guardado {
                                load();
                            }
                        })
                    />
                }
            })}
        </div>
    }
}
