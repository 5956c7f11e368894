use contracts::common::ListParams;
use contracts::domain::linea::{Linea, LineaListParams};
use contracts::domain::sector::Sector;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::LineaForm;
use crate::domain::lineas::api;
use crate::domain::sectores;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Button, Select};
use crate::shared::icons::icon;
use crate::shared::request_guard::RequestGuard;
use crate::system::auth::guard::RequireAdmin;

const PAGE_SIZE: i64 = 10;

#[component]
pub fn LineasPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <LineasList />
        </RequireAdmin>
    }
}

#[component]
fn LineasList() -> impl IntoView {
    let items: RwSignal<Vec<Linea>> = RwSignal::new(Vec::new());
    let sectores: RwSignal<Vec<Sector>> = RwSignal::new(Vec::new());
    let (page, set_page) = signal(1i64);
    let (pages, set_pages) = signal(1i64);
    let (total, set_total) = signal(0i64);
    let (search, set_search) = signal(String::new());
    let (filtro_sector, set_filtro_sector) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let form_abierto: RwSignal<Option<Option<Linea>>> = RwSignal::new(None);
    let guard = RequestGuard::new();

    let load = {
        let guard = guard.clone();
        move || {
            let token = guard.issue();
            let params = LineaListParams {
                page: Some(page.get_untracked()),
                size: Some(PAGE_SIZE),
                search: Some(search.get_untracked()).filter(|s| !s.is_empty()),
                activo: None,
                sector_id: filtro_sector.get_untracked().parse::<i64>().ok(),
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
            filtro_sector.track();
            load();
        }
    });

    Effect::new(move |_| {
        spawn_local(async move {
            match sectores::api::list(&ListParams::activos(100)).await {
                Ok(data) => sectores.set(data.items),
                Err(e) => log::error!("No se pudieron cargar los sectores: {}", e),
            }
        });
    });

    let opciones_sector = Signal::derive(move || {
        std::iter::once(("".to_string(), "Todos los sectores".to_string()))
            .chain(sectores.get().iter().map(|s| (s.id.to_string(), s.nombre.clone())))
            .collect::<Vec<_>>()
    });

    let eliminar = {
        let load = load.clone();
        move |linea: Linea| {
            let confirmado = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!("¿Eliminar la línea '{}'?", linea.nombre))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::delete(linea.id).await {
                    Ok(()) => load(),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1>{icon("clipboard")} " Líneas de producción"</h1>
                <div class="page__actions">
                    <Select
                        value=filtro_sector
                        options=opciones_sector
                        on_change=Callback::new(move |v| {
                            set_page.set(1);
                            set_filtro_sector.set(v);
                        })
                    />
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |v| {
                            set_page.set(1);
                            set_search.set(v);
                        })
                        placeholder="Buscar línea..."
                    />
                    <Button on_click=Callback::new(move |_| form_abierto.set(Some(None)))>
                        {icon("plus")} " Nueva línea"
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
                        <th>"Sector"</th>
                        <th>"Descripción"</th>
                        <th>"Activo"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|l| l.id
                        children={
                            let eliminar = eliminar.clone();
                            move |linea: Linea| {
                                let editar = linea.clone();
                                let borrar = linea.clone();
                                let eliminar = eliminar.clone();
                                view! {
                                    <tr>
                                        <td>{linea.nombre.clone()}</td>
                                        <td>{linea.sector.as_ref().map(|s| s.nombre.clone()).unwrap_or_default()}</td>
                                        <td>{linea.descripcion.clone().unwrap_or_default()}</td>
                                        <td>
                                            <span class=if linea.activo { "badge badge--ok" } else { "badge badge--off" }>
                                                {if linea.activo { "Sí" } else { "No" }}
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
                    <LineaForm
                        editando=editando
                        sectores=sectores.get()
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
