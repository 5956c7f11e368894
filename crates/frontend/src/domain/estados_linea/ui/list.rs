use contracts::common::ListParams;
use contracts::domain::estado_linea::{EstadoLinea, EstadoLineaListParams, TipoEstado};
use contracts::domain::linea::Linea;
use contracts::domain::sector::Sector;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::EstadoLineaForm;
use crate::domain::estados_linea::api;
use crate::domain::lineas;
use crate::domain::sectores;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Button, Select};
use crate::shared::date_utils::{duracion_legible, format_fecha_hora};
use crate::shared::icons::icon;
use crate::shared::request_guard::RequestGuard;
use crate::system::auth::guard::RequireAuth;

const PAGE_SIZE: i64 = 15;

#[component]
pub fn EstadosLineaPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <EstadosLineaList />
        </RequireAuth>
    }
}

#[component]
fn EstadosLineaList() -> impl IntoView {
    let items: RwSignal<Vec<EstadoLinea>> = RwSignal::new(Vec::new());
    let sectores: RwSignal<Vec<Sector>> = RwSignal::new(Vec::new());
    let lineas: RwSignal<Vec<Linea>> = RwSignal::new(Vec::new());
    let (page, set_page) = signal(1i64);
    let (pages, set_pages) = signal(1i64);
    let (total, set_total) = signal(0i64);
    let (filtro_sector, set_filtro_sector) = signal(String::new());
    let (filtro_linea, set_filtro_linea) = signal(String::new());
    let (filtro_tipo, set_filtro_tipo) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let form_abierto: RwSignal<Option<Option<EstadoLinea>>> = RwSignal::new(None);
    let guard = RequestGuard::new();

    let load = {
        let guard = guard.clone();
        move || {
            let token = guard.issue();
            let params = EstadoLineaListParams {
                page: Some(page.get_untracked()),
                size: Some(PAGE_SIZE),
                sector_id: filtro_sector.get_untracked().parse::<i64>().ok(),
                linea_id: filtro_linea.get_untracked().parse::<i64>().ok(),
                tipo_estado: Some(filtro_tipo.get_untracked()).filter(|t| !t.is_empty()),
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
            filtro_sector.track();
            filtro_linea.track();
            filtro_tipo.track();
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
        spawn_local(async move {
            match lineas::api::list_activas().await {
                Ok(data) => lineas.set(data),
                Err(e) => log::error!("No se pudieron cargar las líneas: {}", e),
            }
        });
    });

    let opciones_sector = Signal::derive(move || {
        std::iter::once(("".to_string(), "Todos los sectores".to_string()))
            .chain(sectores.get().iter().map(|s| (s.id.to_string(), s.nombre.clone())))
            .collect::<Vec<_>>()
    });

    // Changing sector resets the line filter and narrows its options.
    let opciones_linea = Signal::derive(move || {
        let sector = filtro_sector.get().parse::<i64>().ok();
        std::iter::once(("".to_string(), "Todas las líneas".to_string()))
            .chain(
                lineas
                    .get()
                    .iter()
                    .filter(|l| sector.map(|s| l.sector_id == s).unwrap_or(true))
                    .map(|l| (l.id.to_string(), l.nombre.clone())),
            )
            .collect::<Vec<_>>()
    });

    let opciones_tipo = Signal::derive(move || {
        std::iter::once(("".to_string(), "Todos los tipos".to_string()))
            .chain(
                TipoEstado::ALL
                    .iter()
                    .map(|t| (t.value().to_string(), t.label().to_string())),
            )
            .collect::<Vec<_>>()
    });

    let eliminar = {
        let load = load.clone();
        move |estado: EstadoLinea| {
            let confirmado = web_sys::window()
                .map(|w| w.confirm_with_message("¿Eliminar este estado de línea?").unwrap_or(false))
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::delete(estado.id).await {
                    Ok(()) => load(),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1>{icon("clipboard")} " Estados de línea"</h1>
                <div class="page__actions">
                    <Select
                        value=filtro_sector
                        options=opciones_sector
                        on_change=Callback::new(move |v| {
                            set_page.set(1);
                            set_filtro_sector.set(v);
                            set_filtro_linea.set(String::new());
                        })
                    />
                    <Select
                        value=filtro_linea
                        options=opciones_linea
                        on_change=Callback::new(move |v| {
                            set_page.set(1);
                            set_filtro_linea.set(v);
                        })
                    />
                    <Select
                        value=filtro_tipo
                        options=opciones_tipo
                        on_change=Callback::new(move |v| {
                            set_page.set(1);
                            set_filtro_tipo.set(v);
                        })
                    />
                    <Button on_click=Callback::new(move |_| form_abierto.set(Some(None)))>
                        {icon("plus")} " Nuevo estado"
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
                        <th>"Sector"</th>
                        <th>"Línea"</th>
                        <th>"Tipo"</th>
                        <th>"Inicio"</th>
                        <th>"Fin"</th>
                        <th>"Duración"</th>
                        <th>"Observaciones"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|e| e.id
                        children={
                            let eliminar = eliminar.clone();
                            move |estado: EstadoLinea| {
                                let editar = estado.clone();
                                let borrar = estado.clone();
                                let eliminar = eliminar.clone();
                                let tipo_label = estado
                                    .tipo_estado_label
                                    .clone()
                                    .or_else(|| TipoEstado::from_value(&estado.tipo_estado).map(|t| t.label().to_string()))
                                    .unwrap_or_else(|| estado.tipo_estado.clone());
                                let clase_tipo = format!("estado-chip estado-{}", estado.tipo_estado);
                                view! {
                                    <tr>
                                        <td>{estado.sector.as_ref().map(|s| s.nombre.clone()).unwrap_or_default()}</td>
                                        <td>{estado.linea.as_ref().map(|l| l.nombre.clone()).unwrap_or_default()}</td>
                                        <td><span class=clase_tipo>{tipo_label}</span></td>
                                        <td>{format_fecha_hora(estado.fecha_hora_inicio)}</td>
                                        <td>{estado.fecha_hora_fin.map(format_fecha_hora).unwrap_or_else(|| "En curso".to_string())}</td>
                                        <td>{estado.duracion_minutos.map(duracion_legible).unwrap_or_default()}</td>
                                        <td>{estado.observaciones.clone().unwrap_or_default()}</td>
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
                    <EstadoLineaForm
                        editando=editando
                        sectores=sectores.get()
                        lineas=lineas.get()
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
