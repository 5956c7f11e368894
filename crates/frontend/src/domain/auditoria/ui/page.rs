use contracts::domain::auditoria::{
    AuditoriaListParams, EstadisticasAuditoria, FiltrosAuditoria, RegistroAuditoria,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::auditoria::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::date_utils::format_fecha_hora;
use crate::shared::icons::icon;
use crate::shared::request_guard::RequestGuard;
use crate::system::auth::guard::RequireAdmin;

const PAGE_SIZE: i64 = 20;

/// Read-only viewer of the append-only audit log.
#[component]
pub fn AuditoriaPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AuditoriaList />
        </RequireAdmin>
    }
}

fn snapshot_legible(raw: &Option<String>) -> Option<String> {
    RegistroAuditoria::snapshot(raw)
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .or_else(|| raw.clone())
}

#[component]
fn AuditoriaList() -> impl IntoView {
    let items: RwSignal<Vec<RegistroAuditoria>> = RwSignal::new(Vec::new());
    let filtros_disponibles: RwSignal<Option<FiltrosAuditoria>> = RwSignal::new(None);
    let estadisticas: RwSignal<Option<EstadisticasAuditoria>> = RwSignal::new(None);
    let (page, set_page) = signal(1i64);
    let (pages, set_pages) = signal(1i64);
    let (total, set_total) = signal(0i64);
    let (filtro_accion, set_filtro_accion) = signal(String::new());
    let (filtro_entidad, set_filtro_entidad) = signal(String::new());
    let (fecha_desde, set_fecha_desde) = signal(String::new());
    let (fecha_hasta, set_fecha_hasta) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    // Row whose before/after snapshots are expanded.
    let (expandido, set_expandido) = signal(Option::<i64>::None);
    let guard = RequestGuard::new();

    let load = {
        let guard = guard.clone();
        move || {
            let token = guard.issue();
            let params = AuditoriaListParams {
                page: Some(page.get_untracked()),
                size: Some(PAGE_SIZE),
                accion: Some(filtro_accion.get_untracked()).filter(|a| !a.is_empty()),
                entidad: Some(filtro_entidad.get_untracked()).filter(|e| !e.is_empty()),
                fecha_desde: Some(fecha_desde.get_untracked()).filter(|f| !f.is_empty()),
                fecha_hasta: Some(fecha_hasta.get_untracked()).filter(|f| !f.is_empty()),
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
            let desde = Some(fecha_desde.get_untracked()).filter(|f| !f.is_empty());
            let hasta = Some(fecha_hasta.get_untracked()).filter(|f| !f.is_empty());
            spawn_local(async move {
                match api::estadisticas(desde, hasta).await {
                    Ok(data) => estadisticas.set(Some(data)),
                    Err(e) => log::error!("No se pudieron cargar las estadísticas: {}", e),
                }
            });
        }
    };

    Effect::new({
        let load = load.clone();
        move |_| {
            page.track();
            filtro_accion.track();
            filtro_entidad.track();
            fecha_desde.track();
            fecha_hasta.track();
            load();
        }
    });

    Effect::new(move |_| {
        spawn_local(async move {
            match api::filtros().await {
                Ok(data) => filtros_disponibles.set(Some(data)),
                Err(e) => log::error!("No se pudieron cargar los filtros: {}", e),
            }
        });
    });

    let opciones_accion = Signal::derive(move || {
        std::iter::once(("".to_string(), "Todas las acciones".to_string()))
            .chain(
                filtros_disponibles
                    .get()
                    .map(|f| f.acciones)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|a| (a.clone(), a)),
            )
            .collect::<Vec<_>>()
    });

    let opciones_entidad = Signal::derive(move || {
        std::iter::once(("".to_string(), "Todas las entidades".to_string()))
            .chain(
                filtros_disponibles
                    .get()
                    .map(|f| f.entidades)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|e| (e.clone(), e)),
            )
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1>{icon("file-text")} " Auditoría"</h1>
                {move || estadisticas.get().map(|e| view! {
                    <span class="page__subtitle">{format!("{} registros en total", e.total_logs)}</span>
                })}
            </div>

            <div class="filter-panel">
                <Select label="Acción" value=filtro_accion options=opciones_accion
                    on_change=Callback::new(move |v| {
                        set_page.set(1);
                        set_filtro_accion.set(v);
                    }) />
                <Select label="Entidad" value=filtro_entidad options=opciones_entidad
                    on_change=Callback::new(move |v| {
                        set_page.set(1);
                        set_filtro_entidad.set(v);
                    }) />
                <Input label="Desde" input_type="date" value=fecha_desde
                    on_input=Callback::new(move |v| {
                        set_page.set(1);
                        set_fecha_desde.set(v);
                    }) />
                <Input label="Hasta" input_type="date" value=fecha_hasta
                    on_input=Callback::new(move |v| {
                        set_page.set(1);
                        set_fecha_hasta.set(v);
                    }) />
            </div>

            {move || error.get().map(|e| {
                let load = load.clone();
                view! {
                    <div class="error-message">
                        {e}
                        <button class="button button--secondary" on:click=move |_| load()>
                            "Reintentar"
                        </button>
                    </div>
                }
            })}

            <Show when=move || loading.get()>
                <div class="loading">"Cargando..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Fecha"</th>
                        <th>"Usuario"</th>
                        <th>"Acción"</th>
                        <th>"Entidad"</th>
                        <th>"Descripción"</th>
                        <th>"IP"</th>
                        <th>"Detalle"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|r| r.id
                        children=move |registro: RegistroAuditoria| {
                            let id = registro.id;
                            let anteriores = snapshot_legible(&registro.datos_anteriores);
                            let nuevos = snapshot_legible(&registro.datos_nuevos);
                            let clase_accion = format!("badge badge--{}", registro.accion);
                            view! {
                                <tr>
                                    <td>{format_fecha_hora(registro.fecha_hora)}</td>
                                    <td>{registro.usuario_username.clone().unwrap_or_else(|| "sistema".to_string())}</td>
                                    <td>
                                        <span class=clase_accion>
                                            {registro.accion_label.clone().unwrap_or_else(|| registro.accion.clone())}
                                        </span>
                                    </td>
                                    <td>
                                        {registro.entidad_label.clone().unwrap_or_else(|| registro.entidad.clone())}
                                        {format!(" #{}", registro.entidad_id)}
                                    </td>
                                    <td>{registro.entidad_descripcion.clone().unwrap_or_default()}</td>
                                    <td class="mono">{registro.ip_address.clone().unwrap_or_default()}</td>
                                    <td>
                                        <Button
                                            variant="ghost"
                                            on_click=Callback::new(move |_| {
                                                set_expandido.update(|actual| {
                                                    *actual = if *actual == Some(id) { None } else { Some(id) };
                                                });
                                            })
                                        >
                                            {move || if expandido.get() == Some(id) { "Ocultar" } else { "Ver" }}
                                        </Button>
                                    </td>
                                </tr>
                                <Show when=move || expandido.get() == Some(id)>
                                    <tr class="audit-detail-row">
                                        <td colspan="7">
                                            <div class="audit-snapshots">
                                                <div class="audit-snapshot">
                                                    <h4>"Datos anteriores"</h4>
                                                    <pre>{anteriores.clone().unwrap_or_else(|| "—".to_string())}</pre>
                                                </div>
                                                <div class="audit-snapshot">
                                                    <h4>"Datos nuevos"</h4>
                                                    <pre>{nuevos.clone().unwrap_or_else(|| "—".to_string())}</pre>
                                                </div>
                                            </div>
                                        </td>
                                    </tr>
                                </Show>
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
        </div>
    }
}
