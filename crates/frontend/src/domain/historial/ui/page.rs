use chrono::Local;
use contracts::domain::historial::{HistorialEstadisticas, HistorialParams};
use contracts::domain::lote::Lote;
use contracts::domain::producto::Producto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::historial::api;
use crate::domain::productos;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::date_utils::format_fecha;
use crate::shared::download::descargar_bytes;
use crate::shared::icons::icon;
use crate::shared::request_guard::RequestGuard;
use crate::system::auth::guard::RequireAuth;

const PAGE_SIZE: i64 = 20;

#[component]
pub fn HistorialPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <HistorialLedger />
        </RequireAuth>
    }
}

#[component]
fn HistorialLedger() -> impl IntoView {
    let items: RwSignal<Vec<Lote>> = RwSignal::new(Vec::new());
    let estadisticas: RwSignal<Option<HistorialEstadisticas>> = RwSignal::new(None);
    let productos_activos: RwSignal<Vec<Producto>> = RwSignal::new(Vec::new());
    let (page, set_page) = signal(1i64);
    let (pages, set_pages) = signal(1i64);
    let (total, set_total) = signal(0i64);
    let (fecha_desde, set_fecha_desde) = signal(String::new());
    let (fecha_hasta, set_fecha_hasta) = signal(String::new());
    let (filtro_producto, set_filtro_producto) = signal(String::new());
    let (numero_lote, set_numero_lote) = signal(String::new());
    let (orden_campo, set_orden_campo) = signal("fecha_produccion".to_string());
    let (orden_direccion, set_orden_direccion) = signal("desc".to_string());
    let (loading, set_loading) = signal(false);
    let (exportando, set_exportando) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let guard = RequestGuard::new();

    let construir_params = move || HistorialParams {
        page: Some(page.get_untracked()),
        size: Some(PAGE_SIZE),
        fecha_desde: Some(fecha_desde.get_untracked()).filter(|f| !f.is_empty()),
        fecha_hasta: Some(fecha_hasta.get_untracked()).filter(|f| !f.is_empty()),
        producto_id: filtro_producto.get_untracked().parse::<i64>().ok(),
        numero_lote: Some(numero_lote.get_untracked()).filter(|n| !n.is_empty()),
        orden_campo: Some(orden_campo.get_untracked()),
        orden_direccion: Some(orden_direccion.get_untracked()),
    };

    let load = {
        let guard = guard.clone();
        move || {
            let token = guard.issue();
            let params = construir_params();
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                let resultado = api::get(&params).await;
                if !token.is_current() {
                    return;
                }
                match resultado {
                    Ok(data) => {
                        items.set(data.items);
                        estadisticas.set(Some(data.estadisticas));
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
            orden_campo.track();
            orden_direccion.track();
            load();
        }
    });

    Effect::new(move |_| {
        spawn_local(async move {
            match productos::api::list_activos().await {
                Ok(data) => productos_activos.set(data),
                Err(e) => log::error!("No se pudieron cargar los productos: {}", e),
            }
        });
    });

    let aplicar_filtros = {
        let load = load.clone();
        move |_| {
            set_page.set(1);
            load();
        }
    };

    let limpiar_filtros = {
        let load = load.clone();
        move |_| {
            set_fecha_desde.set(String::new());
            set_fecha_hasta.set(String::new());
            set_filtro_producto.set(String::new());
            set_numero_lote.set(String::new());
            set_orden_campo.set("fecha_produccion".to_string());
            set_orden_direccion.set("desc".to_string());
            set_page.set(1);
            load();
        }
    };

    // Column-header sort: same field toggles direction, a new field starts
    // descending.
    let ordenar_por = move |campo: &'static str| {
        if orden_campo.get_untracked() == campo {
            set_orden_direccion.update(|d| {
                *d = if d == "asc" { "desc".to_string() } else { "asc".to_string() }
            });
        } else {
            set_orden_campo.set(campo.to_string());
            set_orden_direccion.set("desc".to_string());
        }
        set_page.set(1);
    };

    let indicador = move |campo: &'static str| {
        if orden_campo.get() == campo {
            if orden_direccion.get() == "asc" { " ▲" } else { " ▼" }
        } else {
            ""
        }
    };

    let exportar = move |_| {
        let params = HistorialParams {
            page: None,
            size: None,
            ..construir_params()
        };
        set_exportando.set(true);
        spawn_local(async move {
            match api::exportar_csv(&params).await {
                Ok(bytes) => {
                    let nombre = format!(
                        "historial_lotes_{}.csv",
                        Local::now().format("%Y%m%d_%H%M%S")
                    );
                    if let Err(e) = descargar_bytes(&bytes, &nombre, "text/csv") {
                        set_error.set(Some(e));
                    }
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_exportando.set(false);
        });
    };

    let opciones_producto = Signal::derive(move || {
        std::iter::once(("".to_string(), "Todos los productos".to_string()))
            .chain(
                productos_activos
                    .get()
                    .iter()
                    .map(|p| (p.id.to_string(), format!("{} - {}", p.codigo, p.nombre))),
            )
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1>{icon("history")} " Historial de producción"</h1>
                <Button on_click=Callback::new(exportar) disabled=Signal::derive(move || exportando.get())>
                    {icon("download")}
                    {move || if exportando.get() { " Exportando..." } else { " Exportar CSV" }}
                </Button>
            </div>

            <div class="filter-panel">
                <Input label="Desde" input_type="date" value=fecha_desde
                    on_input=Callback::new(move |v| set_fecha_desde.set(v)) />
                <Input label="Hasta" input_type="date" value=fecha_hasta
                    on_input=Callback::new(move |v| set_fecha_hasta.set(v)) />
                <Select label="Producto" value=filtro_producto options=opciones_producto
                    on_change=Callback::new(move |v| set_filtro_producto.set(v)) />
                <Input label="Número de lote" value=numero_lote
                    on_input=Callback::new(move |v| set_numero_lote.set(v)) />
                <div class="filter-panel__buttons">
                    <Button on_click=Callback::new(aplicar_filtros)>
                        {icon("search")} " Aplicar"
                    </Button>
                    <Button variant="secondary" on_click=Callback::new(limpiar_filtros)>
                        "Limpiar"
                    </Button>
                </div>
            </div>

            {move || estadisticas.get().map(|e| view! {
                <div class="stats-row">
                    <div class="stat-card">
                        <span class="stat-value">{e.total_lotes}</span>
                        <span class="stat-label">"Lotes"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{format!("{:.0}", e.total_litros)}</span>
                        <span class="stat-label">"Litros"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{e.total_pallets}</span>
                        <span class="stat-label">"Pallets"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{e.total_parciales}</span>
                        <span class="stat-label">"Parciales"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{e.productos_unicos}</span>
                        <span class="stat-label">"Productos"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">
                            {e.fecha_primer_lote.map(format_fecha).unwrap_or_else(|| "-".to_string())}
                            " / "
                            {e.fecha_ultimo_lote.map(format_fecha).unwrap_or_else(|| "-".to_string())}
                        </span>
                        <span class="stat-label">"Primer / último lote"</span>
                    </div>
                </div>
            })}

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
                        <th class="sortable" on:click=move |_| ordenar_por("numero_lote")>
                            "Número" {move || indicador("numero_lote")}
                        </th>
                        <th>"Producto"</th>
                        <th class="sortable" on:click=move |_| ordenar_por("fecha_produccion")>
                            "Producción" {move || indicador("fecha_produccion")}
                        </th>
                        <th>"Vencimiento"</th>
                        <th>"Pallets"</th>
                        <th>"Parciales"</th>
                        <th class="sortable" on:click=move |_| ordenar_por("litros_totales")>
                            "Litros" {move || indicador("litros_totales")}
                        </th>
                        <th>"Observaciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|l| l.id
                        children=move |lote: Lote| {
                            view! {
                                <tr>
                                    <td class="mono">{lote.numero_lote.clone()}</td>
                                    <td>{lote.producto.as_ref().map(|p| format!("{} - {}", p.codigo, p.nombre)).unwrap_or_default()}</td>
                                    <td>{format_fecha(lote.fecha_produccion)}</td>
                                    <td>{lote.fecha_vencimiento.map(format_fecha).unwrap_or_default()}</td>
                                    <td>{lote.pallets}</td>
                                    <td>{lote.parciales}</td>
                                    <td>{lote.litros_totales.map(|l| format!("{:.1}", l)).unwrap_or_default()}</td>
                                    <td>{lote.observaciones.clone().unwrap_or_default()}</td>
                                </tr>
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
