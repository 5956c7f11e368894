use contracts::domain::lote::{Lote, LoteListParams};
use contracts::domain::producto::Producto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::LoteForm;
use crate::domain::lotes::api;
use crate::domain::productos;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Button, Select};
use crate::shared::date_utils::format_fecha;
use crate::shared::icons::icon;
use crate::shared::request_guard::RequestGuard;
use crate::system::auth::guard::RequireAuth;

const PAGE_SIZE: i64 = 10;

#[component]
pub fn LotesPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <LotesList />
        </RequireAuth>
    }
}

#[component]
fn LotesList() -> impl IntoView {
    let items: RwSignal<Vec<Lote>> = RwSignal::new(Vec::new());
    let productos_activos: RwSignal<Vec<Producto>> = RwSignal::new(Vec::new());
    let (page, set_page) = signal(1i64);
    let (pages, set_pages) = signal(1i64);
    let (total, set_total) = signal(0i64);
    let (search, set_search) = signal(String::new());
    let (filtro_producto, set_filtro_producto) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let form_abierto: RwSignal<Option<Option<Lote>>> = RwSignal::new(None);
    let guard = RequestGuard::new();

    let load = {
        let guard = guard.clone();
        move || {
            let token = guard.issue();
            let params = LoteListParams {
                page: Some(page.get_untracked()),
                size: Some(PAGE_SIZE),
                search: Some(search.get_untracked()).filter(|s| !s.is_empty()),
                producto_id: filtro_producto.get_untracked().parse::<i64>().ok(),
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
            search.track();
            filtro_producto.track();
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

    let eliminar = {
        let load = load.clone();
        move |lote: Lote| {
            let confirmado = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!("¿Eliminar el lote '{}'?", lote.numero_lote))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::delete(lote.id).await {
                    Ok(()) => load(),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1>{icon("package")} " Lotes de producción"</h1>
                <div class="page__actions">
                    <Select
                        value=filtro_producto
                        options=opciones_producto
                        on_change=Callback::new(move |v| {
                            set_page.set(1);
                            set_filtro_producto.set(v);
                        })
                    />
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |v| {
                            set_page.set(1);
                            set_search.set(v);
                        })
                        placeholder="Buscar número de lote..."
                    />
                    <Button on_click=Callback::new(move |_| form_abierto.set(Some(None)))>
                        {icon("plus")} " Nuevo lote"
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
                        <th>"Número"</th>
                        <th>"Producto"</th>
                        <th>"Pallets"</th>
                        <th>"Parciales"</th>
                        <th>"Litros"</th>
                        <th>"Producción"</th>
                        <th>"Vencimiento"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|l| l.id
                        children={
                            let eliminar = eliminar.clone();
                            move |lote: Lote| {
                                let editar = lote.clone();
                                let borrar = lote.clone();
                                let eliminar = eliminar.clone();
                                view! {
                                    <tr>
                                        <td class="mono">{lote.numero_lote.clone()}</td>
                                        <td>{lote.producto.as_ref().map(|p| format!("{} - {}", p.codigo, p.nombre)).unwrap_or_default()}</td>
                                        <td>{lote.pallets}</td>
                                        <td>{lote.parciales}</td>
                                        <td>{lote.litros_totales.map(|l| format!("{:.1}", l)).unwrap_or_default()}</td>
                                        <td>{format_fecha(lote.fecha_produccion)}</td>
                                        <td>{lote.fecha_vencimiento.map(format_fecha).unwrap_or_default()}</td>
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
                    <LoteForm
                        editando=editando
                        productos=productos_activos.get()
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
