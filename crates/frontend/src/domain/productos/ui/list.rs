use contracts::common::ListParams;
use contracts::domain::producto::Producto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::ProductoForm;
use crate::domain::productos::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::request_guard::RequestGuard;
use crate::system::auth::guard::RequireAdmin;

const PAGE_SIZE: i64 = 10;

#[component]
pub fn ProductosPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <ProductosList />
        </RequireAdmin>
    }
}

#[component]
fn ProductosList() -> impl IntoView {
    let items: RwSignal<Vec<Producto>> = RwSignal::new(Vec::new());
    let (page, set_page) = signal(1i64);
    let (pages, set_pages) = signal(1i64);
    let (total, set_total) = signal(0i64);
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let form_abierto: RwSignal<Option<Option<Producto>>> = RwSignal::new(None);
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
        move |producto: Producto| {
            let confirmado = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!("¿Eliminar el producto '{}'?", producto.nombre))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match api::delete(producto.id).await {
                    Ok(()) => load(),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1>{icon("package")} " Productos"</h1>
                <div class="page__actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |v| {
                            set_page.set(1);
                            set_search.set(v);
                        })
                        placeholder="Buscar por código o nombre..."
                    />
                    <Button on_click=Callback::new(move |_| form_abierto.set(Some(None)))>
                        {icon("plus")} " Nuevo producto"
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
                        <th>"Código"</th>
                        <th>"Nombre"</th>
                        <th>"Formato de lote"</th>
                        <th>"Cliente"</th>
                        <th>"Litros/unidad"</th>
                        <th>"Vencimiento (años)"</th>
                        <th>"Activo"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|p| p.id
                        children={
                            let eliminar = eliminar.clone();
                            move |producto: Producto| {
                                let editar = producto.clone();
                                let borrar = producto.clone();
                                let eliminar = eliminar.clone();
                                view! {
                                    <tr>
                                        <td>{producto.codigo.clone()}</td>
                                        <td>{producto.nombre.clone()}</td>
                                        <td>{producto.formato_lote.clone().unwrap_or_default()}</td>
                                        <td>{producto.cliente.as_ref().map(|c| c.nombre.clone()).unwrap_or_default()}</td>
                                        <td>{producto.litros_por_unidad.map(|l| format!("{:.2}", l)).unwrap_or_default()}</td>
                                        <td>{producto.anos_vencimiento.map(|a| a.to_string()).unwrap_or_default()}</td>
                                        <td>
                                            <span class=if producto.activo { "badge badge--ok" } else { "badge badge--off" }>
                                                {if producto.activo { "Sí" } else { "No" }}
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
                    <ProductoForm
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
