use leptos::prelude::*;
use leptos_router::components::A;

use crate::pwa::install;
use crate::shared::icons::icon;
use crate::system::auth::context::{cerrar_sesion, use_sesion};
use crate::system::pages::login::LoginPage;

/// Auth-gated frame around every page: sidebar, top bar and content.
/// Shows the login screen while there is no valid session.
#[component]
pub fn AppFrame(children: ChildrenFn) -> impl IntoView {
    let (sesion, _) = use_sesion();
    let children = StoredValue::new(children);

    view! {
        <Show
            when=move || !sesion.get().restaurando
            fallback=|| view! { <div class="app-restoring">"Restaurando sesión..."</div> }
        >
            <Show
                when=move || sesion.get().autenticado()
                fallback=|| view! { <LoginPage /> }
            >
                <div class="app-shell">
                    <Sidebar />
                    <div class="app-main">
                        <TopBar />
                        <InstallBanner />
                        <main class="app-content">{move || children.with_value(|c| c())}</main>
                    </div>
                </div>
            </Show>
        </Show>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let (sesion, _) = use_sesion();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <h2>"Plan Producción"</h2>
            </div>
            <ul class="sidebar__nav">
                <li><A href="/" attr:class="sidebar__link">{icon("layers")} " Panel"</A></li>
                <li><A href="/timeline" attr:class="sidebar__link">{icon("calendar")} " Timeline"</A></li>
                <li><A href="/estados-linea" attr:class="sidebar__link">{icon("clipboard")} " Estados de línea"</A></li>
                <li><A href="/lotes" attr:class="sidebar__link">{icon("package")} " Lotes"</A></li>
                <li><A href="/historial" attr:class="sidebar__link">{icon("history")} " Historial"</A></li>
            </ul>
            <Show when=move || sesion.get().es_admin()>
                <div class="sidebar__section">"Administración"</div>
                <ul class="sidebar__nav">
                    <li><A href="/admin/sectores" attr:class="sidebar__link">{icon("layers")} " Sectores"</A></li>
                    <li><A href="/admin/lineas" attr:class="sidebar__link">{icon("clipboard")} " Líneas"</A></li>
                    <li><A href="/admin/productos" attr:class="sidebar__link">{icon("package")} " Productos"</A></li>
                    <li><A href="/admin/clientes" attr:class="sidebar__link">{icon("users")} " Clientes"</A></li>
                    <li><A href="/admin/usuarios" attr:class="sidebar__link">{icon("user")} " Usuarios"</A></li>
                    <li><A href="/admin/auditoria" attr:class="sidebar__link">{icon("file-text")} " Auditoría"</A></li>
                </ul>
            </Show>
        </nav>
    }
}

/// One-time hint that the app can be installed; the dismissal persists
/// across sessions.
#[component]
fn InstallBanner() -> impl IntoView {
    let (visible, set_visible) = signal(!install::guia_descartada());

    let descartar = move |_| {
        install::descartar_guia();
        set_visible.set(false);
    };

    view! {
        <Show when=move || visible.get()>
            <div class="install-banner">
                <span>
                    "Esta aplicación puede instalarse en el dispositivo desde el menú del navegador."
                </span>
                <button class="button button--ghost" on:click=descartar>
                    "No mostrar de nuevo"
                </button>
            </div>
        </Show>
    }
}

#[component]
fn TopBar() -> impl IntoView {
    let (sesion, set_sesion) = use_sesion();

    let logout = move |_| {
        cerrar_sesion(set_sesion);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    };

    view! {
        <header class="topbar">
            <span class="topbar__user">
                {icon("user")}
                {move || {
                    sesion
                        .get()
                        .usuario
                        .map(|u| u.display_name().to_string())
                        .unwrap_or_default()
                }}
            </span>
            <A href="/cuenta" attr:class="topbar__link">"Mi cuenta"</A>
            <button class="button button--ghost" on:click=logout title="Cerrar sesión">
                {icon("log-out")} " Salir"
            </button>
        </header>
    }
}
