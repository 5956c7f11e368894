use leptos::prelude::*;

use super::context::use_sesion;

/// Renders children only for an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (sesion, _) = use_sesion();

    view! {
        <Show
            when=move || sesion.get().autenticado()
            fallback=|| view! { <div class="auth-denied">"Debe iniciar sesión para continuar."</div> }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for the admin role.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (sesion, _) = use_sesion();

    view! {
        <Show
            when=move || sesion.get().es_admin()
            fallback=|| view! { <div class="auth-denied">"Acceso restringido a administradores."</div> }
        >
            {children()}
        </Show>
    }
}
