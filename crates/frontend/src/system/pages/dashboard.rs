use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;

/// Landing page after login: shortcuts to the main screens.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (sesion, _) = use_sesion();

    view! {
        <div class="page">
            <div class="page__header">
                <h1>"Panel principal"</h1>
                <p class="page__subtitle">
                    {move || {
                        sesion
                            .get()
                            .usuario
                            .map(|u| format!("Bienvenido, {}", u.display_name()))
                            .unwrap_or_default()
                    }}
                </p>
            </div>

            <div class="dashboard-cards">
                <A href="/timeline" attr:class="dashboard-card">
                    {icon("calendar")}
                    <h3>"Timeline"</h3>
                    <p>"Estados de línea del día sobre el eje de 24 horas"</p>
                </A>
                <A href="/lotes" attr:class="dashboard-card">
                    {icon("package")}
                    <h3>"Lotes"</h3>
                    <p>"Registro de lotes de producción con validaciones"</p>
                </A>
                <A href="/historial" attr:class="dashboard-card">
                    {icon("history")}
                    <h3>"Historial"</h3>
                    <p>"Libro histórico de lotes con estadísticas y exportación"</p>
                </A>
                <A href="/estados-linea" attr:class="dashboard-card">
                    {icon("clipboard")}
                    <h3>"Estados de línea"</h3>
                    <p>"Registro de paradas, producción y mantenimiento"</p>
                </A>
            </div>
        </div>
    }
}
