use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::auditoria::ui::AuditoriaPage;
use crate::domain::clientes::ui::ClientesPage;
use crate::domain::estados_linea::ui::EstadosLineaPage;
use crate::domain::historial::ui::HistorialPage;
use crate::domain::lineas::ui::LineasPage;
use crate::domain::lotes::ui::LotesPage;
use crate::domain::productos::ui::ProductosPage;
use crate::domain::sectores::ui::SectoresPage;
use crate::domain::timeline::ui::TimelinePage;
use crate::layout::AppFrame;
use crate::system::pages::account::AccountPage;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::UsuariosPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page">"Página no encontrada"</div> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/") view=|| view! { <AppFrame><DashboardPage /></AppFrame> } />
                <Route path=path!("/timeline") view=|| view! { <AppFrame><TimelinePage /></AppFrame> } />
                <Route path=path!("/estados-linea") view=|| view! { <AppFrame><EstadosLineaPage /></AppFrame> } />
                <Route path=path!("/lotes") view=|| view! { <AppFrame><LotesPage /></AppFrame> } />
                <Route path=path!("/historial") view=|| view! { <AppFrame><HistorialPage /></AppFrame> } />
                <Route path=path!("/cuenta") view=|| view! { <AppFrame><AccountPage /></AppFrame> } />
                <Route path=path!("/admin/sectores") view=|| view! { <AppFrame><SectoresPage /></AppFrame> } />
                <Route path=path!("/admin/lineas") view=|| view! { <AppFrame><LineasPage /></AppFrame> } />
                <Route path=path!("/admin/productos") view=|| view! { <AppFrame><ProductosPage /></AppFrame> } />
                <Route path=path!("/admin/clientes") view=|| view! { <AppFrame><ClientesPage /></AppFrame> } />
                <Route path=path!("/admin/usuarios") view=|| view! { <AppFrame><UsuariosPage /></AppFrame> } />
                <Route path=path!("/admin/auditoria") view=|| view! { <AppFrame><AuditoriaPage /></AppFrame> } />
            </Routes>
        </Router>
    }
}
