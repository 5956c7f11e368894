use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::AppRoutes;
use crate::system::auth::context::SesionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Offline support: register the caching worker once at startup.
    Effect::new(move |_| {
        spawn_local(async move {
            crate::pwa::sw_client::registrar().await;
        });
    });

    view! {
        <SesionProvider>
            <AppRoutes />
        </SesionProvider>
    }
}
