use contracts::system::auth::{Credenciales, Usuario};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Session state owned by the app root: the access token plus the profile
/// resolved from `/auth/me`. Constructed at app start, cleared on logout.
#[derive(Clone, Debug, Default)]
pub struct Sesion {
    pub token: Option<String>,
    pub usuario: Option<Usuario>,
    /// True while the stored token is being validated on startup.
    pub restaurando: bool,
}

impl Sesion {
    pub fn autenticado(&self) -> bool {
        self.token.is_some() && self.usuario.is_some()
    }

    pub fn es_admin(&self) -> bool {
        self.usuario.as_ref().map(|u| u.es_admin()).unwrap_or(false)
    }
}

/// Provides the session context and restores a stored token on mount by
/// validating it against `/auth/me`. An invalid token is dropped silently.
#[component]
pub fn SesionProvider(children: ChildrenFn) -> impl IntoView {
    let (sesion, set_sesion) = signal(Sesion {
        token: storage::get_token(),
        usuario: None,
        restaurando: storage::get_token().is_some(),
    });

    Effect::new(move |_| {
        if let Some(token) = storage::get_token() {
            spawn_local(async move {
                match api::get_me().await {
                    Ok(usuario) => {
                        set_sesion.set(Sesion {
                            token: Some(token),
                            usuario: Some(usuario),
                            restaurando: false,
                        });
                    }
                    Err(e) => {
                        log::warn!("Token almacenado inválido: {}", e);
                        storage::clear_token();
                        set_sesion.set(Sesion::default());
                    }
                }
            });
        }
    });

    provide_context(sesion);
    provide_context(set_sesion);

    children()
}

/// Hook to access the session signals.
pub fn use_sesion() -> (ReadSignal<Sesion>, WriteSignal<Sesion>) {
    let sesion =
        use_context::<ReadSignal<Sesion>>().expect("SesionProvider not found in component tree");
    let set_sesion =
        use_context::<WriteSignal<Sesion>>().expect("SesionProvider not found in component tree");
    (sesion, set_sesion)
}

/// Login: obtain the token, persist it, resolve the profile.
pub async fn iniciar_sesion(credenciales: Credenciales) -> Result<Usuario, String> {
    let respuesta = api::login(&credenciales).await?;
    storage::save_token(&respuesta.access_token);

    match api::get_me().await {
        Ok(usuario) => Ok(usuario),
        Err(e) => {
            // Profile fetch failed right after login: don't keep a half-open
            // session around.
            storage::clear_token();
            Err(e)
        }
    }
}

/// Logout: drop the token and reset the session state.
pub fn cerrar_sesion(set_sesion: WriteSignal<Sesion>) {
    storage::clear_token();
    set_sesion.set(Sesion::default());
}
