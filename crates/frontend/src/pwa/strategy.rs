//! Decision logic of the caching service worker.
//!
//! The worker script (`assets/sw.js`) executes this exact contract inside
//! the browser's worker context; keeping the decisions here as pure
//! functions makes the policy testable on the host and documents it as an
//! interface any background-fetch-intercept runtime can satisfy.
//!
//! Policy: network first, fall back to cache, app shell for offline
//! navigations. API traffic is never cached.

/// Pre-cached app shell, fetched on install.
pub const APP_SHELL: &[&str] = &["/", "/index.html", "/manifest.json"];

/// Cache holding the app shell.
pub const STATIC_CACHE: &str = "planta-static-v1";
/// Cache populated with successful page-level responses.
pub const DYNAMIC_CACHE: &str = "planta-dynamic-v1";

/// Worker lifecycle: install (pre-cache shell) → activate (drop stale
/// caches) → serving (intercept fetches).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaseWorker {
    Instalando,
    Activando,
    Sirviendo,
}

impl FaseWorker {
    pub fn siguiente(self) -> FaseWorker {
        match self {
            FaseWorker::Instalando => FaseWorker::Activando,
            FaseWorker::Activando | FaseWorker::Sirviendo => FaseWorker::Sirviendo,
        }
    }
}

/// What to do with an intercepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionFetch {
    /// Let the browser handle it untouched.
    Ignorar,
    /// Try the network, fall back to cache.
    RedPrimero,
}

fn esquema(url: &str) -> Option<&str> {
    url.split_once("://").map(|(esquema, _)| esquema)
}

fn ruta(url: &str) -> &str {
    let sin_esquema = url.split_once("://").map(|(_, resto)| resto).unwrap_or(url);
    match sin_esquema.find('/') {
        Some(pos) => &sin_esquema[pos..],
        None => "/",
    }
}

/// Classify an intercepted request. Non-GET, API traffic and non-HTTP
/// schemes (extensions, data URLs) are never served from cache.
pub fn clasificar_request(method: &str, url: &str) -> DecisionFetch {
    if !method.eq_ignore_ascii_case("GET") {
        return DecisionFetch::Ignorar;
    }
    match esquema(url) {
        Some("http") | Some("https") => {}
        _ => return DecisionFetch::Ignorar,
    }
    if ruta(url).starts_with("/api") {
        return DecisionFetch::Ignorar;
    }
    DecisionFetch::RedPrimero
}

/// Only clean 200s enter the dynamic cache; redirects, partials and errors
/// must not shadow the network copy.
pub fn cachear_respuesta(status: u16) -> bool {
    status == 200
}

/// Resolution when the network is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespuestaOffline {
    /// Serve the cached match for this request.
    DesdeCache,
    /// Navigation with no exact match: serve the cached app shell.
    AppShell,
    /// Nothing cached to serve; answer 503.
    NoDisponible,
}

pub fn resolver_offline(es_navegacion: bool, hay_match_en_cache: bool) -> RespuestaOffline {
    if hay_match_en_cache {
        RespuestaOffline::DesdeCache
    } else if es_navegacion {
        RespuestaOffline::AppShell
    } else {
        RespuestaOffline::NoDisponible
    }
}

/// On activate, every cache not named by the current version is deleted.
pub fn cache_obsoleto(nombre: &str) -> bool {
    nombre != STATIC_CACHE && nombre != DYNAMIC_CACHE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_get_http_fuera_de_api() {
        assert_eq!(
            clasificar_request("GET", "https://planta.local/historial"),
            DecisionFetch::RedPrimero
        );
        assert_eq!(
            clasificar_request("POST", "https://planta.local/historial"),
            DecisionFetch::Ignorar
        );
        assert_eq!(
            clasificar_request("GET", "https://planta.local/api/lotes"),
            DecisionFetch::Ignorar
        );
        assert_eq!(
            clasificar_request("GET", "chrome-extension://abc/def"),
            DecisionFetch::Ignorar
        );
        // Origin with no path is the root navigation.
        assert_eq!(
            clasificar_request("GET", "http://planta.local"),
            DecisionFetch::RedPrimero
        );
    }

    #[test]
    fn solo_200_entra_al_cache() {
        assert!(cachear_respuesta(200));
        assert!(!cachear_respuesta(204));
        assert!(!cachear_respuesta(304));
        assert!(!cachear_respuesta(404));
        assert!(!cachear_respuesta(500));
    }

    #[test]
    fn navegacion_sin_cache_sirve_el_shell() {
        assert_eq!(resolver_offline(false, true), RespuestaOffline::DesdeCache);
        assert_eq!(resolver_offline(true, true), RespuestaOffline::DesdeCache);
        assert_eq!(resolver_offline(true, false), RespuestaOffline::AppShell);
        assert_eq!(resolver_offline(false, false), RespuestaOffline::NoDisponible);
    }

    #[test]
    fn activar_elimina_caches_de_versiones_anteriores() {
        assert!(!cache_obsoleto(STATIC_CACHE));
        assert!(!cache_obsoleto(DYNAMIC_CACHE));
        assert!(cache_obsoleto("planta-static-v0"));
        assert!(cache_obsoleto("planta-cache-v1"));
    }

    #[test]
    fn ciclo_de_vida_avanza_hacia_servir() {
        let fase = FaseWorker::Instalando;
        let fase = fase.siguiente();
        assert_eq!(fase, FaseWorker::Activando);
        let fase = fase.siguiente();
        assert_eq!(fase, FaseWorker::Sirviendo);
        assert_eq!(fase.siguiente(), FaseWorker::Sirviendo);
    }

    #[test]
    fn el_shell_incluye_el_documento_raiz() {
        assert!(APP_SHELL.contains(&"/"));
        assert!(APP_SHELL.contains(&"/index.html"));
    }
}
