//! Persisted UI preference: whether the operator dismissed the install
//! guidance. The only durable client state besides the auth token.

use web_sys::window;

const DISMISSED_KEY: &str = "pwa_install_dismissed";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn guia_descartada() -> bool {
    local_storage()
        .and_then(|s| s.get_item(DISMISSED_KEY).ok().flatten())
        .is_some()
}

pub fn descartar_guia() {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(DISMISSED_KEY, "true");
    }
}

pub fn restablecer_guia() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(DISMISSED_KEY);
    }
}
