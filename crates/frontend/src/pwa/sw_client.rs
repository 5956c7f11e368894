//! App-side handle to the caching service worker: registration plus the
//! two control messages of the worker contract.

use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::JsFuture;

/// Control messages the worker accepts via `postMessage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlWorker {
    /// Activate a waiting worker immediately.
    #[serde(rename = "SKIP_WAITING")]
    SkipWaiting,
    /// Drop every named cache.
    #[serde(rename = "CLEAR_CACHE")]
    ClearCache,
}

/// Register the worker script. Failure only degrades offline support, so
/// it is logged and otherwise ignored.
pub async fn registrar() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let container = window.navigator().service_worker();
    match JsFuture::from(container.register("/sw.js")).await {
        Ok(_) => log::info!("Service worker registrado"),
        Err(e) => log::warn!("No se pudo registrar el service worker: {:?}", e),
    }
}

/// Send a control message to the active worker, if any.
pub fn enviar_control(mensaje: &ControlWorker) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(controller) = window.navigator().service_worker().controller() else {
        return;
    };
    match serde_wasm_bindgen::to_value(mensaje) {
        Ok(valor) => {
            if let Err(e) = controller.post_message(&valor) {
                log::warn!("No se pudo enviar el mensaje al worker: {:?}", e);
            }
        }
        Err(e) => log::warn!("No se pudo serializar el mensaje de control: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensajes_de_control_en_el_formato_del_worker() {
        let skip = serde_json::to_value(ControlWorker::SkipWaiting).unwrap();
        assert_eq!(skip, serde_json::json!({"type": "SKIP_WAITING"}));
        let clear = serde_json::to_value(ControlWorker::ClearCache).unwrap();
        assert_eq!(clear, serde_json::json!({"type": "CLEAR_CACHE"}));
    }
}
