//! Trigger a browser download for bytes fetched through the API (CSV export).

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub fn descargar_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("Sin contexto de navegador")?;
    let document = window.document().ok_or("Sin documento")?;

    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes).buffer());

    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_buffer_source_sequence_and_options(&array, &options)
        .map_err(|_| "No se pudo crear el archivo".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "No se pudo crear la URL de descarga".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "No se pudo crear el enlace".to_string())?
        .dyn_into()
        .map_err(|_| "No se pudo crear el enlace".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}
