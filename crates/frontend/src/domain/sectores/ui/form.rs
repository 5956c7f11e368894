use contracts::domain::sector::{Sector, SectorCreate, SectorUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::sectores::api;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Button, Checkbox, Input, Textarea};

#[component]
pub fn SectorForm(editando: Option<Sector>, on_close: Callback<bool>) -> impl IntoView {
    let sector_id = editando.as_ref().map(|s| s.id);
    let (nombre, set_nombre) =
        signal(editando.as_ref().map(|s| s.nombre.clone()).unwrap_or_default());
    let (descripcion, set_descripcion) = signal(
        editando
            .as_ref()
            .and_then(|s| s.descripcion.clone())
            .unwrap_or_default(),
    );
    let (activo, set_activo) = signal(editando.as_ref().map(|s| s.activo).unwrap_or(true));
    let (error, set_error) = signal(Option::<String>::None);
    let (guardando, set_guardando) = signal(false);

    let guardar = move |_| {
        if nombre.get().trim().is_empty() {
            set_error.set(Some("El nombre es obligatorio".to_string()));
            return;
        }
        set_guardando.set(true);
        set_error.set(None);

        spawn_local(async move {
            let resultado = match sector_id {
                Some(id) => {
                    let datos = SectorUpdate {
                        nombre: Some(nombre.get_untracked()),
                        descripcion: Some(descripcion.get_untracked()).filter(|d| !d.is_empty()),
                        activo: Some(activo.get_untracked()),
                    };
                    api::update(id, &datos).await.map(|_| ())
                }
                None => {
                    let datos = SectorCreate {
                        nombre: nombre.get_untracked(),
                        descripcion: Some(descripcion.get_untracked()).filter(|d| !d.is_empty()),
                        activo: Some(activo.get_untracked()),
                    };
                    api::create(&datos).await.map(|_| ())
                }
            };
            match resultado {
                Ok(()) => on_close.run(true),
                Err(e) => {
                    set_error.set(Some(e));
                    set_guardando.set(false);
                }
            }
        });
    };

    view! {
        <Modal
            title=if sector_id.is_some() { "Editar sector".to_string() } else { "Nuevo sector".to_string() }
            on_close=Callback::new(move |_| on_close.run(false))
        >
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Input label="Nombre" value=nombre required=true
                on_input=Callback::new(move |v| set_nombre.set(v)) />
            <Textarea label="Descripción" value=descripcion
                on_input=Callback::new(move |v| set_descripcion.set(v)) />
            <Checkbox label="Activo" checked=activo
                on_change=Callback::new(move |v| set_activo.set(v)) />

            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(false))>
                    "Cancelar"
                </Button>
                <Button on_click=Callback::new(guardar) disabled=Signal::derive(move || guardando.get())>
                    {move || if guardando.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>
        </Modal>
    }
}
