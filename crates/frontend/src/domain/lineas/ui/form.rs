use contracts::domain::linea::{Linea, LineaCreate, LineaUpdate};
use contracts::domain::sector::Sector;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::lineas::api;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Button, Checkbox, Input, Select, Textarea};

#[component]
pub fn LineaForm(
    editando: Option<Linea>,
    sectores: Vec<Sector>,
    on_close: Callback<bool>,
) -> impl IntoView {
    let linea_id = editando.as_ref().map(|l| l.id);
    let (nombre, set_nombre) =
        signal(editando.as_ref().map(|l| l.nombre.clone()).unwrap_or_default());
    let (descripcion, set_descripcion) = signal(
        editando
            .as_ref()
            .and_then(|l| l.descripcion.clone())
            .unwrap_or_default(),
    );
    let (sector_id, set_sector_id) = signal(
        editando
            .as_ref()
            .map(|l| l.sector_id.to_string())
            .unwrap_or_default(),
    );
    let (activo, set_activo) = signal(editando.as_ref().map(|l| l.activo).unwrap_or(true));
    let (error, set_error) = signal(Option::<String>::None);
    let (guardando, set_guardando) = signal(false);

    let opciones_sector: Vec<(String, String)> =
        std::iter::once(("".to_string(), "Seleccione un sector".to_string()))
            .chain(sectores.iter().map(|s| (s.id.to_string(), s.nombre.clone())))
            .collect();

    let guardar = move |_| {
        let sector = match sector_id.get().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                set_error.set(Some("Debe seleccionar un sector".to_string()));
                return;
            }
        };
        if nombre.get().trim().is_empty() {
            set_error.set(Some("El nombre es obligatorio".to_string()));
            return;
        }
        set_guardando.set(true);
        set_error.set(None);

        spawn_local(async move {
            let resultado = match linea_id {
                Some(id) => {
                    let datos = LineaUpdate {
                        nombre: Some(nombre.get_untracked()),
                        descripcion: Some(descripcion.get_untracked()).filter(|d| !d.is_empty()),
                        sector_id: Some(sector),
                        activo: Some(activo.get_untracked()),
                    };
                    api::update(id, &datos).await.map(|_| ())
                }
                None => {
                    let datos = LineaCreate {
                        nombre: nombre.get_untracked(),
                        descripcion: Some(descripcion.get_untracked()).filter(|d| !d.is_empty()),
                        sector_id: sector,
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
            title=if linea_id.is_some() { "Editar línea".to_string() } else { "Nueva línea".to_string() }
            on_close=Callback::new(move |_| on_close.run(false))
        >
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Input label="Nombre" value=nombre required=true
                on_input=Callback::new(move |v| set_nombre.set(v)) />
            <Select label="Sector" value=sector_id options=opciones_sector required=true
                on_change=Callback::new(move |v| set_sector_id.set(v)) />
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
