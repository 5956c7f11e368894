use contracts::domain::cliente::{Cliente, ClienteCreate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::clientes::api;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Button, Checkbox, Input};

fn opcional(valor: String) -> Option<String> {
    Some(valor).filter(|v| !v.trim().is_empty())
}

#[component]
pub fn ClienteForm(editando: Option<Cliente>, on_close: Callback<bool>) -> impl IntoView {
    let cliente_id = editando.as_ref().map(|c| c.id);
    let campo = |f: fn(&Cliente) -> Option<String>| {
        editando.as_ref().and_then(f).unwrap_or_default()
    };

    let (codigo, set_codigo) =
        signal(editando.as_ref().map(|c| c.codigo.clone()).unwrap_or_default());
    let (nombre, set_nombre) =
        signal(editando.as_ref().map(|c| c.nombre.clone()).unwrap_or_default());
    let (razon_social, set_razon_social) = signal(campo(|c| c.razon_social.clone()));
    let (cuit, set_cuit) = signal(campo(|c| c.cuit.clone()));
    let (direccion, set_direccion) = signal(campo(|c| c.direccion.clone()));
    let (telefono, set_telefono) = signal(campo(|c| c.telefono.clone()));
    let (email, set_email) = signal(campo(|c| c.email.clone()));
    let (contacto, set_contacto) = signal(campo(|c| c.contacto.clone()));
    let (activo, set_activo) = signal(editando.as_ref().map(|c| c.activo).unwrap_or(true));
    let (error, set_error) = signal(Option::<String>::None);
    let (guardando, set_guardando) = signal(false);

    let guardar = move |_| {
        if codigo.get().trim().is_empty() || nombre.get().trim().is_empty() {
            set_error.set(Some("Código y nombre son obligatorios".to_string()));
            return;
        }
        set_guardando.set(true);
        set_error.set(None);

        spawn_local(async move {
            let datos = ClienteCreate {
                codigo: codigo.get_untracked(),
                nombre: nombre.get_untracked(),
                razon_social: opcional(razon_social.get_untracked()),
                cuit: opcional(cuit.get_untracked()),
                direccion: opcional(direccion.get_untracked()),
                telefono: opcional(telefono.get_untracked()),
                email: opcional(email.get_untracked()),
                contacto: opcional(contacto.get_untracked()),
                activo: Some(activo.get_untracked()),
            };
            let resultado = match cliente_id {
                Some(id) => api::update(id, &datos).await.map(|_| ()),
                None => api::create(&datos).await.map(|_| ()),
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
            title=if cliente_id.is_some() { "Editar cliente".to_string() } else { "Nuevo cliente".to_string() }
            on_close=Callback::new(move |_| on_close.run(false))
        >
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="form__row">
                <Input label="Código" value=codigo required=true
                    on_input=Callback::new(move |v| set_codigo.set(v)) />
                <Input label="Nombre" value=nombre required=true
                    on_input=Callback::new(move |v| set_nombre.set(v)) />
            </div>
            <div class="form__row">
                <Input label="Razón social" value=razon_social
                    on_input=Callback::new(move |v| set_razon_social.set(v)) />
                <Input label="CUIT" value=cuit
                    on_input=Callback::new(move |v| set_cuit.set(v)) />
            </div>
            <Input label="Dirección" value=direccion
                on_input=Callback::new(move |v| set_direccion.set(v)) />
            <div class="form__row">
                <Input label="Teléfono" value=telefono
                    on_input=Callback::new(move |v| set_telefono.set(v)) />
                <Input label="Email" input_type="email" value=email
                    on_input=Callback::new(move |v| set_email.set(v)) />
            </div>
            <Input label="Contacto" value=contacto
                on_input=Callback::new(move |v| set_contacto.set(v)) />
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
