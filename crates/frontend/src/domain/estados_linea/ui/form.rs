use contracts::domain::estado_linea::{EstadoLinea, EstadoLineaCreate, EstadoLineaUpdate, TipoEstado};
use contracts::domain::linea::Linea;
use contracts::domain::sector::Sector;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::estados_linea::api;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Button, Select, Textarea};
use crate::shared::date_utils::{duracion_legible, fecha_hora_input, parse_fecha_hora_input};

#[component]
pub fn EstadoLineaForm(
    editando: Option<EstadoLinea>,
    sectores: Vec<Sector>,
    lineas: Vec<Linea>,
    on_close: Callback<bool>,
) -> impl IntoView {
    let estado_id = editando.as_ref().map(|e| e.id);
    let (sector_id, set_sector_id) = signal(
        editando
            .as_ref()
            .map(|e| e.sector_id.to_string())
            .unwrap_or_default(),
    );
    let (linea_id, set_linea_id) = signal(
        editando
            .as_ref()
            .map(|e| e.linea_id.to_string())
            .unwrap_or_default(),
    );
    let (tipo, set_tipo) = signal(
        editando
            .as_ref()
            .map(|e| e.tipo_estado.clone())
            .unwrap_or_else(|| TipoEstado::Produccion.value().to_string()),
    );
    let (inicio, set_inicio) = signal(
        editando
            .as_ref()
            .map(|e| fecha_hora_input(e.fecha_hora_inicio))
            .unwrap_or_default(),
    );
    let (fin, set_fin) = signal(
        editando
            .as_ref()
            .and_then(|e| e.fecha_hora_fin)
            .map(fecha_hora_input)
            .unwrap_or_default(),
    );
    let (observaciones, set_observaciones) = signal(
        editando
            .as_ref()
            .and_then(|e| e.observaciones.clone())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal(Option::<String>::None);
    let (guardando, set_guardando) = signal(false);

    let lineas_del_sector = {
        let lineas = lineas.clone();
        Signal::derive(move || {
            let sector = sector_id.get().parse::<i64>().ok();
            lineas
                .iter()
                .filter(|l| sector.map(|s| l.sector_id == s).unwrap_or(false))
                .map(|l| (l.id.to_string(), l.nombre.clone()))
                .collect::<Vec<_>>()
        })
    };

    let opciones_sector: Vec<(String, String)> =
        std::iter::once(("".to_string(), "Seleccione un sector".to_string()))
            .chain(sectores.iter().map(|s| (s.id.to_string(), s.nombre.clone())))
            .collect();

    let opciones_linea = Signal::derive(move || {
        std::iter::once(("".to_string(), "Seleccione una línea".to_string()))
            .chain(lineas_del_sector.get())
            .collect::<Vec<_>>()
    });

    let opciones_tipo: Vec<(String, String)> = TipoEstado::ALL
        .iter()
        .map(|t| (t.value().to_string(), t.label().to_string()))
        .collect();

    // Live preview of the derived duration while both ends are set.
    let duracion_preview = Signal::derive(move || {
        let desde = parse_fecha_hora_input(&inicio.get())?;
        let hasta = parse_fecha_hora_input(&fin.get())?;
        let minutos = (hasta - desde).num_minutes();
        (minutos >= 0).then(|| duracion_legible(minutos))
    });

    let guardar = move |_| {
        let sector = match sector_id.get().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                set_error.set(Some("Debe seleccionar un sector".to_string()));
                return;
            }
        };
        let linea = match linea_id.get().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                set_error.set(Some("Debe seleccionar una línea".to_string()));
                return;
            }
        };
        let fecha_inicio = match parse_fecha_hora_input(&inicio.get()) {
            Some(f) => f,
            None => {
                set_error.set(Some("La fecha de inicio es obligatoria".to_string()));
                return;
            }
        };
        let fecha_fin = parse_fecha_hora_input(&fin.get());
        if let Some(f) = fecha_fin {
            if f < fecha_inicio {
                set_error.set(Some("La fecha de fin no puede ser anterior al inicio".to_string()));
                return;
            }
        }

        set_guardando.set(true);
        set_error.set(None);

        spawn_local(async move {
            let resultado = match estado_id {
                Some(id) => {
                    let datos = EstadoLineaUpdate {
                        sector_id: Some(sector),
                        linea_id: Some(linea),
                        tipo_estado: Some(tipo.get_untracked()),
                        fecha_hora_inicio: Some(fecha_inicio),
                        fecha_hora_fin: fecha_fin,
                        duracion_minutos: None,
                        observaciones: Some(observaciones.get_untracked())
                            .filter(|o| !o.is_empty()),
                        activo: None,
                    };
                    api::update(id, &datos).await.map(|_| ())
                }
                None => {
                    let datos = EstadoLineaCreate {
                        sector_id: sector,
                        linea_id: linea,
                        tipo_estado: tipo.get_untracked(),
                        fecha_hora_inicio: fecha_inicio,
                        fecha_hora_fin: fecha_fin,
                        duracion_minutos: None,
                        observaciones: Some(observaciones.get_untracked())
                            .filter(|o| !o.is_empty()),
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
            title=if estado_id.is_some() { "Editar estado".to_string() } else { "Nuevo estado de línea".to_string() }
            on_close=Callback::new(move |_| on_close.run(false))
        >
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="form__row">
                <Select label="Sector" value=sector_id options=opciones_sector required=true
                    on_change=Callback::new(move |v| {
                        set_sector_id.set(v);
                        // The line must belong to the selected sector.
                        set_linea_id.set(String::new());
                    }) />
                <Select label="Línea" value=linea_id options=opciones_linea required=true
                    on_change=Callback::new(move |v| set_linea_id.set(v)) />
            </div>
            <Select label="Tipo de estado" value=tipo options=opciones_tipo required=true
                on_change=Callback::new(move |v| set_tipo.set(v)) />
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Inicio"</label>
                    <input
                        type="datetime-local"
                        class="form__input"
                        prop:value=move || inicio.get()
                        on:input=move |ev| set_inicio.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Fin (vacío = en curso)"</label>
                    <input
                        type="datetime-local"
                        class="form__input"
                        prop:value=move || fin.get()
                        on:input=move |ev| set_fin.set(event_target_value(&ev))
                    />
                </div>
            </div>
            {move || duracion_preview.get().map(|d| view! {
                <p class="form__hint">"Duración: " {d}</p>
            })}
            <Textarea label="Observaciones" value=observaciones
                on_input=Callback::new(move |v| set_observaciones.set(v)) />

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
