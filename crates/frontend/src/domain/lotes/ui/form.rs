use chrono::Local;
use contracts::domain::lote::{
    AdvertenciaLote, Lote, LoteCreate, ValidacionLoteRequest, ValidacionLoteResponse,
};
use contracts::domain::producto::Producto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::advertencias::AdvertenciasModal;
use crate::domain::lotes::{api, calc};
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::date_utils::{fecha_input, parse_fecha_input};

/// Batch create/edit dialog.
///
/// On product change it asks the server for the next suggested number and
/// auto-fills the field only if the operator hasn't typed one. Expiry and
/// total liters are previews; the server recomputes both on save.
#[component]
pub fn LoteForm(
    editando: Option<Lote>,
    productos: Vec<Producto>,
    on_close: Callback<bool>,
) -> impl IntoView {
    let lote_id = editando.as_ref().map(|l| l.id);
    let productos = StoredValue::new(productos);

    let (numero_lote, set_numero_lote) = signal(
        editando
            .as_ref()
            .map(|l| l.numero_lote.clone())
            .unwrap_or_default(),
    );
    let (producto_id, set_producto_id) = signal(
        editando
            .as_ref()
            .map(|l| l.producto_id.to_string())
            .unwrap_or_default(),
    );
    let (pallets, set_pallets) = signal(
        editando
            .as_ref()
            .map(|l| l.pallets.to_string())
            .unwrap_or_else(|| "0".to_string()),
    );
    let (parciales, set_parciales) = signal(
        editando
            .as_ref()
            .map(|l| l.parciales.to_string())
            .unwrap_or_else(|| "0".to_string()),
    );
    let (unidades_por_pallet, set_unidades_por_pallet) = signal(
        editando
            .as_ref()
            .map(|l| l.unidades_por_pallet.to_string())
            .unwrap_or_else(|| "1".to_string()),
    );
    let (litros_totales, set_litros_totales) = signal(
        editando
            .as_ref()
            .and_then(|l| l.litros_totales)
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let (fecha_produccion, set_fecha_produccion) = signal(
        editando
            .as_ref()
            .map(|l| fecha_input(l.fecha_produccion))
            .unwrap_or_else(|| fecha_input(Local::now().date_naive())),
    );
    let (fecha_vencimiento, set_fecha_vencimiento) = signal(
        editando
            .as_ref()
            .and_then(|l| l.fecha_vencimiento)
            .map(fecha_input)
            .unwrap_or_default(),
    );
    let (link_senasa, set_link_senasa) = signal(
        editando
            .as_ref()
            .and_then(|l| l.link_senasa.clone())
            .unwrap_or_default(),
    );
    let (observaciones, set_observaciones) = signal(
        editando
            .as_ref()
            .and_then(|l| l.observaciones.clone())
            .unwrap_or_default(),
    );
    let (sugerencia, set_sugerencia) = signal(String::new());
    let advertencias: RwSignal<Option<Vec<AdvertenciaLote>>> = RwSignal::new(None);
    let validacion: RwSignal<Option<ValidacionLoteResponse>> = RwSignal::new(None);
    let (error, set_error) = signal(Option::<String>::None);
    let (guardando, set_guardando) = signal(false);

    let producto_seleccionado = move || {
        let id = producto_id.get_untracked().parse::<i64>().ok()?;
        productos.with_value(|ps| ps.iter().find(|p| p.id == id).cloned())
    };

    let recalcular_litros = move || {
        if let Some(producto) = producto_seleccionado() {
            let litros = calc::litros_totales(
                pallets.get_untracked().parse().unwrap_or(0),
                unidades_por_pallet.get_untracked().parse().unwrap_or(1),
                parciales.get_untracked().parse().unwrap_or(0),
                producto.litros_por_unidad.unwrap_or(1.0),
            );
            set_litros_totales.set(litros.to_string());
        }
    };

    let recalcular_vencimiento = move || {
        if let (Some(producto), Some(fecha)) = (
            producto_seleccionado(),
            parse_fecha_input(&fecha_produccion.get_untracked()),
        ) {
            let anos = producto
                .anos_vencimiento
                .unwrap_or(calc::ANOS_VENCIMIENTO_DEFECTO);
            set_fecha_vencimiento.set(fecha_input(calc::fecha_vencimiento(fecha, anos)));
        }
    };

    let cargar_sugerencia = move |id: i64| {
        spawn_local(async move {
            match api::sugerir_numero(id).await {
                Ok(respuesta) => {
                    set_sugerencia.set(respuesta.sugerencia.clone());
                    // Only auto-fill an untouched field.
                    if numero_lote.get_untracked().is_empty() {
                        set_numero_lote.set(respuesta.sugerencia);
                    }
                }
                Err(e) => {
                    log::error!("No se pudo obtener la sugerencia de lote: {}", e);
                    set_sugerencia.set(String::new());
                }
            }
        });
    };

    let al_cambiar_producto = move |valor: String| {
        set_producto_id.set(valor.clone());
        if let Ok(id) = valor.parse::<i64>() {
            cargar_sugerencia(id);
        }
        recalcular_vencimiento();
        recalcular_litros();
    };

    // Dry-run validation: previews the server's anomaly checks without
    // persisting anything.
    let validar_numero = move |_| {
        let Ok(producto) = producto_id.get_untracked().parse::<i64>() else {
            return;
        };
        let numero = numero_lote.get_untracked().trim().to_string();
        let Some(fecha) = parse_fecha_input(&fecha_produccion.get_untracked()) else {
            return;
        };
        if numero.is_empty() {
            return;
        }
        let datos = ValidacionLoteRequest {
            numero_lote: numero,
            producto_id: producto,
            fecha_produccion: fecha,
        };
        spawn_local(async move {
            match api::validar(&datos).await {
                Ok(respuesta) => validacion.set(Some(respuesta)),
                Err(e) => log::error!("No se pudo validar el lote: {}", e),
            }
        });
    };

    let enviar = move |ignorar_advertencias: bool| {
        let producto = match producto_id.get_untracked().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                set_error.set(Some("Debe seleccionar un producto".to_string()));
                return;
            }
        };
        if numero_lote.get_untracked().trim().is_empty() {
            set_error.set(Some("El número de lote es obligatorio".to_string()));
            return;
        }
        let fecha = match parse_fecha_input(&fecha_produccion.get_untracked()) {
            Some(f) => f,
            None => {
                set_error.set(Some("La fecha de producción es obligatoria".to_string()));
                return;
            }
        };

        let datos = LoteCreate {
            numero_lote: numero_lote.get_untracked().trim().to_string(),
            producto_id: producto,
            estado_linea_id: None,
            pallets: pallets.get_untracked().parse().ok(),
            parciales: parciales.get_untracked().parse().ok(),
            unidades_por_pallet: unidades_por_pallet.get_untracked().parse().ok(),
            litros_totales: litros_totales.get_untracked().parse().ok(),
            fecha_produccion: fecha,
            fecha_vencimiento: parse_fecha_input(&fecha_vencimiento.get_untracked()),
            link_senasa: Some(link_senasa.get_untracked()).filter(|v| !v.trim().is_empty()),
            observaciones: Some(observaciones.get_untracked()).filter(|v| !v.trim().is_empty()),
            activo: None,
            ignorar_advertencias,
        };

        set_guardando.set(true);
        set_error.set(None);

        spawn_local(async move {
            let resultado = match lote_id {
                Some(id) => api::update(id, &datos).await,
                None => api::create(&datos).await,
            };
            match resultado {
                Ok(respuesta) => {
                    if !respuesta.creado && !respuesta.advertencias.is_empty() {
                        // Rejected pending confirmation.
                        advertencias.set(Some(respuesta.advertencias));
                        set_guardando.set(false);
                    } else {
                        if !respuesta.advertencias.is_empty() {
                            let detalle = respuesta
                                .advertencias
                                .iter()
                                .map(|a| format!("- {}", a.mensaje))
                                .collect::<Vec<_>>()
                                .join("\n");
                            let mensaje = respuesta
                                .mensaje
                                .unwrap_or_else(|| "Lote guardado".to_string());
                            if let Some(window) = web_sys::window() {
                                let _ = window.alert_with_message(&format!(
                                    "{}\n\nAdvertencias ignoradas:\n{}",
                                    mensaje, detalle
                                ));
                            }
                        }
                        on_close.run(true);
                    }
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_guardando.set(false);
                }
            }
        });
    };

    let opciones_producto: Vec<(String, String)> = productos.with_value(|ps| {
        std::iter::once(("".to_string(), "Seleccione un producto".to_string()))
            .chain(ps.iter().map(|p| (p.id.to_string(), format!("{} - {}", p.codigo, p.nombre))))
            .collect()
    });

    view! {
        <Modal
            title=if lote_id.is_some() { "Editar lote".to_string() } else { "Nuevo lote".to_string() }
            on_close=Callback::new(move |_| on_close.run(false))
        >
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="form__row">
                <Select label="Producto" value=producto_id options=opciones_producto required=true
                    on_change=Callback::new(al_cambiar_producto) />
                <Input
                    label="Número de lote"
                    value=numero_lote
                    required=true
                    on_input=Callback::new(move |v| set_numero_lote.set(v))
                    hint=Signal::derive(move || {
                        let s = sugerencia.get();
                        if s.is_empty() { String::new() } else { format!("Sugerido: {}", s) }
                    })
                />
            </div>
            <div class="form__row">
                <Input label="Pallets" input_type="number" value=pallets
                    on_input=Callback::new(move |v| {
                        set_pallets.set(v);
                        recalcular_litros();
                    }) />
                <Input label="Parciales" input_type="number" value=parciales
                    on_input=Callback::new(move |v| {
                        set_parciales.set(v);
                        recalcular_litros();
                    }) />
                <Input label="Unidades por pallet" input_type="number" value=unidades_por_pallet
                    on_input=Callback::new(move |v| {
                        set_unidades_por_pallet.set(v);
                        recalcular_litros();
                    }) />
            </div>
            <div class="form__row">
                <Input label="Litros totales" input_type="number" value=litros_totales
                    on_input=Callback::new(move |v| set_litros_totales.set(v)) />
            </div>
            <div class="form__row">
                <Input label="Fecha de producción" input_type="date" value=fecha_produccion required=true
                    on_input=Callback::new(move |v| {
                        set_fecha_produccion.set(v);
                        recalcular_vencimiento();
                    }) />
                <Input label="Fecha de vencimiento" input_type="date" value=fecha_vencimiento
                    on_input=Callback::new(move |v| set_fecha_vencimiento.set(v)) />
            </div>
            <div class="form__row">
                <Button variant="ghost" on_click=Callback::new(validar_numero)>
                    "Validar número"
                </Button>
            </div>
            {move || validacion.get().map(|v| {
                if v.valido {
                    view! {
                        <div class="success-message">"Sin advertencias para este número."</div>
                    }.into_any()
                } else {
                    view! {
                        <div class="warning-item">
                            <strong>"Advertencias:"</strong>
                            <ul>
                                {v.advertencias.iter().map(|a| view! {
                                    <li>{a.mensaje.clone()}</li>
                                }).collect_view()}
                            </ul>
                            {v.lote_anterior.clone().map(|anterior| view! {
                                <p class="warning-detail">{format!("Último lote: {}", anterior)}</p>
                            })}
                            {v.lote_esperado.clone().map(|esperado| view! {
                                <p class="warning-detail">{format!("Esperado: {}", esperado)}</p>
                            })}
                        </div>
                    }.into_any()
                }
            })}

            <Input label="Link SENASA" value=link_senasa
                on_input=Callback::new(move |v| set_link_senasa.set(v)) />
            <Textarea label="Observaciones" value=observaciones
                on_input=Callback::new(move |v| set_observaciones.set(v)) />

            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(false))>
                    "Cancelar"
                </Button>
                <Button
                    on_click=Callback::new(move |_| enviar(false))
                    disabled=Signal::derive(move || guardando.get())
                >
                    {move || if guardando.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>

            {move || advertencias.get().map(|lista| view! {
                <AdvertenciasModal
                    advertencias=lista
                    on_confirm=Callback::new(move |_| {
                        advertencias.set(None);
                        enviar(true);
                    })
                    on_cancel=Callback::new(move |_| advertencias.set(None))
                />
            })}
        </Modal>
    }
}
