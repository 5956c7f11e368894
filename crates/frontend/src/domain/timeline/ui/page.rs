use std::collections::HashMap;

use chrono::{Days, Local, NaiveDateTime};
use contracts::common::ListParams;
use contracts::domain::linea::Linea;
use contracts::domain::sector::Sector;
use contracts::domain::timeline::{TimelineDia, TimelineEstado, TimelineParams};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use once_cell::sync::Lazy;

use crate::domain::lineas;
use crate::domain::sectores;
use crate::domain::timeline::api;
use crate::domain::timeline::geometry::{
    geometria_bloque, marcador_hora_actual, truncar_texto, NivelEtiqueta, ANCHO_TOTAL,
};
use crate::shared::components::ui::Select;
use crate::shared::date_utils::{
    duracion_legible, fecha_input, format_hora, parse_fecha_input,
};
use crate::shared::icons::icon;
use crate::shared::request_guard::RequestGuard;
use crate::system::auth::guard::RequireAuth;

static COLORES_ESTADO: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("produccion", "#48bb78"),
        ("parada_programada", "#ed8936"),
        ("parada_no_programada", "#e53e3e"),
        ("mantenimiento", "#667eea"),
        ("limpieza", "#38b2ac"),
        ("cambio_formato", "#9f7aea"),
        ("sin_demanda", "#a0aec0"),
        ("otro", "#4a5568"),
    ])
});

fn color_estado(tipo: &str) -> &'static str {
    COLORES_ESTADO.get(tipo).copied().unwrap_or("#666666")
}

#[derive(Clone)]
struct Tooltip {
    x: i32,
    y: i32,
    estado: TimelineEstado,
}

#[component]
pub fn TimelinePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <TimelineDiaView />
        </RequireAuth>
    }
}

#[component]
fn TimelineDiaView() -> impl IntoView {
    let (fecha, set_fecha) = signal(fecha_input(Local::now().date_naive()));
    let datos: RwSignal<Option<TimelineDia>> = RwSignal::new(None);
    let sectores_filtro: RwSignal<Vec<Sector>> = RwSignal::new(Vec::new());
    let lineas_filtro: RwSignal<Vec<Linea>> = RwSignal::new(Vec::new());
    let (filtro_sector, set_filtro_sector) = signal(String::new());
    let (filtro_linea, set_filtro_linea) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (ahora, set_ahora) = signal(Local::now().naive_local());
    let tooltip: RwSignal<Option<Tooltip>> = RwSignal::new(None);
    let guard = RequestGuard::new();

    // Filters for the two selects.
    Effect::new(move |_| {
        spawn_local(async move {
            match sectores::api::list(&ListParams::activos(100)).await {
                Ok(data) => sectores_filtro.set(data.items),
                Err(e) => log::error!("No se pudieron cargar los sectores: {}", e),
            }
        });
        spawn_local(async move {
            match lineas::api::list_activas().await {
                Ok(data) => lineas_filtro.set(data),
                Err(e) => log::error!("No se pudieron cargar las líneas: {}", e),
            }
        });
    });

    // Live clock, one tick per minute. Finer granularity has no visible
    // effect at 60 px per hour.
    Effect::new(move |_| {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(60_000).await;
                set_ahora.set(Local::now().naive_local());
            }
        });
    });

    let load = {
        let guard = guard.clone();
        move || {
            let Some(dia) = parse_fecha_input(&fecha.get_untracked()) else {
                return;
            };
            let token = guard.issue();
            let params = TimelineParams {
                sector_id: filtro_sector.get_untracked().parse::<i64>().ok(),
                linea_id: filtro_linea.get_untracked().parse::<i64>().ok(),
            };
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                let resultado = api::timeline(dia, &params).await;
                if !token.is_current() {
                    return;
                }
                match resultado {
                    Ok(data) => datos.set(Some(data)),
                    Err(e) => {
                        log::error!("Error cargando el timeline: {}", e);
                        set_error.set(Some(
                            "No se pudo cargar el timeline. Intente de nuevo.".to_string(),
                        ));
                    }
                }
                set_loading.set(false);
            });
        }
    };

    // Any change of day, sector or line re-fetches the whole day.
    Effect::new({
        let load = load.clone();
        move |_| {
            fecha.track();
            filtro_sector.track();
            filtro_linea.track();
            load();
        }
    });

    let mover_dia = move |dias: i64| {
        if let Some(actual) = parse_fecha_input(&fecha.get_untracked()) {
            let nueva = if dias >= 0 {
                actual.checked_add_days(Days::new(dias as u64))
            } else {
                actual.checked_sub_days(Days::new((-dias) as u64))
            };
            if let Some(nueva) = nueva {
                set_fecha.set(fecha_input(nueva));
            }
        }
    };

    let opciones_sector = Signal::derive(move || {
        std::iter::once(("".to_string(), "Todos los sectores".to_string()))
            .chain(
                sectores_filtro
                    .get()
                    .iter()
                    .map(|s| (s.id.to_string(), s.nombre.clone())),
            )
            .collect::<Vec<_>>()
    });

    let opciones_linea = Signal::derive(move || {
        let sector = filtro_sector.get().parse::<i64>().ok();
        std::iter::once(("".to_string(), "Todas las líneas".to_string()))
            .chain(
                lineas_filtro
                    .get()
                    .iter()
                    .filter(|l| sector.map(|s| l.sector_id == s).unwrap_or(true))
                    .map(|l| (l.id.to_string(), l.nombre.clone())),
            )
            .collect::<Vec<_>>()
    });

    let horas: Vec<u32> = (0..24).collect();

    view! {
        <div class="page timeline-page">
            <div class="page__header">
                <h1>{icon("calendar")} " Timeline de producción"</h1>
                <div class="timeline-controls">
                    <div class="date-navigation">
                        <button class="button button--secondary" on:click=move |_| mover_dia(-1)>
                            {icon("chevron-left")} " Anterior"
                        </button>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || fecha.get()
                            on:input=move |ev| set_fecha.set(event_target_value(&ev))
                        />
                        <button class="button button--secondary" on:click=move |_| mover_dia(1)>
                            "Siguiente " {icon("chevron-right")}
                        </button>
                        <button
                            class="button button--secondary"
                            on:click=move |_| set_fecha.set(fecha_input(Local::now().date_naive()))
                        >
                            "Hoy"
                        </button>
                    </div>
                    <div class="timeline-filters">
                        <Select
                            value=filtro_sector
                            options=opciones_sector
                            on_change=Callback::new(move |v| {
                                set_filtro_sector.set(v);
                                // Sector change invalidates the line filter.
                                set_filtro_linea.set(String::new());
                            })
                        />
                        <Select
                            value=filtro_linea
                            options=opciones_linea
                            on_change=Callback::new(move |v| set_filtro_linea.set(v))
                        />
                        <button class="button button--secondary" on:click={
                            let load = load.clone();
                            move |_| load()
                        }>
                            {icon("refresh")} " Actualizar"
                        </button>
                    </div>
                </div>
            </div>

            <div class="timeline-container">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="timeline-empty">
                                <p>"Cargando timeline..."</p>
                            </div>
                        }.into_any();
                    }
                    if let Some(mensaje) = error.get() {
                        let load = load.clone();
                        return view! {
                            <div class="timeline-empty">
                                {icon("alert-triangle")}
                                <p>{mensaje}</p>
                                <button class="button button--secondary" on:click=move |_| load()>
                                    "Reintentar"
                                </button>
                            </div>
                        }.into_any();
                    }
                    let Some(dia_datos) = datos.get() else {
                        return view! { <div class="timeline-empty"></div> }.into_any();
                    };
                    if dia_datos.sin_lineas() {
                        return view! {
                            <div class="timeline-empty">
                                {icon("clipboard")}
                                <p>"No hay líneas configuradas para mostrar"</p>
                            </div>
                        }.into_any();
                    }

                    let dia = dia_datos.fecha;
                    let momento = ahora.get();
                    let marcador = marcador_hora_actual(dia, momento);
                    let horas = horas.clone();

                    view! {
                        <div class="timeline-wrapper">
                            <div class="timeline-hours-header" style=format!("width: {}px", ANCHO_TOTAL)>
                                {horas.iter().map(|h| view! {
                                    <div class="hour-column">{format!("{:02}:00", h)}</div>
                                }).collect_view()}
                            </div>

                            <div class="timeline-body">
                                {dia_datos.sectores.iter().map(|sector| view! {
                                    <div class="sector-group">
                                        <div class="sector-header">
                                            <span class="sector-name">{icon("folder")} " " {sector.nombre.clone()}</span>
                                        </div>
                                        {sector.lineas.iter().map(|linea| view! {
                                            <div class="linea-row">
                                                <div class="linea-label">{linea.nombre.clone()}</div>
                                                <div class="linea-timeline" style=format!("width: {}px", ANCHO_TOTAL)>
                                                    {marcador.map(|pos| view! {
                                                        <div class="current-time-line" style=format!("left: {}px", pos)>
                                                            <span class="current-time-label">
                                                                {format_hora(momento)}
                                                            </span>
                                                        </div>
                                                    })}
                                                    {linea.estados.iter().filter_map(|estado| {
                                                        bloque_estado(estado.clone(), dia, momento, tooltip)
                                                    }).collect_view()}
                                                </div>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                }).collect_view()}
                            </div>

                            <div class="timeline-legend">
                                {dia_datos.tipos_estado.iter().map(|tipo| view! {
                                    <div class="legend-item">
                                        <span
                                            class="legend-color"
                                            style=format!("background: {}", color_estado(&tipo.value))
                                        ></span>
                                        <span>{tipo.label.clone()}</span>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    }.into_any()
                }}
            </div>

            {move || tooltip.get().map(|t| {
                let estado = t.estado;
                view! {
                    <div class="estado-tooltip" style=format!("left: {}px; top: {}px", t.x, t.y)>
                        <h4>{estado.tipo_estado_label.clone()}</h4>
                        <p>
                            <span class="label">"Línea: "</span>
                            {estado.linea.as_ref().map(|l| l.nombre.clone()).unwrap_or_default()}
                        </p>
                        <p>
                            <span class="label">"Inicio: "</span>
                            {format_hora(estado.fecha_hora_inicio)}
                        </p>
                        {estado.fecha_hora_fin.map(|fin| view! {
                            <p><span class="label">"Fin: "</span>{format_hora(fin)}</p>
                        })}
                        {estado.duracion_minutos.map(|minutos| view! {
                            <p><span class="label">"Duración: "</span>{duracion_legible(minutos)}</p>
                        })}
                        {estado.observaciones.clone().map(|obs| view! {
                            <p><span class="label">"Obs: "</span>{obs}</p>
                        })}
                    </div>
                }
            })}
        </div>
    }
}

/// One rendered interval block, or `None` when it falls outside the day.
fn bloque_estado(
    estado: TimelineEstado,
    dia: chrono::NaiveDate,
    ahora: NaiveDateTime,
    tooltip: RwSignal<Option<Tooltip>>,
) -> Option<impl IntoView> {
    let bloque = geometria_bloque(estado.fecha_hora_inicio, estado.fecha_hora_fin, dia, ahora)?;
    let nivel = NivelEtiqueta::para_ancho(bloque.width);
    let color = color_estado(&estado.tipo_estado);

    let etiqueta = match nivel {
        NivelEtiqueta::Abreviado => truncar_texto(&estado.tipo_estado_label, 3),
        _ => estado.tipo_estado_label.clone(),
    };
    let hora_y_duracion = matches!(nivel, NivelEtiqueta::TipoYHora | NivelEtiqueta::Completo)
        .then(|| {
            let mut texto = format_hora(estado.fecha_hora_inicio);
            if let Some(minutos) = estado.duracion_minutos {
                texto.push_str(&format!(" · {}", duracion_legible(minutos)));
            }
            texto
        });
    let observaciones = (nivel == NivelEtiqueta::Completo)
        .then(|| estado.observaciones.clone())
        .flatten()
        .map(|obs| truncar_texto(&obs, 25));

    let estado_enter = estado.clone();
    let estado_mueve = estado.clone();

    Some(view! {
        <div
            class="estado-block"
            style=format!(
                "left: {}px; width: {}px; background: {}",
                bloque.left, bloque.width, color
            )
            on:mouseenter=move |ev: leptos::ev::MouseEvent| {
                tooltip.set(Some(Tooltip {
                    x: ev.client_x() + 10,
                    y: ev.client_y() + 10,
                    estado: estado_enter.clone(),
                }));
            }
            on:mousemove=move |ev: leptos::ev::MouseEvent| {
                if tooltip.with_untracked(|t| t.is_some()) {
                    tooltip.set(Some(Tooltip {
                        x: ev.client_x() + 10,
                        y: ev.client_y() + 10,
                        estado: estado_mueve.clone(),
                    }));
                }
            }
            on:mouseleave=move |_| tooltip.set(None)
        >
            <div class="estado-content">
                <span class="estado-tipo">{etiqueta}</span>
                {hora_y_duracion.map(|texto| view! { <span class="estado-hora">{texto}</span> })}
                {observaciones.map(|obs| view! { <span class="estado-obs">{obs}</span> })}
            </div>
        </div>
    })
}
