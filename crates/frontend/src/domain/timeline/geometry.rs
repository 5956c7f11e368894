//! Geometry of the 24-hour day grid.
//!
//! Maps state intervals onto a fixed pixel axis: 60 px per hour, hours
//! 0-23. Pure functions so the layout is testable without a DOM.

use chrono::{NaiveDate, NaiveDateTime};

/// Horizontal scale of the grid.
pub const PIXELES_POR_HORA: f64 = 60.0;
/// Minimum rendered width so short intervals stay visible and hoverable.
pub const ANCHO_MINIMO: f64 = 20.0;
/// Width of the full 24-hour axis.
pub const ANCHO_TOTAL: f64 = 24.0 * PIXELES_POR_HORA;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloqueGeometria {
    pub left: f64,
    pub width: f64,
}

fn inicio_del_dia(dia: NaiveDate) -> NaiveDateTime {
    dia.and_hms_opt(0, 0, 0).expect("medianoche válida")
}

fn fin_del_dia(dia: NaiveDate) -> NaiveDateTime {
    dia.and_hms_milli_opt(23, 59, 59, 999).expect("fin de día válido")
}

fn offset_horas(momento: NaiveDateTime, dia: NaiveDate) -> f64 {
    (momento - inicio_del_dia(dia)).num_seconds() as f64 / 3600.0
}

/// Block for one interval on the day `dia`, clipped to the visible window.
///
/// An interval with no end is treated as still open and clipped against
/// `ahora` rather than midnight, so an in-progress state renders as a block
/// ending at "now". Returns `None` when the interval doesn't overlap the
/// day at all.
pub fn geometria_bloque(
    inicio: NaiveDateTime,
    fin: Option<NaiveDateTime>,
    dia: NaiveDate,
    ahora: NaiveDateTime,
) -> Option<BloqueGeometria> {
    let fin_efectivo_bruto = fin.unwrap_or(ahora);
    let desde_dia = inicio_del_dia(dia);
    let hasta_dia = fin_del_dia(dia);

    if inicio > hasta_dia || fin_efectivo_bruto < desde_dia {
        return None;
    }

    let inicio_efectivo = inicio.max(desde_dia);
    let fin_efectivo = fin_efectivo_bruto.min(hasta_dia);

    let desde = offset_horas(inicio_efectivo, dia);
    let hasta = offset_horas(fin_efectivo, dia);

    let left = desde * PIXELES_POR_HORA;
    let width = ((hasta - desde) * PIXELES_POR_HORA).max(ANCHO_MINIMO);

    Some(BloqueGeometria { left, width })
}

/// Pixel offset of the "current time" marker, only when `dia` is today.
pub fn marcador_hora_actual(dia: NaiveDate, ahora: NaiveDateTime) -> Option<f64> {
    (ahora.date() == dia).then(|| offset_horas(ahora, dia) * PIXELES_POR_HORA)
}

/// Label density tier for a rendered block width. Wider blocks carry
/// progressively more text; no text-measurement pass needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NivelEtiqueta {
    /// Only the abbreviated type code.
    Abreviado,
    /// Full type label.
    Tipo,
    /// Type label plus start time and duration.
    TipoYHora,
    /// Everything, including truncated notes.
    Completo,
}

impl NivelEtiqueta {
    pub fn para_ancho(width: f64) -> Self {
        if width > 150.0 {
            NivelEtiqueta::Completo
        } else if width > 100.0 {
            NivelEtiqueta::TipoYHora
        } else if width > 60.0 {
            NivelEtiqueta::Tipo
        } else {
            NivelEtiqueta::Abreviado
        }
    }
}

/// Notes clipped for in-block display.
pub fn truncar_texto(texto: &str, maximo: usize) -> String {
    if texto.chars().count() > maximo {
        let cortado: String = texto.chars().take(maximo).collect();
        format!("{}...", cortado)
    } else {
        texto.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dia() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn hora(h: u32, m: u32) -> NaiveDateTime {
        dia().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn bloque_dentro_del_dia() {
        let bloque = geometria_bloque(hora(6, 0), Some(hora(8, 30)), dia(), hora(12, 0)).unwrap();
        assert_eq!(bloque.left, 6.0 * PIXELES_POR_HORA);
        assert_eq!(bloque.width, 2.5 * PIXELES_POR_HORA);
    }

    #[test]
    fn bloque_abierto_termina_en_ahora() {
        let ahora = hora(14, 45);
        let bloque = geometria_bloque(hora(13, 0), None, dia(), ahora).unwrap();
        let marcador = marcador_hora_actual(dia(), ahora).unwrap();
        // The open block's right edge sits exactly on the live marker.
        assert!((bloque.left + bloque.width - marcador).abs() < 1e-9);
    }

    #[test]
    fn bloque_recortado_a_los_bordes_del_dia() {
        // Started the previous evening, ends mid-morning.
        let inicio = dia().pred_opt().unwrap().and_hms_opt(22, 0, 0).unwrap();
        let bloque = geometria_bloque(inicio, Some(hora(3, 0)), dia(), hora(12, 0)).unwrap();
        assert_eq!(bloque.left, 0.0);
        assert_eq!(bloque.width, 3.0 * PIXELES_POR_HORA);

        // Runs past midnight into the next day.
        let fin = dia().succ_opt().unwrap().and_hms_opt(2, 0, 0).unwrap();
        let bloque = geometria_bloque(hora(22, 0), Some(fin), dia(), hora(23, 0)).unwrap();
        assert_eq!(bloque.left, 22.0 * PIXELES_POR_HORA);
        assert!(bloque.left + bloque.width <= ANCHO_TOTAL);
    }

    #[test]
    fn intervalo_sin_solapamiento_se_omite() {
        // Entirely before the day.
        let ayer = dia().pred_opt().unwrap();
        let inicio = ayer.and_hms_opt(8, 0, 0).unwrap();
        let fin = ayer.and_hms_opt(10, 0, 0).unwrap();
        assert!(geometria_bloque(inicio, Some(fin), dia(), hora(12, 0)).is_none());

        // Entirely after the day.
        let manana = dia().succ_opt().unwrap();
        let inicio = manana.and_hms_opt(8, 0, 0).unwrap();
        assert!(geometria_bloque(inicio, None, dia(), manana.and_hms_opt(9, 0, 0).unwrap()).is_none());
    }

    #[test]
    fn intervalo_corto_respeta_ancho_minimo() {
        let bloque = geometria_bloque(hora(10, 0), Some(hora(10, 5)), dia(), hora(12, 0)).unwrap();
        assert_eq!(bloque.width, ANCHO_MINIMO);
    }

    #[test]
    fn estado_abierto_viejo_sigue_visible_recortado() {
        // An unclosed state from three days ago still produces a block
        // covering the whole visible day.
        let inicio = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let bloque = geometria_bloque(inicio, None, dia(), hora(15, 0)).unwrap();
        assert_eq!(bloque.left, 0.0);
        let marcador = marcador_hora_actual(dia(), hora(15, 0)).unwrap();
        assert!((bloque.left + bloque.width - marcador).abs() < 1e-9);
    }

    #[test]
    fn marcador_solo_para_hoy() {
        assert!(marcador_hora_actual(dia(), hora(9, 30)).is_some());
        let otro_dia = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        assert!(marcador_hora_actual(otro_dia, hora(9, 30)).is_none());
        assert_eq!(
            marcador_hora_actual(dia(), hora(9, 30)).unwrap(),
            9.5 * PIXELES_POR_HORA
        );
    }

    #[test]
    fn niveles_de_etiqueta_por_ancho() {
        assert_eq!(NivelEtiqueta::para_ancho(20.0), NivelEtiqueta::Abreviado);
        assert_eq!(NivelEtiqueta::para_ancho(60.0), NivelEtiqueta::Abreviado);
        assert_eq!(NivelEtiqueta::para_ancho(80.0), NivelEtiqueta::Tipo);
        assert_eq!(NivelEtiqueta::para_ancho(120.0), NivelEtiqueta::TipoYHora);
        assert_eq!(NivelEtiqueta::para_ancho(200.0), NivelEtiqueta::Completo);
    }

    #[test]
    fn truncado_de_observaciones() {
        assert_eq!(truncar_texto("corto", 25), "corto");
        let largo = "una observación realmente larga sobre la parada";
        let truncado = truncar_texto(largo, 25);
        assert!(truncado.ends_with("..."));
        assert_eq!(truncado.chars().count(), 28);
    }
}
