//! Derived-value previews for the batch form.
//!
//! Pure functions, free of UI bindings. The server recomputes both values
//! on save and may override the preview; these only exist so the operator
//! sees the result before submitting.

use chrono::{Months, NaiveDate};

/// Shelf life applied when the product doesn't define one.
pub const ANOS_VENCIMIENTO_DEFECTO: i32 = 2;

/// Total liters: `(pallets × unidades_por_pallet + parciales) × litros_por_unidad`.
pub fn litros_totales(
    pallets: i64,
    unidades_por_pallet: i64,
    parciales: i64,
    litros_por_unidad: f64,
) -> f64 {
    let total_unidades = pallets * unidades_por_pallet + parciales;
    total_unidades as f64 * litros_por_unidad
}

/// Expiry date: production date plus exactly `anos` calendar years.
///
/// Calendar arithmetic keeps the day-of-month; a Feb 29 start lands on
/// Feb 28 of a non-leap target year.
pub fn fecha_vencimiento(fecha_produccion: NaiveDate, anos: i32) -> NaiveDate {
    let meses = Months::new(anos.max(0) as u32 * 12);
    fecha_produccion
        .checked_add_months(meses)
        .unwrap_or(fecha_produccion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn litros_formula() {
        // (2 pallets × 48 + 5 sueltas) × 20 L
        assert_eq!(litros_totales(2, 48, 5, 20.0), 2020.0);
        assert_eq!(litros_totales(0, 48, 0, 20.0), 0.0);
        assert_eq!(litros_totales(3, 1, 0, 1.0), 3.0);
    }

    #[test]
    fn litros_recompute_is_idempotent() {
        let primero = litros_totales(4, 36, 12, 18.5);
        let segundo = litros_totales(4, 36, 12, 18.5);
        assert_eq!(primero, segundo);
    }

    #[test]
    fn vencimiento_suma_anos_calendario() {
        assert_eq!(
            fecha_vencimiento(fecha(2025, 3, 10), 2),
            fecha(2027, 3, 10)
        );
        assert_eq!(fecha_vencimiento(fecha(2025, 3, 10), 0), fecha(2025, 3, 10));
    }

    #[test]
    fn vencimiento_alinea_29_de_febrero() {
        // Feb 29 + 1 year has no Feb 29 available
        assert_eq!(fecha_vencimiento(fecha(2024, 2, 29), 1), fecha(2025, 2, 28));
        // but a leap target year keeps the 29th
        assert_eq!(fecha_vencimiento(fecha(2024, 2, 29), 4), fecha(2028, 2, 29));
    }

    #[test]
    fn cambiar_de_producto_recalcula_con_la_nueva_vida_util() {
        let produccion = fecha(2025, 6, 1);
        let con_tres = fecha_vencimiento(produccion, 3);
        let con_cinco = fecha_vencimiento(produccion, 5);
        assert_eq!(con_tres, fecha(2028, 6, 1));
        assert_eq!(con_cinco, fecha(2030, 6, 1));
    }
}
