//! Date and time formatting shared by every screen.

use chrono::{NaiveDate, NaiveDateTime};

/// `2025-03-15` -> `15/03/2025`
pub fn format_fecha(fecha: NaiveDate) -> String {
    fecha.format("%d/%m/%Y").to_string()
}

/// `2025-03-15T14:02:26` -> `15/03/2025 14:02`
pub fn format_fecha_hora(fecha_hora: NaiveDateTime) -> String {
    fecha_hora.format("%d/%m/%Y %H:%M").to_string()
}

/// `2025-03-15T14:02:26` -> `14:02`
pub fn format_hora(fecha_hora: NaiveDateTime) -> String {
    fecha_hora.format("%H:%M").to_string()
}

/// Minutes -> `"3h 20m"` (or `"45m"` under an hour).
pub fn duracion_legible(minutos: i64) -> String {
    if minutos < 60 {
        format!("{}m", minutos)
    } else {
        format!("{}h {}m", minutos / 60, minutos % 60)
    }
}

/// Value for an `<input type="date">`, always ISO.
pub fn fecha_input(fecha: NaiveDate) -> String {
    fecha.format("%Y-%m-%d").to_string()
}

/// Parse an `<input type="date">` value; empty string is `None`.
pub fn parse_fecha_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parse an `<input type="datetime-local">` value (no seconds or with them).
pub fn parse_fecha_hora_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Value for an `<input type="datetime-local">`.
pub fn fecha_hora_input(fecha_hora: NaiveDateTime) -> String {
    fecha_hora.format("%Y-%m-%dT%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_are_stable() {
        let fecha = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_fecha(fecha), "05/03/2025");
        let fh = fecha.and_hms_opt(14, 2, 26).unwrap();
        assert_eq!(format_fecha_hora(fh), "05/03/2025 14:02");
        assert_eq!(format_hora(fh), "14:02");
    }

    #[test]
    fn duracion_switches_units_at_one_hour() {
        assert_eq!(duracion_legible(45), "45m");
        assert_eq!(duracion_legible(60), "1h 0m");
        assert_eq!(duracion_legible(200), "3h 20m");
    }

    #[test]
    fn input_roundtrip() {
        let fecha = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(parse_fecha_input(&fecha_input(fecha)), Some(fecha));
        assert_eq!(parse_fecha_input(""), None);

        let fh = fecha.and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(parse_fecha_hora_input(&fecha_hora_input(fh)), Some(fh));
        assert_eq!(
            parse_fecha_hora_input("2025-12-31T23:59:12"),
            fecha.and_hms_opt(23, 59, 12)
        );
    }
}
