use chrono::NaiveDate;
use contracts::domain::timeline::{TimelineDia, TimelineParams};

use crate::shared::http;

/// Day view: every line's state intervals for `fecha`, optionally filtered
/// by sector and line.
pub async fn timeline(fecha: NaiveDate, params: &TimelineParams) -> Result<TimelineDia, String> {
    http::get_query(
        &format!("/estados-linea/timeline/{}", fecha.format("%Y-%m-%d")),
        params,
    )
    .await
}
