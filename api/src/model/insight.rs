use kernel::model::insight::ParkingReport;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
    pub insight: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingReportResponse {
    pub summary: String,
    pub total_spent: f64,
    pub most_visited_lot: String,
    pub savings_tip: String,
}

impl From<ParkingReport> for ParkingReportResponse {
    fn from(value: ParkingReport) -> Self {
        let ParkingReport {
            summary,
            total_spent,
            most_visited_lot,
            savings_tip,
        } = value;
        Self {
            summary,
            total_spent,
            most_visited_lot,
            savings_tip,
        }
    }
}
